//! Implementations of ports (hexagonal adapters).

pub mod file;
pub mod http;
pub mod lenient;
pub mod opinion;
pub mod polymarket;
