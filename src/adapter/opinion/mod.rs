//! Opinion integration (open API, requires an API key).

pub mod client;
pub mod dto;
pub mod settings;

pub use client::OpinionClient;
pub use settings::{OpinionConfig, API_KEY_ENV};
