//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! - [`PolyPositionSource`] - Polymarket positions for a wallet
//! - [`OpinionPositionSource`] - Opinion positions for a wallet

mod source;

pub use source::{OpinionPositionSource, PolyPositionSource};
