//! Venue-agnostic matching and economics.

mod economics;
mod id;
mod lookup;
mod match_table;
mod money;
mod position;
mod summary;

pub mod matching;
pub mod text;

// Core domain types
pub use id::{ConditionId, GroupId, TokenId};
pub use money::{parse_lenient, Price, Volume, CENTS_PER_DOLLAR};
pub use position::{OpinionPosition, PolyPosition, Side, Venue};

// Curated table and its index
pub use lookup::LookupIndex;
pub use match_table::{MatchGroup, MatchTable};

// Matching
pub use matching::{
    jaccard_similarity, match_exact, match_fuzzy, reconcile, MatchMethod, MatchResult,
    MatchedPosition, MatchingConfig,
};

// Economics
pub use economics::{
    annualized_yield, holding_days, holding_label, opinion_current_price, ArbitrageEconomics,
    EconomicsConfig,
};
pub use summary::{PortfolioSummary, ShareSummary};
