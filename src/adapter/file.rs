//! JSON file inputs: the curated match table and saved position snapshots.
//!
//! Snapshots use the venues' own wire formats, so a response body saved from
//! either API can be fed back in offline.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::opinion::dto::{Envelope, PositionRecord as OpinionRecord, PositionsResult};
use super::polymarket::dto::PositionRecord as PolyRecord;
use crate::domain::{MatchTable, OpinionPosition, PolyPosition};
use crate::error::Result;

/// Load the curated match table from a JSON array of groups.
pub fn load_match_table(path: &Path) -> Result<MatchTable> {
    let content = fs::read_to_string(path)?;
    let table: MatchTable = serde_json::from_str(&content)?;
    info!(path = %path.display(), groups = table.len(), "Loaded match table");
    Ok(table)
}

/// Load Polymarket positions from a `/positions` response body.
pub fn load_poly_positions(path: &Path) -> Result<Vec<PolyPosition>> {
    let content = fs::read_to_string(path)?;
    let records: Vec<PolyRecord> = serde_json::from_str(&content)?;
    info!(path = %path.display(), count = records.len(), "Loaded Polymarket positions");
    Ok(records.into_iter().map(|r| r.into_position(None)).collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OpinionSnapshot {
    List(Vec<OpinionRecord>),
    Response(Envelope<PositionsResult>),
}

/// Load Opinion positions from a bare array or a `/positions/user` body.
pub fn load_opinion_positions(path: &Path) -> Result<Vec<OpinionPosition>> {
    let content = fs::read_to_string(path)?;
    let records = match serde_json::from_str::<OpinionSnapshot>(&content)? {
        OpinionSnapshot::List(list) => list,
        OpinionSnapshot::Response(envelope) => envelope
            .result
            .map(PositionsResult::into_records)
            .unwrap_or_default(),
    };
    info!(path = %path.display(), count = records.len(), "Loaded Opinion positions");
    Ok(records.into_iter().map(OpinionPosition::from).collect())
}
