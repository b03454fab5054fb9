use std::io::Write;

use tempfile::NamedTempFile;

pub fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("arbmatch-test-")
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

pub const MATCH_TABLE: &str = r#"[
    {"market_a_title": "Will the Fed cut rates in March?", "market_b_from_title": "Fed March decision - Cut"},
    {"market_a_title": "Will BTC hit 100k in 2025?", "market_b_from_title": "BTC 100k 2025"}
]"#;

pub const POLY_POSITIONS: &str = r#"[
    {"asset": "p0", "conditionId": "0xfed", "title": "Will the Fed cut rates in March?",
     "outcome": "Yes", "size": 760, "initialValue": 728.61, "curPrice": 0.993,
     "entryTimestamp": 1714521600},
    {"asset": "p1", "conditionId": "0xeth", "title": "Ethereum above 5000 on December 31",
     "outcome": "No", "size": 100, "initialValue": 40, "curPrice": 0.45}
]"#;

pub const OPINION_POSITIONS: &str = r#"{"errno": 0, "result": {"list": [
    {"tokenId": "o0", "rootMarketTitle": "Fed March decision", "marketTitle": "Cut",
     "outcomeSideEnum": "No", "sharesOwned": "1000", "avgEntryPrice": "0.80",
     "currentValueInQuoteToken": "836", "totalCostInQuoteToken": "805.25",
     "unrealizedPnl": "30.75", "latestPrice": "0.836"},
    {"tokenId": "o1", "rootMarketTitle": "Solana ETF approved", "marketTitle": "",
     "outcomeSideEnum": "Yes", "sharesOwned": "50", "avgEntryPrice": "0.3",
     "currentValueInQuoteToken": "20"}
]}}"#;
