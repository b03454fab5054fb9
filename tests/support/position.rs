use rust_decimal::Decimal;

use arbmatch::domain::{
    LookupIndex, MatchGroup, MatchTable, OpinionPosition, PolyPosition, TokenId,
};

pub fn make_poly(asset: &str, title: &str, outcome: &str) -> PolyPosition {
    PolyPosition {
        asset: TokenId::new(asset),
        title: title.into(),
        outcome: outcome.into(),
        ..Default::default()
    }
}

pub fn make_poly_priced(
    asset: &str,
    title: &str,
    size: Decimal,
    initial_value: Decimal,
    cur_price: Decimal,
) -> PolyPosition {
    PolyPosition {
        size,
        initial_value,
        cur_price,
        ..make_poly(asset, title, "Yes")
    }
}

pub fn make_opinion(token: &str, root: &str, market: &str) -> OpinionPosition {
    OpinionPosition {
        token_id: TokenId::new(token),
        root_market_title: root.into(),
        market_title: market.into(),
        outcome_side: "No".into(),
        ..Default::default()
    }
}

pub fn make_index(groups: &[(&str, &str)]) -> LookupIndex {
    let table: MatchTable = groups
        .iter()
        .map(|(a, b)| MatchGroup::new(*a, *b))
        .collect();
    LookupIndex::build(&table)
}
