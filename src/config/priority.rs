/// Rank given to any blockchain missing from `CHAIN_PRIORITIES`.
/// Balances at or below this rank are excluded from projection.
pub const DEFAULT_PRIORITY: i32 = -99;

pub const CHAIN_PRIORITIES: [(&str, i32); 5] = [
    ("Osmosis", 100),
    ("Ethereum", 50),
    ("Arbitrum", 30),
    ("Zilliqa", 20),
    ("Neo", 20),
];
