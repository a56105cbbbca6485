pub const MAX_SWAP_AMOUNT: f64 = 1_000_000.0;
pub const QUOTE_DECIMALS: usize = 6;
pub const AMOUNT_PATTERN: &str = r"^\d*\.?\d*$";
