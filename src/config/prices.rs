pub const PRICES_API_URL: &str = "https://interview.switcheo.com/prices.json";
pub const POLL_INTERVAL_SECONDS: u64 = 30;
pub const HTTP_TIMEOUT_SECONDS: u64 = 10;
