pub mod balances;
pub mod prices;
pub mod swap;
