pub mod price;
pub mod prices;
pub mod wallet;
