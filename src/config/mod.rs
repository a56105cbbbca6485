pub mod prices;
pub mod priority;
pub mod server;
pub mod settings;
pub mod swap;
