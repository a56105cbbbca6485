pub mod components;
pub mod config;
pub mod models;
pub mod server;
pub mod utils;
pub mod workers;
