pub mod price_poller;
