use log::{error, info, LevelFilter};
use price_board::{
    components::balances::PriorityTable,
    config::settings::AppConfig,
    models::wallet::SeededWallet,
    server::{run_server, AppState},
    workers::price_poller::PricePoller,
};
use simple_logger::SimpleLogger;
use std::{process::ExitCode, sync::Arc};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = SimpleLogger::new()
        .with_colors(true)
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("logger init failed: {e}");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("config: {}", e);

            return ExitCode::FAILURE;
        }
    };

    let mut poller = match PricePoller::from_config(&config) {
        Ok(poller) => poller,
        Err(e) => {
            error!("http client: {:?}", e);

            return ExitCode::FAILURE;
        }
    };

    poller.start();

    let state = AppState::new(
        poller.prices(),
        Arc::new(SeededWallet::new()),
        PriorityTable::default(),
    );

    let code = tokio::select! {
        res = run_server(state, config.port) => match res {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("server: {}", e);

                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down");

            ExitCode::SUCCESS
        }
    };

    poller.dispose().await;

    code
}
