use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::{error, info};
use std::sync::Arc;
use std::{io, net::SocketAddr};
use tokio::net::TcpListener;
use tokio::sync::RwLock;

use routers::route;

use crate::{
    components::balances::PriorityTable,
    models::{prices::Prices, wallet::WalletSource},
};

mod routers;

/// Everything the handlers read. Cheap to clone per connection.
#[derive(Clone)]
pub struct AppState {
    pub prices: Arc<RwLock<Prices>>,
    pub wallet: Arc<dyn WalletSource>,
    pub priorities: Arc<PriorityTable>,
}

impl AppState {
    pub fn new(
        prices: Arc<RwLock<Prices>>,
        wallet: Arc<dyn WalletSource>,
        priorities: PriorityTable,
    ) -> Self {
        AppState {
            prices,
            wallet,
            priorities: Arc::new(priorities),
        }
    }
}

pub async fn run_server(state: AppState, port: u16) -> Result<(), io::Error> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(&addr).await?;

    info!("Listening on http://{}", addr);

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let state = state.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req| route(req, state.clone()));

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                error!("Failed to serve connection: {:?}", err);
            }
        });
    }
}
