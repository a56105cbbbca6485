use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: String,
}

impl WalletBalance {
    pub fn new(currency: &str, amount: f64, blockchain: &str) -> Self {
        WalletBalance {
            currency: currency.to_string(),
            amount,
            blockchain: blockchain.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedWalletBalance {
    pub currency: String,
    pub amount: f64,
    pub blockchain: String,
    pub formatted: String,
    pub usd_value: f64,
}

/// Supplies the balances to project. A live wallet API plugs in here.
pub trait WalletSource: Send + Sync {
    fn balances(&self) -> Vec<WalletBalance>;
}

/// Fixed balances used until a real wallet backend is wired in.
#[derive(Debug, Clone)]
pub struct SeededWallet {
    balances: Vec<WalletBalance>,
}

impl SeededWallet {
    pub fn new() -> Self {
        SeededWallet {
            balances: vec![
                WalletBalance::new("ETH", 2.5, "Ethereum"),
                WalletBalance::new("OSMO", 100.0, "Osmosis"),
                WalletBalance::new("ARB", 50.0, "Arbitrum"),
                WalletBalance::new("ZIL", 0.0, "Zilliqa"),
                WalletBalance::new("NEO", 10.0, "Neo"),
            ],
        }
    }

    pub fn from(balances: Vec<WalletBalance>) -> Self {
        SeededWallet { balances }
    }
}

impl Default for SeededWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletSource for SeededWallet {
    fn balances(&self) -> Vec<WalletBalance> {
        self.balances.clone()
    }
}
