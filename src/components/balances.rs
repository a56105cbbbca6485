use std::collections::HashMap;

use crate::{
    config::priority::{CHAIN_PRIORITIES, DEFAULT_PRIORITY},
    models::{
        price::PriceCache,
        wallet::{FormattedWalletBalance, WalletBalance},
    },
};

/// Display rank per blockchain, with a fallback rank for unknown chains.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    ranks: HashMap<String, i32>,
    default_rank: i32,
}

impl PriorityTable {
    pub fn new(ranks: &[(&str, i32)], default_rank: i32) -> Self {
        let ranks = ranks
            .iter()
            .map(|(chain, rank)| (chain.to_string(), *rank))
            .collect();

        PriorityTable {
            ranks,
            default_rank,
        }
    }

    pub fn priority(&self, blockchain: &str) -> i32 {
        self.ranks
            .get(blockchain)
            .copied()
            .unwrap_or(self.default_rank)
    }

    pub fn default_rank(&self) -> i32 {
        self.default_rank
    }

    // The default rank doubles as the exclusion threshold, so unknown chains never show.
    fn is_listed(&self, balance: &WalletBalance) -> bool {
        self.priority(&balance.blockchain) > self.default_rank
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        PriorityTable::new(&CHAIN_PRIORITIES, DEFAULT_PRIORITY)
    }
}

/// Filters, orders and formats balances for display.
///
/// Keeps balances on listed chains with a positive amount, orders them by
/// descending chain priority (stable for equal ranks), and prices each one
/// against `prices`. A missing quote values the balance at zero.
pub fn project_balances(
    balances: &[WalletBalance],
    prices: &PriceCache,
    table: &PriorityTable,
) -> Vec<FormattedWalletBalance> {
    let mut ranked: Vec<(i32, &WalletBalance)> = balances
        .iter()
        .filter(|balance| table.is_listed(balance) && balance.amount > 0.0)
        .map(|balance| (table.priority(&balance.blockchain), balance))
        .collect();

    ranked.sort_by(|(lhs, _), (rhs, _)| rhs.cmp(lhs));

    ranked
        .into_iter()
        .map(|(_, balance)| format_balance(balance, prices))
        .collect()
}

fn format_balance(balance: &WalletBalance, prices: &PriceCache) -> FormattedWalletBalance {
    let price = prices.price(&balance.currency).unwrap_or(0.0);

    FormattedWalletBalance {
        currency: balance.currency.clone(),
        amount: balance.amount,
        blockchain: balance.blockchain.clone(),
        formatted: format!("{:.2}", balance.amount),
        usd_value: price * balance.amount,
    }
}
