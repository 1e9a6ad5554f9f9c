use common::models::{CryptoAsset, CryptoDetails, CryptoHistoryPoint};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Market-data slice: the asset listing, the history series and detail
/// record for the selected asset, and the shared request status.
///
/// The three fetch kinds (list, history, details) share one
/// outstanding-request counter and one error field, so the slice reads
/// as loading while any of them is in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoState {
    pub list: Vec<CryptoAsset>,
    pub history: Vec<CryptoHistoryPoint>,
    pub details: Option<CryptoDetails>,
    pub selected: String,
    in_flight: u32,
    pub error: Option<String>,
}

impl Default for CryptoState {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            history: Vec::new(),
            details: None,
            selected: "bitcoin".to_string(),
            in_flight: 0,
            error: None,
        }
    }
}

impl CryptoState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

#[derive(Debug, Clone)]
pub enum CryptoAction {
    ListPending,
    ListFulfilled(Vec<CryptoAsset>),
    ListRejected(String),
    HistoryPending,
    HistoryFulfilled(Vec<CryptoHistoryPoint>),
    HistoryRejected(String),
    DetailsPending,
    DetailsFulfilled(Box<CryptoDetails>),
    DetailsRejected(String),
    SetSelected(String),
    /// Overlay fresh prices onto the current listing, keyed by asset id.
    UpdatePrices(HashMap<String, String>),
}

pub(crate) fn apply(state: &mut CryptoState, action: CryptoAction) {
    match action {
        CryptoAction::ListPending
        | CryptoAction::HistoryPending
        | CryptoAction::DetailsPending => {
            state.in_flight += 1;
            state.error = None;
        }
        CryptoAction::ListFulfilled(list) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.error = None;
            state.list = list;
        }
        CryptoAction::HistoryFulfilled(history) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.error = None;
            state.history = history;
        }
        CryptoAction::DetailsFulfilled(details) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.error = None;
            state.details = Some(*details);
        }
        CryptoAction::ListRejected(message)
        | CryptoAction::HistoryRejected(message)
        | CryptoAction::DetailsRejected(message) => {
            state.in_flight = state.in_flight.saturating_sub(1);
            state.error = Some(message);
        }
        CryptoAction::SetSelected(id) => {
            state.selected = id;
        }
        CryptoAction::UpdatePrices(prices) => {
            for asset in &mut state.list {
                if let Some(price) = prices.get(&asset.id) {
                    asset.price_usd = price.clone();
                }
            }
        }
    }
}
