use crate::crypto::{self, CryptoAction, CryptoState};
use crate::favorites::{self, FavoritesAction, FavoritesState};
use crate::news::{self, NewsAction, NewsState};
use crate::notifications::{self, NotificationsAction, NotificationsState};
use crate::weather::{self, WeatherAction, WeatherState};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tokio::sync::watch;
use tracing::trace;

/// The full state tree: one field per slice, cheaply cloneable so
/// `get_state` hands out snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub crypto: CryptoState,
    pub weather: WeatherState,
    pub news: NewsState,
    pub favorites: FavoritesState,
    pub notifications: NotificationsState,
}

/// Every mutation of the state tree, routed to the owning slice.
#[derive(Debug, Clone)]
pub enum Action {
    Crypto(CryptoAction),
    Weather(WeatherAction),
    News(NewsAction),
    Favorites(FavoritesAction),
    Notifications(NotificationsAction),
}

/// The single source of truth. Constructed explicitly and passed by
/// `Arc` to whoever needs it; never a process-global.
///
/// `dispatch` and `get_state` are synchronous; subscribers get a
/// `watch::Receiver` whose change flag is raised after every dispatch,
/// whether or not the action changed anything observable.
pub struct Store {
    state: RwLock<AppState>,
    tx: watch::Sender<AppState>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        let (tx, _rx) = watch::channel(state.clone());
        Self {
            state: RwLock::new(state),
            tx,
        }
    }

    pub fn dispatch(&self, action: Action) {
        trace!(?action, "dispatch");

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        match action {
            Action::Crypto(a) => crypto::apply(&mut state.crypto, a),
            Action::Weather(a) => weather::apply(&mut state.weather, a),
            Action::News(a) => news::apply(&mut state.news, a),
            Action::Favorites(a) => favorites::apply(&mut state.favorites, a),
            Action::Notifications(a) => notifications::apply(&mut state.notifications, a),
        }

        // Notify on every dispatch, no diffing. Published while the
        // write lock is held so snapshots reach the channel in dispatch
        // order; a send outside the lock could race a concurrent
        // dispatch and leave subscribers on the older snapshot.
        self.tx.send_replace(state.clone());
    }

    pub fn get_state(&self) -> AppState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
