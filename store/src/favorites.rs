use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Favorites slice: two independent sets of identifiers. Pure
/// synchronous state, no network dependency, no failure mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoritesState {
    pub cities: HashSet<String>,
    pub cryptos: HashSet<String>,
}

impl FavoritesState {
    pub fn is_favorite_city(&self, city: &str) -> bool {
        self.cities.contains(city)
    }

    pub fn is_favorite_crypto(&self, id: &str) -> bool {
        self.cryptos.contains(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteKind {
    City,
    Crypto,
}

#[derive(Debug, Clone)]
pub enum FavoritesAction {
    Toggle { kind: FavoriteKind, id: String },
}

pub(crate) fn apply(state: &mut FavoritesState, action: FavoritesAction) {
    match action {
        FavoritesAction::Toggle { kind, id } => {
            let set = match kind {
                FavoriteKind::City => &mut state.cities,
                FavoriteKind::Crypto => &mut state.cryptos,
            };
            if !set.remove(&id) {
                set.insert(id);
            }
        }
    }
}
