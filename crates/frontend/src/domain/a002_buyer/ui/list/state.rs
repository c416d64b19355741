use crate::shared::data::seed;
use contracts::domain::a002_buyer::Buyer;
use contracts::shared::listing::ListEngine;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Debug)]
pub struct BuyerListState {
    pub engine: ListEngine<Buyer>,
}

impl Default for BuyerListState {
    fn default() -> Self {
        Self {
            engine: ListEngine::new(seed::seed_buyers(), PAGE_SIZE),
        }
    }
}

pub fn create_state() -> RwSignal<BuyerListState> {
    RwSignal::new(BuyerListState::default())
}
