use crate::shared::data::seed;
use contracts::domain::a003_sales_manager::SalesManager;
use contracts::shared::listing::ListEngine;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Debug)]
pub struct SalesManagerListState {
    pub engine: ListEngine<SalesManager>,
}

impl Default for SalesManagerListState {
    fn default() -> Self {
        Self {
            engine: ListEngine::new(seed::seed_sales_managers(), PAGE_SIZE),
        }
    }
}

pub fn create_state() -> RwSignal<SalesManagerListState> {
    RwSignal::new(SalesManagerListState::default())
}
