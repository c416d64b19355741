use crate::shared::data::seed;
use contracts::domain::a005_resource::Resource;
use contracts::shared::listing::ListEngine;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 6;

#[derive(Clone, Debug)]
pub struct ResourceListState {
    pub engine: ListEngine<Resource>,
}

impl Default for ResourceListState {
    fn default() -> Self {
        Self {
            engine: ListEngine::new(seed::seed_resources(), PAGE_SIZE),
        }
    }
}

pub fn create_state() -> RwSignal<ResourceListState> {
    RwSignal::new(ResourceListState::default())
}
