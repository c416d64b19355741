use crate::shared::data::seed;
use contracts::domain::a001_brand::Brand;
use contracts::shared::listing::ListEngine;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Debug)]
pub struct BrandListState {
    pub engine: ListEngine<Brand>,
}

impl Default for BrandListState {
    fn default() -> Self {
        Self {
            engine: ListEngine::new(seed::seed_brands(), PAGE_SIZE),
        }
    }
}

pub fn create_state() -> RwSignal<BrandListState> {
    RwSignal::new(BrandListState::default())
}
