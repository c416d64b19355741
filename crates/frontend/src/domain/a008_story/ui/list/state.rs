use crate::shared::data::seed;
use contracts::domain::a008_story::Story;
use contracts::shared::listing::ListEngine;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 6;

#[derive(Clone, Debug)]
pub struct StoryListState {
    pub engine: ListEngine<Story>,
}

impl Default for StoryListState {
    fn default() -> Self {
        Self {
            engine: ListEngine::new(seed::seed_stories(), PAGE_SIZE),
        }
    }
}

pub fn create_state() -> RwSignal<StoryListState> {
    RwSignal::new(StoryListState::default())
}
