use crate::shared::data::seed;
use contracts::domain::a007_event::ShowroomEvent;
use contracts::shared::listing::ListEngine;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 6;

#[derive(Clone, Debug)]
pub struct EventListState {
    pub engine: ListEngine<ShowroomEvent>,
}

impl Default for EventListState {
    fn default() -> Self {
        Self {
            engine: ListEngine::new(seed::seed_events(), PAGE_SIZE),
        }
    }
}

pub fn create_state() -> RwSignal<EventListState> {
    RwSignal::new(EventListState::default())
}
