use crate::shared::data::seed;
use contracts::domain::a006_order::Order;
use contracts::shared::listing::ListEngine;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 8;

#[derive(Clone, Debug)]
pub struct OrderListState {
    pub engine: ListEngine<Order>,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            engine: ListEngine::new(seed::seed_orders(), PAGE_SIZE),
        }
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}
