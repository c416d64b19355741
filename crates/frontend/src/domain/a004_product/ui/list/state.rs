use crate::shared::data::seed;
use contracts::domain::a004_product::Product;
use contracts::shared::listing::{FilterState, ListEngine, SortOrder};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Размер страницы каталога: столько карточек добавляет каждый
/// «Показать ещё» или докрутка до конца списка
pub const PAGE_SIZE: usize = 8;

/// Нижние/верхние границы диапазонов по умолчанию, когда поле ввода
/// оставлено пустым. Бесконечность не годится: снимок фильтра уходит в
/// form state как JSON.
pub const PRICE_MAX_DEFAULT: f64 = 10_000_000.0;
pub const MIN_ORDER_MAX_DEFAULT: f64 = 10_000.0;

/// Снимок фильтров и сортировки для form state таба: каталог
/// восстанавливает их при повторном открытии
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub filter: FilterState,
    pub sort: SortOrder,
}

#[derive(Clone, Debug)]
pub struct CatalogState {
    /// Движок списка: записи + фильтр + сортировка + пейджер
    pub engine: ListEngine<Product>,

    /// Включён ли AI-подбор (поиск уходит через имитацию запроса)
    pub ai_mode: bool,

    /// Идёт «запрос» AI-подбора
    pub ai_busy: bool,

    /// Поколение поискового запроса: ответ устаревшего поколения
    /// отбрасывается, а не применяется поверх нового
    pub search_generation: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            engine: ListEngine::new(seed::seed_products(), PAGE_SIZE),
            ai_mode: false,
            ai_busy: false,
            search_generation: 0,
        }
    }
}

// Create state within component scope instead of thread-local
// This ensures state is properly disposed when component unmounts
pub fn create_state() -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::default())
}
