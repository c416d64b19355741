//! Движок списков: фильтрация, сортировка и постраничный показ в памяти.
//!
//! Каждая страница консоли держит полный набор записей и прогоняет его
//! через один и тот же конвейер:
//!
//! ```text
//! records -> FilterState::evaluate -> SortOrder::apply -> Pager::slice
//! ```
//!
//! Пересчёт всегда полный и синхронный — объёмы данных на странице
//! (десятки, редко сотни записей) не оправдывают инкрементальные схемы.

pub mod engine;
pub mod filter;
pub mod money;
pub mod paginate;
pub mod sort;

pub use engine::ListEngine;
pub use filter::{Facet, FilterState, ListRecord, RangeBound, RangeField, ToggleField};
pub use money::{format_money, parse_amount, sort_magnitude};
pub use paginate::Pager;
pub use sort::SortOrder;
