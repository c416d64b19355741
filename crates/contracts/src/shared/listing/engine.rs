//! Движок одной страницы-списка: записи + фильтр + сортировка + пейджер.

use super::filter::{Facet, FilterState, ListRecord, RangeField};
use super::paginate::Pager;
use super::sort::SortOrder;

/// Связывает набор записей с состоянием фильтрации, активным
/// компаратором и пейджером.
///
/// Все мутаторы, способные изменить состав выдачи, сбрасывают пейджер
/// на первую страницу — это единственное место, где инвариант
/// поддерживается, страницы сами об этом не думают. Производные
/// вычисления (`filtered`, `visible`) — полный синхронный пересчёт от
/// исходного набора; на десятках-сотнях записей это дешевле любых
/// инкрементальных схем.
#[derive(Debug, Clone)]
pub struct ListEngine<R> {
    records: Vec<R>,
    pub filter: FilterState,
    pub sort: SortOrder,
    pager: Pager,
}

impl<R: ListRecord + Clone> ListEngine<R> {
    /// Создать движок поверх полного набора записей страницы
    pub fn new(records: Vec<R>, page_size: usize) -> Self {
        Self {
            records,
            filter: FilterState::new(),
            sort: SortOrder::default(),
            pager: Pager::new(page_size),
        }
    }

    /// Полная замена набора (обновление страницы); фильтры сохраняются
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.pager.reset();
    }

    /// Исходный набор без фильтрации
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ========================================================================
    // Мутаторы фильтра и сортировки (каждый сбрасывает пейджер)
    // ========================================================================

    pub fn set_category(&mut self, category: Option<String>) {
        self.filter.set_category(category);
        self.pager.reset();
    }

    pub fn set_sub_category(&mut self, sub_category: Option<String>) {
        self.filter.set_sub_category(sub_category);
        self.pager.reset();
    }

    pub fn toggle_term(&mut self, facet: Facet, value: &str) {
        self.filter.toggle(facet, value);
        self.pager.reset();
    }

    pub fn select_only(&mut self, facet: Facet, value: Option<&str>) {
        self.filter.select_only(facet, value);
        self.pager.reset();
    }

    pub fn set_range(&mut self, field: RangeField, min: f64, max: f64) {
        self.filter.set_range(field, min, max);
        self.pager.reset();
    }

    pub fn clear_range(&mut self, field: RangeField) {
        self.filter.clear_range(field);
        self.pager.reset();
    }

    pub fn set_in_stock_only(&mut self, value: bool) {
        self.filter.set_in_stock_only(value);
        self.pager.reset();
    }

    pub fn set_exclusive_only(&mut self, value: bool) {
        self.filter.set_exclusive_only(value);
        self.pager.reset();
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.set_search(term);
        self.pager.reset();
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.pager.reset();
    }

    /// Сбросить фильтры, поиск и сортировку атомарно
    pub fn reset_filters(&mut self) {
        self.filter.reset();
        self.sort = SortOrder::default();
        self.pager.reset();
    }

    /// Восстановить состояние фильтра (например, из form state таба)
    pub fn restore_filter(&mut self, filter: FilterState, sort: SortOrder) {
        self.filter = filter;
        self.sort = sort;
        self.pager.reset();
    }

    // ========================================================================
    // Производные
    // ========================================================================

    /// Отфильтрованный и отсортированный список целиком
    pub fn filtered(&self) -> Vec<R> {
        let mut items: Vec<R> = self
            .records
            .iter()
            .filter(|r| self.filter.evaluate(*r))
            .cloned()
            .collect();
        self.sort.apply(&mut items);
        items
    }

    /// Число записей после фильтрации
    pub fn filtered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| self.filter.evaluate(*r))
            .count()
    }

    /// Видимый префикс выдачи
    pub fn visible(&self) -> Vec<R> {
        let items = self.filtered();
        self.pager.slice(&items).to_vec()
    }

    pub fn visible_count(&self) -> usize {
        self.pager.visible_count(self.filtered_count())
    }

    /// Остались ли скрытые записи
    pub fn has_more(&self) -> bool {
        self.pager.has_more(self.filtered_count())
    }

    /// Открыть следующую страницу; после исчерпания — no-op.
    /// Обработчик скролла может дёргать это сколь угодно часто.
    pub fn load_more(&mut self) {
        let total = self.filtered_count();
        self.pager.advance(total);
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size
    }

    pub fn pages_shown(&self) -> usize {
        self.pager.pages_shown
    }

    /// Точечная правка записи (отметка «избранное» и т.п.).
    ///
    /// Пейджер и фильтры не трогаются: декоративные поля не влияют на
    /// состав выдачи.
    pub fn update_record(&mut self, id: &str, f: impl FnOnce(&mut R)) -> bool {
        match self.records.iter_mut().find(|r| r.record_id() == id) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::filter::ToggleField;
    use crate::shared::listing::money::parse_amount;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: String,
        name: String,
        category: String,
        price: String,
        favorite: bool,
    }

    impl Card {
        fn new(id: &str, name: &str, category: &str, price: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                price: price.to_string(),
                favorite: false,
            }
        }
    }

    impl ListRecord for Card {
        fn record_id(&self) -> String {
            self.id.clone()
        }

        fn search_fields(&self) -> Vec<String> {
            vec![self.name.clone(), self.category.clone()]
        }

        fn facet_terms(&self, facet: Facet) -> Vec<String> {
            match facet {
                Facet::Category => vec![self.category.clone()],
                _ => Vec::new(),
            }
        }

        fn range_value(&self, field: RangeField) -> Option<f64> {
            match field {
                RangeField::Price => parse_amount(&self.price),
                RangeField::MinimumOrder => None,
            }
        }

        fn toggle_value(&self, _toggle: ToggleField) -> bool {
            false
        }
    }

    fn eight_cards() -> Vec<Card> {
        vec![
            Card::new("p1", "Платье-комбинация", "Платья", "170 000 ₽"),
            Card::new("p2", "Пальто оверсайз", "Верхняя одежда", "280 000 ₽"),
            Card::new("p3", "Платье-рубашка", "Платья", "96 000 ₽"),
            Card::new("p4", "Джемпер", "Трикотаж", "54 000 ₽"),
            Card::new("p5", "Платье-футляр", "Платья", "120 000 ₽"),
            Card::new("p6", "Кардиган", "Трикотаж", "61 000 ₽"),
            Card::new("p7", "Тренч", "Верхняя одежда", "210 000 ₽"),
            Card::new("p8", "Юбка", "Юбки", "48 000 ₽"),
        ]
    }

    fn ids(items: &[Card]) -> Vec<String> {
        items.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_filter_is_subset_in_original_order() {
        let mut engine = ListEngine::new(eight_cards(), 8);
        engine.set_category(Some("Платья".to_string()));

        // Ровно три записи категории, в исходном порядке набора (Newest)
        assert_eq!(ids(&engine.filtered()), vec!["p1", "p3", "p5"]);
        assert_eq!(engine.filtered_count(), 3);
        assert!(engine
            .filtered()
            .iter()
            .all(|c| engine.records().contains(c)));
    }

    #[test]
    fn test_vacuous_filter_is_identity() {
        let engine = ListEngine::new(eight_cards(), 8);
        assert_eq!(ids(&engine.filtered()), ids(engine.records()));
    }

    #[test]
    fn test_pagination_walkthrough() {
        let records: Vec<Card> = (0..20)
            .map(|i| Card::new(&format!("p{i}"), "Позиция", "Платья", "10 000 ₽"))
            .collect();
        let mut engine = ListEngine::new(records, 8);

        assert_eq!(engine.visible().len(), 8);
        assert!(engine.has_more());

        engine.load_more();
        assert_eq!(engine.visible().len(), 16);
        assert!(engine.has_more());

        engine.load_more();
        assert_eq!(engine.visible().len(), 20);
        assert!(!engine.has_more());

        // После исчерпания — no-op
        engine.load_more();
        assert_eq!(engine.visible().len(), 20);
        assert_eq!(engine.pages_shown(), 3);
    }

    #[test]
    fn test_any_filter_change_resets_pager() {
        let records: Vec<Card> = (0..30)
            .map(|i| Card::new(&format!("p{i}"), "Позиция", "Платья", "10 000 ₽"))
            .collect();
        let mut engine = ListEngine::new(records, 8);
        engine.load_more();
        engine.load_more();
        assert_eq!(engine.pages_shown(), 3);

        engine.set_search("позиция");
        assert_eq!(engine.pages_shown(), 1);
        assert_eq!(engine.visible().len(), 8);

        engine.load_more();
        engine.set_sort(SortOrder::PriceDescending);
        assert_eq!(engine.pages_shown(), 1);

        engine.load_more();
        engine.toggle_term(Facet::Material, "Шёлк");
        assert_eq!(engine.pages_shown(), 1);

        engine.reset_filters();
        assert_eq!(engine.pages_shown(), 1);
        assert_eq!(engine.visible().len(), 8);
    }

    #[test]
    fn test_sort_applies_after_filter() {
        let mut engine = ListEngine::new(eight_cards(), 8);
        engine.set_category(Some("Платья".to_string()));
        engine.set_sort(SortOrder::PriceAscending);
        assert_eq!(ids(&engine.filtered()), vec!["p3", "p5", "p1"]);

        engine.set_sort(SortOrder::PriceDescending);
        assert_eq!(ids(&engine.filtered()), vec!["p1", "p5", "p3"]);
    }

    #[test]
    fn test_empty_store_yields_empty_result() {
        let mut engine: ListEngine<Card> = ListEngine::new(Vec::new(), 8);
        engine.set_search("что угодно");
        assert!(engine.filtered().is_empty());
        assert!(engine.visible().is_empty());
        assert!(!engine.has_more());
    }

    #[test]
    fn test_favorite_update_keeps_view_stable() {
        let mut engine = ListEngine::new(eight_cards(), 4);
        engine.load_more();
        let before = ids(&engine.visible());

        let updated = engine.update_record("p3", |c| c.favorite = true);
        assert!(updated);
        assert_eq!(ids(&engine.visible()), before);
        assert_eq!(engine.pages_shown(), 2);
        assert!(engine.visible().iter().any(|c| c.id == "p3" && c.favorite));

        assert!(!engine.update_record("нет такого", |c| c.favorite = true));
    }

    #[test]
    fn test_replace_records_resets_pager_keeps_filter() {
        let mut engine = ListEngine::new(eight_cards(), 4);
        engine.set_category(Some("Платья".to_string()));
        engine.load_more();

        engine.replace_records(eight_cards());
        assert_eq!(engine.pages_shown(), 1);
        assert_eq!(engine.filter.category.as_deref(), Some("Платья"));
        assert_eq!(engine.filtered_count(), 3);
    }

    #[test]
    fn test_visible_slice_never_exceeds_page() {
        let mut engine = ListEngine::new(eight_cards(), 8);
        engine.set_category(Some("Платья".to_string()));
        // min(pageSize, filteredCount)
        assert_eq!(engine.visible().len(), 3);
        assert_eq!(engine.visible_count(), 3);
        assert!(!engine.has_more());
    }
}
