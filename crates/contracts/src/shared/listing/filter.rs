//! Набор предикатов фильтрации списка.
//!
//! Логика соединения: И между измерениями, ИЛИ внутри мультивыбора.
//! Измерение без выбранных значений ничего не исключает.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Измерение фильтрации (закрытый набор)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Category,
    SubCategory,
    Material,
    Season,
    Color,
    Size,
    Brand,
    Certification,
    LeadTime,
    ShippingOrigin,
    Status,
    Plan,
}

/// Числовое поле для диапазонных фильтров
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RangeField {
    Price,
    MinimumOrder,
}

/// Булев фильтр-переключатель
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleField {
    InStock,
    ExclusiveOnly,
}

/// Границы диапазонного фильтра.
///
/// Диапазон с `min > max` не совпадает ни с одной записью: контрол
/// диапазона обязан зажимать значения, но движок не падает на мусоре.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBound {
    pub min: f64,
    pub max: f64,
}

impl RangeBound {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        !self.is_inverted() && value >= self.min && value <= self.max
    }
}

/// Запись, участвующая в фильтрации/сортировке.
///
/// Каждый агрегат отвечает на запросы движка исчерпывающим `match`:
/// измерение, которого у записи нет, возвращает пустой список термов
/// и потому не фильтруется.
pub trait ListRecord {
    /// Стабильный идентификатор записи в пределах набора
    fn record_id(&self) -> String;

    /// Поля, по которым идёт текстовый поиск (подстрока, без токенизации)
    fn search_fields(&self) -> Vec<String>;

    /// Значения записи в данном измерении (обычно 0 или 1, у сертификатов — список)
    fn facet_terms(&self, facet: Facet) -> Vec<String>;

    /// Числовая величина записи; `None` для неразбираемого значения
    fn range_value(&self, field: RangeField) -> Option<f64>;

    /// Булев признак записи
    fn toggle_value(&self, toggle: ToggleField) -> bool {
        let _ = toggle;
        false
    }
}

/// Состояние всех предикатов одной страницы.
///
/// Единый value-object вместо россыпи отдельных сигналов: состояние
/// можно тестировать без UI и целиком сохранять в form state таба.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Одиночный выбор категории
    pub category: Option<String>,
    /// Подкатегория, всегда в рамках выбранной категории
    pub sub_category: Option<String>,
    /// Мультивыбор по измерениям; пустое множество вакуозно
    pub selected: BTreeMap<Facet, BTreeSet<String>>,
    /// Диапазонные фильтры
    pub ranges: BTreeMap<RangeField, RangeBound>,
    /// Только в наличии
    pub in_stock_only: bool,
    /// Только эксклюзив
    pub exclusive_only: bool,
    /// Поисковая строка
    pub search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выбрать категорию. Смена категории всегда сбрасывает подкатегорию:
    /// подкатегория вне родительской категории — класс дефектов, от
    /// которого движок защищается сам, не полагаясь на вызывающий код.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.sub_category = None;
    }

    /// Выбрать подкатегорию. Без активной категории — no-op.
    pub fn set_sub_category(&mut self, sub_category: Option<String>) {
        if self.category.is_some() {
            self.sub_category = sub_category;
        }
    }

    /// Добавить/убрать значение мультивыбора
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        // Категория и подкатегория — одиночный выбор, см. set_category
        if matches!(facet, Facet::Category | Facet::SubCategory) {
            debug_assert!(false, "single-select facet passed to toggle");
            return;
        }
        let set = self.selected.entry(facet).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.selected.remove(&facet);
        }
    }

    /// Оставить в измерении ровно одно значение (select-контролы).
    /// `None` снимает ограничение целиком.
    pub fn select_only(&mut self, facet: Facet, value: Option<&str>) {
        match value {
            None => {
                self.selected.remove(&facet);
            }
            Some(v) => {
                self.selected
                    .insert(facet, BTreeSet::from([v.to_string()]));
            }
        }
    }

    /// Выбрано ли значение в мультивыборе
    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected
            .get(&facet)
            .map(|set| set.contains(value))
            .unwrap_or(false)
    }

    /// Установить диапазон (заменяет предыдущий)
    pub fn set_range(&mut self, field: RangeField, min: f64, max: f64) {
        self.ranges.insert(field, RangeBound::new(min, max));
    }

    /// Снять диапазон
    pub fn clear_range(&mut self, field: RangeField) {
        self.ranges.remove(&field);
    }

    pub fn set_in_stock_only(&mut self, value: bool) {
        self.in_stock_only = value;
    }

    pub fn set_exclusive_only(&mut self, value: bool) {
        self.exclusive_only = value;
    }

    /// Установить поисковую строку
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// Проверить запись против всех активных предикатов
    pub fn evaluate<R: ListRecord>(&self, record: &R) -> bool {
        if let Some(category) = &self.category {
            if !record
                .facet_terms(Facet::Category)
                .iter()
                .any(|t| t == category)
            {
                return false;
            }
            if let Some(sub) = &self.sub_category {
                if !record
                    .facet_terms(Facet::SubCategory)
                    .iter()
                    .any(|t| t == sub)
                {
                    return false;
                }
            }
        }

        for (facet, chosen) in &self.selected {
            if chosen.is_empty() {
                continue;
            }
            let terms = record.facet_terms(*facet);
            if !terms.iter().any(|t| chosen.contains(t.as_str())) {
                return false;
            }
        }

        for (field, bound) in &self.ranges {
            // Неразбираемая величина участвует как 0.0 — та же политика,
            // что и при сортировке
            let value = record.range_value(*field).unwrap_or(0.0);
            if !bound.contains(value) {
                return false;
            }
        }

        if self.in_stock_only && !record.toggle_value(ToggleField::InStock) {
            return false;
        }
        if self.exclusive_only && !record.toggle_value(ToggleField::ExclusiveOnly) {
            return false;
        }

        let term = self.search.trim().to_lowercase();
        if !term.is_empty() {
            let hit = record
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        true
    }

    /// Количество активных ограничений для бейджа на кнопке фильтров.
    ///
    /// Каждый выбранный элемент мультивыбора считается отдельно; категория,
    /// подкатегория, диапазоны и переключатели дают по единице. Поисковая
    /// строка видна в поле ввода и в бейдж не входит.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.category.is_some() {
            count += 1;
        }
        if self.sub_category.is_some() {
            count += 1;
        }
        count += self.selected.values().map(|set| set.len()).sum::<usize>();
        count += self.ranges.len();
        if self.in_stock_only {
            count += 1;
        }
        if self.exclusive_only {
            count += 1;
        }
        count
    }

    /// Ограничивает ли что-нибудь выдачу (включая поиск).
    ///
    /// Нужно, чтобы различать «данных нет вообще» и «по фильтрам/запросу
    /// ничего не найдено».
    pub fn is_constrained(&self) -> bool {
        self.active_count() > 0 || !self.search.trim().is_empty()
    }

    /// Сбросить все предикаты и поиск к значениям по умолчанию разом.
    /// Частичный сброс — дефект.
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// Снимок для form state таба
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Восстановление из form state; мусор даёт `None`
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::money::parse_amount;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        name: &'static str,
        category: &'static str,
        sub_category: &'static str,
        material: &'static str,
        price: &'static str,
        certs: Vec<&'static str>,
        in_stock: bool,
        exclusive: bool,
    }

    impl ListRecord for Item {
        fn record_id(&self) -> String {
            self.id.to_string()
        }

        fn search_fields(&self) -> Vec<String> {
            vec![
                self.name.to_string(),
                self.category.to_string(),
                self.sub_category.to_string(),
            ]
        }

        fn facet_terms(&self, facet: Facet) -> Vec<String> {
            match facet {
                Facet::Category => vec![self.category.to_string()],
                Facet::SubCategory => vec![self.sub_category.to_string()],
                Facet::Material => vec![self.material.to_string()],
                Facet::Certification => self.certs.iter().map(|c| c.to_string()).collect(),
                _ => Vec::new(),
            }
        }

        fn range_value(&self, field: RangeField) -> Option<f64> {
            match field {
                RangeField::Price => parse_amount(self.price),
                RangeField::MinimumOrder => None,
            }
        }

        fn toggle_value(&self, toggle: ToggleField) -> bool {
            match toggle {
                ToggleField::InStock => self.in_stock,
                ToggleField::ExclusiveOnly => self.exclusive,
            }
        }
    }

    fn fixture() -> Vec<Item> {
        vec![
            Item {
                id: "p1",
                name: "Платье-комбинация",
                category: "Платья",
                sub_category: "Вечерние",
                material: "Шёлк",
                price: "170 000 ₽",
                certs: vec!["GOTS"],
                in_stock: true,
                exclusive: false,
            },
            Item {
                id: "p2",
                name: "Пальто оверсайз",
                category: "Верхняя одежда",
                sub_category: "Пальто",
                material: "Шерсть",
                price: "280 000 ₽",
                certs: vec![],
                in_stock: false,
                exclusive: true,
            },
            Item {
                id: "p3",
                name: "Платье-рубашка",
                category: "Платья",
                sub_category: "Повседневные",
                material: "Хлопок",
                price: "96 000 ₽",
                certs: vec!["GOTS", "OEKO-TEX"],
                in_stock: true,
                exclusive: false,
            },
            Item {
                id: "p4",
                name: "Джемпер",
                category: "Трикотаж",
                sub_category: "Джемперы",
                material: "Хлопок",
                price: "по запросу",
                certs: vec![],
                in_stock: true,
                exclusive: false,
            },
        ]
    }

    fn filtered(items: &[Item], state: &FilterState) -> Vec<&'static str> {
        items
            .iter()
            .filter(|i| state.evaluate(*i))
            .map(|i| i.id)
            .collect()
    }

    #[test]
    fn test_empty_state_excludes_nothing() {
        let items = fixture();
        let state = FilterState::new();
        assert_eq!(filtered(&items, &state), vec!["p1", "p2", "p3", "p4"]);
        assert_eq!(state.active_count(), 0);
        assert!(!state.is_constrained());
    }

    #[test]
    fn test_category_single_select() {
        let items = fixture();
        let mut state = FilterState::new();
        state.set_category(Some("Платья".to_string()));
        assert_eq!(filtered(&items, &state), vec!["p1", "p3"]);
    }

    #[test]
    fn test_category_switch_resets_sub_category() {
        let mut state = FilterState::new();
        state.set_category(Some("Платья".to_string()));
        state.set_sub_category(Some("Вечерние".to_string()));
        assert_eq!(state.active_count(), 2);

        state.set_category(Some("Трикотаж".to_string()));
        assert_eq!(state.sub_category, None);

        // Подкатегория без категории — no-op
        state.set_category(None);
        state.set_sub_category(Some("Джемперы".to_string()));
        assert_eq!(state.sub_category, None);
    }

    #[test]
    fn test_multi_select_or_semantics() {
        let items = fixture();
        let mut state = FilterState::new();
        state.toggle(Facet::Material, "Хлопок");
        let cotton_only = filtered(&items, &state);
        assert_eq!(cotton_only, vec!["p3", "p4"]);

        state.toggle(Facet::Material, "Шёлк");
        // ИЛИ внутри измерения: объединение хлопка и шёлка
        assert_eq!(filtered(&items, &state), vec!["p1", "p3", "p4"]);

        // Повторный toggle убирает значение
        state.toggle(Facet::Material, "Шёлк");
        assert_eq!(filtered(&items, &state), cotton_only);
    }

    #[test]
    fn test_select_only_replaces_selection() {
        let items = fixture();
        let mut state = FilterState::new();
        state.toggle(Facet::Material, "Хлопок");
        state.toggle(Facet::Material, "Шерсть");

        state.select_only(Facet::Material, Some("Шёлк"));
        assert_eq!(filtered(&items, &state), vec!["p1"]);
        assert_eq!(state.active_count(), 1);

        state.select_only(Facet::Material, None);
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn test_narrowing_is_monotonic() {
        let items = fixture();
        let mut state = FilterState::new();
        state.set_category(Some("Платья".to_string()));
        let broad = filtered(&items, &state).len();

        state.toggle(Facet::Certification, "OEKO-TEX");
        let narrow = filtered(&items, &state).len();
        assert!(narrow <= broad);
        assert_eq!(filtered(&items, &state), vec!["p3"]);
    }

    #[test]
    fn test_price_range() {
        let items = fixture();
        let mut state = FilterState::new();
        state.set_range(RangeField::Price, 100_000.0, 200_000.0);
        assert_eq!(filtered(&items, &state), vec!["p1"]);

        // Неразбираемая цена участвует как 0.0
        state.set_range(RangeField::Price, 0.0, 50_000.0);
        assert_eq!(filtered(&items, &state), vec!["p4"]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let items = fixture();
        let mut state = FilterState::new();
        state.set_range(RangeField::Price, 200_000.0, 100_000.0);
        assert!(filtered(&items, &state).is_empty());
    }

    #[test]
    fn test_toggles() {
        let items = fixture();
        let mut state = FilterState::new();
        state.set_in_stock_only(true);
        assert_eq!(filtered(&items, &state), vec!["p1", "p3", "p4"]);

        state.set_exclusive_only(true);
        assert!(filtered(&items, &state).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = fixture();
        let mut state = FilterState::new();
        state.set_search("платье");
        assert_eq!(filtered(&items, &state), vec!["p1", "p3"]);

        state.set_search("ПАЛЬТО");
        assert_eq!(filtered(&items, &state), vec!["p2"]);
    }

    #[test]
    fn test_no_match_search_is_distinguishable() {
        let items = fixture();
        let mut state = FilterState::new();
        state.set_search("zzz-no-match");
        assert!(filtered(&items, &state).is_empty());
        // Бейдж пуст, но ограничение есть — view показывает
        // «по запросу ничего не найдено», а не «нет данных»
        assert_eq!(state.active_count(), 0);
        assert!(state.is_constrained());
    }

    #[test]
    fn test_reset_restores_vacuity() {
        let items = fixture();
        let mut state = FilterState::new();
        state.set_category(Some("Платья".to_string()));
        state.set_sub_category(Some("Вечерние".to_string()));
        state.toggle(Facet::Material, "Шёлк");
        state.set_range(RangeField::Price, 0.0, 1.0);
        state.set_in_stock_only(true);
        state.set_search("zzz");
        assert!(state.active_count() > 0);

        state.reset();
        assert_eq!(state.active_count(), 0);
        assert!(!state.is_constrained());
        assert!(items.iter().all(|i| state.evaluate(i)));
    }

    #[test]
    fn test_form_state_round_trip() {
        let mut state = FilterState::new();
        state.set_category(Some("Платья".to_string()));
        state.toggle(Facet::Material, "Шёлк");
        state.set_range(RangeField::Price, 1000.0, 2000.0);
        state.set_search("плать");

        let value = state.to_value();
        let restored = FilterState::from_value(&value).expect("snapshot must restore");
        assert_eq!(restored, state);

        assert_eq!(FilterState::from_value(&serde_json::json!("мусор")), None);
    }
}
