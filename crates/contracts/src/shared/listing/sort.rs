//! Сортировка отфильтрованного списка.

use serde::{Deserialize, Serialize};

use super::filter::{ListRecord, RangeField};

/// Активный компаратор списка.
///
/// `Newest` — порядок по умолчанию: записи остаются в исходном порядке
/// набора (сортировка не применяется вовсе).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    /// Получить код компаратора
    pub fn code(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::PriceAscending => "price_asc",
            SortOrder::PriceDescending => "price_desc",
        }
    }

    /// Получить человекочитаемое название
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Сначала новые",
            SortOrder::PriceAscending => "Цена: по возрастанию",
            SortOrder::PriceDescending => "Цена: по убыванию",
        }
    }

    /// Получить все компараторы
    pub fn all() -> Vec<SortOrder> {
        vec![
            SortOrder::Newest,
            SortOrder::PriceAscending,
            SortOrder::PriceDescending,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "newest" => Some(SortOrder::Newest),
            "price_asc" => Some(SortOrder::PriceAscending),
            "price_desc" => Some(SortOrder::PriceDescending),
            _ => None,
        }
    }

    /// Применить компаратор к списку.
    ///
    /// Цены сравниваются по числовой величине (`range_value(Price)`),
    /// неразбираемая цена участвует как 0.0. Сортировка стабильная;
    /// убывание — точный реверс возрастания на том же входе.
    pub fn apply<R: ListRecord>(&self, items: &mut Vec<R>) {
        let magnitude =
            |record: &R| -> f64 { record.range_value(RangeField::Price).unwrap_or(0.0) };
        match self {
            SortOrder::Newest => {}
            SortOrder::PriceAscending => {
                items.sort_by(|a, b| magnitude(a).total_cmp(&magnitude(b)));
            }
            SortOrder::PriceDescending => {
                items.sort_by(|a, b| magnitude(a).total_cmp(&magnitude(b)));
                items.reverse();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::listing::filter::{Facet, ToggleField};
    use crate::shared::listing::money::parse_amount;

    #[derive(Debug, Clone, PartialEq)]
    struct Priced {
        id: &'static str,
        price: &'static str,
    }

    impl ListRecord for Priced {
        fn record_id(&self) -> String {
            self.id.to_string()
        }

        fn search_fields(&self) -> Vec<String> {
            Vec::new()
        }

        fn facet_terms(&self, _facet: Facet) -> Vec<String> {
            Vec::new()
        }

        fn range_value(&self, field: RangeField) -> Option<f64> {
            match field {
                RangeField::Price => parse_amount(self.price),
                RangeField::MinimumOrder => None,
            }
        }

        fn toggle_value(&self, _toggle: ToggleField) -> bool {
            false
        }
    }

    fn ids(items: &[Priced]) -> Vec<&'static str> {
        items.iter().map(|i| i.id).collect()
    }

    fn fixture() -> Vec<Priced> {
        vec![
            Priced { id: "a", price: "280 000 ₽" },
            Priced { id: "b", price: "170,000 ₽" },
            Priced { id: "c", price: "96 000 ₽" },
            Priced { id: "d", price: "по запросу" },
        ]
    }

    #[test]
    fn test_newest_is_identity() {
        let mut items = fixture();
        SortOrder::Newest.apply(&mut items);
        assert_eq!(ids(&items), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_price_ascending() {
        let mut items = fixture();
        SortOrder::PriceAscending.apply(&mut items);
        // Битая цена сортируется как 0 и уходит в начало
        assert_eq!(ids(&items), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_descending_is_exact_reverse_of_ascending() {
        let mut asc = fixture();
        // Дубль цены: реверс обязан быть точным и при равных величинах
        asc.push(Priced { id: "e", price: "170 000 ₽" });
        let mut desc = asc.clone();

        SortOrder::PriceAscending.apply(&mut asc);
        SortOrder::PriceDescending.apply(&mut desc);

        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_sort_code_round_trip() {
        for order in SortOrder::all() {
            assert_eq!(SortOrder::from_code(order.code()), Some(order));
        }
        assert_eq!(SortOrder::from_code("oldest"), None);
    }
}
