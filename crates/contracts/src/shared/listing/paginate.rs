//! Постраничный показ растущим префиксом («показать ещё»).

use serde::{Deserialize, Serialize};

/// Пейджер открывает префикс отфильтрованного списка и расширяет его
/// по явному запросу или по приближению скролла к концу.
///
/// Инвариант: любой сброс или смена фильтра/сортировки обязаны вернуть
/// пейджер на первую страницу, иначе показ «въезжает» смещением в уже
/// сократившуюся выдачу (см. `ListEngine`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    /// Размер страницы, фиксирован для страницы консоли
    pub page_size: usize,
    /// Сколько страниц открыто; начинается с 1
    pub pages_shown: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page_size must be positive");
        Self {
            page_size: page_size.max(1),
            pages_shown: 1,
        }
    }

    /// Сколько записей видно при данном размере выдачи
    pub fn visible_count(&self, total: usize) -> usize {
        (self.pages_shown * self.page_size).min(total)
    }

    /// Остались ли скрытые записи
    pub fn has_more(&self, total: usize) -> bool {
        self.pages_shown * self.page_size < total
    }

    /// Видимый префикс списка
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_count(items.len())]
    }

    /// Открыть следующую страницу; после исчерпания — no-op
    pub fn advance(&mut self, total: usize) {
        if self.has_more(total) {
            self.pages_shown += 1;
        }
    }

    /// Вернуться к первой странице
    pub fn reset(&mut self) {
        self.pages_shown = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_growth() {
        let total = 20;
        let mut pager = Pager::new(8);
        assert_eq!(pager.visible_count(total), 8);
        assert!(pager.has_more(total));

        pager.advance(total);
        assert_eq!(pager.visible_count(total), 16);
        assert!(pager.has_more(total));

        pager.advance(total);
        assert_eq!(pager.visible_count(total), 20);
        assert!(!pager.has_more(total));

        // Дальнейшие advance — no-op
        pager.advance(total);
        pager.advance(total);
        assert_eq!(pager.pages_shown, 3);
        assert_eq!(pager.visible_count(total), 20);
    }

    #[test]
    fn test_short_list_fits_first_page() {
        let pager = Pager::new(8);
        assert_eq!(pager.visible_count(3), 3);
        assert!(!pager.has_more(3));
        assert_eq!(pager.slice(&[1, 2, 3]), &[1, 2, 3]);
    }

    #[test]
    fn test_empty_list() {
        let mut pager = Pager::new(8);
        assert_eq!(pager.visible_count(0), 0);
        assert!(!pager.has_more(0));
        pager.advance(0);
        assert_eq!(pager.pages_shown, 1);
        let empty: &[i32] = &[];
        assert_eq!(pager.slice(empty), empty);
    }

    #[test]
    fn test_reset() {
        let mut pager = Pager::new(8);
        pager.advance(100);
        pager.advance(100);
        assert_eq!(pager.pages_shown, 3);
        pager.reset();
        assert_eq!(pager.pages_shown, 1);
    }

    #[test]
    fn test_slice_prefix() {
        let items: Vec<i32> = (0..20).collect();
        let mut pager = Pager::new(8);
        assert_eq!(pager.slice(&items), &items[..8]);
        pager.advance(items.len());
        assert_eq!(pager.slice(&items), &items[..16]);
    }
}
