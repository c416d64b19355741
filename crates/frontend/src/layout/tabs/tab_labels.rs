//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Заголовки агрегатных страниц берутся из `list_name()` контрактов.

use contracts::domain::a001_brand::Brand;
use contracts::domain::a002_buyer::Buyer;
use contracts::domain::a003_sales_manager::SalesManager;
use contracts::domain::a004_product::Product;
use contracts::domain::a005_resource::Resource;
use contracts::domain::a006_order::Order;
use contracts::domain::a007_event::ShowroomEvent;
use contracts::domain::a008_story::Story;
use contracts::domain::common::AggregateRoot;

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Fallback для неизвестного ключа — нейтральный заголовок: такой таб
/// показывает placeholder из registry.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_brand" => Brand::list_name(),
        "a002_buyer" => Buyer::list_name(),
        "a003_sales_manager" => SalesManager::list_name(),
        "a004_product" => Product::list_name(),
        "a005_resource" => Resource::list_name(),
        "a006_order" => Order::list_name(),
        "a007_event" => ShowroomEvent::list_name(),
        "a008_story" => Story::list_name(),
        _ => "Страница",
    }
}
