//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Этот модуль содержит функцию `render_tab_content`, которая по ключу таба
//! возвращает соответствующий View. Все tab keys собраны здесь в одном месте.

use crate::domain::a001_brand::ui::list::BrandList;
use crate::domain::a002_buyer::ui::list::BuyerList;
use crate::domain::a003_sales_manager::ui::list::SalesManagerList;
use crate::domain::a004_product::ui::list::ProductCatalog;
use crate::domain::a005_resource::ui::list::ResourceList;
use crate::domain::a006_order::ui::list::OrderList;
use crate::domain::a007_event::ui::list::EventList;
use crate::domain::a008_story::ui::list::StoryList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a004_product")
/// * `_tabs_store` - контекст табов (для страниц, закрывающих сами себя)
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, _tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Справочники (a001-a003)
        // ═══════════════════════════════════════════════════════════════════
        "a001_brand" => view! { <BrandList /> }.into_any(),
        "a002_buyer" => view! { <BuyerList /> }.into_any(),
        "a003_sales_manager" => view! { <SalesManagerList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Витрина и документы (a004-a006)
        // ═══════════════════════════════════════════════════════════════════
        "a004_product" => view! { <ProductCatalog /> }.into_any(),
        "a005_resource" => view! { <ResourceList /> }.into_any(),
        "a006_order" => view! { <OrderList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Контент (a007-a008)
        // ═══════════════════════════════════════════════════════════════════
        "a007_event" => view! { <EventList /> }.into_any(),
        "a008_story" => view! { <StoryList /> }.into_any(),

        _ => view! {
            <div style="padding: 20px; color: #888;">
                {format!("Неизвестная страница: {}", key)}
            </div>
        }
        .into_any(),
    }
}
