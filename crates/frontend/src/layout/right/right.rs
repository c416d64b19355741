use crate::layout::global_context::AppGlobalContext;
use crate::shared::data::seed;
use crate::system::session::context::use_session;
use leptos::prelude::*;

#[component]
pub fn Right(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || tabs_store.right_open.get();

    view! {
        <div data-zone="right" class="right" class:hidden=move || !is_open()>
            {children()}
        </div>
    }
}

/// Сводка по площадке в правой панели.
///
/// Числа считаются от тех же сидов, что и страницы — панель всегда
/// согласована с содержимым табов.
#[component]
pub fn SummaryPanel() -> impl IntoView {
    let session = use_session();

    let rows = move || {
        let role = session.current();
        let mut rows: Vec<(&'static str, usize)> = vec![
            ("Бренды", seed::seed_brands().len()),
            ("Байеры", seed::seed_buyers().len()),
            ("Товары в каталоге", seed::seed_products().len()),
            ("Заказы", seed::seed_orders().len()),
        ];
        if role == contracts::enums::UserRole::Admin {
            rows.push(("Менеджеры продаж", seed::seed_sales_managers().len()));
        }
        rows
    };

    view! {
        <div style="padding: 12px; display: flex; flex-direction: column; gap: 10px;">
            <h3 style="margin: 0; font-size: 15px;">"Сводка"</h3>
            {move || rows().into_iter().map(|(label, count)| {
                view! {
                    <div style="display: flex; justify-content: space-between; font-size: 13px;">
                        <span style="color: #666;">{label}</span>
                        <strong>{count}</strong>
                    </div>
                }
            }).collect_view()}
            <div style="border-top: 1px solid #eee; padding-top: 10px; font-size: 12px; color: #888;">
                {move || format!("Роль: {}", session.current().display_name())}
            </div>
        </div>
    }
}
