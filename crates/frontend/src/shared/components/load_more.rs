use leptos::prelude::*;

/// LoadMoreBar component - счётчик выдачи и кнопка «Показать ещё».
///
/// Выдача всех списков растёт префиксом: кнопка (или скролл у каталога)
/// открывает следующую страницу, пока записи не кончатся.
#[component]
pub fn LoadMoreBar(
    /// Сколько записей показано
    #[prop(into)]
    visible_count: Signal<usize>,

    /// Сколько записей всего после фильтрации
    #[prop(into)]
    total_count: Signal<usize>,

    /// Остались ли скрытые записи
    #[prop(into)]
    has_more: Signal<bool>,

    /// Callback открытия следующей страницы
    on_more: Callback<()>,
) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: center; justify-content: center; gap: 12px; padding: 12px; flex-shrink: 0;">
            <span style="font-size: 13px; color: #666;">
                {move || format!("Показано {} из {}", visible_count.get(), total_count.get())}
            </span>
            {move || if has_more.get() {
                view! {
                    <button
                        class="button button--secondary"
                        on:click=move |_| on_more.run(())
                    >
                        {"Показать ещё"}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
