mod state;

use crate::shared::components::LoadMoreBar;
use crate::shared::data::seed;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::enums::AccountStatus;
use contracts::shared::listing::{Facet, SortOrder};
use leptos::prelude::*;
use thaw::*;

use state::create_state;

/// Подпись компаратора в терминах страницы байеров
fn sort_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Newest => "Сначала новые",
        SortOrder::PriceAscending => "Закупки: по возрастанию",
        SortOrder::PriceDescending => "Закупки: по убыванию",
    }
}

/// Справочник байеров (админ и менеджеры продаж)
#[component]
pub fn BuyerList() -> impl IntoView {
    let state = create_state();

    let (search_query, set_search_query) = signal(String::new());

    let apply_search = Callback::new(move |term: String| {
        set_search_query.set(term.clone());
        state.update(|s| s.engine.set_search(&term));
    });

    let set_status = move |value: String| {
        let code = if value.is_empty() { None } else { Some(value) };
        state.update(|s| s.engine.select_only(Facet::Status, code.as_deref()));
    };

    let reload = move || {
        state.update(|s| s.engine.replace_records(seed::seed_buyers()));
    };

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 120px); overflow: hidden;">
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center; flex-wrap: wrap;">
                <SearchInput
                    value=Signal::derive(move || search_query.get())
                    on_change=apply_search
                    placeholder="Поиск по магазину, контакту, городу...".to_string()
                />

                <select
                    class="page-size-select"
                    on:change=move |ev| set_status(event_target_value(&ev))
                >
                    <option value="">{"Все статусы"}</option>
                    {AccountStatus::all().into_iter().map(|status| {
                        view! {
                            <option value={status.code()}>{status.display_name()}</option>
                        }
                    }).collect_view()}
                </select>

                // Сортировка по сумме закупок
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let sort = SortOrder::from_code(&event_target_value(&ev)).unwrap_or_default();
                        state.update(|s| s.engine.set_sort(sort));
                    }
                    prop:value=move || state.with(|s| s.engine.sort.code().to_string())
                >
                    {SortOrder::all().into_iter().map(|order| {
                        view! {
                            <option
                                value={order.code()}
                                selected=move || state.with(|s| s.engine.sort == order)
                            >
                                {sort_label(order)}
                            </option>
                        }
                    }).collect_view()}
                </select>

                <button class="button button--secondary" on:click=move |_| reload()>
                    {icon("refresh")}
                    {"Обновить"}
                </button>

                <div style="margin-left: auto; display: flex; gap: 8px; align-items: center; font-size: 14px; color: #666;">
                    <span>{"Найдено: "}</span>
                    <Badge>
                        {move || state.with(|s| s.engine.filtered_count().to_string())}
                    </Badge>
                </div>
            </div>

            <div style="flex: 1; overflow-y: auto;">
                <table style="width: 100%; border-collapse: collapse; font-size: 14px;">
                    <thead style="position: sticky; top: 0; background: #f9f9f9; z-index: 10;">
                        <tr style="border-bottom: 2px solid #ddd;">
                            <th style="padding: 10px 8px; text-align: left;">{"Код"}</th>
                            <th style="padding: 10px 8px; text-align: left; min-width: 160px;">{"Магазин"}</th>
                            <th style="padding: 10px 8px; text-align: left;">{"Статус"}</th>
                            <th style="padding: 10px 8px; text-align: left; min-width: 160px;">{"Контакт"}</th>
                            <th style="padding: 10px 8px; text-align: left;">{"Город"}</th>
                            <th style="padding: 10px 8px; text-align: right;">{"Заказы"}</th>
                            <th style="padding: 10px 8px; text-align: right;">{"Сумма закупок"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = state.with(|s| s.engine.visible());
                            if items.is_empty() {
                                let message = if state.with(|s| s.engine.is_empty()) {
                                    "Нет данных. Нажмите «Обновить»."
                                } else {
                                    "По фильтру ничего не найдено"
                                };
                                return view! {
                                    <tr>
                                        <td colspan="7" style="text-align: center; padding: 20px; color: #888;">
                                            {message}
                                        </td>
                                    </tr>
                                }.into_any();
                            }

                            let query = search_query.get();
                            items.into_iter().enumerate().map(|(idx, buyer)| {
                                let bg_color = if idx % 2 == 0 { "#fff" } else { "#f9f9f9" };
                                view! {
                                    <tr style=format!("background: {}; border-bottom: 1px solid #eee;", bg_color)>
                                        <td style="padding: 8px;">{buyer.base.code.clone()}</td>
                                        <td style="padding: 8px; font-weight: 600;">
                                            {highlight_matches(&buyer.base.description, &query)}
                                        </td>
                                        <td style="padding: 8px;">
                                            <span class={buyer.status.badge_class()}>
                                                {buyer.status.display_name()}
                                            </span>
                                        </td>
                                        <td style="padding: 8px;">{highlight_matches(&buyer.contact_person, &query)}</td>
                                        <td style="padding: 8px;">{highlight_matches(&buyer.city, &query)}</td>
                                        <td style="padding: 8px; text-align: right;">{buyer.order_count}</td>
                                        <td style="padding: 8px; text-align: right;">{buyer.total_purchases.clone()}</td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <LoadMoreBar
                visible_count=Signal::derive(move || state.with(|s| s.engine.visible_count()))
                total_count=Signal::derive(move || state.with(|s| s.engine.filtered_count()))
                has_more=Signal::derive(move || state.with(|s| s.engine.has_more()))
                on_more=Callback::new(move |_| state.update(|s| s.engine.load_more()))
            />
        </div>
    }
}
