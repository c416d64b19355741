mod state;

use crate::shared::components::LoadMoreBar;
use crate::shared::data::seed;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a005_resource::Resource;
use contracts::shared::listing::{Facet, ListRecord};
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;

use state::create_state;

fn distinct_categories(resources: &[Resource]) -> Vec<String> {
    let mut set: BTreeSet<String> = BTreeSet::new();
    for r in resources {
        for term in r.facet_terms(Facet::Category) {
            set.insert(term);
        }
    }
    set.into_iter().collect()
}

/// Библиотека ресурсов: гайды, лукбуки и шаблоны площадки.
///
/// Пустая выдача по поиску показывает отдельное состояние
/// «по запросу ничего не найдено» — это не то же самое, что пустая
/// библиотека.
#[component]
pub fn ResourceList() -> impl IntoView {
    let state = create_state();

    let (search_query, set_search_query) = signal(String::new());

    let apply_search = Callback::new(move |term: String| {
        set_search_query.set(term.clone());
        state.update(|s| s.engine.set_search(&term));
    });

    let set_category = move |value: String| {
        let category = if value.is_empty() { None } else { Some(value) };
        state.update(|s| s.engine.set_category(category));
    };

    let reload = move || {
        state.update(|s| s.engine.replace_records(seed::seed_resources()));
    };

    let categories = state.with_untracked(|s| distinct_categories(s.engine.records()));

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 120px); overflow: hidden;">
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center; flex-wrap: wrap;">
                <SearchInput
                    value=Signal::derive(move || search_query.get())
                    on_change=apply_search
                    placeholder="Поиск по названию и описанию...".to_string()
                />

                <select
                    class="page-size-select"
                    on:change=move |ev| set_category(event_target_value(&ev))
                >
                    <option value="">{"Все разделы"}</option>
                    {categories.into_iter().map(|category| {
                        view! {
                            <option value={category.clone()}>{category.clone()}</option>
                        }
                    }).collect_view()}
                </select>

                <button class="button button--secondary" on:click=move |_| reload()>
                    {icon("refresh")}
                    {"Обновить"}
                </button>

                <div style="margin-left: auto; display: flex; gap: 8px; align-items: center; font-size: 14px; color: #666;">
                    <span>{"Материалов: "}</span>
                    <Badge>
                        {move || state.with(|s| s.engine.filtered_count().to_string())}
                    </Badge>
                </div>
            </div>

            <div style="flex: 1; overflow-y: auto; padding: 12px;">
                {move || {
                    let items = state.with(|s| s.engine.visible());
                    if items.is_empty() {
                        let message = if state.with(|s| s.engine.is_empty()) {
                            "Библиотека пуста.".to_string()
                        } else {
                            let term = state.with(|s| s.engine.filter.search.trim().to_string());
                            if !term.is_empty() {
                                format!("По запросу «{}» ничего не найдено", term)
                            } else {
                                "В выбранном разделе ничего нет".to_string()
                            }
                        };
                        return view! {
                            <div style="text-align: center; padding: 40px; color: #888;">
                                {message}
                            </div>
                        }.into_any();
                    }

                    let query = search_query.get();
                    view! {
                        <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 12px;">
                            {items.into_iter().map(|resource| {
                                view! {
                                    <div style="border: 1px solid #eee; border-radius: 8px; padding: 12px; background: white; display: flex; flex-direction: column; gap: 6px;">
                                        <div style="display: flex; justify-content: space-between; gap: 6px; align-items: flex-start;">
                                            <strong style="font-size: 14px;">
                                                {highlight_matches(&resource.base.description, &query)}
                                            </strong>
                                            <span style="font-size: 11px; background: #eef2f7; color: #456; border-radius: 4px; padding: 1px 6px; white-space: nowrap;">
                                                {resource.category.clone()}
                                            </span>
                                        </div>
                                        <span style="font-size: 13px; color: #666;">
                                            {highlight_matches(&resource.annotation, &query)}
                                        </span>
                                        <div style="display: flex; justify-content: space-between; align-items: center; margin-top: auto;">
                                            <span style="font-size: 12px; color: #888;">{resource.file_size.clone()}</span>
                                            <a
                                                href={resource.link.clone()}
                                                target="_blank"
                                                style="display: inline-flex; align-items: center; gap: 4px; font-size: 13px; color: #1a73e8; text-decoration: none;"
                                            >
                                                {icon("external-link")}
                                                {"Открыть"}
                                            </a>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}

                <LoadMoreBar
                    visible_count=Signal::derive(move || state.with(|s| s.engine.visible_count()))
                    total_count=Signal::derive(move || state.with(|s| s.engine.filtered_count()))
                    has_more=Signal::derive(move || state.with(|s| s.engine.has_more()))
                    on_more=Callback::new(move |_| state.update(|s| s.engine.load_more()))
                />
            </div>
        </div>
    }
}
