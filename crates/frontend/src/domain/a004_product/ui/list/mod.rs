mod state;

use crate::domain::a004_product::ui::details::ProductDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::LoadMoreBar;
use crate::shared::data::seed;
use crate::shared::icons::icon;
use contracts::domain::a004_product::Product;
use contracts::shared::listing::{Facet, ListRecord, RangeField, SortOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeSet;
use thaw::*;
use wasm_bindgen::JsCast;

use state::{create_state, CatalogSnapshot, MIN_ORDER_MAX_DEFAULT, PRICE_MAX_DEFAULT};
pub use state::CatalogState;

/// Сигнал состояния каталога (его же читает детальная карточка)
pub type CatalogStateSignal = RwSignal<CatalogState>;

const FORM_STATE_KEY: &str = "a004_product";

/// Уникальные значения измерения по всему набору (для чекбоксов панели)
fn distinct_terms(products: &[Product], facet: Facet) -> Vec<String> {
    let mut set: BTreeSet<String> = BTreeSet::new();
    for p in products {
        for term in p.facet_terms(facet) {
            set.insert(term);
        }
    }
    set.into_iter().collect()
}

/// Подкатегории в рамках выбранной категории
fn sub_categories_of(products: &[Product], category: &str) -> Vec<String> {
    let mut set: BTreeSet<String> = BTreeSet::new();
    for p in products {
        if p.category == category {
            set.insert(p.sub_category.clone());
        }
    }
    set.into_iter().collect()
}

/// Группа чекбоксов одного измерения фильтра
#[component]
fn FacetGroup(
    state: RwSignal<CatalogState>,
    facet: Facet,
    title: &'static str,
    options: Vec<String>,
) -> impl IntoView {
    view! {
        <details class="filter-group" style="border-bottom: 1px solid #eee; padding: 6px 0;">
            <summary style="cursor: pointer; font-size: 14px; font-weight: 600; user-select: none;">
                {title}
            </summary>
            <div style="display: flex; flex-direction: column; gap: 4px; padding: 6px 0 2px 4px;">
                {options.into_iter().map(|value| {
                    let value_stored = StoredValue::new(value.clone());
                    view! {
                        <label style="display: inline-flex; align-items: center; gap: 6px; cursor: pointer; font-size: 13px;">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| {
                                    s.engine.filter.is_selected(facet, &value_stored.get_value())
                                })
                                on:change=move |_| {
                                    state.update(|s| {
                                        s.engine.toggle_term(facet, &value_stored.get_value())
                                    });
                                }
                                style="cursor: pointer;"
                            />
                            <span>{value}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </details>
    }
}

/// Каталог товаров — страница байера.
///
/// Слева панель фильтров, справа сетка карточек с дозагрузкой по
/// кнопке и по докрутке списка до конца.
#[component]
pub fn ProductCatalog() -> impl IntoView {
    let state = create_state();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Восстановление фильтров при повторном открытии таба
    if let Some(saved) = ctx.get_form_state(FORM_STATE_KEY) {
        if let Ok(snapshot) = serde_json::from_value::<CatalogSnapshot>(saved) {
            state.update(|s| s.engine.restore_filter(snapshot.filter, snapshot.sort));
        }
    }

    // Каждое изменение фильтров уходит в form state таба
    Effect::new(move |_| {
        let snapshot = state.with(|s| CatalogSnapshot {
            filter: s.engine.filter.clone(),
            sort: s.engine.sort,
        });
        if let Ok(value) = serde_json::to_value(&snapshot) {
            ctx.set_form_state(FORM_STATE_KEY.to_string(), value);
        }
    });

    // Поисковая строка (до debounce-порога в 3 символа)
    let (filter_input, set_filter_input) = signal(String::new());

    // Диапазоны цен и партий
    let (price_min_input, set_price_min_input) = signal(String::new());
    let (price_max_input, set_price_max_input) = signal(String::new());
    let (order_min_input, set_order_min_input) = signal(String::new());
    let (order_max_input, set_order_max_input) = signal(String::new());

    // Детальная карточка
    let (editing_id, set_editing_id) = signal(Option::<String>::None);

    // Применить поисковый запрос: напрямую или через имитацию AI-подбора
    let apply_search = move |term: String| {
        let ai_mode = state.with_untracked(|s| s.ai_mode);
        if !ai_mode {
            state.update(|s| s.engine.set_search(&term));
            return;
        }

        // Имитация асинхронного подбора: фиксированная задержка вместо
        // запроса. Ответ устаревшего поколения отбрасывается.
        let generation = state.with_untracked(|s| s.search_generation) + 1;
        state.update(|s| {
            s.search_generation = generation;
            s.ai_busy = true;
        });
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(600).await;
            let current = state.with_untracked(|s| s.search_generation);
            if current != generation {
                log::debug!("ai search: поколение {} устарело (текущее {})", generation, current);
                return;
            }
            state.update(|s| {
                s.ai_busy = false;
                s.engine.set_search(&term);
            });
        });
    };

    let handle_input_change = move |val: String| {
        set_filter_input.set(val.clone());
        if val.len() >= 3 || val.is_empty() {
            apply_search(val);
        }
    };

    let apply_price_range = move || {
        let min_raw = price_min_input.get_untracked();
        let max_raw = price_max_input.get_untracked();
        if min_raw.trim().is_empty() && max_raw.trim().is_empty() {
            state.update(|s| s.engine.clear_range(RangeField::Price));
            return;
        }
        let min = min_raw.trim().parse::<f64>().unwrap_or(0.0);
        let max = max_raw.trim().parse::<f64>().unwrap_or(PRICE_MAX_DEFAULT);
        state.update(|s| s.engine.set_range(RangeField::Price, min, max));
    };

    let apply_order_range = move || {
        let min_raw = order_min_input.get_untracked();
        let max_raw = order_max_input.get_untracked();
        if min_raw.trim().is_empty() && max_raw.trim().is_empty() {
            state.update(|s| s.engine.clear_range(RangeField::MinimumOrder));
            return;
        }
        let min = min_raw.trim().parse::<f64>().unwrap_or(0.0);
        let max = max_raw.trim().parse::<f64>().unwrap_or(MIN_ORDER_MAX_DEFAULT);
        state.update(|s| s.engine.set_range(RangeField::MinimumOrder, min, max));
    };

    // Полный сброс: движок и все поля ввода разом
    let reset_all = move || {
        state.update(|s| s.engine.reset_filters());
        set_filter_input.set(String::new());
        set_price_min_input.set(String::new());
        set_price_max_input.set(String::new());
        set_order_min_input.set(String::new());
        set_order_max_input.set(String::new());
    };

    let reload = move || {
        state.update(|s| s.engine.replace_records(seed::seed_products()));
    };

    // Списки значений для панели (набор страницы статичен до «Обновить»)
    let all_products = state.with_untracked(|s| s.engine.records().to_vec());
    let categories = distinct_terms(&all_products, Facet::Category);
    let materials = distinct_terms(&all_products, Facet::Material);
    let seasons = distinct_terms(&all_products, Facet::Season);
    let colors = distinct_terms(&all_products, Facet::Color);
    let sizes = distinct_terms(&all_products, Facet::Size);
    let brands = distinct_terms(&all_products, Facet::Brand);
    let certifications = distinct_terms(&all_products, Facet::Certification);
    let lead_times = distinct_terms(&all_products, Facet::LeadTime);
    let origins = distinct_terms(&all_products, Facet::ShippingOrigin);
    let products_for_subcats = StoredValue::new(all_products);

    let active_category = move || state.with(|s| s.engine.filter.category.clone());
    let active_count = move || state.with(|s| s.engine.filter.active_count());

    // Докрутка до конца списка открывает следующую страницу
    let handle_scroll = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Ok(el) = target.dyn_into::<web_sys::Element>() {
                let near_end =
                    el.scroll_top() + el.client_height() >= el.scroll_height() - 200;
                // После исчерпания выдачи скролл ничего не дёргает
                if near_end && state.with_untracked(|s| s.engine.has_more()) {
                    state.update(|s| s.engine.load_more());
                }
            }
        }
    };

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 120px); overflow: hidden;">
            // Toolbar
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center; flex-wrap: wrap;">
                <div style="position: relative; display: inline-flex; align-items: center;">
                    <input
                        type="text"
                        placeholder="Поиск по названию, категории, бренду..."
                        style=move || format!(
                            "width: 320px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                            if state.with(|s| !s.engine.filter.search.is_empty()) { "#fffbea" } else { "white" }
                        )
                        prop:value=move || filter_input.get()
                        on:input=move |ev| {
                            let val = event_target_value(&ev);
                            handle_input_change(val);
                        }
                    />
                    {move || if !filter_input.get().is_empty() {
                        view! {
                            <button
                                style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                                on:click=move |_| {
                                    set_filter_input.set(String::new());
                                    apply_search(String::new());
                                }
                                title="Очистить"
                            >
                                {icon("x")}
                            </button>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }}
                </div>

                <label style="display: inline-flex; align-items: center; gap: 6px; cursor: pointer; user-select: none; font-size: 14px;">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.ai_mode)
                        on:change=move |ev| {
                            state.update(|s| s.ai_mode = event_target_checked(&ev));
                        }
                        style="cursor: pointer;"
                    />
                    {icon("sparkles")}
                    <span>{"AI-подбор"}</span>
                </label>
                {move || if state.with(|s| s.ai_busy) {
                    view! { <span style="font-size: 13px; color: #888;">{"Подбираем..."}</span> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

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
                                {order.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>

                <button class="button button--secondary" on:click=move |_| reload()>
                    {icon("refresh")}
                    {"Обновить"}
                </button>

                // Счётчики
                <div style="margin-left: auto; display: flex; gap: 12px; align-items: center; font-size: 14px; color: #666;">
                    <span>
                        {"Найдено: "}
                        <Badge>
                            {move || state.with(|s| s.engine.filtered_count().to_string())}
                        </Badge>
                    </span>
                    {move || if active_count() > 0 {
                        view! {
                            <button class="button button--secondary" on:click=move |_| reset_all()>
                                {icon("x")}
                                {move || format!("Сбросить фильтры ({})", active_count())}
                            </button>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }}
                </div>
            </div>

            <div style="display: flex; flex: 1; overflow: hidden;">
                // Панель фильтров
                <div style="width: 250px; flex-shrink: 0; overflow-y: auto; border-right: 1px solid #eee; padding: 10px 14px;">
                    // Категории: одиночный выбор
                    <div style="padding-bottom: 8px; border-bottom: 1px solid #eee;">
                        <div style="font-size: 14px; font-weight: 600; padding-bottom: 6px;">{"Категория"}</div>
                        <div style="display: flex; flex-direction: column; gap: 2px;">
                            <button
                                class="app-sidebar__item"
                                style=move || format!(
                                    "text-align: left; border: none; background: {}; cursor: pointer; padding: 4px 6px; border-radius: 4px; font-size: 13px;",
                                    if active_category().is_none() { "#e8f0fe" } else { "transparent" }
                                )
                                on:click=move |_| state.update(|s| s.engine.set_category(None))
                            >
                                {"Все категории"}
                            </button>
                            {categories.into_iter().map(|category| {
                                let category_stored = StoredValue::new(category.clone());
                                view! {
                                    <button
                                        style=move || format!(
                                            "text-align: left; border: none; background: {}; cursor: pointer; padding: 4px 6px; border-radius: 4px; font-size: 13px;",
                                            if active_category().as_deref() == Some(category_stored.get_value().as_str()) { "#e8f0fe" } else { "transparent" }
                                        )
                                        on:click=move |_| {
                                            // Смена категории сбрасывает подкатегорию в движке
                                            state.update(|s| s.engine.set_category(Some(category_stored.get_value())));
                                        }
                                    >
                                        {category}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        // Подкатегории активной категории
                        {move || {
                            let Some(category) = active_category() else {
                                return view! { <></> }.into_any();
                            };
                            let subs = products_for_subcats
                                .with_value(|products| sub_categories_of(products, &category));
                            view! {
                                <select
                                    class="page-size-select"
                                    style="margin-top: 8px; width: 100%;"
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        let sub = if value.is_empty() { None } else { Some(value) };
                                        state.update(|s| s.engine.set_sub_category(sub));
                                    }
                                >
                                    <option value="" selected=move || state.with(|s| s.engine.filter.sub_category.is_none())>
                                        {"Все подкатегории"}
                                    </option>
                                    {subs.into_iter().map(|sub| {
                                        let sub_stored = StoredValue::new(sub.clone());
                                        view! {
                                            <option
                                                value={sub.clone()}
                                                selected=move || state.with(|s| {
                                                    s.engine.filter.sub_category.as_deref()
                                                        == Some(sub_stored.get_value().as_str())
                                                })
                                            >
                                                {sub.clone()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                            }.into_any()
                        }}
                    </div>

                    // Цена
                    <div style="padding: 8px 0; border-bottom: 1px solid #eee;">
                        <div style="font-size: 14px; font-weight: 600; padding-bottom: 6px;">{"Цена, ₽"}</div>
                        <div style="display: flex; gap: 6px;">
                            <input
                                type="number"
                                placeholder="от"
                                style="width: 90px; padding: 4px 6px; border: 1px solid #ddd; border-radius: 4px;"
                                prop:value=move || price_min_input.get()
                                on:change=move |ev| {
                                    set_price_min_input.set(event_target_value(&ev));
                                    apply_price_range();
                                }
                            />
                            <input
                                type="number"
                                placeholder="до"
                                style="width: 90px; padding: 4px 6px; border: 1px solid #ddd; border-radius: 4px;"
                                prop:value=move || price_max_input.get()
                                on:change=move |ev| {
                                    set_price_max_input.set(event_target_value(&ev));
                                    apply_price_range();
                                }
                            />
                        </div>
                    </div>

                    // Минимальная партия
                    <div style="padding: 8px 0; border-bottom: 1px solid #eee;">
                        <div style="font-size: 14px; font-weight: 600; padding-bottom: 6px;">{"Мин. партия, шт"}</div>
                        <div style="display: flex; gap: 6px;">
                            <input
                                type="number"
                                placeholder="от"
                                style="width: 90px; padding: 4px 6px; border: 1px solid #ddd; border-radius: 4px;"
                                prop:value=move || order_min_input.get()
                                on:change=move |ev| {
                                    set_order_min_input.set(event_target_value(&ev));
                                    apply_order_range();
                                }
                            />
                            <input
                                type="number"
                                placeholder="до"
                                style="width: 90px; padding: 4px 6px; border: 1px solid #ddd; border-radius: 4px;"
                                prop:value=move || order_max_input.get()
                                on:change=move |ev| {
                                    set_order_max_input.set(event_target_value(&ev));
                                    apply_order_range();
                                }
                            />
                        </div>
                    </div>

                    // Переключатели
                    <div style="padding: 8px 0; border-bottom: 1px solid #eee; display: flex; flex-direction: column; gap: 4px;">
                        <label style="display: inline-flex; align-items: center; gap: 6px; cursor: pointer; font-size: 13px;">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.engine.filter.in_stock_only)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    state.update(|s| s.engine.set_in_stock_only(checked));
                                }
                                style="cursor: pointer;"
                            />
                            <span>{"Только в наличии"}</span>
                        </label>
                        <label style="display: inline-flex; align-items: center; gap: 6px; cursor: pointer; font-size: 13px;">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.engine.filter.exclusive_only)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    state.update(|s| s.engine.set_exclusive_only(checked));
                                }
                                style="cursor: pointer;"
                            />
                            <span>{"Только эксклюзив"}</span>
                        </label>
                    </div>

                    // Мультивыбор по измерениям
                    <FacetGroup state=state facet=Facet::Material title="Материал" options=materials />
                    <FacetGroup state=state facet=Facet::Season title="Сезон" options=seasons />
                    <FacetGroup state=state facet=Facet::Color title="Цвет" options=colors />
                    <FacetGroup state=state facet=Facet::Size title="Размерная сетка" options=sizes />
                    <FacetGroup state=state facet=Facet::Brand title="Бренд" options=brands />
                    <FacetGroup state=state facet=Facet::Certification title="Сертификаты" options=certifications />
                    <FacetGroup state=state facet=Facet::LeadTime title="Срок производства" options=lead_times />
                    <FacetGroup state=state facet=Facet::ShippingOrigin title="Отгрузка из" options=origins />
                </div>

                // Сетка карточек
                <div style="flex: 1; overflow-y: auto; padding: 12px;" on:scroll=handle_scroll>
                    {move || {
                        let items = state.with(|s| s.engine.visible());
                        if items.is_empty() {
                            let message = if state.with(|s| s.engine.is_empty()) {
                                "Каталог пуст. Нажмите «Обновить».".to_string()
                            } else {
                                let term = state.with(|s| s.engine.filter.search.trim().to_string());
                                if !term.is_empty() {
                                    format!("По запросу «{}» ничего не найдено", term)
                                } else {
                                    "По выбранным фильтрам ничего не найдено".to_string()
                                }
                            };
                            return view! {
                                <div style="text-align: center; padding: 40px; color: #888;">
                                    {message}
                                </div>
                            }.into_any();
                        }

                        view! {
                            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px;">
                                {items.into_iter().map(|product| {
                                    let id = product.to_string_id();
                                    let id_for_click = id.clone();
                                    let id_for_fav = id.clone();
                                    let favorite = product.favorite;
                                    view! {
                                        <div
                                            style="border: 1px solid #eee; border-radius: 8px; padding: 12px; cursor: pointer; display: flex; flex-direction: column; gap: 6px; background: white;"
                                            on:click=move |_| set_editing_id.set(Some(id_for_click.clone()))
                                        >
                                            <div style="display: flex; justify-content: space-between; align-items: flex-start; gap: 6px;">
                                                <strong style="font-size: 14px;">{product.base.description.clone()}</strong>
                                                <button
                                                    style=move || format!(
                                                        "background: none; border: none; cursor: pointer; padding: 2px; color: {};",
                                                        if favorite { "#e53935" } else { "#bbb" }
                                                    )
                                                    title=move || if favorite { "Убрать из избранного" } else { "В избранное" }
                                                    on:click=move |ev| {
                                                        // Клик по сердцу не открывает карточку
                                                        ev.stop_propagation();
                                                        state.update(|s| {
                                                            s.engine.update_record(&id_for_fav, |p| p.toggle_favorite());
                                                        });
                                                    }
                                                >
                                                    {icon(if favorite { "heart-filled" } else { "heart" })}
                                                </button>
                                            </div>
                                            <span style="font-size: 12px; color: #888;">
                                                {format!("{} · {}", product.brand_name, product.season)}
                                            </span>
                                            <span style="font-size: 12px; color: #666;">
                                                {format!("{} / {}", product.category, product.sub_category)}
                                            </span>
                                            <div style="display: flex; justify-content: space-between; align-items: center;">
                                                <strong style="font-size: 15px;">{product.price.clone()}</strong>
                                                <span style="font-size: 12px; color: #888;">
                                                    {product.availability.display_name()}
                                                </span>
                                            </div>
                                            {(!product.certificates.is_empty()).then(|| {
                                                view! {
                                                    <div style="display: flex; gap: 4px; flex-wrap: wrap;">
                                                        {product.certificates.iter().map(|cert| {
                                                            view! {
                                                                <span style="font-size: 11px; background: #eef6ee; color: #2e7d32; border-radius: 4px; padding: 1px 6px;">
                                                                    {cert.clone()}
                                                                </span>
                                                            }
                                                        }).collect_view()}
                                                    </div>
                                                }
                                            })}
                                            {product.is_exclusive.then(|| {
                                                view! {
                                                    <span style="font-size: 11px; color: #9c27b0;">{"Эксклюзив платформы"}</span>
                                                }
                                            })}
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

            // Details Modal
            {move || editing_id.get().map(|id| {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content-wide">
                            <ProductDetails
                                state=state
                                id=id
                                on_close=Callback::new(move |_| set_editing_id.set(None))
                            />
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
