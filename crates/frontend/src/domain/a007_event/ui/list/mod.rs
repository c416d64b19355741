mod state;

use crate::shared::components::LoadMoreBar;
use crate::shared::data::seed;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a007_event::EventStatus;
use contracts::shared::listing::Facet;
use leptos::prelude::*;

use state::create_state;

fn status_color(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Planned => "#888",
        EventStatus::RegistrationOpen => "#2e7d32",
        EventStatus::Finished => "#aaa",
    }
}

/// Событие ещё впереди (по дате, относительно сегодняшнего дня)
fn is_upcoming(date: &str) -> bool {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d >= chrono::Utc::now().date_naive())
        .unwrap_or(false)
}

/// События шоурума: показы, презентации, байерские дни
#[component]
pub fn EventList() -> impl IntoView {
    let state = create_state();

    let set_status = move |value: String| {
        let code = if value.is_empty() { None } else { Some(value) };
        state.update(|s| s.engine.select_only(Facet::Status, code.as_deref()));
    };

    let reload = move || {
        state.update(|s| s.engine.replace_records(seed::seed_events()));
    };

    view! {
        <div style="display: flex; flex-direction: column; height: calc(100vh - 120px); overflow: hidden;">
            <div style="display: flex; gap: 10px; padding: 10px; background: #f5f5f5; border-bottom: 1px solid #ddd; flex-shrink: 0; align-items: center;">
                <select
                    class="page-size-select"
                    on:change=move |ev| set_status(event_target_value(&ev))
                >
                    <option value="">{"Все события"}</option>
                    {EventStatus::all().into_iter().map(|status| {
                        view! {
                            <option value={status.code()}>{status.display_name()}</option>
                        }
                    }).collect_view()}
                </select>

                <button class="button button--secondary" on:click=move |_| reload()>
                    {icon("refresh")}
                    {"Обновить"}
                </button>

                <span style="margin-left: auto; font-size: 14px; color: #666;">
                    {move || format!("Событий: {}", state.with(|s| s.engine.filtered_count()))}
                </span>
            </div>

            <div style="flex: 1; overflow-y: auto; padding: 12px; display: flex; flex-direction: column; gap: 10px;">
                {move || {
                    let items = state.with(|s| s.engine.visible());
                    if items.is_empty() {
                        let message = if state.with(|s| s.engine.is_empty()) {
                            "Событий пока нет."
                        } else {
                            "По фильтру ничего не найдено"
                        };
                        return view! {
                            <div style="text-align: center; padding: 40px; color: #888;">
                                {message}
                            </div>
                        }.into_any();
                    }

                    items.into_iter().map(|event| {
                        let upcoming = is_upcoming(&event.date);
                        view! {
                            <div style="border: 1px solid #eee; border-radius: 8px; padding: 12px; background: white; display: flex; justify-content: space-between; gap: 12px; align-items: center;">
                                <div style="display: flex; flex-direction: column; gap: 4px;">
                                    <div style="display: flex; align-items: center; gap: 8px;">
                                        <strong style="font-size: 14px;">{event.base.description.clone()}</strong>
                                        {upcoming.then(|| view! {
                                            <span style="font-size: 11px; background: #e8f0fe; color: #1a73e8; border-radius: 4px; padding: 1px 6px;">
                                                {"Скоро"}
                                            </span>
                                        })}
                                    </div>
                                    <span style="font-size: 13px; color: #666;">
                                        {format!("{} · {} · {}", format_date(&event.date), event.city, event.venue)}
                                    </span>
                                    <span style="font-size: 12px; color: #888;">{event.format.clone()}</span>
                                </div>
                                <span style=format!("font-size: 13px; white-space: nowrap; color: {};", status_color(event.status))>
                                    {event.status.display_name()}
                                </span>
                            </div>
                        }
                    }).collect_view().into_any()
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
