//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Toggle buttons for sidebar and right panel
//! - Application title
//! - Current role and role switch action

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::session::context::use_session;
use leptos::prelude::*;

/// TopHeader component - main application top bar.
///
/// Uses AppGlobalContext for sidebar/panel visibility control.
#[component]
pub fn TopHeader() -> impl IntoView {
    // Get global context for sidebar/panel toggles
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let session = use_session();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let toggle_right_panel = move |_| {
        ctx.toggle_right();
    };

    // Смена роли закрывает табы: наборы страниц у ролей разные
    let change_role = move |_| {
        ctx.close_all_tabs();
        session.clear();
    };

    // Derive visibility states from context
    let is_sidebar_visible = move || ctx.left_open.get();
    let is_right_panel_visible = move || ctx.right_open.get();

    view! {
        <div class="top-header">
            // Left section - brand
            <div class="top-header__brand">
                <span class="top-header__title">"Podium B2B"</span>
            </div>

            // Right section - actions
            <div class="top-header__actions">
                // Left panel toggle
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                // Right panel toggle
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_right_panel
                    title=move || if is_right_panel_visible() { "Скрыть правую панель" } else { "Показать правую панель" }
                >
                    {move || if is_right_panel_visible() {
                        icon("panel-right-close")
                    } else {
                        icon("panel-right-open")
                    }}
                </button>

                // Current role
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || session.current().display_name()}
                    </span>
                </div>

                // Change role
                <button class="top-header__icon-btn" on:click=change_role title="Сменить роль">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
