//! Application Shell - корневые компоненты приложения
//!
//! Содержит:
//! - `AppShell` - role gate (показывает RoleSelectPage или MainLayout)
//! - `MainLayout` - основной layout приложения (Shell + Sidebar + Tabs + RightPanel)

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::right::right::SummaryPanel;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::pages::role_select::RoleSelectPage;
use crate::system::session::context::use_session;
use leptos::prelude::*;

/// Main application layout с Sidebar, Tabs и RightPanel.
///
/// Инициализирует router integration для синхронизации табов с URL (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }.into_any()
            }
            right=|| view! { <SummaryPanel /> }.into_any()
        />
    }
}

/// Application shell - role gate component.
///
/// Показывает:
/// - `RoleSelectPage` если роль не выбрана
/// - `MainLayout` если роль выбрана
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.role.get().is_some()
            fallback=|| view! { <RoleSelectPage /> }
        >
            <MainLayout />
        </Show>
    }
}
