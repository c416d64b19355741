use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::system::session::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Provide SessionContext: текущая роль пользователя консоли
    provide_context(SessionContext::new());

    view! {
        <AppShell />
    }
}
