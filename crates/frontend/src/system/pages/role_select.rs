//! Экран выбора роли — вход в консоль без аутентификации.

use crate::shared::icons::icon;
use crate::system::session::context::use_session;
use contracts::enums::UserRole;
use leptos::prelude::*;

fn role_icon(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "settings",
        UserRole::Brand => "building",
        UserRole::Buyer => "store",
        UserRole::Sales => "users",
    }
}

#[component]
pub fn RoleSelectPage() -> impl IntoView {
    let session = use_session();

    view! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #f5f5f5; gap: 24px;">
            <div style="text-align: center;">
                <h1 style="margin: 0; font-size: 28px;">"Podium B2B"</h1>
                <p style="margin: 8px 0 0; color: #666;">
                    "Консоль площадки: бренды, байеры, заказы"
                </p>
            </div>
            <div style="display: grid; grid-template-columns: repeat(2, 260px); gap: 16px;">
                {UserRole::all().into_iter().map(|role| {
                    view! {
                        <button
                            class="role-card"
                            style="display: flex; flex-direction: column; gap: 8px; padding: 20px; background: white; border: 1px solid #ddd; border-radius: 8px; cursor: pointer; text-align: left;"
                            on:click=move |_| {
                                leptos::logging::log!("role selected: {}", role.code());
                                session.set_role(role);
                            }
                        >
                            <div style="display: flex; align-items: center; gap: 8px; font-size: 16px; font-weight: 600;">
                                {icon(role_icon(role))}
                                <span>{role.display_name()}</span>
                            </div>
                            <span style="font-size: 13px; color: #666;">{role.blurb()}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
