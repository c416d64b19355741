//! Sidebar component with collapsible menu items

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::session::context::use_session;
use contracts::enums::UserRole;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
    roles: &'static [UserRole],
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "showroom",
            label: "Шоурум",
            icon: "store",
            items: vec![
                ("a004_product", tab_label_for_key("a004_product"), "package"),
                ("a007_event", tab_label_for_key("a007_event"), "calendar"),
                ("a005_resource", tab_label_for_key("a005_resource"), "book-open"),
            ],
            roles: &[UserRole::Buyer],
        },
        MenuGroup {
            id: "documents",
            label: "Документы",
            icon: "file-text",
            items: vec![
                ("a006_order", tab_label_for_key("a006_order"), "file-text"),
            ],
            roles: &[UserRole::Admin, UserRole::Brand, UserRole::Buyer, UserRole::Sales],
        },
        MenuGroup {
            id: "directory",
            label: "Справочники",
            icon: "database",
            items: vec![
                ("a001_brand", tab_label_for_key("a001_brand"), "building"),
                ("a002_buyer", tab_label_for_key("a002_buyer"), "users"),
            ],
            roles: &[UserRole::Admin, UserRole::Sales],
        },
        MenuGroup {
            id: "team",
            label: "Команда",
            icon: "users",
            items: vec![
                ("a003_sales_manager", tab_label_for_key("a003_sales_manager"), "user"),
            ],
            roles: &[UserRole::Admin],
        },
        MenuGroup {
            id: "content",
            label: "Контент",
            icon: "book-open",
            items: vec![
                ("a005_resource", tab_label_for_key("a005_resource"), "book-open"),
                ("a008_story", tab_label_for_key("a008_story"), "file-text"),
                ("a007_event", tab_label_for_key("a007_event"), "calendar"),
            ],
            roles: &[UserRole::Admin, UserRole::Brand],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    // Роль фиксируется гейтом до входа в layout; достаточно снять один раз
    let current_role = session.role.with_untracked(|r| r.unwrap_or(UserRole::Buyer));

    let expanded_groups = RwSignal::new(vec![]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().filter_map(|group| {
                    // Skip groups not visible for the current role
                    if !group.roles.contains(&current_role) {
                        return None;
                    }

                    let group_id = group.id.to_string();
                    let has_children = !group.items.is_empty();

                    let group_id_stored = StoredValue::new(group_id.clone());
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    Some(view! {
                        <div>
                            // Parent item
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    let gid = group_id_stored.get_value();
                                    !has_children && ctx.active.get().as_ref().map(|a| a == &gid).unwrap_or(false)
                                }
                                style:padding-left="12px"
                                on:click=move |_| {
                                    if has_children {
                                        let gid = group_id_for_click.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    } else {
                                        ctx.open_tab(group.id, group.label);
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                {has_children.then(|| {
                                    let gid_exp = group_id_for_exp.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    }
                                })}
                            </div>

                            // Children
                            {has_children.then(|| {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                                let item_id = StoredValue::new(id.to_string());
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            let iid = item_id.get_value();
                                                            ctx.active.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                                                        }
                                                        style:padding-left="10px"
                                                        on:click=move |_| {
                                                            ctx.open_tab(id, label);
                                                        }
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    })
                }).collect_view()}
        </div>
    }
}
