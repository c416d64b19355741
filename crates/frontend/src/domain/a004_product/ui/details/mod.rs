use super::list::CatalogStateSignal;
use crate::shared::icons::icon;
use contracts::domain::a004_product::Product;
use leptos::prelude::*;

/// Детальная карточка товара (модальное окно каталога).
///
/// Читает запись из движка страницы, поэтому отметка «избранное»
/// обновляется в карточке и в сетке одновременно.
#[component]
pub fn ProductDetails(
    state: CatalogStateSignal,
    id: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let id_stored = StoredValue::new(id);

    let product = move || -> Option<Product> {
        let id = id_stored.get_value();
        state.with(|s| {
            s.engine
                .records()
                .iter()
                .find(|p| p.to_string_id() == id)
                .cloned()
        })
    };

    let toggle_favorite = move |_| {
        let id = id_stored.get_value();
        state.update(|s| {
            s.engine.update_record(&id, |p| p.toggle_favorite());
        });
    };

    view! {
        {move || match product() {
            None => view! {
                <div style="padding: 20px; color: #888;">
                    {"Товар не найден"}
                    <button class="button button--secondary" on:click=move |_| on_close.run(())>
                        {"Закрыть"}
                    </button>
                </div>
            }.into_any(),
            Some(product) => {
                let favorite = product.favorite;
                let rows: Vec<(&'static str, String)> = vec![
                    ("Артикул", product.base.code.clone()),
                    ("Бренд", product.brand_name.clone()),
                    ("Категория", format!("{} / {}", product.category, product.sub_category)),
                    ("Цена", product.price.clone()),
                    ("Материал", product.material.clone()),
                    ("Доступность", product.availability.display_name().to_string()),
                    ("Сезон", product.season.clone()),
                    ("Цвет", product.color.clone()),
                    ("Размерная сетка", product.size_range.clone()),
                    ("Минимальная партия", product.minimum_order.clone()),
                    ("Срок производства", product.lead_time.clone()),
                    ("Отгрузка из", product.shipping_from.clone()),
                    (
                        "Сертификаты",
                        if product.certificates.is_empty() {
                            "—".to_string()
                        } else {
                            product.certificates.join(", ")
                        },
                    ),
                    (
                        "Эксклюзив",
                        if product.is_exclusive { "Да" } else { "Нет" }.to_string(),
                    ),
                ];

                view! {
                    <div style="display: flex; flex-direction: column; gap: 12px; padding: 16px; min-width: 420px;">
                        <div style="display: flex; justify-content: space-between; align-items: center;">
                            <h2 style="margin: 0; font-size: 18px;">{product.base.description.clone()}</h2>
                            <div style="display: flex; gap: 6px; align-items: center;">
                                <button
                                    style=format!(
                                        "background: none; border: 1px solid #ddd; border-radius: 4px; cursor: pointer; padding: 4px 8px; display: inline-flex; align-items: center; gap: 6px; color: {};",
                                        if favorite { "#e53935" } else { "#666" }
                                    )
                                    on:click=toggle_favorite
                                >
                                    {icon(if favorite { "heart-filled" } else { "heart" })}
                                    {if favorite { "В избранном" } else { "В избранное" }}
                                </button>
                                <button
                                    style="background: none; border: none; cursor: pointer; padding: 4px; color: #666;"
                                    title="Закрыть"
                                    on:click=move |_| on_close.run(())
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        </div>
                        <table style="border-collapse: collapse; font-size: 14px;">
                            <tbody>
                                {rows.into_iter().map(|(label, value)| {
                                    view! {
                                        <tr style="border-bottom: 1px solid #f0f0f0;">
                                            <td style="padding: 6px 16px 6px 0; color: #888; white-space: nowrap;">{label}</td>
                                            <td style="padding: 6px 0;">{value}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }
        }}
    }
}
