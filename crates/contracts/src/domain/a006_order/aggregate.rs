use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::OrderStatus;
use crate::shared::listing::{parse_amount, Facet, ListRecord, RangeField, ToggleField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Оптовый заказ байера у бренда.
///
/// Код агрегата — номер заказа ("ORD-2026-014").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseAggregate<OrderId>,

    /// Название бренда-поставщика
    #[serde(rename = "brandName")]
    pub brand_name: String,

    /// Название магазина-заказчика
    #[serde(rename = "buyerName")]
    pub buyer_name: String,

    /// Дата размещения (ISO, "2026-07-14")
    pub date: String,

    /// Сумма заказа с валютой ("1 250 000 ₽")
    #[serde(rename = "totalAmount")]
    pub total_amount: String,

    /// Статус заказа
    pub status: OrderStatus,

    /// Количество позиций
    #[serde(rename = "itemCount")]
    pub item_count: u32,
}

impl Order {
    pub fn new(
        number: String,
        brand_name: String,
        buyer_name: String,
        date: String,
        total_amount: String,
        status: OrderStatus,
        item_count: u32,
    ) -> Self {
        let description = format!("{} → {}", brand_name, buyer_name);
        Self {
            base: BaseAggregate::new(OrderId::new_v4(), number, description),
            brand_name,
            buyer_name,
            date,
            total_amount,
            status,
            item_count,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Номер заказа не может быть пустым".into());
        }
        if parse_amount(&self.total_amount).is_none() {
            return Err(format!("Сумма не разбирается: '{}'", self.total_amount));
        }
        Ok(())
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Заказ"
    }

    fn list_name() -> &'static str {
        "Заказы"
    }
}

impl ListRecord for Order {
    fn record_id(&self) -> String {
        self.base.id.as_string()
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.base.code.clone(),
            self.brand_name.clone(),
            self.buyer_name.clone(),
        ]
    }

    fn facet_terms(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Status => vec![self.status.code().to_string()],
            Facet::Brand => vec![self.brand_name.clone()],
            _ => Vec::new(),
        }
    }

    fn range_value(&self, field: RangeField) -> Option<f64> {
        match field {
            // Сумма заказа ведёт себя как «цена»: по ней работают
            // диапазон и сортировка
            RangeField::Price => parse_amount(&self.total_amount),
            RangeField::MinimumOrder => None,
        }
    }

    fn toggle_value(&self, _toggle: ToggleField) -> bool {
        false
    }
}
