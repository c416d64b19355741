use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::AccountStatus;
use crate::shared::listing::{parse_amount, Facet, ListRecord, RangeField, ToggleField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор байера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuyerId(pub Uuid);

impl BuyerId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for BuyerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BuyerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Профессиональный байер — закупщик магазина или сети
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buyer {
    #[serde(flatten)]
    pub base: BaseAggregate<BuyerId>,

    /// Статус аккаунта
    pub status: AccountStatus,

    /// Контактное лицо
    #[serde(rename = "contactPerson")]
    pub contact_person: String,

    /// Email для связи
    pub email: String,

    /// Город магазина
    pub city: String,

    /// Количество размещённых заказов
    #[serde(rename = "orderCount")]
    pub order_count: u32,

    /// Сумма закупок за всё время, с валютой ("3 400 000 ₽")
    #[serde(rename = "totalPurchases")]
    pub total_purchases: String,
}

impl Buyer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: String,
        store_name: String,
        status: AccountStatus,
        contact_person: String,
        email: String,
        city: String,
        order_count: u32,
        total_purchases: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(BuyerId::new_v4(), code, store_name),
            status,
            contact_person,
            email,
            city,
            order_count,
            total_purchases,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название магазина не может быть пустым".into());
        }
        if !self.email.contains('@') {
            return Err(format!("Некорректный email: '{}'", self.email));
        }
        Ok(())
    }
}

impl AggregateRoot for Buyer {
    type Id = BuyerId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "buyer"
    }

    fn element_name() -> &'static str {
        "Байер"
    }

    fn list_name() -> &'static str {
        "Байеры"
    }
}

impl ListRecord for Buyer {
    fn record_id(&self) -> String {
        self.base.id.as_string()
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.base.description.clone(),
            self.contact_person.clone(),
            self.email.clone(),
            self.city.clone(),
        ]
    }

    fn facet_terms(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Status => vec![self.status.code().to_string()],
            _ => Vec::new(),
        }
    }

    fn range_value(&self, field: RangeField) -> Option<f64> {
        match field {
            // Сумма закупок сортируется как «цена» записи
            RangeField::Price => parse_amount(&self.total_purchases),
            RangeField::MinimumOrder => None,
        }
    }

    fn toggle_value(&self, _toggle: ToggleField) -> bool {
        false
    }
}
