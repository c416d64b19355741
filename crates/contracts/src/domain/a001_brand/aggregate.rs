use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{AccountStatus, SubscriptionPlan};
use crate::shared::listing::{Facet, ListRecord, RangeField, ToggleField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор бренда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandId(pub Uuid);

impl BrandId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for BrandId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BrandId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Бренд — поставщик коллекций на платформе
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    #[serde(flatten)]
    pub base: BaseAggregate<BrandId>,

    /// Статус аккаунта
    pub status: AccountStatus,

    /// Тарифный план
    pub plan: SubscriptionPlan,

    /// Контактное лицо
    #[serde(rename = "contactPerson")]
    pub contact_person: String,

    /// Email для связи
    pub email: String,

    /// Город шоурума
    pub city: String,

    /// Количество товаров в каталоге
    #[serde(rename = "productCount")]
    pub product_count: u32,

    /// Активные заказы
    #[serde(rename = "activeOrders")]
    pub active_orders: u32,
}

impl Brand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: String,
        name: String,
        status: AccountStatus,
        plan: SubscriptionPlan,
        contact_person: String,
        email: String,
        city: String,
        product_count: u32,
        active_orders: u32,
    ) -> Self {
        Self {
            base: BaseAggregate::new(BrandId::new_v4(), code, name),
            status,
            plan,
            contact_person,
            email,
            city,
            product_count,
            active_orders,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название бренда не может быть пустым".into());
        }
        if !self.email.contains('@') {
            return Err(format!("Некорректный email: '{}'", self.email));
        }
        Ok(())
    }
}

impl AggregateRoot for Brand {
    type Id = BrandId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "brand"
    }

    fn element_name() -> &'static str {
        "Бренд"
    }

    fn list_name() -> &'static str {
        "Бренды"
    }
}

// ============================================================================
// Listing
// ============================================================================

impl ListRecord for Brand {
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
            Facet::Plan => vec![self.plan.code().to_string()],
            _ => Vec::new(),
        }
    }

    fn range_value(&self, _field: RangeField) -> Option<f64> {
        None
    }

    fn toggle_value(&self, _toggle: ToggleField) -> bool {
        false
    }
}
