use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::AccountStatus;
use crate::shared::listing::{Facet, ListRecord, RangeField, ToggleField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор менеджера продаж
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SalesManagerId(pub Uuid);

impl SalesManagerId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for SalesManagerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SalesManagerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Менеджер продаж платформы — ведёт портфель брендов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesManager {
    #[serde(flatten)]
    pub base: BaseAggregate<SalesManagerId>,

    /// Статус аккаунта
    pub status: AccountStatus,

    /// Email для связи
    pub email: String,

    /// Телефон
    pub phone: String,

    /// Брендов в портфеле
    #[serde(rename = "brandCount")]
    pub brand_count: u32,
}

impl SalesManager {
    pub fn new(
        code: String,
        full_name: String,
        status: AccountStatus,
        email: String,
        phone: String,
        brand_count: u32,
    ) -> Self {
        Self {
            base: BaseAggregate::new(SalesManagerId::new_v4(), code, full_name),
            status,
            email,
            phone,
            brand_count,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Имя менеджера не может быть пустым".into());
        }
        if !self.email.contains('@') {
            return Err(format!("Некорректный email: '{}'", self.email));
        }
        Ok(())
    }
}

impl AggregateRoot for SalesManager {
    type Id = SalesManagerId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "sales_manager"
    }

    fn element_name() -> &'static str {
        "Менеджер продаж"
    }

    fn list_name() -> &'static str {
        "Менеджеры продаж"
    }
}

impl ListRecord for SalesManager {
    fn record_id(&self) -> String {
        self.base.id.as_string()
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.base.description.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }

    fn facet_terms(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Status => vec![self.status.code().to_string()],
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
