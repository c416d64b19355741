use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::listing::{Facet, ListRecord, RangeField, ToggleField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор ресурса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub Uuid);

impl ResourceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ResourceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ResourceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Материал библиотеки ресурсов (гайды, лукбуки, прайс-шаблоны)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    #[serde(flatten)]
    pub base: BaseAggregate<ResourceId>,

    /// Раздел библиотеки ("Гайды", "Лукбуки", "Шаблоны")
    pub category: String,

    /// Размер файла для отображения ("2.4 МБ")
    #[serde(rename = "fileSize")]
    pub file_size: String,

    /// Ссылка на файл
    pub link: String,

    /// Краткая аннотация
    pub annotation: String,
}

impl Resource {
    pub fn new(
        code: String,
        title: String,
        category: String,
        file_size: String,
        link: String,
        annotation: String,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ResourceId::new_v4(), code, title),
            category,
            file_size,
            link,
            annotation,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название ресурса не может быть пустым".into());
        }
        if self.link.trim().is_empty() {
            return Err("Ссылка не может быть пустой".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Resource {
    type Id = ResourceId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "resource"
    }

    fn element_name() -> &'static str {
        "Ресурс"
    }

    fn list_name() -> &'static str {
        "Библиотека ресурсов"
    }
}

impl ListRecord for Resource {
    fn record_id(&self) -> String {
        self.base.id.as_string()
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.base.description.clone(),
            self.category.clone(),
            self.annotation.clone(),
        ]
    }

    fn facet_terms(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Category => vec![self.category.clone()],
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
