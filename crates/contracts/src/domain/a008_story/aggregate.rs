use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::listing::{Facet, ListRecord, RangeField, ToggleField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор истории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub Uuid);

impl StoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for StoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(StoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Статус публикации истории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryStatus {
    Draft,
    Published,
    Archived,
}

impl StoryStatus {
    pub fn code(&self) -> &'static str {
        match self {
            StoryStatus::Draft => "draft",
            StoryStatus::Published => "published",
            StoryStatus::Archived => "archived",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StoryStatus::Draft => "Черновик",
            StoryStatus::Published => "Опубликована",
            StoryStatus::Archived => "В архиве",
        }
    }

    pub fn all() -> Vec<StoryStatus> {
        vec![
            StoryStatus::Draft,
            StoryStatus::Published,
            StoryStatus::Archived,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(StoryStatus::Draft),
            "published" => Some(StoryStatus::Published),
            "archived" => Some(StoryStatus::Archived),
            _ => None,
        }
    }
}

/// История бренда — редакционный материал на витрине
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    #[serde(flatten)]
    pub base: BaseAggregate<StoryId>,

    /// Название бренда
    #[serde(rename = "brandName")]
    pub brand_name: String,

    /// Дата публикации (ISO), пустая у черновиков
    #[serde(rename = "publishedAt")]
    pub published_at: String,

    /// Статус публикации
    pub status: StoryStatus,
}

impl Story {
    pub fn new(
        code: String,
        title: String,
        brand_name: String,
        published_at: String,
        status: StoryStatus,
    ) -> Self {
        Self {
            base: BaseAggregate::new(StoryId::new_v4(), code, title),
            brand_name,
            published_at,
            status,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Заголовок истории не может быть пустым".into());
        }
        if self.status == StoryStatus::Published && self.published_at.trim().is_empty() {
            return Err("У опубликованной истории должна быть дата".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Story {
    type Id = StoryId;

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
        "a008"
    }

    fn collection_name() -> &'static str {
        "story"
    }

    fn element_name() -> &'static str {
        "История"
    }

    fn list_name() -> &'static str {
        "Истории"
    }
}

impl ListRecord for Story {
    fn record_id(&self) -> String {
        self.base.id.as_string()
    }

    fn search_fields(&self) -> Vec<String> {
        vec![self.base.description.clone(), self.brand_name.clone()]
    }

    fn facet_terms(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Status => vec![self.status.code().to_string()],
            Facet::Brand => vec![self.brand_name.clone()],
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
