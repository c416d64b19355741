use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::listing::{Facet, ListRecord, RangeField, ToggleField};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Уникальный идентификатор события
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowroomEventId(pub Uuid);

impl ShowroomEventId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ShowroomEventId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ShowroomEventId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Статус события шоурума
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Planned,
    RegistrationOpen,
    Finished,
}

impl EventStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EventStatus::Planned => "planned",
            EventStatus::RegistrationOpen => "registration_open",
            EventStatus::Finished => "finished",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventStatus::Planned => "Планируется",
            EventStatus::RegistrationOpen => "Открыта регистрация",
            EventStatus::Finished => "Завершено",
        }
    }

    pub fn all() -> Vec<EventStatus> {
        vec![
            EventStatus::Planned,
            EventStatus::RegistrationOpen,
            EventStatus::Finished,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "planned" => Some(EventStatus::Planned),
            "registration_open" => Some(EventStatus::RegistrationOpen),
            "finished" => Some(EventStatus::Finished),
            _ => None,
        }
    }
}

/// Событие шоурума: показ, презентация коллекции, байерский день
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowroomEvent {
    #[serde(flatten)]
    pub base: BaseAggregate<ShowroomEventId>,

    /// Дата проведения (ISO, "2026-09-03")
    pub date: String,

    /// Город
    pub city: String,

    /// Площадка
    pub venue: String,

    /// Формат ("Показ", "Презентация", "Байерский день")
    pub format: String,

    /// Статус события
    pub status: EventStatus,
}

impl ShowroomEvent {
    pub fn new(
        code: String,
        title: String,
        date: String,
        city: String,
        venue: String,
        format: String,
        status: EventStatus,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ShowroomEventId::new_v4(), code, title),
            date,
            city,
            venue,
            format,
            status,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название события не может быть пустым".into());
        }
        if self.date.trim().is_empty() {
            return Err("Дата события не может быть пустой".into());
        }
        Ok(())
    }
}

impl AggregateRoot for ShowroomEvent {
    type Id = ShowroomEventId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "event"
    }

    fn element_name() -> &'static str {
        "Событие"
    }

    fn list_name() -> &'static str {
        "События шоурума"
    }
}

impl ListRecord for ShowroomEvent {
    fn record_id(&self) -> String {
        self.base.id.as_string()
    }

    fn search_fields(&self) -> Vec<String> {
        vec![
            self.base.description.clone(),
            self.city.clone(),
            self.venue.clone(),
            self.format.clone(),
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
