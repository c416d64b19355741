use serde::{Deserialize, Serialize};

/// Статус аккаунта (бренда, байера, менеджера)
///
/// Закрытый набор: никакие другие значения не допустимы.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Pending,
    Inactive,
}

impl AccountStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Pending => "pending",
            AccountStatus::Inactive => "inactive",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Активен",
            AccountStatus::Pending => "На модерации",
            AccountStatus::Inactive => "Отключён",
        }
    }

    /// CSS-класс бейджа для таблиц
    pub fn badge_class(&self) -> &'static str {
        match self {
            AccountStatus::Active => "badge badge--green",
            AccountStatus::Pending => "badge badge--amber",
            AccountStatus::Inactive => "badge badge--gray",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<AccountStatus> {
        vec![
            AccountStatus::Active,
            AccountStatus::Pending,
            AccountStatus::Inactive,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(AccountStatus::Active),
            "pending" => Some(AccountStatus::Pending),
            "inactive" => Some(AccountStatus::Inactive),
            _ => None,
        }
    }
}
