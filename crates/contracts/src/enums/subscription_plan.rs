use serde::{Deserialize, Serialize};

/// Тарифный план бренда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    Start,
    Business,
    Premium,
}

impl SubscriptionPlan {
    /// Получить код тарифа
    pub fn code(&self) -> &'static str {
        match self {
            SubscriptionPlan::Start => "start",
            SubscriptionPlan::Business => "business",
            SubscriptionPlan::Premium => "premium",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionPlan::Start => "Старт",
            SubscriptionPlan::Business => "Бизнес",
            SubscriptionPlan::Premium => "Премиум",
        }
    }

    /// Получить все тарифы
    pub fn all() -> Vec<SubscriptionPlan> {
        vec![
            SubscriptionPlan::Start,
            SubscriptionPlan::Business,
            SubscriptionPlan::Premium,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "start" => Some(SubscriptionPlan::Start),
            "business" => Some(SubscriptionPlan::Business),
            "premium" => Some(SubscriptionPlan::Premium),
            _ => None,
        }
    }
}
