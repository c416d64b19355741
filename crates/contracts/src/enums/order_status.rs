use serde::{Deserialize, Serialize};

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Confirmed,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Черновик",
            OrderStatus::Confirmed => "Подтверждён",
            OrderStatus::Shipped => "Отгружен",
            OrderStatus::Completed => "Завершён",
            OrderStatus::Cancelled => "Отменён",
        }
    }

    /// CSS-класс бейджа для таблиц
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "badge badge--gray",
            OrderStatus::Confirmed => "badge badge--blue",
            OrderStatus::Shipped => "badge badge--amber",
            OrderStatus::Completed => "badge badge--green",
            OrderStatus::Cancelled => "badge badge--red",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Draft,
            OrderStatus::Confirmed,
            OrderStatus::Shipped,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(OrderStatus::Draft),
            "confirmed" => Some(OrderStatus::Confirmed),
            "shipped" => Some(OrderStatus::Shipped),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}
