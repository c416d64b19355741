use serde::{Deserialize, Serialize};

/// Доступность товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Есть на складе
    InStock,
    /// Производство под заказ
    MadeToOrder,
}

impl Availability {
    pub fn code(&self) -> &'static str {
        match self {
            Availability::InStock => "in_stock",
            Availability::MadeToOrder => "made_to_order",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Availability::InStock => "В наличии",
            Availability::MadeToOrder => "Под заказ",
        }
    }

    pub fn all() -> Vec<Availability> {
        vec![Availability::InStock, Availability::MadeToOrder]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "in_stock" => Some(Availability::InStock),
            "made_to_order" => Some(Availability::MadeToOrder),
            _ => None,
        }
    }
}
