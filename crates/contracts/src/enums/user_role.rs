use serde::{Deserialize, Serialize};

/// Роли пользователей консоли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Brand,
    Buyer,
    Sales,
}

impl UserRole {
    /// Получить код роли
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Brand => "brand",
            UserRole::Buyer => "buyer",
            UserRole::Sales => "sales",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Администратор",
            UserRole::Brand => "Бренд",
            UserRole::Buyer => "Байер",
            UserRole::Sales => "Менеджер продаж",
        }
    }

    /// Короткое описание роли для экрана выбора
    pub fn blurb(&self) -> &'static str {
        match self {
            UserRole::Admin => "Справочники, заказы и библиотека ресурсов платформы",
            UserRole::Brand => "Заказы, истории и материалы вашего бренда",
            UserRole::Buyer => "Каталог коллекций, заказы и события шоурума",
            UserRole::Sales => "Бренды и байеры вашего портфеля",
        }
    }

    /// Получить все роли
    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Admin,
            UserRole::Brand,
            UserRole::Buyer,
            UserRole::Sales,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(UserRole::Admin),
            "brand" => Some(UserRole::Brand),
            "buyer" => Some(UserRole::Buyer),
            "sales" => Some(UserRole::Sales),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_code_round_trip() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
        assert_eq!(UserRole::from_code("root"), None);
    }
}
