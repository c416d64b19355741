use contracts::enums::UserRole;
use leptos::prelude::*;

use super::storage;

/// Сессия консоли: выбранная роль.
///
/// Настоящей аутентификации нет — роль выбирается на входе и хранится
/// в localStorage, чтобы переживать перезагрузку страницы.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub role: RwSignal<Option<UserRole>>,
}

impl SessionContext {
    pub fn new() -> Self {
        // Restore role from localStorage on startup
        let restored = storage::get_role().and_then(|code| UserRole::from_code(&code));
        Self {
            role: RwSignal::new(restored),
        }
    }

    /// Выбрать роль и запомнить её
    pub fn set_role(&self, role: UserRole) {
        storage::save_role(role.code());
        self.role.set(Some(role));
    }

    /// Выйти к экрану выбора роли
    pub fn clear(&self) {
        storage::clear_role();
        self.role.set(None);
    }

    /// Текущая роль (до выбора — байер, но гейт не пускает дальше)
    pub fn current(&self) -> UserRole {
        self.role.get().unwrap_or(UserRole::Buyer)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
