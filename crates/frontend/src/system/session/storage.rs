use web_sys::window;

const ROLE_KEY: &str = "session_role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save selected role code to localStorage
pub fn save_role(code: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ROLE_KEY, code);
    }
}

/// Get selected role code from localStorage
pub fn get_role() -> Option<String> {
    get_local_storage()?.get_item(ROLE_KEY).ok()?
}

/// Clear selected role
pub fn clear_role() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ROLE_KEY);
    }
}
