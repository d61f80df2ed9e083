use gloo_storage::{LocalStorage, Storage};

/// Guarda el string tal cual (sin JSON), igual que `localStorage.setItem`
pub fn save_to_storage(key: &str, value: &str) -> Result<(), String> {
    LocalStorage::raw()
        .set_item(key, value)
        .map_err(|e| format!("Error guardando en localStorage: {:?}", e))
}

/// Lee el string tal cual. Clave ausente -> `None`.
pub fn load_from_storage(key: &str) -> Option<String> {
    match LocalStorage::raw().get_item(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("⚠️ Error leyendo '{}' de localStorage: {:?}", key, e);
            None
        }
    }
}
