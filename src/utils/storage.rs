use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

use crate::models::Session;

pub const STORAGE_KEY_SESSION: &str = "msPowerFitness_session";

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    LocalStorage::set(key, value).map_err(|e| format!("Error saving to localStorage: {}", e))
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

pub fn remove_from_storage(key: &str) {
    LocalStorage::delete(key);
}

pub fn save_session(session: &Session) -> Result<(), String> {
    save_to_storage(STORAGE_KEY_SESSION, session)
}

pub fn load_session() -> Option<Session> {
    load_from_storage(STORAGE_KEY_SESSION)
}

pub fn clear_session() {
    remove_from_storage(STORAGE_KEY_SESSION);
}
