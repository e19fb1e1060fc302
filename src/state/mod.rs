/// State management module
///
/// This module handles the persisted profile:
/// - The profile record shared with the UI (data.rs)
/// - The SQLite profile table (profile_store.rs)
/// - Applying an edit: import the picture, then save (edit.rs)

pub mod data;
pub mod edit;
pub mod profile_store;
