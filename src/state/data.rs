/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the database layer and the UI layer.

/// Id of the only row the profile table may hold
pub const PROFILE_ID: i64 = 0;

/// The user's profile. There is at most one of these in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Always `PROFILE_ID`
    pub id: i64,
    /// Display name
    pub name: String,
    /// Absolute path to the imported picture (None = no custom picture)
    pub image_path: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, image_path: Option<String>) -> Self {
        Self {
            id: PROFILE_ID,
            name: name.into(),
            image_path,
        }
    }
}
