//! Profile card core: a single-row SQLite profile store and an image importer
//! that copies a picked picture into app-local storage.

pub mod config;
pub mod error;
pub mod import;
pub mod state;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, ImportError, StoreError};
pub use import::image_importer::{ImageImporter, ImageSource};
pub use state::data::UserProfile;
pub use state::edit::ProfileEdit;
pub use state::profile_store::ProfileStore;
