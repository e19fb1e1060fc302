/// A pending profile edit, as collected by the edit screen.
///
/// Applying it imports the picked picture (if any) and then replaces the
/// stored profile wholesale. An edit without a picture clears the stored
/// picture path, matching what the user sees on the edit screen.
use std::path::PathBuf;
use tracing::info;

use super::data::UserProfile;
use super::profile_store::ProfileStore;
use crate::error::{AppError, ImportError};
use crate::import::image_importer::ImageImporter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEdit {
    /// Name typed by the user
    pub name: String,
    /// Picture picked in the file dialog, not yet imported
    pub picked_image: Option<PathBuf>,
}

impl ProfileEdit {
    pub fn new(name: impl Into<String>, picked_image: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            picked_image,
        }
    }

    /// Import the picked picture, then save the profile.
    ///
    /// If the import fails the stored profile is left untouched.
    pub fn apply(
        &self,
        store: &ProfileStore,
        importer: &ImageImporter,
    ) -> Result<UserProfile, AppError> {
        let image_path = match &self.picked_image {
            Some(picked) => {
                let imported = importer.import_from(picked)?;
                // Stored as TEXT, so the path must be exact UTF-8
                let text = imported
                    .into_os_string()
                    .into_string()
                    .map_err(|raw| ImportError::NonUtf8Path { path: raw.into() })?;
                Some(text)
            }
            None => None,
        };

        let profile = UserProfile::new(self.name.clone(), image_path);
        store.save(&profile)?;

        info!("Profile edit applied for {:?}", profile.name);
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_apply_imports_then_saves() {
        let dir = tempfile::tempdir().unwrap();
        let picked = dir.path().join("selfie.png");
        fs::write(&picked, b"selfie").unwrap();

        let store = ProfileStore::open_in_memory().unwrap();
        let importer = ImageImporter::new(dir.path().join("data").join("profile.jpg"));

        let saved = ProfileEdit::new("Ada", Some(picked)).apply(&store, &importer).unwrap();

        let expected_path = importer.destination().to_string_lossy().into_owned();
        assert_eq!(saved, UserProfile::new("Ada", Some(expected_path)));
        assert_eq!(store.get().unwrap(), Some(saved));
        assert_eq!(fs::read(importer.destination()).unwrap(), b"selfie");
    }

    #[test]
    fn test_apply_without_picture_clears_path() {
        let dir = tempfile::tempdir().unwrap();
        let picked = dir.path().join("selfie.png");
        fs::write(&picked, b"selfie").unwrap();

        let store = ProfileStore::open_in_memory().unwrap();
        let importer = ImageImporter::new(dir.path().join("profile.jpg"));

        ProfileEdit::new("Ada", Some(picked)).apply(&store, &importer).unwrap();
        let saved = ProfileEdit::new("Grace", None).apply(&store, &importer).unwrap();

        assert_eq!(saved, UserProfile::new("Grace", None));
        assert_eq!(store.get().unwrap(), Some(saved));
    }

    #[test]
    fn test_failed_import_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::open_in_memory().unwrap();
        let importer = ImageImporter::new(dir.path().join("profile.jpg"));
        store.save(&UserProfile::new("Ada", None)).unwrap();

        let edit = ProfileEdit::new("Grace", Some(dir.path().join("missing.png")));
        let err = edit.apply(&store, &importer).unwrap_err();

        assert!(matches!(err, AppError::Import(_)));
        assert_eq!(store.get().unwrap(), Some(UserProfile::new("Ada", None)));
    }

    #[test]
    fn test_stored_path_is_absolute_and_readable() {
        let dir = tempfile::tempdir().unwrap();
        let picked = dir.path().join("selfie.png");
        fs::write(&picked, b"selfie").unwrap();

        let store = ProfileStore::open_in_memory().unwrap();
        let importer = ImageImporter::new(dir.path().join("data").join("profile.jpg"));

        let saved = ProfileEdit::new("Ada", Some(picked)).apply(&store, &importer).unwrap();

        let stored = PathBuf::from(saved.image_path.unwrap());
        assert!(stored.is_absolute());
        assert_eq!(fs::read(&stored).unwrap(), b"selfie");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_data_dir_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let picked = dir.path().join("selfie.png");
        fs::write(&picked, b"selfie").unwrap();

        let data = dir.path().join(OsStr::from_bytes(b"d\xffata"));
        let store = ProfileStore::open_in_memory().unwrap();
        let importer = ImageImporter::new(data.join("profile.jpg"));

        let err = ProfileEdit::new("Ada", Some(picked))
            .apply(&store, &importer)
            .unwrap_err();

        assert!(matches!(err, AppError::Import(ImportError::NonUtf8Path { .. })));
        assert_eq!(store.get().unwrap(), None);
    }
}
