/// Image import module
///
/// Copies a picture the user picked into the app's data directory,
/// so the profile never points at a file outside our control.

pub mod image_importer;
