/// Screens of the profile card
///
/// - display.rs: the card itself (picture, name, Edit button)
/// - edit.rs: name input, image picker, Save/Cancel

pub mod display;
pub mod edit;
