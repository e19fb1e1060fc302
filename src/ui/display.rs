use iced::widget::{button, column, container, image, text, Column};
use iced::{Alignment, Element, Length};
use std::fs;
use tracing::warn;

use profile_card::UserProfile;

use crate::Message;

/// Side length of the profile picture
const PICTURE_SIZE: f32 = 150.0;

/// Read the picture into memory.
///
/// The importer always writes the same path, so a path-based handle
/// would keep showing the cached old picture after a re-import.
pub fn load_picture(profile: &UserProfile) -> Option<image::Handle> {
    let path = profile.image_path.as_deref()?;

    match fs::read(path) {
        Ok(bytes) => Some(image::Handle::from_bytes(bytes)),
        Err(err) => {
            warn!("Cannot read profile picture {}: {}", path, err);
            None
        }
    }
}

pub fn view<'a>(
    profile: &'a UserProfile,
    picture: Option<&image::Handle>,
    status: &'a str,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match picture {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(PICTURE_SIZE))
            .height(Length::Fixed(PICTURE_SIZE))
            .into(),
        None => container(text("No picture").size(16))
            .width(Length::Fixed(PICTURE_SIZE))
            .height(Length::Fixed(PICTURE_SIZE))
            .center_x(Length::Fixed(PICTURE_SIZE))
            .center_y(Length::Fixed(PICTURE_SIZE))
            .into(),
    };

    let content: Column<Message> = column![
        picture,
        text(&profile.name).size(32),
        button("Edit Profile")
            .on_press(Message::EditProfile)
            .padding(10),
        text(status).size(16),
    ]
    .spacing(20)
    .padding(40)
    .align_x(Alignment::Center);

    content.into()
}
