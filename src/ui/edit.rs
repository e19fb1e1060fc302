use iced::widget::{button, column, row, text, text_input, Column};
use iced::{Alignment, Element, Length};

use profile_card::ProfileEdit;

use crate::Message;

pub fn view<'a>(edit: &'a ProfileEdit, status: &'a str) -> Element<'a, Message> {
    let picked = match &edit.picked_image {
        Some(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        None => "No image picked".to_string(),
    };

    let content: Column<Message> = column![
        text_input("Name", &edit.name)
            .on_input(Message::NameChanged)
            .on_submit(Message::Save)
            .padding(10)
            .width(Length::Fixed(300.0)),
        button("Pick Image")
            .on_press(Message::PickImage)
            .padding(10),
        text(picked).size(14),
        row![
            button("Save").on_press(Message::Save).padding(10),
            button("Cancel").on_press(Message::Cancel).padding(10),
        ]
        .spacing(10),
        text(status).size(16),
    ]
    .spacing(20)
    .padding(40)
    .align_x(Alignment::Center);

    content.into()
}
