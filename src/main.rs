use iced::widget::{container, image};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;
use std::error::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use profile_card::{AppConfig, ImageImporter, ProfileEdit, ProfileStore, UserProfile};

mod ui;

/// Which screen is showing
enum Screen {
    /// The card, with its picture already read from disk
    Display {
        profile: UserProfile,
        picture: Option<image::Handle>,
    },
    /// The edit form
    Edit(ProfileEdit),
}

/// Main application state
struct ProfileCard {
    store: ProfileStore,
    importer: ImageImporter,
    /// Shown while nothing has been saved yet
    default_profile: UserProfile,
    screen: Screen,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Edit Profile" on the card
    EditProfile,
    /// Name input changed
    NameChanged(String),
    /// User clicked "Pick Image"
    PickImage,
    /// User clicked "Save"
    Save,
    /// User left the edit screen without saving
    Cancel,
}

impl ProfileCard {
    /// Open the profile store and show the current profile
    fn open(config: &AppConfig) -> Result<Self, Box<dyn Error>> {
        let store = ProfileStore::open(config.database_path())?;
        let importer = ImageImporter::new(config.image_path());
        let default_profile = UserProfile::new(config.default_name.clone(), None);

        let mut app = ProfileCard {
            store,
            importer,
            default_profile,
            screen: Screen::Edit(ProfileEdit::default()),
            status: String::new(),
        };
        app.show_current()?;

        Ok(app)
    }

    /// Switch to the display screen with whatever the store holds
    fn show_current(&mut self) -> Result<(), Box<dyn Error>> {
        let profile = self.store.get_or(self.default_profile.clone())?;
        self.show(profile);
        Ok(())
    }

    fn show(&mut self, profile: UserProfile) {
        let picture = ui::display::load_picture(&profile);
        self.screen = Screen::Display { profile, picture };
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EditProfile => {
                self.status.clear();
                self.screen = Screen::Edit(ProfileEdit::default());
            }
            Message::NameChanged(name) => {
                if let Screen::Edit(edit) = &mut self.screen {
                    edit.name = name;
                }
            }
            Message::PickImage => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select Profile Picture")
                    .add_filter("Images", &["jpg", "jpeg", "png", "gif", "webp", "bmp"])
                    .pick_file();

                if let (Some(path), Screen::Edit(edit)) = (picked, &mut self.screen) {
                    info!("Picked {}", path.display());
                    edit.picked_image = Some(path);
                }
            }
            Message::Save => {
                if let Screen::Edit(edit) = &self.screen {
                    match edit.apply(&self.store, &self.importer) {
                        Ok(profile) => {
                            self.status = "✅ Profile saved.".to_string();
                            self.show(profile);
                        }
                        Err(err) => {
                            error!("Saving profile failed: {}", err);
                            self.status = format!("Could not save profile: {}", err);
                        }
                    }
                }
            }
            Message::Cancel => {
                self.status.clear();
                if let Err(err) = self.show_current() {
                    error!("Loading profile failed: {}", err);
                    self.status = format!("Could not load profile: {}", err);
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content = match &self.screen {
            Screen::Display { profile, picture } => {
                ui::display::view(profile, picture.as_ref(), &self.status)
            }
            Screen::Edit(edit) => ui::edit::view(edit, &self.status),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("profile_card=info")),
        )
        .init();

    let config = AppConfig::load()?;
    let app = ProfileCard::open(&config)?;
    info!("🎨 Profile card ready, data in {}", config.data_dir.display());

    iced::application("Profile Card", ProfileCard::update, ProfileCard::view)
        .theme(ProfileCard::theme)
        .centered()
        .run_with(move || (app, Task::none()))?;

    Ok(())
}
