use iced::alignment::Vertical;
use iced::widget::{column, scrollable};
use iced::{Element, Event, Length, Subscription, Task, Theme};

mod state;
mod ui;

use state::catalog::{self, Asset, Category};
use state::prefs;
use state::view::ViewState;
use ui::NavTarget;

/// Main application state
struct Cantilever {
    /// Transient UI state; the catalogue itself is static data
    view: ViewState,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Search text changed (live, every keystroke)
    SearchChanged(String),
    /// A category pill was pressed
    CategoryPressed(Category),
    /// An asset's preview/purchase action opened the detail modal
    AssetOpened(&'static Asset),
    /// The detail modal was dismissed (close button or backdrop)
    ModalDismissed,
    /// The compact-layout menu button opened the drawer
    MobileMenuOpened,
    /// The drawer was dismissed (close button or backdrop)
    MobileMenuClosed,
    /// A navigation link was activated
    NavLinkPressed(NavTarget),
    /// The theme toggle was pressed
    ThemeToggled,
    /// The stored theme preference finished resolving
    ThemeResolved(Option<state::view::ThemeChoice>),
    /// A preference write completed
    ThemeStored(Result<(), String>),
    /// The window was resized
    WindowResized(iced::Size),
    /// Escape pressed: dismiss the topmost transient surface
    EscapePressed,
}

fn page_scroll() -> scrollable::Id {
    scrollable::Id::new("page")
}

impl Cantilever {
    /// Create a new instance and kick off the one-time preference read
    fn new() -> (Self, Task<Message>) {
        println!(
            "🏛  Cantilever storefront starting with {} demo assets",
            catalog::ASSETS.len()
        );

        (
            Cantilever {
                view: ViewState::default(),
            },
            Task::perform(prefs::load_theme(), Message::ThemeResolved),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.view.set_search(query);
                Task::none()
            }
            Message::CategoryPressed(category) => {
                self.view.toggle_category(category);
                Task::none()
            }
            Message::AssetOpened(asset) => {
                self.view.open_asset(asset);
                Task::none()
            }
            Message::ModalDismissed => {
                self.view.dismiss_modal();
                Task::none()
            }
            Message::MobileMenuOpened => {
                self.view.open_menu();
                Task::none()
            }
            Message::MobileMenuClosed => {
                self.view.close_menu();
                Task::none()
            }
            Message::NavLinkPressed(target) => {
                // A link activation inside the drawer also closes it
                self.view.close_menu();
                scrollable::snap_to(
                    page_scroll(),
                    scrollable::RelativeOffset {
                        x: 0.0,
                        y: target.scroll_offset(),
                    },
                )
            }
            Message::ThemeToggled => match self.view.toggle_theme() {
                Some(choice) => Task::perform(prefs::store_theme(choice), Message::ThemeStored),
                // Preference still unresolved; nothing to flip yet
                None => Task::none(),
            },
            Message::ThemeResolved(stored) => {
                self.view.resolve_theme(stored.unwrap_or_default());
                Task::none()
            }
            Message::ThemeStored(Ok(())) => {
                println!("💾 Theme preference saved");
                Task::none()
            }
            Message::ThemeStored(Err(err)) => {
                eprintln!("⚠️  Failed to save theme preference: {err}");
                Task::none()
            }
            Message::WindowResized(size) => {
                self.view.window_width = size.width;
                if !self.view.is_compact() {
                    // The drawer only exists below the breakpoint
                    self.view.close_menu();
                }
                Task::none()
            }
            Message::EscapePressed => {
                if self.view.modal_open {
                    self.view.dismiss_modal();
                } else {
                    self.view.close_menu();
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = column![
            ui::navbar::navbar(&self.view),
            scrollable(
                column![
                    ui::hero::hero(&self.view),
                    ui::catalogue::catalogue(&self.view),
                    ui::sections::creator_cta(&self.view),
                    ui::sections::pricing(&self.view),
                    ui::sections::faq(&self.view),
                    ui::sections::footer(),
                ]
                .width(Length::Fill),
            )
            .id(page_scroll())
            .width(Length::Fill)
            .height(Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        let base: Element<Message> = page.into();

        if self.view.modal_open {
            if let Some(asset) = self.view.selected {
                return ui::modal::overlay(
                    base,
                    ui::modal::asset_modal(asset, self.view.is_compact()),
                    Message::ModalDismissed,
                    Vertical::Center,
                );
            }
        }

        if self.view.mobile_menu_open {
            return ui::modal::overlay(
                base,
                ui::navbar::drawer(),
                Message::MobileMenuClosed,
                Vertical::Top,
            );
        }

        base
    }

    /// Resolve the branded theme from the preference lifecycle
    fn theme(&self) -> Theme {
        ui::widgets::app_theme(self.view.theme.effective())
    }

    /// Window resize tracking and the Escape shortcut
    fn subscription(&self) -> Subscription<Message> {
        let window = iced::event::listen_with(|event, _status, _window| match event {
            Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        });

        let keys = iced::keyboard::on_key_press(|key, _modifiers| match key {
            iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape) => {
                Some(Message::EscapePressed)
            }
            _ => None,
        });

        Subscription::batch([window, keys])
    }
}

fn main() -> iced::Result {
    iced::application("Cantilever", Cantilever::update, Cantilever::view)
        .theme(Cantilever::theme)
        .subscription(Cantilever::subscription)
        .window_size(iced::Size::new(1280.0, 900.0))
        .centered()
        .run_with(Cantilever::new)
}
