/// Fixed top navigation bar and the compact-layout drawer
///
/// On wide windows the links render inline; below the breakpoint they
/// collapse behind a menu button that opens the drawer sheet (rendered
/// through the scrim overlay in modal.rs).

use iced::widget::{button, column, container, horizontal_rule, horizontal_space, row, text, Column};
use iced::{Element, Length, Theme};

use crate::state::view::{ThemeChoice, ThemeLifecycle, ViewState};
use crate::ui::widgets::{
    self, FONT_SEMIBOLD, PAGE_MAX_WIDTH, TEXT_BASE, TEXT_LG, TEXT_SM,
};
use crate::ui::NavTarget;
use crate::Message;

/// Glyph for the theme toggle. Neutral until the stored preference has
/// resolved, so the control never flashes the wrong theme; afterwards it
/// shows the mode a press would switch to.
fn theme_glyph(theme: ThemeLifecycle) -> &'static str {
    match theme {
        ThemeLifecycle::Unresolved => "◐",
        ThemeLifecycle::Resolved(ThemeChoice::Dark) => "☀",
        ThemeLifecycle::Resolved(ThemeChoice::Light) => "☾",
    }
}

fn nav_link(target: NavTarget) -> Element<'static, Message> {
    button(text(target.label()).size(TEXT_SM).style(widgets::muted))
        .padding([6.0, 10.0])
        .style(widgets::glyph_button)
        .on_press(Message::NavLinkPressed(target))
        .into()
}

/// The sticky navbar
pub fn navbar(state: &ViewState) -> Element<'static, Message> {
    let mut left = row![].spacing(10.0).align_y(iced::Alignment::Center);

    if state.is_compact() {
        left = left.push(
            button(text("☰").size(TEXT_LG))
                .padding([4.0, 10.0])
                .style(widgets::glyph_button)
                .on_press(Message::MobileMenuOpened),
        );
    }

    left = left.push(widgets::brand_mark());
    left = left.push(text("Cantilever").size(TEXT_BASE).font(FONT_SEMIBOLD));

    if !state.is_compact() {
        let mut links = row![].spacing(4.0);
        for target in NavTarget::ALL {
            links = links.push(nav_link(target));
        }
        left = left.push(container(links).padding([0.0, 16.0]));
    }

    let right = row![
        button(text(theme_glyph(state.theme)).size(TEXT_LG))
            .padding([4.0, 10.0])
            .style(widgets::glyph_button)
            .on_press(Message::ThemeToggled),
        widgets::ghost_button("Sign in", None),
        widgets::pill_button("+ Become a seller", None),
    ]
    .spacing(8.0)
    .align_y(iced::Alignment::Center);

    let bar = container(
        row![left, horizontal_space(), right]
            .align_y(iced::Alignment::Center)
            .width(Length::Fill),
    )
    .max_width(PAGE_MAX_WIDTH)
    .width(Length::Fill)
    .padding([10.0, 24.0]);

    column![
        container(bar)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(|theme: &Theme| iced::widget::container::Style {
                background: Some(theme.extended_palette().background.base.color.into()),
                ..iced::widget::container::Style::default()
            }),
        horizontal_rule(1),
    ]
    .into()
}

/// The drawer sheet for compact layouts. Every link press both navigates
/// and closes the drawer; the scrim handles backdrop dismissal.
pub fn drawer() -> Element<'static, Message> {
    let header = row![
        widgets::brand_mark(),
        text("Cantilever").size(TEXT_BASE).font(FONT_SEMIBOLD),
        horizontal_space(),
        button(text("✕").size(TEXT_LG))
            .padding([4.0, 10.0])
            .style(widgets::glyph_button)
            .on_press(Message::MobileMenuClosed),
    ]
    .spacing(10.0)
    .align_y(iced::Alignment::Center);

    let mut links: Column<Message> = column![].spacing(4.0);
    for target in NavTarget::ALL {
        links = links.push(
            button(text(target.label()).size(TEXT_BASE))
                .padding([8.0, 12.0])
                .width(Length::Fill)
                .style(widgets::glyph_button)
                .on_press(Message::NavLinkPressed(target)),
        );
    }

    container(column![header, links].spacing(16.0))
        .width(Length::Fill)
        .padding(20.0)
        .style(|theme: &Theme| iced::widget::container::Style {
            background: Some(theme.extended_palette().background.base.color.into()),
            border: iced::Border {
                color: theme.extended_palette().background.weak.color,
                width: 1.0,
                radius: iced::border::Radius {
                    top_left: 0.0,
                    top_right: 0.0,
                    bottom_right: widgets::RADIUS_XL,
                    bottom_left: widgets::RADIUS_XL,
                },
            },
            ..iced::widget::container::Style::default()
        })
        .into()
}
