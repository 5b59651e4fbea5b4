/// Hero section: headline, trust markers, and the live search input
///
/// The search field drives the catalogue filter on every keystroke. Wide
/// layouts also show a 2×2 preview grid of the demo assets.

use iced::widget::{column, container, row, text, text_input};
use iced::{Element, Length};

use crate::state::catalog::{Asset, ASSETS};
use crate::state::view::ViewState;
use crate::ui::widgets::{
    self, FONT_SEMIBOLD, TEXT_BASE, TEXT_SM, TEXT_XS, TEXT_3XL,
};
use crate::Message;

const SEARCH_PLACEHOLDER: &str =
    "Search: Revit 2024 door, IS:456 stair detail, office spec...";

fn trust_marker(glyph: &'static str, label: &'static str) -> Element<'static, Message> {
    row![
        text(glyph).size(TEXT_SM),
        text(label).size(TEXT_SM).style(widgets::muted),
    ]
    .spacing(6.0)
    .align_y(iced::Alignment::Center)
    .into()
}

/// Small preview card for the hero grid
fn mini_card(asset: &'static Asset) -> Element<'static, Message> {
    container(
        column![
            widgets::cover_tile(asset, 104.0, false),
            column![
                text(asset.title).size(TEXT_SM).font(FONT_SEMIBOLD),
                text(asset.formats.join(" "))
                    .size(TEXT_XS)
                    .style(widgets::muted),
            ]
            .spacing(3.0)
            .padding(10.0),
        ],
    )
    .width(Length::Fill)
    .style(widgets::card)
    .into()
}

pub fn hero(state: &ViewState) -> Element<'_, Message> {
    let copy = column![
        text("The marketplace for architects.")
            .size(TEXT_3XL)
            .font(FONT_SEMIBOLD),
        text(
            "Find BIM families, detail libraries, spec templates and render \
             packs that save hours per project—curated and code-tagged.",
        )
        .size(TEXT_BASE)
        .style(widgets::muted),
        row![
            trust_marker("✔", "Verified creators"),
            trust_marker("▣", "Local code tags"),
            trust_marker("↧", "Instant delivery"),
        ]
        .spacing(18.0),
        row![
            text_input(SEARCH_PLACEHOLDER, &state.search)
                .on_input(Message::SearchChanged)
                .padding(12.0)
                .size(TEXT_SM)
                .width(Length::Fill),
            widgets::pill_button("Filters", None),
        ]
        .spacing(8.0)
        .align_y(iced::Alignment::Center),
    ]
    .spacing(18.0)
    .width(Length::Fill);

    let content: Element<Message> = if state.is_compact() {
        copy.into()
    } else {
        let previews = column![
            row![mini_card(&ASSETS[0]), mini_card(&ASSETS[1])].spacing(14.0),
            row![mini_card(&ASSETS[2]), mini_card(&ASSETS[3])].spacing(14.0),
        ]
        .spacing(14.0)
        .width(Length::FillPortion(2));

        row![container(copy).width(Length::FillPortion(3)), previews]
            .spacing(36.0)
            .align_y(iced::Alignment::Center)
            .into()
    };

    widgets::page_section(content)
}
