/// Scrim overlays and the asset detail modal
///
/// Overlays stack a layer above the page behind a darkened scrim. The
/// scrim swallows all background interaction while the layer is up;
/// clicking it emits the dismiss message. The same mechanism hosts both
/// the centered detail modal and the top-anchored drawer sheet.

use iced::alignment::Vertical;
use iced::widget::{button, column, container, horizontal_rule, horizontal_space, mouse_area, opaque, row, stack, text};
use iced::{Color, Element, Length, Theme};

use crate::state::catalog::{Asset, CREATOR_BADGES};
use crate::ui::widgets::{
    self, FONT_SEMIBOLD, TEXT_BASE, TEXT_LG, TEXT_SM, TEXT_XL, TEXT_XS,
};
use crate::Message;

/// Stack `layer` over `base` behind a darkened scrim. A click on the
/// scrim (but not on the layer itself) emits `on_blur`.
pub fn overlay<'a>(
    base: Element<'a, Message>,
    layer: Element<'a, Message>,
    on_blur: Message,
    anchor: Vertical,
) -> Element<'a, Message> {
    let veil = container(opaque(layer))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .align_y(anchor)
        .padding(match anchor {
            Vertical::Center => 24.0,
            _ => 0.0,
        })
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(
                Color {
                    a: 0.6,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..iced::widget::container::Style::default()
        });

    stack![base, opaque(mouse_area(veil).on_press(on_blur))].into()
}

fn badge_row() -> Element<'static, Message> {
    let mut badges = row![].spacing(6.0);
    for (glyph, label) in CREATOR_BADGES {
        badges = badges.push(widgets::tag(format!("{glyph} {label}")));
    }
    badges.into()
}

fn fact_line(glyph: &'static str, line: String) -> Element<'static, Message> {
    row![text(glyph).size(TEXT_SM), text(line).size(TEXT_SM)]
        .spacing(8.0)
        .align_y(iced::Alignment::Center)
        .into()
}

/// The detail card shown over the page for a selected asset
pub fn asset_modal(asset: &'static Asset, compact: bool) -> Element<'static, Message> {
    let header = row![
        widgets::avatar(asset.author.name),
        column![
            text(asset.title).size(TEXT_BASE).font(FONT_SEMIBOLD),
            text(format!("by {}", asset.author.name))
                .size(TEXT_SM)
                .style(widgets::muted),
        ]
        .spacing(2.0),
        horizontal_space(),
        button(text("✕").size(TEXT_LG))
            .padding([4.0, 10.0])
            .style(widgets::glyph_button)
            .on_press(Message::ModalDismissed),
    ]
    .spacing(12.0)
    .align_y(iced::Alignment::Center);

    let mut highlights = column![].spacing(6.0);
    for highlight in asset.highlights {
        highlights = highlights.push(
            row![text("✔").size(TEXT_SM), text(*highlight).size(TEXT_SM)].spacing(8.0),
        );
    }

    let facts = column![
        badge_row(),
        fact_line("▤", format!("Formats: {}", asset.formats.join(", "))),
        fact_line("⌂", format!("Cities: {}", asset.city_tags.join(", "))),
        fact_line("✔", "License: Single-firm commercial".to_string()),
        column![
            text("Highlights").size(TEXT_SM).font(FONT_SEMIBOLD),
            highlights,
        ]
        .spacing(8.0),
        row![
            column![
                text(format!("₹{}", asset.price_inr()))
                    .size(TEXT_XL)
                    .font(FONT_SEMIBOLD),
                text(format!("${} (excl. taxes)", asset.price))
                    .size(TEXT_XS)
                    .style(widgets::muted),
            ]
            .spacing(2.0),
            horizontal_space(),
            widgets::ghost_button("View creator", None),
            widgets::pill_button("↧ Purchase", None),
        ]
        .spacing(8.0)
        .align_y(iced::Alignment::Center),
    ]
    .spacing(14.0)
    .width(Length::Fill);

    let cover_height = if compact { 160.0 } else { 280.0 };
    let cover = widgets::cover_tile(asset, cover_height, false);

    let body: Element<Message> = if compact {
        column![cover, facts].spacing(16.0).into()
    } else {
        row![
            container(cover).width(Length::FillPortion(2)),
            container(facts).width(Length::FillPortion(3)),
        ]
        .spacing(18.0)
        .into()
    };

    container(
        column![header, horizontal_rule(1), body]
            .spacing(14.0)
            .width(Length::Fill),
    )
    .max_width(if compact { 420.0 } else { 760.0 })
    .padding(18.0)
    .style(widgets::card)
    .into()
}
