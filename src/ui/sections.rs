/// Lower page sections: creator CTA, pricing tiers, FAQ, and footer

use chrono::{Datelike, Utc};
use iced::widget::{button, column, container, horizontal_rule, row, text, Column, Row};
use iced::{Border, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::catalog::{Asset, FaqEntry, PricingTier, ASSETS, FAQ_ENTRIES, PRICING_TIERS};
use crate::state::view::ViewState;
use crate::ui::widgets::{
    self, FONT_SEMIBOLD, TEXT_BASE, TEXT_SM, TEXT_XL, TEXT_XS, TEXT_2XL,
};
use crate::ui::NavTarget;
use crate::Message;

fn bullet(label: &'static str) -> Element<'static, Message> {
    row![text("✔").size(TEXT_SM), text(label).size(TEXT_SM)]
        .spacing(8.0)
        .into()
}

/// Small asset card for the creator showcase grid
fn showcase_card(asset: &'static Asset) -> Element<'static, Message> {
    container(
        column![
            widgets::cover_tile(asset, 92.0, false),
            column![
                text(asset.title).size(TEXT_XS).font(FONT_SEMIBOLD),
                text(asset.author.name).size(TEXT_XS).style(widgets::muted),
            ]
            .spacing(2.0)
            .padding(8.0),
        ],
    )
    .width(Length::Fill)
    .style(widgets::card)
    .into()
}

/// Sell-your-assets pitch with a grid of every demo asset
pub fn creator_cta(state: &ViewState) -> Element<'_, Message> {
    let pitch = column![
        text("Sell your architectural assets on Cantilever")
            .size(TEXT_2XL)
            .font(FONT_SEMIBOLD),
        text(
            "Monetize your BIM families, CAD details, spec templates, and \
             render packs. Keep up to 85% revenue, with instant payouts, \
             watermarking, and license controls.",
        )
        .size(TEXT_BASE)
        .style(widgets::muted),
        row![
            widgets::pill_button("⇪ Upload your first asset", None),
            widgets::ghost_button("Creator guide", None),
        ]
        .spacing(8.0),
        column![
            bullet("Invisible watermarking"),
            bullet("City/code tagging"),
            bullet("Analytics & payouts"),
        ]
        .spacing(8.0),
    ]
    .spacing(16.0)
    .width(Length::Fill);

    let showcase = column![
        row![showcase_card(&ASSETS[0]), showcase_card(&ASSETS[1])].spacing(12.0),
        row![showcase_card(&ASSETS[2]), showcase_card(&ASSETS[3])].spacing(12.0),
    ]
    .spacing(12.0)
    .width(Length::Fill);

    let content: Element<Message> = if state.is_compact() {
        column![pitch, showcase].spacing(24.0).into()
    } else {
        row![
            container(pitch).width(Length::FillPortion(1)),
            container(showcase).width(Length::FillPortion(1)),
        ]
        .spacing(36.0)
        .align_y(iced::Alignment::Center)
        .into()
    };

    widgets::page_section(content)
}

/// One pricing tier card; the featured tier carries a brand border.
fn tier_card(tier: &'static PricingTier) -> Element<'static, Message> {
    let mut bullets: Column<Message> = column![].spacing(8.0);
    for line in tier.bullets {
        bullets = bullets.push(bullet(line));
    }

    let cta = if tier.featured {
        widgets::pill_button(tier.cta, None)
    } else {
        widgets::ghost_button(tier.cta, None)
    };

    let featured = tier.featured;

    container(
        column![
            text(tier.kicker)
                .size(TEXT_SM)
                .font(FONT_SEMIBOLD)
                .style(move |theme: &Theme| {
                    if featured {
                        iced::widget::text::Style {
                            color: Some(theme.extended_palette().primary.base.color),
                        }
                    } else {
                        widgets::muted(theme)
                    }
                }),
            text(tier.headline).size(TEXT_XL).font(FONT_SEMIBOLD),
            text(tier.blurb).size(TEXT_SM).style(widgets::muted),
            bullets,
            cta,
        ]
        .spacing(12.0),
    )
    .width(330.0)
    .padding(20.0)
    .style(move |theme: &Theme| {
        let mut style = widgets::card(theme);
        if featured {
            style.border = Border {
                color: theme.extended_palette().primary.base.color,
                width: 2.0,
                ..style.border
            };
        }
        style
    })
    .into()
}

/// The three-tier pricing section
pub fn pricing(_state: &ViewState) -> Element<'static, Message> {
    let tiers = Wrap::with_elements(PRICING_TIERS.iter().map(tier_card).collect())
        .spacing(18.0)
        .line_spacing(18.0);

    widgets::page_section(
        column![
            text("Simple pricing").size(TEXT_2XL).font(FONT_SEMIBOLD),
            text("Buy once, use forever. Optional Pro plan for teams.")
                .size(TEXT_BASE)
                .style(widgets::muted),
            tiers,
        ]
        .spacing(14.0)
        .align_x(iced::Alignment::Center),
    )
}

fn faq_card(entry: &'static FaqEntry) -> Element<'static, Message> {
    container(
        column![
            text(entry.question).size(TEXT_BASE).font(FONT_SEMIBOLD),
            text(entry.answer).size(TEXT_SM).style(widgets::muted),
        ]
        .spacing(8.0),
    )
    .width(Length::Fill)
    .padding(18.0)
    .style(widgets::card)
    .into()
}

/// FAQ cards, two per row on wide layouts
pub fn faq(state: &ViewState) -> Element<'_, Message> {
    let per_row = if state.is_compact() { 1 } else { 2 };

    let mut grid: Column<Message> = column![].spacing(14.0);
    for pair in FAQ_ENTRIES.chunks(per_row) {
        let mut line: Row<Message> = row![].spacing(14.0);
        for entry in pair {
            line = line.push(faq_card(entry));
        }
        grid = grid.push(line);
    }

    widgets::page_section(
        column![
            container(text("FAQs").size(TEXT_2XL).font(FONT_SEMIBOLD))
                .width(Length::Fill)
                .center_x(Length::Fill),
            grid,
        ]
        .spacing(18.0),
    )
}

fn footer_heading(label: &'static str) -> Element<'static, Message> {
    text(label).size(TEXT_SM).font(FONT_SEMIBOLD).into()
}

fn footer_link(label: &'static str, target: Option<NavTarget>) -> Element<'static, Message> {
    match target {
        Some(target) => button(text(label).size(TEXT_SM).style(widgets::muted))
            .padding(0.0)
            .style(widgets::glyph_button)
            .on_press(Message::NavLinkPressed(target))
            .into(),
        None => text(label).size(TEXT_SM).style(widgets::muted).into(),
    }
}

/// Footer with link columns and the copyright line
pub fn footer() -> Element<'static, Message> {
    let brand = column![
        row![
            widgets::brand_mark(),
            text("Cantilever").size(TEXT_BASE).font(FONT_SEMIBOLD),
        ]
        .spacing(8.0)
        .align_y(iced::Alignment::Center),
        text("The marketplace for architects.")
            .size(TEXT_SM)
            .style(widgets::muted),
    ]
    .spacing(10.0)
    .width(Length::FillPortion(2));

    let product = column![
        footer_heading("Product"),
        footer_link("Browse", Some(NavTarget::Browse)),
        footer_link("Pricing", Some(NavTarget::Pricing)),
        footer_link("FAQ", Some(NavTarget::Faq)),
    ]
    .spacing(8.0)
    .width(Length::FillPortion(1));

    let creators = column![
        footer_heading("For Creators"),
        footer_link("Upload assets", None),
        footer_link("Creator guidelines", None),
        footer_link("Legal & licensing", None),
    ]
    .spacing(8.0)
    .width(Length::FillPortion(1));

    let company = column![
        footer_heading("Company"),
        footer_link("About", None),
        footer_link("Contact", None),
        footer_link("Terms & Privacy", None),
    ]
    .spacing(8.0)
    .width(Length::FillPortion(1));

    let copyright = container(
        text(format!(
            "© {} Cantilever. All rights reserved.",
            Utc::now().year()
        ))
        .size(TEXT_XS)
        .style(widgets::muted),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([14.0, 0.0]);

    column![
        horizontal_rule(1),
        widgets::page_section(
            column![
                row![brand, product, creators, company].spacing(24.0),
                copyright,
            ]
            .spacing(18.0),
        ),
    ]
    .into()
}
