/// Browse section: category pills, the asset grid, and the empty state
///
/// The grid is recomputed from the pure filter on every render; cards
/// reflow through the Wrap widget as the window narrows.

use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Border, Element, Length, Shadow, Theme};
use iced_aw::Wrap;

use crate::state::catalog::{Asset, Category, ASSETS};
use crate::state::filter::filter_assets;
use crate::state::view::ViewState;
use crate::ui::widgets::{self, CARD_WIDTH, FONT_SEMIBOLD, TEXT_BASE, TEXT_SM, TEXT_XL, TEXT_XS};
use crate::Message;

/// Category filter pill; the active pill is filled with the brand color.
fn category_pill(category: Category, active: bool) -> Element<'static, Message> {
    let label = format!("{} {}", category.icon(), category.label());

    button(text(label).size(TEXT_SM))
        .padding([8.0, 16.0])
        .style(move |theme: &Theme, status| {
            if active {
                widgets::primary_pill(theme, status)
            } else {
                widgets::ghost_pill(theme, status)
            }
        })
        .on_press(Message::CategoryPressed(category))
        .into()
}

fn rating_row(asset: &'static Asset) -> Element<'static, Message> {
    row![
        text(format!("★ {:.1}", asset.rating)).size(TEXT_SM),
        text(format!("↧ {}", asset.sales))
            .size(TEXT_SM)
            .style(widgets::muted),
    ]
    .spacing(12.0)
    .into()
}

fn price_column(asset: &'static Asset) -> Element<'static, Message> {
    column![
        text(format!("₹{}", asset.price_inr()))
            .size(TEXT_BASE)
            .font(FONT_SEMIBOLD),
        text(format!("${}", asset.price))
            .size(TEXT_XS)
            .style(widgets::muted),
    ]
    .align_x(iced::Alignment::End)
    .into()
}

/// One asset card in the grid
fn asset_card(asset: &'static Asset) -> Element<'static, Message> {
    let mut highlight_tags = row![].spacing(6.0);
    for highlight in asset.highlights.iter().take(3) {
        highlight_tags = highlight_tags.push(widgets::tag(*highlight));
    }

    let body = column![
        row![
            column![
                text(asset.title).size(TEXT_BASE).font(FONT_SEMIBOLD),
                text(asset.author.name).size(TEXT_SM).style(widgets::muted),
            ]
            .spacing(3.0)
            .width(Length::Fill),
            price_column(asset),
        ]
        .spacing(10.0),
        rating_row(asset),
        highlight_tags,
        row![
            widgets::ghost_button("Preview", Some(Message::AssetOpened(asset))),
            horizontal_space(),
            widgets::pill_button("↧ Add to cart", Some(Message::AssetOpened(asset))),
        ]
        .align_y(iced::Alignment::Center),
    ]
    .spacing(12.0)
    .padding(14.0);

    container(column![widgets::cover_tile(asset, 170.0, true), body])
        .width(CARD_WIDTH)
        .style(widgets::card)
        .into()
}

/// Panel shown when the filter matches nothing. A defined UI state, not
/// an error.
fn empty_state() -> Element<'static, Message> {
    container(
        column![
            text("No results found").size(TEXT_BASE).font(FONT_SEMIBOLD),
            text("Try a different search term or category.")
                .size(TEXT_SM)
                .style(widgets::muted),
        ]
        .spacing(6.0)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding(40.0)
    .center_x(Length::Fill)
    .style(|theme: &Theme| iced::widget::container::Style {
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: widgets::RADIUS_XL.into(),
        },
        shadow: Shadow::default(),
        background: None,
        text_color: None,
    })
    .into()
}

pub fn catalogue(state: &ViewState) -> Element<'_, Message> {
    let visible = filter_assets(&ASSETS, &state.search, state.active_category);

    let pills = Wrap::with_elements(
        Category::ALL
            .iter()
            .map(|&category| {
                category_pill(category, state.active_category == Some(category))
            })
            .collect(),
    )
    .spacing(8.0)
    .line_spacing(8.0);

    let grid: Element<Message> = if visible.is_empty() {
        empty_state()
    } else {
        Wrap::with_elements(visible.into_iter().map(asset_card).collect())
            .spacing(18.0)
            .line_spacing(18.0)
            .into()
    };

    widgets::page_section(
        column![
            text("Browse assets").size(TEXT_XL).font(FONT_SEMIBOLD),
            pills,
            grid,
        ]
        .spacing(18.0),
    )
}
