/// Shared look-and-feel for the storefront
///
/// Design tokens (spacing, type scale, radii, brand colors), the custom
/// light/dark themes, and the small styled building blocks every section
/// uses: tag chips, pill buttons, card containers, cover tiles.

use iced::widget::text::IntoFragment;
use iced::widget::{button, column, container, row, text};
use iced::{font, Border, Color, Element, Font, Length, Shadow, Theme, Vector};

use crate::state::catalog::{Asset, Category};
use crate::state::view::ThemeChoice;

// ── Type scale ───────────────────────────────────────────────────

pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 13.0;
pub const TEXT_BASE: f32 = 15.0;
pub const TEXT_LG: f32 = 17.0;
pub const TEXT_XL: f32 = 22.0;
pub const TEXT_2XL: f32 = 28.0;
pub const TEXT_3XL: f32 = 40.0;

pub const FONT_SEMIBOLD: Font = Font {
    family: font::Family::SansSerif,
    weight: font::Weight::Semibold,
    stretch: font::Stretch::Normal,
    style: font::Style::Normal,
};

pub const FONT_BOLD: Font = Font {
    family: font::Family::SansSerif,
    weight: font::Weight::Bold,
    stretch: font::Stretch::Normal,
    style: font::Style::Normal,
};

// ── Layout ───────────────────────────────────────────────────────

pub const PAGE_MAX_WIDTH: f32 = 1120.0;
pub const CARD_WIDTH: f32 = 310.0;

pub const RADIUS_MD: f32 = 10.0;
pub const RADIUS_LG: f32 = 14.0;
pub const RADIUS_XL: f32 = 18.0;
pub const RADIUS_FULL: f32 = 999.0;

// ── Brand palette ────────────────────────────────────────────────

/// Primary brand blue (light theme)
pub const BRAND: Color = Color {
    r: 0.145,
    g: 0.388,
    b: 0.922,
    a: 1.0,
};

/// Primary brand blue, lifted for dark backgrounds
const BRAND_SOFT: Color = Color {
    r: 0.231,
    g: 0.510,
    b: 0.965,
    a: 1.0,
};

const EMERALD: Color = Color {
    r: 0.063,
    g: 0.725,
    b: 0.506,
    a: 1.0,
};

const AMBER: Color = Color {
    r: 0.961,
    g: 0.620,
    b: 0.043,
    a: 1.0,
};

const VIOLET: Color = Color {
    r: 0.545,
    g: 0.361,
    b: 0.965,
    a: 1.0,
};

const RED: Color = Color {
    r: 0.937,
    g: 0.267,
    b: 0.267,
    a: 1.0,
};

const LIGHT_PALETTE: iced::theme::Palette = iced::theme::Palette {
    background: Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    },
    text: Color {
        r: 0.067,
        g: 0.094,
        b: 0.153,
        a: 1.0,
    },
    primary: BRAND,
    success: EMERALD,
    danger: RED,
};

const DARK_PALETTE: iced::theme::Palette = iced::theme::Palette {
    background: Color {
        r: 0.039,
        g: 0.039,
        b: 0.039,
        a: 1.0,
    },
    text: Color {
        r: 0.96,
        g: 0.96,
        b: 0.96,
        a: 1.0,
    },
    primary: BRAND_SOFT,
    success: EMERALD,
    danger: RED,
};

/// Resolve the branded iced theme for the current choice
pub fn app_theme(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Light => Theme::custom("Cantilever Light".to_string(), LIGHT_PALETTE),
        ThemeChoice::Dark => Theme::custom("Cantilever Dark".to_string(), DARK_PALETTE),
    }
}

/// Accent color used to tint a category's pills and cover tiles
pub fn category_accent(category: Category) -> Color {
    match category {
        Category::Bim => BRAND_SOFT,
        Category::Details => EMERALD,
        Category::Specs => AMBER,
        Category::Renders => VIOLET,
    }
}

// ── Text helpers ─────────────────────────────────────────────────

/// Secondary text color derived from the theme
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color {
            a: 0.55,
            ..theme.extended_palette().background.base.text
        }),
    }
}

// ── Buttons ──────────────────────────────────────────────────────

/// Filled rounded call-to-action. `None` leaves the button inert while
/// keeping the live look (the demo has several decorative CTAs).
pub fn pill_button<'a, Message: Clone + 'a>(
    label: impl IntoFragment<'a>,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    button(text(label).size(TEXT_SM).font(FONT_SEMIBOLD))
        .padding([9.0, 18.0])
        .style(primary_pill)
        .on_press_maybe(on_press)
        .into()
}

/// Outlined rounded secondary action
pub fn ghost_button<'a, Message: Clone + 'a>(
    label: impl IntoFragment<'a>,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    button(text(label).size(TEXT_SM))
        .padding([9.0, 18.0])
        .style(ghost_pill)
        .on_press_maybe(on_press)
        .into()
}

/// Style for the filled brand pill. Disabled renders like active so
/// inert demo CTAs do not look greyed out.
pub fn primary_pill(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        button::Status::Active | button::Status::Disabled => palette.primary.base.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: RADIUS_FULL.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Style for the outlined pill
pub fn ghost_pill(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: RADIUS_FULL.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Borderless glyph button (theme toggle, close, menu)
pub fn glyph_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: RADIUS_FULL.into(),
        },
        shadow: Shadow::default(),
    }
}

// ── Containers ───────────────────────────────────────────────────

/// Bordered card surface with a soft shadow
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.weak.color,
            width: 1.0,
            radius: RADIUS_XL.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.08,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        ..container::Style::default()
    }
}

/// Small translucent chip, legible over cover tiles and cards alike
fn chip_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(
            Color {
                a: 0.85,
                ..palette.background.base.color
            }
            .into(),
        ),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: RADIUS_FULL.into(),
        },
        ..container::Style::default()
    }
}

/// Rounded square brand mark ("C") used in the navbar, drawer, and footer
pub fn brand_mark<'a, Message: 'a>() -> Element<'a, Message> {
    container(
        text("C")
            .size(TEXT_BASE)
            .font(FONT_BOLD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().primary.base.text),
            }),
    )
    .padding([3.0, 9.0])
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().primary.base.color.into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: RADIUS_MD.into(),
        },
        ..container::Style::default()
    })
    .into()
}

/// Tag chip with extra-small text
pub fn tag<'a, Message: 'a>(label: impl IntoFragment<'a>) -> Element<'a, Message> {
    container(text(label).size(TEXT_XS))
        .padding([3.0, 9.0])
        .style(chip_style)
        .into()
}

/// Center a section's content and cap it at the page width
pub fn page_section<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(
        container(content)
            .max_width(PAGE_MAX_WIDTH)
            .width(Length::Fill)
            .padding([44.0, 24.0]),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

// ── Cover tiles ──────────────────────────────────────────────────

/// Placeholder cover art for an asset.
///
/// Cover URLs are opaque external references and there is no network
/// layer to fetch them, so covers render as a category-tinted tile with
/// the category glyph. `detailed` adds the city-tag and format chips the
/// full-size cards show.
pub fn cover_tile<'a, Message: 'a>(
    asset: &'static Asset,
    height: f32,
    detailed: bool,
) -> Element<'a, Message> {
    let accent = category_accent(asset.category);

    let glyph = text(asset.category.icon())
        .size(height * 0.28)
        .style(move |_theme: &Theme| text::Style {
            color: Some(Color { a: 0.9, ..accent }),
        });

    let mut frame = column![]
        .spacing(6.0)
        .width(Length::Fill)
        .height(Length::Fill);

    if detailed {
        let mut tags = row![].spacing(6.0);
        for city in asset.city_tags.iter().take(2) {
            tags = tags.push(tag(*city));
        }
        frame = frame.push(tags);
    }

    frame = frame.push(container(glyph).center(Length::Fill));

    if detailed {
        frame = frame.push(row![tag(asset.formats.join(" · "))]);
    }

    container(frame)
        .height(height)
        .width(Length::Fill)
        .padding(10.0)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Color { a: 0.16, ..accent }.into()),
            border: Border {
                color: Color { a: 0.25, ..accent },
                width: 1.0,
                radius: RADIUS_LG.into(),
            },
            ..container::Style::default()
        })
        .into()
}

/// Circular initial standing in for an author avatar (never fetched)
pub fn avatar<'a, Message: 'a>(name: &'static str) -> Element<'a, Message> {
    let initial = name.chars().next().unwrap_or('?');

    container(
        text(initial.to_string())
            .size(TEXT_SM)
            .font(FONT_SEMIBOLD)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().primary.base.text),
            }),
    )
    .padding([6.0, 11.0])
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().primary.base.color.into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: RADIUS_FULL.into(),
        },
        ..container::Style::default()
    })
    .into()
}
