/// UI composition module
///
/// Render functions for each page section, consuming the view state and
/// the static catalogue and emitting application messages:
/// - Shared styling primitives and themes (widgets.rs)
/// - Navbar and the compact-layout drawer (navbar.rs)
/// - Hero with the live search input (hero.rs)
/// - Category pills, asset grid, empty state (catalogue.rs)
/// - Scrim overlays and the asset detail modal (modal.rs)
/// - Creator CTA, pricing, FAQ, footer (sections.rs)

pub mod catalogue;
pub mod hero;
pub mod modal;
pub mod navbar;
pub mod sections;
pub mod widgets;

/// Page sections reachable from the navigation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Browse,
    Creators,
    Pricing,
    Faq,
}

impl NavTarget {
    /// All links, in navbar order.
    pub const ALL: [NavTarget; 4] = [
        NavTarget::Browse,
        NavTarget::Creators,
        NavTarget::Pricing,
        NavTarget::Faq,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Browse => "Browse",
            NavTarget::Creators => "Creators",
            NavTarget::Pricing => "Pricing",
            NavTarget::Faq => "FAQ",
        }
    }

    /// Approximate vertical position of the section within the page
    /// scrollable, as a relative offset. iced has no intrinsic anchor
    /// targets, so links snap to these tuned positions.
    pub fn scroll_offset(self) -> f32 {
        match self {
            NavTarget::Browse => 0.16,
            NavTarget::Creators => 0.46,
            NavTarget::Pricing => 0.66,
            NavTarget::Faq => 0.86,
        }
    }
}
