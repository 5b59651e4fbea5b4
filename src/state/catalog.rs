/// Static catalogue data for the storefront
///
/// Everything the page displays is defined here as static demo data:
/// the four assets, the closed category set, and the marketing content
/// (creator badges, pricing tiers, FAQ entries). Nothing in this module
/// is mutated after startup.

/// Exchange rate used for the localized price line on cards and in the
/// detail modal. Prices are stored in USD.
pub const USD_TO_INR: u32 = 85;

/// One of the four fixed asset classifications.
///
/// The closed set makes the category invariant a compile-time property:
/// an asset cannot carry an unknown category, and every `match` over
/// categories is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// BIM families (Revit etc.)
    Bim,
    /// CAD detail libraries
    Details,
    /// Specification document templates
    Specs,
    /// Texture / render packs
    Renders,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Bim,
        Category::Details,
        Category::Specs,
        Category::Renders,
    ];

    /// Stable identifier key
    pub fn key(self) -> &'static str {
        match self {
            Category::Bim => "bim",
            Category::Details => "details",
            Category::Specs => "specs",
            Category::Renders => "renders",
        }
    }

    /// Display label for filter pills and headings
    pub fn label(self) -> &'static str {
        match self {
            Category::Bim => "BIM Families",
            Category::Details => "Detail Libraries",
            Category::Specs => "Spec Templates",
            Category::Renders => "Render Packs",
        }
    }

    /// Display glyph shown on pills and cover placeholders
    pub fn icon(self) -> &'static str {
        match self {
            Category::Bim => "▣",
            Category::Details => "▤",
            Category::Specs => "▥",
            Category::Renders => "✦",
        }
    }
}

/// Creator attribution attached to an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Author {
    /// Display name of the studio or creator
    pub name: &'static str,
    /// External avatar URL. Opaque reference only; never fetched.
    pub avatar: &'static str,
}

/// A purchasable digital architectural resource
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asset {
    /// Unique identifier
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Classification within the closed category set
    pub category: Category,
    /// Price in USD
    pub price: u32,
    /// Buyer rating in [0, 5]
    pub rating: f32,
    /// Sales counter. Display-only; nothing in the app increments it.
    pub sales: u32,
    /// City tags for display and future localization filters
    pub city_tags: &'static [&'static str],
    /// Deliverable file formats
    pub formats: &'static [&'static str],
    /// External cover image URL. Opaque reference only; never fetched.
    pub cover: &'static str,
    /// Creator attribution
    pub author: Author,
    /// Short feature strings, also searched by the filter
    pub highlights: &'static [&'static str],
}

impl Asset {
    /// Localized price line shown above the USD price
    pub fn price_inr(&self) -> u32 {
        self.price * USD_TO_INR
    }
}

/// The demo catalogue, in insertion order. Filtering preserves this order.
pub static ASSETS: [Asset; 4] = [
    Asset {
        id: "a1",
        title: "Parametric Door Set — Revit 2024",
        category: Category::Bim,
        price: 29,
        rating: 4.8,
        sales: 321,
        city_tags: &["Bengaluru"],
        formats: &["RFA", "RVT"],
        cover: "https://images.unsplash.com/photo-1538688423619-a81d3f23454b?q=80&w=1400&auto=format&fit=crop",
        author: Author {
            name: "Studio Kinetic",
            avatar: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=300&auto=format&fit=crop",
        },
        highlights: &["LOD 300", "Handing flip", "FC-based materials"],
    },
    Asset {
        id: "a2",
        title: "Residential Stair Details (IS:456) — DWG/DXF",
        category: Category::Details,
        price: 39,
        rating: 4.6,
        sales: 198,
        city_tags: &["Hyderabad", "Pune"],
        formats: &["DWG", "DXF", "PDF"],
        cover: "https://images.unsplash.com/photo-1519710164239-da123dc03ef4?q=80&w=1400&auto=format&fit=crop",
        author: Author {
            name: "Axis Atelier",
            avatar: "https://images.unsplash.com/photo-1550525811-e5869dd03032?q=80&w=300&auto=format&fit=crop",
        },
        highlights: &["Code tagged", "Section/plan/elevations", "Ready-to-print"],
    },
    Asset {
        id: "a3",
        title: "Office Fit-out Spec Template — DOCX",
        category: Category::Specs,
        price: 24,
        rating: 4.5,
        sales: 142,
        city_tags: &["Mumbai", "Delhi NCR"],
        formats: &["DOCX"],
        cover: "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=1400&auto=format&fit=crop",
        author: Author {
            name: "North Grid",
            avatar: "https://images.unsplash.com/photo-1527980965255-d3b416303d12?q=80&w=300&auto=format&fit=crop",
        },
        highlights: &["CSI aligned", "Editable clauses", "QA checklist"],
    },
    Asset {
        id: "a4",
        title: "PBR Concrete & Wood — Render Pack",
        category: Category::Renders,
        price: 19,
        rating: 4.7,
        sales: 501,
        city_tags: &["Chennai"],
        formats: &["PNG", "JPG", "SBSAR"],
        cover: "https://images.unsplash.com/photo-1554995207-c18c203602cb?q=80&w=1400&auto=format&fit=crop",
        author: Author {
            name: "Render Foundry",
            avatar: "https://images.unsplash.com/photo-1527980965255-d3b416303d12?q=80&w=300&auto=format&fit=crop",
        },
        highlights: &["4k maps", "Physically correct", "Material presets"],
    },
];

/// Badges shown next to the creator in the detail modal
pub const CREATOR_BADGES: [(&str, &str); 3] = [
    ("✔", "Verified creator"),
    ("★", "Top rated"),
    ("↧", "500+ downloads"),
];

/// One column of the pricing section
#[derive(Debug, Clone, Copy)]
pub struct PricingTier {
    /// Small label above the headline
    pub kicker: &'static str,
    /// Large headline (price or positioning line)
    pub headline: &'static str,
    /// One-sentence description
    pub blurb: &'static str,
    /// Feature bullets
    pub bullets: &'static [&'static str],
    /// Call-to-action label
    pub cta: &'static str,
    /// The emphasized middle tier
    pub featured: bool,
}

/// The three pricing tiers, left to right.
pub static PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        kicker: "Marketplace",
        headline: "Pay per asset",
        blurb: "From ₹500–₹4,500 per asset depending on complexity.",
        bullets: &[
            "Commercial license",
            "Updates included 6 months",
            "Instant download",
        ],
        cta: "Browse assets",
        featured: false,
    },
    PricingTier {
        kicker: "Pro (Teams)",
        headline: "₹1,999 / user / mo",
        blurb: "Shared seats, private catalogs, and admin controls.",
        bullets: &[
            "Private asset libraries",
            "Version pinning",
            "Priority support",
        ],
        cta: "Start free trial",
        featured: true,
    },
    PricingTier {
        kicker: "Creator",
        headline: "Up to 85% rev share",
        blurb: "Instant payouts, watermarking, license controls.",
        bullets: &[
            "Invisible watermarking",
            "Analytics dashboard",
            "Fast review SLAs",
        ],
        cta: "Become a seller",
        featured: false,
    },
];

/// One question/answer card in the FAQ section
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// The FAQ content, in display order.
pub static FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "How are assets verified?",
        answer: "We review structure, parameters, performance, and code tags. \
                 Verified creators receive a badge.",
    },
    FaqEntry {
        question: "What license do I get?",
        answer: "Single-firm commercial license with unlimited projects. Stamping \
                 or permit submissions require local professionals.",
    },
    FaqEntry {
        question: "Can I request custom changes?",
        answer: "Yes. Use the 'Request tweak' option on the asset page to \
                 commission the creator.",
    },
    FaqEntry {
        question: "How do payouts work for creators?",
        answer: "Instant payouts to Indian bank accounts via supported processors \
                 after each sale.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_has_four_assets_with_unique_ids() {
        let ids: HashSet<&str> = ASSETS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ASSETS.len());
        assert_eq!(ASSETS.len(), 4);
    }

    #[test]
    fn test_every_category_is_in_the_closed_set() {
        for asset in &ASSETS {
            assert!(Category::ALL.contains(&asset.category));
        }
    }

    #[test]
    fn test_category_keys_are_distinct() {
        let keys: HashSet<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys.len(), Category::ALL.len());
    }

    #[test]
    fn test_ratings_within_range() {
        for asset in &ASSETS {
            assert!(asset.rating >= 0.0 && asset.rating <= 5.0, "{}", asset.id);
            assert!(asset.price > 0);
        }
    }

    #[test]
    fn test_inr_conversion() {
        let door_set = &ASSETS[0];
        assert_eq!(door_set.price_inr(), door_set.price * 85);
    }
}
