//! Water conservation tips, grouped the way the "How to Help" screen shows them.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TipCategory {
    Showers,
    Faucets,
    Outdoors,
    Extra,
}

impl TipCategory {
    /// Display order.
    pub const ALL: [TipCategory; 4] = [
        TipCategory::Showers,
        TipCategory::Faucets,
        TipCategory::Outdoors,
        TipCategory::Extra,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TipCategory::Showers => "Showers",
            TipCategory::Faucets => "Faucets",
            TipCategory::Outdoors => "Outdoors",
            TipCategory::Extra => "Extra",
        }
    }

    /// Tips in this category, in display order.
    pub fn tips(&self) -> impl Iterator<Item = &'static Tip> {
        let category = *self;
        TIPS.iter().filter(move |tip| tip.category == category)
    }
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown tip category {0:?} (expected showers, faucets, outdoors or extra)")]
pub struct UnknownCategory(pub String);

impl FromStr for TipCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TipCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tip {
    pub category: TipCategory,
    /// Leading phrase that opens the usage recorder when activated.
    pub usage_link: Option<&'static str>,
    /// Tip text, following `usage_link` when there is one.
    pub text: &'static str,
}

impl Tip {
    const fn plain(category: TipCategory, text: &'static str) -> Tip {
        Tip {
            category,
            usage_link: None,
            text,
        }
    }

    pub fn full_text(&self) -> String {
        match self.usage_link {
            Some(link) => format!("{}{}", link, self.text),
            None => self.text.to_string(),
        }
    }
}

pub static TIPS: &[Tip] = &[
    Tip::plain(
        TipCategory::Showers,
        "Take shorter showers - they can use 5-10 gallons per minute.",
    ),
    Tip::plain(
        TipCategory::Showers,
        "Use special shower heads to restrict the flow of water.",
    ),
    Tip::plain(
        TipCategory::Showers,
        "Avoid taking baths, and when you do, don't fill the tub.",
    ),
    Tip::plain(TipCategory::Faucets, "Turn the faucet off while brushing."),
    Tip::plain(TipCategory::Faucets, "Wash your dishes using tubs."),
    Tip::plain(TipCategory::Faucets, "Fix leaking faucets and pipes."),
    Tip::plain(TipCategory::Outdoors, "Only water lawns when necessary."),
    Tip::plain(
        TipCategory::Outdoors,
        "Only water when it's cold enough for the water not to evaporate.",
    ),
    Tip::plain(TipCategory::Outdoors, "Use drought-resistant plants."),
    Tip::plain(
        TipCategory::Outdoors,
        "Avoid playing with hoses and sprinklers.",
    ),
    Tip::plain(
        TipCategory::Outdoors,
        "If it's rainy, use a bucket to catch rainwater.",
    ),
    Tip {
        category: TipCategory::Extra,
        usage_link: Some("Record your water usage"),
        text: " and set limits.",
    },
    Tip::plain(
        TipCategory::Extra,
        "Know what is using the most water in your household.",
    ),
    Tip::plain(
        TipCategory::Extra,
        "Follow your local water restrictions closely.",
    ),
];
