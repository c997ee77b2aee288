//! Fixed rule tables: reviewer archetypes and sweet-spot recommendations
//!
//! Each table is an ordered list of (predicate, result) pairs evaluated top
//! down; the first matching rule wins and the last rule always matches.

use serde::Serialize;

/// Reviewer personality derived from mean head and heart ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub name: &'static str,
    pub symbol: &'static str,
    pub description: &'static str,
}

pub static ACADEMIC: Archetype = Archetype {
    name: "The Academic",
    symbol: "🧐",
    description: "You value craft over everything. If the lighting is bad, you're out.",
};

pub static GOLDEN_RETRIEVER: Archetype = Archetype {
    name: "The Golden Retriever",
    symbol: "🦮",
    description: "You just want to be happy. Plot holes? Who cares!",
};

pub static UNICORN: Archetype = Archetype {
    name: "The Unicorn",
    symbol: "🦄",
    description: "You have incredibly high standards and only log things that are perfect in both ways.",
};

pub static CHAOTIC_NEUTRAL: Archetype = Archetype {
    name: "Chaotic Neutral",
    symbol: "🎲",
    description: "Your taste is unpredictable and spans every corner of the grid.",
};

/// Placeholder shown before anything has been rated
pub static BLANK_SLATE: Archetype = Archetype {
    name: "The Blank Slate",
    symbol: "📄",
    description: "Start rating things to see your archetype!",
};

/// Archetype rule over (mean head, mean heart)
pub struct ArchetypeRule {
    pub matches: fn(f64, f64) -> bool,
    pub archetype: &'static Archetype,
}

fn craft_over_fun(head: f64, heart: f64) -> bool {
    head > 3.5 && heart < 3.0
}

fn fun_over_craft(head: f64, heart: f64) -> bool {
    head < 3.0 && heart > 3.5
}

fn high_on_both(head: f64, heart: f64) -> bool {
    head > 3.8 && heart > 3.8
}

fn any_means(_head: f64, _heart: f64) -> bool {
    true
}

pub static ARCHETYPE_RULES: &[ArchetypeRule] = &[
    ArchetypeRule { matches: craft_over_fun, archetype: &ACADEMIC },
    ArchetypeRule { matches: fun_over_craft, archetype: &GOLDEN_RETRIEVER },
    ArchetypeRule { matches: high_on_both, archetype: &UNICORN },
    ArchetypeRule { matches: any_means, archetype: &CHAOTIC_NEUTRAL },
];

/// Classify mean ratings against [`ARCHETYPE_RULES`]
pub fn classify_archetype(mean_head: f64, mean_heart: f64) -> &'static Archetype {
    ARCHETYPE_RULES
        .iter()
        .find(|rule| (rule.matches)(mean_head, mean_heart))
        .map(|rule| rule.archetype)
        .unwrap_or(&CHAOTIC_NEUTRAL)
}

/// Recommendation rule over the rounded (head, heart) centroid
pub struct RecommendationRule {
    pub matches: fn(i64, i64) -> bool,
    pub message: &'static str,
}

fn both_high(head: i64, heart: i64) -> bool {
    head >= 4 && heart >= 4
}

fn heart_leads(head: i64, heart: i64) -> bool {
    heart > head + 1
}

fn head_leads(head: i64, heart: i64) -> bool {
    head > heart + 1
}

fn any_centroid(_head: i64, _heart: i64) -> bool {
    true
}

pub static RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        matches: both_high,
        message: "You only really love the best of the best. Stick to award winners.",
    },
    RecommendationRule {
        matches: heart_leads,
        message: "You prefer fun over form. Look for cult classics and crowd pleasers.",
    },
    RecommendationRule {
        matches: head_leads,
        message: "You prefer intellectual stimulation. Look for documentaries or complex dramas.",
    },
    RecommendationRule {
        matches: any_centroid,
        message: "You generally like things balanced.",
    },
];

const BALANCED: &str = "You generally like things balanced.";

/// Pick the recommendation for a rounded centroid
pub fn recommend(head: i64, heart: i64) -> &'static str {
    RECOMMENDATION_RULES
        .iter()
        .find(|rule| (rule.matches)(head, heart))
        .map(|rule| rule.message)
        .unwrap_or(BALANCED)
}

/// Typical preference point and what to look for next
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweetSpot {
    /// Rounded (head, heart) centroid; `None` before anything is rated
    pub centroid: Option<(i64, i64)>,
    pub label: String,
    pub description: String,
}

impl SweetSpot {
    pub fn from_means(mean_head: f64, mean_heart: f64) -> Self {
        let head = round_half_up(mean_head);
        let heart = round_half_up(mean_heart);
        Self {
            centroid: Some((head, heart)),
            label: format!("Head {} / Heart {}", head, heart),
            description: format!(
                "You tend to be happiest with items around this score. {}",
                recommend(head, heart)
            ),
        }
    }

    pub fn unknown() -> Self {
        Self {
            centroid: None,
            label: "Unknown".to_string(),
            description: "Rate more items to find out.".to_string(),
        }
    }
}

/// Round to the nearest integer, halves toward positive infinity
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
