use crate::{
    models::{GenreDistribution, ProfileLabel},
    services::{favorites::FavoritesSet, genres},
};

/// How many of the top genres a rule is matched against
const TOP_GENRES: usize = 3;

/// A genre combination and the label it earns
#[derive(Debug, Clone, Copy)]
pub struct LabelRule {
    pub requires: &'static [&'static str],
    pub label: ProfileLabel,
}

const fn rule(requires: &'static [&'static str], label: &'static str, icon: &'static str) -> LabelRule {
    LabelRule {
        requires,
        label: ProfileLabel { label, icon },
    }
}

/// Evaluated top to bottom; the first rule whose genres are all in the top
/// three wins. Combinations come before single-genre rules.
pub const LABEL_RULES: &[LabelRule] = &[
    rule(&["action", "fantasy"], "Epic Adventurer", "⚔️"),
    rule(&["horror", "thriller"], "Thrill Seeker", "🎃"),
    rule(&["romance", "drama"], "Hopeless Romantic", "💕"),
    rule(&["comedy", "slice of life"], "Feel-Good Fan", "☀️"),
    rule(&["sci-fi", "thriller"], "Mind-Bender Enthusiast", "🚀"),
    rule(&["mystery", "thriller"], "Mystery Maven", "🔍"),
    rule(&["action", "superhero"], "Hero at Heart", "🦸"),
    rule(&["dark fantasy", "action"], "Dark Fantasy Devotee", "🌑"),
    rule(&["drama", "historical"], "History Buff", "📜"),
    rule(&["comedy", "romance"], "Rom-Com Lover", "😂"),
    rule(&["sci-fi", "dystopian"], "Dystopia Explorer", "🌆"),
    rule(&["fantasy"], "Fantasy Dreamer", "✨"),
    rule(&["action"], "Action Junkie", "💥"),
    rule(&["drama"], "Drama Devotee", "🎭"),
    rule(&["comedy"], "Comedy Connoisseur", "😄"),
    rule(&["horror"], "Horror Fanatic", "👻"),
    rule(&["sci-fi"], "Sci-Fi Explorer", "🛸"),
    rule(&["romance"], "Romance Reader", "💗"),
    rule(&["mystery"], "Detective at Heart", "🕵️"),
    rule(&["thriller"], "Tension Junkie", "⚡"),
    rule(&["sports"], "Sports Fanatic", "🏆"),
];

pub const FALLBACK_LABEL: ProfileLabel = ProfileLabel {
    label: "Eclectic Enthusiast",
    icon: "🌟",
};

/// Label for a set of top genres, falling back when no rule matches
pub fn label_for_genres(top: &[&str]) -> ProfileLabel {
    LABEL_RULES
        .iter()
        .find(|rule| rule.requires.iter().all(|genre| top.contains(genre)))
        .map(|rule| rule.label)
        .unwrap_or(FALLBACK_LABEL)
}

pub fn label_for_distribution(distribution: &GenreDistribution) -> Option<ProfileLabel> {
    if distribution.is_empty() {
        return None;
    }
    let top: Vec<&str> = distribution.top(TOP_GENRES).collect();
    Some(label_for_genres(&top))
}

/// Profile label with its icon, `None` without favorites
pub fn profile_label(favorites: &FavoritesSet) -> Option<ProfileLabel> {
    label_for_distribution(&genres::analyze(favorites))
}

/// Profile label text, `None` without favorites
pub fn label(favorites: &FavoritesSet) -> Option<&'static str> {
    profile_label(favorites).map(|l| l.label)
}
