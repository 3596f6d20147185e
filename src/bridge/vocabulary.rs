//! Internal design-token vocabulary and the pre-migration class names.
//!
//! The vocabulary is every token name the internal design system defines,
//! including names the external tables do not map yet.

use super::TokenCategory;

const SPACING: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64",
    "72", "80", "96",
];

const COLOR: &[&str] = &[
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "success",
    "success-foreground",
    "warning",
    "warning-foreground",
    "info",
    "info-foreground",
    "border",
    "input",
    "ring",
];

const TYPOGRAPHY: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const BORDER_RADIUS: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

const SHADOW: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "inner"];

const BUTTON_HEIGHT: &[(&str, &str)] = &[
    ("button-sm", "44px"),
    ("button-md", "48px"),
    ("button-lg", "56px"),
    ("button-xl", "64px"),
];

const INPUT_HEIGHT: &[(&str, &str)] = &[("input-md", "56px"), ("input-lg", "64px")];

const CARD_PADDING: &[(&str, &str)] = &[("card-sm", "32px"), ("card-md", "40px"), ("card-lg", "48px")];

const SECTION_PADDING: &[(&str, &str)] = &[
    ("section-sm", "64px"),
    ("section-md", "80px"),
    ("section-lg", "96px"),
];

const GAP: &[(&str, &str)] = &[("component", "16px"), ("section", "24px"), ("layout", "32px")];

fn sized(category: TokenCategory) -> Option<&'static [(&'static str, &'static str)]> {
    match category {
        TokenCategory::ButtonHeight => Some(BUTTON_HEIGHT),
        TokenCategory::InputHeight => Some(INPUT_HEIGHT),
        TokenCategory::CardPadding => Some(CARD_PADDING),
        TokenCategory::SectionPadding => Some(SECTION_PADDING),
        TokenCategory::Gap => Some(GAP),
        _ => None,
    }
}

/// Every internal token name of `category`, in declaration order.
pub fn vocabulary(category: TokenCategory) -> Vec<&'static str> {
    let plain: &[&str] = match category {
        TokenCategory::Spacing => SPACING,
        TokenCategory::Color => COLOR,
        TokenCategory::Typography => TYPOGRAPHY,
        TokenCategory::BorderRadius => BORDER_RADIUS,
        TokenCategory::Shadow => SHADOW,
        _ => &[],
    };
    match sized(category) {
        Some(entries) => entries.iter().map(|(name, _)| *name).collect(),
        None => plain.to_vec(),
    }
}

/// Pixel size the internal system assigns to a component token.
///
/// Only component categories carry fixed sizes; other categories return
/// `None`.
pub fn component_size(category: TokenCategory, name: &str) -> Option<&'static str> {
    sized(category)?
        .iter()
        .find(|(token, _)| *token == name)
        .map(|(_, size)| *size)
}

/// Class name the internal system generated before migration.
///
/// Color tokens are used as bare semantic names.
pub fn internal_class(category: TokenCategory, name: &str) -> String {
    match category {
        TokenCategory::Spacing => format!("spacing-{name}"),
        TokenCategory::Color => name.to_string(),
        TokenCategory::Typography => format!("text-{name}"),
        TokenCategory::BorderRadius => format!("rounded-{name}"),
        TokenCategory::Shadow => format!("shadow-{name}"),
        TokenCategory::ButtonHeight | TokenCategory::InputHeight => format!("h-{name}"),
        TokenCategory::CardPadding | TokenCategory::SectionPadding => format!("p-{name}"),
        TokenCategory::Gap => format!("gap-{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_vocabulary_extends_past_the_table() {
        let spacing = vocabulary(TokenCategory::Spacing);
        assert_eq!(spacing.len(), 35);
        assert!(spacing.contains(&"13"));
        assert!(spacing.contains(&"96"));
    }

    #[test]
    fn every_category_has_a_vocabulary() {
        for &category in TokenCategory::all() {
            assert!(!vocabulary(category).is_empty(), "{category}");
        }
    }

    #[test]
    fn internal_classes_use_legacy_prefixes() {
        assert_eq!(internal_class(TokenCategory::Spacing, "4"), "spacing-4");
        assert_eq!(internal_class(TokenCategory::Typography, "lg"), "text-lg");
        assert_eq!(internal_class(TokenCategory::BorderRadius, "md"), "rounded-md");
        assert_eq!(internal_class(TokenCategory::Shadow, "sm"), "shadow-sm");
        assert_eq!(internal_class(TokenCategory::ButtonHeight, "button-md"), "h-button-md");
        assert_eq!(internal_class(TokenCategory::CardPadding, "card-md"), "p-card-md");
        assert_eq!(internal_class(TokenCategory::Gap, "section"), "gap-section");
        assert_eq!(internal_class(TokenCategory::Color, "primary"), "primary");
    }

    #[test]
    fn component_sizes() {
        assert_eq!(component_size(TokenCategory::ButtonHeight, "button-sm"), Some("44px"));
        assert_eq!(component_size(TokenCategory::Gap, "layout"), Some("32px"));
        assert_eq!(component_size(TokenCategory::ButtonHeight, "button-xxl"), None);
        assert_eq!(component_size(TokenCategory::Spacing, "4"), None);
    }
}
