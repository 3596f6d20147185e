//! Token bridge: translate the internal design-token vocabulary into the
//! token names the external rendering library expects.
//!
//! Lookups never fail. A name without a table entry gets a deterministic,
//! category-specific fallback and a `warn!` event so unmapped usage shows up
//! in logs without blocking rendering.

mod progress;
mod tables;
mod vocabulary;

pub use progress::{migration_progress, progress_for, CategoryProgress};
pub use vocabulary::{component_size, internal_class, vocabulary};

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::config::DEFAULT_CSS_PREFIX;
use crate::error::CatalogError;

/// Token category; each has its own table and fallback rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    Spacing,
    Color,
    Typography,
    BorderRadius,
    Shadow,
    ButtonHeight,
    InputHeight,
    CardPadding,
    SectionPadding,
    Gap,
}

impl TokenCategory {
    pub fn all() -> &'static [TokenCategory] {
        &[
            Self::Spacing,
            Self::Color,
            Self::Typography,
            Self::BorderRadius,
            Self::Shadow,
            Self::ButtonHeight,
            Self::InputHeight,
            Self::CardPadding,
            Self::SectionPadding,
            Self::Gap,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spacing => "spacing",
            Self::Color => "color",
            Self::Typography => "typography",
            Self::BorderRadius => "border-radius",
            Self::Shadow => "shadow",
            Self::ButtonHeight => "button-height",
            Self::InputHeight => "input-height",
            Self::CardPadding => "card-padding",
            Self::SectionPadding => "section-padding",
            Self::Gap => "gap",
        }
    }

    /// All internal names of this category, mapped or not.
    pub fn vocabulary(self) -> Vec<&'static str> {
        vocabulary(self)
    }

    /// Pre-migration class name for `name`.
    pub fn internal_class(self, name: &str) -> String {
        internal_class(self, name)
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Spacing => tables::SPACING,
            Self::Color => tables::COLOR,
            Self::Typography => tables::TYPOGRAPHY,
            Self::BorderRadius => tables::BORDER_RADIUS,
            Self::Shadow => tables::SHADOW,
            Self::ButtonHeight => tables::BUTTON_HEIGHT,
            Self::InputHeight => tables::INPUT_HEIGHT,
            Self::CardPadding => tables::CARD_PADDING,
            Self::SectionPadding => tables::SECTION_PADDING,
            Self::Gap => tables::GAP,
        }
    }

    fn fallback(self, name: &str) -> Cow<'static, str> {
        let strip = |prefix: &str| name.strip_prefix(prefix).unwrap_or(name).to_string();
        let fallback = match self {
            Self::Spacing => format!("space-{name}"),
            Self::Color => name.to_string(),
            Self::Typography => format!("text-{name}"),
            Self::BorderRadius => format!("rounded-{name}"),
            Self::Shadow => format!("shadow-{name}"),
            Self::ButtonHeight => format!("h-{}", strip("button-")),
            Self::InputHeight => format!("h-{}", strip("input-")),
            Self::CardPadding => format!("p-{}", strip("card-")),
            Self::SectionPadding => format!("p-{}", strip("section-")),
            Self::Gap => format!("gap-{name}"),
        };
        Cow::Owned(fallback)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "spacing" => Ok(Self::Spacing),
            "color" | "colors" => Ok(Self::Color),
            "typography" | "fontsize" => Ok(Self::Typography),
            "borderradius" | "radius" => Ok(Self::BorderRadius),
            "shadow" | "shadows" => Ok(Self::Shadow),
            "buttonheight" | "button" => Ok(Self::ButtonHeight),
            "inputheight" | "input" => Ok(Self::InputHeight),
            "cardpadding" | "card" => Ok(Self::CardPadding),
            "sectionpadding" | "section" => Ok(Self::SectionPadding),
            "gap" => Ok(Self::Gap),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}

/// Read-only view of one category's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMapping {
    category: TokenCategory,
    entries: &'static [(&'static str, &'static str)],
}

impl TokenMapping {
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    /// `(internal, external)` pairs in table order.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    /// Mapped external name; blank entries count as unmapped.
    pub fn get(&self, internal: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == internal)
            .map(|(_, external)| *external)
            .filter(|external| !external.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Table for `category`.
pub fn mapping(category: TokenCategory) -> TokenMapping {
    TokenMapping {
        category,
        entries: category.table(),
    }
}

/// Every table, in [`TokenCategory::all`] order.
pub fn all_mappings() -> Vec<TokenMapping> {
    TokenCategory::all().iter().map(|&c| mapping(c)).collect()
}

/// External name for `name`, or the category fallback when unmapped.
pub fn translate(category: TokenCategory, name: &str) -> Cow<'static, str> {
    match mapping(category).get(name) {
        Some(external) => Cow::Borrowed(external),
        None => {
            let fallback = category.fallback(name);
            tracing::warn!(
                category = category.as_str(),
                token = name,
                fallback = %fallback,
                "no external mapping for token; using fallback"
            );
            fallback
        }
    }
}

/// True when `name` has a real (non-fallback) mapping.
pub fn is_migrated(category: TokenCategory, name: &str) -> bool {
    mapping(category).get(name).is_some()
}

/// Candidates without a real mapping, in input order.
pub fn unmigrated_tokens<'a, I>(category: TokenCategory, candidates: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .filter(|name| !is_migrated(category, name))
        .collect()
}

/// `"{category}-{name}"`; no lookup.
pub fn to_style_class_name(category: &str, name: &str) -> String {
    format!("{category}-{name}")
}

/// Formatting helpers bound to a CSS custom-property prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBridge {
    css_prefix: String,
}

impl Default for TokenBridge {
    fn default() -> Self {
        Self::new(DEFAULT_CSS_PREFIX)
    }
}

impl TokenBridge {
    pub fn new(css_prefix: impl Into<String>) -> Self {
        Self {
            css_prefix: css_prefix.into(),
        }
    }

    pub fn css_prefix(&self) -> &str {
        &self.css_prefix
    }

    /// `var(--{prefix}-{name})`.
    pub fn to_css_variable(&self, name: &str) -> String {
        format!("var(--{}-{name})", self.css_prefix)
    }

    /// Translate, then wrap as a CSS custom property.
    pub fn css_variable(&self, category: TokenCategory, name: &str) -> String {
        self.to_css_variable(&translate(category, name))
    }

    pub fn translate(&self, category: TokenCategory, name: &str) -> Cow<'static, str> {
        translate(category, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::CapturedLogs;

    #[test]
    fn fallback_translation_logs_a_warning() {
        let (external, logs) = CapturedLogs::capture(|| translate(TokenCategory::Spacing, "999"));
        assert_eq!(external, "space-999");
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("no external mapping for token"), "{logs}");
        assert!(logs.contains("category=\"spacing\""), "{logs}");
        assert!(logs.contains("token=\"999\""), "{logs}");
        assert!(logs.contains("fallback=space-999"), "{logs}");
    }

    #[test]
    fn mapped_translation_logs_nothing() {
        let (external, logs) = CapturedLogs::capture(|| translate(TokenCategory::Spacing, "4"));
        assert_eq!(external, "space-4");
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn mapped_tokens_translate_exactly() {
        assert_eq!(translate(TokenCategory::Spacing, "4"), "space-4");
        assert_eq!(translate(TokenCategory::Color, "destructive"), "semantic-error");
        assert_eq!(translate(TokenCategory::Typography, "2xl"), "text-2xl");
        assert_eq!(translate(TokenCategory::BorderRadius, "full"), "radius-full");
        assert_eq!(translate(TokenCategory::Shadow, "inner"), "shadow-inner");
        assert_eq!(
            translate(TokenCategory::ButtonHeight, "button-md"),
            "component-button-height-md"
        );
        assert_eq!(translate(TokenCategory::Gap, "layout"), "layout-gap-layout");
    }

    #[test]
    fn fallbacks_follow_category_rules() {
        assert_eq!(translate(TokenCategory::Spacing, "999"), "space-999");
        assert_eq!(translate(TokenCategory::Color, "brand-x"), "brand-x");
        assert_eq!(translate(TokenCategory::Typography, "10xl"), "text-10xl");
        assert_eq!(translate(TokenCategory::BorderRadius, "4xl"), "rounded-4xl");
        assert_eq!(translate(TokenCategory::Shadow, "3xl"), "shadow-3xl");
        assert_eq!(translate(TokenCategory::ButtonHeight, "button-xxl"), "h-xxl");
        assert_eq!(translate(TokenCategory::InputHeight, "input-sm"), "h-sm");
        assert_eq!(translate(TokenCategory::CardPadding, "card-xl"), "p-xl");
        assert_eq!(translate(TokenCategory::SectionPadding, "section-xs"), "p-xs");
        assert_eq!(translate(TokenCategory::Gap, "inline"), "gap-inline");
    }

    #[test]
    fn component_fallback_without_prefix_keeps_name() {
        assert_eq!(translate(TokenCategory::ButtonHeight, "tall"), "h-tall");
        assert_eq!(translate(TokenCategory::CardPadding, "roomy"), "p-roomy");
    }

    #[test]
    fn tables_are_per_category() {
        // `section` is a gap token, not a section-padding token.
        assert!(is_migrated(TokenCategory::Gap, "section"));
        assert!(!is_migrated(TokenCategory::SectionPadding, "section"));
        assert!(is_migrated(TokenCategory::Color, "input"));
        assert!(!is_migrated(TokenCategory::InputHeight, "input"));
    }

    #[test]
    fn unmigrated_preserves_input_order() {
        let result = unmigrated_tokens(TokenCategory::Spacing, ["14", "4", "13", "999", "0"]);
        assert_eq!(result, vec!["14", "13", "999"]);
    }

    #[test]
    fn spacing_backlog_from_vocabulary() {
        let backlog = unmigrated_tokens(
            TokenCategory::Spacing,
            TokenCategory::Spacing.vocabulary(),
        );
        assert_eq!(
            backlog,
            vec!["13", "14", "15", "17", "18", "19", "28", "36", "44", "52", "60"]
        );
        assert!(unmigrated_tokens(TokenCategory::Color, TokenCategory::Color.vocabulary()).is_empty());
    }

    #[test]
    fn table_sizes() {
        let sizes: Vec<usize> = all_mappings().iter().map(TokenMapping::len).collect();
        assert_eq!(sizes, vec![24, 25, 13, 8, 7, 4, 2, 3, 3, 3]);
    }

    #[test]
    fn category_parsing_accepts_aliases() {
        assert_eq!("borderRadius".parse(), Ok(TokenCategory::BorderRadius));
        assert_eq!("border-radius".parse(), Ok(TokenCategory::BorderRadius));
        assert_eq!("colors".parse(), Ok(TokenCategory::Color));
        assert_eq!("button".parse(), Ok(TokenCategory::ButtonHeight));
        assert_eq!("section_padding".parse(), Ok(TokenCategory::SectionPadding));
        assert_eq!(
            "fonts".parse::<TokenCategory>(),
            Err(CatalogError::UnknownCategory("fonts".into()))
        );
        for &category in TokenCategory::all() {
            assert_eq!(category.as_str().parse(), Ok(category));
        }
    }

    #[test]
    fn css_helpers_are_plain_formatting() {
        let bridge = TokenBridge::default();
        assert_eq!(bridge.to_css_variable("space-4"), "var(--tb-space-4)");
        assert_eq!(
            TokenBridge::new("xala").css_variable(TokenCategory::Color, "primary"),
            "var(--xala-brand-primary)"
        );
        assert_eq!(to_style_class_name("bg", "primary"), "bg-primary");
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        fn category() -> impl Strategy<Value = TokenCategory> {
            proptest::sample::select(TokenCategory::all().to_vec())
        }

        proptest! {
            #[test]
            fn translate_is_deterministic(
                category in category(),
                name in proptest::string::string_regex("[a-z0-9-]{0,12}").expect("regex"),
            ) {
                let first = translate(category, &name);
                let second = translate(category, &name);
                prop_assert_eq!(&first, &second);
                if !is_migrated(category, &name) {
                    prop_assert_eq!(first, category.fallback(&name));
                }
            }

            #[test]
            fn unmigrated_partitions_candidates(
                category in category(),
                names in proptest::collection::vec(
                    proptest::string::string_regex("[a-z0-9-]{0,8}").expect("regex"),
                    0..16
                ),
            ) {
                let unmigrated = unmigrated_tokens(category, names.iter().map(String::as_str));
                let migrated = names.iter().filter(|n| is_migrated(category, n)).count();
                prop_assert_eq!(unmigrated.len() + migrated, names.len());
            }
        }
    }
}
