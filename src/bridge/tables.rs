//! Static internal -> external token tables.
//!
//! Values are the token names the external library expects for the
//! enterprise theme family. An entry with an empty value counts as not yet
//! migrated.

pub(super) const SPACING: &[(&str, &str)] = &[
    ("0", "space-0"),
    ("1", "space-1"),
    ("2", "space-2"),
    ("3", "space-3"),
    ("4", "space-4"),
    ("5", "space-5"),
    ("6", "space-6"),
    ("7", "space-7"),
    ("8", "space-8"),
    ("9", "space-9"),
    ("10", "space-10"),
    ("11", "space-11"),
    ("12", "space-12"),
    ("16", "space-16"),
    ("20", "space-20"),
    ("24", "space-24"),
    ("32", "space-32"),
    ("40", "space-40"),
    ("48", "space-48"),
    ("56", "space-56"),
    ("64", "space-64"),
    ("72", "space-72"),
    ("80", "space-80"),
    ("96", "space-96"),
];

pub(super) const COLOR: &[(&str, &str)] = &[
    // surface
    ("background", "surface-background"),
    ("foreground", "surface-foreground"),
    ("card", "surface-card"),
    ("card-foreground", "surface-card-foreground"),
    ("popover", "surface-popover"),
    ("popover-foreground", "surface-popover-foreground"),
    // brand
    ("primary", "brand-primary"),
    ("primary-foreground", "brand-primary-foreground"),
    ("secondary", "brand-secondary"),
    ("secondary-foreground", "brand-secondary-foreground"),
    ("accent", "brand-accent"),
    ("accent-foreground", "brand-accent-foreground"),
    // semantic
    ("success", "semantic-success"),
    ("success-foreground", "semantic-success-foreground"),
    ("warning", "semantic-warning"),
    ("warning-foreground", "semantic-warning-foreground"),
    ("destructive", "semantic-error"),
    ("destructive-foreground", "semantic-error-foreground"),
    ("info", "semantic-info"),
    ("info-foreground", "semantic-info-foreground"),
    // interactive
    ("muted", "interactive-muted"),
    ("muted-foreground", "interactive-muted-foreground"),
    ("border", "interactive-border"),
    ("input", "interactive-input"),
    ("ring", "interactive-ring"),
];

pub(super) const TYPOGRAPHY: &[(&str, &str)] = &[
    ("xs", "text-xs"),
    ("sm", "text-sm"),
    ("base", "text-base"),
    ("lg", "text-lg"),
    ("xl", "text-xl"),
    ("2xl", "text-2xl"),
    ("3xl", "text-3xl"),
    ("4xl", "text-4xl"),
    ("5xl", "text-5xl"),
    ("6xl", "text-6xl"),
    ("7xl", "text-7xl"),
    ("8xl", "text-8xl"),
    ("9xl", "text-9xl"),
];

pub(super) const BORDER_RADIUS: &[(&str, &str)] = &[
    ("none", "radius-none"),
    ("sm", "radius-sm"),
    ("md", "radius-md"),
    ("lg", "radius-lg"),
    ("xl", "radius-xl"),
    ("2xl", "radius-2xl"),
    ("3xl", "radius-3xl"),
    ("full", "radius-full"),
];

pub(super) const SHADOW: &[(&str, &str)] = &[
    ("none", "shadow-none"),
    ("sm", "shadow-sm"),
    ("md", "shadow-md"),
    ("lg", "shadow-lg"),
    ("xl", "shadow-xl"),
    ("2xl", "shadow-2xl"),
    ("inner", "shadow-inner"),
];

pub(super) const BUTTON_HEIGHT: &[(&str, &str)] = &[
    ("button-sm", "component-button-height-sm"),
    ("button-md", "component-button-height-md"),
    ("button-lg", "component-button-height-lg"),
    ("button-xl", "component-button-height-xl"),
];

pub(super) const INPUT_HEIGHT: &[(&str, &str)] = &[
    ("input-md", "component-input-height-md"),
    ("input-lg", "component-input-height-lg"),
];

pub(super) const CARD_PADDING: &[(&str, &str)] = &[
    ("card-sm", "component-card-padding-sm"),
    ("card-md", "component-card-padding-md"),
    ("card-lg", "component-card-padding-lg"),
];

pub(super) const SECTION_PADDING: &[(&str, &str)] = &[
    ("section-sm", "component-section-padding-sm"),
    ("section-md", "component-section-padding-md"),
    ("section-lg", "component-section-padding-lg"),
];

pub(super) const GAP: &[(&str, &str)] = &[
    ("component", "layout-gap-component"),
    ("section", "layout-gap-section"),
    ("layout", "layout-gap-layout"),
];
