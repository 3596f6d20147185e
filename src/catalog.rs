//! Closed theme catalog.
//!
//! Every theme the external rendering library ships is a [`ThemeName`]
//! variant. Metadata lookup is an exhaustive `match`, so a variant without an
//! entry fails to compile rather than failing at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::mode::ThemeMode;

/// Theme identity understood by the external rendering library.
///
/// `FromStr` is lenient for operator input (surrounding whitespace and case
/// are ignored). Stored values must match an id exactly; see
/// [`ThemeName::from_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Enterprise,
    Base,
    Finance,
    Productivity,
    Healthcare,
    Education,
    Ecommerce,
    Oslo,
    Bergen,
    Drammen,
}

/// Catalog grouping for theme pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeCategory {
    Industry,
    Geographic,
    General,
}

/// Human-facing metadata attached to each theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMetadata {
    pub display_name: &'static str,
    pub description: &'static str,
    pub category: ThemeCategory,
    /// Ordered use-case labels, most representative first.
    pub recommended_for: &'static [&'static str],
}

const ENTERPRISE: ThemeMetadata = ThemeMetadata {
    display_name: "Enterprise",
    description: "Professional theme designed for B2B SaaS applications",
    category: ThemeCategory::Industry,
    recommended_for: &[
        "B2B SaaS",
        "Business Tools",
        "Corporate Dashboards",
        "Internal Tools",
    ],
};

const BASE: ThemeMetadata = ThemeMetadata {
    display_name: "Base",
    description: "Clean, neutral foundation theme suitable for any application",
    category: ThemeCategory::General,
    recommended_for: &[
        "General Purpose",
        "Prototyping",
        "Minimal Branding",
        "Startups",
    ],
};

const FINANCE: ThemeMetadata = ThemeMetadata {
    display_name: "Finance",
    description: "Trust-building theme for financial services and fintech",
    category: ThemeCategory::Industry,
    recommended_for: &[
        "Fintech",
        "Banking",
        "Investment Platforms",
        "Accounting Software",
    ],
};

const PRODUCTIVITY: ThemeMetadata = ThemeMetadata {
    display_name: "Productivity",
    description: "Focus-enhancing theme for task management and workflow tools",
    category: ThemeCategory::Industry,
    recommended_for: &[
        "Project Management",
        "Task Tools",
        "Collaboration Platforms",
        "Workflow Apps",
    ],
};

const HEALTHCARE: ThemeMetadata = ThemeMetadata {
    display_name: "Healthcare",
    description: "Calming, accessible theme for medical and health applications",
    category: ThemeCategory::Industry,
    recommended_for: &[
        "Patient Portals",
        "Medical Dashboards",
        "Health Tracking",
        "Telemedicine",
    ],
};

const EDUCATION: ThemeMetadata = ThemeMetadata {
    display_name: "Education",
    description: "Engaging theme designed for learning platforms and educational tools",
    category: ThemeCategory::Industry,
    recommended_for: &[
        "LMS",
        "Student Portals",
        "Educational Dashboards",
        "E-Learning",
    ],
};

const ECOMMERCE: ThemeMetadata = ThemeMetadata {
    display_name: "E-commerce",
    description: "Conversion-optimized theme for online retail and marketplaces",
    category: ThemeCategory::Industry,
    recommended_for: &[
        "Online Stores",
        "Marketplaces",
        "Product Catalogs",
        "Checkout Flows",
    ],
};

const OSLO: ThemeMetadata = ThemeMetadata {
    display_name: "Oslo",
    description: "Professional Norwegian capital-inspired theme",
    category: ThemeCategory::Geographic,
    recommended_for: &[
        "Government",
        "Official Platforms",
        "Nordic Design",
        "Professional Services",
    ],
};

const BERGEN: ThemeMetadata = ThemeMetadata {
    display_name: "Bergen",
    description: "Maritime-inspired theme from Norwegian coastal city",
    category: ThemeCategory::Geographic,
    recommended_for: &[
        "Maritime Industry",
        "Coastal Applications",
        "Travel Platforms",
        "Nordic Design",
    ],
};

const DRAMMEN: ThemeMetadata = ThemeMetadata {
    display_name: "Drammen",
    description: "Nature-inspired theme from Norwegian river city",
    category: ThemeCategory::Geographic,
    recommended_for: &[
        "Environmental Apps",
        "Outdoor Industry",
        "Nature Platforms",
        "Nordic Design",
    ],
};

impl ThemeName {
    /// Full catalog in declaration order.
    pub fn all() -> &'static [ThemeName] {
        const THEMES: [ThemeName; 10] = [
            ThemeName::Enterprise,
            ThemeName::Base,
            ThemeName::Finance,
            ThemeName::Productivity,
            ThemeName::Healthcare,
            ThemeName::Education,
            ThemeName::Ecommerce,
            ThemeName::Oslo,
            ThemeName::Bergen,
            ThemeName::Drammen,
        ];
        &THEMES
    }

    /// Exact lookup by stable id, as written by [`ThemeName::id`].
    pub fn from_id(id: &str) -> Option<ThemeName> {
        ThemeName::all().iter().copied().find(|name| name.id() == id)
    }

    /// Stable id used in storage and template identifiers.
    pub fn id(self) -> &'static str {
        match self {
            Self::Enterprise => "enterprise",
            Self::Base => "base",
            Self::Finance => "finance",
            Self::Productivity => "productivity",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Ecommerce => "ecommerce",
            Self::Oslo => "oslo",
            Self::Bergen => "bergen",
            Self::Drammen => "drammen",
        }
    }

    /// Catalog metadata for this theme.
    pub fn metadata(self) -> &'static ThemeMetadata {
        match self {
            Self::Enterprise => &ENTERPRISE,
            Self::Base => &BASE,
            Self::Finance => &FINANCE,
            Self::Productivity => &PRODUCTIVITY,
            Self::Healthcare => &HEALTHCARE,
            Self::Education => &EDUCATION,
            Self::Ecommerce => &ECOMMERCE,
            Self::Oslo => &OSLO,
            Self::Bergen => &BERGEN,
            Self::Drammen => &DRAMMEN,
        }
    }

    /// True when any recommendation matches `use_case` (see [`is_recommended_for`]).
    pub fn is_recommended_for(self, use_case: &str) -> bool {
        is_recommended_for(self, use_case)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeName {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ThemeName::all()
            .iter()
            .copied()
            .find(|name| name.id() == normalized)
            .ok_or_else(|| CatalogError::UnknownTheme(s.to_string()))
    }
}

impl ThemeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Industry => "industry",
            Self::Geographic => "geographic",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "industry" => Ok(Self::Industry),
            "geographic" => Ok(Self::Geographic),
            "general" => Ok(Self::General),
            _ => Err(CatalogError::UnknownThemeCategory(s.to_string())),
        }
    }
}

/// Total metadata lookup.
pub fn metadata(name: ThemeName) -> &'static ThemeMetadata {
    name.metadata()
}

/// Catalog entries grouped by category, each group in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeGroups {
    pub industry: Vec<ThemeName>,
    pub geographic: Vec<ThemeName>,
    pub general: Vec<ThemeName>,
}

impl ThemeGroups {
    /// Members of one category.
    pub fn get(&self, category: ThemeCategory) -> &[ThemeName] {
        match category {
            ThemeCategory::Industry => &self.industry,
            ThemeCategory::Geographic => &self.geographic,
            ThemeCategory::General => &self.general,
        }
    }
}

/// Group the full catalog by category.
pub fn list_by_category() -> ThemeGroups {
    let mut groups = ThemeGroups::default();
    for &name in ThemeName::all() {
        match name.metadata().category {
            ThemeCategory::Industry => groups.industry.push(name),
            ThemeCategory::Geographic => groups.geographic.push(name),
            ThemeCategory::General => groups.general.push(name),
        }
    }
    groups
}

/// Case-insensitive substring match in both directions.
///
/// `use_case` matches a recommendation when either string contains the other,
/// so both "patient" and "banking platform" find their themes. An empty
/// `use_case` is contained in every recommendation and therefore matches.
pub fn is_recommended_for(name: ThemeName, use_case: &str) -> bool {
    let query = use_case.to_lowercase();
    name.metadata().recommended_for.iter().any(|rec| {
        let rec = rec.to_lowercase();
        rec.contains(&query) || query.contains(&rec)
    })
}

/// Catalog members recommended for `use_case`, in declaration order.
pub fn recommended_themes(use_case: &str) -> Vec<ThemeName> {
    ThemeName::all()
        .iter()
        .copied()
        .filter(|&name| is_recommended_for(name, use_case))
        .collect()
}

/// Derived theme description for one `(name, mode)` pair.
///
/// Recomputed on demand; nothing stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub name: ThemeName,
    pub mode: ThemeMode,
    pub display_name: &'static str,
    pub description: &'static str,
    pub category: ThemeCategory,
    pub recommended_for: &'static [&'static str],
}

impl ThemeConfig {
    pub fn new(name: ThemeName, mode: ThemeMode) -> Self {
        let meta = name.metadata();
        Self {
            name,
            mode,
            display_name: meta.display_name,
            description: meta.description,
            category: meta.category,
            recommended_for: meta.recommended_for,
        }
    }
}

/// Why the primary theme was picked, plus the runner-up choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRationale {
    pub primary: ThemeName,
    pub reasons: &'static [&'static str],
    pub alternatives: &'static [(ThemeName, &'static str)],
}

/// Recorded rationale for the shipped primary theme.
pub fn selection_rationale() -> SelectionRationale {
    SelectionRationale {
        primary: ThemeName::Enterprise,
        reasons: &[
            "Perfect alignment with B2B SaaS applications",
            "Professional appearance builds trust with business users",
            "Versatile across various business domains",
            "Scalable from startup to enterprise",
            "Industry-standard design patterns",
            "High contrast for accessibility compliance",
        ],
        alternatives: &[
            (
                ThemeName::Base,
                "Most flexible for custom branding and future customization",
            ),
            (
                ThemeName::Productivity,
                "Excellent for workflow and task management features",
            ),
        ],
    }
}
