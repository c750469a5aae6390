//! The grammar-specific specifications a composite can hold.

use serde::{Deserialize, Serialize};

use crate::css::CssSpecification;
use crate::driver::DriverLocator;
use crate::id::IdSpecification;
use crate::refinement::Refinement;
use crate::xpath::XPathSpecification;

/// Which grammar a variant renders to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    /// Bare id
    Id,
    /// CSS selector
    Css,
    /// XPath expression
    XPath,
}

/// One concrete grammar-specific specification
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Bare id
    Id(IdSpecification),
    /// CSS selector
    Css(CssSpecification),
    /// XPath expression
    XPath(XPathSpecification),
}

impl Variant {
    /// The grammar of this variant
    #[must_use]
    pub const fn kind(&self) -> VariantKind {
        match self {
            Self::Id(_) => VariantKind::Id,
            Self::Css(_) => VariantKind::Css,
            Self::XPath(_) => VariantKind::XPath,
        }
    }

    /// Apply a refinement, or `None` when this grammar cannot express it
    #[must_use]
    pub fn refine(&self, refinement: &Refinement) -> Option<Self> {
        match self {
            Self::Id(spec) => spec.refine(refinement).map(Self::Id),
            Self::Css(spec) => spec.refine(refinement).map(Self::Css),
            Self::XPath(spec) => spec.refine(refinement).map(Self::XPath),
        }
    }

    /// Append a variant of the same grammar
    ///
    /// Returns `None` for mismatched grammars and for bare ids, which cannot
    /// be extended.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (Self::Css(a), Self::Css(b)) => Some(Self::Css(a.merge(b))),
            (Self::XPath(a), Self::XPath(b)) => Some(Self::XPath(a.merge(b))),
            _ => None,
        }
    }

    /// Render in legacy form: CSS is prefixed `css=`, ids and XPath are bare
    #[must_use]
    pub fn as_legacy_locator(&self) -> String {
        match self {
            Self::Id(spec) => spec.id().to_string(),
            Self::Css(spec) => spec.as_legacy_locator(),
            Self::XPath(spec) => spec.xpath().to_string(),
        }
    }

    /// Render as a driver locator
    #[must_use]
    pub fn as_driver_locator(&self) -> DriverLocator {
        match self {
            Self::Id(spec) => DriverLocator::Id(spec.id().to_string()),
            Self::Css(spec) => DriverLocator::Css(spec.css()),
            Self::XPath(spec) => DriverLocator::XPath(spec.xpath().to_string()),
        }
    }
}
