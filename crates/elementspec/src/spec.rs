//! The fluent element specification API.
//!
//! # Design Philosophy
//!
//! - **Immutable**: every method returns a new specification; values can be
//!   stored in statics and shared between threads
//! - **Grammar-agnostic**: describe the element once, render to CSS or XPath
//! - **Absorbing**: a refinement no grammar can express never fails mid-chain;
//!   the failure surfaces only when rendering
//!
//! ```
//! use elementspec::prelude::*;
//!
//! let row = an_element_of_type("table")
//!     .with_class("results")
//!     .that_contains_a("tr")
//!     .in_position(2);
//! assert_eq!(row.as_legacy_locator().unwrap(), "css=table.results tr:nth-child(2)");
//!
//! // CSS has no text matching, so XPath takes over
//! let cell = row.that_contains_a("td").with_text("Total");
//! assert_eq!(
//!     cell.as_legacy_locator().unwrap(),
//!     "//table[contains(concat(' ', @class, ' '), ' results ')]//tr[2]//td[text() = 'Total']"
//! );
//! ```

use std::fmt;

use tracing::debug;

use crate::css::CssSpecification;
use crate::driver::DriverLocator;
use crate::id::IdSpecification;
use crate::multi::MultiFormatSpecification;
use crate::refinement::Refinement;
use crate::result::{ElementSpecError, SpecResult};
use crate::variant::Variant;
use crate::xpath::XPathSpecification;

/// A description of an element that renders to CSS or XPath on demand
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementSpecification {
    /// Bare-id specification
    Id(IdSpecification),
    /// CSS-only specification
    Css(CssSpecification),
    /// XPath-only specification
    XPath(XPathSpecification),
    /// Specification kept in several grammars
    MultiFormat(MultiFormatSpecification),
    /// A chain no grammar can express; absorbs every further refinement
    Invalid,
}

impl ElementSpecification {
    /// Any element with no restrictions
    #[must_use]
    pub fn an_element() -> Self {
        Self::MultiFormat(MultiFormatSpecification::new([
            Variant::Css(CssSpecification::an_element()),
            Variant::XPath(XPathSpecification::an_element()),
        ]))
    }

    /// Any element with the tag `tag`, e.g. `table` or `button`
    #[must_use]
    pub fn an_element_of_type(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self::MultiFormat(MultiFormatSpecification::new([
            Variant::Css(CssSpecification::an_element_of_type(tag.as_str())),
            Variant::XPath(XPathSpecification::an_element_of_type(tag)),
        ]))
    }

    /// The element with id `id`, preferring a bare-id lookup
    #[must_use]
    pub fn an_element_with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let with_id = Refinement::WithId(id.clone());
        let css = CssSpecification::an_element().refine(&with_id);
        let xpath = XPathSpecification::an_element().refine(&with_id);
        let variants = std::iter::once(Variant::Id(IdSpecification::an_element_with_id(id)))
            .chain(css.map(Variant::Css))
            .chain(xpath.map(Variant::XPath));
        Self::MultiFormat(MultiFormatSpecification::new(variants))
    }

    /// Any element with the class `class`
    #[must_use]
    pub fn an_element_with_class(class: impl Into<String>) -> Self {
        Self::an_element().with_class(class)
    }

    /// Whether the specification can be rendered in at least one grammar
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Id(_) | Self::Css(_) | Self::XPath(_) => true,
            Self::MultiFormat(multi) => multi.is_valid(),
            Self::Invalid => false,
        }
    }

    /// Apply a single refinement or descent step
    #[must_use]
    pub fn refine(&self, refinement: &Refinement) -> Self {
        match self {
            Self::Id(spec) => spec.refine(refinement).map_or(Self::Invalid, Self::Id),
            Self::Css(spec) => spec.refine(refinement).map_or(Self::Invalid, Self::Css),
            Self::XPath(spec) => spec.refine(refinement).map_or(Self::Invalid, Self::XPath),
            Self::MultiFormat(multi) => Self::MultiFormat(multi.refine(refinement)),
            Self::Invalid => Self::Invalid,
        }
    }

    /// Apply a recorded chain of steps in order
    #[must_use]
    pub fn refine_all<'a>(&self, refinements: impl IntoIterator<Item = &'a Refinement>) -> Self {
        refinements
            .into_iter()
            .fold(self.clone(), |spec, refinement| spec.refine(refinement))
    }

    /// Require the current element to have the id `id`
    #[must_use]
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        self.refine(&Refinement::WithId(id.into()))
    }

    /// Require the current element to have the class `class`
    #[must_use]
    pub fn with_class(&self, class: impl Into<String>) -> Self {
        self.refine(&Refinement::WithClass(class.into()))
    }

    /// Require the current element to not have the class `class`
    #[must_use]
    pub fn without_class(&self, class: impl Into<String>) -> Self {
        self.refine(&Refinement::WithoutClass(class.into()))
    }

    /// Require the current element to have any of `classes`
    ///
    /// Only XPath can express this.
    #[must_use]
    pub fn with_any_of_these_classes<I, S>(&self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes = classes.into_iter().map(Into::into).collect();
        self.refine(&Refinement::WithAnyOfTheseClasses(classes))
    }

    /// Require the attribute `name` to be present with any value
    #[must_use]
    pub fn with_attribute(&self, name: impl Into<String>) -> Self {
        self.refine(&Refinement::WithAttribute(name.into()))
    }

    /// Require the attribute `name` to be absent
    #[must_use]
    pub fn without_attribute(&self, name: impl Into<String>) -> Self {
        self.refine(&Refinement::WithoutAttribute(name.into()))
    }

    /// Require the attribute `name` to have a value containing `substring`
    #[must_use]
    pub fn with_attribute_containing(
        &self,
        name: impl Into<String>,
        substring: impl Into<String>,
    ) -> Self {
        self.refine(&Refinement::WithAttributeContaining {
            name: name.into(),
            substring: substring.into(),
        })
    }

    /// Require the attribute `name` to have exactly the value `value`
    #[must_use]
    pub fn with_attribute_value(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.refine(&Refinement::WithAttributeValue {
            name: name.into(),
            value: value.into(),
        })
    }

    /// Require the text content to be exactly `text`
    ///
    /// Only XPath can express this. Empty text means the element has no children.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        self.refine(&Refinement::WithText(text.into()))
    }

    /// Require the text content to contain `text`
    ///
    /// Only XPath can express this.
    #[must_use]
    pub fn with_text_containing(&self, text: impl Into<String>) -> Self {
        self.refine(&Refinement::WithTextContaining(text.into()))
    }

    /// Require content that XPath's `number()` can parse
    #[must_use]
    pub fn with_numerical_content(&self) -> Self {
        self.refine(&Refinement::WithNumericalContent)
    }

    /// Require the element to be empty
    #[must_use]
    pub fn with_no_children(&self) -> Self {
        self.refine(&Refinement::WithNoChildren)
    }

    /// Require the element to be checked, e.g. a checkbox `input`
    ///
    /// Only CSS can express this.
    #[must_use]
    pub fn that_is_checked(&self) -> Self {
        self.refine(&Refinement::ThatIsChecked)
    }

    /// Require the element to be at 1-based `position` among its siblings
    #[must_use]
    pub fn in_position(&self, position: u32) -> Self {
        self.refine(&Refinement::InPosition(position))
    }

    /// Require the element to be at 1-based `position` among siblings of its type
    #[must_use]
    pub fn in_position_of_type(&self, position: u32) -> Self {
        self.refine(&Refinement::InPositionOfType(position))
    }

    /// Descend to any element inside the current one
    #[must_use]
    pub fn that_contains_any_element(&self) -> Self {
        self.refine(&Refinement::ThatContainsAnyElement)
    }

    /// Descend to any element with tag `tag` inside the current one
    #[must_use]
    pub fn that_contains_a(&self, tag: impl Into<String>) -> Self {
        self.refine(&Refinement::ThatContainsA(tag.into()))
    }

    /// Descend to a direct child with tag `tag`
    #[must_use]
    pub fn that_contains_a_child_of_type(&self, tag: impl Into<String>) -> Self {
        self.refine(&Refinement::ThatContainsAChildOfType(tag.into()))
    }

    /// Descend to an element with id `id` inside the current one
    #[must_use]
    pub fn that_contains_an_element_with_id(&self, id: impl Into<String>) -> Self {
        self.that_contains_any_element().with_id(id)
    }

    /// Descend to an element with class `class` inside the current one
    #[must_use]
    pub fn that_contains_an_element_with_class(&self, class: impl Into<String>) -> Self {
        self.that_contains_any_element().with_class(class)
    }

    /// Append another specification to this one
    ///
    /// Each grammar appends its own rendering of `other`; grammars `other`
    /// lacks are dropped. Bare ids cannot be extended.
    #[must_use]
    pub fn add_sub_specification(&self, other: &Self) -> Self {
        if !other.is_valid() {
            return Self::Invalid;
        }
        match (self, other) {
            (Self::Css(a), Self::Css(b)) => Self::Css(a.merge(b)),
            (Self::XPath(a), Self::XPath(b)) => Self::XPath(a.merge(b)),
            (Self::MultiFormat(a), Self::MultiFormat(b)) => Self::MultiFormat(a.merge(b)),
            _ => Self::Invalid,
        }
    }

    /// Render as a legacy locator string
    ///
    /// CSS results are prefixed `css=`; XPath and bare ids are unprefixed.
    pub fn as_legacy_locator(&self) -> SpecResult<String> {
        self.first_valid().map(|variant| variant.as_legacy_locator())
    }

    /// Render as a locator for a browser automation driver
    pub fn as_driver_locator(&self) -> SpecResult<DriverLocator> {
        self.first_valid().map(|variant| variant.as_driver_locator())
    }

    fn first_valid(&self) -> SpecResult<Variant> {
        let variant = match self {
            Self::Id(spec) => Some(Variant::Id(spec.clone())),
            Self::Css(spec) => Some(Variant::Css(spec.clone())),
            Self::XPath(spec) => Some(Variant::XPath(spec.clone())),
            Self::MultiFormat(multi) => multi.first_valid().cloned(),
            Self::Invalid => None,
        };
        variant.ok_or_else(|| {
            debug!(specification = ?self, "render requested for unsatisfiable specification");
            ElementSpecError::NoValidSpecification
        })
    }
}

impl From<Variant> for ElementSpecification {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Id(spec) => Self::Id(spec),
            Variant::Css(spec) => Self::Css(spec),
            Variant::XPath(spec) => Self::XPath(spec),
        }
    }
}

/// Formats as the legacy locator string
///
/// Formatting fails with [`fmt::Error`] when the specification is not valid.
impl fmt::Display for ElementSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locator = self.as_legacy_locator().map_err(|_| fmt::Error)?;
        f.write_str(&locator)
    }
}

/// Any element with no restrictions
#[must_use]
pub fn an_element() -> ElementSpecification {
    ElementSpecification::an_element()
}

/// Any element with the tag `tag`
#[must_use]
pub fn an_element_of_type(tag: impl Into<String>) -> ElementSpecification {
    ElementSpecification::an_element_of_type(tag)
}

/// The element with id `id`
#[must_use]
pub fn an_element_with_id(id: impl Into<String>) -> ElementSpecification {
    ElementSpecification::an_element_with_id(id)
}

/// Any element with the class `class`
#[must_use]
pub fn an_element_with_class(class: impl Into<String>) -> ElementSpecification {
    ElementSpecification::an_element_with_class(class)
}
