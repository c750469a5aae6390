//! Legacy single-string locators.
//!
//! Older automation APIs encode a locator as one string whose prefix names
//! the grammar:
//!
//! | Locator            | Meaning                     |
//! |--------------------|-----------------------------|
//! | `css=div.foo`      | CSS selector `div.foo`      |
//! | `xpath=//div`      | XPath expression `//div`    |
//! | `//div`, `(//a)[1]`| XPath expression, verbatim  |
//! | anything else      | element id                  |

use crate::css::CssSpecification;
use crate::driver::DriverLocator;
use crate::result::SpecResult;
use crate::spec::ElementSpecification;
use crate::xpath::XPathSpecification;

const CSS_PREFIX: &str = "css=";
const XPATH_PREFIX: &str = "xpath=";

/// A legacy locator split into its grammar and body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyLocator<'a> {
    /// `css=` prefixed selector
    Css(&'a str),
    /// `xpath=` prefixed, `//` or `(//` leading expression
    XPath(&'a str),
    /// Bare id
    Id(&'a str),
}

impl<'a> LegacyLocator<'a> {
    /// Classify a legacy locator by its prefix
    #[must_use]
    pub fn classify(locator: &'a str) -> Self {
        if let Some(css) = locator.strip_prefix(CSS_PREFIX) {
            Self::Css(css)
        } else if let Some(xpath) = locator.strip_prefix(XPATH_PREFIX) {
            Self::XPath(xpath)
        } else if locator.starts_with("//") || locator.starts_with("(//") {
            Self::XPath(locator)
        } else {
            Self::Id(locator)
        }
    }

    /// Build the matching specification
    ///
    /// Raw CSS and XPath bodies yield single-grammar specifications; bare
    /// ids yield the same specification as [`ElementSpecification::an_element_with_id`].
    #[must_use]
    pub fn into_specification(self) -> ElementSpecification {
        match self {
            Self::Css(css) => ElementSpecification::Css(CssSpecification::from_legacy_css(css)),
            Self::XPath(xpath) => {
                ElementSpecification::XPath(XPathSpecification::from_legacy_xpath(xpath))
            }
            Self::Id(id) => ElementSpecification::an_element_with_id(id),
        }
    }
}

impl ElementSpecification {
    /// Create a specification from a legacy locator string
    #[must_use]
    pub fn from_legacy_locator(locator: &str) -> Self {
        LegacyLocator::classify(locator).into_specification()
    }
}

/// Create a specification from a legacy locator string
#[must_use]
pub fn from_legacy_locator(locator: &str) -> ElementSpecification {
    ElementSpecification::from_legacy_locator(locator)
}

/// Convert a legacy locator straight to a driver locator
pub fn by(locator: &str) -> SpecResult<DriverLocator> {
    from_legacy_locator(locator).as_driver_locator()
}
