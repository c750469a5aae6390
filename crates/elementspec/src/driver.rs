//! Locators handed to a browser automation driver.
//!
//! A [`DriverLocator`] is the rendered form of an element specification in
//! the strategy a driver understands (by id, by CSS selector, by XPath). This
//! crate only produces them; drivers decide how to evaluate them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A rendered locator tagged with its lookup strategy
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "using", content = "value", rename_all = "snake_case")]
pub enum DriverLocator {
    /// Look the element up by id
    Id(String),
    /// CSS selector (e.g., "button.primary")
    Css(String),
    /// XPath expression
    XPath(String),
}

impl DriverLocator {
    /// Strategy name as used by WebDriver-style protocols
    #[must_use]
    pub const fn strategy(&self) -> &'static str {
        match self {
            Self::Id(_) => "id",
            Self::Css(_) => "css selector",
            Self::XPath(_) => "xpath",
        }
    }

    /// The id, selector or expression
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Id(v) | Self::Css(v) | Self::XPath(v) => v,
        }
    }

    /// Convert to a JavaScript expression yielding the first match
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::Id(id) => format!("document.getElementById({id:?})"),
            Self::Css(s) => format!("document.querySelector({s:?})"),
            Self::XPath(s) => {
                format!("document.evaluate({s:?}, document, null, XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue")
            }
        }
    }

    /// Convert to a JavaScript expression counting matches
    #[must_use]
    pub fn to_count_query(&self) -> String {
        match self {
            Self::Id(id) => format!("(document.getElementById({id:?}) ? 1 : 0)"),
            Self::Css(s) => format!("document.querySelectorAll({s:?}).length"),
            Self::XPath(s) => {
                format!("document.evaluate({s:?}, document, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null).snapshotLength")
            }
        }
    }
}

impl fmt::Display for DriverLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "By.{}: {}", self.strategy(), self.value())
    }
}
