//! CSS selector grammar.
//!
//! Selectors are assembled from [`CssToken`]s. Finished steps are kept as
//! rendered text; only the last step stays structured so that later
//! refinements land in the right place of the compound selector.

use std::sync::LazyLock;

use regex::Regex;

use crate::refinement::Refinement;
use crate::token::CssToken;

/// Ids matching this pattern are written as `#id`; any other id becomes an
/// `[id="..."]` attribute condition since selectors are never escaped.
pub const SAFE_CSS_ID_PATTERN: &str = r"^[A-Za-z\-_]+$";

#[allow(clippy::expect_used)]
static SAFE_CSS_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SAFE_CSS_ID_PATTERN).expect("BUG: invalid SAFE_CSS_ID_PATTERN regex literal")
});

/// Whether `id` can be written with the `#id` shorthand
#[must_use]
pub fn is_safe_css_id(id: &str) -> bool {
    SAFE_CSS_ID.is_match(id)
}

/// An element specification expressed as a CSS selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssSpecification {
    /// Already finished steps, joined by their combinators
    previous: String,
    /// The step still being refined; absent for raw or merged selectors
    current: Option<CssToken>,
}

impl CssSpecification {
    /// Any element (`*`)
    #[must_use]
    pub fn an_element() -> Self {
        Self::with_token(String::new(), CssToken::an_element())
    }

    /// Any element with the given tag
    #[must_use]
    pub fn an_element_of_type(tag: impl Into<String>) -> Self {
        Self::with_token(String::new(), CssToken::an_element().with_tag(tag))
    }

    /// Wrap a raw selector taken from a legacy `css=` locator
    #[must_use]
    pub fn from_legacy_css(selector: impl Into<String>) -> Self {
        Self {
            previous: selector.into(),
            current: None,
        }
    }

    fn with_token(previous: String, token: CssToken) -> Self {
        Self {
            previous,
            current: Some(token),
        }
    }

    /// The selector rendered so far
    #[must_use]
    pub fn css(&self) -> String {
        match &self.current {
            Some(token) => format!("{} {}", self.previous, token.render())
                .trim()
                .to_string(),
            None => self.previous.clone(),
        }
    }

    /// The selector in legacy `css=` form
    #[must_use]
    pub fn as_legacy_locator(&self) -> String {
        format!("css={}", self.css())
    }

    /// Apply a refinement, or `None` when CSS cannot express it
    #[must_use]
    pub fn refine(&self, refinement: &Refinement) -> Option<Self> {
        let refined = match refinement {
            Refinement::WithId(id) => {
                if is_safe_css_id(id) {
                    self.modify_current(|t| t.with_id(id.as_str()))
                } else {
                    self.modify_current(|t| t.with_attribute_condition(format!("id=\"{id}\"")))
                }
            }
            Refinement::WithClass(class) => self.modify_current(|t| t.with_class(class.as_str())),
            Refinement::WithoutClass(class) => {
                self.modify_current(|t| t.with_pseudo_class(format!(":not(.{class})")))
            }
            Refinement::WithAttribute(name) => {
                self.modify_current(|t| t.with_attribute_condition(name.as_str()))
            }
            Refinement::WithoutAttribute(name) => {
                self.modify_current(|t| t.with_pseudo_class(format!(":not([{name}])")))
            }
            Refinement::WithAttributeContaining { name, substring } => self
                .modify_current(|t| t.with_attribute_condition(format!("{name}*=\"{substring}\""))),
            Refinement::WithAttributeValue { name, value } => {
                self.modify_current(|t| t.with_attribute_condition(format!("{name}=\"{value}\"")))
            }
            Refinement::WithNoChildren => self.modify_current(|t| t.with_pseudo_class(":empty")),
            Refinement::ThatIsChecked => self.modify_current(|t| t.with_pseudo_class(":checked")),
            Refinement::InPosition(position) => {
                self.modify_current(|t| t.with_pseudo_class(format!(":nth-child({position})")))
            }
            Refinement::InPositionOfType(position) => {
                self.modify_current(|t| t.with_pseudo_class(format!(":nth-of-type({position})")))
            }
            Refinement::ThatContainsAnyElement => self.add_new_token(CssToken::an_element()),
            Refinement::ThatContainsA(tag) => {
                self.add_new_token(CssToken::an_element().with_tag(tag.as_str()))
            }
            Refinement::ThatContainsAChildOfType(tag) => self.add_new_token(
                CssToken::an_element()
                    .with_relationship(">")
                    .with_tag(tag.as_str()),
            ),
            Refinement::WithAnyOfTheseClasses(_)
            | Refinement::WithText(_)
            | Refinement::WithTextContaining(_)
            | Refinement::WithNumericalContent => return None,
        };
        Some(refined)
    }

    /// Append another selector as a descendant of this one
    ///
    /// The result is a finished selector: further token refinements start a
    /// fresh descendant step.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            previous: format!("{} {}", self.css(), other.css()),
            current: None,
        }
    }

    fn modify_current(&self, modify: impl FnOnce(&CssToken) -> CssToken) -> Self {
        let token = self.current.clone().unwrap_or_default();
        Self::with_token(self.previous.clone(), modify(&token))
    }

    fn add_new_token(&self, token: CssToken) -> Self {
        Self::with_token(self.css(), token)
    }
}
