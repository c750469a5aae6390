//! XPath expression grammar.
//!
//! XPath predicates compose left to right, so the expression is kept as the
//! rendered string and every refinement appends to it.
//!
//! String literals are written between single quotes and are not escaped: a
//! value containing `'` produces a malformed expression.

use crate::refinement::Refinement;

/// An element specification expressed as an XPath expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XPathSpecification {
    expression: String,
}

impl XPathSpecification {
    /// Any element (`//*`)
    #[must_use]
    pub fn an_element() -> Self {
        Self::from_legacy_xpath("//*")
    }

    /// Any element with the given tag
    #[must_use]
    pub fn an_element_of_type(tag: impl AsRef<str>) -> Self {
        Self::from_legacy_xpath(format!("//{}", tag.as_ref()))
    }

    /// Wrap a raw XPath expression taken from a legacy locator
    #[must_use]
    pub fn from_legacy_xpath(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// The expression rendered so far
    #[must_use]
    pub fn xpath(&self) -> &str {
        &self.expression
    }

    /// Apply a refinement, or `None` when XPath cannot express it
    #[must_use]
    pub fn refine(&self, refinement: &Refinement) -> Option<Self> {
        let refined = match refinement {
            Refinement::WithId(id) => self.append_condition(&format!("@id='{id}'")),
            Refinement::WithClass(class) => self.append_condition(&has_class(class)),
            Refinement::WithoutClass(class) => {
                self.append_condition(&format!("not({})", has_class(class)))
            }
            Refinement::WithAnyOfTheseClasses(classes) => {
                let any = classes
                    .iter()
                    .map(|class| has_class(class))
                    .collect::<Vec<_>>()
                    .join(" or ");
                self.append_condition(&any)
            }
            Refinement::WithAttribute(name) => self.append_condition(&format!("@{name}")),
            Refinement::WithoutAttribute(name) => self.append_condition(&format!("not(@{name})")),
            Refinement::WithAttributeContaining { name, substring } => {
                self.append_condition(&format!("contains(@{name}, '{substring}')"))
            }
            Refinement::WithAttributeValue { name, value } => {
                self.append_condition(&format!("@{name}='{value}'"))
            }
            Refinement::WithText(text) if text.is_empty() => {
                return self.refine(&Refinement::WithNoChildren)
            }
            Refinement::WithText(text) => self.append_condition(&format!("text() = '{text}'")),
            Refinement::WithTextContaining(text) => {
                self.append_condition(&format!("text()[contains(.,'{text}')]"))
            }
            // NaN from number(.) never equals anything, including itself
            Refinement::WithNumericalContent => self.append_condition("number(.)=."),
            Refinement::WithNoChildren => self.append_condition("not(node())"),
            // Positional predicates after a tag step already count same-type siblings
            Refinement::InPosition(position) | Refinement::InPositionOfType(position) => {
                self.append_condition(&position.to_string())
            }
            Refinement::ThatContainsAnyElement => self.append("//*"),
            Refinement::ThatContainsA(tag) => self.append(&format!("//{tag}")),
            Refinement::ThatContainsAChildOfType(tag) => self.append(&format!("/{tag}")),
            Refinement::ThatIsChecked => return None,
        };
        Some(refined)
    }

    /// Append another expression to this one
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        self.append(&other.expression)
    }

    fn append_condition(&self, condition: &str) -> Self {
        self.append(&format!("[{condition}]"))
    }

    fn append(&self, section: &str) -> Self {
        Self {
            expression: format!("{}{section}", self.expression),
        }
    }
}

fn has_class(class: &str) -> String {
    format!("contains(concat(' ', @class, ' '), ' {class} ')")
}
