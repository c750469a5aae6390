//! Refinement and descent operations as plain values.
//!
//! Every fluent method on [`ElementSpecification`](crate::ElementSpecification)
//! builds one of these and hands it to each grammar. A grammar either
//! expresses the refinement or reports it as unsatisfiable.

use serde::{Deserialize, Serialize};

/// A single step in an element specification chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum Refinement {
    /// Require the current element to have this id
    WithId(String),
    /// Require the current element to have this class
    WithClass(String),
    /// Require the current element to not have this class
    WithoutClass(String),
    /// Require the current element to have at least one of these classes
    WithAnyOfTheseClasses(Vec<String>),
    /// Require the attribute to be present, with any value
    WithAttribute(String),
    /// Require the attribute to be absent
    WithoutAttribute(String),
    /// Require the attribute value to contain a substring
    WithAttributeContaining {
        /// Attribute name
        name: String,
        /// Expected substring
        substring: String,
    },
    /// Require the attribute value to be exactly equal
    WithAttributeValue {
        /// Attribute name
        name: String,
        /// Expected value
        value: String,
    },
    /// Require the text content to be exactly equal
    WithText(String),
    /// Require the text content to contain a substring
    WithTextContaining(String),
    /// Require the content to be parseable as a number
    WithNumericalContent,
    /// Require the element to be empty
    WithNoChildren,
    /// Require the element to be checked
    ThatIsChecked,
    /// Require the element to be in this 1-based position among its siblings
    InPosition(u32),
    /// Require the element to be in this 1-based position among siblings of the same type
    InPositionOfType(u32),
    /// Descend to any element
    ThatContainsAnyElement,
    /// Descend to any element with this tag
    ThatContainsA(String),
    /// Descend to a direct child with this tag
    ThatContainsAChildOfType(String),
}

impl Refinement {
    /// Whether this step moves to a new element rather than qualifying the current one
    #[must_use]
    pub const fn is_descent(&self) -> bool {
        matches!(
            self,
            Self::ThatContainsAnyElement | Self::ThatContainsA(_) | Self::ThatContainsAChildOfType(_)
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_descent_classification() {
        assert!(Refinement::ThatContainsAnyElement.is_descent());
        assert!(Refinement::ThatContainsA("p".into()).is_descent());
        assert!(Refinement::ThatContainsAChildOfType("p".into()).is_descent());
        assert!(!Refinement::WithClass("a".into()).is_descent());
        assert!(!Refinement::InPosition(2).is_descent());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&Refinement::WithAttributeValue {
            name: "type".into(),
            value: "checkbox".into(),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"op":"with_attribute_value","args":{"name":"type","value":"checkbox"}}"#
        );

        let json = serde_json::to_string(&Refinement::ThatContainsA("p".into())).unwrap();
        assert_eq!(json, r#"{"op":"that_contains_a","args":"p"}"#);
    }

    #[test]
    fn test_deserialize_chain() {
        let chain: Vec<Refinement> = serde_json::from_str(
            r#"[{"op":"in_position","args":3},{"op":"with_no_children"},{"op":"that_is_checked"}]"#,
        )
        .unwrap();
        assert_eq!(
            chain,
            vec![
                Refinement::InPosition(3),
                Refinement::WithNoChildren,
                Refinement::ThatIsChecked
            ]
        );
    }
}
