//! Bare-id legacy locators.

use crate::refinement::Refinement;

/// An element located purely by its id
///
/// The legacy convention reads an unprefixed locator string as an id, so this
/// renders as the id itself. Nothing but the id can be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdSpecification {
    id: String,
}

impl IdSpecification {
    /// The element with this id
    #[must_use]
    pub fn an_element_with_id(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The id being located
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the id; every other refinement is unsatisfiable
    #[must_use]
    pub fn refine(&self, refinement: &Refinement) -> Option<Self> {
        match refinement {
            Refinement::WithId(id) => Some(Self::an_element_with_id(id.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_replaces() {
        let spec = IdSpecification::an_element_with_id("foo");
        let replaced = spec.refine(&Refinement::WithId("bar".into())).unwrap();
        assert_eq!(replaced.id(), "bar");
        assert_eq!(spec.id(), "foo");
    }

    #[test]
    fn test_everything_else_is_unsatisfiable() {
        let spec = IdSpecification::an_element_with_id("foo");
        for refinement in [
            Refinement::WithClass("a".into()),
            Refinement::WithAttribute("a".into()),
            Refinement::InPosition(1),
            Refinement::ThatContainsAnyElement,
            Refinement::ThatContainsA("p".into()),
            Refinement::WithNoChildren,
            Refinement::ThatIsChecked,
        ] {
            assert!(spec.refine(&refinement).is_none(), "{refinement:?}");
        }
    }
}
