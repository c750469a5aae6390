//! A single compound CSS selector step.

use std::fmt;

/// An immutable CSS element descriptor: combinator, tag, id, classes,
/// pseudo-classes and attribute conditions.
///
/// Renders in a fixed order regardless of the order the parts were added:
/// tag, `#id`, `.class`es, pseudo-classes, `*` when nothing else was written,
/// then `[attribute]` conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssToken {
    relationship: String,
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    pseudo_classes: Vec<String>,
    attribute_conditions: Vec<String>,
}

impl Default for CssToken {
    fn default() -> Self {
        Self::an_element()
    }
}

impl CssToken {
    /// Any element, related to the previous step as a descendant
    #[must_use]
    pub fn an_element() -> Self {
        Self {
            relationship: " ".to_string(),
            tag: None,
            id: None,
            classes: Vec::new(),
            pseudo_classes: Vec::new(),
            attribute_conditions: Vec::new(),
        }
    }

    /// Set the combinator joining this step to the previous one (e.g. `>`)
    #[must_use]
    pub fn with_relationship(&self, relationship: impl Into<String>) -> Self {
        Self {
            relationship: relationship.into(),
            ..self.clone()
        }
    }

    /// Set the tag name
    #[must_use]
    pub fn with_tag(&self, tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..self.clone()
        }
    }

    /// Set the id, replacing any previous one
    #[must_use]
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self.clone()
        }
    }

    /// Append a class
    #[must_use]
    pub fn with_class(&self, class: impl Into<String>) -> Self {
        let mut token = self.clone();
        token.classes.push(class.into());
        token
    }

    /// Append a pseudo-class, including its leading colon
    #[must_use]
    pub fn with_pseudo_class(&self, pseudo_class: impl Into<String>) -> Self {
        let mut token = self.clone();
        token.pseudo_classes.push(pseudo_class.into());
        token
    }

    /// Append an attribute condition, without the surrounding brackets
    #[must_use]
    pub fn with_attribute_condition(&self, condition: impl Into<String>) -> Self {
        let mut token = self.clone();
        token.attribute_conditions.push(condition.into());
        token
    }

    /// Render the token as CSS
    #[must_use]
    pub fn render(&self) -> String {
        let mut token = String::new();
        if let Some(tag) = &self.tag {
            token.push_str(tag);
        }
        if let Some(id) = &self.id {
            token.push('#');
            token.push_str(id);
        }
        for class in &self.classes {
            token.push('.');
            token.push_str(class);
        }
        for pseudo_class in &self.pseudo_classes {
            token.push_str(pseudo_class);
        }
        if token.is_empty() {
            token.push('*');
        }
        for condition in &self.attribute_conditions {
            token.push('[');
            token.push_str(condition);
            token.push(']');
        }
        format!("{} {}", self.relationship, token).trim().to_string()
    }
}

impl fmt::Display for CssToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
