//! elementspec: Grammar-Agnostic Element Specifications
//!
//! Describe the element you want once, with a fluent immutable builder, and
//! render it as a CSS selector or an XPath expression on demand.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                  ElementSpecification (MultiFormat)              │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  refinement ──► ┌──────────┐  ┌──────────┐  ┌──────────┐          │
//! │  (fan-out)      │ Id       │  │ Css      │  │ XPath    │          │
//! │                 │ #foo     │  │ CssToken │  │ //a[..]  │          │
//! │                 └────┬─────┘  └────┬─────┘  └────┬─────┘          │
//! │                      └── drop if unsatisfiable ──┘                │
//! │  render ──► first surviving variant (Id, then Css, then XPath)   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use elementspec::prelude::*;
//!
//! let spec = an_element().with_class("one").without_class("two");
//! assert_eq!(spec.as_legacy_locator().unwrap(), "css=.one:not(.two)");
//!
//! let legacy = from_legacy_locator("//div");
//! assert_eq!(legacy.as_driver_locator().unwrap(), DriverLocator::XPath("//div".into()));
//! ```

#![warn(missing_docs)]

mod css;
mod driver;
mod id;
mod legacy;
mod multi;
mod refinement;
mod result;
mod spec;
mod token;
mod variant;
mod xpath;

pub use css::{is_safe_css_id, CssSpecification, SAFE_CSS_ID_PATTERN};
pub use driver::DriverLocator;
pub use id::IdSpecification;
pub use legacy::{by, from_legacy_locator, LegacyLocator};
pub use multi::MultiFormatSpecification;
pub use refinement::Refinement;
pub use result::{ElementSpecError, SpecResult};
pub use spec::{
    an_element, an_element_of_type, an_element_with_class, an_element_with_id,
    ElementSpecification,
};
pub use token::CssToken;
pub use variant::{Variant, VariantKind};
pub use xpath::XPathSpecification;

/// Prelude for convenient imports
pub mod prelude {
    pub use super::{
        an_element, an_element_of_type, an_element_with_class, an_element_with_id, by,
        from_legacy_locator, DriverLocator, ElementSpecError, ElementSpecification, Refinement,
        SpecResult,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_specifications_are_shareable() {
        assert_send_sync::<ElementSpecification>();
        assert_send_sync::<DriverLocator>();
    }

    #[test]
    fn test_static_specification_reuse() {
        static CHECKBOX: std::sync::LazyLock<ElementSpecification> =
            std::sync::LazyLock::new(|| {
                an_element_of_type("input").with_attribute_value("type", "checkbox")
            });
        let checked = CHECKBOX.that_is_checked();
        let unchecked = CHECKBOX.with_attribute("disabled");
        assert_ne!(checked, unchecked);
        assert_eq!(
            CHECKBOX.as_legacy_locator(),
            Ok("css=input[type=\"checkbox\"]".to_string())
        );
    }
}
