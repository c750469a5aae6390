//! Composite specification spanning several grammars.

use tracing::{debug, trace};

use crate::refinement::Refinement;
use crate::variant::Variant;

/// An element specification kept in several grammars at once
///
/// Every refinement is applied to each variant; variants that cannot express
/// it are dropped. Rendering uses the first surviving variant, so the order
/// given at construction is the order of preference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiFormatSpecification {
    variants: Vec<Variant>,
}

impl MultiFormatSpecification {
    /// Create a composite from variants in order of preference
    #[must_use]
    pub fn new(variants: impl IntoIterator<Item = Variant>) -> Self {
        Self {
            variants: variants.into_iter().collect(),
        }
    }

    /// The surviving variants, in order of preference
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Whether any variant survived
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.variants.is_empty()
    }

    /// The variant used for rendering
    #[must_use]
    pub fn first_valid(&self) -> Option<&Variant> {
        self.variants.first()
    }

    /// Apply a refinement to every variant, keeping those that can express it
    #[must_use]
    pub fn refine(&self, refinement: &Refinement) -> Self {
        self.each(|variant| {
            let refined = variant.refine(refinement);
            if refined.is_none() {
                trace!(kind = ?variant.kind(), ?refinement, "dropping variant");
            }
            refined
        })
    }

    /// Append another composite, pairing variants of the same grammar
    ///
    /// Each own variant merges with the first variant of `other` sharing its
    /// kind; variants without a partner are dropped.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        self.each(|variant| {
            let partner = other
                .variants
                .iter()
                .find(|candidate| candidate.kind() == variant.kind());
            let merged = partner.and_then(|partner| variant.merge(partner));
            if merged.is_none() {
                debug!(kind = ?variant.kind(), "no mergeable partner, dropping variant");
            }
            merged
        })
    }

    fn each(&self, operation: impl Fn(&Variant) -> Option<Variant>) -> Self {
        Self {
            variants: self.variants.iter().filter_map(operation).collect(),
        }
    }
}
