use crate::bundle_dismantling::domain::BundleComponent;
use crate::shared::error::DismantleError;
use std::collections::HashMap;

/// MappingIndex - Lookup from bundle (parent) code to its components
///
/// Components sharing a parent code are kept in the order they arrived in
/// the master table; that order drives the order of expanded output lines.
/// The index is read-only once built.
#[derive(Debug, Clone, Default)]
pub struct MappingIndex {
    buckets: HashMap<String, Vec<BundleComponent>>,
    component_count: usize,
}

impl MappingIndex {
    /// Builds the index in a single pass over the master rows.
    ///
    /// Duplicate parent codes accumulate into the same bucket. A child code
    /// that is itself a parent code is stored as-is and never resolved further.
    ///
    /// # Errors
    /// `Validation` if any component has a blank parent or child code
    pub fn build(
        components: impl IntoIterator<Item = BundleComponent>,
    ) -> Result<Self, DismantleError> {
        let mut buckets: HashMap<String, Vec<BundleComponent>> = HashMap::new();
        let mut component_count = 0;

        for (position, component) in components.into_iter().enumerate() {
            if component.parent_code.trim().is_empty() {
                return Err(DismantleError::validation(format!(
                    "master component #{} has a blank ParentCode (ChildCode '{}')",
                    position + 1,
                    component.child_code
                )));
            }
            if component.child_code.trim().is_empty() {
                return Err(DismantleError::validation(format!(
                    "master component #{} has a blank ChildCode (ParentCode '{}')",
                    position + 1,
                    component.parent_code
                )));
            }

            buckets
                .entry(component.parent_code.clone())
                .or_default()
                .push(component);
            component_count += 1;
        }

        Ok(Self {
            buckets,
            component_count,
        })
    }

    /// Components of `parent_code` in master order; empty if it is not a bundle
    pub fn lookup(&self, parent_code: &str) -> &[BundleComponent] {
        self.buckets
            .get(parent_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, parent_code: &str) -> bool {
        self.buckets.contains_key(parent_code)
    }

    /// Number of distinct parent codes
    pub fn bundle_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
