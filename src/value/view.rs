//! The read-only seam between the host debugger and the printers.

use super::element::Element;
use super::kind::ElementKind;

/// Read access to one fixed-size homogeneous value.
///
/// The host debugger owns the underlying storage and guarantees it stays
/// valid and unchanged for the duration of a formatting call. Implementations
/// must uphold: `element(i)` is defined for every `i < len()`.
pub trait ElementSource {
    fn element_kind(&self) -> &ElementKind;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns element `index`. Callers stay within `0..len()`.
    fn element(&self, index: usize) -> Element;
}

/// Borrowed view over elements the host has already decoded.
#[derive(Clone, Copy, Debug)]
pub struct ElementSlice<'a> {
    kind: &'a ElementKind,
    elements: &'a [Element],
}

impl<'a> ElementSlice<'a> {
    pub fn new(kind: &'a ElementKind, elements: &'a [Element]) -> Self {
        Self { kind, elements }
    }
}

impl ElementSource for ElementSlice<'_> {
    fn element_kind(&self) -> &ElementKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn element(&self, index: usize) -> Element {
        self.elements[index]
    }
}
