//! The display printer: one parameterized formatter for vector-like and
//! color-like values.

pub mod children;
pub mod label;
pub mod policy;

use std::fmt;

use crate::value::ElementSource;

pub use children::{Child, LaneCursor};
pub use label::{DisplayKind, display_label};
pub use policy::{format_element, format_float32, format_scientific, format_signed, format_unsigned};

/// Formats one value as `<Name>(<elem>, <elem>, ...)`.
///
/// Total over its input domain: every combination of element kind and length
/// renders to a string, with the generic label as the fallback path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VectorPrinter {
    kind: DisplayKind,
}

impl VectorPrinter {
    pub fn new(kind: DisplayKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    /// Renders the full display string for a value.
    pub fn render(&self, source: &dyn ElementSource) -> String {
        self.display(source).to_string()
    }

    /// Borrowing adapter that writes the display string into an existing
    /// formatter without an intermediate allocation.
    pub fn display<'a>(&self, source: &'a dyn ElementSource) -> RenderedVector<'a> {
        RenderedVector {
            kind: self.kind,
            source,
        }
    }

    /// Expands the value into labelled children for tree-style inspection.
    pub fn children<'a>(&self, source: &'a dyn ElementSource) -> LaneCursor<'a> {
        LaneCursor::new(self.kind, source)
    }
}

pub struct RenderedVector<'a> {
    kind: DisplayKind,
    source: &'a dyn ElementSource,
}

impl fmt::Display for RenderedVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let element_kind = self.source.element_kind();
        let name = display_label(self.kind, element_kind, self.source.len());
        write!(f, "{name}(")?;
        for index in 0..self.source.len() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&format_element(element_kind, self.source.element(index)))?;
        }
        f.write_str(")")
    }
}
