//! Display-label naming: the `Vec3f` shorthand and its generic fallback.

use crate::value::ElementKind;

/// Semantic flavor of a printer. Vector-like and color-like values share one
/// formatting algorithm and differ only in this labelling table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayKind {
    Vector,
    Color,
}

impl DisplayKind {
    pub fn prefix(self) -> &'static str {
        match self {
            DisplayKind::Vector => "Vec",
            DisplayKind::Color => "Color",
        }
    }

    /// Lane letters for the compact 2-4 element shapes.
    pub(crate) fn lanes(self) -> [char; 4] {
        match self {
            DisplayKind::Vector => ['x', 'y', 'z', 'w'],
            DisplayKind::Color => ['r', 'g', 'b', 'a'],
        }
    }
}

/// Computes the name prefixed to the element list.
///
/// Lengths 2 through 4 of the recognized element kinds get the compact form
/// (`Vec3f`, `Color4u`); everything else falls back to the generic
/// parameterized spelling (`Vec<double, 6>`).
pub fn display_label(kind: DisplayKind, element: &ElementKind, len: usize) -> String {
    match element.type_letter() {
        Some(letter) if (2..=4).contains(&len) => {
            format!("{}{}{}", kind.prefix(), len, letter)
        }
        _ => format!("{}<{}, {}>", kind.prefix(), element.spelling(), len),
    }
}
