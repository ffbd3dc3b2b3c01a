//! Structured child expansion for tree-style value inspection.

use crate::value::{Element, ElementSource};

use super::label::DisplayKind;

/// One labelled child of an expanded value.
#[derive(Clone, Debug, PartialEq)]
pub struct Child {
    pub label: String,
    pub element: Element,
}

/// Pull-style cursor over the children of a vector or color value.
///
/// Lengths 2 through 4 use the lane letters of the display kind (`[x]` ..
/// `[w]`, or `[r]` .. `[a]` for colors); other lengths fall back to
/// positional labels (`[0]`, `[1]`, ...).
pub struct LaneCursor<'a> {
    kind: DisplayKind,
    source: &'a dyn ElementSource,
    index: usize,
}

impl<'a> LaneCursor<'a> {
    pub(crate) fn new(kind: DisplayKind, source: &'a dyn ElementSource) -> Self {
        Self {
            kind,
            source,
            index: 0,
        }
    }

    fn label_for(&self, index: usize) -> String {
        if (2..=4).contains(&self.source.len()) {
            format!("[{}]", self.kind.lanes()[index])
        } else {
            format!("[{index}]")
        }
    }
}

impl Iterator for LaneCursor<'_> {
    type Item = Child;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.source.len() {
            return None;
        }
        let index = self.index;
        self.index += 1;
        Some(Child {
            label: self.label_for(index),
            element: self.source.element(index),
        })
    }
}
