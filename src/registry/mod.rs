//! Registration of printers against type-name patterns, plus dispatch.

pub mod pattern;

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::printer::{DisplayKind, VectorPrinter};
use crate::value::{ElementKind, ElementSource, Endianness, RawVector, ValueResult};

pub use pattern::{TypeName, TypeNameError, TypeNamePattern};

struct RegistryEntry {
    label: String,
    pattern: TypeNamePattern,
    printer: VectorPrinter,
}

/// Maps type-name patterns to configured printers.
///
/// Registration order is significant: the first matching entry claims the
/// value. A type name nothing claims is left to the host's default display.
#[derive(Default)]
pub struct PrinterRegistry {
    entries: Vec<RegistryEntry>,
    by_base: AHashMap<String, SmallVec<[usize; 2]>>,
}

impl PrinterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn register<S: Into<String>>(
        &mut self,
        label: S,
        pattern: TypeNamePattern,
        kind: DisplayKind,
    ) {
        let index = self.entries.len();
        self.by_base
            .entry(pattern.base().to_string())
            .or_insert_with(SmallVec::new)
            .push(index);
        self.entries.push(RegistryEntry {
            label: label.into(),
            pattern,
            printer: VectorPrinter::new(kind),
        });
    }

    /// Returns the label and printer of the first entry matching a parsed
    /// type name.
    pub fn printer_for(&self, name: &TypeName) -> Option<(&str, &VectorPrinter)> {
        let candidates = self.by_base.get(name.base())?;
        candidates
            .iter()
            .map(|&index| &self.entries[index])
            .find(|entry| entry.pattern.matches(name))
            .map(|entry| (entry.label.as_str(), &entry.printer))
    }

    /// Renders a value whose type name matches a registered pattern.
    ///
    /// Returns `None` when no printer claims the type, including when the
    /// name is not a generic type name at all.
    pub fn render(&self, type_name: &str, source: &dyn ElementSource) -> Option<String> {
        let name = TypeName::parse(type_name).ok()?;
        let (_, printer) = self.printer_for(&name)?;
        Some(printer.render(source))
    }

    /// Full raw-memory path: derives the element kind and length from the
    /// type name, attaches to the value's storage, and renders.
    ///
    /// `Ok(None)` means no printer claims the type; errors are the host's
    /// (inaccessible or mismatched storage) and propagate unmodified.
    pub fn render_raw(
        &self,
        type_name: &str,
        bytes: &[u8],
        endianness: Endianness,
    ) -> ValueResult<Option<String>> {
        let Ok(name) = TypeName::parse(type_name) else {
            return Ok(None);
        };
        let Some((_, printer)) = self.printer_for(&name) else {
            return Ok(None);
        };
        let kind = ElementKind::parse(name.element());
        let view = RawVector::new(&kind, name.count(), endianness, bytes)?;
        Ok(Some(printer.render(&view)))
    }
}

/// The stock configuration: `Vec<..>` values print vector-like and
/// `Color<..>` values print color-like.
pub fn default_registry() -> PrinterRegistry {
    let mut registry = PrinterRegistry::new();
    registry.register(
        "Vec",
        TypeNamePattern::template_base("Vec"),
        DisplayKind::Vector,
    );
    registry.register(
        "Color",
        TypeNamePattern::template_base("Color"),
        DisplayKind::Color,
    );
    registry
}
