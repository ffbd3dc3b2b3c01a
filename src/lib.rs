//! Display formatting for fixed-size numeric vector and color values.
//!
//! The host debugger matches a value's type name against the registered
//! patterns, hands over a read-only view of the value's elements, and gets
//! back a single display string such as `Vec3f(1.000, 5.000e-04, 2.500e+03)`.
//! Everything here is synchronous and pure; the host owns the storage and
//! any failure to read it.

pub mod printer;
pub mod registry;
pub mod value;

pub use printer::{Child, DisplayKind, LaneCursor, RenderedVector, VectorPrinter};
pub use registry::{PrinterRegistry, TypeName, TypeNameError, TypeNamePattern, default_registry};
pub use value::{
    Element, ElementKind, ElementSlice, ElementSource, Endianness, RawVector, ValueError,
    ValueResult,
};
