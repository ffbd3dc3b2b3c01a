//! Typed, read-only views over the values the host debugger asks us to show.

pub mod element;
pub mod endianness;
pub mod error;
pub mod kind;
pub mod raw;
pub mod view;

pub use element::Element;
pub use endianness::Endianness;
pub use error::{ValueError, ValueResult};
pub use kind::{ElementKind, OpaqueScalar, ScalarEncoding};
pub use raw::RawVector;
pub use view::{ElementSlice, ElementSource};
