//! Borrowed view over the raw bytes of a vector value in target memory.

use super::element::Element;
use super::endianness::Endianness;
use super::error::{ValueError, ValueResult};
use super::kind::{ElementKind, ScalarEncoding};
use super::view::ElementSource;

/// Read-only window onto the contiguous element storage of a debugged value.
///
/// Geometry is validated once at construction; after that every element read
/// is infallible, which keeps the formatting path total.
#[derive(Clone, Copy, Debug)]
pub struct RawVector<'a> {
    kind: &'a ElementKind,
    len: usize,
    width: usize,
    endianness: Endianness,
    bytes: &'a [u8],
}

impl<'a> RawVector<'a> {
    pub fn new(
        kind: &'a ElementKind,
        len: usize,
        endianness: Endianness,
        bytes: &'a [u8],
    ) -> ValueResult<Self> {
        let width = kind.byte_size();
        if !matches!(width, 1 | 2 | 4 | 8) {
            return Err(ValueError::UnsupportedWidth { bytes: width });
        }
        if kind.encoding() == ScalarEncoding::Floating && !matches!(width, 4 | 8) {
            return Err(ValueError::UnsupportedFloatWidth { bytes: width });
        }
        let expected = len * width;
        if bytes.len() != expected {
            return Err(ValueError::StorageMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            kind,
            len,
            width,
            endianness,
            bytes,
        })
    }

    fn raw_element(&self, index: usize) -> u64 {
        let start = index * self.width;
        self.endianness
            .decode_bytes(&self.bytes[start..start + self.width])
    }

    fn sign_extend(&self, raw: u64) -> i64 {
        let shift = 64 - (self.width as u32) * 8;
        ((raw << shift) as i64) >> shift
    }
}

impl ElementSource for RawVector<'_> {
    fn element_kind(&self) -> &ElementKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.len
    }

    fn element(&self, index: usize) -> Element {
        let raw = self.raw_element(index);
        match self.kind.encoding() {
            ScalarEncoding::Floating => match self.width {
                4 => Element::Float32(f32::from_bits(raw as u32)),
                // width 8; other widths are rejected at construction
                _ => Element::Float64(f64::from_bits(raw)),
            },
            ScalarEncoding::Unsigned => Element::Unsigned(raw),
            ScalarEncoding::Signed => Element::Signed(self.sign_extend(raw)),
        }
    }
}
