//! A single decoded element and its numeric coercions.

/// One element of a vector or color value, decoded out of target memory.
///
/// The variants carry the storage representation; the formatting policy picks
/// the coercion it needs based on the declared [`ElementKind`], so every
/// storage shape flows through the same numeric rules.
///
/// [`ElementKind`]: super::kind::ElementKind
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element {
    Float32(f32),
    Float64(f64),
    Unsigned(u64),
    Signed(i64),
}

impl Element {
    pub fn as_f64(self) -> f64 {
        match self {
            Element::Float32(value) => value as f64,
            Element::Float64(value) => value,
            Element::Unsigned(value) => value as f64,
            Element::Signed(value) => value as f64,
        }
    }

    pub fn as_u64(self) -> u64 {
        match self {
            Element::Float32(value) => value as u64,
            Element::Float64(value) => value as u64,
            Element::Unsigned(value) => value,
            Element::Signed(value) => value as u64,
        }
    }

    pub fn as_i64(self) -> i64 {
        match self {
            Element::Float32(value) => value as i64,
            Element::Float64(value) => value as i64,
            Element::Unsigned(value) => value as i64,
            Element::Signed(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_storage_widens_exactly() {
        // f32 -> f64 is exact, so threshold comparisons see the same value
        let element = Element::Float32(0.001);
        assert_eq!(element.as_f64(), 0.001f32 as f64);
    }

    #[test]
    fn signed_round_trips_through_as_i64() {
        assert_eq!(Element::Signed(-1000).as_i64(), -1000);
    }

    #[test]
    fn unsigned_stays_unsigned() {
        assert_eq!(Element::Unsigned(u64::MAX).as_u64(), u64::MAX);
    }
}
