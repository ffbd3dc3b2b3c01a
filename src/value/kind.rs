//! Element type metadata extracted from the debugged value's static type.

/// How the raw bits of a scalar are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarEncoding {
    Unsigned,
    Signed,
    Floating,
}

/// Fallback metadata for element types outside the three recognized kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpaqueScalar {
    pub spelling: String,
    pub encoding: ScalarEncoding,
    pub byte_size: usize,
}

impl OpaqueScalar {
    pub fn new<S: Into<String>>(spelling: S, encoding: ScalarEncoding, byte_size: usize) -> Self {
        Self {
            spelling: spelling.into(),
            encoding,
            byte_size,
        }
    }
}

/// Element type of a vector or color value, keyed by the spelling the host
/// debugger reports for the first template argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Float32,
    Unsigned,
    Signed,
    Other(OpaqueScalar),
}

impl ElementKind {
    /// Maps a template-argument spelling to an element kind. Total: spellings
    /// outside the table land in `Other` with conservative metadata.
    pub fn parse(spelling: &str) -> Self {
        match spelling {
            "float" => ElementKind::Float32,
            "unsigned int" => ElementKind::Unsigned,
            "int" => ElementKind::Signed,
            "double" => ElementKind::Other(OpaqueScalar::new(
                spelling,
                ScalarEncoding::Floating,
                8,
            )),
            "short" | "short int" => {
                ElementKind::Other(OpaqueScalar::new(spelling, ScalarEncoding::Signed, 2))
            }
            "unsigned short" | "short unsigned int" => {
                ElementKind::Other(OpaqueScalar::new(spelling, ScalarEncoding::Unsigned, 2))
            }
            "long" | "long int" | "long long" | "long long int" => {
                ElementKind::Other(OpaqueScalar::new(spelling, ScalarEncoding::Signed, 8))
            }
            "unsigned long" | "long unsigned int" | "unsigned long long" => {
                ElementKind::Other(OpaqueScalar::new(spelling, ScalarEncoding::Unsigned, 8))
            }
            "char" | "signed char" => {
                ElementKind::Other(OpaqueScalar::new(spelling, ScalarEncoding::Signed, 1))
            }
            "unsigned char" => {
                ElementKind::Other(OpaqueScalar::new(spelling, ScalarEncoding::Unsigned, 1))
            }
            other => ElementKind::Other(OpaqueScalar::new(other, ScalarEncoding::Unsigned, 4)),
        }
    }

    /// True for the three kinds that get the compact `Vec3f`-style label.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ElementKind::Other(_))
    }

    /// Single-letter code used in compact labels.
    pub(crate) fn type_letter(&self) -> Option<char> {
        match self {
            ElementKind::Float32 => Some('f'),
            ElementKind::Unsigned => Some('u'),
            ElementKind::Signed => Some('i'),
            ElementKind::Other(_) => None,
        }
    }

    /// Spelled-out type name as it appears in generic labels.
    pub fn spelling(&self) -> &str {
        match self {
            ElementKind::Float32 => "float",
            ElementKind::Unsigned => "unsigned int",
            ElementKind::Signed => "int",
            ElementKind::Other(opaque) => &opaque.spelling,
        }
    }

    pub fn encoding(&self) -> ScalarEncoding {
        match self {
            ElementKind::Float32 => ScalarEncoding::Floating,
            ElementKind::Unsigned => ScalarEncoding::Unsigned,
            ElementKind::Signed => ScalarEncoding::Signed,
            ElementKind::Other(opaque) => opaque.encoding,
        }
    }

    /// Storage width of one element in target memory.
    pub fn byte_size(&self) -> usize {
        match self {
            ElementKind::Float32 | ElementKind::Unsigned | ElementKind::Signed => 4,
            ElementKind::Other(opaque) => opaque.byte_size,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Keeps the spelling table aligned with what the host debugger reports.
    use super::*;

    #[test]
    fn recognized_spellings_map_to_compact_kinds() {
        assert_eq!(ElementKind::parse("float"), ElementKind::Float32);
        assert_eq!(ElementKind::parse("unsigned int"), ElementKind::Unsigned);
        assert_eq!(ElementKind::parse("int"), ElementKind::Signed);
    }

    #[test]
    fn type_letters_cover_recognized_kinds_only() {
        assert_eq!(ElementKind::Float32.type_letter(), Some('f'));
        assert_eq!(ElementKind::Unsigned.type_letter(), Some('u'));
        assert_eq!(ElementKind::Signed.type_letter(), Some('i'));
        assert_eq!(
            ElementKind::parse("double").type_letter(),
            None,
            "unrecognized kinds must fall through to the generic label"
        );
    }

    #[test]
    fn double_is_opaque_floating() {
        let kind = ElementKind::parse("double");
        assert_eq!(kind.encoding(), ScalarEncoding::Floating);
        assert_eq!(kind.byte_size(), 8, "double occupies eight bytes");
        assert_eq!(kind.spelling(), "double");
    }

    #[test]
    fn unknown_spelling_keeps_its_name() {
        let kind = ElementKind::parse("my_fixed_point");
        assert_eq!(
            kind.spelling(),
            "my_fixed_point",
            "generic labels must reproduce the original spelling"
        );
        assert!(!kind.is_recognized());
    }
}
