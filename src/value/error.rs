use std::{error::Error, fmt};

pub type ValueResult<T> = Result<T, ValueError>;

/// Failures while attaching to a value supplied by the host debugger.
///
/// The formatter itself is total; these errors can only originate at the
/// seam where the host hands over raw storage, and they propagate back to
/// the host unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    StorageMismatch {
        expected: usize,
        actual: usize,
    },
    UnsupportedWidth {
        bytes: usize,
    },
    UnsupportedFloatWidth {
        bytes: usize,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::StorageMismatch { expected, actual } => write!(
                f,
                "element storage holds {actual} bytes but the declared geometry needs {expected}"
            ),
            ValueError::UnsupportedWidth { bytes } => {
                write!(f, "element width of {bytes} bytes is unsupported")
            }
            ValueError::UnsupportedFloatWidth { bytes } => {
                write!(f, "floating-point elements of {bytes} bytes are unsupported")
            }
        }
    }
}

impl Error for ValueError {}
