//! Error types
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The addend is negative or larger than the space's `max_add`
    OutOfRange { delta: i128, max_add: u64 },
    /// The space width is not a whole number of bytes
    InvalidWidth(u32),
    /// The operands live in serial number spaces of different widths
    IncompatibleSpace { left: u32, right: u32 },
    /// The space width is outside of `2..=64`
    UnsupportedSpace(u32),
    InvalidRadix(u32),
    Decoding(String),
}

impl Error {
    pub(crate) fn decoding<S: Into<String>>(msg: S) -> Self {
        Error::Decoding(msg.into())
    }
}

impl fmt::Display for Error {
    #[cfg_attr(feature = "telemetry", tracing::instrument(skip_all))]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfRange { delta, max_add } => write!(
                f,
                "cannot add {} to a serial number: the addend must be in 0..={}",
                delta, max_add
            ),
            Error::InvalidWidth(bits) => {
                write!(f, "a {} bit serial number space is not byte aligned", bits)
            }
            Error::IncompatibleSpace { left, right } => write!(
                f,
                "serial numbers from a {} bit and a {} bit space cannot be combined",
                left, right
            ),
            Error::UnsupportedSpace(bits) => write!(
                f,
                "unsupported serial number space of {} bits, expected 2 to 64",
                bits
            ),
            Error::InvalidRadix(radix) => {
                write!(f, "invalid radix {}, expected 2 to 36", radix)
            }
            Error::Decoding(e) => write!(f, "Error decoding serial number: {}", e),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_names_the_offending_values() {
        let err = Error::OutOfRange {
            delta: 128,
            max_add: 127,
        };
        assert_eq!(
            err.to_string(),
            "cannot add 128 to a serial number: the addend must be in 0..=127"
        );

        let err = Error::IncompatibleSpace {
            left: 8,
            right: 16,
        };
        assert!(err.to_string().contains("8 bit"));
        assert!(err.to_string().contains("16 bit"));

        assert_eq!(
            Error::decoding("expected 4 bytes, got 3").to_string(),
            "Error decoding serial number: expected 4 bytes, got 3"
        );
    }

    #[test]
    fn is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::InvalidWidth(12));
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "a 12 bit serial number space is not byte aligned");
    }
}
