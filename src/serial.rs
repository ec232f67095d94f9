//! Serial numbers and their circular ordering
use std::{cmp::Ordering, fmt};

use crate::{error::Error, space::SerialSpace};

/// A value of a serial number space, ordered as described in RFC 1982
///
/// Comparisons use the standard operators. `a < b` holds when `b` is less
/// than half the space ahead of `a`, so the order survives wraparound:
///
/// ```rust
/// use sna::SerialNumber;
///
/// let before = SerialNumber::with_bits(255, 8).unwrap();
/// let after = before.next();
/// assert_eq!(after.value(), 0);
/// assert!(after > before);
/// ```
///
/// Two values exactly half the space apart are unordered: `<`, `>`, `<=` and
/// `>=` are all false and [`PartialOrd::partial_cmp`] returns `None`. Values
/// from different spaces are never equal and never ordered; use
/// [`SerialNumber::compare`] to turn that case into an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SerialNumberRepr", into = "SerialNumberRepr")
)]
pub struct SerialNumber {
    value: u64,
    space: SerialSpace,
}

impl SerialNumber {
    /// creates a serial number in the default 32 bit space
    ///
    /// `raw` is reduced modulo `2^32`; negative input wraps from the top
    pub fn new<T: Into<i128>>(raw: T) -> Self {
        Self::in_space(raw, SerialSpace::default())
    }

    /// creates a serial number in a space of `bits` bits
    ///
    /// only the width can be rejected, any `raw` value is reduced into the space
    #[cfg_attr(feature = "telemetry", tracing::instrument(skip_all))]
    pub fn with_bits<T: Into<i128>>(raw: T, bits: u32) -> Result<Self, Error> {
        Ok(Self::in_space(raw, SerialSpace::new(bits)?))
    }

    pub fn in_space<T: Into<i128>>(raw: T, space: SerialSpace) -> Self {
        SerialNumber {
            value: space.reduce(raw.into()),
            space,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn space(&self) -> SerialSpace {
        self.space
    }

    pub fn space_bits(&self) -> u32 {
        self.space.bits()
    }

    pub fn space_bytes(&self) -> Result<usize, Error> {
        self.space.bytes()
    }

    /// Compares two serial numbers, failing if they belong to different spaces
    ///
    /// `Ok(None)` means the values are exactly half the space apart.
    #[cfg_attr(feature = "telemetry", tracing::instrument(skip_all))]
    pub fn compare(&self, other: &SerialNumber) -> Result<Option<Ordering>, Error> {
        self.space.check_compatible(&other.space)?;
        Ok(self.circular_cmp(other))
    }

    /// how far `other` is ahead of `self`, counting forward with wraparound
    pub fn distance(&self, other: &SerialNumber) -> Result<u64, Error> {
        self.space.check_compatible(&other.space)?;
        Ok(other.value.wrapping_sub(self.value) & self.space.max_value())
    }

    /// Adds `delta` as described in RFC 1982 section 3.1
    ///
    /// `delta` must come from the same space and be at most
    /// [`SerialSpace::max_add`].
    #[allow(clippy::should_implement_trait)]
    #[cfg_attr(feature = "telemetry", tracing::instrument(skip_all))]
    pub fn add(self, delta: SerialNumber) -> Result<Self, Error> {
        self.space.check_compatible(&delta.space)?;
        self.add_raw(delta.value)
    }

    /// Adds a plain integer, which must be in `0..=max_add`
    #[cfg_attr(feature = "telemetry", tracing::instrument(skip_all))]
    pub fn add_raw<T: Into<i128>>(self, delta: T) -> Result<Self, Error> {
        let delta = delta.into();
        let max_add = self.space.max_add();
        if delta < 0 || delta > i128::from(max_add) {
            debug!(
                "cannot add {} to {}: the addend must be in 0..={}",
                delta, self, max_add
            );
            return Err(Error::OutOfRange { delta, max_add });
        }

        Ok(SerialNumber {
            value: self.space.reduce(i128::from(self.value) + delta),
            space: self.space,
        })
    }

    /// the successor of this serial number
    pub fn next(self) -> Self {
        SerialNumber {
            value: self.value.wrapping_add(1) & self.space.max_value(),
            space: self.space,
        }
    }

    /// human readable form, e.g. `<number=255, bits=8>`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn circular_cmp(&self, other: &SerialNumber) -> Option<Ordering> {
        let (i1, i2) = (self.value, other.value);
        let half = self.space.half();

        if i1 == i2 {
            Some(Ordering::Equal)
        } else if (i1 < i2 && i2 - i1 < half) || (i1 > i2 && i1 - i2 > half) {
            Some(Ordering::Less)
        } else if (i1 < i2 && i2 - i1 > half) || (i1 > i2 && i1 - i2 < half) {
            Some(Ordering::Greater)
        } else {
            // exactly half the space apart
            None
        }
    }
}

impl PartialOrd for SerialNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.space != other.space {
            return None;
        }
        self.circular_cmp(other)
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<number={}, bits={}>", self.value, self.space.bits())
    }
}

impl fmt::LowerHex for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl fmt::UpperHex for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}

impl From<SerialNumber> for u64 {
    fn from(serial: SerialNumber) -> Self {
        serial.value
    }
}

#[cfg(feature = "serde")]
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct SerialNumberRepr {
    value: u64,
    bits: SerialSpace,
}

#[cfg(feature = "serde")]
impl TryFrom<SerialNumberRepr> for SerialNumber {
    type Error = Error;

    fn try_from(repr: SerialNumberRepr) -> Result<Self, Self::Error> {
        if repr.value > repr.bits.max_value() {
            return Err(Error::decoding(format!(
                "{} does not fit in a {} bit space",
                repr.value,
                repr.bits.bits()
            )));
        }
        Ok(SerialNumber {
            value: repr.value,
            space: repr.bits,
        })
    }
}

#[cfg(feature = "serde")]
impl From<SerialNumber> for SerialNumberRepr {
    fn from(serial: SerialNumber) -> Self {
        SerialNumberRepr {
            value: serial.value,
            bits: serial.space,
        }
    }
}
