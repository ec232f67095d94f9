//! Serial number spaces
//!
//! A space is the set of integers `[0, 2^bits)` that a serial number cycles
//! through. RFC 1982 calls `bits` `SERIAL_BITS`.

use crate::error::Error;

/// width used when no space is given
pub const DEFAULT_SERIAL_BITS: u32 = 32;
/// the smallest space where circular ordering is defined
pub const MIN_SERIAL_BITS: u32 = 2;
/// the widest space a `u64` can hold
pub const MAX_SERIAL_BITS: u32 = 64;

/// A validated serial number space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct SerialSpace {
    bits: u32,
}

impl SerialSpace {
    pub const U8: SerialSpace = SerialSpace { bits: 8 };
    pub const U16: SerialSpace = SerialSpace { bits: 16 };
    pub const U32: SerialSpace = SerialSpace { bits: 32 };
    pub const U64: SerialSpace = SerialSpace { bits: 64 };

    #[cfg_attr(feature = "telemetry", tracing::instrument(skip_all))]
    pub fn new(bits: u32) -> Result<Self, Error> {
        if !(MIN_SERIAL_BITS..=MAX_SERIAL_BITS).contains(&bits) {
            return Err(Error::UnsupportedSpace(bits));
        }
        Ok(SerialSpace { bits })
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// number of bytes in the encoded form
    ///
    /// fails with [`Error::InvalidWidth`] if `bits` is not a multiple of 8
    pub fn bytes(&self) -> Result<usize, Error> {
        if self.bits % 8 != 0 {
            return Err(Error::InvalidWidth(self.bits));
        }
        Ok((self.bits / 8) as usize)
    }

    /// `2^bits`
    pub fn modulus(&self) -> u128 {
        1u128 << self.bits
    }

    /// `2^(bits - 1)`, the distance at which ordering becomes undefined
    pub fn half(&self) -> u64 {
        1u64 << (self.bits - 1)
    }

    /// the largest addend allowed by RFC 1982 section 3.1
    pub fn max_add(&self) -> u64 {
        self.half() - 1
    }

    /// the largest value in the space
    pub fn max_value(&self) -> u64 {
        u64::MAX >> (MAX_SERIAL_BITS - self.bits)
    }

    /// maps any integer onto the space, wrapping negative input from the top
    pub(crate) fn reduce(&self, raw: i128) -> u64 {
        raw.rem_euclid(self.modulus() as i128) as u64
    }

    pub(crate) fn check_compatible(&self, other: &SerialSpace) -> Result<(), Error> {
        if self.bits != other.bits {
            debug!(
                "rejecting operation between a {} bit and a {} bit serial number",
                self.bits, other.bits
            );
            return Err(Error::IncompatibleSpace {
                left: self.bits,
                right: other.bits,
            });
        }
        Ok(())
    }
}

impl Default for SerialSpace {
    fn default() -> Self {
        SerialSpace {
            bits: DEFAULT_SERIAL_BITS,
        }
    }
}

impl TryFrom<u32> for SerialSpace {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        SerialSpace::new(bits)
    }
}

impl From<SerialSpace> for u32 {
    fn from(space: SerialSpace) -> Self {
        space.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants() {
        let space = SerialSpace::new(8).unwrap();
        assert_eq!(space.modulus(), 256);
        assert_eq!(space.half(), 128);
        assert_eq!(space.max_add(), 127);
        assert_eq!(space.max_value(), 255);
        assert_eq!(space.bytes(), Ok(1));

        let space = SerialSpace::new(2).unwrap();
        assert_eq!(space.modulus(), 4);
        assert_eq!(space.half(), 2);
        assert_eq!(space.max_add(), 1);

        assert_eq!(SerialSpace::U64.modulus(), 1u128 << 64);
        assert_eq!(SerialSpace::U64.max_value(), u64::MAX);
        assert_eq!(SerialSpace::U64.max_add(), (1u64 << 63) - 1);
    }

    #[test]
    fn default_is_32_bits() {
        assert_eq!(SerialSpace::default(), SerialSpace::U32);
        assert_eq!(SerialSpace::default().bytes(), Ok(4));
    }

    #[test]
    fn rejects_unsupported_widths() {
        assert_eq!(SerialSpace::new(0), Err(Error::UnsupportedSpace(0)));
        assert_eq!(SerialSpace::new(1), Err(Error::UnsupportedSpace(1)));
        assert_eq!(SerialSpace::new(65), Err(Error::UnsupportedSpace(65)));
        assert!(SerialSpace::try_from(24).is_ok());
    }

    #[test]
    fn bytes_requires_alignment() {
        let space = SerialSpace::new(12).unwrap();
        assert_eq!(space.bytes(), Err(Error::InvalidWidth(12)));
        assert_eq!(SerialSpace::new(24).unwrap().bytes(), Ok(3));
    }

    #[test]
    fn reduce_wraps_both_directions() {
        let space = SerialSpace::U8;
        assert_eq!(space.reduce(0), 0);
        assert_eq!(space.reduce(256), 0);
        assert_eq!(space.reduce(300), 44);
        assert_eq!(space.reduce(-1), 255);
        assert_eq!(space.reduce(-256), 0);
        assert_eq!(SerialSpace::U64.reduce(-1), u64::MAX);
    }
}
