//! Numeric output and byte encoding
//!
//! A serial number models a little endian integer field of `bits / 8` bytes.
//! Rendering can reinterpret that field as big endian, which is a byte swap
//! rather than an arithmetic operation.
use std::fmt;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::{error::Error, serial::SerialNumber, space::SerialSpace};

pub const DEFAULT_RADIX: u32 = 10;

/// Configuration for [`SerialNumber::render`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RenderOptions {
    /// base of the rendered digits, from 2 to 36 (default 10)
    pub radix: u32,
    /// read the little endian byte image back as big endian before
    /// rendering. Only valid for byte aligned spaces
    pub big_endian: bool,
    /// produce [`Rendered::Text`] rather than [`Rendered::Number`]
    /// (default true)
    pub as_string: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            radix: DEFAULT_RADIX,
            big_endian: false,
            as_string: true,
        }
    }
}

impl RenderOptions {
    pub fn with_radix(mut self, radix: u32) -> Self {
        self.radix = radix;
        self
    }

    pub fn big_endian(mut self, big_endian: bool) -> Self {
        self.big_endian = big_endian;
        self
    }

    pub fn as_string(mut self, as_string: bool) -> Self {
        self.as_string = as_string;
        self
    }
}

/// output of [`SerialNumber::render`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rendered {
    Text(String),
    Number(u64),
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rendered::Text(s) => f.write_str(s),
            Rendered::Number(n) => write!(f, "{}", n),
        }
    }
}

impl SerialNumber {
    /// Renders the value according to `options`
    ///
    /// ```rust
    /// use sna::{RenderOptions, Rendered, SerialNumber};
    ///
    /// let serial = SerialNumber::new(0x1234_5678);
    /// let options = RenderOptions::default().big_endian(true).with_radix(16);
    /// assert_eq!(serial.render(&options).unwrap(), Rendered::Text("78563412".to_string()));
    /// ```
    #[cfg_attr(feature = "telemetry", tracing::instrument(skip_all))]
    pub fn render(&self, options: &RenderOptions) -> Result<Rendered, Error> {
        if !(2..=36).contains(&options.radix) {
            return Err(Error::InvalidRadix(options.radix));
        }

        let number = if options.big_endian {
            self.swap_bytes()?.value()
        } else {
            self.value()
        };

        if options.as_string {
            Ok(Rendered::Text(format_radix(number, options.radix)))
        } else {
            Ok(Rendered::Number(number))
        }
    }

    /// the same bytes read in the opposite byte order
    #[cfg_attr(feature = "telemetry", tracing::instrument(skip_all))]
    pub fn swap_bytes(&self) -> Result<SerialNumber, Error> {
        let width = self.space_bytes()?;
        let mut buf = self.to_le_bytes()?;
        Ok(SerialNumber::in_space(buf.get_uint(width), self.space()))
    }

    pub fn to_le_bytes(&self) -> Result<Bytes, Error> {
        let width = self.space_bytes()?;
        let mut buf = BytesMut::with_capacity(width);
        buf.put_uint_le(self.value(), width);
        Ok(buf.freeze())
    }

    pub fn to_be_bytes(&self) -> Result<Bytes, Error> {
        let width = self.space_bytes()?;
        let mut buf = BytesMut::with_capacity(width);
        buf.put_uint(self.value(), width);
        Ok(buf.freeze())
    }

    /// decodes a little endian field of exactly `bits / 8` bytes
    pub fn from_le_bytes(mut src: &[u8], bits: u32) -> Result<SerialNumber, Error> {
        let (space, width) = decoding_space(src, bits)?;
        Ok(SerialNumber::in_space(src.get_uint_le(width), space))
    }

    /// decodes a big endian field of exactly `bits / 8` bytes
    pub fn from_be_bytes(mut src: &[u8], bits: u32) -> Result<SerialNumber, Error> {
        let (space, width) = decoding_space(src, bits)?;
        Ok(SerialNumber::in_space(src.get_uint(width), space))
    }
}

fn decoding_space(src: &[u8], bits: u32) -> Result<(SerialSpace, usize), Error> {
    let space = SerialSpace::new(bits)?;
    let width = space.bytes()?;
    if src.len() != width {
        return Err(Error::decoding(format!(
            "a {} bit serial number needs {} bytes, got {}",
            bits,
            width,
            src.len()
        )));
    }
    Ok((space, width))
}

fn format_radix(mut n: u64, radix: u32) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let base = u64::from(radix);
    let mut digits = Vec::with_capacity(64);
    while n > 0 {
        digits.extend(char::from_digit((n % base) as u32, radix));
        n /= base;
    }
    digits.iter().rev().collect()
}
