//! # RFC 1982 serial number arithmetic
//!
//! Serial numbers are fixed width counters that wrap around modulo `2^bits`.
//! Their ordering is circular: a value is greater than another when it is
//! less than half the space ahead of it, so comparisons keep working after
//! the counter wraps.
//!
//! ```rust
//! use sna::{RenderOptions, SerialNumber, SerialSpace};
//!
//! # fn main() -> Result<(), sna::Error> {
//! let space = SerialSpace::new(8)?;
//! let a = SerialNumber::in_space(200, space);
//! let b = a.add_raw(100)?;
//!
//! assert_eq!(b.value(), 44);
//! assert!(b > a);
//!
//! // at most half the space minus one can be added at once
//! assert!(a.add_raw(128).is_err());
//!
//! let hex = b.render(&RenderOptions::default().with_radix(16))?;
//! assert_eq!(hex.to_string(), "2c");
//! # Ok(())
//! # }
//! ```
//!
//! Values exactly half the space apart are unordered, and values from spaces
//! of different widths are neither equal nor ordered. [`SerialNumber::compare`]
//! and [`SerialNumber::add`] report the latter as
//! [`Error::IncompatibleSpace`].
//!
//! ## Features
//!
//! - `serde`: `Serialize` and `Deserialize` for the public types
//! - `telemetry`: `tracing` spans around the public operations
#[macro_use]
extern crate log;

pub use error::Error;
pub use render::{RenderOptions, Rendered, DEFAULT_RADIX};
pub use serial::SerialNumber;
pub use space::{SerialSpace, DEFAULT_SERIAL_BITS, MAX_SERIAL_BITS, MIN_SERIAL_BITS};
pub use util::SerialCounter;

pub mod error;
mod render;
mod serial;
mod space;
mod util;

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::*;

    pub struct SimpleLogger {
        pub tag: &'static str,
    }

    impl log::Log for SimpleLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                println!(
                    "{} {}\t{}\t{}",
                    self.tag,
                    record.level(),
                    record.module_path().unwrap_or_default(),
                    record.args()
                );
            }
        }

        fn flush(&self) {}
    }

    pub static TEST_LOGGER: SimpleLogger = SimpleLogger { tag: "sna" };

    #[test]
    fn rfc1982_section_5_2() {
        let _result = log::set_logger(&TEST_LOGGER);
        log::set_max_level(LevelFilter::Debug);

        let space = SerialSpace::U8;
        let sn = |v: u64| SerialNumber::in_space(v, space);

        // every legal addition keeps the result greater than the start
        let start = sn(200);
        for delta in 1..=space.max_add() {
            let sum = start.add_raw(delta).unwrap();
            assert!(sum > start, "{} + {} = {}", start, delta, sum);
        }

        // 255 + 100 = 99, and 100 + 100 = 200
        assert_eq!(sn(255).add_raw(100).unwrap(), sn(99));
        assert_eq!(sn(100).add_raw(100).unwrap(), sn(200));
        assert!(sn(99) > sn(255));
    }

    #[test]
    fn comparisons_are_mutually_exclusive() {
        let space = SerialSpace::new(4).unwrap();
        for i in 0..16i32 {
            for j in 0..16i32 {
                let (a, b) = (
                    SerialNumber::in_space(i, space),
                    SerialNumber::in_space(j, space),
                );
                let relations = [a == b, a < b, a > b];
                let holding = relations.iter().filter(|r| **r).count();
                if (i - j).rem_euclid(16) == 8 {
                    assert_eq!(holding, 0, "{} and {} are antipodal", i, j);
                } else {
                    assert_eq!(holding, 1, "{} and {}", i, j);
                    assert_eq!(a < b, b > a);
                    assert_eq!(a <= b, b >= a);
                }
            }
        }
    }
}
