use crate::{serial::SerialNumber, space::SerialSpace};

/// Hands out consecutive serial numbers, wrapping at the end of the space
///
/// Every value returned by [`SerialCounter::next`] compares greater than the
/// one before it.
#[derive(Debug, Default)]
pub struct SerialCounter(SerialNumber);

impl SerialCounter {
    pub fn new(space: SerialSpace) -> SerialCounter {
        SerialCounter(SerialNumber::in_space(0, space))
    }

    pub fn starting_at(first: SerialNumber) -> SerialCounter {
        SerialCounter(first)
    }

    /// the value the next call to [`SerialCounter::next`] returns
    pub fn peek(&self) -> SerialNumber {
        self.0
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> SerialNumber {
        let id = self.0;
        self.0 = id.next();
        if self.0.value() == 0 {
            trace!("serial counter wrapped around after {}", id);
        }
        id
    }
}

impl Iterator for SerialCounter {
    type Item = SerialNumber;

    fn next(&mut self) -> Option<SerialNumber> {
        Some(SerialCounter::next(self))
    }
}
