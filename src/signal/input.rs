use serde::{Serialize, Deserialize};
use crate::error::TluError;

/// A named binary signal feeding a neuron.
///
/// An input is created with a fixed polarity (excitatory or inhibitory) and
/// holds a current value of 0 or 1. The value starts at 0 and is mutated by
/// explicit `trigger` calls between activations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Input {
    pub excitatory: bool,
    value: u8,
}

impl Input {
    pub fn new(excitatory: bool) -> Input {
        Input { excitatory, value: 0 }
    }

    pub fn excitatory() -> Input {
        Input::new(true)
    }

    pub fn inhibitory() -> Input {
        Input::new(false)
    }

    /// Sets the input's current binary value.
    ///
    /// Anything other than 0 or 1 is rejected, which is the only way the
    /// `value` field can stay a valid bit across every code path.
    pub fn trigger(&mut self, value: u8) -> Result<(), TluError> {
        if value > 1 {
            return Err(TluError::NonBinaryValue(value));
        }
        self.value = value;
        Ok(())
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}
