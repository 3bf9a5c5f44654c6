use serde::{Serialize, Deserialize};
use crate::error::TluError;
use crate::signal::input::Input;

/// A McCulloch-Pitts threshold unit.
///
/// Holds an ordered list of owned inputs and an integer threshold. The unit
/// fires (outputs 1) when no inhibitory input is active and the sum of the
/// excitatory input values reaches the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    pub threshold: i32,
    inputs: Vec<Input>,
}

impl Neuron {
    /// Builds a neuron from a threshold and its input list.
    /// The number of inputs is fixed for the lifetime of the neuron.
    pub fn new(threshold: i32, inputs: Vec<Input>) -> Neuron {
        Neuron { threshold, inputs }
    }

    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// Re-triggers every owned input positionally with `args`.
    pub fn trigger_all(&mut self, args: &[u8]) -> Result<(), TluError> {
        if args.len() != self.inputs.len() {
            return Err(TluError::ArityMismatch {
                expected: self.inputs.len(),
                found: args.len(),
            });
        }
        for (input, &value) in self.inputs.iter_mut().zip(args.iter()) {
            input.trigger(value)?;
        }
        Ok(())
    }

    /// Evaluates the unit against the current input values.
    ///
    /// Any active inhibitory input vetoes the whole unit; the early return is
    /// a shortcut only, since the result is the same wherever the inhibitor
    /// sits in the list. The threshold comparison is non-strict (≥ fires).
    pub fn activate(&self) -> u8 {
        let mut excitation: i32 = 0;
        for input in &self.inputs {
            if !input.excitatory && input.value() == 1 {
                return 0;
            }
            if input.excitatory {
                excitation += i32::from(input.value());
            }
        }
        u8::from(excitation >= self.threshold)
    }
}
