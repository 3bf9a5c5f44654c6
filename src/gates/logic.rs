use crate::error::TluError;
use crate::neuron::unit::Neuron;
use crate::signal::input::Input;

// The classic gate constructions. Each call assembles a fresh neuron with its
// own inputs, triggers them with the arguments, and returns the activation —
// no state is shared across calls.

/// AND: two excitatory inputs, threshold 2. Fires only when both are 1.
pub fn and(x1: u8, x2: u8) -> Result<u8, TluError> {
    binary_gate(2, x1, x2)
}

/// OR: two excitatory inputs, threshold 1. Fires when at least one is 1.
pub fn or(x1: u8, x2: u8) -> Result<u8, TluError> {
    binary_gate(1, x1, x2)
}

/// NOT: one inhibitory input, threshold 0. Fires exactly when the input is 0.
pub fn not(x: u8) -> Result<u8, TluError> {
    let mut neuron = Neuron::new(0, vec![Input::inhibitory()]);
    neuron.trigger_all(&[x])?;
    Ok(neuron.activate())
}

fn binary_gate(threshold: i32, x1: u8, x2: u8) -> Result<u8, TluError> {
    let mut neuron = Neuron::new(threshold, vec![Input::excitatory(), Input::excitatory()]);
    neuron.trigger_all(&[x1, x2])?;
    Ok(neuron.activate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_truth_table() {
        for x1 in 0u8..=1 {
            for x2 in 0u8..=1 {
                assert_eq!(and(x1, x2).unwrap(), x1 & x2);
            }
        }
    }

    #[test]
    fn or_truth_table() {
        for x1 in 0u8..=1 {
            for x2 in 0u8..=1 {
                assert_eq!(or(x1, x2).unwrap(), x1 | x2);
            }
        }
    }

    #[test]
    fn not_truth_table() {
        assert_eq!(not(0).unwrap(), 1);
        assert_eq!(not(1).unwrap(), 0);
    }

    #[test]
    fn gates_reject_non_binary_arguments() {
        assert_eq!(and(2, 0), Err(TluError::NonBinaryValue(2)));
        assert_eq!(or(0, 7), Err(TluError::NonBinaryValue(7)));
        assert_eq!(not(255), Err(TluError::NonBinaryValue(255)));
    }
}
