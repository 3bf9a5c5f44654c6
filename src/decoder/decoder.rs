use serde::{Serialize, Deserialize};
use crate::error::TluError;
use crate::neuron::unit::Neuron;
use crate::signal::input::Input;

/// Rebuilds a boolean function from the preimage-of-1 rows of its truth table.
///
/// Each example vector becomes one exact-match "decoder unit": a neuron whose
/// threshold equals the number of 1-bits in the vector, with an excitatory
/// input at every 1 position and an inhibitory input at every 0 position.
/// Such a unit fires iff the presented arguments equal its vector — any
/// deviation either drops the excitatory sum below threshold or trips an
/// inhibitor. OR-ing the units together reproduces the original function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoder {
    vectors: Vec<Vec<u8>>,
    vector_length: usize,
}

impl Decoder {
    /// Validates and stores the example vectors.
    ///
    /// Fails on an empty set (the arity would be undefined), on vectors whose
    /// length differs from the first vector's, and on non-binary entries.
    /// Duplicate vectors are accepted; OR is idempotent.
    pub fn new(vectors: Vec<Vec<u8>>) -> Result<Decoder, TluError> {
        let vector_length = match vectors.first() {
            Some(first) => first.len(),
            None => return Err(TluError::EmptyTruthSet),
        };
        for vector in &vectors {
            if vector.len() != vector_length {
                return Err(TluError::LengthMismatch {
                    expected: vector_length,
                    found: vector.len(),
                });
            }
            for &bit in vector {
                if bit > 1 {
                    return Err(TluError::NonBinaryValue(bit));
                }
            }
        }
        Ok(Decoder { vectors, vector_length })
    }

    /// Arity of the decoded function.
    pub fn arity(&self) -> usize {
        self.vector_length
    }

    pub fn vectors(&self) -> &[Vec<u8>] {
        &self.vectors
    }

    /// Builds the reusable decoder network: one unit per example vector, each
    /// owning its private input list so units never alias each other's state.
    pub fn decode(&self) -> DecoderNetwork {
        let units = self.vectors.iter()
            .map(|vector| {
                let threshold = vector.iter().map(|&bit| i32::from(bit)).sum();
                let inputs = vector.iter().map(|&bit| Input::new(bit == 1)).collect();
                Neuron::new(threshold, inputs)
            })
            .collect();
        DecoderNetwork { arity: self.vector_length, units }
    }
}

/// The callable produced by `Decoder::decode`: a bank of exact-match units
/// whose activations are folded with logical OR.
///
/// Safe to evaluate any number of times with fresh argument vectors;
/// single-threaded, non-overlapping calls only.
#[derive(Debug, Clone)]
pub struct DecoderNetwork {
    arity: usize,
    units: Vec<Neuron>,
}

impl DecoderNetwork {
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Evaluates the decoded function on `args`.
    ///
    /// Returns 1 iff `args` equals one of the example vectors the decoder was
    /// built from. Every unit is re-triggered with the current arguments and
    /// the activations are OR-folded starting from 0.
    pub fn eval(&mut self, args: &[u8]) -> Result<u8, TluError> {
        if args.len() != self.arity {
            return Err(TluError::ArityMismatch {
                expected: self.arity,
                found: args.len(),
            });
        }
        let mut output = 0;
        for unit in &mut self.units {
            unit.trigger_all(args)?;
            output |= unit.activate();
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn bits3(v: u8) -> Vec<u8> {
        vec![(v >> 2) & 1, (v >> 1) & 1, v & 1]
    }

    #[test]
    fn decodes_three_bit_example_exactly() {
        let decoder = Decoder::new(vec![
            vec![0, 1, 0],
            vec![0, 1, 1],
            vec![1, 0, 1],
        ]).unwrap();
        let mut network = decoder.decode();

        for v in 0u8..8 {
            let expected = matches!(v, 0b010 | 0b011 | 0b101) as u8;
            assert_eq!(network.eval(&bits3(v)).unwrap(), expected, "args {v:03b}");
        }
    }

    #[test]
    fn duplicate_vectors_change_nothing() {
        let plain = Decoder::new(vec![vec![1, 0], vec![0, 1]]).unwrap();
        let doubled = Decoder::new(vec![vec![1, 0], vec![0, 1], vec![1, 0]]).unwrap();
        let mut a = plain.decode();
        let mut b = doubled.decode();

        for v in 0u8..4 {
            let args = [(v >> 1) & 1, v & 1];
            assert_eq!(a.eval(&args).unwrap(), b.eval(&args).unwrap());
        }
    }

    #[test]
    fn network_is_reusable_across_calls() {
        let mut network = Decoder::new(vec![vec![1, 1]]).unwrap().decode();
        assert_eq!(network.eval(&[1, 1]).unwrap(), 1);
        assert_eq!(network.eval(&[0, 1]).unwrap(), 0);
        assert_eq!(network.eval(&[1, 1]).unwrap(), 1);
    }

    #[test]
    fn construction_rejects_bad_truth_sets() {
        assert_eq!(Decoder::new(vec![]), Err(TluError::EmptyTruthSet));
        assert_eq!(
            Decoder::new(vec![vec![0, 1], vec![1, 0, 0]]),
            Err(TluError::LengthMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            Decoder::new(vec![vec![0, 2]]),
            Err(TluError::NonBinaryValue(2))
        );
    }

    #[test]
    fn eval_rejects_wrong_arity() {
        let mut network = Decoder::new(vec![vec![1, 0, 1]]).unwrap().decode();
        assert_eq!(
            network.eval(&[1, 0]),
            Err(TluError::ArityMismatch { expected: 3, found: 2 })
        );
    }

    #[test]
    fn random_truth_sets_decode_to_membership() {
        // eval(a) == 1 iff a is in the example set, for random 4-bit sets.
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let count = rng.gen_range(1..=6);
            let vectors: Vec<Vec<u8>> = (0..count)
                .map(|_| (0..4).map(|_| rng.gen_range(0..=1)).collect())
                .collect();
            let mut network = Decoder::new(vectors.clone()).unwrap().decode();

            for v in 0u8..16 {
                let args: Vec<u8> = (0..4).map(|i| (v >> (3 - i)) & 1).collect();
                let expected = vectors.contains(&args) as u8;
                assert_eq!(network.eval(&args).unwrap(), expected, "args {v:04b}");
            }
        }
    }
}
