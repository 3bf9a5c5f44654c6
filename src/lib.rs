pub mod error;
pub mod signal;
pub mod neuron;
pub mod gates;
pub mod decoder;

// Convenience re-exports
pub use error::TluError;
pub use signal::input::Input;
pub use neuron::unit::Neuron;
pub use gates::logic::{and, or, not};
pub use decoder::decoder::{Decoder, DecoderNetwork};
pub use decoder::table::TruthTable;
