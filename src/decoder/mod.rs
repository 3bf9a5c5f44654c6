pub mod decoder;
pub mod table;

pub use decoder::{Decoder, DecoderNetwork};
pub use table::TruthTable;
