use serde::{Serialize, Deserialize};
use crate::decoder::decoder::Decoder;
use crate::error::TluError;

/// A fully serializable description of a decoder's truth set.
///
/// `TruthTable` can be saved to / loaded from JSON independently of the built
/// network, making it possible to store a boolean function's preimage-of-1
/// rows and rebuild the decoder later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruthTable {
    /// Human-readable name used as the table file stem.
    pub name: String,
    /// The argument vectors on which the target function is 1.
    pub vectors: Vec<Vec<u8>>,
}

impl TruthTable {
    pub fn new(name: impl Into<String>, vectors: Vec<Vec<u8>>) -> TruthTable {
        TruthTable { name: name.into(), vectors }
    }

    /// Builds a `Decoder` from this table, applying the usual validation.
    pub fn build(&self) -> Result<Decoder, TluError> {
        Decoder::new(self.vectors.clone())
    }

    /// Serializes the table to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `TruthTable` from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<TruthTable> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
