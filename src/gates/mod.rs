pub mod logic;

pub use logic::{and, or, not};
