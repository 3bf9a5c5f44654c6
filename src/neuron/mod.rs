pub mod unit;

pub use unit::Neuron;
