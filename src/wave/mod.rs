//! Waveform model: node symbols and the signal builder.

pub mod signal;
pub mod symbol;

pub use signal::{Signal, Step};
pub use symbol::{DataColor, Symbol};
