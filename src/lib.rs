//! Build WaveDrom timing-diagram signals and serialize them as JSON.
//!
//! ```text
//! {"signal":[{"name":"Sig 1","wave":"1...2...3...","data":[]}]}
//! ```

pub mod demos;
pub mod diagnostics;
pub mod diagram;
pub mod json;
pub mod wave;

pub type Result<T> = anyhow::Result<T>;
