#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, repeat_tile, PngRenderer};
