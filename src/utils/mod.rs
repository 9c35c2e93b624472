// Utility modules

pub mod timestamp;

pub use timestamp::*;
