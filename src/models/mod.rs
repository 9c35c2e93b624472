// Data models for mock data documents

pub mod document;
pub mod stage;
pub mod task;

pub use document::*;
pub use stage::*;
pub use task::*;
