pub mod config;
pub mod folder;
pub mod selection;
pub mod task;

pub use config::*;
pub use folder::*;
pub use selection::*;
pub use task::*;
