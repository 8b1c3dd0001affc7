pub mod classifier;
pub mod table;

pub use classifier::*;
pub use table::*;
