pub mod analyzer;
pub mod preparator;
pub mod results;

pub use analyzer::*;
pub use preparator::*;
pub use results::*;
