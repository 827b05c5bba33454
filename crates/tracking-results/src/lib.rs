mod normalizer;
mod report;


pub use normalizer::*;
pub use report::*;
