pub mod detection;
pub mod sequencing;

pub use detection::*;
pub use sequencing::*;
