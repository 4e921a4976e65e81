// Domain types and value objects
mod observation;

// Re-export commonly used types to the world
pub use observation::{Observation, YearSpan};
