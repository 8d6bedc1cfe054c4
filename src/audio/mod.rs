mod combiner;
mod header;

pub use combiner::combine;
pub use header::{HeaderError, WavHeader};
