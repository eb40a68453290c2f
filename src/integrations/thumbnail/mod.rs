pub mod probe;

pub use probe::{ProbeError, SimulatedThumbnailProbe, ThumbnailProbe};

#[cfg(test)]
pub use probe::MockThumbnailProbe;
