// src/integrations/mod.rs
//
// External Integrations Module

pub mod thumbnail;

pub use thumbnail::{ProbeError, SimulatedThumbnailProbe, ThumbnailProbe};
