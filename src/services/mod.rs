// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod thumbnail_check_service;


pub use thumbnail_check_service::{CheckServiceConfig, SubmitOutcome, ThumbnailCheckService};
