#![forbid(unsafe_code)]
//! Faunatrack dashboard library: HTTP API client, pure view-model state,
//! and text rendering for the CLI binary.

pub mod client;
pub mod render;
pub mod state;

pub use client::{ApiClient, ClientError, DashboardData};
pub use state::{DashboardState, Phase, SightingForm};

pub const CRATE_NAME: &str = "faunatrack-dash";
