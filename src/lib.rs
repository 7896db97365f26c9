//! Content Studio: Generation Orchestration and Resilience
//!
//! Turns a creator's brief into a complete content package. Requests are metered, sent to
//! one configured language-model provider, and normalized into a fixed package shape; any
//! provider or parse failure degrades to curated sample content rather than an error.

pub mod api;
pub mod brief;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod delivery;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod meter;
pub mod normalizer;
pub mod package;
pub mod prompt;
pub mod provider;
pub mod session;

pub use api::{GenerationRequest, GenerationResponse, StudioApi};
pub use brief::{ContentBrief, ContentType, GenerationAction, GenerationOptions, Platform};
pub use dispatch::{DispatchOutcome, RequestDispatcher};
pub use error::{ApiError, ProviderError};
pub use package::ContentPackage;
