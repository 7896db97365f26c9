//! Integration tests for generation orchestration and fallback

mod config_integration;
mod delivery_channel;
mod dispatch_scenarios;
mod normalizer_contract;
pub mod test_utils;
