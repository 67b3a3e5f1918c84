//! Integration tests for the generator spawner synthesizer

mod config_integration;
mod extraction;
mod test_utils;
