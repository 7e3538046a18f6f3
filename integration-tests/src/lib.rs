//! Shared cost models for the integration tests.

pub mod cost_models;
