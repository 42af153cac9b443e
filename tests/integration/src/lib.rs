//! Integration test utilities for the community feed
//!
//! This crate provides in-memory stand-ins for the storage and flag-cache
//! ports, fixtures for seeding feeds, and helpers for driving the REST API.

pub mod fakes;
pub mod fixtures;

pub use fakes::*;
pub use fixtures::*;
pub use helpers::*;
