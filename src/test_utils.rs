//! Shared test utilities for Blockwise.
//!
//! This module provides common setup functions used across test modules.

#![cfg(test)]

use crate::engine::BlockingEngine;
use crate::models::RuleInput;
use crate::store::MemoryStore;

/// Create an engine over a fresh in-memory store.
pub fn test_engine() -> BlockingEngine<MemoryStore> {
    BlockingEngine::new(MemoryStore::new())
}

/// A rule input that matches every weekday at every time of day, so tests
/// can exercise activation without depending on the wall clock.
pub fn always_on_rule(name: &str, blocked_apps: &[&str]) -> RuleInput {
    RuleInput {
        name: name.to_string(),
        blocked_apps: blocked_apps.iter().map(|a| a.to_string()).collect(),
        start_time: "00:00".to_string(),
        end_time: "23:59".to_string(),
        days: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
            .iter()
            .map(|d| d.to_string())
            .collect(),
        is_active: true,
        color: "#5865F2".to_string(),
    }
}
