//! Blockwise: the app-blocking core of a digital-wellbeing app.
//!
//! Owns time-window blocking rules, a single focus session, and a bounded
//! log of blocked launch attempts, and answers "is app X blocked right now,
//! and why". Consumed by UI code; exposes no network or CLI surface.
//!
//! The engine is single-threaded and synchronous. Persistence goes through
//! the [`store::KeyValueStore`] trait with whole-collection read/modify/write
//! semantics, so concurrent embeddings should wrap the engine in a mutex.
//!
//! ```
//! use blockwise::engine::BlockingEngine;
//! use blockwise::models::RuleInput;
//! use blockwise::store::MemoryStore;
//!
//! let mut engine = BlockingEngine::new(MemoryStore::new());
//! engine.create_rule(RuleInput {
//!     name: "Evenings".to_string(),
//!     blocked_apps: vec!["com.zhiliaoapp.musically".to_string()],
//!     start_time: "21:00".to_string(),
//!     end_time: "06:00".to_string(),
//!     days: vec!["Mon".to_string(), "Tue".to_string()],
//!     is_active: true,
//!     color: "#FF2D55".to_string(),
//! });
//!
//! let verdict = engine.is_app_blocked("com.zhiliaoapp.musically");
//! println!("blocked: {}", verdict.is_blocked());
//! ```

pub mod catalog;
pub mod constants;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
#[cfg(test)]
mod test_utils;
pub mod validation;

pub use engine::{BlockVerdict, BlockingEngine, ListenerId};
pub use error::AppError;
pub use models::{BlockedAppAttempt, BlockingRule, FocusSession, RuleInput, RuleUpdate};
pub use store::{FileStore, KeyValueStore, MemoryStore};
