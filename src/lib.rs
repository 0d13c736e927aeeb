//! Value Hierarchy - catalogue, group and export personal value answers
//!
//! A single user answers three questions in each of eight fixed
//! life-categories, clusters the 24 answers into labelled value groups,
//! writes a reflection per group, and exports the result.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     Caller (CLI / UI)                      │
//! │       load ─▶ mutate ─▶ save              export(data)     │
//! └───────┬────────────────┬─────────────────────┬─────────────┘
//!         │                │                     │
//! ┌───────▼───────┐ ┌──────▼──────────────┐ ┌────▼────────────┐
//! │    storage    │ │       engine        │ │     export      │
//! │ UserDataStore │ │ update_answer       │ │ JSON            │
//! │ KeyValueStore │ │ create/remove_group │ │ text report     │
//! └───────┬───────┘ │ set_insight         │ └─────────────────┘
//!         │         └─────────────────────┘
//! ┌───────▼──────────────────────┐
//! │  MemoryStore  │  FileStore   │
//! └──────────────────────────────┘
//! ```
//!
//! Mutations are copy-on-write: each returns a new `UserData` and leaves
//! the input untouched.
//!
//! ## Modules
//!
//! - [`schema`]: entities, category catalogue, colour palette
//! - [`engine`]: mutations and read-side derivations
//! - [`storage`]: persistence port, backends, gateway
//! - [`export`]: JSON and text encodings
//! - [`sample`]: demo data
//! - [`config`]: configuration management

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod sample;
pub mod schema;
pub mod storage;

pub use config::ValueHierarchyConfig;
pub use error::{Error, Result};
pub use schema::{Answer, Category, Group, Insight, UserData};
pub use storage::{KeyValueStore, UserDataStore};
