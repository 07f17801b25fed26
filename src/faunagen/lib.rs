//! # Faunagen Architecture
//!
//! Faunagen is a **UI-agnostic page-generation library** with a CLI client.
//! The whole program is one linear pass:
//!
//! ```text
//! fetch records ─▶ discover characteristics ─▶ filter ─▶ render cards
//!                                                            │
//!                                              inject into template ─▶ write page
//! ```
//!
//! ## Layering
//!
//! The binary (`main.rs` + its `args` module) is the only place that knows
//! about stdout/stderr, exit codes, prompts and colors. Everything from the
//! library inward takes regular arguments and returns `Result` values:
//!
//! - [`source`]: where records come from — a local JSON file or one blocking
//!   GET against the lookup API, behind the `RecordSource` trait
//! - [`page`]: the pipeline core, records in / fragment out
//! - [`render`]: record-to-card serialization and key discovery
//! - [`filter`]: the three-way characteristic filter
//! - [`html`]: element wrapping
//! - [`template`]: placeholder injection and template/page file I/O
//! - [`model`]: the `Animal` record type and its invariants
//! - [`config`]: on-disk configuration with defaults
//! - [`error`]: error types
//!
//! ## Testing Strategy
//!
//! The pipeline modules carry thorough unit tests; the binary is covered by
//! `assert_cmd` integration tests running against a temp directory, with the
//! interactive prompts bypassed via flags.

pub mod config;
pub mod error;
pub mod filter;
pub mod html;
pub mod model;
pub mod page;
pub mod render;
pub mod source;
pub mod template;
