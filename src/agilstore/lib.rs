//! # AgilStore Architecture
//!
//! AgilStore is an interactive inventory manager for the terminal. The
//! binary is a thin wrapper; everything below the prompt loop is library
//! code with no terminal assumptions.
//!
//! ## The layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  Session (session.rs, wired by main.rs)                │
//! │  - Menu loop, prompt flows, result display             │
//! │  - Generic over BufRead/Write, never touches stdin     │
//! │    or stdout directly                                  │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Validation (validate.rs)                              │
//! │  - Raw prompt string → typed value, or an ordered      │
//! │    list of per-field messages                          │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Service (service.rs)                                  │
//! │  - add / list / update / delete / search               │
//! │  - Existence checks and search semantics               │
//! └────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                      │
//! │  - Abstract ProductStore trait                         │
//! │  - FileStore (production), InMemoryStore (testing)     │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence model
//!
//! The whole inventory is one JSON array in `data/database.json`. Every
//! operation loads the file fresh and every mutation rewrites it in full;
//! nothing is cached between operations, so the file is always the source
//! of truth. Identifiers only ever grow (max existing id + 1).
//!
//! ## Testing strategy
//!
//! Each seam is swappable: the service runs against `InMemoryStore`, the
//! session runs against byte buffers, and `tests/` drives the real binary
//! with `assert_cmd`.
//!
//! ## Module overview
//!
//! - [`model`]: core data types (`Product`, `NewProduct`, `ProductPatch`)
//! - [`validate`]: validated parsing of operator input
//! - [`store`]: storage abstraction and implementations
//! - [`service`]: domain operations over a store
//! - [`session`]: the interactive menu state machine
//! - [`render`]: table rendering for listings
//! - [`error`]: error types

pub mod error;
pub mod model;
pub mod render;
pub mod service;
pub mod session;
pub mod store;
pub mod validate;
