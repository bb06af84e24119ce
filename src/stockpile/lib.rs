//! # Stockpile Architecture
//!
//! Stockpile keeps household inventory in **folders**. A folder is either a
//! stock list (what is on the shelf) or a shopping list (what to buy), and at
//! least one of each must always exist. Products are identified by scanning a
//! barcode and asking a product search service for the name and picture.
//!
//! Stockpile is a UI-agnostic library with a CLI client on top:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - Installs the log subscriber                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses folder selectors, builds lookup clients           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, editor.rs, lookup/)          │
//! │  - Folder edit rules and product lookup                     │
//! │  - Returns Rust types, never prints                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; whether anything is shown
//! is up to the subscriber the client installs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`editor`]: Folder edit sessions and their guard rules
//! - [`lookup`]: Barcode product lookup client and background session
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Folder`, `FolderIcon`, `ProductHit`)
//! - [`index`]: Display indexes and folder selectors
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod lookup;
pub mod model;
pub mod store;
