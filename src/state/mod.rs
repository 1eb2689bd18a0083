//! Screen state management.
//!
//! State types here are plain data with no I/O so their transitions can be
//! tested directly. Screens own them exclusively.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ ContentState                 │
//! │  loading ──► spinner         │
//! │  error   ──► error text      │
//! │  items   ──► header + list   │
//! └──────────────────────────────┘
//! ```

pub mod content;

pub use content::{ContentState, FetchTicket, RenderBranch};
