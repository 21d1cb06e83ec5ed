//! Core for pastepouch.
//!
//! Pure types and logic shared by every front end: the user/paste data model,
//! the closed set of data-access operations, the row projector, and the
//! storage trait with its error taxonomy. Nothing in here performs I/O.

pub mod paste;
pub mod projection;
pub mod storage;
