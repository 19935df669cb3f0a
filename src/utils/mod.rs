//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `parser` - Text extraction and deduplication
//! - `token` - Path string normalization

pub mod io;
pub mod parser;
pub mod token;
