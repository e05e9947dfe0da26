//! Docsim canonical text layer.
//!
//! This crate normalizes document text into a deterministic, comparable form
//! and maps words back to their byte offsets in the original source. The
//! fingerprinting stages work only over canonical words; the offsets exist so
//! match spans can be reported against the text the author actually wrote.
//!
//! ## What we do
//!
//! - Lowercasing and punctuation-to-space mapping (apostrophes inside
//!   contractions survive, stray apostrophes do not)
//! - Whitespace collapsing to single spaces
//! - Word splitting over the normalized form
//! - An independent word-boundary scan over the *original* text that yields
//!   [`NormalizedWord`] entries with source byte offsets
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence, no failure states: empty
//! input yields empty output. Same text in, same words out, on any machine.

mod normalize;
mod word;

pub use crate::normalize::{normalize, split_words};
pub use crate::word::{word_positions, NormalizedWord};
