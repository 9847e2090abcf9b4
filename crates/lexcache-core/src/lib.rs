//! Shared types and text utilities for word-list spelling dictionaries.
//!
//! Everything in this crate is pure and synchronous; loading, caching and
//! matching live in the `lexcache` crate.
//!
//! - [`case`] -- Case pattern detection (acronyms, generic lowercase words)
//! - [`fold`] -- NFC normalization, case fold and diacritic fold
//! - [`entry`] -- `WordEntry` and the marker syntax of a word-list line

pub mod case;
pub mod entry;
pub mod fold;
