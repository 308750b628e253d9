//! Validation, flattening and rendering of finished codepoint sets.
//!
//! An [`EncodedTable`] is the runtime contract of one predicate: a range
//! count `N` and `2N` non-decreasing boundaries `[s0, e0, s1, e1, ...]`,
//! bound to a data symbol and a lookup function name ([`TableBinding`]).
//! [`write`] renders a batch of tables as C++, Rust or JSON.

pub mod binding;
pub mod encoder;
pub mod write;

pub use binding::TableBinding;
pub use encoder::{EncodeOptions, EncodedTable, encode_all};
pub use write::{OutputFormat, TableWriter};
