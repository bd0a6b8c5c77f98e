//! Roost Search
//!
//! In-memory hotel catalog and the pure filter/sort pipeline behind the
//! results page. No I/O happens in this crate: the catalog is loaded once
//! (the bundled fixtures or a single fetch through `roost-client`) and every
//! query change recomputes the visible sequence synchronously from that
//! immutable snapshot.

pub mod catalog;
pub mod fixtures;
pub mod pipeline;

pub use catalog::Catalog;
pub use pipeline::apply;
