//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that take
//! an open connection (normally `&mut *tx`) as the first argument, so the
//! caller decides the transaction boundary.

pub mod category_repo;

pub use category_repo::CategoryRepo;
