//! Transactional services sitting between handlers and repositories.

pub mod category;

pub use category::CategoryService;
