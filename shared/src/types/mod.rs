//! Type definitions shared between layers

pub mod pagination;

pub use pagination::{Page, Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
