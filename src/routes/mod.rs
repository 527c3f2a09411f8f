//! Routes Module
//!
//! Router assembly and the shared pagination query type.

pub mod pagination;
pub mod router;

pub use pagination::Pagination;
pub use router::create_router;
