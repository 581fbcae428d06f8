//! Read-only content catalog consumed by the folio terminal.
//!
//! The catalog is an ordered list of projects and an ordered list of posts.
//! The terminal never mutates it; commands only look records up, filter by
//! tag, or list a prefix of them.

mod catalog;
mod demo;
mod record;

/// Ordered projects and posts with lookup helpers.
pub use catalog::Catalog;
/// A single project record.
pub use record::Project;
/// A single blog post record.
pub use record::Post;
/// Optional mirrors of a post on external platforms.
pub use record::ExternalLinks;
