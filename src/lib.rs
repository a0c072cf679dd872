//! Decodes git loose objects: the zlib-compressed files that hold a single
//! blob, tree, or commit in a repository's `objects` directory.
//!
//! The pipeline runs in stages. Raw file bytes are inflated
//! ([`object::inflate`]), split into header and content ([`object::header`]),
//! decoded according to the object's kind ([`object::Content`]), and finally
//! rendered as text ([`report::Report`]). The [`on_disk`] module locates
//! candidate object files within a directory tree and feeds them through the
//! pipeline.

pub mod object;
pub mod on_disk;
pub mod report;
