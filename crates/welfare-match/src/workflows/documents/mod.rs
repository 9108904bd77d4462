//! Structured field extraction from recognized document text.
//!
//! Image-to-text recognition happens outside this crate; callers hand over the raw text.

mod extraction;
mod router;

pub use extraction::{extract_fields, ExtractedDocument};
pub use router::document_router;
