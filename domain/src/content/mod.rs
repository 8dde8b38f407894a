//! Content sources
//!
//! Where the body text for FAQ generation comes from: a CMS page picked from
//! a collection, or text pasted by the operator.

pub mod collection;
pub mod source;

pub use collection::{category_for_collection, expand_collection, is_collection_group};
pub use source::{CmsPage, ContentSource, PageDetail, ResolvedContent, require_content};
