//! FAQ entries and their rephrased variants

pub mod entry;
pub mod links;

pub use entry::{FaqEntry, FaqVersion, RephrasedFaq, RephrasedVersions, has_interlink};
pub use links::RelatedLink;
