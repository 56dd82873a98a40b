//! idea のドメイン型

pub mod capture_report;
pub mod idea_record;
pub mod idea_text;
pub mod related_item;
pub mod summary;

pub use capture_report::CaptureReport;
pub use idea_record::{DocumentId, IdeaRecord};
pub use idea_text::IdeaText;
pub use related_item::RelatedItem;
pub use summary::{Summary, SummaryOutcome};
