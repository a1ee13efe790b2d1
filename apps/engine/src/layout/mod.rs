// Resume Text Layout Engine
// Turns flat resume text into paginated draw operations: header block,
// classified body lines, greedy word wrap, running footer.

pub mod classify;
pub mod document;
pub mod engine;
pub mod font_metrics;
pub mod page;
pub mod wrap;

pub use classify::LineKind;
pub use document::{ClassifiedLine, ResumeDocumentModel};
pub use engine::layout;
pub use font_metrics::{FixedWidthMeasurer, FontWeight, HelveticaMetrics, TextMeasurer};
pub use page::{DrawOp, LayoutStyle, Page, PageGeometry};
