//! Heuristic resume tooling: structured field extraction from raw resume text,
//! and pagination of flat resume text into printable pages.

pub mod config;
pub mod errors;
pub mod extract;
pub mod ingest;
pub mod layout;
pub mod render;

pub use errors::AppError;
pub use extract::{extract_profile, ExtractedProfile};
pub use layout::{layout, Page, PageGeometry};
pub use render::render_pdf;
