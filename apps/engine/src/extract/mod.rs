// Resume Structure Extractor
// Heuristic parsing of raw resume / job-description text into structured fields.
// Pure functions only; nothing in this module performs I/O or returns errors.

pub mod fit;
pub mod keywords;
pub mod profile;
pub mod sections;
pub mod skills;
pub mod summary;
pub mod text;

pub use fit::{FitInput, FitReport, FitScorer, KeywordFitScorer};
pub use keywords::{extract_keywords, KeywordEntry, DEFAULT_KEYWORD_LIMIT};
pub use profile::{extract_profile, extract_profile_with, ExtractedProfile};
pub use sections::{extract_sections, ResumeSections};
pub use skills::{SkillDictionary, MAX_SKILLS};
pub use summary::{quick_summary, QuickSummary};
