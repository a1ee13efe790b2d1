// Output backends for laid-out pages.

pub mod pdf;

pub use pdf::{render_pdf, tailored_resume_filename};
