// PDF assembly: laid-out pages → PDF bytes using the base-14 Helvetica fonts.
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};
use tracing::debug;

use crate::errors::AppError;
use crate::layout::font_metrics::sanitize;
use crate::layout::{DrawOp, FontWeight, Page, PageGeometry};

const MM_PER_PT: f32 = 25.4 / 72.0;

fn mm(points: f32) -> Mm {
    Mm(points * MM_PER_PT)
}

fn render_err(e: impl std::fmt::Display) -> AppError {
    AppError::Render(e.to_string())
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, AppError> {
        Ok(Self {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(render_err)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(render_err)?,
            italic: doc
                .add_builtin_font(BuiltinFont::HelveticaOblique)
                .map_err(render_err)?,
        })
    }

    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
            FontWeight::Italic => &self.italic,
        }
    }
}

/// Renders `pages` into a PDF document and returns its bytes.
///
/// Errors with `Validation` when `pages` is empty: a PDF needs at least one page.
pub fn render_pdf(pages: &[Page], geometry: &PageGeometry, title: &str) -> Result<Vec<u8>, AppError> {
    let Some((first, rest)) = pages.split_first() else {
        return Err(AppError::Validation(
            "nothing to render: layout produced no pages".to_string(),
        ));
    };

    let (doc, page1, layer1) = PdfDocument::new(
        title,
        mm(geometry.width),
        mm(geometry.height),
        "Layer 1",
    );
    let fonts = Fonts::load(&doc)?;

    draw_page(&doc.get_page(page1).get_layer(layer1), first, &fonts);
    for page in rest {
        let (page_idx, layer_idx) =
            doc.add_page(mm(geometry.width), mm(geometry.height), "Layer 1");
        draw_page(&doc.get_page(page_idx).get_layer(layer_idx), page, &fonts);
    }

    let bytes = doc.save_to_bytes().map_err(render_err)?;
    debug!(pages = pages.len(), bytes = bytes.len(), "pdf rendered");
    Ok(bytes)
}

fn draw_page(layer: &PdfLayerReference, page: &Page, fonts: &Fonts) {
    for op in &page.ops {
        match op {
            DrawOp::Text {
                text,
                x,
                y,
                size,
                font,
            } => {
                layer.use_text(sanitize(text), *size, mm(*x), mm(*y), fonts.get(*font));
            }
            DrawOp::Rule {
                x1,
                y1,
                x2,
                y2,
                thickness,
            } => {
                layer.set_outline_thickness(*thickness);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(mm(*x1), mm(*y1)), false),
                        (Point::new(mm(*x2), mm(*y2)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}

/// `Jane Q. Doe` → `Jane_Q_Doe_Tailored_Resume.pdf`; blank names fall back to
/// `Tailored_Resume.pdf`.
pub fn tailored_resume_filename(name: &str) -> String {
    let stem = name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        "Tailored_Resume.pdf".to_string()
    } else {
        format!("{stem}_Tailored_Resume.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout, HelveticaMetrics, LayoutStyle, TextMeasurer};

    fn sample_pages() -> Vec<Page> {
        layout(
            "Jane Doe\nSenior Engineer\njane@example.com\n\nEXPERIENCE\n\
             Senior Engineer | Acme    Jan 2020 - Present\n• Built the “core” API — fast\n",
            &PageGeometry::default(),
            &LayoutStyle::default(),
            &HelveticaMetrics,
        )
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_pdf(&sample_pages(), &PageGeometry::default(), "Resume")
            .expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"), "output must be a PDF document");
    }

    #[test]
    fn test_render_multiple_pages() {
        let body = (0..150)
            .map(|i| format!("line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let pages = layout(
            &format!("Jane Doe\nEngineer\ncontact\n{body}"),
            &PageGeometry::default(),
            &LayoutStyle::default(),
            &HelveticaMetrics,
        );
        assert!(pages.len() > 1);
        let bytes = render_pdf(&pages, &PageGeometry::default(), "Resume")
            .expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_zero_pages_is_validation_error() {
        let err = render_pdf(&[], &PageGeometry::default(), "Resume").unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_drawn_text_keeps_win_ansi_typography() {
        assert_eq!(sanitize("“core” – it’s"), "“core” – it’s");
        assert_eq!(sanitize("•"), "•");
        assert_eq!(sanitize("●"), "•");
        assert_eq!(sanitize("café"), "café");
        assert_eq!(sanitize("日"), "?");
    }

    #[test]
    fn test_right_aligned_dates_end_at_margin_as_drawn() {
        let text = "Jane Doe\nSenior Engineer\njane@example.com\nSenior Engineer    Jan 2020 – Present\n";
        let geometry = PageGeometry::default();
        let pages = layout(text, &geometry, &LayoutStyle::default(), &HelveticaMetrics);
        let (dates, x, size) = pages[0]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text {
                    text, x, size, font, ..
                } if *font == FontWeight::Italic => Some((text.clone(), *x, *size)),
                _ => None,
            })
            .expect("dates drawn in italic");
        assert_eq!(dates, "Jan 2020 – Present");
        assert_eq!(sanitize(&dates), dates, "dates survive sanitising unchanged");
        let drawn_width = HelveticaMetrics.measure(&sanitize(&dates), size, FontWeight::Italic);
        let right_edge = geometry.width - geometry.margin;
        assert!(
            (x + drawn_width - right_edge).abs() < 1e-3,
            "drawn dates end at {} instead of {right_edge}",
            x + drawn_width
        );
    }

    #[test]
    fn test_filename_convention() {
        assert_eq!(
            tailored_resume_filename("Jane Q. Doe"),
            "Jane_Q_Doe_Tailored_Resume.pdf"
        );
        assert_eq!(tailored_resume_filename("  "), "Tailored_Resume.pdf");
        assert_eq!(
            tailored_resume_filename("Mary-Jane  Watson"),
            "Mary-Jane_Watson_Tailored_Resume.pdf"
        );
    }

    #[test]
    fn test_write_to_temp_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(tailored_resume_filename("Jane Doe"));
        let bytes = render_pdf(&sample_pages(), &PageGeometry::default(), "Resume")
            .expect("render should succeed");
        std::fs::write(&path, &bytes).expect("write pdf");
        let read_back = std::fs::read(&path).expect("read pdf");
        assert_eq!(read_back.len(), bytes.len());
    }
}
