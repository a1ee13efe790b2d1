//! The layout pass: flat resume text → positioned draw operations on pages.

use tracing::debug;

use crate::layout::classify::{split_title_and_dates, strip_bullet, LineKind};
use crate::layout::document::ResumeDocumentModel;
use crate::layout::font_metrics::{FontWeight, TextMeasurer};
use crate::layout::page::{LayoutStyle, Page, PageBuilder, PageGeometry};
use crate::layout::wrap::wrap_text;

const BULLET_GLYPH: &str = "•";
const HEADER_NAME_GAP: f32 = 6.0;
const HEADER_SUBTITLE_GAP: f32 = 4.0;
const HEADER_CONTACT_GAP: f32 = 10.0;
const HEADER_NO_CONTACT_GAP: f32 = 8.0;
const HEADER_RULE_THICKNESS: f32 = 0.5;
const HEADER_RULE_GAP: f32 = 16.0;
const SECTION_TITLE_GAP: f32 = 3.0;
const ROLE_TITLE_GAP: f32 = 4.0;
const PARAGRAPH_GAP: f32 = 2.0;

/// Lays out `flat_text` onto pages.
///
/// Blank or whitespace-only input produces no pages. Identical inputs always
/// produce identical output.
pub fn layout(
    flat_text: &str,
    geometry: &PageGeometry,
    style: &LayoutStyle,
    measurer: &dyn TextMeasurer,
) -> Vec<Page> {
    if flat_text.trim().is_empty() {
        return Vec::new();
    }

    let doc = ResumeDocumentModel::parse(flat_text);
    let mut pass = LayoutPass {
        builder: PageBuilder::new(geometry, style, measurer),
        geometry,
        style,
        measurer,
    };

    pass.header(&doc);
    for line in &doc.body_lines {
        match line.kind {
            LineKind::Blank => pass.blank(),
            LineKind::SectionTitle => pass.section_title(&line.text),
            LineKind::Bullet => pass.bullet(&line.text),
            LineKind::TitleWithDates => pass.title_with_dates(&line.text),
            LineKind::Paragraph => pass.paragraph(&line.text),
        }
    }

    let pages = pass.builder.finish();
    debug!(
        body_lines = doc.body_lines.len(),
        pages = pages.len(),
        "layout complete"
    );
    pages
}

struct LayoutPass<'a> {
    builder: PageBuilder<'a>,
    geometry: &'a PageGeometry,
    style: &'a LayoutStyle,
    measurer: &'a dyn TextMeasurer,
}

impl LayoutPass<'_> {
    fn left(&self) -> f32 {
        self.geometry.margin
    }

    fn right(&self) -> f32 {
        self.geometry.width - self.geometry.margin
    }

    fn header(&mut self, doc: &ResumeDocumentModel) {
        let s = self.style;
        if !doc.header_name.is_empty() {
            self.builder
                .text(&doc.header_name, self.left(), s.name_size, FontWeight::Bold);
            self.builder.advance(s.name_size + HEADER_NAME_GAP);
        }
        if !doc.header_subtitle.is_empty() {
            self.builder.text(
                &doc.header_subtitle,
                self.left(),
                s.subtitle_size,
                FontWeight::Regular,
            );
            self.builder.advance(s.subtitle_size + HEADER_SUBTITLE_GAP);
        }
        if !doc.header_contact.is_empty() {
            self.builder.text(
                &doc.header_contact,
                self.left(),
                s.contact_size,
                FontWeight::Regular,
            );
            self.builder.advance(s.contact_size + HEADER_CONTACT_GAP);
        } else {
            self.builder.advance(HEADER_NO_CONTACT_GAP);
        }
        self.builder.rule(HEADER_RULE_THICKNESS);
        self.builder.advance(HEADER_RULE_GAP);
    }

    fn blank(&mut self) {
        self.builder.advance(self.style.line_height() * 0.6);
    }

    fn section_title(&mut self, line: &str) {
        let s = self.style;
        self.builder.ensure_space(2);
        self.builder.advance(s.line_height() * 0.4);
        let wrapped = wrap_text(
            line,
            s.section_title_size,
            FontWeight::Bold,
            self.geometry.text_width(),
            self.measurer,
        );
        for part in &wrapped {
            self.builder.ensure_space(1);
            self.builder
                .text(part, self.left(), s.section_title_size, FontWeight::Bold);
            self.builder.advance(s.section_title_size + SECTION_TITLE_GAP);
        }
        self.builder.advance(s.line_height() * 0.3);
    }

    fn bullet(&mut self, line: &str) {
        let s = self.style;
        self.builder.ensure_space(2);
        let wrapped = wrap_text(
            strip_bullet(line),
            s.body_size,
            FontWeight::Regular,
            self.geometry.text_width() - s.text_indent,
            self.measurer,
        );
        let text_x = self.left() + s.text_indent;

        // The glyph and first line must land on the same page.
        self.builder.ensure_space(wrapped.len().max(1) + 1);
        self.builder.text(
            BULLET_GLYPH,
            self.left() + s.bullet_indent,
            s.body_size,
            FontWeight::Regular,
        );
        let mut parts = wrapped.iter();
        if let Some(first) = parts.next() {
            self.builder
                .text(first, text_x, s.body_size, FontWeight::Regular);
        }
        self.builder.advance(s.line_height());

        for part in parts {
            self.builder.ensure_space(1);
            self.builder
                .text(part, text_x, s.body_size, FontWeight::Regular);
            self.builder.advance(s.line_height());
        }
    }

    fn title_with_dates(&mut self, line: &str) {
        let s = self.style;
        self.builder.ensure_space(2);
        let (title, dates) = split_title_and_dates(line);
        self.builder.ensure_space(1);
        self.builder
            .text(&title, self.left(), s.role_title_size, FontWeight::Bold);
        if !dates.is_empty() {
            self.builder
                .text_right_aligned(&dates, self.right(), s.dates_size, FontWeight::Italic);
        }
        self.builder.advance(s.role_title_size + ROLE_TITLE_GAP);
    }

    fn paragraph(&mut self, line: &str) {
        let s = self.style;
        self.builder.ensure_space(2);
        let wrapped = wrap_text(
            line,
            s.body_size,
            FontWeight::Regular,
            self.geometry.text_width(),
            self.measurer,
        );
        for part in &wrapped {
            self.builder.ensure_space(1);
            self.builder
                .text(part, self.left(), s.body_size, FontWeight::Regular);
            self.builder.advance(s.line_height());
        }
        self.builder.advance(PARAGRAPH_GAP);
    }
}
