//! Page geometry, drawing style, draw operations and the page cursor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::layout::font_metrics::{FontWeight, TextMeasurer};

// ────────────────────────────────────────────────────────────────────────────
// Geometry + style
// ────────────────────────────────────────────────────────────────────────────

/// Page size and uniform margin, in points. Defaults to US Letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 50.0,
        }
    }
}

impl PageGeometry {
    /// Usable width between the side margins.
    pub fn text_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Rejects geometry that leaves no room for text. The band between the
    /// top margin and the footer reserve must hold at least two body lines.
    pub fn validate(&self, style: &LayoutStyle) -> Result<(), AppError> {
        if !(self.width.is_finite() && self.height.is_finite() && self.margin.is_finite()) {
            return Err(AppError::Validation(
                "page dimensions must be finite numbers".to_string(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 || self.margin < 0.0 {
            return Err(AppError::Validation(format!(
                "page {}x{} with margin {} is not a valid size",
                self.width, self.height, self.margin
            )));
        }
        if self.text_width() <= 0.0 || self.height <= 2.0 * self.margin {
            return Err(AppError::Validation(format!(
                "margin {} leaves no printable area on a {}x{} page",
                self.margin, self.width, self.height
            )));
        }
        let body_band = self.height - 2.0 * self.margin - style.footer_reserve;
        if body_band < 2.0 * style.line_height() {
            return Err(AppError::Validation(format!(
                "a {}pt page with margin {} and footer reserve {} leaves {body_band}pt for body text, \
                 less than two {}pt lines",
                self.height,
                self.margin,
                style.footer_reserve,
                style.line_height()
            )));
        }
        Ok(())
    }
}

/// Type sizes and spacing used by the layout pass, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutStyle {
    pub body_size: f32,
    pub line_gap: f32,
    pub name_size: f32,
    pub subtitle_size: f32,
    pub contact_size: f32,
    pub section_title_size: f32,
    pub role_title_size: f32,
    pub dates_size: f32,
    pub bullet_indent: f32,
    pub text_indent: f32,
    /// Band above the bottom margin that body text never enters.
    pub footer_reserve: f32,
    pub footer_baseline: f32,
    /// Left-hand footer text; empty disables it.
    pub brand: String,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            body_size: 10.5,
            line_gap: 4.0,
            name_size: 20.0,
            subtitle_size: 11.5,
            contact_size: 9.5,
            section_title_size: 11.5,
            role_title_size: 11.0,
            dates_size: 9.5,
            bullet_indent: 12.0,
            text_indent: 20.0,
            footer_reserve: 30.0,
            footer_baseline: 30.0,
            brand: "HirePath.ai".to_string(),
        }
    }
}

impl LayoutStyle {
    /// Baseline-to-baseline distance for body text.
    pub fn line_height(&self) -> f32 {
        self.body_size + self.line_gap
    }

    pub fn footer_size(&self) -> f32 {
        self.body_size - 1.5
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// One drawing instruction. Coordinates are PDF user space: origin at the
/// bottom-left, `y` is the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        font: FontWeight,
    },
    Rule {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
    },
}

/// A finished page. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub index: u32,
    pub ops: Vec<DrawOp>,
}

impl Page {
    fn new(index: u32) -> Self {
        Self {
            index,
            ops: Vec::new(),
        }
    }

    /// Text of every `Text` op, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cursor
// ────────────────────────────────────────────────────────────────────────────

/// Owns the vertical cursor and the page sequence for one layout pass.
///
/// Invariant: no body line is placed below `margin + footer_reserve`; callers
/// reserve space with `ensure_space` before drawing.
pub struct PageBuilder<'a> {
    geometry: &'a PageGeometry,
    style: &'a LayoutStyle,
    measurer: &'a dyn TextMeasurer,
    finished: Vec<Page>,
    current: Page,
    y: f32,
}

impl<'a> PageBuilder<'a> {
    pub fn new(
        geometry: &'a PageGeometry,
        style: &'a LayoutStyle,
        measurer: &'a dyn TextMeasurer,
    ) -> Self {
        Self {
            geometry,
            style,
            measurer,
            finished: Vec::new(),
            current: Page::new(1),
            y: geometry.height - geometry.margin,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn page_index(&self) -> u32 {
        self.current.index
    }

    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Starts a new page unless `lines` body lines still fit above the footer band.
    pub fn ensure_space(&mut self, lines: usize) {
        // A fresh page cannot gain space by breaking.
        if self.y >= self.geometry.height - self.geometry.margin {
            return;
        }
        let needed = lines as f32 * self.style.line_height();
        if self.y - needed < self.geometry.margin + self.style.footer_reserve {
            self.break_page();
        }
    }

    /// Draws `text` on the current baseline.
    pub fn text(&mut self, text: &str, x: f32, size: f32, font: FontWeight) {
        self.current.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y: self.y,
            size,
            font,
        });
    }

    /// Draws `text` so it ends at `right`.
    pub fn text_right_aligned(&mut self, text: &str, right: f32, size: f32, font: FontWeight) {
        let width = self.measurer.measure(text, size, font);
        self.text(text, right - width, size, font);
    }

    /// Horizontal rule across the text width at the current baseline.
    pub fn rule(&mut self, thickness: f32) {
        self.current.ops.push(DrawOp::Rule {
            x1: self.geometry.margin,
            y1: self.y,
            x2: self.geometry.width - self.geometry.margin,
            y2: self.y,
            thickness,
        });
    }

    fn draw_footer(&mut self) {
        let size = self.style.footer_size();
        let baseline = self.style.footer_baseline;
        let label = format!("Page {}", self.current.index);
        let width = self.measurer.measure(&label, size, FontWeight::Regular);
        self.current.ops.push(DrawOp::Text {
            text: label,
            x: self.geometry.width - self.geometry.margin - width,
            y: baseline,
            size,
            font: FontWeight::Regular,
        });
        if !self.style.brand.is_empty() {
            self.current.ops.push(DrawOp::Text {
                text: self.style.brand.clone(),
                x: self.geometry.margin,
                y: baseline,
                size,
                font: FontWeight::Regular,
            });
        }
    }

    fn break_page(&mut self) {
        self.draw_footer();
        let next = Page::new(self.current.index + 1);
        let done = std::mem::replace(&mut self.current, next);
        debug!(page = done.index, ops = done.ops.len(), "page finished");
        self.finished.push(done);
        self.y = self.geometry.height - self.geometry.margin;
    }

    /// Draws the last footer and returns every page.
    pub fn finish(mut self) -> Vec<Page> {
        self.draw_footer();
        self.finished.push(self.current);
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::FixedWidthMeasurer;

    #[test]
    fn test_default_geometry_is_letter() {
        let g = PageGeometry::default();
        assert_eq!((g.width, g.height, g.margin), (612.0, 792.0, 50.0));
        assert_eq!(g.text_width(), 512.0);
        assert!(g.validate(&LayoutStyle::default()).is_ok());
    }

    #[test]
    fn test_geometry_validation() {
        let style = LayoutStyle::default();
        let too_wide_margin = PageGeometry {
            width: 100.0,
            height: 100.0,
            margin: 60.0,
        };
        assert!(too_wide_margin.validate(&style).is_err());
        let negative = PageGeometry {
            width: -1.0,
            ..PageGeometry::default()
        };
        assert!(negative.validate(&style).is_err());
        let nan = PageGeometry {
            margin: f32::NAN,
            ..PageGeometry::default()
        };
        assert!(nan.validate(&style).is_err());
    }

    #[test]
    fn test_geometry_needs_two_body_lines() {
        let style = LayoutStyle::default();
        // 120 - 2 * 50 - 30 = -10
        let short = PageGeometry {
            height: 120.0,
            ..PageGeometry::default()
        };
        let err = short.validate(&style).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        // 160 - 2 * 50 - 30 = 30 >= 2 * 14.5
        let just_enough = PageGeometry {
            height: 160.0,
            ..PageGeometry::default()
        };
        assert!(just_enough.validate(&style).is_ok());
    }

    #[test]
    fn test_fresh_page_never_breaks() {
        let g = PageGeometry {
            height: 120.0,
            ..PageGeometry::default()
        };
        let style = LayoutStyle::default();
        let m = FixedWidthMeasurer::default();
        let mut b = PageBuilder::new(&g, &style, &m);

        b.ensure_space(2);
        assert_eq!(b.page_index(), 1, "nothing to gain from breaking page 1");

        b.text("one", 50.0, 10.5, FontWeight::Regular);
        b.advance(style.line_height());
        b.ensure_space(2);
        assert_eq!(b.page_index(), 2);
        b.ensure_space(2);
        assert_eq!(b.page_index(), 2, "the new page is still fresh");

        let pages = b.finish();
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_line_height() {
        let style = LayoutStyle::default();
        assert_eq!(style.line_height(), 14.5);
        assert_eq!(style.footer_size(), 9.0);
    }

    #[test]
    fn test_ensure_space_breaks_page() {
        let g = PageGeometry::default();
        let style = LayoutStyle::default();
        let m = FixedWidthMeasurer::default();
        let mut b = PageBuilder::new(&g, &style, &m);
        assert_eq!(b.y(), 742.0);

        // 742 - 2 * 14.5 = 713 >= 80
        b.ensure_space(2);
        assert_eq!(b.page_index(), 1);

        b.advance(742.0 - 100.0);
        // 100 - 2 * 14.5 = 71 < 80
        b.ensure_space(2);
        assert_eq!(b.page_index(), 2);
        assert_eq!(b.y(), 742.0);
    }

    #[test]
    fn test_finish_draws_footers() {
        let g = PageGeometry::default();
        let style = LayoutStyle::default();
        let m = FixedWidthMeasurer::default();
        let mut b = PageBuilder::new(&g, &style, &m);
        b.text("hello", 50.0, 10.5, FontWeight::Regular);
        b.advance(700.0);
        b.ensure_space(1);
        let pages = b.finish();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].index, 1);
        assert_eq!(pages[1].index, 2);
        assert!(pages[0].texts().any(|t| t == "Page 1"));
        assert!(pages[1].texts().any(|t| t == "Page 2"));
        assert!(pages[1].texts().any(|t| t == "HirePath.ai"));
    }

    #[test]
    fn test_footer_right_aligned() {
        let g = PageGeometry::default();
        let style = LayoutStyle::default();
        let m = FixedWidthMeasurer { advance_em: 0.5 };
        let pages = PageBuilder::new(&g, &style, &m).finish();
        // "Page 1" = 6 chars × 0.5 × 9pt = 27pt
        let footer = pages[0]
            .ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text == "Page 1"));
        match footer {
            Some(DrawOp::Text { x, y, .. }) => {
                assert_eq!(*x, 612.0 - 50.0 - 27.0);
                assert_eq!(*y, 30.0);
            }
            other => panic!("expected footer text, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_brand_skipped() {
        let g = PageGeometry::default();
        let style = LayoutStyle {
            brand: String::new(),
            ..LayoutStyle::default()
        };
        let m = FixedWidthMeasurer::default();
        let pages = PageBuilder::new(&g, &style, &m).finish();
        assert_eq!(pages[0].texts().collect::<Vec<_>>(), vec!["Page 1"]);
    }
}
