//! Static font-metric tables for the PDF base-14 Helvetica family.
//!
//! Widths come from the Adobe AFM files and are stored in 1/1000 em, the unit
//! PDF uses for glyph advances. Helvetica-Oblique shares the upright widths.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font weight + measurer capability
// ────────────────────────────────────────────────────────────────────────────

/// The three faces the layout engine draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Regular,
    Bold,
    Italic,
}

/// Measures rendered text width in points.
///
/// Injected into the layout pass so tests can substitute a deterministic
/// fake and renderers can bring their own font program.
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, size: f32, weight: FontWeight) -> f32;
}

// ────────────────────────────────────────────────────────────────────────────
// Helvetica
// ────────────────────────────────────────────────────────────────────────────

/// Maps a character onto the WinAnsi repertoire the built-in PDF fonts
/// encode. WinAnsi characters pass through; bullet variants become `•`,
/// hyphen and prime variants their ASCII form, anything else `?`.
pub fn to_win_ansi(c: char) -> char {
    match c {
        '\t' => ' ',
        c if (c as u32) < 0x20 || c == '\u{7f}' => ' ',
        c if (c as u32) < 0x7f || (0xa0..=0xff).contains(&(c as u32)) => c,
        '€' | '‚' | 'ƒ' | '„' | '…' | '†' | '‡' | 'ˆ' | '‰' | 'Š' | '‹' | 'Œ' | 'Ž' | '‘'
        | '’' | '“' | '”' | '•' | '–' | '—' | '˜' | '™' | 'š' | '›' | 'œ' | 'ž' | 'Ÿ' => c,
        '●' | '▪' | '‣' | '\u{2219}' => '•',
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2212}' => '-',
        '\u{2032}' => '\'',
        '\u{2033}' => '"',
        _ => '?',
    }
}

/// Applies [`to_win_ansi`] to every character of `text`.
pub fn sanitize(text: &str) -> String {
    text.chars().map(to_win_ansi).collect()
}

/// Accented Latin-1 letters share the advance of their base letter.
fn accent_base(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        'Š' => 'S',
        'Ž' => 'Z',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'š' => 's',
        'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

/// Static character-width table for one Helvetica face.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    widths: [u16; 95],
    /// Non-ASCII WinAnsi glyphs with their own advance.
    extras: &'static [(char, u16)],
    /// Fallback width for the remaining Latin-1 characters.
    pub average_char_width: u16,
}

impl FontMetricTable {
    /// Width of `c` as the renderer draws it, i.e. after [`to_win_ansi`].
    fn char_width(&self, c: char) -> u16 {
        let c = to_win_ansi(c);
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.widths[code - 32];
        }
        if let Some((_, w)) = self.extras.iter().find(|(glyph, _)| *glyph == c) {
            return *w;
        }
        match accent_base(c) {
            Some(base) => self.widths[base as usize - 32],
            None => self.average_char_width,
        }
    }

    /// Measures the width of a string in 1/1000 em.
    pub fn measure_units(&self, s: &str) -> u32 {
        s.chars().map(|c| u32::from(self.char_width(c))).sum()
    }
}

/// Helvetica (also used for Helvetica-Oblique).
static HELVETICA: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    #[rustfmt::skip]
    extras: &[
        ('•', 350), ('–', 556), ('—', 1000), ('‘', 222), ('’', 222), ('‚', 222),
        ('“', 333), ('”', 333), ('„', 333), ('…', 1000), ('€', 556), ('·', 278),
        ('\u{a0}', 278), ('™', 1000), ('†', 556), ('‡', 556), ('‰', 1000), ('‹', 333),
        ('›', 333), ('©', 737), ('®', 737), ('°', 400), ('±', 584), ('×', 584),
        ('÷', 584), ('§', 556), ('¶', 537), ('«', 556), ('»', 556), ('¡', 333),
        ('¿', 611), ('ì', 278), ('í', 278), ('î', 278), ('ï', 278),
    ],
    average_char_width: 513,
};

/// Helvetica-Bold.
static HELVETICA_BOLD: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    #[rustfmt::skip]
    extras: &[
        ('•', 350), ('–', 556), ('—', 1000), ('‘', 278), ('’', 278), ('‚', 278),
        ('“', 500), ('”', 500), ('„', 500), ('…', 1000), ('€', 556), ('·', 278),
        ('\u{a0}', 278), ('™', 1000), ('†', 556), ('‡', 556), ('‰', 1000), ('‹', 333),
        ('›', 333), ('©', 737), ('®', 737), ('°', 400), ('±', 584), ('×', 584),
        ('÷', 584), ('§', 556), ('¶', 556), ('«', 556), ('»', 556), ('¡', 333),
        ('¿', 611),
    ],
    average_char_width: 556,
};

/// Returns the static metric table for a given weight.
pub fn get_metrics(weight: FontWeight) -> &'static FontMetricTable {
    match weight {
        FontWeight::Regular | FontWeight::Italic => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    }
}

/// Measurer backed by the Helvetica tables; matches what the PDF renderer
/// draws with.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl TextMeasurer for HelveticaMetrics {
    fn measure(&self, text: &str, size: f32, weight: FontWeight) -> f32 {
        get_metrics(weight).measure_units(text) as f32 * size / 1000.0
    }
}

/// Every character advances by `advance_em × size`, whatever the weight.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthMeasurer {
    pub advance_em: f32,
}

impl Default for FixedWidthMeasurer {
    fn default() -> Self {
        Self { advance_em: 0.5 }
    }
}

impl TextMeasurer for FixedWidthMeasurer {
    fn measure(&self, text: &str, size: f32, _weight: FontWeight) -> f32 {
        text.chars().count() as f32 * self.advance_em * size
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
