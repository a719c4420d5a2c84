//! Static Helvetica metrics and the A4 page model used by the layout engine.
//!
//! Widths are the standard Helvetica AFM advance widths in 1/1000 em.
//! The table covers ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

/// Millimetres per PDF point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Converts a font size in points to millimetres.
pub fn pt_to_mm(pt: f32) -> f32 {
    pt * MM_PER_PT
}

/// True if `c` has a code in the WinAnsi font encoding used for page text.
/// Printable ASCII and the Latin-1 upper half map straight through.
pub fn is_winansi(c: char) -> bool {
    matches!(c as u32, 0x20..=0x7E | 0xA0..=0xFF)
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Geometry of the printed puzzle page. All lengths in millimetres,
/// measured from the top-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Top, left and right page margin.
    pub margin_mm: f32,
    /// Bottom margin; a line whose bottom passes `page_height - bottom_margin` overflows.
    pub bottom_margin_mm: f32,
    /// Horizontal padding inside a left-aligned text cell.
    pub cell_padding_mm: f32,
    /// Edge length of one square grid cell.
    pub grid_cell_mm: f32,
    pub grid_font_pt: f32,
    /// Blank cell-height rows between the grid and the word list.
    pub spacer_rows: u8,
    pub list_font_pt: f32,
    pub list_line_height_mm: f32,
    /// Left edge of the first word-list column.
    pub list_left_mm: f32,
    /// Origin and width used to place continuation columns: `origin + index * width`.
    pub column_origin_mm: f32,
    pub column_width_mm: f32,
}

impl PageConfig {
    /// Y position past which a line no longer fits on the page.
    pub fn break_trigger_mm(&self) -> f32 {
        self.page_height_mm - self.bottom_margin_mm
    }
}

/// Portrait A4 with 10 mm margins, 10 mm grid cells and a 14 mm word-list line.
pub fn a4_page_config() -> PageConfig {
    PageConfig {
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        margin_mm: 10.0,
        bottom_margin_mm: 20.0,
        cell_padding_mm: 1.0,
        grid_cell_mm: 10.0,
        grid_font_pt: 20.0,
        spacer_rows: 2,
        list_font_pt: 14.0,
        list_line_height_mm: 14.0,
        list_left_mm: 30.0,
        column_origin_mm: 10.0,
        column_width_mm: 100.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a base-14 PDF font.
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
    /// PostScript name written into the PDF font dictionary.
    pub base_font: &'static str,
    widths: [u16; 95],
    /// Fallback width for characters outside the table.
    pub average_char_width: u16,
}

impl FontMetricTable {
    /// Advance width of `c` in 1/1000 em.
    pub fn char_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Rendered width of `s` in millimetres at `font_size_pt`.
    pub fn measure_mm(&self, s: &str, font_size_pt: f32) -> f32 {
        let units: u32 = s.chars().map(|c| u32::from(self.char_width(c))).sum();
        units as f32 / 1000.0 * pt_to_mm(font_size_pt)
    }
}

pub static HELVETICA: FontMetricTable = FontMetricTable {
    base_font: "Helvetica",
    widths: [
        // sp    !    "    #    $    %    &    '
        278, 278, 355, 556, 556, 889, 667, 191,
        // (     )    *    +    ,    -    .    /
        333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :     ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A-M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N-Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [     \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a-m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n-z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {     |    }    ~
        334, 260, 334, 584,
    ],
    average_char_width: 556,
};
