//! PDF rendering for exported fitness plans
//!
//! Rendering happens in two steps. [`paginate`] lays an [`ExportDocument`]
//! out onto A4 pages as positioned text runs, then [`render`] draws those
//! runs with printpdf's built-in Helvetica fonts.
//!
//! Built-in fonts only cover WinAnsi, so text is transliterated to Latin-1
//! before layout.

use crate::services::export::{Block, ExportDocument};
use anyhow::{anyhow, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
/// Content never goes below this line; the footer lives underneath
const BOTTOM_LIMIT_MM: f32 = 20.0;
const FOOTER_BASELINE_MM: f32 = 8.0;

/// Conservative Helvetica glyph widths as a fraction of the font size.
/// Mixed-case text averages near 0.5; capitals and bold run wider.
const REGULAR_GLYPH_WIDTH_EM: f32 = 0.55;
const BOLD_GLYPH_WIDTH_EM: f32 = 0.6;
const PT_TO_MM: f32 = 0.352_778;

const HEADER_SIZE: f32 = 15.0;
const SECTION_TITLE_SIZE: f32 = 12.0;
const HEADING_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 10.0;
const FOOTER_SIZE: f32 = 8.0;

/// Font face of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// A single line of text placed on a page (coordinates in mm from the
/// bottom-left corner, y is the baseline)
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub style: FontStyle,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

impl FontStyle {
    fn glyph_width_em(self) -> f32 {
        match self {
            FontStyle::Bold => BOLD_GLYPH_WIDTH_EM,
            FontStyle::Regular | FontStyle::Italic => REGULAR_GLYPH_WIDTH_EM,
        }
    }
}

/// One laid-out page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub runs: Vec<TextRun>,
}

/// Map text onto the Latin-1 range the built-in fonts can show
pub fn to_latin1(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2022}' | '\u{25CF}' | '\u{25AA}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => out.push('-'),
            '\u{2018}' | '\u{2019}' | '\u{201B}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2026}' => out.push_str("..."),
            '\t' => out.push(' '),
            '\u{00A0}' => out.push(' '),
            c if c.is_control() => {}
            c if (c as u32) <= 0xFF => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn text_width_mm(text: &str, style: FontStyle, size: f32) -> f32 {
    text.chars().count() as f32 * size * style.glyph_width_em() * PT_TO_MM
}

fn max_chars_per_line(style: FontStyle, size: f32) -> usize {
    let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    (usable / (size * style.glyph_width_em() * PT_TO_MM)).floor().max(1.0) as usize
}

/// Greedy word wrap; words longer than a line are split
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(word.drain(..max_chars).collect());
            }
            let word: String = word.into_iter().collect();
            if word.is_empty() {
                continue;
            }
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
        }
        lines.push(current);
    }
    lines
}

/// Builds pages top to bottom
struct Paginator {
    title: String,
    pages: Vec<PageLayout>,
    cursor_y: f32,
}

impl Paginator {
    fn new(title: &str) -> Self {
        let mut paginator = Self {
            title: to_latin1(title),
            pages: Vec::new(),
            cursor_y: 0.0,
        };
        paginator.add_page();
        paginator
    }

    fn current(&mut self) -> &mut PageLayout {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Start a page with its header and footer
    fn add_page(&mut self) {
        self.pages.push(PageLayout::default());
        let page_number = self.pages.len();

        self.cursor_y = PAGE_HEIGHT_MM - MARGIN_MM;
        let title = self.title.clone();
        self.centered(&title, FontStyle::Bold, HEADER_SIZE, 10.0);
        self.gap(10.0);

        let footer = format!("Page {page_number}");
        let x = (PAGE_WIDTH_MM - text_width_mm(&footer, FontStyle::Italic, FOOTER_SIZE)) / 2.0;
        self.current().runs.push(TextRun {
            text: footer,
            style: FontStyle::Italic,
            size: FOOTER_SIZE,
            x,
            y: FOOTER_BASELINE_MM,
        });
    }

    fn ensure_space(&mut self, height: f32) {
        if self.cursor_y - height < BOTTOM_LIMIT_MM {
            self.add_page();
        }
    }

    fn gap(&mut self, height: f32) {
        self.cursor_y -= height;
    }

    /// Place text in a cell of `height`, baseline near the cell's bottom
    fn place(&mut self, text: &str, style: FontStyle, size: f32, x: f32, height: f32) {
        let baseline = self.cursor_y - height + (height - size * PT_TO_MM) / 2.0;
        self.current().runs.push(TextRun {
            text: text.to_string(),
            style,
            size,
            x,
            y: baseline,
        });
        self.cursor_y -= height;
    }

    fn centered(&mut self, text: &str, style: FontStyle, size: f32, height: f32) {
        let x = ((PAGE_WIDTH_MM - text_width_mm(text, style, size)) / 2.0).max(MARGIN_MM);
        self.place(text, style, size, x, height);
    }

    /// Wrap `text` to the page width, one cell of `line_height` per line
    fn wrapped(&mut self, text: &str, style: FontStyle, size: f32, line_height: f32) {
        for wrapped in wrap_text(&to_latin1(text), max_chars_per_line(style, size)) {
            self.ensure_space(line_height);
            self.place(&wrapped, style, size, MARGIN_MM, line_height);
        }
    }
}

/// Lay a document out onto pages
pub fn paginate(document: &ExportDocument) -> Vec<PageLayout> {
    let mut paginator = Paginator::new(&document.title);

    for (index, section) in document.sections.iter().enumerate() {
        if section.starts_new_page && index > 0 {
            paginator.add_page();
        }
        paginator.wrapped(&section.title, FontStyle::Bold, SECTION_TITLE_SIZE, 10.0);

        for block in &section.blocks {
            match block {
                Block::Line(text) => paginator.wrapped(text, FontStyle::Regular, BODY_SIZE, 8.0),
                Block::Heading(text) => paginator.wrapped(text, FontStyle::Bold, HEADING_SIZE, 6.0),
                Block::Paragraph(text) => {
                    paginator.wrapped(text, FontStyle::Regular, BODY_SIZE, 5.0);
                    paginator.gap(2.0);
                }
            }
        }
        paginator.gap(5.0);
    }

    paginator.pages
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

fn draw_page(layer: &PdfLayerReference, fonts: &Fonts, page: &PageLayout) {
    for run in &page.runs {
        layer.use_text(run.text.as_str(), run.size, Mm(run.x), Mm(run.y), fonts.get(run.style));
    }
}

/// Render a document to PDF bytes
pub fn render(document: &ExportDocument) -> Result<Vec<u8>> {
    let pages = paginate(document);

    let (doc, first_page, first_layer) = PdfDocument::new(
        document.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("Failed to load font: {e}"))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("Failed to load font: {e}"))?,
        italic: doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| anyhow!("Failed to load font: {e}"))?,
    };

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };
        draw_page(&layer, &fonts, page);
    }

    doc.save_to_bytes()
        .map_err(|e| anyhow!("Failed to write PDF: {e}"))
}
