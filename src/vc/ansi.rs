//! ANSI escape conversion
//!
//! jj emits SGR escape sequences with `--color=always`. When colorizing is
//! enabled the raw output is turned into styled text instead of being shown
//! with literal escapes.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};
use vte::{Params, Parser, Perform};

/// Final byte of an SGR (select graphic rendition) CSI sequence
const SGR_SET_GRAPHICS: char = 'm';

const LINE_FEED: u8 = b'\n';
const TAB: u8 = b'\t';

/// Remove every escape sequence (CSI, OSC, charset selection, ...)
pub fn strip(input: &str) -> String {
    strip_ansi_escapes::strip_str(input)
}

/// Convert text with SGR escapes into styled text
///
/// Style carries across line breaks, as it does on a terminal. Every other
/// sequence is dropped.
pub fn to_text(input: &str) -> Text<'static> {
    let mut performer = TextPerformer::default();
    let mut parser = Parser::new();
    parser.advance(&mut performer, input.as_bytes());
    performer.finish()
}

/// Collects printed characters into spans, one span per style run
#[derive(Default)]
struct TextPerformer {
    style: Style,
    pending: String,
    spans: Vec<Span<'static>>,
    lines: Vec<Line<'static>>,
}

impl TextPerformer {
    fn flush_span(&mut self) {
        if !self.pending.is_empty() {
            let content = std::mem::take(&mut self.pending);
            self.spans.push(Span::styled(content, self.style));
        }
    }

    fn end_line(&mut self) {
        self.flush_span();
        self.lines.push(Line::from(std::mem::take(&mut self.spans)));
    }

    /// Final text; a trailing newline does not open an empty line
    fn finish(mut self) -> Text<'static> {
        self.flush_span();
        if !self.spans.is_empty() {
            self.end_line();
        }
        Text::from(self.lines)
    }
}

impl Perform for TextPerformer {
    fn print(&mut self, ch: char) {
        self.pending.push(ch);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            LINE_FEED => self.end_line(),
            TAB => self.pending.push('\t'),
            _ => {}
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if ignore || !intermediates.is_empty() || action != SGR_SET_GRAPHICS {
            return;
        }
        self.flush_span();

        // `38;5;n` arrives as separate params, `38:5:n` as one param with
        // subparams; both flatten to the same code list.
        let codes: Vec<u16> = params.iter().flatten().copied().collect();
        self.style = apply_sgr(self.style, &codes);
    }
}

/// Apply one SGR parameter list to `style`
fn apply_sgr(mut style: Style, codes: &[u16]) -> Style {
    if codes.is_empty() {
        return Style::default();
    }

    let mut iter = codes.iter().copied();
    while let Some(code) = iter.next() {
        style = match code {
            0 => Style::default(),
            1 => style.add_modifier(Modifier::BOLD),
            2 => style.add_modifier(Modifier::DIM),
            3 => style.add_modifier(Modifier::ITALIC),
            4 => style.add_modifier(Modifier::UNDERLINED),
            7 => style.add_modifier(Modifier::REVERSED),
            22 => style.remove_modifier(Modifier::BOLD | Modifier::DIM),
            23 => style.remove_modifier(Modifier::ITALIC),
            24 => style.remove_modifier(Modifier::UNDERLINED),
            27 => style.remove_modifier(Modifier::REVERSED),
            30..=37 => style.fg(Color::Indexed((code - 30) as u8)),
            90..=97 => style.fg(Color::Indexed((code - 90 + 8) as u8)),
            40..=47 => style.bg(Color::Indexed((code - 40) as u8)),
            100..=107 => style.bg(Color::Indexed((code - 100 + 8) as u8)),
            38 | 48 => match extended_color(&mut iter) {
                Some(color) if code == 38 => style.fg(color),
                Some(color) => style.bg(color),
                None => style,
            },
            39 => style.fg(Color::Reset),
            49 => style.bg(Color::Reset),
            _ => style,
        };
    }
    style
}

/// Read the `5;n` or `2;r;g;b` tail of a 38/48 sequence
fn extended_color(iter: &mut impl Iterator<Item = u16>) -> Option<Color> {
    match iter.next()? {
        5 => Some(Color::Indexed(u8::try_from(iter.next()?).ok()?)),
        2 => {
            let r = u8::try_from(iter.next()?).ok()?;
            let g = u8::try_from(iter.next()?).ok()?;
            let b = u8::try_from(iter.next()?).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}
