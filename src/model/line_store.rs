//! In-memory line buffer filled once from the input stream.
//!
//! Every stored line carries its right-aligned, 1-based line number prefix
//! (`"  7: content"`). Whether the prefix is shown is decided at render time by
//! slicing past it, see [`Line::display`].

use crate::model::error::InputError;
use std::io::BufRead;
use unicode_width::UnicodeWidthChar;

/// Separator between the line number and the line content.
pub const NUMBER_SEPARATOR: &str = ": ";

/// Default cap on stored characters per line.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 4096;

/// Default distance between tab stops.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Knobs applied to each physical line while ingesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Lines longer than this many characters are cut. `0` disables the cap.
    pub max_line_length: usize,
    /// Tab stop distance used to expand `\t`. `0` keeps tabs as they are.
    pub tab_width: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// A single stored line: number prefix plus content, immutable after ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
}

impl Line {
    /// Full stored text including the number prefix.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Text starting `offset` bytes in.
    ///
    /// The prefix is ASCII, so the offsets produced by the viewport always fall
    /// on a character boundary. Anything else yields an empty string.
    pub fn display(&self, offset: usize) -> &str {
        self.text.get(offset..).unwrap_or("")
    }
}

/// Ordered, frozen collection of every input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Line>,
    digit_width: usize,
}

impl LineStore {
    /// Read `reader` to EOF and build the store.
    ///
    /// Terminators (`\n`, `\r\n`) are stripped and invalid UTF-8 is replaced
    /// rather than rejected. A missing trailing newline still yields a line.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Read` if the stream fails and
    /// `InputError::Allocation` if the buffer cannot grow. No partial store is
    /// returned in either case.
    pub fn ingest<R: BufRead>(mut reader: R, options: IngestOptions) -> Result<Self, InputError> {
        let mut raw: Vec<String> = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            raw.try_reserve(1)
                .map_err(|source| InputError::Allocation {
                    lines: raw.len(),
                    source,
                })?;
            raw.push(normalize_line(&buf, options));
        }

        let width = digit_width(raw.len());
        let mut lines = Vec::new();
        lines
            .try_reserve_exact(raw.len())
            .map_err(|source| InputError::Allocation {
                lines: raw.len(),
                source,
            })?;
        lines.extend(
            raw.into_iter()
                .enumerate()
                .map(|(idx, content)| format_line(idx + 1, width, &content)),
        );

        Ok(Self {
            lines,
            digit_width: width,
        })
    }

    /// Build a store from lines already in memory.
    ///
    /// Content is stored verbatim: no truncation or tab expansion.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<S> = lines.into_iter().collect();
        let width = digit_width(raw.len());
        let lines = raw
            .iter()
            .enumerate()
            .map(|(idx, content)| format_line(idx + 1, width, content.as_ref()))
            .collect();

        Self {
            lines,
            digit_width: width,
        }
    }

    /// Number of stored lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the input had no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Decimal digits of the line count, at least 1.
    pub fn digit_width(&self) -> usize {
        self.digit_width.max(1)
    }

    /// Line at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// All lines in input order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

/// Decimal digits needed to print `count`, minimum 1.
pub fn digit_width(count: usize) -> usize {
    count.checked_ilog10().map_or(1, |digits| digits as usize + 1)
}

fn format_line(number: usize, width: usize, content: &str) -> Line {
    Line {
        text: format!("{number:>width$}{NUMBER_SEPARATOR}{content}"),
    }
}

fn normalize_line(bytes: &[u8], options: IngestOptions) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    let decoded = String::from_utf8_lossy(bytes);

    let mut out = String::with_capacity(decoded.len());
    let mut column = 0;
    for (count, ch) in decoded.chars().enumerate() {
        if options.max_line_length > 0 && count >= options.max_line_length {
            break;
        }
        if ch == '\t' && options.tab_width > 0 {
            let fill = options.tab_width - column % options.tab_width;
            out.extend(std::iter::repeat_n(' ', fill));
            column += fill;
        } else {
            out.push(ch);
            column += ch.width().unwrap_or(0);
        }
    }
    out
}
