use clap::ValueEnum;
use derive_more::Display;

/// Box-drawing characters that paint the structure of a tree diagram.
pub const TREE_GLYPHS: [char; 4] = ['│', '├', '└', '─'];

/// Number of indent-painting characters that make up one nesting level.
const CHARS_PER_LEVEL: usize = 2;

/// How the nesting depth of a line is inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IndentMode {
    /// Counts every glyph and space anywhere in the line.
    /// Names containing spaces inflate the computed level.
    #[default]
    Compat,
    /// Counts only the run of glyphs and spaces in front of the name.
    Leading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

impl EntryKind {
    /// Only the trailing slash decides; extensions are ignored.
    pub fn classify(cleaned_name: &str) -> Self {
        if cleaned_name.ends_with('/') {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }
}

/// Line boundaries recognised when splitting a diagram: `\n`, `\r`, vertical
/// tab, form feed, the ASCII separators, NEL and the Unicode line and
/// paragraph separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

fn is_indent_char(c: char) -> bool {
    c == ' ' || TREE_GLYPHS.contains(&c)
}

pub fn calculate_indent(line: &str, mode: IndentMode) -> usize {
    let painted = match mode {
        IndentMode::Compat => line.chars().filter(|&c| is_indent_char(c)).count(),
        IndentMode::Leading => line.chars().take_while(|&c| is_indent_char(c)).count(),
    };
    painted / CHARS_PER_LEVEL
}

/// Removes the connector glyphs (spaces are kept) and trims the result.
pub fn clean_line(line: &str) -> String {
    line.chars()
        .filter(|c| !TREE_GLYPHS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Yields the lines worth interpreting: blank lines are dropped and,
/// when requested, everything from the first `#` on is cut away first.
///
/// A `\r\n` pair yields an empty piece between its two breaks, which the
/// blank-line filter discards.
pub fn tree_lines(text: &str, strip_comments: bool) -> impl Iterator<Item = &str> {
    text.split(LINE_BREAKS)
        .map(move |line| {
            if strip_comments {
                strip_comment(line)
            } else {
                line
            }
        })
        .filter(|line| !line.trim().is_empty())
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or_default().trim_end_matches(' ')
}

/// A single interpreted line of a tree diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub indent: usize,
    pub kind: EntryKind,
    /// Path segment to create, with the `/` or `*` marker removed.
    pub name: String,
}

impl TreeLine {
    /// Returns `None` for lines that carry no name, e.g. a dangling connector.
    pub fn parse(line: &str, mode: IndentMode) -> Option<Self> {
        let cleaned = clean_line(line);
        if cleaned.is_empty() {
            return None;
        }

        let kind = EntryKind::classify(&cleaned);
        let name = match kind {
            EntryKind::Directory => cleaned.trim_end_matches('/'),
            EntryKind::File => cleaned.trim_end_matches('*'),
        }
        .to_string();

        Some(TreeLine {
            indent: calculate_indent(line, mode),
            kind,
            name,
        })
    }
}
