//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines straight
//! to a termcolor stream as the walker produces them.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::Style;
use crate::tree::{Counts, TreeOutput};

use super::config::OutputConfig;

/// Streaming output formatter - tree on `out`, diagnostics on `err`.
/// Implements the TreeOutput trait for use with TreeWalker.
pub struct StreamingFormatter<W = StandardStream, E = StandardStream> {
    out: W,
    err: E,
}

impl StreamingFormatter<StandardStream, StandardStream> {
    /// Formatter over the process's stdout and stderr.
    pub fn new(config: OutputConfig) -> Self {
        // Whether to color was already decided by the caller
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            out: StandardStream::stdout(choice),
            err: StandardStream::stderr(ColorChoice::Never),
        }
    }
}

impl<W: WriteColor, E: Write> StreamingFormatter<W, E> {
    pub fn with_writers(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: WriteColor, E: Write> TreeOutput for StreamingFormatter<W, E> {
    fn root(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "{}", path.display())
    }

    fn entry(
        &mut self,
        prefix: &str,
        connector: &str,
        name: &str,
        style: Style,
    ) -> io::Result<()> {
        write!(self.out, "{}{}", prefix, connector)?;
        match style {
            Style::Default => write!(self.out, "{}", name)?,
            Style::Rule(_) => {
                self.out.set_color(&style.color_spec())?;
                write!(self.out, "{}", name)?;
                self.out.reset()?;
            }
        }
        writeln!(self.out)
    }

    fn report_error(&mut self, path: &Path, error: &io::Error) -> io::Result<()> {
        writeln!(self.err, "twig: {}: {}", path.display(), error)
    }

    fn finish(&mut self, counts: &Counts) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} directories, {} files",
            counts.directories, counts.files
        )?;
        self.out.flush()?;
        self.err.flush()
    }
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;
    use crate::color::{RuleColor, StyleRule, Weight};

    fn plain() -> StreamingFormatter<Buffer, Vec<u8>> {
        StreamingFormatter::with_writers(Buffer::no_color(), Vec::new())
    }

    fn ansi() -> StreamingFormatter<Buffer, Vec<u8>> {
        StreamingFormatter::with_writers(Buffer::ansi(), Vec::new())
    }

    fn stdout_of(formatter: StreamingFormatter<Buffer, Vec<u8>>) -> String {
        let (out, _) = formatter.into_inner();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_entry_line_plain() {
        let mut formatter = plain();
        formatter
            .entry("│   ", "└── ", "main.rs", Style::Default)
            .unwrap();
        assert_eq!(stdout_of(formatter), "│   └── main.rs\n");
    }

    #[test]
    fn test_styled_name_is_reset_before_newline() {
        let mut formatter = ansi();
        let style = Style::Rule(StyleRule::new(Weight::Bold, RuleColor::Blue));
        formatter.entry("", "├── ", "src", style).unwrap();
        formatter.entry("", "└── ", "z", Style::Default).unwrap();

        let out = stdout_of(formatter);
        let lines: Vec<&str> = out.lines().collect();

        // Glyphs come before any escape code, and the reset follows the name
        assert!(lines[0].starts_with("├── \x1b["));
        assert!(lines[0].ends_with("src\x1b[0m"));
        assert!(lines[0].contains("\x1b[1m"));
        assert!(lines[0].contains("\x1b[34m"));
        assert_eq!(lines[1], "└── z");
    }

    #[test]
    fn test_default_style_writes_no_escapes() {
        let mut formatter = ansi();
        formatter.entry("", "└── ", "plain", Style::Default).unwrap();
        assert_eq!(stdout_of(formatter), "└── plain\n");
    }

    #[test]
    fn test_root_and_summary() {
        let mut formatter = plain();
        formatter.root(Path::new(".")).unwrap();
        formatter
            .finish(&Counts {
                directories: 1,
                files: 1,
            })
            .unwrap();
        assert_eq!(stdout_of(formatter), ".\n\n1 directories, 1 files\n");
    }

    #[test]
    fn test_report_error_goes_to_err_stream() {
        let mut formatter = plain();
        let error = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        formatter
            .report_error(Path::new("root/locked"), &error)
            .unwrap();

        let (out, err) = formatter.into_inner();
        assert!(out.into_inner().is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "twig: root/locked: Permission denied\n"
        );
    }
}
