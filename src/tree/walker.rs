//! TreeWalker - depth-first rendering of a directory tree
//!
//! Output is streamed entry by entry through a `TreeOutput`, so memory use is
//! one directory listing per level of recursion.

use std::io;
use std::path::Path;

use crate::color::{ColorRuleTable, Style, resolve_style};

use super::config::{Depth, WalkerConfig};
use super::entry::EntryKind;
use super::traversal::{child_prefix, connector, list_visible_entries};

/// Running directory/file tally for one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub directories: usize,
    pub files: usize,
}

/// Destination for rendered tree lines.
pub trait TreeOutput {
    /// Write the root line.
    fn root(&mut self, path: &Path) -> io::Result<()>;

    /// Write one entry line: `prefix`, `connector`, then `name` painted with
    /// `style`. The style must not leak past the name.
    fn entry(&mut self, prefix: &str, connector: &str, name: &str, style: Style)
    -> io::Result<()>;

    /// Report a directory that could not be listed.
    fn report_error(&mut self, path: &Path, error: &io::Error) -> io::Result<()>;

    /// Write the summary.
    fn finish(&mut self, counts: &Counts) -> io::Result<()>;
}

/// Recursive tree renderer.
pub struct TreeWalker {
    config: WalkerConfig,
    rules: ColorRuleTable,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            rules: ColorRuleTable::default(),
        }
    }

    /// Color names using `rules`. Without this every entry gets the default style.
    pub fn with_rules(mut self, rules: ColorRuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Render the whole tree under `root`: root line, entries, then summary.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> io::Result<Counts> {
        let mut counts = Counts::default();

        output.root(root)?;
        self.render(root, "", self.config.depth(), &mut counts, output)?;
        output.finish(&counts)?;

        tracing::debug!(
            directories = counts.directories,
            files = counts.files,
            "walk complete"
        );
        Ok(counts)
    }

    /// Render the contents of `directory` below `prefix`.
    ///
    /// A directory that cannot be listed is reported through the output and
    /// skipped. Only write errors are returned.
    pub fn render<O: TreeOutput>(
        &self,
        directory: &Path,
        prefix: &str,
        depth: Depth,
        counts: &mut Counts,
        output: &mut O,
    ) -> io::Result<()> {
        if depth.is_exhausted() {
            return Ok(());
        }

        let entries = match list_visible_entries(directory) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(path = %directory.display(), error = %err, "cannot list directory");
                return output.report_error(directory, &err);
            }
        };

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == total - 1;
            let name = entry.display_name();
            let style = resolve_style(&name, entry.kind, &self.rules);

            output.entry(prefix, connector(is_last), &name, style)?;

            match entry.kind {
                EntryKind::Directory => {
                    counts.directories += 1;
                    self.render(
                        &directory.join(&entry.name),
                        &child_prefix(prefix, is_last),
                        depth.descend(),
                        counts,
                        output,
                    )?;
                }
                EntryKind::Other => counts.files += 1,
            }
        }

        Ok(())
    }
}
