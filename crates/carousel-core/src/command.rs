//! Display classification for console command lines.

use strum::{AsRefStr, Display};

/// How a single command line should be displayed.
///
/// Non-blank variants borrow the original, untrimmed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandLine<'a> {
    /// Whitespace only. Rendered as an empty line with no prompt.
    Blank,
    /// Trimmed text starts with `#`.
    Comment(&'a str),
    /// Anything else.
    Executable(&'a str),
}

/// Variant tag of a [`CommandLine`]; renderers key text styles on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum LineKind {
    Blank,
    Comment,
    Executable,
}

/// Classify a command line. Total over all strings.
pub fn classify(command: &str) -> CommandLine<'_> {
    let trimmed = command.trim();
    if trimmed.is_empty() {
        CommandLine::Blank
    } else if trimmed.starts_with('#') {
        CommandLine::Comment(command)
    } else {
        CommandLine::Executable(command)
    }
}

impl<'a> CommandLine<'a> {
    pub fn kind(self) -> LineKind {
        match self {
            Self::Blank => LineKind::Blank,
            Self::Comment(_) => LineKind::Comment,
            Self::Executable(_) => LineKind::Executable,
        }
    }

    /// Text to display, empty for blank lines.
    pub fn text(self) -> &'a str {
        match self {
            Self::Blank => "",
            Self::Comment(text) | Self::Executable(text) => text,
        }
    }

    /// Every non-blank line, comments included, gets a shell prompt.
    pub fn has_prompt(self) -> bool {
        !matches!(self, Self::Blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_blank() {
        assert_eq!(classify(""), CommandLine::Blank);
        assert_eq!(classify("  "), CommandLine::Blank);
        assert_eq!(classify("\t\n"), CommandLine::Blank);
    }

    #[test]
    fn hash_prefix_is_comment() {
        assert_eq!(classify("# comment"), CommandLine::Comment("# comment"));
    }

    #[test]
    fn comment_keeps_untrimmed_text() {
        assert_eq!(classify("   # indented"), CommandLine::Comment("   # indented"));
    }

    #[test]
    fn everything_else_is_executable() {
        assert_eq!(classify("llms ls"), CommandLine::Executable("llms ls"));
        assert_eq!(
            classify("llms \"# not a comment\""),
            CommandLine::Executable("llms \"# not a comment\"")
        );
        assert_eq!(classify(" llms ls "), CommandLine::Executable(" llms ls "));
    }

    #[test]
    fn prompt_and_kind() {
        assert!(!classify(" ").has_prompt());
        assert!(classify("# c").has_prompt());
        assert!(classify("llms").has_prompt());
        assert_eq!(classify("# c").kind().to_string(), "comment");
        assert_eq!(classify("").kind().as_ref(), "blank");
        assert_eq!(classify("").text(), "");
    }
}
