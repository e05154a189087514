// Console styling for scaffolding results

use colored::{ColoredString, Colorize};

/// Status marks prefixed to result lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Success,
    Error,
    Warning,
    Info,
}

impl Mark {
    /// Plain symbol for this mark
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Success => "✓",
            Mark::Error => "✗",
            Mark::Warning => "⚠",
            Mark::Info => "ℹ",
        }
    }

    fn colored(self) -> ColoredString {
        let symbol = self.symbol();
        match self {
            Mark::Success => symbol.green().bold(),
            Mark::Error => symbol.red().bold(),
            Mark::Warning => symbol.yellow(),
            Mark::Info => symbol.blue(),
        }
    }
}

/// Styles result lines, coloring them only when the stream is a terminal
#[derive(Debug, Clone, Copy)]
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Style for lines written to stderr
    pub fn for_stderr() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }

    /// `msg` prefixed with `mark`
    pub fn marked(&self, mark: Mark, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", mark.colored(), msg)
        } else {
            format!("{} {}", mark.symbol(), msg)
        }
    }

    pub fn success(&self, msg: &str) -> String {
        self.marked(Mark::Success, msg)
    }

    pub fn error(&self, msg: &str) -> String {
        self.marked(Mark::Error, msg)
    }

    pub fn warning(&self, msg: &str) -> String {
        self.marked(Mark::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> String {
        self.marked(Mark::Info, msg)
    }

    /// A file name or identifier
    pub fn code(&self, code: &str) -> String {
        if self.use_colors {
            code.cyan().to_string()
        } else {
            code.to_string()
        }
    }

    /// A section title
    pub fn header(&self, title: &str) -> String {
        if self.use_colors {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// An indented `key: value` row
    pub fn key_value(&self, key: &str, value: &str) -> String {
        let key = if self.use_colors { key.bold().to_string() } else { key.to_string() };
        format!("  {}: {}", key, value)
    }
}

/// Print an error line to stderr
pub fn print_error(msg: &str) {
    eprintln!("{}", OutputStyle::for_stderr().error(msg));
}
