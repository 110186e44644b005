use clap::ValueEnum;
use colored::Colorize;
use regex::Regex;

use crate::common::result::{GitslaveResult, ResultExt};

/// When to color the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    /// Resolve the choice against the current terminal and environment
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
            }
        }
    }
}

/// Line-oriented color annotation of a rendered report
pub struct Colorizer {
    use_color: bool,
    header: Regex,
    branch: Regex,
    file_marker: Regex,
    addition: Regex,
    removal: Regex,
}

impl Colorizer {
    pub fn new(use_color: bool) -> GitslaveResult<Self> {
        Ok(Self {
            use_color,
            header: Regex::new(r"^Repository \(.*\)$").with_internal_error("header pattern")?,
            branch: Regex::new(r"^On branch ").with_internal_error("branch pattern")?,
            file_marker: Regex::new(r"^(\+\+\+|---)( |$)").with_internal_error("file pattern")?,
            addition: Regex::new(r"^\+").with_internal_error("addition pattern")?,
            removal: Regex::new(r"^-").with_internal_error("removal pattern")?,
        })
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Color every matching line; other lines and all line endings are kept as is
    pub fn colorize(&self, report: &str) -> String {
        if !self.use_color {
            return report.to_string();
        }

        report
            .split_inclusive('\n')
            .map(|line| {
                let (content, ending) = match line.strip_suffix('\n') {
                    Some(content) => (content, "\n"),
                    None => (line, ""),
                };
                format!("{}{}", self.colorize_line(content), ending)
            })
            .collect()
    }

    fn colorize_line(&self, line: &str) -> String {
        if self.header.is_match(line) {
            line.cyan().bold().to_string()
        } else if self.branch.is_match(line) {
            line.green().bold().to_string()
        } else if self.file_marker.is_match(line) {
            line.bold().to_string()
        } else if self.addition.is_match(line) {
            line.green().to_string()
        } else if self.removal.is_match(line) {
            line.red().to_string()
        } else {
            line.to_string()
        }
    }
}
