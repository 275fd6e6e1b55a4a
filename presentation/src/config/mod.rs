//! Presentation-level configuration
//!
//! Output settings resolved from the config file and command-line flags.

/// Template used when neither the config file nor `--format` sets one
pub const DEFAULT_POST_FORMAT: &str = "{{ title }}";

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Template used by `post list` and `post get` when `--format` is absent
    pub post_format: String,
    /// Show progress indicators on stderr
    pub show_progress: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl OutputConfig {
    /// The template to use, preferring an explicit `--format`
    pub fn post_format<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.unwrap_or(&self.post_format)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            post_format: DEFAULT_POST_FORMAT.to_string(),
            show_progress: true,
            color: true,
        }
    }
}
