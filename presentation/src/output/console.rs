//! Console output for search matches, tags and rename reports

use colored::{ColoredString, Colorize};
use docbase_application::{RenameOutcome, RenameReport};
use docbase_domain::{Domain, Tag, TextMatch};

/// Formats command results for console display
pub struct ConsoleFormatter {
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, styled: ColoredString) -> String {
        if self.color {
            styled.to_string()
        } else {
            styled.clear().to_string()
        }
    }

    /// `<domain>.docbase.io/posts/<id>:<line>:<column>:<text>`
    ///
    /// Kept free of color so the output can be piped into grep-like tools.
    pub fn format_match(domain: &Domain, m: &TextMatch) -> String {
        format!(
            "{}/posts/{}:{}:{}:{}",
            domain.host(),
            m.post_id,
            m.line,
            m.column,
            m.text
        )
    }

    /// One tag name per line
    pub fn format_tags(tags: &[Tag]) -> String {
        let mut output = String::new();
        for tag in tags {
            output.push_str(&tag.name);
            output.push('\n');
        }
        output
    }

    /// Summary of a rename run, one line per pair
    pub fn format_rename_report(&self, report: &RenameReport) -> String {
        let mut output = String::new();

        if report.dry_run {
            output.push_str(&format!(
                "{}\n",
                self.paint("Dry run: no post was changed".yellow().bold())
            ));
        }

        for outcome in &report.outcomes {
            output.push_str(&self.format_outcome(outcome, report.dry_run));
        }

        let label = if report.dry_run {
            "Would update:"
        } else {
            "Updated:"
        };
        output.push_str(&format!(
            "{} {} posts\n",
            self.paint(label.cyan().bold()),
            report.total_posts()
        ));

        output
    }

    fn format_outcome(&self, outcome: &RenameOutcome, dry_run: bool) -> String {
        let mut output = format!(
            "{}: {} posts\n",
            self.paint(outcome.pair.to_string().green()),
            outcome.posts.len()
        );
        if dry_run {
            for post in &outcome.posts {
                output.push_str(&format!(
                    "  {} {} {}\n",
                    self.paint(post.id.to_string().dimmed()),
                    post.title,
                    self.paint(format!("[{}]", post.tags.join(", ")).dimmed())
                ));
            }
        }
        output
    }
}
