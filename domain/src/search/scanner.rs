//! Text match scanner
//!
//! The search endpoint only says *which* posts matched. This module finds
//! *where*: for every line of a post that contains the query it yields a
//! [`TextMatch`] with grep-style coordinates. The title is pseudo-line 0,
//! body lines count from 1, and columns are 1-based character offsets of
//! the first occurrence on the line.

use crate::post::entities::{Post, PostId};
use serde::Serialize;

/// One line of a post that contains the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextMatch {
    pub post_id: PostId,
    /// 0 for the title, 1.. for body lines
    pub line: usize,
    /// 1-based character index of the first occurrence
    pub column: usize,
    /// The full line the match was found on
    pub text: String,
}

/// Scan a title and body for a literal, case-sensitive substring.
///
/// The iterator is lazy; nothing is scanned until it is consumed. An empty
/// query matches every line at column 1.
pub fn scan_text<'a>(
    post_id: PostId,
    title: &'a str,
    body: &'a str,
    query: &'a str,
) -> impl Iterator<Item = TextMatch> + 'a {
    std::iter::once(title)
        .chain(body.lines())
        .enumerate()
        .filter_map(move |(line, text)| {
            find_column(text, query).map(|column| TextMatch {
                post_id,
                line,
                column,
                text: text.to_string(),
            })
        })
}

/// Scan a post's title and body.
pub fn scan_post<'a>(post: &'a Post, query: &'a str) -> impl Iterator<Item = TextMatch> + 'a {
    scan_text(post.id, &post.title, &post.body, query)
}

fn find_column(text: &str, query: &str) -> Option<usize> {
    text.find(query)
        .map(|byte_index| text[..byte_index].chars().count() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_and_columns(matches: impl Iterator<Item = TextMatch>) -> Vec<(usize, usize)> {
        matches.map(|m| (m.line, m.column)).collect()
    }

    #[test]
    fn test_body_matches_skip_non_matching_lines() {
        let matches = scan_text(PostId::new(1), "title", "alpha\nbeta\nalpha", "alpha");
        assert_eq!(lines_and_columns(matches), vec![(1, 1), (3, 1)]);
    }

    #[test]
    fn test_title_is_line_zero() {
        let matches: Vec<_> = scan_text(PostId::new(9), "about rust", "no hit", "rust").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line, 0);
        assert_eq!(matches[0].column, 7);
        assert_eq!(matches[0].text, "about rust");
        assert_eq!(matches[0].post_id, PostId::new(9));
    }

    #[test]
    fn test_only_first_occurrence_per_line() {
        let matches = scan_text(PostId::new(1), "", "x ab ab", "ab");
        assert_eq!(lines_and_columns(matches), vec![(1, 3)]);
    }

    #[test]
    fn test_column_counts_characters_not_bytes() {
        let matches = scan_text(PostId::new(1), "", "日本語のrust", "rust");
        assert_eq!(lines_and_columns(matches), vec![(1, 5)]);
    }

    #[test]
    fn test_match_is_case_sensitive_and_literal() {
        let matches = scan_text(PostId::new(1), "Rust", "a.c\nabc", "a.c");
        assert_eq!(lines_and_columns(matches), vec![(1, 1)]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let matches: Vec<_> = scan_text(PostId::new(1), "", "one\r\ntwo\r\n", "two").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line, 2);
        assert_eq!(matches[0].text, "two");
    }

    #[test]
    fn test_empty_query_matches_every_line_at_column_one() {
        let matches = scan_text(PostId::new(1), "t", "a\nb", "");
        assert_eq!(lines_and_columns(matches), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_scan_post_uses_post_fields() {
        let post = Post::new(PostId::new(5), "Guide", "intro\nGuide body");
        let matches = lines_and_columns(scan_post(&post, "Guide"));
        assert_eq!(matches, vec![(0, 1), (2, 1)]);
    }
}
