//! Query expressions for the DocBase search syntax
//!
//! Predicates are written as `qualifier:value` (`title:rust`, `tag:howto`),
//! juxtaposition means AND, `OR` is an explicit operator, `-` negates and
//! parentheses group. [`join`] turns a sequence of [`QueryExpression`]s into
//! the single [`Query`] string the search endpoint expects.

use serde::{Deserialize, Serialize};

const OR_OPERATOR: &str = "OR";

/// A search predicate or join operator (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpression {
    /// `title:<value>`
    Title(String),
    /// `body:<value>`
    Body(String),
    /// `tag:<name>`
    Tag(String),
    /// `author:<user>`
    Author(String),
    /// Free text matched against title and body
    Keyword(String),
    /// `-<expr>`
    Not(Box<QueryExpression>),
    /// Explicit OR between its neighbours
    Or,
    /// A sub-sequence, parenthesised when it renders to more than one token
    Group(Vec<QueryExpression>),
}

impl QueryExpression {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title(text.into())
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self::Body(text.into())
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    pub fn author(user: impl Into<String>) -> Self {
        Self::Author(user.into())
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Self::Keyword(text.into())
    }

    pub fn or() -> Self {
        Self::Or
    }

    pub fn not(expr: QueryExpression) -> Self {
        Self::Not(Box::new(expr))
    }

    pub fn group(exprs: impl IntoIterator<Item = QueryExpression>) -> Self {
        Self::Group(exprs.into_iter().collect())
    }

    /// Serialize a single node. `None` when the node contributes nothing
    /// (a bare operator or an empty group).
    fn render(&self) -> Option<String> {
        match self {
            Self::Title(v) => Some(format!("title:{}", quote_value(v))),
            Self::Body(v) => Some(format!("body:{}", quote_value(v))),
            Self::Tag(v) => Some(format!("tag:{}", quote_value(v))),
            Self::Author(v) => Some(format!("author:{}", quote_value(v))),
            Self::Keyword(v) => Some(quote_keyword(v)),
            Self::Not(inner) => inner.render().map(|s| format!("-{}", s)),
            Self::Or => None,
            Self::Group(items) => {
                let mut tokens = render_sequence(items);
                match tokens.len() {
                    0 => None,
                    1 => tokens.pop(),
                    _ => Some(format!("({})", tokens.join(" "))),
                }
            }
        }
    }
}

/// A serialized search query
///
/// An empty query means "match all" to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    /// A raw query string typed by the user, passed through untouched
    pub fn raw(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    /// The explicit match-all wildcard
    pub fn match_all() -> Self {
        Self("*".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<QueryExpression> for Query {
    fn from(expr: QueryExpression) -> Self {
        join([expr])
    }
}

/// Join expressions into one query string.
///
/// Tokens are separated by a single space. `OR` operators at the start or
/// end of the sequence, or directly following another `OR`, are dropped so
/// the result never contains a dangling operator.
pub fn join(exprs: impl IntoIterator<Item = QueryExpression>) -> Query {
    let exprs: Vec<QueryExpression> = exprs.into_iter().collect();
    Query(render_sequence(&exprs).join(" "))
}

fn render_sequence(exprs: &[QueryExpression]) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::with_capacity(exprs.len());
    for expr in exprs {
        match expr {
            QueryExpression::Or => {
                if tokens.last().is_some_and(|t| t != OR_OPERATOR) {
                    tokens.push(OR_OPERATOR.to_string());
                }
            }
            other => {
                if let Some(token) = other.render() {
                    tokens.push(token);
                }
            }
        }
    }
    if tokens.last().is_some_and(|t| t == OR_OPERATOR) {
        tokens.pop();
    }
    tokens
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '(' || c == ')')
}

fn quote(value: &str) -> String {
    format!(
        "\"{}\"",
        value.replace('\\', "\\\\").replace('"', "\\\"")
    )
}

fn quote_value(value: &str) -> String {
    if needs_quotes(value) {
        quote(value)
    } else {
        value.to_string()
    }
}

// A bare keyword must also not read as an operator or a negation.
fn quote_keyword(value: &str) -> String {
    if needs_quotes(value) || value == OR_OPERATOR || value.starts_with('-') || value.contains(':')
    {
        quote(value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use QueryExpression as Q;

    #[test]
    fn test_empty_sequence_is_empty_query() {
        let query = join(Vec::new());
        assert_eq!(query.as_str(), "");
        assert!(query.is_empty());
    }

    #[test]
    fn test_title_or_body() {
        let query = join([Q::title("rust"), Q::or(), Q::body("rust")]);
        assert_eq!(query.as_str(), "title:rust OR body:rust");
    }

    #[test]
    fn test_juxtaposition_is_and() {
        let query = join([Q::tag("howto"), Q::author("alice")]);
        assert_eq!(query.as_str(), "tag:howto author:alice");
    }

    #[test]
    fn test_tag_serialization() {
        assert_eq!(Query::from(Q::tag("release")).as_str(), "tag:release");
        assert_eq!(Query::from(Q::tag("日本語")).as_str(), "tag:日本語");
    }

    #[test]
    fn test_values_with_whitespace_are_quoted() {
        assert_eq!(
            Query::from(Q::tag("release notes")).as_str(),
            "tag:\"release notes\""
        );
        assert_eq!(
            Query::from(Q::title("say \"hi\" now")).as_str(),
            "title:\"say \\\"hi\\\" now\""
        );
    }

    #[test]
    fn test_backslashes_are_escaped_inside_quotes() {
        assert_eq!(
            Query::from(Q::title("a b\\")).as_str(),
            "title:\"a b\\\\\""
        );
        assert_eq!(
            Query::from(Q::tag("x \\\"y")).as_str(),
            "tag:\"x \\\\\\\"y\""
        );
    }

    #[test]
    fn test_dangling_operators_dropped() {
        let query = join([Q::or(), Q::title("a"), Q::or(), Q::or(), Q::body("b"), Q::or()]);
        assert_eq!(query.as_str(), "title:a OR body:b");
    }

    #[test]
    fn test_nested_or_group_is_parenthesised() {
        let query = join([
            Q::group([Q::title("a"), Q::or(), Q::body("a")]),
            Q::tag("x"),
        ]);
        assert_eq!(query.as_str(), "(title:a OR body:a) tag:x");
    }

    #[test]
    fn test_and_group_next_to_or_keeps_parentheses() {
        let query = join([Q::group([Q::tag("x"), Q::tag("y")]), Q::or(), Q::tag("z")]);
        assert_eq!(query.as_str(), "(tag:x tag:y) OR tag:z");
    }

    #[test]
    fn test_negated_group_negates_every_term() {
        let query = join([Q::not(Q::group([Q::tag("x"), Q::tag("y")]))]);
        assert_eq!(query.as_str(), "-(tag:x tag:y)");
    }

    #[test]
    fn test_single_term_group_is_bare() {
        let query = join([Q::not(Q::group([Q::tag("x")])), Q::tag("y")]);
        assert_eq!(query.as_str(), "-tag:x tag:y");
    }

    #[test]
    fn test_empty_group_contributes_nothing() {
        let query = join([Q::title("a"), Q::or(), Q::group([]), Q::tag("b")]);
        assert_eq!(query.as_str(), "title:a OR tag:b");
    }

    #[test]
    fn test_not_prefixes_minus() {
        let query = join([Q::keyword("draft"), Q::not(Q::tag("archived"))]);
        assert_eq!(query.as_str(), "draft -tag:archived");
    }

    #[test]
    fn test_keyword_that_looks_like_syntax_is_quoted() {
        assert_eq!(Query::from(Q::keyword("OR")).as_str(), "\"OR\"");
        assert_eq!(Query::from(Q::keyword("-x")).as_str(), "\"-x\"");
        assert_eq!(Query::from(Q::keyword("a:b")).as_str(), "\"a:b\"");
    }

    #[test]
    fn test_join_is_deterministic() {
        let build = || join([Q::title("q"), Q::or(), Q::body("q"), Q::tag("t")]);
        assert_eq!(build(), build());
    }

    #[test]
    fn test_raw_and_match_all() {
        assert_eq!(Query::match_all().as_str(), "*");
        assert!(Query::raw("  ").is_empty());
        assert_eq!(Query::raw("tag:x").to_string(), "tag:x");
    }
}
