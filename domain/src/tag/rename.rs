//! Rename mapping value object

use crate::core::error::DomainError;
use crate::post::entities::Tag;
use serde::Serialize;

/// A single `old -> new` substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamePair {
    pub old: String,
    pub new: String,
}

impl RenamePair {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

impl std::fmt::Display for RenamePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.old, self.new)
    }
}

/// Old-tag to new-tag substitutions for one invocation (Value Object)
///
/// Old names are unique. Pairs keep the order they were given in, which is
/// the order the rename runs in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameMapping {
    pairs: Vec<RenamePair>,
}

impl RenameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair, rejecting empty names, no-op renames and a second
    /// mapping for the same old name.
    pub fn insert(
        &mut self,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Result<(), DomainError> {
        let pair = RenamePair::new(old, new);
        if pair.old.is_empty() || pair.new.is_empty() {
            return Err(DomainError::InvalidRenameMapping(format!(
                "tag names cannot be empty in '{}={}'",
                pair.old, pair.new
            )));
        }
        if pair.old == pair.new {
            return Err(DomainError::InvalidRenameMapping(format!(
                "'{}' is mapped to itself",
                pair.old
            )));
        }
        if self.pairs.iter().any(|p| p.old == pair.old) {
            return Err(DomainError::InvalidRenameMapping(format!(
                "'{}' is mapped more than once",
                pair.old
            )));
        }
        self.pairs.push(pair);
        Ok(())
    }

    /// Parse `old=new` arguments. The first `=` splits, so new names may
    /// themselves contain `=`.
    pub fn parse<I, S>(args: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mapping = Self::new();
        for arg in args {
            let arg = arg.as_ref();
            let (old, new) = arg.split_once('=').ok_or_else(|| {
                DomainError::InvalidRenameMapping(format!("expected OLD=NEW, got '{}'", arg))
            })?;
            mapping.insert(old, new)?;
        }
        if mapping.is_empty() {
            return Err(DomainError::InvalidRenameMapping(
                "no tags to rename".to_string(),
            ));
        }
        Ok(mapping)
    }

    pub fn pairs(&self) -> &[RenamePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Rewrite a tag list, replacing every verbatim `old` with `new`.
///
/// Order and duplicates are preserved; other tags pass through unchanged.
pub fn rewrite_tags(tags: &[Tag], old: &str, new: &str) -> Vec<String> {
    tags.iter()
        .map(|t| {
            if t.name == old {
                new.to_string()
            } else {
                t.name.clone()
            }
        })
        .collect()
}
