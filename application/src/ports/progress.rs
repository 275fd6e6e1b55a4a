//! Progress notification port
//!
//! Defines the interface for reporting progress during a tag rename.

use docbase_domain::{PostId, RenamePair};

/// Callback for progress updates during a tag rename
///
/// Implementations live in the presentation layer.
pub trait RenameProgressNotifier: Send + Sync {
    /// Called once the matching posts for a pair have been collected
    fn on_pair_start(&self, pair: &RenamePair, matched: usize);

    /// Called after a post's tags were rewritten on the service
    fn on_post_renamed(&self, pair: &RenamePair, post_id: PostId);

    /// Called when every matching post of a pair has been handled
    fn on_pair_complete(&self, pair: &RenamePair, updated: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoRenameProgress;

impl RenameProgressNotifier for NoRenameProgress {
    fn on_pair_start(&self, _pair: &RenamePair, _matched: usize) {}
    fn on_post_renamed(&self, _pair: &RenamePair, _post_id: PostId) {}
    fn on_pair_complete(&self, _pair: &RenamePair, _updated: usize) {}
}
