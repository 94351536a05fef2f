use tracing::error;

use crate::error::ApiError;

/// Like button for one post within one browser session.
///
/// A post can be liked once per session. The displayed count is replaced by
/// the server's total when the like goes through; a failed request leaves the
/// button as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeButton {
    pub count: u64,
    pub liked: bool,
    pending: bool,
}

impl LikeButton {
    pub fn new(count: u64, liked: bool) -> Self {
        Self {
            count,
            liked,
            pending: false,
        }
    }

    pub fn can_press(&self) -> bool {
        !self.liked && !self.pending
    }

    /// Returns `true` when a like request should be sent.
    pub fn press(&mut self) -> bool {
        if !self.can_press() {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn resolve(&mut self, outcome: &Result<u64, ApiError>) {
        self.pending = false;
        match outcome {
            Ok(total) => {
                self.count = *total;
                self.liked = true;
            }
            Err(e) => error!("Failed to like blog post: {}", e),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
