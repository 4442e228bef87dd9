//! Scrolling the option list to a row.
//!
//! Virtualized lists cannot scroll to a row before they have been laid
//! out. A failed scroll is retried once after [`SCROLL_RETRY_DELAY`]; a
//! second failure is logged and dropped.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};

use crate::error::ScrollError;

/// Delay before the single retry of a failed scroll.
pub const SCROLL_RETRY_DELAY: Duration = Duration::from_millis(500);

/// A host list that can scroll a row into view.
pub trait VirtualList {
    fn scroll_to_index(&mut self, index: usize, animated: bool) -> Result<(), ScrollError>;
}

/// A scroll retry waiting for its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingScroll {
    pub index: usize,
    pub deadline: Instant,
}

impl PendingScroll {
    /// Wait until the retry is due.
    pub async fn wait(&self) {
        sleep_until(self.deadline).await;
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Retry the scroll once. Failure is only logged.
    pub fn retry<L: VirtualList + ?Sized>(self, list: &mut L) -> bool {
        match list.scroll_to_index(self.index, true) {
            Ok(()) => {
                log::debug!("scroll to row {} succeeded on retry", self.index);
                true
            }
            Err(e) => {
                log::warn!("scroll retry gave up: {}", e);
                false
            }
        }
    }
}

/// Scroll `list` to `index`, scheduling one retry on failure.
///
/// Returns the pending retry, if any; the caller owns waiting for it.
pub fn scroll_to_index<L: VirtualList + ?Sized>(
    list: &mut L,
    index: usize,
    animated: bool,
) -> Option<PendingScroll> {
    match list.scroll_to_index(index, animated) {
        Ok(()) => None,
        Err(e) => {
            log::debug!("{}; retrying in {:?}", e, SCROLL_RETRY_DELAY);
            Some(PendingScroll {
                index,
                deadline: Instant::now() + SCROLL_RETRY_DELAY,
            })
        }
    }
}
