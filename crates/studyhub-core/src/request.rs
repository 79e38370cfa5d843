//! Monotonic request tokens.
//!
//! Asynchronous loads are not cancellable. Each load takes a token when it
//! starts; when it completes, its result is applied only if no newer load
//! has started since.

use serde::{Deserialize, Serialize};

/// Identity of one started load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestToken(u64);

/// Issues tokens and remembers which one is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestGuard {
    latest: u64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load. All previously issued tokens become stale.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Mark every outstanding token stale without starting a load.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    #[inline]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}
