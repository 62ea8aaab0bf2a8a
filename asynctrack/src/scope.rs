use tokio_util::sync::{CancellationToken, DropGuard};

/// Liveness latch for whatever owns one or more trackers.
///
/// A scope is live until [`Scope::end`] is called on any clone of it, or on a
/// parent scope. Ending is permanent. Trackers check the latch before every
/// write, so anything settling afterwards is silently dropped.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    token: CancellationToken,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope that ends with `self` but can also be ended on its own.
    pub fn child(&self) -> Scope {
        Scope {
            token: self.token.child_token(),
        }
    }

    pub fn end(&self) {
        self.token.cancel();
    }

    pub fn is_live(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Completes once the scope has ended.
    pub async fn ended(&self) {
        self.token.cancelled().await
    }

    /// Ends the scope when the returned guard is dropped.
    pub fn drop_guard(&self) -> ScopeGuard {
        ScopeGuard {
            guard: self.token.clone().drop_guard(),
        }
    }
}

/// Ends its [`Scope`] on drop unless disarmed.
#[derive(Debug)]
#[must_use = "the scope ends as soon as the guard is dropped"]
pub struct ScopeGuard {
    guard: DropGuard,
}

impl ScopeGuard {
    /// Gives the scope back without ending it.
    pub fn disarm(self) -> Scope {
        Scope {
            token: self.guard.disarm(),
        }
    }
}
