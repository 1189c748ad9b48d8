//! Re-authentication policies for HTTP requests.
//!
//! A `401` is the only failure recovered locally. The budget for that
//! recovery is carried as an explicit value through the request loop, so a
//! server that keeps rejecting fresh tokens ends the call instead of looping.

/// Re-authentication policy for an HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// A `401` is terminal.
    None,
    /// On `401`, log in again and re-issue the request once.
    /// Default for every authenticated endpoint.
    ReauthOnce,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::ReauthOnce
    }
}

impl RetryPolicy {
    /// Number of re-authentications this policy allows per logical call.
    pub fn max_reauth(&self) -> u32 {
        match self {
            RetryPolicy::None => 0,
            RetryPolicy::ReauthOnce => 1,
        }
    }
}

/// Remaining re-authentication budget for one logical call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRetry {
    remaining: u32,
}

impl AuthRetry {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            remaining: policy.max_reauth(),
        }
    }

    /// Spend one re-authentication. Returns `false` once the budget is gone.
    pub fn try_consume(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}
