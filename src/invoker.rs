//! Retrying invoker: wraps an operation and re-invokes it on failure
//!
//! The loop is a do-while: the operation always runs at least once per call
//! to [`Retrier::invoke`], success terminates the loop immediately, and a
//! failure only keeps the loop going while additional attempts remain.
//! Failures are swallowed rather than propagated; the caller always receives
//! [`Sentinel`] and learns nothing about the final outcome. Callers that
//! need the operation's computed value must capture it via a side channel
//! inside the operation itself.

use tracing::{debug, warn};

use crate::error::OpResult;
use crate::policy::RetryPolicy;

/// A zero-argument unit of work that may succeed or fail.
///
/// Blanket-implemented for any `FnMut() -> OpResult<T>`, so plain closures
/// work directly.
pub trait Operation {
    type Output;

    /// Run the operation once
    fn attempt(&mut self) -> OpResult<Self::Output>;
}

impl<F, T> Operation for F
where
    F: FnMut() -> OpResult<T>,
{
    type Output = T;

    fn attempt(&mut self) -> OpResult<T> {
        self()
    }
}

/// Fixed placeholder result returned by [`Retrier::invoke`] regardless of
/// the operation's outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sentinel;

/// Retry bookkeeping owned exclusively by one [`Retrier`].
///
/// Never reset: `remaining` only decreases over the retrier's lifetime.
#[derive(Debug)]
struct RetryState {
    has_failed_once: bool,
    remaining: u32,
}

/// Wraps an [`Operation`] and re-invokes it on failure, up to the policy's
/// budget of additional attempts.
///
/// The state persists across calls to [`invoke`](Self::invoke), so later
/// calls to an already-battered retrier may retry fewer times than earlier
/// ones. `invoke` takes `&mut self`; sharing a retrier between threads needs
/// external synchronization.
pub struct Retrier<O> {
    op: O,
    state: RetryState,
}

impl<O: Operation> Retrier<O> {
    /// Construct a retrier from an operation and a retry policy
    pub fn new(op: O, policy: RetryPolicy) -> Self {
        Self {
            op,
            state: RetryState {
                has_failed_once: false,
                remaining: policy.attempts,
            },
        }
    }

    /// Additional attempts still available after the first failure
    pub fn remaining_attempts(&self) -> u32 {
        self.state.remaining
    }

    /// Whether any invocation of the operation has ever failed
    pub fn has_failed(&self) -> bool {
        self.state.has_failed_once
    }

    /// Invoke the operation, retrying on failure while budget remains.
    ///
    /// Runs the operation 1 to `attempts + 1` times. The first recorded
    /// failure sets the failure flag without spending budget; every
    /// subsequent failure spends one attempt. Exhausting the budget is a
    /// normal termination, not an error.
    pub fn invoke(&mut self) -> Sentinel {
        let mut tries: u32 = 0;
        loop {
            tries += 1;
            match self.op.attempt() {
                Ok(_) => {
                    if tries > 1 {
                        debug!("operation succeeded after {} tries", tries);
                    }
                    break;
                }
                Err(err) => {
                    if self.state.has_failed_once {
                        // An exhausted retrier pins at zero instead of underflowing
                        self.state.remaining = self.state.remaining.saturating_sub(1);
                    } else {
                        self.state.has_failed_once = true;
                    }
                    warn!(
                        "operation failed ({}), {} attempts remaining",
                        err, self.state.remaining
                    );
                    if self.state.remaining == 0 {
                        break;
                    }
                }
            }
        }
        Sentinel
    }
}

/// Wrap `operation` in a [`Retrier`] permitting `attempts` additional
/// invocations after an initial failure
pub fn make_retrier<O: Operation>(operation: O, attempts: u32) -> Retrier<O> {
    Retrier::new(operation, RetryPolicy::new(attempts))
}
