//! Bounded retry wrapper for fallible zero-argument operations
//!
//! The crate centers on [`Retrier`]: it owns an [`Operation`] and a budget of
//! additional attempts, re-invokes the operation while failures keep
//! occurring and budget remains, and always hands the caller the fixed
//! [`Sentinel`] value. Failures never propagate out of [`Retrier::invoke`];
//! the retry bookkeeping persists across calls to the same retrier and its
//! remaining-attempts counter only ever decreases.

pub mod error;
pub mod invoker;
pub mod policy;

// Re-export commonly used types
pub use error::{Failure, OpResult};
pub use invoker::{make_retrier, Operation, Retrier, Sentinel};
pub use policy::RetryPolicy;

/// Version information for the reinvoke crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
