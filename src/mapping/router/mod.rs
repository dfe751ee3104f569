//! Concurrent pseudo-routing of transit lines.
//!
//! Lines are handed out by a [`Dispatcher`] to a pool of
//! [`PseudoRouter`] workers. Each worker keeps its own results, which
//! are merged once every worker has finished.

#[doc(hidden)]
pub mod dispatch;
#[doc(hidden)]
pub mod worker;

#[doc(inline)]
pub use dispatch::*;
#[doc(inline)]
pub use worker::*;

#[cfg(test)]
mod test;
