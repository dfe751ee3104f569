//! The physical network onto which schedules are mapped.
//!
//! A [`Network`] holds [`Node`]s connected by directed [`Link`]s.
//! Iteration over nodes and links follows insertion order, so that
//! every consumer observes the same ordering for the same input.

#[doc(hidden)]
pub mod link;
#[doc(hidden)]
pub mod graph;
#[doc(hidden)]
pub mod node;
#[cfg(test)]
mod test;

#[doc(inline)]
pub use link::*;
#[doc(inline)]
pub use graph::*;
#[doc(inline)]
pub use node::*;
