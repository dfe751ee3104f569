//! The layered pseudo graph of a single transit route.
//!
//! Layer `i` holds one node per candidate of the route's `i`-th stop.
//! Edges only join consecutive layers, and two butt nodes, SOURCE and
//! DESTINATION, are attached to the first and last layer respectively.
//! The least-cost path from SOURCE to DESTINATION selects one candidate
//! per stop.

#[doc(hidden)]
pub mod collapse;
#[doc(hidden)]
pub mod edge;
#[doc(hidden)]
pub mod layered;
#[doc(hidden)]
pub mod node;

#[doc(inline)]
pub use collapse::*;
#[doc(inline)]
pub use edge::*;
#[doc(inline)]
pub use layered::*;
#[doc(inline)]
pub use node::*;
