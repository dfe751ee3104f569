//! Travel cost estimates and least-cost network paths between candidates.

#[doc(hidden)]
pub mod cost;
#[doc(hidden)]
pub mod definition;
#[doc(hidden)]
pub mod network;

#[doc(inline)]
pub use cost::*;
#[doc(inline)]
pub use definition::*;
#[doc(inline)]
pub use network::*;
