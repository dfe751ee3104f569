//! Turn lanes of the network.
//!
//! A [`LanesToLinkAssignment`] describes, for one inbound link, which
//! outbound links each of its [`Lane`]s leads to. Lanes are synthesised
//! around artificial links as they are inserted, ordered from left to
//! right by the turning angle onto each outbound link.

#[doc(hidden)]
pub mod assign;
#[doc(hidden)]
pub mod consistency;
#[doc(hidden)]
pub mod lane;
#[doc(hidden)]
pub mod order;

#[doc(inline)]
pub use assign::*;
#[doc(inline)]
pub use consistency::*;
#[doc(inline)]
pub use lane::*;
#[doc(inline)]
pub use order::*;
