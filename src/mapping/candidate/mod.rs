//! Link candidates are the network links which may serve a stop.

#[doc(hidden)]
pub mod entry;
#[doc(hidden)]
pub mod nearest;
#[doc(hidden)]
pub mod provider;

#[doc(inline)]
pub use entry::*;
#[doc(inline)]
pub use nearest::*;
#[doc(inline)]
pub use provider::*;
