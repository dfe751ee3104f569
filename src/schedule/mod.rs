//! The transit schedule to be mapped.
//!
//! A [`TransitLine`] groups [`TransitRoute`]s, each of which visits an
//! ordered sequence of [`RouteStop`]s at their [`StopFacility`].

#[doc(hidden)]
pub mod line;
#[doc(hidden)]
pub mod stop;

#[doc(inline)]
pub use line::*;
#[doc(inline)]
pub use stop::*;
