//! Links inserted into the network where no acceptable path exists.

#[doc(hidden)]
pub mod link;
#[doc(hidden)]
pub mod set;

#[doc(inline)]
pub use link::*;
#[doc(inline)]
pub use set::*;

#[cfg(test)]
mod test;
