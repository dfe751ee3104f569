#[doc(hidden)]
pub mod ids;
#[cfg(feature = "tracing")]
pub mod trace;

use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

/// An insertion-ordered map using the Fx hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
