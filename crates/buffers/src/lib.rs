//! json-tree-buffers - scratch buffers for the json-tree codecs.
//!
//! Provides [`Scratch`], a growable LIFO byte buffer used as a staging area
//! while variable-length data is being produced and its final size is not yet
//! known.

mod scratch;

pub use scratch::Scratch;
