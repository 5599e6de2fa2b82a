//! JSON text codec: recursive-descent decoder and compact encoder.

pub mod decoder;
pub mod encoder;
pub mod error;
