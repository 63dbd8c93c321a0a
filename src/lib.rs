#![doc = include_str!("../README.md")]

mod bytearray;
mod endian;
mod error;

pub use bytearray::ByteArray;
pub use endian::Endian;
pub use error::{ByteArrayError, ByteArrayResult};
