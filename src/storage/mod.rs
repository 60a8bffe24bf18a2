//! Persistence of address books.
//!
//! This module turns a book's records into bytes and back ([`codec`]) and
//! moves those bytes to and from disk ([`file`]).

pub mod codec;
pub mod file;

pub use codec::{decode, encode, StorageFormat, FORMAT_VERSION, MAGIC};
