//! The address book collection and its page iterator.

pub mod address_book;
pub mod pages;

pub use address_book::AddressBook;
pub use pages::Pages;
