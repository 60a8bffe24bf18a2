//! Paginated iteration over an address book.

use crate::models::Record;
use std::iter::FusedIterator;
use std::slice::Chunks;

/// Iterator over consecutive pages of records in insertion order.
///
/// Created by [`AddressBook::iterator`](crate::AddressBook::iterator). Every
/// page except possibly the last holds exactly `page_size` records.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: Chunks<'a, Record>,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: &'a [Record], page_size: usize) -> Self {
        Self {
            chunks: records.chunks(page_size),
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
