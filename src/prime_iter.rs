use std::iter::FusedIterator;

use crate::{
    container::MagicalContainer,
    cursor::{self, sealed::Sealed, Cursor, MagicalIterator, Order},
};

/// Walks the prime elements in ascending order
#[derive(Debug, Clone, Copy)]
pub struct PrimeIterator<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Sealed<'a> for PrimeIterator<'a> {
    fn from_cursor(cursor: Cursor<'a>) -> Self {
        PrimeIterator { cursor }
    }

    fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }
}

impl<'a> MagicalIterator<'a> for PrimeIterator<'a> {
    const ORDER: Order = Order::Prime;

    fn end_pos(container: &MagicalContainer) -> usize {
        container.primes().len()
    }

    fn value_at(container: &MagicalContainer, pos: usize) -> Option<i32> {
        container.primes().get(pos).copied()
    }
}

impl Iterator for PrimeIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        cursor::next_value(self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = cursor::remaining(self);
        (len, Some(len))
    }
}

impl ExactSizeIterator for PrimeIterator<'_> {}
impl FusedIterator for PrimeIterator<'_> {}
