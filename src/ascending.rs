use std::iter::FusedIterator;

use crate::{
    container::MagicalContainer,
    cursor::{self, sealed::Sealed, Cursor, MagicalIterator, Order},
};

/// Walks the elements from the smallest to the largest
#[derive(Debug, Clone, Copy)]
pub struct AscendingIterator<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Sealed<'a> for AscendingIterator<'a> {
    fn from_cursor(cursor: Cursor<'a>) -> Self {
        AscendingIterator { cursor }
    }

    fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }
}

impl<'a> MagicalIterator<'a> for AscendingIterator<'a> {
    const ORDER: Order = Order::Ascending;

    fn end_pos(container: &MagicalContainer) -> usize {
        container.len()
    }

    fn value_at(container: &MagicalContainer, pos: usize) -> Option<i32> {
        container.elements().get(pos).copied()
    }
}

impl Iterator for AscendingIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        cursor::next_value(self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = cursor::remaining(self);
        (len, Some(len))
    }
}

impl ExactSizeIterator for AscendingIterator<'_> {}
impl FusedIterator for AscendingIterator<'_> {}
