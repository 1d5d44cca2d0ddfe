use std::iter::FusedIterator;

use crate::{
    container::MagicalContainer,
    cursor::{self, sealed::Sealed, Cursor, MagicalIterator, Order},
};

/// Alternates between the smallest and the largest remaining element,
/// starting from the front: `[1, 2, 3, 4, 5]` is walked as `1, 5, 2, 4, 3`.
#[derive(Debug, Clone, Copy)]
pub struct SideCrossIterator<'a> {
    cursor: Cursor<'a>,
}

/// Storage index of logical position `pos` in a sequence of `len` elements
fn storage_index(pos: usize, len: usize) -> usize {
    if pos % 2 == 0 {
        pos / 2
    } else {
        len - 1 - pos / 2
    }
}

impl<'a> Sealed<'a> for SideCrossIterator<'a> {
    fn from_cursor(cursor: Cursor<'a>) -> Self {
        SideCrossIterator { cursor }
    }

    fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }
}

impl<'a> MagicalIterator<'a> for SideCrossIterator<'a> {
    const ORDER: Order = Order::SideCross;

    fn end_pos(container: &MagicalContainer) -> usize {
        container.len()
    }

    fn value_at(container: &MagicalContainer, pos: usize) -> Option<i32> {
        let elements = container.elements();
        if pos >= elements.len() {
            return None;
        }

        elements.get(storage_index(pos, elements.len())).copied()
    }
}

impl Iterator for SideCrossIterator<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        cursor::next_value(self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = cursor::remaining(self);
        (len, Some(len))
    }
}

impl ExactSizeIterator for SideCrossIterator<'_> {}
impl FusedIterator for SideCrossIterator<'_> {}
