use std::cmp::Ordering;

use crate::{
    container::MagicalContainer,
    error::{Error, Mismatch, Result},
};

/// Which traversal an iterator follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Ascending,
    SideCross,
    Prime,
}

/// State shared by every iterator variant.
///
/// `pos` is the logical position inside the variant's own traversal, not a
/// storage index. The order isn't stored: it comes from the variant's type.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    pub(crate) container: &'a MagicalContainer,
    pub(crate) pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(container: &'a MagicalContainer, pos: usize) -> Self {
        Cursor { container, pos }
    }
}

pub(crate) mod sealed {
    use super::Cursor;

    /// Only the iterators of this crate can build or move a cursor
    pub trait Sealed<'a> {
        fn from_cursor(cursor: Cursor<'a>) -> Self;
        fn cursor(&self) -> &Cursor<'a>;
        fn cursor_mut(&mut self) -> &mut Cursor<'a>;
    }
}

fn check<'a, 'b, L, R>(left: &L, right: &R) -> Result<(), Mismatch>
where
    L: MagicalIterator<'a>,
    R: MagicalIterator<'b>,
{
    let mismatch = if L::ORDER != R::ORDER {
        Mismatch::Order
    } else if !std::ptr::eq(left.container(), right.container()) {
        Mismatch::Container
    } else {
        return Ok(());
    };

    tracing::debug!(
        left = ?L::ORDER,
        right = ?R::ORDER,
        %mismatch,
        "invalid iterator operation"
    );
    Err(mismatch)
}

/// The capability set shared by [crate::AscendingIterator],
/// [crate::SideCrossIterator] and [crate::PrimeIterator].
///
/// An iterator borrows its container, so the container can't change while the
/// iterator exists. Comparisons and assignment only work between iterators of
/// the same order over the same container instance; anything else is an
/// [Error::InvalidOperation].
///
/// The trait is sealed: positions can only come from [Self::new],
/// [Self::with_position], [Self::begin], [Self::end] and [Self::advance].
///
/// ```compile_fail
/// use magical_container::{AscendingIterator, MagicalContainer, MagicalIterator};
///
/// let container: MagicalContainer = (1..10).collect();
/// let forged = AscendingIterator::from_cursor(*container.prime().cursor());
/// ```
pub trait MagicalIterator<'a>: sealed::Sealed<'a> + Copy + Sized {
    const ORDER: Order;

    /// One past the last logical position
    fn end_pos(container: &MagicalContainer) -> usize;
    /// `None` at or past [Self::end_pos]
    fn value_at(container: &MagicalContainer, pos: usize) -> Option<i32>;

    fn new(container: &'a MagicalContainer) -> Self {
        Self::from_cursor(Cursor::new(container, 0))
    }

    fn with_position(container: &'a MagicalContainer, pos: usize) -> Result<Self> {
        if pos > Self::end_pos(container) {
            tracing::debug!(pos, order = ?Self::ORDER, "position past the end");
            return Err(Error::OutOfRange);
        }

        Ok(Self::from_cursor(Cursor::new(container, pos)))
    }

    fn begin(&self) -> Self {
        Self::new(self.container())
    }

    fn end(&self) -> Self {
        let container = self.container();
        Self::from_cursor(Cursor::new(container, Self::end_pos(container)))
    }

    fn pos(&self) -> usize {
        self.cursor().pos
    }

    fn order(&self) -> Order {
        Self::ORDER
    }

    fn container(&self) -> &'a MagicalContainer {
        self.cursor().container
    }

    fn is_end(&self) -> bool {
        self.pos() >= Self::end_pos(self.container())
    }

    /// The value at the current position
    fn get(&self) -> Result<i32> {
        Self::value_at(self.container(), self.pos()).ok_or(Error::OutOfRange)
    }

    /// Step to the next position. Never wraps.
    fn advance(&mut self) -> Result<&mut Self> {
        if self.is_end() {
            tracing::debug!(pos = self.pos(), order = ?Self::ORDER, "advance past the end");
            return Err(Error::OutOfRange);
        }

        self.cursor_mut().pos += 1;
        Ok(self)
    }

    /// Take the position of `other`
    fn assign<'b, O: MagicalIterator<'b>>(&mut self, other: &O) -> Result<()> {
        check(self, other)?;
        self.cursor_mut().pos = other.pos();
        Ok(())
    }

    /// Positions only, never the values behind them
    fn try_cmp<'b, O: MagicalIterator<'b>>(&self, other: &O) -> Result<Ordering> {
        check(self, other)?;
        Ok(self.pos().cmp(&other.pos()))
    }

    fn try_eq<'b, O: MagicalIterator<'b>>(&self, other: &O) -> Result<bool> {
        Ok(self.try_cmp(other)?.is_eq())
    }

    fn try_ne<'b, O: MagicalIterator<'b>>(&self, other: &O) -> Result<bool> {
        Ok(self.try_cmp(other)?.is_ne())
    }

    fn try_lt<'b, O: MagicalIterator<'b>>(&self, other: &O) -> Result<bool> {
        Ok(self.try_cmp(other)?.is_lt())
    }

    fn try_gt<'b, O: MagicalIterator<'b>>(&self, other: &O) -> Result<bool> {
        Ok(self.try_cmp(other)?.is_gt())
    }
}

/// Backs `Iterator::next` for every variant
pub(crate) fn next_value<'a, I: MagicalIterator<'a>>(iter: &mut I) -> Option<i32> {
    let value = I::value_at(iter.container(), iter.pos())?;
    iter.cursor_mut().pos += 1;
    Some(value)
}

pub(crate) fn remaining<'a, I: MagicalIterator<'a>>(iter: &I) -> usize {
    I::end_pos(iter.container()).saturating_sub(iter.pos())
}

#[cfg(test)]
mod cursor_test {
    use super::*;
    use crate::{AscendingIterator, PrimeIterator, SideCrossIterator};

    fn container() -> MagicalContainer {
        (0..6).collect()
    }

    #[test]
    fn different_orders_never_compare() {
        let container = container();
        let asc = AscendingIterator::new(&container);
        let cross = SideCrossIterator::new(&container);
        let prime = PrimeIterator::new(&container);
        let expected = Err(Error::InvalidOperation(Mismatch::Order));

        assert_eq!(asc.try_eq(&cross), expected);
        assert_eq!(asc.try_ne(&cross), expected);
        assert_eq!(asc.try_lt(&prime), expected);
        assert_eq!(asc.try_gt(&prime), expected);
        assert_eq!(cross.try_eq(&prime), expected);
        assert_eq!(
            prime.try_cmp(&asc).err(),
            Some(Error::InvalidOperation(Mismatch::Order))
        );
    }

    #[test]
    fn order_follows_the_type() {
        let container = container();
        let prime = PrimeIterator::new(&container).end();
        let mut asc = AscendingIterator::new(&container);
        assert_eq!(asc.order(), Order::Ascending);
        assert_eq!(prime.order(), Order::Prime);

        // same container and same position is still a different order
        let asc_at_prime_end = AscendingIterator::with_position(&container, prime.pos()).unwrap();
        assert_eq!(
            asc_at_prime_end.try_eq(&prime),
            Err(Error::InvalidOperation(Mismatch::Order))
        );
        assert_eq!(
            asc.assign(&prime),
            Err(Error::InvalidOperation(Mismatch::Order))
        );
        assert_eq!(asc.order(), Order::Ascending);
        assert_eq!(asc.pos(), 0);
        assert_eq!(asc.try_eq(&asc.begin()), Ok(true));
    }

    #[test]
    fn different_containers_never_compare() {
        let a = container();
        let b = a.clone();
        let expected = Err(Error::InvalidOperation(Mismatch::Container));

        let it_a = AscendingIterator::new(&a);
        let it_b = AscendingIterator::new(&b);
        assert_eq!(it_a.try_eq(&it_b), expected);
        assert_eq!(it_a.try_ne(&it_b), expected);
        assert_eq!(it_a.try_lt(&it_b), expected);
        assert_eq!(it_a.try_gt(&it_b), expected);

        let cross_a = SideCrossIterator::new(&a);
        let cross_b = SideCrossIterator::new(&b);
        assert_eq!(cross_a.try_eq(&cross_b), expected);
    }

    #[test]
    fn order_mismatch_is_reported_first() {
        let a = container();
        let b = a.clone();
        assert_eq!(
            AscendingIterator::new(&a).try_eq(&PrimeIterator::new(&b)),
            Err(Error::InvalidOperation(Mismatch::Order))
        );
    }

    #[test]
    fn assign() {
        let a = container();
        let b = a.clone();
        let mut it = AscendingIterator::new(&a);
        let end = it.end();
        it.assign(&end).unwrap();
        assert_eq!(it.try_eq(&end), Ok(true));

        assert_eq!(
            it.assign(&AscendingIterator::new(&b)),
            Err(Error::InvalidOperation(Mismatch::Container))
        );
        assert_eq!(
            it.assign(&SideCrossIterator::new(&a)),
            Err(Error::InvalidOperation(Mismatch::Order))
        );
        // failed assignment keeps the old position
        assert_eq!(it.pos(), 6);
    }

    #[test]
    fn with_position() {
        let container = container();
        let it = PrimeIterator::with_position(&container, 2).unwrap();
        assert_eq!(it.get(), Ok(5));
        assert!(PrimeIterator::with_position(&container, 3).unwrap().is_end());
        assert_eq!(
            PrimeIterator::with_position(&container, 4).err(),
            Some(Error::OutOfRange)
        );
        assert_eq!(
            AscendingIterator::with_position(&container, 7).err(),
            Some(Error::OutOfRange)
        );
    }

    #[test]
    fn dereference_at_end_fails() {
        let container = container();
        assert_eq!(AscendingIterator::new(&container).end().get(), Err(Error::OutOfRange));
        assert_eq!(SideCrossIterator::new(&container).end().get(), Err(Error::OutOfRange));
        assert_eq!(PrimeIterator::new(&container).end().get(), Err(Error::OutOfRange));
    }
}
