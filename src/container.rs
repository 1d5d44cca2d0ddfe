use crate::{
    ascending::AscendingIterator,
    cursor::MagicalIterator,
    error::{Error, Result},
    prime::is_prime,
    prime_iter::PrimeIterator,
    side_cross::SideCrossIterator,
};

/// A sorted bag of integers.
///
/// `elements` is kept in ascending order and `primes` is always the ascending
/// subsequence of `elements` whose values are prime. Both move together on
/// every mutation.
///
/// Iterators borrow the container, so it can't be mutated while any iterator
/// over it is alive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MagicalContainer {
    elements: Vec<i32>,
    primes: Vec<i32>,
}

impl MagicalContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the lower bound of `value`, so a new duplicate lands before
    /// the equal values already stored.
    pub fn add_element(&mut self, value: i32) {
        let pos = self.elements.partition_point(|&x| x < value);
        self.elements.insert(pos, value);

        if is_prime(value) {
            let prime_pos = self.primes.partition_point(|&x| x < value);
            self.primes.insert(prime_pos, value);
        }

        tracing::trace!(
            value,
            len = self.elements.len(),
            primes = self.primes.len(),
            "add element"
        );
    }

    /// Remove the first element equal to `value`.
    pub fn remove_element(&mut self, value: i32) -> Result<()> {
        let Some(pos) = self.elements.iter().position(|&x| x == value) else {
            tracing::debug!(value, "remove missing element");
            return Err(Error::NotFound(value));
        };

        self.elements.remove(pos);
        if is_prime(value) {
            let prime_pos = self.primes.binary_search(&value);
            debug_assert!(prime_pos.is_ok(), "prime {value} missing from primes");
            if let Ok(prime_pos) = prime_pos {
                self.primes.remove(prime_pos);
            }
        }

        tracing::trace!(
            value,
            len = self.elements.len(),
            primes = self.primes.len(),
            "remove element"
        );
        Ok(())
    }

    /// Same as [Self::len]
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.elements.binary_search(&value).is_ok()
    }

    /// All elements in ascending order
    pub fn elements(&self) -> &[i32] {
        &self.elements
    }

    /// The prime elements in ascending order
    pub fn primes(&self) -> &[i32] {
        &self.primes
    }

    pub fn ascending(&self) -> AscendingIterator<'_> {
        AscendingIterator::new(self)
    }

    pub fn side_cross(&self) -> SideCrossIterator<'_> {
        SideCrossIterator::new(self)
    }

    pub fn prime(&self) -> PrimeIterator<'_> {
        PrimeIterator::new(self)
    }
}

impl Extend<i32> for MagicalContainer {
    fn extend<T: IntoIterator<Item = i32>>(&mut self, iter: T) {
        for value in iter {
            self.add_element(value);
        }
    }
}

impl FromIterator<i32> for MagicalContainer {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        let mut container = MagicalContainer::new();
        container.extend(iter);
        container
    }
}
