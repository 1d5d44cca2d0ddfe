//! A sorted container of integers with three ways to walk it:
//! ascending, side-cross (alternating smallest/largest) and prime-only.
//!
//! NOTE: iterators borrow the container, so any mutation requires every
//! outstanding iterator to be dropped first.
//!
//! ```
//! use magical_container::{MagicalContainer, MagicalIterator};
//!
//! let container: MagicalContainer = (1..10).collect();
//! let cross: Vec<i32> = container.side_cross().collect();
//! assert_eq!(cross, vec![1, 9, 2, 8, 3, 7, 4, 6, 5]);
//!
//! let mut it = container.prime();
//! it.advance().unwrap();
//! assert_eq!(it.get(), Ok(3));
//! ```
pub mod ascending;
pub mod container;
pub mod cursor;
pub mod error;
pub mod prime;
pub mod prime_iter;
pub mod side_cross;


pub use ascending::AscendingIterator;
pub use container::MagicalContainer;
pub use cursor::{MagicalIterator, Order};
pub use error::{Error, Mismatch, Result};
pub use prime::is_prime;
pub use prime_iter::PrimeIterator;
pub use side_cross::SideCrossIterator;
