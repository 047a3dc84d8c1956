//! Combinatorial number system ("combinadics").
//!
//! A bijection between the integers `0 .. C(n,k)-1` and the `k`-element
//! strictly increasing subsets of `{0, ..., n-1}`, in lexicographic order:
//! rank `0` is `{0, ..., k-1}` and rank `C(n,k)-1` is `{n-k, ..., n-1}`.
//!
//! [`binomial::choose`] computes `C(n,k)` exactly over [`num_bigint::BigUint`],
//! so ranks never overflow. [`Combination`] holds a validated digit
//! sequence and offers [`rank`](Combination::rank),
//! [`unrank`](Combination::unrank) and the lexicographic
//! [`successor`](Combination::successor); all three are pure and return
//! fresh instances.
//!
//! ```
//! use combinadics::Combination;
//! use num_bigint::BigUint;
//!
//! let c = Combination::new(5, 3)?;
//! assert_eq!(c.to_string(), "{0 1 2}");
//! assert_eq!(c.successor().unwrap().to_string(), "{0 1 3}");
//! assert_eq!(c.unrank(&BigUint::from(3u32))?.to_string(), "{0 2 3}");
//! # Ok::<(), combinadics::CombinationError>(())
//! ```

pub mod binomial;
pub mod combination;

pub use combination::{Combination, CombinationError, Successors};
