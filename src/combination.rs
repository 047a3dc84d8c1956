use crate::binomial::{choose, largest_v};
use num_bigint::BigUint;
use num_traits::One;
use std::fmt;

/// A `k`-element combination of `{0, ..., n-1}`, stored as its strictly
/// increasing digit sequence.
///
/// Every instance satisfies the invariant checked by [`Combination::is_valid`]:
/// exactly `k` digits, each in `[0, n-1]`, in strictly ascending order.
/// Construction validates, and [`Combination::successor`] and
/// [`Combination::unrank`] only ever produce fresh valid instances, so an
/// invalid combination cannot be observed.
///
/// Comparing digit sequences in dictionary order reproduces the rank order:
/// rank `0` is `{0, ..., k-1}` and rank `C(n,k) - 1` is `{n-k, ..., n-1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    n: usize,
    k: usize,
    data: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombinationError {
    /// The supplied digit sequence does not have exactly `k` entries.
    #[error("digit sequence has length {len}, expected k = {k}")]
    LengthMismatch { len: usize, k: usize },
    /// A digit is outside `[0, n-1]` or the sequence is not strictly
    /// increasing. Any `k > n` request ends here: no valid sequence of
    /// `k` distinct digits below `n` exists.
    #[error("digit sequence is not strictly increasing within 0..{n}")]
    InvalidCombination { n: usize },
    /// The unrank target is outside `[0, C(n,k) - 1]`.
    #[error("rank {rank} is out of range for {total} combinations")]
    RankOutOfRange { rank: BigUint, total: BigUint },
}

impl Combination {
    /// The rank-0 combination `{0, 1, ..., k-1}` of `{0, ..., n-1}`.
    ///
    /// # Errors
    /// Fails with [`CombinationError::InvalidCombination`] when `k > n`.
    pub fn new(n: usize, k: usize) -> Result<Self, CombinationError> {
        Self::from_digits(n, k, (0..k).collect())
    }

    /// Build a combination from caller-supplied digits.
    ///
    /// # Errors
    /// Fails with [`CombinationError::LengthMismatch`] when `digits` does
    /// not have exactly `k` entries, and with
    /// [`CombinationError::InvalidCombination`] when the sequence violates
    /// the range or strict-ascending invariant.
    pub fn from_digits(
        n: usize,
        k: usize,
        digits: Vec<usize>,
    ) -> Result<Self, CombinationError> {
        if digits.len() != k {
            return Err(CombinationError::LengthMismatch {
                len: digits.len(),
                k,
            });
        }
        let combination = Self { n, k, data: digits };
        if !combination.is_valid() {
            return Err(CombinationError::InvalidCombination { n });
        }
        Ok(combination)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn digits(&self) -> &[usize] {
        &self.data
    }

    /// Check the combination invariant: `k` digits, each below `n`,
    /// strictly increasing.
    pub fn is_valid(&self) -> bool {
        self.data.len() == self.k
            && self.data.iter().all(|&d| d < self.n)
            && self.data.windows(2).all(|w| w[0] < w[1])
    }

    /// The lexicographically next combination, or `None` if this is the
    /// last one.
    ///
    /// The maximal combination `{n-k, ..., n-1}` is the only one whose
    /// first digit is `n - k`; the empty combination (`k == 0`) is its own
    /// single element with nothing after it.
    pub fn successor(&self) -> Option<Self> {
        if self.k == 0 || self.data[0] == self.n - self.k {
            return None;
        }

        let mut data = self.data.clone();

        // Walk left past the saturated tail: digit i cannot grow once it
        // holds n - k + i, the largest value leaving room for the digits
        // to its right.
        let mut i = self.k - 1;
        while i > 0 && data[i] == self.n - self.k + i {
            i -= 1;
        }

        data[i] += 1;
        for j in i..self.k - 1 {
            data[j + 1] = data[j] + 1;
        }

        let next = Self {
            n: self.n,
            k: self.k,
            data,
        };
        debug_assert!(next.is_valid());
        Some(next)
    }

    /// The combination at lexicographic position `rank` for this `(n, k)`.
    ///
    /// Works in the dual space: with `x = C(n,k) - 1 - rank`, each loop
    /// step peels off the largest `v` whose `C(v, b)` still fits in `x`,
    /// and the complement `n - 1 - v` is the next output digit.
    ///
    /// # Errors
    /// Fails with [`CombinationError::RankOutOfRange`] when
    /// `rank >= C(n,k)`.
    pub fn unrank(&self, rank: &BigUint) -> Result<Self, CombinationError> {
        let total = choose(self.n, self.k);
        if *rank >= total {
            return Err(CombinationError::RankOutOfRange {
                rank: rank.clone(),
                total,
            });
        }

        let mut x = total - BigUint::one() - rank;
        let mut a = self.n;
        let mut b = self.k;
        let mut data = Vec::with_capacity(self.k);

        for _ in 0..self.k {
            let v = largest_v(a, b, &x);
            x -= choose(v, b);
            a = v;
            b -= 1;
            data.push(self.n - 1 - v);
        }

        let combination = Self {
            n: self.n,
            k: self.k,
            data,
        };
        debug_assert!(combination.is_valid());
        Ok(combination)
    }

    /// The 0-based lexicographic position of this combination.
    ///
    /// Exact inverse of [`Combination::unrank`]: summing `C(n-1-d, k-i)`
    /// over the digits `d` gives the dual index, and the rank is its
    /// complement within `C(n,k) - 1`.
    pub fn rank(&self) -> BigUint {
        let mut x = BigUint::ZERO;
        for (i, &d) in self.data.iter().enumerate() {
            x += choose(self.n - 1 - d, self.k - i);
        }
        choose(self.n, self.k) - BigUint::one() - x
    }

    /// Iterate from this combination through every lexicographic
    /// successor, one at a time.
    pub fn iter(&self) -> Successors {
        Successors {
            next: Some(self.clone()),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, d) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "}}")
    }
}

/// Lazy walk over combinations in lexicographic order, produced by
/// [`Combination::iter`]. Yields the starting combination first and ends
/// after the maximal one.
pub struct Successors {
    next: Option<Combination>,
}

impl Iterator for Successors {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let current = self.next.take()?;
        self.next = current.successor();
        Some(current)
    }
}
