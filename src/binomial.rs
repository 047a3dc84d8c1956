use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Exact binomial coefficient `C(n, k)`.
///
/// Returns `0` when `k > n` and `1` when `k == 0` or `k == n`. Uses the
/// `C(n, k) = C(n, n - k)` symmetry so the multiplicative loop runs
/// `min(k, n - k)` times. Each intermediate division is exact: after
/// multiplying by the `i`-th numerator factor the running product is
/// `C(n - k + i, i) * i`, which is divisible by `i`.
pub fn choose(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut result = BigUint::one();
    for i in 1..=k {
        result = result * (n - (k - i)) / i;
    }
    result
}

/// Largest value `v` such that `v < a` and `choose(v, b) <= x`.
///
/// For example, with `a = 8`, `b = 4` and `x = 7` the answer is `5`,
/// because `choose(5, 4) = 5 <= 7` while `choose(6, 4) = 15 > 7`.
///
/// Callers must guarantee that such a `v` exists (in particular
/// `x < choose(a, b)` with `b >= 1`); `choose(v, b)` is non-decreasing in
/// `v`, so the first hit scanning downward is the largest.
pub fn largest_v(a: usize, b: usize, x: &BigUint) -> usize {
    let mut v = a - 1;
    while choose(v, b) > *x {
        v -= 1;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::{choose, largest_v};
    use num_bigint::BigUint;
    use proptest::prelude::*;

    #[test]
    fn binomial_values() {
        assert_eq!(choose(0, 0), BigUint::from(1u32));
        assert_eq!(choose(5, 2), BigUint::from(10u32));
        assert_eq!(choose(5, 3), BigUint::from(10u32));
        assert_eq!(choose(5, 6), BigUint::from(0u32));
        assert_eq!(choose(7, 3), BigUint::from(35u32));
    }

    #[test]
    fn binomial_edges() {
        for n in 0..20 {
            assert_eq!(choose(n, 0), BigUint::from(1u32));
            assert_eq!(choose(n, n), BigUint::from(1u32));
        }
    }

    #[test]
    fn binomial_exceeds_fixed_width() {
        // C(68, 34) overflows u64.
        let expected: BigUint = "28453041475240576740".parse().unwrap();
        assert_eq!(choose(68, 34), expected);

        let expected: BigUint = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(choose(100, 50), expected);
    }

    #[test]
    fn largest_v_example() {
        assert_eq!(largest_v(8, 4, &BigUint::from(7u32)), 5);
    }

    #[test]
    fn largest_v_is_maximal() {
        let n = 12;
        for b in 1..=n {
            for x in 0u32..70 {
                let x = BigUint::from(x);
                if x >= choose(n, b) {
                    continue;
                }
                let v = largest_v(n, b, &x);
                assert!(choose(v, b) <= x);
                assert!(choose(v + 1, b) > x);
            }
        }
    }

    proptest! {
        #[test]
        fn binomial_symmetry(n in 0usize..80, k in 0usize..80) {
            prop_assume!(k <= n);
            prop_assert_eq!(choose(n, k), choose(n, n - k));
        }

        #[test]
        fn pascal_identity(n in 1usize..60, k in 1usize..60) {
            prop_assume!(k <= n);
            prop_assert_eq!(
                choose(n, k),
                choose(n - 1, k - 1) + choose(n - 1, k)
            );
        }
    }
}
