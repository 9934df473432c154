use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// `B_{2k} / (2k)!` for `k = 1..=count`, as exact rationals.
///
/// Uses the generating function `x / (e^x - 1) = Σ a_m x^m` with
/// `a_m = B_m / m!`, which gives `a_m = -Σ_{j<m} a_j / (m+1-j)!`.
/// Odd `a_m` vanish for `m ≥ 3` and are skipped.
pub fn scaled_even_bernoulli(count: usize) -> Vec<BigRational> {
    let max_m = 2 * count;

    // 1/i! for i in 0..=max_m+1
    let mut inverse_factorials = Vec::with_capacity(max_m + 2);
    let mut factorial = BigInt::one();
    inverse_factorials.push(BigRational::one());
    for i in 1..=(max_m + 1) {
        factorial *= BigInt::from(i);
        inverse_factorials.push(BigRational::new(BigInt::one(), factorial.clone()));
    }

    let mut a: Vec<BigRational> = Vec::with_capacity(max_m + 1);
    a.push(BigRational::one());
    for m in 1..=max_m {
        if m >= 3 && m % 2 == 1 {
            a.push(BigRational::zero());
            continue;
        }
        let mut acc = BigRational::zero();
        for j in 0..m {
            if j >= 3 && j % 2 == 1 {
                continue;
            }
            acc = acc + &a[j] * &inverse_factorials[m + 1 - j];
        }
        a.push(-acc);
    }

    (1..=count).map(|k| a[2 * k].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn first_coefficients() {
        let c = scaled_even_bernoulli(4);
        // B2/2! = 1/12, B4/4! = -1/720, B6/6! = 1/30240, B8/8! = -1/1209600
        assert_eq!(c[0], ratio(1, 12));
        assert_eq!(c[1], ratio(-1, 720));
        assert_eq!(c[2], ratio(1, 30240));
        assert_eq!(c[3], ratio(-1, 1_209_600));
    }

    #[test]
    fn signs_alternate() {
        let c = scaled_even_bernoulli(30);
        for (k, coefficient) in c.iter().enumerate() {
            let positive = *coefficient > BigRational::zero();
            assert_eq!(positive, k % 2 == 0, "sign of B_{}", 2 * (k + 1));
        }
    }

    #[test]
    fn empty_for_zero_count() {
        assert!(scaled_even_bernoulli(0).is_empty());
    }
}
