use crate::numeric::{mul_mod, pow_mod};

/// Witness set making Miller-Rabin deterministic for all 64-bit inputs
/// (valid up to 3.3e24; see miller-rabin.appspot.com). A trusted published
/// constant, not derived here.
const WITNESSES: [u64; 10] = [
    2, 3, 5, 7, 325, 9375, 28178, 450775, 9780504, 1795265022,
];

/// Deterministic Miller-Rabin primality test for u64.
///
/// Writes n - 1 = e * 2^c with e odd, then checks each witness w:
/// w^e must be 1, or some square w^(e*2^j) for j < c must be n - 1,
/// otherwise n is composite. Once n <= w every witness below n has
/// already passed, which is exactly the set's correctness boundary,
/// so n is prime.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n & 1 == 0 {
        return false;
    }

    let c = (n - 1).trailing_zeros();
    let e = (n - 1) >> c;

    'witness: for &w in &WITNESSES {
        if n <= w {
            return true;
        }
        let mut a = pow_mod(w, e, n);
        if a == 1 {
            continue;
        }
        // Square up to c - 1 times hunting for n - 1.
        for _ in 1..c {
            if a == n - 1 {
                continue 'witness;
            }
            a = mul_mod(a, a, n);
        }
        if a != n - 1 {
            return false;
        }
    }
    true
}
