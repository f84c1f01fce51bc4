//! Integer factorization via Pollard's rho with Brent-style batched
//! cycle detection. Primality is settled by the deterministic
//! Miller-Rabin test, so rho only ever runs on known composites.

use rand::Rng;

use crate::numeric::{add_mod, gcd, mul_mod};
use crate::prime::is_prime;

/// Find one non-trivial divisor of n, expected O(n^0.25) operations.
/// Returns n itself when no split is needed (n <= 3 or n prime).
///
/// Each trial walks x <- (c + x^2) mod n from a random start with a random
/// additive constant c (nudged off the degenerate values 0 and n - 2),
/// doubling the stride between re-anchors of the trailing pointer y. A
/// proper divisor shows up as gcd(n - x + y, n); if instead x meets y the
/// cycle closed without a split and the trial restarts with fresh
/// randomness. No deterministic bound, but the birthday paradox keeps the
/// expected number of steps near n^0.25.
pub fn pollard_rho_with<R: Rng>(n: u64, rng: &mut R) -> u64 {
    if n <= 3 || is_prime(n) {
        return n;
    }
    loop {
        let mut step: u64 = 1;
        let mut stride: u64 = 2;
        let mut x = rng.random_range(0..n);
        let mut y = x;
        let mut c = rng.random_range(0..n);
        if c == 0 || c == n - 2 {
            c += 1;
        }
        loop {
            // x, y < n, so n - x + y stays in [1, 2n) and gcd reduces it.
            let d = gcd(n - x + y, n);
            if d > 1 && d < n {
                return d;
            }
            step += 1;
            if step == stride {
                y = x;
                stride <<= 1;
            }
            x = add_mod(c, mul_mod(x, x, n), n);
            if x == y {
                break; // cycle closed without a split; retry
            }
        }
    }
}

/// Fully factor n into primes, sorted ascending, one entry per multiplicity.
///
/// Worklist driver: each entry is either prime (rho hands it back
/// unchanged, move on) or splits into a quotient, updated in place and
/// re-examined, and a divisor pushed for later. Depth is bounded by the
/// number of prime factors, at most 63 for u64.
pub fn factorize_with<R: Rng>(n: u64, rng: &mut R) -> Vec<u64> {
    let mut work: Vec<u64> = Vec::new();
    if n > 1 {
        work.push(n);
    }
    let mut i = 0;
    while i < work.len() {
        let d = pollard_rho_with(work[i], rng);
        if d == work[i] {
            i += 1;
            continue;
        }
        work[i] /= d;
        work.push(d);
    }
    work.sort_unstable();
    work
}

/// Group a sorted factor list into (prime, exponent) pairs,
/// primes strictly increasing, exponents >= 1.
pub fn group_exponents(factors: &[u64]) -> Vec<(u64, u32)> {
    let mut grouped: Vec<(u64, u32)> = Vec::new();
    for &p in factors {
        if let Some((q, e)) = grouped.last_mut() {
            if *q == p {
                *e += 1;
                continue;
            }
        }
        grouped.push((p, 1));
    }
    grouped
}

/// `pollard_rho_with` on the OS-seeded thread RNG.
pub fn pollard_rho(n: u64) -> u64 {
    pollard_rho_with(n, &mut rand::rng())
}

/// `factorize_with` on the OS-seeded thread RNG.
pub fn factorize(n: u64) -> Vec<u64> {
    factorize_with(n, &mut rand::rng())
}
