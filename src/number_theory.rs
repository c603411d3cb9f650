// Callers pass magnitudes (`i64::unsigned_abs`), so `i64::MIN` stays representable.

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// `None` when the multiple does not fit in a `u64`.
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Prime factors in ascending order, repeated by multiplicity.
pub fn factorize(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n == 0 {
        return factors;
    }
    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }
    let mut p = 3u64;
    while p <= n / p {
        while n % p == 0 {
            factors.push(p);
            n /= p;
        }
        p += 2;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}
