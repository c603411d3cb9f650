const FRACTION_DIGITS: usize = 10;
const FACTOR_SEPARATOR: &str = " × ";

/// Whole values print without a decimal point, anything else with a fixed
/// number of fractional digits.
pub fn format_number(value: f64) -> String {
    if value.floor() == value {
        format!("{:.0}", value)
    } else {
        format!("{:.*}", FRACTION_DIGITS, value)
    }
}

/// Renders factors joined by `×`. `unique` keeps the first occurrence of each
/// prime; `exponents` groups equal primes into `p^k`.
pub fn format_factors(factors: &[u64], unique: bool, exponents: bool) -> String {
    let mut factors = factors.to_vec();
    if unique {
        let mut seen = Vec::with_capacity(factors.len());
        factors.retain(|factor| {
            if seen.contains(factor) {
                false
            } else {
                seen.push(*factor);
                true
            }
        });
    }

    if !exponents {
        return factors.iter().map(u64::to_string).collect::<Vec<_>>().join(FACTOR_SEPARATOR);
    }

    factors.sort_unstable();
    let mut groups: Vec<(u64, usize)> = Vec::new();
    for factor in factors {
        match groups.last_mut() {
            Some((prime, count)) if *prime == factor => *count += 1,
            _ => groups.push((factor, 1)),
        }
    }
    groups
        .into_iter()
        .map(|(prime, count)| match count {
            1 => prime.to_string(),
            _ => format!("{}^{}", prime, count),
        })
        .collect::<Vec<_>>()
        .join(FACTOR_SEPARATOR)
}
