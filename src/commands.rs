use crate::error_handling::*;
use crate::formatting::format_factors;
use crate::number_theory::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub factorize: bool,
    pub unique: bool,
    pub exponents: bool,
}

impl Flags {
    pub fn parse(flags: &str) -> Self {
        Self {
            factorize: flags.contains('f'),
            unique: flags.contains('p'),
            exponents: flags.contains('e'),
        }
    }

    // 0 and 1 have no prime factors and stand for themselves
    fn factors_of(&self, value: u64) -> String {
        let factors = factorize(value);
        if factors.is_empty() {
            value.to_string()
        } else {
            format_factors(&factors, self.unique, self.exponents)
        }
    }
}

pub struct Command {
    pub name: &'static str,
    run: fn(&[i64], Flags) -> Result<Vec<String>>,
}

pub const COMMANDS: &[Command] = &[
    Command{name: "gcm", run: greatest_common_measure},
    Command{name: "lcm", run: least_common_multiple},
    Command{name: "fact", run: factorization},
];

fn greatest_common_measure(numbers: &[i64], flags: Flags) -> Result<Vec<String>> {
    let result = numbers.iter().fold(0, |acc, n| gcd(acc, n.unsigned_abs()));
    if flags.factorize {
        Ok(vec![format!("gcm = {} → {}", result, flags.factors_of(result))])
    } else {
        Ok(vec![result.to_string()])
    }
}

fn least_common_multiple(numbers: &[i64], flags: Flags) -> Result<Vec<String>> {
    let (first, rest) = numbers.split_first().ok_or(CalcError::missing_integers)?;
    let mut result = first.unsigned_abs();
    for n in rest {
        result = lcm(result, n.unsigned_abs())
            .ok_or_else(|| CalcError::overflow("lcm".into()))?;
    }
    if flags.factorize {
        Ok(vec![format!("lcm = {} → {}", result, flags.factors_of(result))])
    } else {
        Ok(vec![result.to_string()])
    }
}

fn factorization(numbers: &[i64], flags: Flags) -> Result<Vec<String>> {
    Ok(numbers
        .iter()
        .map(|n| format!("{} → {}", n, flags.factors_of(n.unsigned_abs())))
        .collect())
}

pub fn names() -> Vec<&'static str> {
    COMMANDS.iter().map(|command| command.name).collect()
}

pub fn find(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Runs the line as a command when its first word names one, returning the
/// output lines. `None` means the line is not a command.
pub fn dispatch(line: &str) -> Option<Result<Vec<String>>> {
    let mut words = line.split_whitespace();
    let head = words.next()?;
    let (name, flags) = head.split_once('%').unwrap_or((head, ""));
    let command = find(name)?;

    let numbers: Vec<i64> = words
        .filter_map(|word| match word.parse() {
            Ok(n) => Some(n),
            Err(_) => {
                log::warn!("{}: ignoring non-integer argument '{}'", name, word);
                None
            },
        })
        .collect();
    log::debug!("command {} with flags '{}' on {:?}", name, flags, numbers);

    if numbers.is_empty() {
        return Some(Err(CalcError::missing_integers));
    }
    Some((command.run)(&numbers, Flags::parse(flags)))
}
