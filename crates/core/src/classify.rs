use serde::{Deserialize, Serialize};

/// Successful classification of a numeric input
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Classification {
    pub number: f64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<String>,
    pub digit_sum: u32,
    pub fun_fact: String,
}

/// Error body for missing or unparsable input
///
/// The `number` field echoes the raw text the client sent (empty string when
/// the parameter was absent entirely), and `error` is always `true` on the
/// wire.
#[derive(thiserror::Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
#[error("not a valid base-10 number: {number:?}")]
pub struct ClassificationError {
    pub number: String,
    pub error: bool,
}

impl ClassificationError {
    pub fn for_input(raw: &str) -> Self {
        Self {
            number: raw.to_string(),
            error: true,
        }
    }
}

/// Parse a raw query value into a numeric input
///
/// Accepts any base-10 numeral `f64::from_str` understands, including
/// negative and fractional values. An empty string (the shape a missing
/// query parameter arrives in) and anything unparsable both fail with an
/// error carrying the raw text.
pub fn parse_number(raw: &str) -> Result<f64, ClassificationError> {
    if raw.is_empty() {
        return Err(ClassificationError::for_input(raw));
    }
    raw.parse::<f64>()
        .map_err(|_| ClassificationError::for_input(raw))
}

/// Trial-division primality over the truncated input
///
/// False for n < 2, otherwise scans divisors up to floor(sqrt(n)). Callers
/// pass the float input truncated toward zero, so negative and fractional
/// inputs land here as their truncation; they simply fall out of the n < 2
/// guard.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let limit = (n as f64).sqrt() as i64;
    for i in 2..=limit {
        if n % i == 0 {
            return false;
        }
    }
    true
}

/// Whether n equals the sum of its proper divisors
///
/// The sum starts at 1 (every n has the trivial divisor), then each divisor
/// pair (i, n/i) up to floor(sqrt(n)) contributes once per member. n = 1 is
/// rejected explicitly; for n <= 0 the loop bound is 0 and the sum stays 1.
pub fn is_perfect(n: i64) -> bool {
    let mut sum = 1;
    let limit = (n as f64).sqrt() as i64;
    for i in 2..=limit {
        if n % i == 0 {
            sum += i;
            if i != n / i {
                sum += n / i;
            }
        }
    }
    sum == n && n != 1
}

/// Whether n equals the sum of its digits raised to the digit count
///
/// Both loops run on the value itself, not its magnitude: negative n skips
/// them and fails the final comparison. n = 0 counts zero digits and sums to
/// 0, so 0 qualifies; that is the contract, not an accident.
pub fn is_armstrong(n: i64) -> bool {
    let mut digits = 0i32;
    let mut temp = n;
    while temp > 0 {
        digits += 1;
        temp /= 10;
    }

    let mut sum = 0;
    temp = n;
    while temp > 0 {
        sum += ((temp % 10) as f64).powi(digits) as i64;
        temp /= 10;
    }

    sum == n
}

/// Sum of the decimal digits of n's magnitude
pub fn digit_sum(n: i64) -> u32 {
    let mut m = n.unsigned_abs();
    let mut sum = 0;
    while m > 0 {
        sum += (m % 10) as u32;
        m /= 10;
    }
    sum
}

/// Build the ordered property list for a numeric input
///
/// Exactly one parity tag always comes first, computed from the truncated
/// value even when the input was fractional. "armstrong" is appended only
/// when the input was integer-valued (equal to its own truncation) and the
/// Armstrong predicate holds. No other tags exist.
pub fn properties(n: f64) -> Vec<String> {
    let t = n as i64;
    let mut props = vec![if t % 2 != 0 { "odd" } else { "even" }.to_string()];
    if n == t as f64 && is_armstrong(t) {
        props.push("armstrong".to_string());
    }
    props
}

/// Assemble the full classification for a parsed input
///
/// Truncation toward zero happens once here; every integer predicate sees
/// the same truncated value. The fun fact is supplied by the caller because
/// fetching it is I/O and this crate does none.
pub fn classify(n: f64, fun_fact: String) -> Classification {
    let t = n as i64;
    Classification {
        number: n,
        is_prime: is_prime(t),
        is_perfect: is_perfect(t),
        properties: properties(n),
        digit_sum: digit_sum(t),
        fun_fact,
    }
}
