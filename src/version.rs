//! Dotted numeric version strings and their ordering.
//!
//! A version is a sequence of non-negative integer components. Missing
//! trailing components count as zero, so `1.2`, `1.2.0` and `01.02` are
//! all equal.

use crate::error::{InsightError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Default component separator.
pub const DEFAULT_SEPARATOR: char = '.';

/// A parsed version.
///
/// Equality and ordering ignore trailing zero components.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Parse `raw` using `separator` between components.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::InvalidVersion`] if any component is empty,
    /// contains anything but ASCII digits (signs included), or does not fit
    /// in a `u64`.
    pub fn parse_with_separator(raw: &str, separator: char) -> Result<Self> {
        let components = raw
            .split(separator)
            .map(|token| parse_component(token, raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { components })
    }

    /// The components as written, including trailing zeros.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// The component at `index`, zero when the version is shorter.
    pub fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

fn parse_component(token: &str, raw: &str) -> Result<u64> {
    if token.is_empty() {
        return Err(InsightError::InvalidVersion(format!(
            "empty component in {raw:?}"
        )));
    }
    if token.starts_with('-') {
        return Err(InsightError::InvalidVersion(format!(
            "negative component {token:?} in {raw:?}"
        )));
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InsightError::InvalidVersion(format!(
            "non-numeric component {token:?} in {raw:?}"
        )));
    }
    token.parse::<u64>().map_err(|_| {
        InsightError::InvalidVersion(format!("component {token:?} in {raw:?} is too large"))
    })
}

impl FromStr for Version {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with_separator(s, DEFAULT_SEPARATOR)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

/// Compare two dot-separated version strings.
///
/// # Errors
///
/// Returns [`InsightError::InvalidVersion`] if either string is malformed.
pub fn compare(v1: &str, v2: &str) -> Result<Ordering> {
    compare_with_separators(v1, DEFAULT_SEPARATOR, v2, DEFAULT_SEPARATOR)
}

/// Compare two version strings that may use different separators,
/// e.g. `"5,5"` against `"9.2"`.
///
/// # Errors
///
/// Returns [`InsightError::InvalidVersion`] if either string is malformed.
pub fn compare_with_separators(v1: &str, sep1: char, v2: &str, sep2: char) -> Result<Ordering> {
    let a = Version::parse_with_separator(v1, sep1)?;
    let b = Version::parse_with_separator(v2, sep2)?;
    Ok(a.cmp(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering::{Equal, Greater, Less};

    fn cmp(a: &str, b: &str) -> Ordering {
        compare(a, b).expect("valid versions")
    }

    #[test]
    fn equal_versions() {
        assert_eq!(cmp("1.0.0", "1.0.0"), Equal);
        assert_eq!(cmp("5.00.21", "05.00.021"), Equal);
        assert_eq!(cmp("2.0.1", "02.00.01"), Equal);
    }

    #[test]
    fn missing_components_are_zero() {
        assert_eq!(cmp("1.2", "1.2.0"), Equal);
        assert_eq!(cmp("1.2.0.0", "1.2"), Equal);
        assert_eq!(cmp("1", "1.0.0.0"), Equal);
    }

    #[test]
    fn leading_zeros_ignored() {
        assert_eq!(cmp("1.02", "1.2"), Equal);
    }

    #[test]
    fn numeric_not_lexical_ordering() {
        assert_eq!(cmp("1.9.0", "1.10.0"), Less);
        assert_eq!(cmp("0.0.100", "0.0.021"), Greater);
    }

    #[test]
    fn first_difference_decides() {
        assert_eq!(cmp("2.0", "1.9.9"), Greater);
        assert_eq!(cmp("2.0.1", "3.9.1"), Less);
        assert_eq!(cmp("0.10", "0.0.0.5"), Greater);
        assert_eq!(cmp("00.25.32.9", "0.25"), Greater);
        assert_eq!(cmp("00.025.32.9", "0.25.32.09.1"), Less);
    }

    #[test]
    fn single_components() {
        assert_eq!(cmp("7", "7"), Equal);
        assert_eq!(cmp("7", "10"), Less);
        assert_eq!(cmp("10", "7"), Greater);
    }

    #[test]
    fn custom_separators() {
        assert_eq!(
            compare_with_separators("5,5", ',', "5,2", ',').expect("valid"),
            Greater
        );
        assert_eq!(
            compare_with_separators("5,5", ',', "9.2", '.').expect("valid"),
            Less
        );
        assert_eq!(
            compare_with_separators("2;1;0", ';', "1;9;5", ';').expect("valid"),
            Greater
        );
    }

    #[test]
    fn negative_components_rejected() {
        let err = compare("-2.0", "5.1.0").unwrap_err();
        assert!(matches!(err, InsightError::InvalidVersion(_)));
        assert!(err.to_string().contains("negative"));
        assert!(compare("2.0.55", "5.1.0.-9").is_err());
    }

    #[test]
    fn malformed_components_rejected() {
        let malformed = [
            "", "1..2", "1.2.", ".1", "1.a", "1.+2", "1. 2", "v1.0", "1.99999999999999999999",
        ];
        for bad in malformed {
            assert!(
                matches!(Version::from_str(bad), Err(InsightError::InvalidVersion(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn wrong_separator_is_non_numeric() {
        assert!(compare("5,5", "5.5").is_err());
    }

    #[test]
    fn version_equality_ignores_trailing_zeros() {
        let a: Version = "1.2".parse().expect("valid");
        let b: Version = "1.2.0".parse().expect("valid");
        assert_eq!(a, b);
        assert_eq!(a.components(), &[1, 2]);
        assert_eq!(b.component(5), 0);
    }

    #[test]
    fn display_drops_leading_zeros() {
        let v: Version = "01.002.0".parse().expect("valid");
        assert_eq!(v.to_string(), "1.2.0");
    }

    #[test]
    fn sorting_versions() {
        let mut versions: Vec<Version> = ["1.10", "1.2", "1.9.9", "0.1", "1.2.1"]
            .iter()
            .map(|s| s.parse().expect("valid"))
            .collect();
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(Version::to_string).collect();
        assert_eq!(sorted, vec!["0.1", "1.2", "1.2.1", "1.9.9", "1.10"]);
    }

    #[test]
    fn ordering_is_transitive_and_antisymmetric() {
        let samples = [
            "0", "0.1", "0.0.1", "1", "1.0", "1.0.1", "1.1", "1.9", "1.10", "1.10.0", "2",
            "2.0.0.1", "10",
        ];
        for a in samples {
            for b in samples {
                assert_eq!(cmp(a, b), cmp(b, a).reverse(), "{a} vs {b}");
                for c in samples {
                    if cmp(a, b) == Less && cmp(b, c) == Less {
                        assert_eq!(cmp(a, c), Less, "{a} < {b} < {c}");
                    }
                    if cmp(a, b) == Equal && cmp(b, c) == Equal {
                        assert_eq!(cmp(a, c), Equal, "{a} = {b} = {c}");
                    }
                }
            }
        }
    }
}
