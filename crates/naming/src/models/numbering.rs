use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// A volume or chapter number parsed from a filename.
///
/// Decimal chapters ("12.5" extras and omake releases) are kept as a single
/// token rather than being split into two numbers, so `"Series 12.5"` never
/// turns into chapter 12 plus a mystery trailing 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Numbering {
    /// A plain integer volume/chapter number.
    Whole(u32),
    /// A decimal number such as `12.5`, stored as (whole, fractional digits).
    Split(u32, u32),
}
impl Numbering {
    /// The integer part of the number.
    pub fn whole(self) -> u32 {
        match self {
            Self::Whole(n) | Self::Split(n, _) => n,
        }
    }

    fn sort_key(self) -> (u32, u32) {
        match self {
            Self::Whole(n) => (n, 0),
            Self::Split(n, f) => (n, f),
        }
    }
}
impl Ord for Numbering {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}
impl PartialOrd for Numbering {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Display for Numbering {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Whole(n) => write!(f, "{n}"),
            Self::Split(n, frac) => write!(f, "{n}.{frac}"),
        }
    }
}
impl From<u32> for Numbering {
    fn from(n: u32) -> Self {
        Self::Whole(n)
    }
}

/// The token was not a plain or dotted decimal number (or overflowed `u32`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNumbering;

impl FromStr for Numbering {
    type Err = InvalidNumbering;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('.') {
            None => Ok(Self::Whole(s.parse().map_err(|_| InvalidNumbering)?)),
            Some((whole, frac)) => Ok(Self::Split(
                whole.parse().map_err(|_| InvalidNumbering)?,
                frac.parse().map_err(|_| InvalidNumbering)?,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", Numbering::Whole(12))]
    #[case("03", Numbering::Whole(3))]
    #[case("12.5", Numbering::Split(12, 5))]
    #[case(" 7 ", Numbering::Whole(7))]
    fn test_parse(#[case] input: &str, #[case] expected: Numbering) {
        assert_eq!(input.parse::<Numbering>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("12.")]
    #[case(".5")]
    #[case("twelve")]
    #[case("99999999999999999999")]
    fn test_parse_rejects(#[case] input: &str) {
        assert!(input.parse::<Numbering>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Numbering::Whole(12) < Numbering::Split(12, 5));
        assert!(Numbering::Split(12, 5) < Numbering::Whole(13));
    }

    #[test]
    fn test_display() {
        assert_eq!(Numbering::Whole(3).to_string(), "3");
        assert_eq!(Numbering::Split(12, 5).to_string(), "12.5");
    }
}
