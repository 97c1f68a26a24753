// nom parser combinators
use nom::bytes::complete::take_till1;
use nom::character::complete::{self, space1};
use nom::combinator::{all_consuming, opt};
use nom::number::complete::double;
use nom::sequence::preceded;
use nom::IResult;

/// Kinds of line found in a `.par` file
#[derive(Debug, PartialEq)]
pub(crate) enum Line<'a> {
    Blank,
    Comment,
    Entry { key: &'a str, value: Option<&'a str> },
}

/// Classify a line, splitting entries into a key and the first value token
///
/// Anything after the first value is ignored, which conveniently drops
/// trailing comments.
pub(crate) fn line(i: &str) -> IResult<&str, Line> {
    let i = i.trim();
    if i.is_empty() {
        return Ok((i, Line::Blank));
    }
    if i.starts_with('#') {
        return Ok((i, Line::Comment));
    }

    let (i, key) = token(i)?;
    let (i, value) = opt(preceded(space1, token))(i)?;
    Ok((i, Line::Entry { key, value }))
}

/// Run of non-whitespace characters
fn token(i: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace())(i)
}

/// Unsigned integer that must make up the whole token
pub(crate) fn count(i: &str) -> IResult<&str, usize> {
    let (i, v) = all_consuming(complete::u64)(i)?;
    Ok((i, v as usize))
}

/// Double that must make up the whole token
pub(crate) fn float(i: &str) -> IResult<&str, f64> {
    all_consuming(double)(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(line(""), Ok(("", Line::Blank)));
        assert_eq!(line("   \t "), Ok(("", Line::Blank)));
        assert_eq!(line("# Nrad 12").unwrap().1, Line::Comment);
        assert_eq!(line("   ### banner").unwrap().1, Line::Comment);
    }

    #[test]
    fn test_entries() {
        assert_eq!(
            line("Nrad 128").unwrap().1,
            Line::Entry {
                key: "Nrad",
                value: Some("128")
            }
        );
        assert_eq!(
            line("  OutputDir\t\tout1/  # where to write").unwrap().1,
            Line::Entry {
                key: "OutputDir",
                value: Some("out1/")
            }
        );
        assert_eq!(
            line("Rmax").unwrap().1,
            Line::Entry {
                key: "Rmax",
                value: None
            }
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(count("384"), Ok(("", 384)));
        assert!(count("-4").is_err());
        assert!(count("12.5").is_err());
        assert!(count("12cells").is_err());
    }

    #[test]
    fn test_float() {
        assert_eq!(float("0.4"), Ok(("", 0.4)));
        assert_eq!(float("2.5e+00"), Ok(("", 2.5)));
        assert_eq!(float("3"), Ok(("", 3.0)));
        assert!(float("2.5au").is_err());
        assert!(float("big").is_err());
    }
}
