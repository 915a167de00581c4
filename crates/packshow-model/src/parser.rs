use std::collections::BTreeSet;

use thiserror::Error;

use crate::photo::{Orientation, Photo};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Input is empty")]
    EmptyInput,
    #[error("Invalid photo count: {0}")]
    InvalidCount(String),
    #[error("Expected {expected} photos, found {found}")]
    MissingPhotos { expected: usize, found: usize },
    #[error("Line {line}: missing orientation")]
    MissingOrientation { line: usize },
    #[error("Line {line}: unknown orientation '{found}'")]
    UnknownOrientation { line: usize, found: String },
    #[error("Line {line}: missing tag count")]
    MissingTagCount { line: usize },
    #[error("Line {line}: invalid tag count: {found}")]
    InvalidTagCount { line: usize, found: String },
}

/// Parser for photo collection files.
///
/// Format: line 1 is the photo count `N`; each of the next `N` lines is
/// `<"H"|"V"> <tagCount> <tag1> <tag2> ...`. Photo ids are assigned by
/// input position, starting at 0.
pub struct Parser;

impl Parser {
    pub fn parse(source: &str) -> Result<Vec<Photo>, ParseError> {
        let mut lines = source.lines();
        let header = lines.next().ok_or(ParseError::EmptyInput)?;
        let count: usize = header
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidCount(header.trim().to_string()))?;

        let mut photos = Vec::with_capacity(count);
        for id in 0..count {
            // Photos start on file line 2
            let line_no = id + 2;
            let line = lines.next().ok_or(ParseError::MissingPhotos {
                expected: count,
                found: id,
            })?;
            photos.push(Self::parse_photo(id, line_no, line)?);
        }
        Ok(photos)
    }

    fn parse_photo(id: usize, line_no: usize, line: &str) -> Result<Photo, ParseError> {
        let mut tokens = line.split_whitespace();

        let orientation = match tokens.next() {
            Some("H") => Orientation::Horizontal,
            Some("V") => Orientation::Vertical,
            Some(other) => {
                return Err(ParseError::UnknownOrientation {
                    line: line_no,
                    found: other.to_string(),
                });
            }
            None => return Err(ParseError::MissingOrientation { line: line_no }),
        };

        let declared = tokens.next().ok_or(ParseError::MissingTagCount { line: line_no })?;
        let _: usize = declared.parse().map_err(|_| ParseError::InvalidTagCount {
            line: line_no,
            found: declared.to_string(),
        })?;

        // The tags are whatever follows the count field; the declared
        // count is checked for shape but not enforced against the list.
        let tags: BTreeSet<String> = tokens.map(str::to_string).collect();

        Ok(Photo::new(id, orientation, tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collection() {
        let source = "3\nH 2 a b\nV 1 c\nV 1 d\n";
        let photos = Parser::parse(source).unwrap();

        assert_eq!(photos.len(), 3);
        assert_eq!(photos[0].id, 0);
        assert_eq!(photos[0].orientation, Orientation::Horizontal);
        let ab: BTreeSet<String> = ["a", "b"].iter().map(|t| t.to_string()).collect();
        assert_eq!(photos[0].tags, ab);
        assert_eq!(photos[1].orientation, Orientation::Vertical);
        assert_eq!(photos[2].orientation, Orientation::Vertical);
        assert_eq!(photos[2].id, 2);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(Parser::parse(""), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_zero_photos() {
        assert_eq!(Parser::parse("0\n"), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_bad_count() {
        assert_eq!(
            Parser::parse("three\nH 1 a\n"),
            Err(ParseError::InvalidCount("three".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_photo_line() {
        assert_eq!(
            Parser::parse("2\nH 1 a\n"),
            Err(ParseError::MissingPhotos {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_parse_unknown_orientation() {
        assert_eq!(
            Parser::parse("1\nX 1 a\n"),
            Err(ParseError::UnknownOrientation {
                line: 2,
                found: "X".to_string()
            })
        );
    }

    #[test]
    fn test_parse_invalid_tag_count() {
        assert_eq!(
            Parser::parse("1\nH many a\n"),
            Err(ParseError::InvalidTagCount {
                line: 2,
                found: "many".to_string()
            })
        );
    }

    #[test]
    fn test_tag_count_is_not_enforced() {
        // The count field is shape-checked only; the token list wins
        let photos = Parser::parse("1\nH 1 a b c\n").unwrap();
        assert_eq!(photos[0].tags.len(), 3);
    }
}
