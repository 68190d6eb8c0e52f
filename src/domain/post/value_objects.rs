use crate::domain::errors::{DomainResult, ValidationError, ValidationRule, check_length};
use std::fmt;

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 100;
pub const CONTENT_MAX_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(ValidationError::new("post id", ValidationRule::Positive).into())
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_length("title", &value, TITLE_MIN_LEN, TITLE_MAX_LEN)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content(String);

impl Content {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        check_length("content", &value, 0, CONTENT_MAX_LEN)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Content> for String {
    fn from(value: Content) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_accepts_every_length_in_range_and_round_trips() {
        for len in TITLE_MIN_LEN..=TITLE_MAX_LEN {
            let raw = "t".repeat(len);
            let title = Title::new(raw.clone()).unwrap();
            assert_eq!(title.as_str(), raw);
            assert_eq!(String::from(title), raw);
        }
    }

    #[test]
    fn title_rejects_out_of_range_lengths() {
        let cases = [
            (String::new(), ValidationRule::Required),
            ("a".to_string(), ValidationRule::TooShort { min: 3 }),
            ("ab".to_string(), ValidationRule::TooShort { min: 3 }),
            ("x".repeat(101), ValidationRule::TooLong { max: 100 }),
        ];
        for (raw, rule) in cases {
            let err = Title::new(raw).unwrap_err();
            assert_eq!(err.field, "title");
            assert_eq!(err.rule, rule);
        }
    }

    #[test]
    fn content_allows_single_character_up_to_limit() {
        assert!(Content::new("x").is_ok());
        assert!(Content::new("x".repeat(CONTENT_MAX_LEN)).is_ok());
        assert_eq!(
            Content::new("x".repeat(CONTENT_MAX_LEN + 1)).unwrap_err().rule,
            ValidationRule::TooLong { max: 500 }
        );
        assert_eq!(
            Content::new("").unwrap_err().to_string(),
            "content is required"
        );
    }

    #[test]
    fn post_id_must_be_positive() {
        assert!(PostId::new(0).is_err());
        assert!(PostId::new(-4).is_err());
        assert_eq!(i64::from(PostId::new(7).unwrap()), 7);
    }
}
