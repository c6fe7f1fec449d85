//! CSS-like selector parsing for widget queries.
//!
//! Supports:
//! - `"ISwitch"` - by widget type name
//! - `"#wifi"` - by test ID
//! - `"[data-testid='wifi']"` - by test ID
//! - `"[aria-label='Wi-Fi']"` - by accessible name
//! - `"[role='switch']"` - by accessible role

use switchy_core::{AccessibleRole, Widget};
use thiserror::Error;

/// Parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match by unqualified widget type name
    Type(String),
    /// Match by test ID (`#id` or `[data-testid='id']`)
    TestId(String),
    /// Match by accessible name
    Label(String),
    /// Match by accessible role
    Role(AccessibleRole),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is invalid.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        SelectorParser::new(input).parse()
    }

    /// Check if this selector matches a widget.
    #[must_use]
    pub fn matches(&self, widget: &dyn Widget) -> bool {
        match self {
            Self::Type(name) => widget.type_id().short_name() == name,
            Self::TestId(id) => widget.test_id() == Some(id.as_str()),
            Self::Label(label) => widget.accessible_name() == Some(label.as_str()),
            Self::Role(role) => widget.accessible_role() == *role,
        }
    }
}

/// Selector parsing and lookup error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Empty selector
    #[error("empty selector")]
    Empty,
    /// Unexpected character
    #[error("unexpected character: '{0}'")]
    UnexpectedChar(char),
    /// Expected identifier
    #[error("expected identifier")]
    ExpectedIdentifier,
    /// Attribute name the harness does not understand
    #[error("unsupported attribute: {0}")]
    UnsupportedAttribute(String),
    /// Unknown value for `role`
    #[error("unknown role: {0}")]
    UnknownRole(String),
    /// Unclosed attribute bracket
    #[error("unclosed attribute bracket")]
    UnclosedAttribute,
    /// Nothing in the tree matched
    #[error("no widget matching '{0}'")]
    NotFound(String),
}

/// Selector parser.
#[derive(Debug)]
pub struct SelectorParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> SelectorParser<'a> {
    /// Create a new parser.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parse the selector.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a single supported selector.
    pub fn parse(&mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();
        let first = self.peek_char().ok_or(SelectorError::Empty)?;
        let selector = match first {
            '#' => {
                self.advance();
                Selector::TestId(self.read_identifier()?)
            }
            '[' => self.parse_attribute()?,
            _ if first.is_alphabetic() => Selector::Type(self.read_identifier()?),
            _ => return Err(SelectorError::UnexpectedChar(first)),
        };
        self.skip_whitespace();
        match self.peek_char() {
            None => Ok(selector),
            Some(c) => Err(SelectorError::UnexpectedChar(c)),
        }
    }

    fn parse_attribute(&mut self) -> Result<Selector, SelectorError> {
        self.advance(); // '['
        let name = self.read_until_any(&['=', ']']).trim().to_string();
        if self.peek_char() != Some('=') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance(); // '='

        let quote = self.peek_char().filter(|c| matches!(c, '\'' | '"'));
        if quote.is_some() {
            self.advance();
        }
        let value = match quote {
            Some(q) => self.read_until_any(&[q]),
            None => self.read_until_any(&[']']),
        };
        if quote.is_some() {
            if self.peek_char() != quote {
                return Err(SelectorError::UnclosedAttribute);
            }
            self.advance();
        }
        if self.peek_char() != Some(']') {
            return Err(SelectorError::UnclosedAttribute);
        }
        self.advance();

        match name.as_str() {
            "data-testid" => Ok(Selector::TestId(value)),
            "aria-label" => Ok(Selector::Label(value)),
            "role" => parse_role(&value).map(Selector::Role),
            _ => Err(SelectorError::UnsupportedAttribute(name)),
        }
    }

    fn read_identifier(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                self.advance();
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(SelectorError::ExpectedIdentifier);
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn read_until_any(&mut self, stops: &[char]) -> String {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if stops.contains(&c) {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }
}

fn parse_role(value: &str) -> Result<AccessibleRole, SelectorError> {
    match value {
        "switch" => Ok(AccessibleRole::Switch),
        "label" => Ok(AccessibleRole::Label),
        "grid" => Ok(AccessibleRole::Grid),
        "gridcell" => Ok(AccessibleRole::GridCell),
        "generic" => Ok(AccessibleRole::Generic),
        other => Err(SelectorError::UnknownRole(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ===== Parse Tests =====

    #[test]
    fn test_parse_type() {
        assert_eq!(
            Selector::parse("HeartSwitch").unwrap(),
            Selector::Type("HeartSwitch".to_string())
        );
    }

    #[test]
    fn test_parse_hash_is_test_id() {
        assert_eq!(
            Selector::parse("#text-switch").unwrap(),
            Selector::TestId("text-switch".to_string())
        );
    }

    #[test]
    fn test_parse_data_testid_quotes() {
        let expected = Selector::TestId("login".to_string());
        assert_eq!(Selector::parse("[data-testid='login']").unwrap(), expected);
        assert_eq!(Selector::parse("[data-testid=\"login\"]").unwrap(), expected);
        assert_eq!(Selector::parse("[data-testid=login]").unwrap(), expected);
    }

    #[test]
    fn test_parse_label_with_spaces() {
        assert_eq!(
            Selector::parse("[aria-label='Dark mode']").unwrap(),
            Selector::Label("Dark mode".to_string())
        );
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(
            Selector::parse("[role='switch']").unwrap(),
            Selector::Role(AccessibleRole::Switch)
        );
        assert_eq!(
            Selector::parse("[role='button']"),
            Err(SelectorError::UnknownRole("button".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
        assert_eq!(Selector::parse("#"), Err(SelectorError::ExpectedIdentifier));
        assert_eq!(Selector::parse("@x"), Err(SelectorError::UnexpectedChar('@')));
        assert_eq!(
            Selector::parse("[data-testid='x'"),
            Err(SelectorError::UnclosedAttribute)
        );
        assert_eq!(
            Selector::parse("[class='x']"),
            Err(SelectorError::UnsupportedAttribute("class".to_string()))
        );
        assert_eq!(
            Selector::parse("Row > ISwitch"),
            Err(SelectorError::UnexpectedChar('>'))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SelectorError::NotFound("#x".to_string()).to_string(),
            "no widget matching '#x'"
        );
        assert_eq!(
            SelectorError::UnexpectedChar('>').to_string(),
            "unexpected character: '>'"
        );
    }

    proptest! {
        #[test]
        fn prop_hash_round_trips_identifiers(id in "[a-z][a-z0-9_-]{0,20}") {
            prop_assert_eq!(Selector::parse(&format!("#{id}")), Ok(Selector::TestId(id.clone())));
            prop_assert_eq!(
                Selector::parse(&format!("[data-testid='{id}']")),
                Ok(Selector::TestId(id))
            );
        }
    }
}
