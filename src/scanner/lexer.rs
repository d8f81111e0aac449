//! Sanitizing, framing and value extraction for raw definition text.

use crate::error::{SchemaError, SchemaResult};
use crate::value_objects::unescape_qdstring;

/// Value grammar expected after a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Grammar {
    /// No value follows the label.
    Bare,
    /// One `'quoted string'`.
    QuotedString,
    /// One quoted string or a parenthesized list of them.
    QuotedList,
    /// One OID or name, or a parenthesized `$`-separated list of them.
    TermList,
    /// A single unquoted OID, name or keyword.
    Token,
    /// An OID optionally followed by a `{n}` length bound.
    BoundedTerm,
}

/// A value extracted for one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScanValue {
    Bare,
    Single(String),
    List(Vec<String>),
    Bounded { term: String, bound: Option<u32> },
}

impl ScanValue {
    pub(crate) fn into_text(self) -> String {
        match self {
            Self::Bare => String::new(),
            Self::Single(text) => text,
            Self::List(items) => items.join(" "),
            Self::Bounded { term, .. } => term,
        }
    }

    pub(crate) fn into_list(self) -> Vec<String> {
        match self {
            Self::Bare => Vec::new(),
            Self::Single(text) => vec![text],
            Self::List(items) => items,
            Self::Bounded { term, .. } => vec![term],
        }
    }
}

/// Normalize raw input to a single line.
///
/// Line breaks (actual or written as a literal `\n`) and tabs become spaces,
/// runs of spaces outside quoted strings collapse to one, and the result is
/// trimmed. Text inside quotes keeps its spacing.
pub(crate) fn sanitize(raw: &str) -> String {
    let raw = raw.replace("\\n", " ");
    let mut out = String::with_capacity(raw.len());
    let mut quoted = false;
    let mut last_space = false;

    for c in raw.chars() {
        let c = if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c };
        if c == '\'' {
            quoted = !quoted;
        }
        if c == ' ' && !quoted {
            if last_space {
                continue;
            }
            last_space = true;
        } else {
            last_space = false;
        }
        out.push(c);
    }

    out.trim().to_string()
}

/// Check the `( ... )` framing and return the text between the parentheses.
pub(crate) fn frame(text: &str) -> SchemaResult<&str> {
    let inner = text
        .strip_prefix("( ")
        .and_then(|rest| rest.strip_suffix(" )"))
        .ok_or_else(|| {
            SchemaError::framing("definition must begin with '( ' and end with ' )'")
        })?;

    if inner.trim().is_empty() {
        return Err(SchemaError::framing("definition has no content"));
    }
    Ok(inner)
}

/// Reads words and label values off the framed body.
pub(crate) struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn skip_spaces(&mut self) {
        self.rest = self.rest.trim_start_matches(' ');
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rest.trim().is_empty()
    }

    /// Next space-delimited word.
    pub(crate) fn word(&mut self) -> Option<&'a str> {
        self.skip_spaces();
        if self.rest.is_empty() {
            return None;
        }
        let end = self.rest.find(' ').unwrap_or(self.rest.len());
        let (word, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(word)
    }

    /// Extract the value for `label` according to `grammar`.
    pub(crate) fn read(&mut self, grammar: Grammar, label: &str) -> SchemaResult<ScanValue> {
        match grammar {
            Grammar::Bare => Ok(ScanValue::Bare),
            Grammar::QuotedString => self.quoted(label).map(ScanValue::Single),
            Grammar::QuotedList => self.quoted_list(label).map(ScanValue::List),
            Grammar::TermList => self.term_list(label).map(ScanValue::List),
            Grammar::Token => self.token(label).map(ScanValue::Single),
            Grammar::BoundedTerm => self.bounded(label),
        }
    }

    pub(crate) fn quoted(&mut self, label: &str) -> SchemaResult<String> {
        self.skip_spaces();
        let body = self
            .rest
            .strip_prefix('\'')
            .ok_or_else(|| SchemaError::invalid_value(label, self.rest, "expected a quoted string"))?;
        let end = body
            .find('\'')
            .ok_or_else(|| SchemaError::invalid_value(label, self.rest, "unterminated quoted string"))?;

        let after = &body[end + 1..];
        if !after.is_empty() && !after.starts_with([' ', '$']) {
            return Err(SchemaError::invalid_value(
                label,
                self.rest,
                "expected a space after the closing quote",
            ));
        }

        let value = unescape_qdstring(&body[..end]);
        self.rest = after;
        Ok(value)
    }

    /// Take a parenthesized group if one starts here, returning its inside.
    fn group(&mut self, label: &str) -> SchemaResult<Option<&'a str>> {
        self.skip_spaces();
        let Some(body) = self.rest.strip_prefix('(') else {
            return Ok(None);
        };

        let mut quoted = false;
        for (at, c) in body.char_indices() {
            match c {
                '\'' => quoted = !quoted,
                ')' if !quoted => {
                    self.rest = &body[at + 1..];
                    return Ok(Some(&body[..at]));
                }
                _ => {}
            }
        }
        Err(SchemaError::invalid_value(label, self.rest, "unterminated list"))
    }

    fn quoted_list(&mut self, label: &str) -> SchemaResult<Vec<String>> {
        let Some(inner) = self.group(label)? else {
            return Ok(vec![self.quoted(label)?]);
        };

        let mut items = Cursor::new(inner);
        let mut values = Vec::new();
        while !items.is_empty() {
            values.push(items.quoted(label)?);
            if items.separator() && items.is_empty() {
                return Err(SchemaError::invalid_value(label, inner, "dangling '$' separator"));
            }
        }
        Ok(values)
    }

    /// Consume an optional `$` between list items.
    fn separator(&mut self) -> bool {
        self.skip_spaces();
        match self.rest.strip_prefix('$') {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn term_list(&mut self, label: &str) -> SchemaResult<Vec<String>> {
        let Some(inner) = self.group(label)? else {
            return Ok(vec![self.token(label)?]);
        };

        let terms: Vec<String> = inner
            .split([' ', '$'])
            .filter(|term| !term.is_empty())
            .map(|term| strip_quotes(term).to_string())
            .collect();
        if terms.is_empty() {
            return Err(SchemaError::invalid_value(label, inner, "empty list"));
        }
        Ok(terms)
    }

    fn token(&mut self, label: &str) -> SchemaResult<String> {
        let word = self
            .word()
            .ok_or_else(|| SchemaError::invalid_value(label, "", "missing value"))?;
        Ok(strip_quotes(word).to_string())
    }

    fn bounded(&mut self, label: &str) -> SchemaResult<ScanValue> {
        let token = self.token(label)?;
        let Some(open) = token.find('{') else {
            return Ok(ScanValue::Bounded {
                term: token,
                bound: None,
            });
        };

        let bound = token[open + 1..]
            .strip_suffix('}')
            .and_then(|digits| digits.parse::<u32>().ok())
            .ok_or_else(|| SchemaError::invalid_value(label, &token, "malformed length bound"))?;
        Ok(ScanValue::Bounded {
            term: token[..open].to_string(),
            bound: Some(bound),
        })
    }
}

fn strip_quotes(term: &str) -> &str {
    term.strip_prefix('\'')
        .and_then(|inner| inner.strip_suffix('\''))
        .unwrap_or(term)
}
