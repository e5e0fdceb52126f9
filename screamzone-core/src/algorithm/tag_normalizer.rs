use crate::model::TagSet;
use serde_json::Value;
use std::{iter::Peekable, str::CharIndices};

/// turns a raw `tags` value into a [`TagSet`]. datasets deliver tags either as
/// a structured mapping or as the text of one, e.g. `"{'building': 'yes'}"`.
///
/// this never fails: anything that is not a mapping, including text that
/// cannot be parsed, normalizes to an empty [`TagSet`].
///
/// # Arguments
///
/// * `raw` - the tags value exactly as read from the dataset
///
/// # Returns
///
/// the parsed tags, or an empty set if nothing usable was found
pub fn normalize(raw: &Value) -> TagSet {
    match raw {
        Value::Object(map) => {
            let mut tags = TagSet::new();
            for (key, value) in map.iter() {
                tags.insert(key.as_str(), value_to_string(value));
            }
            tags
        }
        Value::String(text) => normalize_text(text),
        _ => TagSet::new(),
    }
}

/// text variant of [`normalize`]. only text whose first character is `{` is
/// considered.
pub fn normalize_text(text: &str) -> TagSet {
    if !text.starts_with('{') {
        return TagSet::new();
    }
    match LiteralMappingParser::new(text).parse() {
        Ok(tags) => tags,
        Err(e) => {
            log::debug!("unable to parse tags literal '{text}': {e}");
            TagSet::new()
        }
    }
}

/// strings verbatim, everything else as compact JSON text.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// reads a single mapping literal. both python literal style (`{'k': 'v'}`)
/// and JSON style (`{"k": "v"}`) are accepted. quoted strings are unescaped;
/// bare scalars and nested lists, tuples, sets or mappings are validated and
/// kept as written.
struct LiteralMappingParser<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> LiteralMappingParser<'a> {
    const BARE_WORDS: [&'static str; 6] = ["True", "False", "None", "true", "false", "null"];
    const MAX_DEPTH: usize = 64;

    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    fn parse(mut self) -> Result<TagSet, String> {
        self.expect('{')?;
        let mut tags = TagSet::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.next();
                    break;
                }
                None => return Err(String::from("unterminated mapping")),
                _ => {}
            }
            let key = self.parse_value(1)?;
            self.skip_whitespace();
            self.expect(':')?;
            self.skip_whitespace();
            let value = self.parse_value(1)?;
            // last value wins for repeated keys
            tags.insert(key, value);
            self.skip_whitespace();
            match self.next() {
                Some(',') => continue,
                Some('}') => break,
                Some(c) => return Err(format!("expected ',' or '}}', found '{c}'")),
                None => return Err(String::from("unterminated mapping")),
            }
        }
        self.skip_whitespace();
        match self.next() {
            None => Ok(tags),
            Some(c) => Err(format!("unexpected character '{c}' after mapping")),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn next_if(&mut self, f: impl Fn(char) -> bool) -> Option<char> {
        self.chars.next_if(|(_, c)| f(*c)).map(|(_, c)| c)
    }

    /// byte offset of the next unread character
    fn position(&mut self) -> usize {
        match self.chars.peek() {
            Some((idx, _)) => *idx,
            None => self.text.len(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.next_if(char::is_whitespace).is_some() {}
    }

    fn expect(&mut self, expected: char) -> Result<(), String> {
        match self.next() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(format!("expected '{expected}', found '{c}'")),
            None => Err(format!("expected '{expected}', found end of input")),
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<String, String> {
        match self.peek() {
            Some('\'') | Some('"') => self.parse_quoted(),
            Some('[') | Some('(') | Some('{') => {
                let start = self.position();
                self.skip_container(depth)?;
                let end = self.position();
                Ok(self.text[start..end].to_string())
            }
            _ => self.parse_bare(),
        }
    }

    /// consumes one bracketed literal, checking that every element is itself
    /// a literal.
    fn skip_container(&mut self, depth: usize) -> Result<(), String> {
        if depth > Self::MAX_DEPTH {
            return Err(String::from("literal nested too deeply"));
        }
        let close = match self.next() {
            Some('[') => ']',
            Some('(') => ')',
            Some('{') => '}',
            Some(c) => return Err(format!("expected a container, found '{c}'")),
            None => return Err(String::from("expected a container, found end of input")),
        };
        loop {
            self.skip_whitespace();
            if self.next_if(|c| c == close).is_some() {
                return Ok(());
            }
            self.parse_value(depth + 1)?;
            self.skip_whitespace();
            if close == '}' && self.next_if(|c| c == ':').is_some() {
                self.skip_whitespace();
                self.parse_value(depth + 1)?;
                self.skip_whitespace();
            }
            match self.next() {
                Some(',') => continue,
                Some(c) if c == close => return Ok(()),
                Some(c) => return Err(format!("expected ',' or '{close}', found '{c}'")),
                None => return Err(format!("unterminated container, expected '{close}'")),
            }
        }
    }

    fn parse_bare(&mut self) -> Result<String, String> {
        let start = self.position();
        while self
            .next_if(|c| !c.is_whitespace() && !matches!(c, ',' | ':' | '}' | ']' | ')'))
            .is_some()
        {}
        let end = self.position();
        let token = &self.text[start..end];
        if Self::BARE_WORDS.contains(&token) || is_python_number(token) {
            Ok(token.to_string())
        } else {
            Err(format!("'{token}' is not a literal value"))
        }
    }

    fn parse_quoted(&mut self) -> Result<String, String> {
        let quote = match self.next() {
            Some(q @ ('\'' | '"')) => q,
            Some(c) => return Err(format!("expected a quoted string, found '{c}'")),
            None => return Err(String::from("expected a quoted string, found end of input")),
        };
        let mut out = String::new();
        loop {
            match self.next() {
                None => return Err(String::from("unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => self.parse_escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), String> {
        match self.next() {
            // escaped line break continues the string
            Some('\n') => {}
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('a') => out.push('\x07'),
            Some('b') => out.push('\x08'),
            Some('f') => out.push('\x0c'),
            Some('v') => out.push('\x0b'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some(c @ '0'..='7') => out.push(self.parse_octal(c)?),
            Some('x') => out.push(self.parse_code_point(2)?),
            Some('u') => out.push(self.parse_code_point(4)?),
            Some('U') => out.push(self.parse_code_point(8)?),
            // unrecognized escapes are kept verbatim. this includes `\N{name}`,
            // which would need the unicode character name table.
            Some(c) => {
                out.push('\\');
                out.push(c);
            }
            None => return Err(String::from("unterminated escape sequence")),
        }
        Ok(())
    }

    /// up to three octal digits, the first already consumed
    fn parse_octal(&mut self, first: char) -> Result<char, String> {
        let mut value = first.to_digit(8).unwrap_or_default();
        for _ in 0..2 {
            match self.peek().and_then(|c| c.to_digit(8)) {
                Some(d) => {
                    self.next();
                    value = value * 8 + d;
                }
                None => break,
            }
        }
        char::from_u32(value).ok_or_else(|| format!("invalid octal escape '{value:o}'"))
    }

    fn parse_code_point(&mut self, digits: usize) -> Result<char, String> {
        let mut hex = String::new();
        for _ in 0..digits {
            match self.next_if(|c| c.is_ascii_hexdigit()) {
                Some(c) => hex.push(c),
                None => return Err(String::from("truncated escape sequence")),
            }
        }
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| format!("invalid escape sequence '{hex}'"))
    }
}

/// python numeric literal syntax with an optional sign: decimal, hex, octal and
/// binary integers, floats and imaginary numbers, with `_` digit separators.
/// `inf` and `nan` are names in python, not literals, and are rejected.
fn is_python_number(token: &str) -> bool {
    let unsigned = token
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(token)
        .to_ascii_lowercase();
    let prefixed = [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| unsigned.strip_prefix(prefix).map(|d| (d, radix)));
    if let Some((digits, radix)) = prefixed {
        return is_digit_part(digits.strip_prefix('_').unwrap_or(digits), radix);
    }
    match unsigned.strip_suffix('j') {
        Some(imaginary) => is_digit_part(imaginary, 10) || is_float(imaginary),
        None => is_decimal_int(&unsigned) || is_float(&unsigned),
    }
}

/// digits with single underscores between them
fn is_digit_part(s: &str, radix: u32) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s.chars().all(|c| c == '_' || c.is_digit(radix))
}

/// no leading zeros, except for zero itself
fn is_decimal_int(s: &str) -> bool {
    is_digit_part(s, 10) && (!s.starts_with('0') || s.chars().all(|c| c == '0' || c == '_'))
}

/// expects lowercase input
fn is_float(s: &str) -> bool {
    let (mantissa, exponent) = match s.split_once('e') {
        Some((m, e)) => (m, Some(e)),
        None => (s, None),
    };
    if let Some(e) = exponent {
        let e = e.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(e);
        if !is_digit_part(e, 10) {
            return false;
        }
    }
    match mantissa.split_once('.') {
        Some((int, frac)) => {
            !(int.is_empty() && frac.is_empty())
                && (int.is_empty() || is_digit_part(int, 10))
                && (frac.is_empty() || is_digit_part(frac, 10))
        }
        None => exponent.is_some() && is_digit_part(mantissa, 10),
    }
}
