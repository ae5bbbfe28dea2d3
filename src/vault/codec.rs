//! Text encoding of the credential list.
//!
//! The decrypted vault payload is a compact JSON-like array with exactly
//! three string fields per object, always in the same order:
//!
//! ```text
//! [{"service":"…","username":"…","password":"…"},{…}]
//! ```
//!
//! Escaping grammar inside values:
//!
//! | raw char | encoded |
//! |----------|---------|
//! | `\`      | `\\`    |
//! | `"`      | `\"`    |
//! | newline  | `\n`    |
//!
//! On read, `\x` for any other `x` yields `x`.  This is not a general JSON
//! parser: anything that does not fit the shape above is dropped.
//! Decoding never fails; malformed input yields an empty list and a
//! malformed object is skipped on its own.

use super::record::CredentialRecord;
use crate::errors::{PassVaultError, Result};

const FIELD_SERVICE: &str = "service";
const FIELD_USERNAME: &str = "username";
const FIELD_PASSWORD: &str = "password";

/// Encode `records` into the vault's text form.
pub fn serialize(records: &[CredentialRecord]) -> String {
    let mut out = String::from("[");
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('{');
        push_field(&mut out, FIELD_SERVICE, &record.service);
        out.push(',');
        push_field(&mut out, FIELD_USERNAME, &record.username);
        out.push(',');
        push_field(&mut out, FIELD_PASSWORD, &record.password);
        out.push('}');
    }
    out.push(']');
    out
}

/// Decode the vault's text form.  Never fails.
pub fn deserialize(text: &str) -> Vec<CredentialRecord> {
    let trimmed = text.trim();
    let Some(body) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        if !trimmed.is_empty() {
            tracing::warn!("vault payload is not an array, treating as empty");
        }
        return Vec::new();
    };

    let body = body.trim();
    if body.is_empty() {
        return Vec::new();
    }

    split_objects(body)
        .into_iter()
        .filter_map(|object| match parse_object(object) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed vault entry");
                None
            }
        })
        .collect()
}

fn push_field(out: &mut String, name: &str, value: &str) {
    out.push('"');
    out.push_str(name);
    out.push_str("\":\"");
    escape_into(out, value);
    out.push('"');
}

fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
}

/// Split the array body at each `},{` boundary that lies outside a
/// quoted string.  Each returned slice still carries its braces.
fn split_objects(body: &str) -> Vec<&str> {
    let mut objects = Vec::new();
    let mut in_string = false;
    let mut escaped = false;
    let mut start = 0;
    let bytes = body.as_bytes();

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b',' if i > 0 && bytes[i - 1] == b'}' && bytes.get(i + 1) == Some(&b'{') => {
                objects.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    objects.push(&body[start..]);
    objects
}

/// Parse one `{"k":"v",…}` object into a record.
fn parse_object(object: &str) -> Result<CredentialRecord> {
    let object = object.trim();
    let inner = object
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| PassVaultError::MalformedRecord("object is not wrapped in braces".into()))?;

    let mut service = None;
    let mut username = None;
    let mut password = None;

    let mut scanner = Scanner::new(inner);
    scanner.skip_whitespace();
    while !scanner.at_end() {
        let key = scanner.read_string()?;
        scanner.expect(':')?;
        let value = scanner.read_string()?;

        match key.as_str() {
            FIELD_SERVICE => service = Some(value),
            FIELD_USERNAME => username = Some(value),
            FIELD_PASSWORD => password = Some(value),
            _ => {}
        }

        scanner.skip_whitespace();
        if !scanner.at_end() {
            scanner.expect(',')?;
        }
    }

    match (service, username, password) {
        (Some(service), Some(username), Some(password)) => Ok(CredentialRecord {
            service,
            username,
            password,
        }),
        _ => Err(PassVaultError::MalformedRecord(
            "object is missing one of service/username/password".into(),
        )),
    }
}

/// Character scanner over the inside of one object.
struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn expect(&mut self, wanted: char) -> Result<()> {
        self.skip_whitespace();
        match self.chars.next() {
            Some(c) if c == wanted => {
                self.skip_whitespace();
                Ok(())
            }
            Some(c) => Err(PassVaultError::MalformedRecord(format!(
                "expected '{wanted}', found '{c}'"
            ))),
            None => Err(PassVaultError::MalformedRecord(format!(
                "expected '{wanted}', found end of input"
            ))),
        }
    }

    /// Read a double-quoted string, undoing the escaping grammar.
    fn read_string(&mut self) -> Result<String> {
        self.skip_whitespace();
        if self.chars.next() != Some('"') {
            return Err(PassVaultError::MalformedRecord("expected '\"'".into()));
        }

        let mut value = String::new();
        loop {
            match self.chars.next() {
                Some('\\') => match self.chars.next() {
                    Some('n') => value.push('\n'),
                    Some(other) => value.push(other),
                    None => break,
                },
                Some('"') => return Ok(value),
                Some(c) => value.push(c),
                None => break,
            }
        }

        Err(PassVaultError::MalformedRecord(
            "unterminated string".into(),
        ))
    }
}
