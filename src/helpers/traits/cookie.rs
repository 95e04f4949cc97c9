use serde::{Deserialize, Serialize};

use crate::error::CookieError;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookie {
    pub key: String,
    pub value: String,
}

impl Cookie {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// `key=value`, quoting the value when it is not plain cookie-octets.
    pub fn to_pair(&self) -> String {
        if self.value.chars().all(is_cookie_octet) {
            format!("{}={}", self.key, self.value)
        } else {
            format!("{}=\"{}\"", self.key, self.value)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieMode {
    /// RFC 6265 token name and cookie-octet value, optionally double quoted.
    Strict,
    /// Any name and value, as long as '=' is not padded with whitespace.
    Loose,
}

/// Parse a single `Set-Cookie` declaration, strict first, then loose.
///
/// Attributes after the first `;` are ignored. A refused declaration yields
/// `None`; use [`parse_cookie_pair_with`] to learn why.
pub fn parse_cookie_pair(text: &str) -> Option<Cookie> {
    try_parse_cookie_pair(text).ok()
}

pub(crate) fn try_parse_cookie_pair(text: &str) -> Result<Cookie, CookieError> {
    parse_cookie_pair_with(text, CookieMode::Strict)
        .or_else(|_| parse_cookie_pair_with(text, CookieMode::Loose))
}

pub fn parse_cookie_pair_with(text: &str, mode: CookieMode) -> Result<Cookie, CookieError> {
    let pair = match text.find(';') {
        Some(pos) => &text[..pos],
        None => text,
    };
    let pair = pair.trim();

    let eq_pos = pair.find('=').ok_or(CookieError::MissingSeparator)?;
    let (key, value) = (&pair[..eq_pos], &pair[eq_pos + 1..]);

    if key.is_empty() {
        return Err(CookieError::EmptyKey);
    }
    if key.ends_with(char::is_whitespace) || value.starts_with(char::is_whitespace) {
        return Err(CookieError::SpaceAroundSeparator);
    }

    let value = unquote(value);
    match mode {
        CookieMode::Strict => {
            if let Some(c) = key.chars().find(|c| !is_token_char(*c)) {
                return Err(CookieError::IllegalKey(c));
            }
            if let Some(c) = value.chars().find(|c| !is_cookie_octet(*c)) {
                return Err(CookieError::IllegalValue(c));
            }
        }
        CookieMode::Loose => {
            if let Some(c) = key.chars().find(|c| c.is_control()) {
                return Err(CookieError::IllegalKey(c));
            }
            if let Some(c) = value.chars().find(|c| c.is_control()) {
                return Err(CookieError::IllegalValue(c));
            }
        }
    }

    Ok(Cookie::new(key, value))
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

// token = 1*<any CHAR except CTLs or separators>
fn is_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?={}".contains(c)
}

// cookie-octet = %x21 / %x23-2B / %x2D-3A / %x3C-5B / %x5D-7E
fn is_cookie_octet(c: char) -> bool {
    c.is_ascii_graphic() && !matches!(c, '"' | ',' | ';' | '\\')
}
