use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dev_print;
use crate::error::HeaderLineError;
use crate::helpers::traits::cookie::{try_parse_cookie_pair, Cookie};

/// Headers without a dedicated field, keyed by the name as written.
pub type OtherHeaders = HashMap<String, String>;

/// Status code and description, always taken together from one `Status` line.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStatus {
    pub code: u16,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageHeader {
    pub content_type: Option<String>,
    pub redirect_location: Option<String>,
    pub status: Option<PageStatus>,
    pub content_length: Option<u64>,
}

impl PageHeader {
    pub fn status_code(&self) -> Option<u16> {
        self.status.as_ref().map(|status| status.code)
    }

    pub fn status_description(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.description.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self == &PageHeader::default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ParsedHeaders {
    pub main: PageHeader,
    pub other: OtherHeaders,
    pub cookies: Vec<Cookie>,
}

impl ParsedHeaders {
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.other.is_empty() && self.cookies.is_empty()
    }

    fn apply_line(&mut self, line: &str) -> Result<(), HeaderLineError> {
        let colon = line.find(':').ok_or(HeaderLineError::MissingColon)?;
        let name = line[..colon].trim();
        let value = line[colon + 1..].trim();
        if name.is_empty() {
            return Err(HeaderLineError::EmptyName);
        }

        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "location" => self.main.redirect_location = Some(value.into()),
            "content-type" => self.main.content_type = Some(value.into()),
            "status" => {
                let (code, rest) = leading_number::<u16>(value)
                    .ok_or_else(|| HeaderLineError::InvalidStatus(value.into()))?;
                self.main.status = Some(PageStatus {
                    code,
                    description: rest.trim().into(),
                });
            }
            "set-cookie" => {
                self.cookies.push(try_parse_cookie_pair(value)?);
            }
            _ if lower.ends_with("content-length") => {
                let (length, _) = leading_number::<u64>(value)
                    .ok_or_else(|| HeaderLineError::InvalidContentLength(value.into()))?;
                self.main.content_length = Some(length);
            }
            _ => {
                self.other.insert(name.into(), value.into());
            }
        }

        Ok(())
    }
}

/// Classify every line of a header block.
///
/// Blank lines are ignored; a line that cannot be used is skipped without
/// affecting the lines after it.
pub fn parse_header(text: &str) -> ParsedHeaders {
    let mut headers = ParsedHeaders::default();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if let Err(_e) = headers.apply_line(line) {
            dev_print!("skipped header line {:?}: {}", line, _e);
        }
    }

    headers
}

// Leading run of ASCII digits and the text after it.
fn leading_number<T: std::str::FromStr>(value: &str) -> Option<(T, &str)> {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let number = value[..end].parse().ok()?;
    Some((number, &value[end..]))
}
