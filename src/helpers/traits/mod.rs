pub mod cookie;
pub mod header;
pub mod http_response;
pub mod split;

// ContainsHeaderLine trait 정의
pub trait ContainsHeaderLine {
    fn contains_header_line(&self) -> bool;
}

impl ContainsHeaderLine for &str {
    fn contains_header_line(&self) -> bool {
        self.lines().any(is_header_line)
    }
}

/// Whether `text` holds at least one `Name: value` header line.
///
/// `None` stands for an absent payload and is never header-like.
pub fn contains_header_line<'a>(text: impl Into<Option<&'a str>>) -> bool {
    match text.into() {
        Some(text) => text.contains_header_line(),
        None => false,
    }
}

pub(crate) fn is_header_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

// "Location: x", " Location:  ", "Location:Status: " -> true
// "Content type: ", "Content-type:" -> false
fn is_header_line(line: &str) -> bool {
    let line = line.trim_start();
    let bytes = line.as_bytes();

    let name_len = bytes.iter().take_while(|b| is_header_name_byte(**b)).count();
    if name_len == 0 || bytes.get(name_len) != Some(&b':') {
        return false;
    }

    line.match_indices(": ")
        .any(|(pos, _)| pos > 0 && is_header_name_byte(bytes[pos - 1]))
}
