use super::ContainsHeaderLine;

const SEPARATORS: [&str; 2] = ["\n\n", "\r\n\r\n"];

pub trait SplitPage<'a> {
    fn find_header_end(self) -> Option<usize>;
    fn split_header_body(self) -> (&'a str, &'a str);
}

impl<'a> SplitPage<'a> for &'a str {
    /// Index just past the first blank-line separator.
    fn find_header_end(self) -> Option<usize> {
        SEPARATORS
            .iter()
            .filter_map(|separator| self.find(separator).map(|pos| pos + separator.len()))
            .min_by_key(|end| *end)
    }

    fn split_header_body(self) -> (&'a str, &'a str) {
        if let Some(header_end) = self.find_header_end() {
            return self.split_at(header_end);
        }

        // 구분자가 없는 경우: 헤더만 있거나 바디만 있음
        if self.contains_header_line() {
            (self, "")
        } else {
            ("", self)
        }
    }
}

/// Split procedure output into `(header, body)`; `header + body == text`.
pub fn split_header_and_body(text: &str) -> (&str, &str) {
    text.split_header_body()
}
