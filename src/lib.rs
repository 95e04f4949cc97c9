use serde::{Deserialize, Serialize};

pub mod error;
pub mod helpers;

pub use error::{CookieError, HeaderLineError, PageError};
pub use helpers::traits::cookie::{parse_cookie_pair, parse_cookie_pair_with, Cookie, CookieMode};
pub use helpers::traits::header::{parse_header, OtherHeaders, PageHeader, PageStatus, ParsedHeaders};
pub use helpers::traits::http_response::{ResponseUtil, StatusDescription};
pub use helpers::traits::split::{split_header_and_body, SplitPage};
pub use helpers::traits::{contains_header_line, ContainsHeaderLine};

pub mod external {
    pub use async_trait;
    #[cfg(feature = "env")]
    pub use dotenv;
    pub use http;
    pub use tokio;
}

#[macro_export]
macro_rules! dev_print {
    ($($rest:tt)*) => {
        if cfg!(feature = "debug") {
            println!($($rest)*)
        }
    };
}

pub type SendableError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone)]
pub struct Options {
    pub default_content_type: String,
    pub redirect_status: u16,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    pub fn new() -> Options {
        let mut _options = Options {
            default_content_type: "text/html".into(),
            redirect_status: 302,
        };

        #[cfg(feature = "env")]
        {
            use std::env;
            if let Ok(data) = env::var("DEFAULT_CONTENT_TYPE") {
                let data = data.trim();
                if !data.is_empty() {
                    _options.default_content_type = data.into();
                }
            }

            if let Ok(data) = env::var("REDIRECT_STATUS") {
                // 301, 302, 303, 307, 308
                if let Ok(data) = data.trim().parse::<u16>() {
                    _options.redirect_status = data;
                }
            }
        }

        _options
    }

    pub fn set_default_content_type(&mut self, content_type: &str) {
        self.default_content_type = content_type.into();
    }

    pub fn set_redirect_status(&mut self, status: u16) {
        self.redirect_status = status;
    }
}

/// The output of one stored-procedure call, split and classified.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub header: ParsedHeaders,
    pub body: String,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }
}

/// Split `text` into header block and body, then classify the header block.
///
/// Never fails: lines that cannot be interpreted are dropped.
pub fn parse_page(text: &str) -> Page {
    let (header, body) = text.split_header_body();
    dev_print!("header len: {}, body len: {}", header.len(), body.len());

    Page {
        header: parse_header(header),
        body: body.into(),
    }
}
