use thiserror::Error;

/// Why a `name=value` cookie declaration was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CookieError {
    #[error("cookie declaration has no '='")]
    MissingSeparator,
    #[error("cookie declaration has an empty name")]
    EmptyKey,
    #[error("whitespace around '=' in cookie declaration")]
    SpaceAroundSeparator,
    #[error("illegal character {0:?} in cookie name")]
    IllegalKey(char),
    #[error("illegal character {0:?} in cookie value")]
    IllegalValue(char),
}

/// Why a line of the header block contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderLineError {
    #[error("header line has no ':'")]
    MissingColon,
    #[error("header line has an empty name")]
    EmptyName,
    #[error("status value {0:?} does not start with a status code")]
    InvalidStatus(String),
    #[error("content length value {0:?} is not a number")]
    InvalidContentLength(String),
    #[error("rejected cookie: {0}")]
    Cookie(#[from] CookieError),
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid status code {0}")]
    InvalidStatus(u16),
    #[error(transparent)]
    Http(#[from] http::Error),
}
