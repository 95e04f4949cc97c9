use async_trait::async_trait;
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE, LOCATION, SET_COOKIE};
use http::{Response, StatusCode};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::PageError;
use crate::{dev_print, Options, Page, SendableError};

/// Reason phrase given by the procedure's `Status` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDescription(pub String);

impl Page {
    /// Build the HTTP response the gateway sends for this page.
    pub fn to_response(&self, options: &Options) -> Result<Response<String>, PageError> {
        let main = &self.header.main;

        let status = match (main.status_code(), &main.redirect_location) {
            (Some(code), _) => code,
            (None, Some(_)) => options.redirect_status,
            (None, None) => 200,
        };
        let status = StatusCode::from_u16(status).map_err(|_| PageError::InvalidStatus(status))?;

        let mut builder = Response::builder().status(status);

        for (key, value) in self.header.other.iter() {
            match (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(key), Ok(value)) => builder = builder.header(key, value),
                _ => dev_print!("skipped header {:?}: {:?}", key, value),
            }
        }

        if let Some(location) = &main.redirect_location {
            builder = builder.header(LOCATION, location.as_str());
        }
        builder = builder.header(
            CONTENT_TYPE,
            main.content_type
                .as_deref()
                .unwrap_or(&options.default_content_type),
        );
        for cookie in self.header.cookies.iter() {
            builder = builder.header(SET_COOKIE, cookie.to_pair());
        }

        if let Some(description) = main.status_description().filter(|d| !d.is_empty()) {
            builder = builder.extension(StatusDescription(description.into()));
        }

        Ok(builder.body(self.body.clone())?)
    }
}

#[async_trait]
pub trait ResponseUtil {
    async fn responser<W>(&self, stream: &mut W) -> Result<(), SendableError>
    where
        W: AsyncWrite + Unpin + Send;
}

#[async_trait]
impl ResponseUtil for Response<String> {
    async fn responser<W>(&self, stream: &mut W) -> Result<(), SendableError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let reason = match self.extensions().get::<StatusDescription>() {
            Some(description) => description.0.as_str(),
            None => self.status().canonical_reason().unwrap_or(""),
        };

        let mut send_bytes = format!(
            "{:?} {} {}\r\n",
            self.version(),
            self.status().as_u16(),
            reason
        )
        .into_bytes();

        // header values may carry obs-text, so they are copied as raw bytes
        for (key, value) in self.headers().iter() {
            send_bytes.extend_from_slice(key.as_str().as_bytes());
            send_bytes.extend_from_slice(b": ");
            send_bytes.extend_from_slice(value.as_bytes());
            send_bytes.extend_from_slice(b"\r\n");
        }
        send_bytes.extend_from_slice(format!("content-length: {}\r\n", self.body().len()).as_bytes());
        dev_print!("headers: {}", String::from_utf8_lossy(&send_bytes));
        send_bytes.extend_from_slice(b"\r\n");
        send_bytes.extend_from_slice(self.body().as_bytes());

        stream.write_all(&send_bytes).await?;
        stream.flush().await?;
        Ok(())
    }
}
