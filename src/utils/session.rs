use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use reqwest::{Client, Response};
use serde::Serialize;
use url::Url;

use crate::error::FetchError;

// The portal rejects clients it does not recognize, so every request
// carries a browser User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// One web session: cookie jar, fixed headers and a request timeout shared
// by every call. Cookies set by a response are presented on the following
// requests, which is what lets the results fetch reuse the login handshake.
// Cloning shares the cookie jar, so clones belong to the same session.
#[derive(Debug, Clone)]
pub struct SessionClient {
    inner: Client,
}

impl SessionClient {
    // Builds a session that sends `referer` with every request.
    pub fn new(referer: &Url) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(referer.as_str()) {
            headers.insert(REFERER, value);
        }

        let inner = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { inner })
    }

    pub async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let response = self.inner.get(url).send().await?;
        check_status(response)
    }

    // Status-checked response body for callers that only want the markup.
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        Ok(self.get(url).await?.text().await?)
    }

    pub async fn post_form<T: Serialize + ?Sized>(
        &self,
        url: &str,
        form: &T,
    ) -> Result<Response, FetchError> {
        let response = self.inner.post(url).form(form).send().await?;
        check_status(response)
    }
}

fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_referer() {
        let referer = Url::parse("https://portal.example.edu/Account/Login").unwrap();
        assert!(SessionClient::new(&referer).is_ok());
    }
}
