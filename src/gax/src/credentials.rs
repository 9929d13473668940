// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Credentials attached to each attempt.
//!
//! Acquiring credentials (service account keys, metadata server tokens, user
//! flows) is out of scope for this crate. Applications plug in any source of
//! authentication headers by implementing [CredentialsProvider], or use one of
//! the simple constructors in [Credentials].

use crate::error::Error;
use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::sync::Arc;

/// An implementation of [CredentialsProvider] returns the authentication
/// headers for the next attempt.
#[async_trait::async_trait]
pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
    /// Returns the headers to attach to the next attempt.
    ///
    /// Implementations may cache and refresh tokens as needed.
    async fn headers(&self) -> crate::Result<HeaderMap>;
}

/// The credentials used by the default transport.
///
/// This type is cheap to clone, all clones share the same provider.
#[derive(Clone, Debug)]
pub struct Credentials {
    // Credentials are shared across threads and cloned into each transport.
    inner: Arc<dyn CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Credentials that attach no headers.
    ///
    /// Useful with emulators and local test servers.
    pub fn anonymous() -> Self {
        Self::from(Anonymous)
    }

    /// Credentials using a fixed OAuth2 access token.
    ///
    /// # Example
    /// ```
    /// # use container_gax::credentials::Credentials;
    /// # tokio_test::block_on(async {
    /// let credentials = Credentials::access_token("ya29.placeholder")?;
    /// let headers = credentials.headers().await?;
    /// assert_eq!(headers.get("authorization").unwrap(), "Bearer ya29.placeholder");
    /// # container_gax::Result::<()>::Ok(()) });
    /// ```
    pub fn access_token<T: AsRef<str>>(token: T) -> crate::Result<Self> {
        let value = HeaderValue::from_str(&format!("Bearer {}", token.as_ref()))
            .map_err(Error::authentication)?;
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(Self::from(Fixed(headers)))
    }

    /// Returns the headers to attach to the next attempt.
    pub async fn headers(&self) -> crate::Result<HeaderMap> {
        self.inner.headers().await
    }
}

#[derive(Debug)]
struct Anonymous;

#[async_trait::async_trait]
impl CredentialsProvider for Anonymous {
    async fn headers(&self) -> crate::Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

#[derive(Debug)]
struct Fixed(HeaderMap);

#[async_trait::async_trait]
impl CredentialsProvider for Fixed {
    async fn headers(&self) -> crate::Result<HeaderMap> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Failing;

    #[async_trait::async_trait]
    impl CredentialsProvider for Failing {
        async fn headers(&self) -> crate::Result<HeaderMap> {
            Err(Error::authentication("token expired"))
        }
    }

    #[tokio::test]
    async fn anonymous() -> anyhow::Result<()> {
        let headers = Credentials::anonymous().headers().await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn access_token() -> anyhow::Result<()> {
        let credentials = Credentials::access_token("test-token")?;
        let headers = credentials.clone().headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-token"))
        );
        Ok(())
    }

    #[test]
    fn access_token_invalid() {
        let got = Credentials::access_token("bad\ntoken");
        assert!(matches!(&got, Err(e) if e.is_authentication()), "{got:?}");
    }

    #[tokio::test]
    async fn custom_provider() {
        let credentials = Credentials::from(Failing);
        let got = credentials.headers().await;
        assert!(matches!(&got, Err(e) if e.is_authentication()), "{got:?}");
    }
}
