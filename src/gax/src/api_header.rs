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

//! Client identification and request routing metadata.
//!
//! Every call carries an `x-goog-api-client` header describing the
//! language runtime, this crate, and the generated client. Calls on a
//! specific resource also carry `x-goog-request-params` so the service can
//! route the request without parsing the body.

use crate::Result;
use crate::error::Error;
use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The client identification header.
pub const X_GOOG_API_CLIENT: &str = "x-goog-api-client";

/// The request routing header.
pub const X_GOOG_REQUEST_PARAMS: &str = "x-goog-request-params";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Describes the client library making the calls.
///
/// Generated clients create one instance with their own version. Applications
/// may extend it with the name and version of a wrapping library, or a custom
/// user agent.
///
/// # Example
/// ```
/// # use container_gax::api_header::ClientInfo;
/// let info = ClientInfo::new("1.2.3").with_library("my-tool", "0.1.0");
/// assert!(info.header_value().contains("gapic/1.2.3"));
/// assert!(info.header_value().ends_with("my-tool/0.1.0"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClientInfo {
    gapic_version: String,
    library: Option<(String, String)>,
    user_agent: Option<String>,
}

impl ClientInfo {
    pub fn new<V: Into<String>>(gapic_version: V) -> Self {
        Self {
            gapic_version: gapic_version.into(),
            library: None,
            user_agent: None,
        }
    }

    /// Appends a `name/version` tag to the client identification.
    pub fn with_library<N: Into<String>, V: Into<String>>(mut self, name: N, version: V) -> Self {
        self.library = Some((name.into(), version.into()));
        self
    }

    /// Sets the `user-agent` header.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.user_agent = Some(v.into());
        self
    }

    pub fn gapic_version(&self) -> &str {
        &self.gapic_version
    }

    /// Format the value of the `x-goog-api-client` header.
    pub fn header_value(&self) -> String {
        // Strip out the initial "rustc " string from `RUSTC_VERSION`. If not
        // found, leave RUSTC_VERSION unchanged.
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(build_info::RUSTC_VERSION);
        let gax_version = build_info::PKG_VERSION;

        let value = format!(
            "gl-rust/{rustc_version} gax/{gax_version} gapic/{}",
            self.gapic_version
        );
        match &self.library {
            None => value,
            Some((name, version)) => format!("{value} {name}/{version}"),
        }
    }

    /// The headers identifying this client.
    ///
    /// Fails if the library tag or the user agent are not valid header
    /// values.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&self.header_value()).map_err(Error::invalid_argument)?;
        headers.insert(HeaderName::from_static(X_GOOG_API_CLIENT), value);
        if let Some(agent) = &self.user_agent {
            let value = HeaderValue::from_str(agent).map_err(Error::invalid_argument)?;
            headers.insert(http::header::USER_AGENT, value);
        }
        Ok(headers)
    }
}

// Characters left unescaped in routing values, per RFC 3986 unreserved set.
const ROUTING: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Format the value of the `x-goog-request-params` header.
///
/// Pairs with empty values are skipped. Returns `None` if no pairs remain.
///
/// # Example
/// ```
/// # use container_gax::api_header::request_params;
/// let value = request_params(&[("name", "projects/p/locations/l"), ("parent", "")]);
/// assert_eq!(value.as_deref(), Some("name=projects%2Fp%2Flocations%2Fl"));
/// ```
pub fn request_params(pairs: &[(&str, &str)]) -> Option<String> {
    let params = pairs
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={}", utf8_percent_encode(v, ROUTING)))
        .collect::<Vec<_>>();
    (!params.is_empty()).then(|| params.join("&"))
}
