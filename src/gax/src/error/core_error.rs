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

use super::rpc::{Code, Status};
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client methods.
///
/// The client libraries report errors from multiple sources. The service may
/// return an error, the transport may be unable to reach the service, an
/// attempt may time out before a response is received, the retry policy may
/// be exhausted, or the library may be unable to build the request from the
/// application inputs.
///
/// Most applications will just return the error or log it. Applications that
/// need to interrogate the error can use the predicates in this type, and
/// [code][Error::code] to classify transport failures.
///
/// # Example
/// ```
/// use container_gax::error::Error;
/// use container_gax::error::rpc::{Code, Status};
/// match example_function() {
///     Err(e) if e.code() == Some(Code::NotFound) => { println!("missing {e}"); },
///     Err(e) if e.is_exhausted() => {
///         println!("gave up after {:?} attempts: {e}", e.attempt_count());
///     },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     # Err(Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
    attempts: Option<u32>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use container_gax::error::Error;
    /// use container_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// assert_eq!(error.code(), Some(Code::NotFound));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// Creates a service error including the HTTP status code and headers.
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            status,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
            attempts: None,
        }
    }

    /// Creates an error representing an attempt timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use container_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
            attempts: None,
        }
    }

    /// The attempt could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value to handle temporary latency
    /// increases too.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted retry policy.
    ///
    /// The `last` error is the error returned by the last attempt. It is
    /// available via [source][std::error::Error::source].
    ///
    /// # Example
    /// ```
    /// use container_gax::error::Error;
    /// use container_gax::error::rpc::{Code, Status};
    /// let last = Error::service(Status::default().set_code(Code::Unavailable));
    /// let error = Error::exhausted(3, last);
    /// assert!(error.is_exhausted());
    /// assert_eq!(error.attempt_count(), Some(3));
    /// assert_eq!(error.code(), Some(Code::Unavailable));
    /// ```
    pub fn exhausted(attempt_count: u32, last: Error) -> Self {
        Self {
            kind: ErrorKind::Exhausted(attempt_count),
            source: Some(Box::new(last)),
            attempts: None,
        }
    }

    /// The request could not complete before the retry policy expired.
    ///
    /// This is always a client-side generated error, but it is the result of
    /// one or more errors received from the service. The last such error is
    /// the [source][std::error::Error::source] of this error.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is a transient problem that lasts
    /// longer than your retry policy. If your application can tolerate longer
    /// recovery times then extend the retry policy.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted(_))
    }

    /// The number of attempts made by the call.
    ///
    /// Set when the retry policy was exhausted, and when a call that already
    /// retried fails with a permanent error. Single-attempt failures return
    /// `None`.
    pub fn attempt_count(&self) -> Option<u32> {
        match &self.kind {
            ErrorKind::Exhausted(n) => Some(*n),
            _ => self.attempts,
        }
    }

    /// Records the number of attempts made before this error was returned.
    ///
    /// The retry loop calls this for permanent errors after one or more
    /// retries. The kind and [code][Error::code] of the error do not change.
    ///
    /// # Example
    /// ```
    /// use container_gax::error::Error;
    /// use container_gax::error::rpc::{Code, Status};
    /// let error = Error::service(Status::default().set_code(Code::NotFound))
    ///     .with_attempt_count(3);
    /// assert_eq!(error.attempt_count(), Some(3));
    /// assert_eq!(error.code(), Some(Code::NotFound));
    /// assert!(!error.is_exhausted());
    /// ```
    pub fn with_attempt_count(mut self, attempt_count: u32) -> Self {
        self.attempts = Some(attempt_count);
        self
    }

    /// Creates an error representing invalid call-site arguments.
    ///
    /// # Example
    /// ```
    /// use container_gax::error::Error;
    /// let error = Error::invalid_argument("missing placeholder `cluster`");
    /// assert!(error.is_invalid_argument());
    /// ```
    pub fn invalid_argument<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            source: Some(source.into()),
            attempts: None,
        }
    }

    /// The request could not be built from the application inputs.
    ///
    /// This is always a client-side generated error, detected before any
    /// attempt is made. It is never retried.
    ///
    /// # Troubleshooting
    ///
    /// Verify the resource names and metadata used in the request. Missing
    /// path placeholders and invalid metadata keys are the most common
    /// causes.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
            attempts: None,
        }
    }

    /// The response could not be deserialized.
    ///
    /// The most common cause for deserialization problems are bugs in the
    /// client library and (rarely) bugs in the service.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
            attempts: None,
        }
    }

    /// The request could not be serialized.
    ///
    /// This error is never transient, serialization is deterministic.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a failure to create the authentication
    /// headers.
    #[doc(hidden)]
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
            attempts: None,
        }
    }

    /// The request could not be authenticated.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error from an HTTP response without a valid status payload.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
            attempts: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a failure to reach the service.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
            attempts: None,
        }
    }

    /// The request could not reach the service, or the response from the
    /// service could not be interpreted as a status.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// The [Status] payload associated with this error.
    ///
    /// Services return a detailed `Status` message including a numeric code
    /// for the error type, a human-readable message, and a sequence of
    /// details.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.status),
            _ => None,
        }
    }

    /// The canonical code for transport and service errors.
    ///
    /// Retry policies classify errors using this value. Errors detected before
    /// any attempt (invalid arguments, serialization) do not have a code.
    /// Attempt timeouts report [Code::DeadlineExceeded], and failures to reach
    /// the service report [Code::Unavailable]. An exhausted retry policy
    /// reports the code of the last attempt.
    pub fn code(&self) -> Option<Code> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.status.code),
            ErrorKind::Timeout => Some(Code::DeadlineExceeded),
            ErrorKind::Transport(d) => match d.status_code {
                Some(c) => Some(Code::from_http_status(c)),
                None => Some(Code::Unavailable),
            },
            ErrorKind::Exhausted(_) => self
                .source
                .as_ref()
                .and_then(|e| e.downcast_ref::<Error>())
                .and_then(Error::code),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => d.status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::InvalidArgument, Some(e)) => {
                write!(f, "cannot build the request from the arguments: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the attempt exceeded its deadline {e}")
            }
            (ErrorKind::Exhausted(n), Some(e)) => {
                write!(f, "retry policy exhausted after {n} attempt(s), last error: {e}")
            }
            (ErrorKind::Transport(details), source) => details.display(source, f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code, d.status.message
                )
            }
            (_, None) => write!(f, "{:?}", self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

#[derive(Debug)]
enum ErrorKind {
    InvalidArgument,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted(u32),
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: &Option<BoxError>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => write!(f, "the transport reports an unknown error"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND");
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.code(), Some(Code::NotFound));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains(Code::NotFound.name()), "{error}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND");
        let headers = {
            let mut headers = HeaderMap::new();
            headers.insert(
                "content-type",
                http::HeaderValue::from_static("application/json"),
            );
            headers
        };
        let error =
            Error::service_with_http_metadata(status.clone(), Some(404), Some(headers.clone()));
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout("simulated");
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert_eq!(error.code(), Some(Code::DeadlineExceeded));
        assert!(error.to_string().contains("simulated"), "{error}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.attempt_count().is_none(), "{error:?}");
    }

    #[test]
    fn exhausted() {
        let last = Error::service(
            Status::default()
                .set_code(Code::Unavailable)
                .set_message("try-again"),
        );
        let error = Error::exhausted(5, last);
        assert!(error.is_exhausted(), "{error:?}");
        assert_eq!(error.attempt_count(), Some(5));
        assert_eq!(error.code(), Some(Code::Unavailable));
        let got = error.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(got, Some(e) if e.status().map(|s| s.message.as_str()) == Some("try-again")),
            "{error:?}"
        );
        assert!(error.to_string().contains("5 attempt"), "{error}");
        assert!(error.to_string().contains("try-again"), "{error}");
        assert!(error.status().is_none(), "{error:?}");
    }

    #[test]
    fn invalid_argument() {
        let error = Error::invalid_argument("missing placeholder `cluster`");
        assert!(error.is_invalid_argument(), "{error:?}");
        assert!(error.code().is_none(), "{error:?}");
        assert!(error.to_string().contains("`cluster`"), "{error}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser("bad");
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.code().is_none(), "{error:?}");
        let error = Error::deser("bad");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("bad"), "{error}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication("no token");
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.to_string().contains("no token"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io("connection refused");
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.code(), Some(Code::Unavailable));
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection refused"), "{error}");
    }

    #[test]
    fn http() {
        let error = Error::http(
            502,
            HeaderMap::new(),
            bytes::Bytes::from_static(b"bad gateway"),
        );
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.code(), Some(Code::Internal));
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"bad gateway"))
        );
        assert!(error.to_string().contains("[502]"), "{error}");
    }
}
