// Transport layer for the management endpoint.
//
// `Transport` is the seam between the command layer and the wire: it
// takes a serialized operation and hands back the HTTP status and raw
// body. `HttpTransport` is the production implementation, POSTing to
// `http://{controller}/management` with HTTP Digest authentication.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, WWW_AUTHENTICATE};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, trace};
use url::Url;

use crate::digest::{self, Challenge};
use crate::error::Error;

/// Status code and body of one management round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one JSON command and returns the raw HTTP outcome.
///
/// Network-level failures are reported as [`Error::Server`]. HTTP error
/// statuses are NOT errors at this layer -- classification belongs to
/// [`crate::envelope::interpret`].
pub trait Transport: Send + Sync {
    fn post(&self, body: String) -> impl Future<Output = Result<RawResponse, Error>> + Send;
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("jbossctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::HttpClient(format!("failed to build HTTP client: {e}")))
    }
}

/// Cached Digest challenge plus the nonce count used against it.
struct DigestSession {
    challenge: Challenge,
    nonce_count: u32,
}

/// HTTP transport with Digest authentication against the management realm.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: Url,
    username: String,
    password: SecretString,
    /// Last challenge seen. Reused until the server rejects it, so only the
    /// first request of a session pays for the extra round trip.
    session: Mutex<Option<DigestSession>>,
}

impl HttpTransport {
    /// Create a transport for `controller` (`host:port`).
    pub fn new(
        controller: &str,
        username: impl Into<String>,
        password: SecretString,
        config: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = config.build_client()?;
        let endpoint = management_url(controller)?;
        Ok(Self::with_client(http, endpoint, username, password))
    }

    /// Create a transport with a pre-built `reqwest::Client` and endpoint.
    pub fn with_client(
        http: reqwest::Client,
        endpoint: Url,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            http,
            endpoint,
            username: username.into(),
            password,
            session: Mutex::new(None),
        }
    }

    /// The management endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Authorization header for the next request, if a challenge is cached.
    fn next_authorization(&self) -> Option<String> {
        let mut guard = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        let session = guard.as_mut()?;
        session.nonce_count += 1;
        Some(session.challenge.authorization(
            &self.username,
            self.password.expose_secret(),
            "POST",
            self.endpoint.path(),
            session.nonce_count,
            &digest::client_nonce(),
        ))
    }

    /// Cache a fresh challenge and return the header answering it.
    fn answer_challenge(&self, challenge: Challenge) -> String {
        let header = challenge.authorization(
            &self.username,
            self.password.expose_secret(),
            "POST",
            self.endpoint.path(),
            1,
            &digest::client_nonce(),
        );
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(DigestSession {
            challenge,
            nonce_count: 1,
        });
        header
    }

    async fn send(
        &self,
        body: &str,
        authorization: Option<&str>,
    ) -> Result<reqwest::Response, Error> {
        let mut request = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned());
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }
        request
            .send()
            .await
            .map_err(|e| Error::server(format!("Error requesting: {e}")))
    }
}

impl Transport for HttpTransport {
    async fn post(&self, body: String) -> Result<RawResponse, Error> {
        debug!(endpoint = %self.endpoint, "POST");
        trace!(%body, "management request");

        let mut response = self.send(&body, self.next_authorization().as_deref()).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            if let Some(challenge) = select_challenge(response.headers()) {
                debug!(realm = %challenge.realm, stale = challenge.stale, "answering digest challenge");
                let authorization = self.answer_challenge(challenge);
                response = self.send(&body, Some(&authorization)).await?;
            }
        }

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::server(format!("Error requesting: {e}")))?;
        trace!(status, %body, "management response");

        Ok(RawResponse { status, body })
    }
}

/// First `WWW-Authenticate` challenge this client can answer.
///
/// Servers may offer several schemes or Digest algorithms in separate
/// headers; unsupported ones are skipped.
fn select_challenge(headers: &HeaderMap) -> Option<Challenge> {
    headers
        .get_all(WWW_AUTHENTICATE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(Challenge::parse)
}

/// `http://{controller}/management`
pub fn management_url(controller: &str) -> Result<Url, Error> {
    Ok(Url::parse(&format!("http://{controller}/management"))?)
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    #[test]
    fn management_url_from_host_port() {
        let url = management_url("serie1cabrio:9990").expect("url");
        assert_eq!(url.as_str(), "http://serie1cabrio:9990/management");
        assert_eq!(url.path(), "/management");
    }

    #[test]
    fn select_challenge_skips_unsupported_offers() {
        let mut headers = HeaderMap::new();
        headers.append(
            WWW_AUTHENTICATE,
            HeaderValue::from_static(
                r#"Digest realm="ManagementRealm", nonce="sha", algorithm=SHA-256, qop="auth""#,
            ),
        );
        headers.append(
            WWW_AUTHENTICATE,
            HeaderValue::from_static(r#"Basic realm="ManagementRealm""#),
        );
        headers.append(
            WWW_AUTHENTICATE,
            HeaderValue::from_static(
                r#"Digest realm="ManagementRealm", nonce="md5", algorithm=MD5, qop="auth""#,
            ),
        );

        let challenge = select_challenge(&headers).expect("challenge");
        assert_eq!(challenge.nonce, "md5");
    }

    #[test]
    fn select_challenge_none_when_nothing_supported() {
        let mut headers = HeaderMap::new();
        headers.append(
            WWW_AUTHENTICATE,
            HeaderValue::from_static(r#"Digest realm="R", nonce="n", algorithm=SHA-256"#),
        );
        assert!(select_challenge(&headers).is_none());
    }

    #[test]
    fn management_url_rejects_garbage() {
        assert!(matches!(
            management_url("bad host:99999"),
            Err(Error::InvalidUrl(_))
        ));
    }
}
