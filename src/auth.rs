use crate::credentials::Credentials;
use crate::encoder::{base64_encode, url_encode};
use crate::error::Result;
use crate::signer::{hmac_sha256, sha256};
use crate::time::rfc1123_gmt_now;
use crate::util;
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, instrument};

pub const ALGORITHM_HMAC_SHA256: &str = "hmac-sha256";

const HEADER_HOST: &str = "host";
const HEADER_DATE: &str = "date";
const HEADER_REQUEST_LINE: &str = "request-line";
const HEADER_DIGEST: &str = "digest";

const QUERY_KEY_AUTHORIZATION: &str = "authorization";
const QUERY_KEY_DATE: &str = "date";
const QUERY_KEY_HOST: &str = "host";

/// Signs one request against an endpoint.
///
/// ```
/// use speechsign::{Credentials, RequestSigner};
///
/// let signed = RequestSigner::new("https://api.example.com/v1/private/tts")?
///     .method("post")
///     .body(&b"{\"text\":\"hello\"}"[..])
///     .sign(&Credentials::new("app", "key", "secret"))?;
/// assert_eq!(signed.request_line, "POST /v1/private/tts HTTP/1.1");
/// assert!(signed.digest.is_some());
/// # Ok::<(), speechsign::Error>(())
/// ```
pub struct RequestSigner<'a> {
    endpoint: url::Url,
    http_method: Cow<'a, str>,
    date: Option<Cow<'a, str>>,
    body: Option<Cow<'a, [u8]>>,
}

/// Values produced by [`RequestSigner::sign`]. Holds no secret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignedRequest {
    pub endpoint: url::Url,
    pub host: String,
    pub date: String,
    pub request_line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    pub signature: String,
    pub authorization: String,
}

impl<'a> RequestSigner<'a> {
    /// Constructor of RequestSigner with the endpoint to access.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = url::Url::parse(endpoint)?;
        // reject host-less endpoints early
        util::endpoint_parts(&endpoint)?;
        Ok(RequestSigner {
            endpoint,
            http_method: Cow::Borrowed("GET"),
            date: None,
            body: None,
        })
    }

    /// HTTP method, ex) "GET", "POST", ...
    pub fn method(&mut self, http_method: impl Into<Cow<'a, str>>) -> &mut Self {
        self.http_method = http_method.into();
        self
    }

    /// Fixes the signed date instead of reading the clock at signing time.
    pub fn date(&mut self, date: impl Into<Cow<'a, str>>) -> &mut Self {
        self.date = Some(date.into());
        self
    }

    /// Request body; its SHA-256 digest joins the signed headers.
    pub fn body(&mut self, body: impl Into<Cow<'a, [u8]>>) -> &mut Self {
        self.body = Some(body.into());
        self
    }

    /// Signs host, date and request line (plus the body digest, when a body is
    /// set). The request line carries the path only; a query already on the
    /// endpoint is sent but not signed.
    #[instrument(skip_all, fields(endpoint = %self.endpoint, method = %self.http_method))]
    pub fn sign(&self, credentials: &Credentials) -> Result<SignedRequest> {
        let (host, path) = util::endpoint_parts(&self.endpoint)?;
        let date = self
            .date
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_else(rfc1123_gmt_now);
        let request_line = format!(
            "{} {} HTTP/1.1",
            self.http_method.to_ascii_uppercase(),
            path
        );
        let digest = self
            .body
            .as_ref()
            .map(|body| format!("SHA-256={}", base64_encode(&sha256(body))));

        // lines of the signature origin, in the order of the `headers` list
        let mut signed_headers = vec![HEADER_HOST, HEADER_DATE, HEADER_REQUEST_LINE];
        let mut origin = vec![
            format!("{}: {}", HEADER_HOST, host),
            format!("{}: {}", HEADER_DATE, date),
            request_line.clone(),
        ];
        if let Some(digest) = &digest {
            signed_headers.push(HEADER_DIGEST);
            origin.push(format!("{}: {}", HEADER_DIGEST, digest));
        }
        let origin = origin.join("\n");

        let mac = hmac_sha256(origin.as_bytes(), credentials.api_secret.as_bytes())?;
        let signature = base64_encode(&mac);
        let authorization = format!(
            r#"api_key="{}", algorithm="{}", headers="{}", signature="{}""#,
            credentials.api_key,
            ALGORITHM_HMAC_SHA256,
            signed_headers.join(" "),
            signature
        );
        debug!(%host, headers = %signed_headers.join(" "), "signed request");

        Ok(SignedRequest {
            endpoint: self.endpoint.clone(),
            host: host.into_owned(),
            date,
            request_line,
            digest,
            signature,
            authorization,
        })
    }
}

impl SignedRequest {
    /// Value of the `Authorization` header.
    pub fn authorization_header(&self) -> &str {
        &self.authorization
    }

    /// Query string carrying the authorization, for endpoints that take it in
    /// the URL (WebSocket handshakes).
    pub fn query(&self) -> String {
        let raw = format!(
            "{}={}&{}={}&{}={}",
            QUERY_KEY_AUTHORIZATION,
            base64_encode(self.authorization.as_bytes()),
            QUERY_KEY_DATE,
            self.date,
            QUERY_KEY_HOST,
            self.host
        );
        url_encode(&raw)
    }

    /// The endpoint with [`SignedRequest::query`] appended to its query string.
    pub fn to_url(&self) -> String {
        let mut url = self.endpoint.clone();
        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{}&{}", existing, self.query()),
            _ => self.query(),
        };
        url.set_query(Some(&query));
        url.to_string()
    }

    /// Headers to attach to an HTTP request.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Host", self.host.clone()),
            ("Date", self.date.clone()),
            ("Authorization", self.authorization.clone()),
        ];
        if let Some(digest) = &self.digest {
            headers.push(("Digest", digest.clone()));
        }
        headers
    }
}
