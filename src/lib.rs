//! Authorization helpers for speech APIs that sign requests with
//! HMAC-SHA256 (`api_key="..", algorithm="hmac-sha256", headers="..",
//! signature=".."`).
//!
//! The leaf helpers ([`rfc1123_now`], [`hmac_sha256`], [`base64_encode`],
//! [`url_encode`], [`delay`]) are independent and stateless.
//! [`RequestSigner`] composes them into a signed `Date`/`Authorization`
//! pair and the authorized endpoint URL.
//!
//! ```
//! use speechsign::{Credentials, RequestSigner};
//!
//! let credentials = Credentials::new("app", "key", "secret");
//! let signed = RequestSigner::new("wss://iat-api.xfyun.cn/v2/iat")?
//!     .date("Wed, 10 Jul 2019 07:35:43 GMT")
//!     .sign(&credentials)?;
//! assert!(signed.to_url().starts_with("wss://iat-api.xfyun.cn/v2/iat?authorization="));
//! # Ok::<(), speechsign::Error>(())
//! ```

pub mod auth;
#[cfg(feature = "reqwest")]
pub mod client;
pub mod credentials;
pub mod delay;
pub mod encoder;
pub mod error;
pub mod signer;
pub mod time;

mod util;

pub use auth::{RequestSigner, SignedRequest};
#[cfg(feature = "reqwest")]
pub use client::SignRequest;
pub use credentials::Credentials;
#[cfg(feature = "tokio")]
pub use delay::delay_async;
pub use delay::delay;
pub use encoder::{base64_encode, url_encode, url_encode_standard};
pub use error::{Error, Result};
pub use signer::{hmac_sha256, sha256, Digest};
pub use time::{format_rfc1123, rfc1123_gmt_now, rfc1123_now};
