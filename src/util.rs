use crate::error::{Error, Result};
use std::borrow::Cow;

/// Splits an endpoint into the value of its `Host` header and the path of its
/// request line.
pub fn endpoint_parts(url: &url::Url) -> Result<(Cow<'_, str>, &str)> {
    let host = url
        .host_str()
        .ok_or_else(|| Error::MissingHost(url.to_string()))?;
    // `port()` is None for the scheme's default port
    let host = match url.port() {
        Some(port) => Cow::Owned(format!("{}:{}", host, port)),
        None => Cow::Borrowed(host),
    };
    Ok((host, url.path()))
}

#[test]
fn test_endpoint_parts() {
    let u = url::Url::parse("wss://iat-api.xfyun.cn/v2/iat").unwrap();
    let (host, path) = endpoint_parts(&u).unwrap();
    assert_eq!(host, "iat-api.xfyun.cn");
    assert_eq!(path, "/v2/iat");

    let u = url::Url::parse("https://example.com:8443/v1/tts?voice=x&speed=50").unwrap();
    let (host, path) = endpoint_parts(&u).unwrap();
    assert_eq!(host, "example.com:8443");
    // the query is not part of the signed request line
    assert_eq!(path, "/v1/tts");

    let u = url::Url::parse("https://example.com:443").unwrap();
    let (host, path) = endpoint_parts(&u).unwrap();
    assert_eq!(host, "example.com");
    assert_eq!(path, "/");

    let u = url::Url::parse("data:text/plain,speech").unwrap();
    assert!(matches!(endpoint_parts(&u), Err(Error::MissingHost(_))));
}
