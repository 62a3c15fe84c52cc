use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

// The speech API splits parameters on '&' and reads values after '=', so both
// stay as they are. Every other non-alphanumeric byte is escaped.
const TARGETS_FOR_API: &AsciiSet = &NON_ALPHANUMERIC.remove(b'&').remove(b'=');

// https://tools.ietf.org/html/rfc3986#section-2.3
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
const TARGETS_FOR_STANDARD: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Standard base64 (`A-Z a-z 0-9 + /`) with `=` padding.
pub fn base64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Percent-encodes `text` byte by byte, leaving ASCII alphanumerics, `&` and
/// `=` untouched. Hex digits are uppercase, so `" "` becomes `%20` and `中`
/// becomes `%E4%B8%AD`.
pub fn url_encode(text: &str) -> String {
    percent_encode(text.as_bytes(), TARGETS_FOR_API).to_string()
}

/// RFC 3986 percent-encoding, for endpoints that treat `&` and `=` as data.
pub fn url_encode_standard(text: &str) -> String {
    percent_encode(text.as_bytes(), TARGETS_FOR_STANDARD).to_string()
}

#[test]
fn test_base64_known_values() {
    assert_eq!(base64_encode(b""), "");
    assert_eq!(base64_encode(b"hi"), "aGk=");
    assert_eq!(base64_encode(b"f"), "Zg==");
    assert_eq!(base64_encode(b"foo"), "Zm9v");
    assert_eq!(base64_encode(b"foobar"), "Zm9vYmFy");
    assert_eq!(base64_encode(&[0xfb, 0xff]), "+/8=");
}

#[test]
fn test_base64_padding_and_round_trip() {
    let data = (0..=255u8).collect::<Vec<u8>>();
    for len in 0..data.len() {
        let input = &data[..len];
        let encoded = base64_encode(input);
        assert_eq!(encoded.len() % 4, 0);
        let padding = encoded.chars().rev().take_while(|&c| c == '=').count();
        assert_eq!(padding, (3 - len % 3) % 3);
        assert_eq!(STANDARD.decode(&encoded).unwrap(), input);
    }
}

#[test]
fn test_url_encode() {
    assert_eq!(url_encode("a&b=c"), "a&b=c");
    assert_eq!(url_encode(" "), "%20");
    assert_eq!(url_encode("中"), "%E4%B8%AD");
    assert_eq!(url_encode(""), "");
    assert_eq!(url_encode("AZaz09"), "AZaz09");
    assert_eq!(url_encode("a-b.c_d~e"), "a%2Db%2Ec%5Fd%7Ee");
    assert_eq!(url_encode("x+y/z"), "x%2By%2Fz");
    assert_eq!(
        url_encode("Thu, 05 Dec 2019 09:54:17 GMT"),
        "Thu%2C%2005%20Dec%202019%2009%3A54%3A17%20GMT"
    );
}

#[test]
fn test_url_encode_escapes_its_own_output() {
    let once = url_encode("a b");
    assert_eq!(once, "a%20b");
    assert_eq!(url_encode(&once), "a%2520b");
}

#[test]
fn test_url_encode_standard() {
    assert_eq!(url_encode_standard("a&b=c"), "a%26b%3Dc");
    assert_eq!(url_encode_standard("a-b.c_d~e"), "a-b.c_d~e");
    assert_eq!(url_encode_standard("中 "), "%E4%B8%AD%20");
}
