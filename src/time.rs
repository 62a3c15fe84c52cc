use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Display;
use tracing::debug;

const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %Z";
const RFC1123_GMT_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Current wall-clock time in the local time zone,
/// ex) "Thu, 05 Dec 2019 09:54:17 CST".
///
/// Falls back to the numeric offset ("+08:00") when the local zone cannot be
/// resolved to an IANA name.
pub fn rfc1123_now() -> String {
    match local_zone() {
        Some(tz) => format_rfc1123(&Utc::now().with_timezone(&tz)),
        None => format_rfc1123(&Local::now()),
    }
}

/// Current time in the form HTTP `Date` headers use,
/// ex) "Thu, 05 Dec 2019 01:54:17 GMT".
pub fn rfc1123_gmt_now() -> String {
    Utc::now().format(RFC1123_GMT_FORMAT).to_string()
}

/// Formats `dt` with its zone abbreviation, ex) "Thu, 05 Dec 2019 09:54:17 CST".
pub fn format_rfc1123<Z>(dt: &DateTime<Z>) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    dt.format(RFC1123_FORMAT).to_string()
}

// `TZ` wins over the system zone, as it does for libc.
fn local_zone() -> Option<Tz> {
    if let Ok(name) = std::env::var("TZ") {
        if let Ok(tz) = name.trim_start_matches(':').parse::<Tz>() {
            return Some(tz);
        }
    }
    match iana_time_zone::get_timezone() {
        Ok(name) => name.parse::<Tz>().ok(),
        Err(err) => {
            debug!(%err, "local time zone not found");
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::FixedOffset;
    use chrono_tz::Asia::Shanghai;
    use chrono_tz::Europe::London;

    #[test]
    fn test_format_fixed_instant() {
        let utc = Utc.with_ymd_and_hms(2019, 12, 5, 9, 54, 17).unwrap();
        assert_eq!(format_rfc1123(&utc), "Thu, 05 Dec 2019 09:54:17 UTC");

        let offset = FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2019, 12, 5, 9, 54, 17)
            .unwrap();
        assert_eq!(format_rfc1123(&offset), "Thu, 05 Dec 2019 09:54:17 +08:00");
    }

    #[test]
    fn test_format_zone_abbreviation() {
        let cst = Shanghai.with_ymd_and_hms(2019, 12, 5, 9, 54, 17).unwrap();
        let formatted = format_rfc1123(&cst);
        assert_eq!(formatted, "Thu, 05 Dec 2019 09:54:17 CST");
        assert!(formatted.ends_with(" CST"));

        // same instant seen from another zone
        let gmt = Utc
            .with_ymd_and_hms(2019, 12, 5, 1, 54, 17)
            .unwrap()
            .with_timezone(&London);
        assert_eq!(format_rfc1123(&gmt), "Thu, 05 Dec 2019 01:54:17 GMT");

        let bst = London.with_ymd_and_hms(2019, 7, 10, 8, 35, 43).unwrap();
        assert!(format_rfc1123(&bst).ends_with(" BST"));
    }

    #[test]
    fn test_gmt_now_shape() {
        let now = rfc1123_gmt_now();
        assert!(now.ends_with(" GMT"));
        // "Thu, 05 Dec 2019 09:54:17 GMT"
        assert_eq!(now.len(), 29);
        assert_eq!(&now[3..5], ", ");
        // parses back as an RFC 2822 date
        assert!(DateTime::parse_from_rfc2822(&now).is_ok());
    }

    #[test]
    fn test_local_now_shape() {
        let now = rfc1123_now();
        let parts = now.split(' ').collect::<Vec<&str>>();
        assert_eq!(parts.len(), 6);
        assert!(parts[0].ends_with(','));
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[3].len(), 4);
        assert_eq!(parts[4].split(':').count(), 3);
        assert!(!parts[5].is_empty());
        assert!(!now.ends_with('\n'));
    }
}
