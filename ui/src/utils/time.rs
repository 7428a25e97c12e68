use jiff::{Timestamp, Zoned, tz};

/// Show a timestamp in the browser's timezone.
pub fn localize_timestamp(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(tz::TimeZone::system())
}

/// Short form used in activity lists, e.g. "Mar 01, 2025 09:30 AM".
pub fn format_activity_time(timestamp: Timestamp) -> String {
    localize_timestamp(timestamp)
        .strftime("%b %d, %Y %I:%M %p")
        .to_string()
}
