//! Display formatting for dates, runtimes and languages.

use chrono::NaiveDate;
use isolang::Language;

/// Formats a `YYYY-MM-DD` date as e.g. "January 15, 2023".
///
/// Input that is not such a date is returned unchanged. Callers skip empty
/// release dates before getting here.
pub fn format_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d").map_or_else(
        |_| String::from(iso),
        |date| date.format("%B %-d, %Y").to_string(),
    )
}

/// Formats a runtime in minutes as "Xm" below one hour, "Xh Ym" otherwise.
pub fn format_runtime(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Codes whose ISO 639-3 reference name differs from the everyday English
/// name a browser locale table shows.
const COMMON_NAMES: &[(&str, &str)] = &[
    ("el", "Greek"),
    ("gd", "Scottish Gaelic"),
    ("ht", "Haitian Creole"),
    ("km", "Khmer"),
    ("ky", "Kyrgyz"),
    ("pa", "Punjabi"),
    ("ps", "Pashto"),
    ("to", "Tongan"),
    ("ug", "Uyghur"),
];

/// English display name for an ISO 639-1 language code ("en" -> "English").
///
/// Names come from the ISO 639-3 table with qualifiers such as
/// "(macrolanguage)" dropped, except for [`COMMON_NAMES`]. Unknown codes
/// are returned as given.
pub fn language_name(code: &str) -> String {
    if let Some((_, name)) = COMMON_NAMES.iter().find(|(c, _)| *c == code) {
        return String::from(*name);
    }
    Language::from_639_1(code).map_or_else(
        || String::from(code),
        |lang| {
            let name = lang.to_name();
            String::from(name.split_once(" (").map_or(name, |(head, _)| head))
        },
    )
}
