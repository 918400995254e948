//! Locale-aware label formatting.
//!
//! Engines treat the formatter as a pure injected collaborator. The default
//! implementation ships English names and, instead of propagating a failure
//! on a malformed or unsupported locale tag, falls back to `en-US` and logs
//! a warning once per call site.

use tracing::warn;

use crate::core::CalendarDate;

pub const DEFAULT_LOCALE: &str = "en-US";

/// External formatting capability consumed by the widgets.
pub trait LocaleFormatter {
    /// Full month name for a 1-based month.
    fn month_name(&self, locale: &str, month: u32) -> String;

    /// Short weekday name for a weekday index (`0 = Sunday`).
    fn weekday_short(&self, locale: &str, weekday_index: u32) -> String;

    /// Full localized rendering of a date.
    fn format_date(&self, locale: &str, date: CalendarDate) -> String;
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Built-in formatter backing the `en` locale family.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLocaleFormatter;

impl DefaultLocaleFormatter {
    fn resolve<'a>(&self, locale: &'a str) -> &'a str {
        if is_well_formed_tag(locale) && locale.starts_with("en") {
            locale
        } else {
            warn!(locale, "unsupported locale tag, falling back to en-US");
            DEFAULT_LOCALE
        }
    }
}

impl LocaleFormatter for DefaultLocaleFormatter {
    fn month_name(&self, locale: &str, month: u32) -> String {
        let _ = self.resolve(locale);
        MONTH_NAMES
            .get(month.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or("")
            .to_owned()
    }

    fn weekday_short(&self, locale: &str, weekday_index: u32) -> String {
        let _ = self.resolve(locale);
        WEEKDAY_SHORT
            .get(weekday_index as usize % 7)
            .copied()
            .unwrap_or("")
            .to_owned()
    }

    fn format_date(&self, locale: &str, date: CalendarDate) -> String {
        let _ = self.resolve(locale);
        format!(
            "{} {}, {}",
            self.month_name(locale, date.month()),
            date.day(),
            date.year()
        )
    }
}

/// BCP 47-shaped check: `xx` or `xx-YY`.
fn is_well_formed_tag(locale: &str) -> bool {
    let mut parts = locale.split('-');
    let Some(language) = parts.next() else {
        return false;
    };
    if language.len() != 2 || !language.chars().all(|c| c.is_ascii_lowercase()) {
        return false;
    }
    match parts.next() {
        None => true,
        Some(region) => {
            parts.next().is_none()
                && region.len() == 2
                && region.chars().all(|c| c.is_ascii_uppercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DefaultLocaleFormatter, LocaleFormatter, is_well_formed_tag};
    use crate::core::CalendarDate;

    #[test]
    fn tag_shape_validation() {
        assert!(is_well_formed_tag("en"));
        assert!(is_well_formed_tag("en-US"));
        assert!(!is_well_formed_tag("english"));
        assert!(!is_well_formed_tag("en-us"));
        assert!(!is_well_formed_tag(""));
        assert!(!is_well_formed_tag("en-US-x"));
    }

    #[test]
    fn month_and_weekday_names() {
        let formatter = DefaultLocaleFormatter;
        assert_eq!(formatter.month_name("en-US", 6), "June");
        assert_eq!(formatter.weekday_short("en-US", 0), "Sun");
        assert_eq!(formatter.weekday_short("en-US", 6), "Sat");
    }

    #[test]
    fn malformed_locale_falls_back_instead_of_failing() {
        let formatter = DefaultLocaleFormatter;
        let date = CalendarDate::new(2024, 7, 1).expect("valid date");
        assert_eq!(formatter.format_date("not a locale", date), "July 1, 2024");
    }
}
