use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::NaiveDate;

/// Release-date layouts, tried in order; the first one that consumes the
/// entire string wins. Keep the order: a bare "2013" would otherwise be
/// swallowed mid-string by one of the longer layouts.
static RELEASE_DATE_FORMATS: &[&str] = &[
    "%d-%b-%y",  // 18-Sep-11
    "%d-%b-%Y",  // 18-Sep-2011
    "%Y",        // 2013
    "%m %Y",     // 09 2013
    "%b %Y",     // Sep 2013
    "%b-%y",     // Sep-14
    "%d-%m-%Y",  // 01-11-2015
    "%b %d, %Y", // Sep 18, 2013
    "%m %d, %Y", // 09 18, 2013
];

/// Pull a release year out of a free-form date cell.
///
/// Returns `None` for anything no layout matches in full — empty cells, NA
/// tokens and genuinely malformed dates alike. An unparseable date is a
/// missing year, never an error.
pub fn extract_year(raw: &str) -> Option<i32> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    RELEASE_DATE_FORMATS.iter().find_map(|fmt| year_from(s, fmt))
}

/// Match `s` against a single strftime layout and resolve the year.
fn year_from(s: &str, fmt: &str) -> Option<i32> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, s, StrftimeItems::new(fmt)).ok()?;

    let year = match (parsed.year, parsed.year_mod_100) {
        (Some(y), _) => y,
        // Two-digit years pivot at 69: 00-68 land in the 2000s.
        (None, Some(y)) => y + if y <= 68 { 2000 } else { 1900 },
        _ => return None,
    };
    // chrono reads "%Y" as a signed year, so "Sep-14" would match "%b %Y"
    // as 14 BC here. Release years start at 1 AD; keep trying layouts.
    if year < 1 {
        return None;
    }

    // Layouts without a day or month default them to 1; whatever was parsed
    // must still name a real calendar date, so "30-Feb-11" falls through.
    NaiveDate::from_ymd_opt(year, parsed.month.unwrap_or(1), parsed.day.unwrap_or(1))?;
    Some(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_layout_maps_to_its_year() {
        assert_eq!(extract_year("18-Sep-11"), Some(2011));
        assert_eq!(extract_year("18-Sep-2011"), Some(2011));
        assert_eq!(extract_year("2013"), Some(2013));
        assert_eq!(extract_year("09 2013"), Some(2013));
        assert_eq!(extract_year("Sep 2013"), Some(2013));
        assert_eq!(extract_year("Sep-14"), Some(2014));
        assert_eq!(extract_year("01-11-2015"), Some(2015));
        assert_eq!(extract_year("Sep 18, 2013"), Some(2013));
        assert_eq!(extract_year("09 18, 2013"), Some(2013));
    }

    #[test]
    fn full_month_names_fall_through_every_layout() {
        // "%m %Y" only matches numeric months and "%b" only matches the
        // three-letter abbreviation, so spelled-out months stay missing.
        assert_eq!(extract_year("September 2013"), None);
        assert_eq!(extract_year("September 18, 2013"), None);
    }

    #[test]
    fn unmatched_strings_are_missing_not_errors() {
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("   "), None);
        assert_eq!(extract_year("NA"), None);
        assert_eq!(extract_year("unreleased"), None);
        assert_eq!(extract_year("18/09/2011"), None);
    }

    #[test]
    fn two_digit_years_pivot_at_sixty_nine() {
        assert_eq!(extract_year("Sep-00"), Some(2000));
        assert_eq!(extract_year("Sep-68"), Some(2068));
        assert_eq!(extract_year("Sep-69"), Some(1969));
        assert_eq!(extract_year("Sep-99"), Some(1999));
    }

    #[test]
    fn matched_layout_must_name_a_real_date() {
        assert_eq!(extract_year("30-Feb-11"), None);
        assert_eq!(extract_year("32-Jan-11"), None);
        assert_eq!(extract_year("00 2013"), None);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(extract_year("  2013  "), Some(2013));
    }
}
