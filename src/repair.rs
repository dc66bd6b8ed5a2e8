//! Offline repair pass for malformed date strings.
//!
//! Some imported records run the day number straight into the time
//! ("Tue, Jun 610:00 AM"). The pass inserts the missing space and leaves
//! every other row untouched, so running it twice changes nothing.

use regex::Regex;

use crate::db::SessionStore;
use crate::error::AppError;

/// Prefix up through the month and its trailing space, then day digits,
/// then a time with no leading space. The day group is lazy so it yields
/// digits to the hour: "610:00" splits as 6 + 10:00, "1212:30" as 12 + 12:30.
const MALFORMED_DATE: &str = r"^(.*?, [A-Za-z]{3} )([0-9]{1,2}?)([0-9]{1,2}:[0-9]{2}.*)$";

/// Scan every row and insert the missing space where the pattern applies.
/// Returns the number of rows that changed.
pub(crate) fn repair_dates(store: &SessionStore) -> Result<usize, AppError> {
    let pattern = Regex::new(MALFORMED_DATE).expect("valid repair pattern");

    let mut fixed = 0usize;
    for (id, original) in store.dates()? {
        let Some(caps) = pattern.captures(&original) else {
            continue;
        };
        let repaired = format!("{}{} {}", &caps[1], &caps[2], &caps[3]);
        if repaired != original {
            store.update_date(id, &repaired)?;
            fixed += 1;
        }
    }

    Ok(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SessionFilter;
    use crate::db::test_support::store_with;

    #[test]
    fn inserts_missing_space_and_reports_count() {
        let store = store_with(&[
            ("Keynote", "Mon, Jun 5 10:00 AM", Some("K1")),
            ("Workshop", "Tue, Jun 610:00 AM", Some("W2")),
        ]);

        let fixed = repair_dates(&store).expect("repair");
        assert_eq!(fixed, 1);

        let rows = store.list(&SessionFilter::default()).expect("list");
        let workshop = rows.iter().find(|r| r.title == "Workshop").expect("row");
        assert_eq!(workshop.date, "Tue, Jun 6 10:00 AM");
        let keynote = rows.iter().find(|r| r.title == "Keynote").expect("row");
        assert_eq!(keynote.date, "Mon, Jun 5 10:00 AM");
    }

    #[test]
    fn second_run_finds_nothing() {
        let store = store_with(&[
            ("Keynote", "Mon, Jun 5 10:00 AM", Some("K1")),
            ("Workshop", "Tue, Jun 610:00 AM", Some("W2")),
        ]);

        assert_eq!(repair_dates(&store).expect("repair"), 1);
        assert_eq!(repair_dates(&store).expect("repair again"), 0);
    }

    #[test]
    fn two_digit_day_yields_to_the_hour() {
        let store = store_with(&[("Late Talk", "Wed, Jun 1212:30 PM", None)]);

        assert_eq!(repair_dates(&store).expect("repair"), 1);
        let rows = store.list(&SessionFilter::default()).expect("list");
        assert_eq!(rows[0].date, "Wed, Jun 12 12:30 PM");
    }

    #[test]
    fn unrelated_date_shapes_are_untouched() {
        let dates = [
            "Mon, Jun 5 10:00 AM",
            "TBD",
            "",
            "June 5th, morning",
            "Mon Jun 510:00 AM", // no comma, outside the repaired shape
        ];
        let rows: Vec<(&str, &str, Option<&str>)> =
            dates.iter().map(|d| ("Talk", *d, None)).collect();
        let store = store_with(&rows);

        assert_eq!(repair_dates(&store).expect("repair"), 0);
        let kept: Vec<String> = store
            .dates()
            .expect("dates")
            .into_iter()
            .map(|(_, d)| d)
            .collect();
        assert_eq!(kept, dates);
    }
}
