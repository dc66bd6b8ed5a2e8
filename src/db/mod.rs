//! SQLite session store
//!
//! One table `sessions(title, date, session_code)` addressed by rowid.
//! Records are written by an external import; this tool only reads them,
//! apart from the targeted date updates of the repair pass.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::error::AppError;

/// One conference session record. `id` is the SQLite rowid and is stable
/// for the lifetime of the record.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SessionRow {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) date: String,
    pub(crate) code: Option<String>,
}

impl SessionRow {
    /// NULL codes display as an empty string.
    pub(crate) fn code_display(&self) -> &str {
        self.code.as_deref().unwrap_or_default()
    }
}

/// Conference day selectable in the day filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Day {
    pub(crate) const ALL: [Day; 4] = [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday];

    /// Accepts a full day name or a prefix of at least three letters,
    /// case-insensitive ("Monday", "mon", "THU").
    pub(crate) fn parse(input: &str) -> Result<Day, AppError> {
        let lower = input.trim().to_ascii_lowercase();
        if lower.len() >= 3 {
            for day in Self::ALL {
                if day.name().to_ascii_lowercase().starts_with(&lower) {
                    return Ok(day);
                }
            }
        }
        Err(AppError::InvalidDay {
            input: input.to_string(),
        })
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
        }
    }

    /// Leading weekday token as stored in the date column ("Mon, Jun 5 ...").
    pub(crate) fn abbrev(self) -> &'static str {
        &self.name()[..3]
    }
}

/// Filter state for the session lister. Both constraints are optional and
/// combine with AND; blank filter text counts as absent.
#[derive(Debug, Default, Clone)]
pub(crate) struct SessionFilter {
    pub(crate) text: Option<String>,
    pub(crate) day: Option<Day>,
}

impl SessionFilter {
    fn text_pattern(&self) -> Option<String> {
        let text = self.text.as_deref()?.trim();
        if text.is_empty() {
            return None;
        }
        Some(format!("%{}%", text.to_lowercase()))
    }
}

#[derive(Debug)]
pub(crate) struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    /// Open an existing session database. The browser has no import path of
    /// its own, so a missing file is a startup error rather than an empty DB.
    pub(crate) fn open(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::DbNotFound {
                path: path.to_path_buf(),
            });
        }
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// All records matching the filter, ordered by date ascending
    /// (lexicographic on the stored text; dates are never parsed).
    pub(crate) fn list(&self, filter: &SessionFilter) -> Result<Vec<SessionRow>, AppError> {
        let mut sql = String::from("SELECT rowid, title, date, session_code FROM sessions");
        let mut where_clauses: Vec<&str> = Vec::new();
        let mut params_vec: Vec<String> = Vec::new();

        if let Some(pattern) = filter.text_pattern() {
            where_clauses.push("(lower(title) LIKE ? OR lower(date) LIKE ?)");
            params_vec.push(pattern.clone());
            params_vec.push(pattern);
        }
        if let Some(day) = filter.day {
            where_clauses.push("date LIKE ?");
            params_vec.push(format!("{}%", day.abbrev()));
        }

        if !where_clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY date");

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p as &dyn rusqlite::ToSql).collect();
        let rows = stmt.query_map(param_refs.as_slice(), row_to_session)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Point lookup by rowid. Unknown ids are not an error.
    pub(crate) fn get(&self, id: i64) -> Result<Option<SessionRow>, AppError> {
        let row = self
            .conn
            .query_row(
                "SELECT rowid, title, date, session_code FROM sessions WHERE rowid = ?1",
                params![id],
                row_to_session,
            )
            .optional()?;
        Ok(row)
    }

    /// (rowid, date) for every record; the repair pass scans all of them.
    pub(crate) fn dates(&self) -> Result<Vec<(i64, String)>, AppError> {
        let mut stmt = self.conn.prepare("SELECT rowid, date FROM sessions")?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub(crate) fn update_date(&self, id: i64, date: &str) -> Result<(), AppError> {
        self.conn.execute(
            "UPDATE sessions SET date = ?1 WHERE rowid = ?2",
            params![date, id],
        )?;
        Ok(())
    }
}

fn row_to_session(row: &rusqlite::Row<'_>) -> rusqlite::Result<SessionRow> {
    Ok(SessionRow {
        id: row.get(0)?,
        title: row.get(1)?,
        date: row.get(2)?,
        code: row.get(3)?,
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::store_with;
    use super::*;

    fn sample_store() -> SessionStore {
        store_with(&[
            ("Keynote", "Mon, Jun 5 10:00 AM", Some("K1")),
            ("Rust Workshop", "Tue, Jun 6 10:00 AM", Some("W2")),
            ("Closing Panel", "Thu, Jun 8 4:00 PM", None),
            ("Async Deep Dive", "Mon, Jun 5 2:00 PM", Some("D3")),
        ])
    }

    #[test]
    fn no_filters_returns_all_ordered_by_date() {
        let store = sample_store();
        let rows = store.list(&SessionFilter::default()).expect("list");
        assert_eq!(rows.len(), 4);
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "rows must be ordered by date ascending");
    }

    #[test]
    fn text_filter_is_case_insensitive_on_title_or_date() {
        let store = sample_store();
        let by_title = store
            .list(&SessionFilter {
                text: Some("WORKSHOP".to_string()),
                day: None,
            })
            .expect("list");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Rust Workshop");

        let by_date = store
            .list(&SessionFilter {
                text: Some("jun 5".to_string()),
                day: None,
            })
            .expect("list");
        assert_eq!(by_date.len(), 2);
    }

    #[test]
    fn blank_text_filter_is_absent() {
        let store = sample_store();
        let rows = store
            .list(&SessionFilter {
                text: Some("   ".to_string()),
                day: None,
            })
            .expect("list");
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn day_filter_matches_abbreviated_date_prefix() {
        let store = sample_store();
        let rows = store
            .list(&SessionFilter {
                text: None,
                day: Some(Day::Monday),
            })
            .expect("list");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.date.starts_with("Mon")));
    }

    #[test]
    fn text_and_day_filters_combine_with_and() {
        let store = sample_store();
        let rows = store
            .list(&SessionFilter {
                text: Some("10:00".to_string()),
                day: Some(Day::Monday),
            })
            .expect("list");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Keynote");
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let store = sample_store();
        let rows = store
            .list(&SessionFilter {
                text: Some("quantum".to_string()),
                day: None,
            })
            .expect("list");
        assert!(rows.is_empty());
    }

    #[test]
    fn get_returns_row_and_none_for_unknown_id() {
        let store = sample_store();
        let all = store.list(&SessionFilter::default()).expect("list");
        let first = &all[0];
        let fetched = store.get(first.id).expect("get").expect("row exists");
        assert_eq!(&fetched, first);
        assert!(store.get(9999).expect("get").is_none());
    }

    #[test]
    fn null_code_displays_empty() {
        let store = sample_store();
        let rows = store
            .list(&SessionFilter {
                text: Some("Closing".to_string()),
                day: None,
            })
            .expect("list");
        assert_eq!(rows[0].code, None);
        assert_eq!(rows[0].code_display(), "");
    }

    #[test]
    fn update_date_touches_one_row() {
        let store = sample_store();
        let all = store.list(&SessionFilter::default()).expect("list");
        let target = all[0].id;
        store.update_date(target, "Wed, Jun 7 9:00 AM").expect("update");
        let fetched = store.get(target).expect("get").expect("row");
        assert_eq!(fetched.date, "Wed, Jun 7 9:00 AM");
        let others = store.dates().expect("dates");
        assert_eq!(others.len(), 4);
    }

    #[test]
    fn day_parse_accepts_names_and_prefixes() {
        assert_eq!(Day::parse("Monday").unwrap(), Day::Monday);
        assert_eq!(Day::parse("mon").unwrap(), Day::Monday);
        assert_eq!(Day::parse("TUE").unwrap(), Day::Tuesday);
        assert_eq!(Day::parse("wednes").unwrap(), Day::Wednesday);
        assert_eq!(Day::parse("thu").unwrap(), Day::Thursday);
        assert!(Day::parse("fri").is_err());
        assert!(Day::parse("m").is_err());
        assert!(Day::parse("").is_err());
    }

    #[test]
    fn open_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.db");
        let err = SessionStore::open(&missing).expect_err("must fail");
        assert!(err.to_string().contains("nope.db"));
    }
}
