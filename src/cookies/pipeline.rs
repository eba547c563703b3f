//! Row-by-row extraction of cookie records.

use super::key::DerivedKey;
use super::record::{normalize_traced, CookieRecord, RawCookieRow, ValueOrigin};
use crate::error::RowDecodeError;
use regex::Regex;

/// Normalizes raw rows into records with one shared key.
pub struct ExtractionPipeline {
    key: DerivedKey,
    exclude: Option<Regex>,
}

impl ExtractionPipeline {
    pub fn new(key: DerivedKey) -> Self {
        Self { key, exclude: None }
    }

    /// Drop records whose domain matches `pattern`.
    pub fn with_exclude(mut self, pattern: Regex) -> Self {
        self.exclude = Some(pattern);
        self
    }

    /// Normalize every decodable row, preserving input order.
    ///
    /// Rows that failed to decode are skipped; the rest are unaffected.
    pub fn run<I>(&self, rows: I) -> Vec<CookieRecord>
    where
        I: IntoIterator<Item = Result<RawCookieRow, RowDecodeError>>,
    {
        let mut records = Vec::new();
        let mut skipped = 0usize;
        let mut failed = 0usize;
        let mut excluded = 0usize;

        for row in rows {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    log::warn!("Skipping cookie row: {}", err);
                    skipped += 1;
                    continue;
                }
            };

            let (record, origin) = normalize_traced(row, &self.key);
            if matches!(origin, ValueOrigin::Failed(_)) {
                failed += 1;
            }
            if self.is_excluded(&record) {
                excluded += 1;
                continue;
            }
            records.push(record);
        }

        log::info!(
            "Extracted {} cookies ({} rows skipped, {} values undecryptable, {} excluded)",
            records.len(),
            skipped,
            failed,
            excluded
        );
        records
    }

    fn is_excluded(&self, record: &CookieRecord) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(record.domain()))
    }
}

/// Normalize `rows` with `key` and no exclusion.
pub fn run<I>(rows: I, key: &DerivedKey) -> Vec<CookieRecord>
where
    I: IntoIterator<Item = Result<RawCookieRow, RowDecodeError>>,
{
    ExtractionPipeline::new(key.clone()).run(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::decrypt::test_support::encrypt_v10;
    use crate::cookies::key::derive;

    fn row(host: &str, name: &str, value: &str) -> Result<RawCookieRow, RowDecodeError> {
        Ok(RawCookieRow {
            host: host.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            ..RawCookieRow::default()
        })
    }

    fn names(records: &[CookieRecord]) -> Vec<&str> {
        records.iter().map(|record| record.name()).collect()
    }

    #[test]
    fn preserves_input_order() {
        let key = derive(b"peanuts");
        let records = run(
            vec![
                row("b.com", "z", "1"),
                row("a.com", "a", "2"),
                row("c.com", "m", "3"),
            ],
            &key,
        );
        assert_eq!(names(&records), vec!["z", "a", "m"]);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let key = derive(b"peanuts");
        let records = run(
            vec![
                row("a.com", "first", "1"),
                Err(RowDecodeError::new("expiry", "Invalid column type Text")),
                row("a.com", "second", "2"),
                Err(RowDecodeError::new("name", "Invalid column type Integer")),
                row("a.com", "third", "3"),
            ],
            &key,
        );
        assert_eq!(names(&records), vec!["first", "second", "third"]);
    }

    #[test]
    fn decrypts_with_shared_key() {
        let key = derive(b"hunter2");
        let encrypted = RawCookieRow {
            host: "a.com".to_string(),
            name: "enc".to_string(),
            encrypted_value: encrypt_v10(b"decrypted", &key),
            ..RawCookieRow::default()
        };
        let records = run(vec![Ok(encrypted), row("a.com", "plain", "p")], &key);
        assert_eq!(records[0].value(), "decrypted");
        assert_eq!(records[1].value(), "p");
    }

    #[test]
    fn wrong_key_keeps_row_with_empty_or_garbled_value() {
        let key = derive(b"hunter2");
        let other = derive(b"not-hunter2");
        let encrypted = RawCookieRow {
            host: "a.com".to_string(),
            name: "enc".to_string(),
            encrypted_value: encrypt_v10(b"decrypted", &key),
            ..RawCookieRow::default()
        };
        let records = run(vec![Ok(encrypted)], &other);
        assert_eq!(records.len(), 1);
        assert_ne!(records[0].value(), "decrypted");
    }

    #[test]
    fn exclude_pattern_drops_matching_domains() {
        let pipeline = ExtractionPipeline::new(derive(b"peanuts"))
            .with_exclude(Regex::new(r"(^|\.)tracker\.net$").expect("regex"));
        let records = pipeline.run(vec![
            row(".tracker.net", "t", "1"),
            row("example.com", "keep", "2"),
            row("ads.tracker.net", "t2", "3"),
            row("tracker.network", "keep2", "4"),
        ]);
        assert_eq!(names(&records), vec!["keep", "keep2"]);
    }

    #[test]
    fn empty_input_yields_no_records() {
        let key = derive(b"peanuts");
        let rows: Vec<Result<RawCookieRow, RowDecodeError>> = Vec::new();
        assert!(run(rows, &key).is_empty());
    }
}
