use crate::entity::Entity;
use chrono::{DateTime, Utc};
use field_registry::{validate, FieldErrors, FormData};
use std::collections::HashSet;

/// Append-only list of records of one entity type.
///
/// The only mutation is [`RecordBook::submit`]; records are never edited or
/// removed once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordBook<E: Entity> {
    records: Vec<E>,
}

impl<E: Entity> RecordBook<E> {
    /// Book holding the entity's hard-coded seed list.
    pub fn seeded() -> Self {
        Self::from_records(E::seed())
    }

    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn from_records(records: Vec<E>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validates `form`, builds a record stamped at `now` and appends it.
    ///
    /// On error the book is left untouched and every invalid field carries
    /// one message.
    pub fn submit(&mut self, form: &FormData, now: DateTime<Utc>) -> Result<&E, FieldErrors> {
        validate(E::FIELDS, form)?;

        let id = next_id(self.records.iter().map(|r| r.id()), now.timestamp_millis());
        let record = E::build(id, form, now)?;
        log::info!(
            "appended {} `{}` ({})",
            E::KIND.singular().to_lowercase(),
            record.title(),
            record.id()
        );

        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }
}

impl<E: Entity> Default for RecordBook<E> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Picks the id for a new record: `now_millis` as a decimal string, or the
/// next larger integer not already taken.
pub fn next_id<'a>(existing: impl IntoIterator<Item = &'a str>, now_millis: i64) -> String {
    let taken: HashSet<&str> = existing.into_iter().collect();
    let mut candidate = u64::try_from(now_millis).unwrap_or_default();
    loop {
        let id = candidate.to_string();
        if !taken.contains(id.as_str()) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Site;

    #[test]
    fn next_id_uses_timestamp() {
        assert_eq!(next_id(["1", "2"], 1_700_000_000_000), "1700000000000");
    }

    #[test]
    fn next_id_skips_taken_values() {
        assert_eq!(next_id(["100", "101", "103"], 100), "102");
    }

    #[test]
    fn next_id_clamps_negative_clock() {
        assert_eq!(next_id(["0"], -5), "1");
    }

    #[test]
    fn same_millisecond_submits_get_distinct_ids() {
        let mut book = RecordBook::<Site>::empty();
        let form: FormData = [("name", "DR-1"), ("location", "Austin, TX"), ("capacity", "50 racks")]
            .into_iter()
            .collect();
        let now = Utc::now();
        let first = book.submit(&form, now).expect("first").id.clone();
        let second = book.submit(&form, now).expect("second").id.clone();
        assert_ne!(first, second);
        assert_eq!(book.len(), 2);
        assert_eq!(book.records()[1].id, second);
    }
}
