use crate::movie::MovieRecord;
use fb_api_types::MovieId;

/// Records fetched during the current session, in fetch order.
///
/// Appends do not de-duplicate; `find` returns the first record with the
/// id, so a later detail fetch never shadows an existing summary entry.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    records: Vec<MovieRecord>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: &MovieId) -> Option<&MovieRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn append(&mut self, record: MovieRecord) {
        self.records.push(record);
    }

    /// Swap the whole list, e.g. after the catalog page reloads.
    pub fn replace(&mut self, records: Vec<MovieRecord>) {
        self.records = records;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_catalog;

    #[test]
    fn find_matches_normalized_ids() {
        let mut cache = CatalogCache::new();
        cache.replace(fallback_catalog());
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.find(&MovieId::from("dune")).map(|m| m.price), Some(1290));
        assert!(cache.find(&MovieId::from("alien")).is_none());
    }

    #[test]
    fn append_keeps_duplicates_and_first_wins() {
        let mut cache = CatalogCache::new();
        let mut first = fallback_catalog().remove(0);
        first.id = MovieId::from(603_u64);
        let mut second = first.clone();
        second.title = "Матрица (детали)".into();

        cache.append(first);
        cache.append(second);

        assert_eq!(cache.len(), 2);
        let hit = cache.find(&MovieId::from_hash("#603").unwrap()).unwrap();
        assert_eq!(hit.title, "Бегущий по лезвию 2049");
    }
}
