//! Query-string parameter store
//!
//! The URL query string is the single source of truth for filter and sort
//! state. `QueryParams` is an ordered key/value snapshot of it, and
//! `ParamStore` is the read/write contract the rest of the app codes against.
//!
//! Every write goes through `ParamStore::commit`, which swaps in a whole new
//! snapshot. Consumers therefore never observe a half-applied update, and a
//! reset of several keys is one write rather than a series of them.

use tracing::{debug, warn};

/// Separator for list-valued parameters such as `pricing=free,paid`
pub const LIST_SEPARATOR: &str = ",";

/// Ordered set of query parameters. Keys are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`.
    ///
    /// Repeated keys keep their first value. Each `&`-separated pair is
    /// decoded on its own, so one undecodable pair is dropped without taking
    /// the rest of the query with it.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut params = Self::new();
        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let decoded: Vec<(String, String)> = match serde_urlencoded::from_str(segment) {
                Ok(pairs) => pairs,
                Err(e) => {
                    warn!("Ignoring malformed query pair {:?}: {}", segment, e);
                    continue;
                }
            };
            for (key, value) in decoded {
                if params.get(&key).is_none() {
                    params.pairs.push((key, value));
                }
            }
        }
        params
    }

    /// Build from key/value pairs; later duplicates overwrite earlier ones
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.set(key, value);
        }
        params
    }

    /// Serialize without the leading `?`
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.pairs).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace an existing key in place, or append a new one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Read/write access to named URL parameters.
///
/// Implementors only provide the snapshot and the whole-set commit; the typed
/// accessors are built on those two so that each accessor write is a single
/// commit.
pub trait ParamStore {
    /// Current parameters
    fn snapshot(&self) -> QueryParams;

    /// Replace the whole parameter set in one write
    fn commit(&mut self, next: QueryParams);

    /// Value of `key`, or an empty string when absent
    fn get_param(&self, key: &str) -> String {
        self.snapshot().get(key).unwrap_or_default().to_string()
    }

    /// Write `value`; an empty value removes the key instead
    fn set_param(&mut self, key: &str, value: &str) {
        let mut next = self.snapshot();
        if value.is_empty() {
            next.remove(key);
        } else {
            next.set(key, value);
        }
        self.commit(next);
    }

    /// Comma-split value of `key`; empty when absent
    fn get_param_array(&self, key: &str) -> Vec<String> {
        match self.snapshot().get(key) {
            Some(raw) if !raw.is_empty() => {
                raw.split(LIST_SEPARATOR).map(str::to_string).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Comma-join `values` into `key`; an empty list removes the key
    fn set_param_array(&mut self, key: &str, values: &[String]) {
        let mut next = self.snapshot();
        if values.is_empty() {
            next.remove(key);
        } else {
            next.set(key, values.join(LIST_SEPARATOR));
        }
        self.commit(next);
    }

    /// Replace every parameter with `defaults` in a single write
    fn reset_all(&mut self, defaults: QueryParams) {
        self.commit(defaults);
    }
}

/// In-memory store with a revision counter consumers can poll.
///
/// Used by tests and by anything that needs the parameter contract without a
/// browser URL behind it.
#[derive(Clone, Debug, Default)]
pub struct MemoryParamStore {
    params: QueryParams,
    revision: u64,
}

impl MemoryParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_query(query: &str) -> Self {
        Self {
            params: QueryParams::parse(query),
            revision: 0,
        }
    }

    /// Bumped once per effective commit
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn query_string(&self) -> String {
        self.params.to_query_string()
    }
}

impl ParamStore for MemoryParamStore {
    fn snapshot(&self) -> QueryParams {
        self.params.clone()
    }

    fn commit(&mut self, next: QueryParams) {
        if next == self.params {
            return;
        }
        debug!("Query params -> {:?}", next.to_query_string());
        self.params = next;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_question_mark() {
        let params = QueryParams::parse("?search=jacket&sort=high");
        assert_eq!(params.get("search"), Some("jacket"));
        assert_eq!(params.get("sort"), Some("high"));
    }

    #[test]
    fn test_parse_decodes_values() {
        let params = QueryParams::parse("search=red+wool%20coat&pricing=free%2Cpaid");
        assert_eq!(params.get("search"), Some("red wool coat"));
        assert_eq!(params.get("pricing"), Some("free,paid"));
    }

    #[test]
    fn test_parse_keeps_first_duplicate() {
        let params = QueryParams::parse("sort=low&sort=high");
        assert_eq!(params.get("sort"), Some("low"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_bad_pair_keeps_its_neighbours() {
        let mut store = MemoryParamStore::from_query("ref=mail&bad=%ZZ%&&sort=low");
        assert_eq!(store.get_param("ref"), "mail");
        assert_eq!(store.get_param("sort"), "low");

        store.set_param("search", "coat");
        let after = store.snapshot();
        assert_eq!(after.get("ref"), Some("mail"));
        assert_eq!(after.get("sort"), Some("low"));
        assert_eq!(after.get("search"), Some("coat"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::parse("a=1&b=2");
        params.set("a", "3");
        assert_eq!(params.to_query_string(), "a=3&b=2");
    }

    #[test]
    fn test_get_param_absent_is_empty() {
        let store = MemoryParamStore::new();
        assert_eq!(store.get_param("search"), "");
        assert!(store.get_param_array("pricing").is_empty());
    }

    #[test]
    fn test_set_param_empty_removes_key() {
        let mut store = MemoryParamStore::from_query("search=hat&sort=low");
        store.set_param("search", "");
        assert!(!store.snapshot().contains("search"));
        assert_eq!(store.query_string(), "sort=low");
    }

    #[test]
    fn test_param_array_round_trip() {
        let mut store = MemoryParamStore::new();
        store.set_param_array("pricing", &["free".to_string(), "paid".to_string()]);
        assert_eq!(store.get_param_array("pricing"), vec!["free", "paid"]);
        assert_eq!(store.query_string(), "pricing=free%2Cpaid");
    }

    #[test]
    fn test_empty_array_removes_key() {
        let mut store = MemoryParamStore::from_query("pricing=free");
        store.set_param_array("pricing", &[]);
        assert!(!store.snapshot().contains("pricing"));
        assert_eq!(store.query_string(), "");
    }

    #[test]
    fn test_reset_all_is_one_commit() {
        let mut store = MemoryParamStore::from_query("search=x&pricing=paid&sort=high&utm=1");
        let before = store.revision();

        store.reset_all(QueryParams::from_pairs([("sort", "name"), ("min", "0")]));

        assert_eq!(store.revision(), before + 1);
        assert_eq!(store.query_string(), "sort=name&min=0");
    }

    #[test]
    fn test_noop_commit_keeps_revision() {
        let mut store = MemoryParamStore::from_query("sort=low");
        store.set_param("sort", "low");
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_unrelated_keys_survive_writes() {
        let mut store = MemoryParamStore::from_query("ref=mail&sort=low");
        store.set_param("search", "coat");
        assert_eq!(store.query_string(), "ref=mail&sort=low&search=coat");
    }
}
