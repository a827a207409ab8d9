use std::collections::HashMap;

/// Exact-key lookup table where the first row for a key wins.
///
/// Reference tables occasionally repeat a key; joining against every
/// repetition would duplicate roster rows, so later rows are ignored and
/// counted instead.
#[derive(Debug, Clone)]
pub struct FirstWinsIndex<V> {
    map: HashMap<String, V>,
    duplicates: usize,
}

impl<V> Default for FirstWinsIndex<V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            duplicates: 0,
        }
    }
}

impl<V> FirstWinsIndex<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the key is empty or already present.
    ///
    /// Returns `true` when the value was stored.
    pub fn insert(&mut self, key: String, value: V) -> bool {
        if key.is_empty() {
            return false;
        }
        if self.map.contains_key(&key) {
            self.duplicates += 1;
            return false;
        }
        self.map.insert(key, value);
        true
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Rows ignored because their key was already present.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}

impl<V> FromIterator<(String, V)> for FirstWinsIndex<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (key, value) in iter {
            index.insert(key, value);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_wins() {
        let index: FirstWinsIndex<&str> = [
            ("SPAIN".to_string(), "ESPANA"),
            ("SPAIN".to_string(), "REINO DE ESPANA"),
            (String::new(), "ignored"),
        ]
        .into_iter()
        .collect();
        assert_eq!(index.get("SPAIN"), Some(&"ESPANA"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.duplicates(), 1);
        assert!(!index.contains(""));
    }
}
