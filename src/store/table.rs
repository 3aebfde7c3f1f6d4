//! Id-keyed row storage with stable insertion order

use std::collections::HashMap;

/// Rows keyed by id. Iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: HashMap<String, T>,
    order: Vec<String>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.rows.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.get_mut(id)
    }

    /// Insert a new row. Returns `false` and leaves the table untouched if
    /// the id is already present.
    pub fn insert(&mut self, id: String, row: T) -> bool {
        if self.rows.contains_key(&id) {
            return false;
        }
        self.order.push(id.clone());
        self.rows.insert(id, row);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let row = self.rows.remove(id)?;
        self.order.retain(|k| k != id);
        Some(row)
    }

    /// Remove every row matching `pred`, returned in insertion order
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
        let rows = &mut self.rows;
        let mut removed = Vec::new();

        self.order.retain(|id| {
            let hit = rows.get(id).is_some_and(&mut pred);
            if hit {
                if let Some(row) = rows.remove(id) {
                    removed.push(row);
                }
            }
            !hit
        });

        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.rows.get(id))
    }

    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.iter().find(|&row| pred(row))
    }

    pub fn any(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.iter().any(|row| pred(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(items: &[(&str, i32)]) -> Table<i32> {
        let mut table = Table::default();
        for (id, value) in items {
            table.insert(id.to_string(), *value);
        }
        table
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let table = table_of(&[("c", 3), ("a", 1), ("b", 2)]);
        let values: Vec<i32> = table.iter().copied().collect();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_where_returns_removed_rows() {
        let mut table = table_of(&[("a", 1), ("b", 2), ("c", 3), ("d", 4)]);

        let removed = table.remove_where(|v| v % 2 == 0);

        assert_eq!(removed, vec![2, 4]);
        assert_eq!(table.len(), 2);
        assert!(!table.contains("b"));
        assert_eq!(table.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_insert_existing_id_is_refused() {
        let mut table = table_of(&[("a", 1)]);

        assert!(!table.insert("a".to_string(), 9));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a"), Some(&1));
        assert_eq!(table.iter().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_remove_single() {
        let mut table = table_of(&[("a", 1), ("b", 2)]);
        assert_eq!(table.remove("a"), Some(1));
        assert_eq!(table.remove("a"), None);
        assert_eq!(table.len(), 1);
    }
}
