//! Bounded repeatable-group container.
//!
//! Every repeatable section of a profile (addresses, emails, phones,
//! identifications, occupations) edits through the same three operations:
//! append a blank row, rewrite one field of one row, remove one row. This
//! module implements them once, generic over the row shape and the cap.
//!
//! The cap applies to `add_row` only. Server payloads that already exceed it
//! deserialize untouched; they just cannot grow further.

use serde::{Deserialize, Serialize};

/// Maximum rows a repeatable group accepts through `add_row`.
pub const GROUP_ROW_CAP: usize = 5;

/// A row shape that can be appended as a blank record.
pub trait GroupRow: Clone {
    /// A fully-blank row of this shape.
    fn blank() -> Self;
}

/// A repeatable-record list with an add-time row cap.
///
/// Serializes transparently as a plain JSON array; insertion order is
/// display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundedGroup<T, const MAX: usize = GROUP_ROW_CAP> {
    rows: Vec<T>,
}

impl<T, const MAX: usize> Default for BoundedGroup<T, MAX> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T, const MAX: usize> BoundedGroup<T, MAX> {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the group has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether another row may be added.
    pub fn can_add(&self) -> bool {
        self.rows.len() < MAX
    }

    /// Get a row by index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    /// Iterate rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    /// Borrow the rows as a slice.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Remove the row at `index`, shifting subsequent rows down.
    ///
    /// Returns `false` (and leaves the group untouched) when `index` is out
    /// of range.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }
}

impl<T: GroupRow, const MAX: usize> BoundedGroup<T, MAX> {
    /// Append a blank row, unless the group is at its cap.
    ///
    /// Returns whether a row was appended.
    pub fn add_row(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.rows.push(T::blank());
        true
    }

    /// Rewrite one row through `apply`, leaving every other row untouched.
    ///
    /// The row is replaced with a freshly built value rather than mutated
    /// through a shared reference. Returns `false` when `index` is out of
    /// range.
    pub fn edit_row(&mut self, index: usize, apply: impl FnOnce(&mut T)) -> bool {
        let Some(slot) = self.rows.get_mut(index) else {
            return false;
        };
        let mut fresh = slot.clone();
        apply(&mut fresh);
        *slot = fresh;
        true
    }
}

impl<T, const MAX: usize> From<Vec<T>> for BoundedGroup<T, MAX> {
    fn from(rows: Vec<T>) -> Self {
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
    }

    impl GroupRow for Row {
        fn blank() -> Self {
            Self {
                name: String::new(),
            }
        }
    }

    #[test]
    fn test_add_row_appends_blank() {
        let mut group: BoundedGroup<Row> = BoundedGroup::new();
        assert!(group.add_row());
        assert_eq!(group.len(), 1);
        assert_eq!(group.get(0), Some(&Row::blank()));
    }

    #[test]
    fn test_add_row_stops_at_cap() {
        let mut group: BoundedGroup<Row> = BoundedGroup::new();
        for _ in 0..GROUP_ROW_CAP {
            assert!(group.add_row());
        }
        assert!(!group.can_add());
        assert!(!group.add_row());
        assert_eq!(group.len(), GROUP_ROW_CAP);
    }

    #[test]
    fn test_over_cap_payload_kept_but_frozen() {
        // Load-time payloads above the cap are kept as-is; only add is refused.
        let rows: Vec<Row> = (0..7)
            .map(|i| Row {
                name: format!("r{i}"),
            })
            .collect();
        let mut group: BoundedGroup<Row> = rows.into();
        assert_eq!(group.len(), 7);
        assert!(!group.add_row());
        assert_eq!(group.len(), 7);
    }

    #[test]
    fn test_edit_row_touches_only_target() {
        let mut group: BoundedGroup<Row> = BoundedGroup::new();
        group.add_row();
        group.add_row();
        group.add_row();
        let before_0 = group.get(0).cloned();
        let before_2 = group.get(2).cloned();

        assert!(group.edit_row(1, |row| row.name = "edited".into()));

        assert_eq!(group.get(1).map(|r| r.name.as_str()), Some("edited"));
        assert_eq!(group.get(0).cloned(), before_0);
        assert_eq!(group.get(2).cloned(), before_2);
    }

    #[test]
    fn test_edit_row_out_of_range() {
        let mut group: BoundedGroup<Row> = BoundedGroup::new();
        group.add_row();
        assert!(!group.edit_row(3, |row| row.name = "nope".into()));
        assert_eq!(group.get(0), Some(&Row::blank()));
    }

    #[test]
    fn test_remove_row_shifts_down() {
        let mut group: BoundedGroup<Row> =
            vec![Row { name: "a".into() }, Row { name: "b".into() }, Row { name: "c".into() }]
                .into();
        assert!(group.remove_row(1));
        assert_eq!(group.len(), 2);
        assert_eq!(group.get(0).map(|r| r.name.as_str()), Some("a"));
        assert_eq!(group.get(1).map(|r| r.name.as_str()), Some("c"));
    }

    #[test]
    fn test_remove_row_out_of_range() {
        let mut group: BoundedGroup<Row> = BoundedGroup::new();
        group.add_row();
        assert!(!group.remove_row(1));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_serde_transparent_array() {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        struct Item {
            v: u32,
        }

        let group: BoundedGroup<Item> = vec![Item { v: 1 }, Item { v: 2 }].into();
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(json, r#"[{"v":1},{"v":2}]"#);

        let back: BoundedGroup<Item> = serde_json::from_str("[{\"v\":1},{\"v\":2}]").unwrap();
        assert_eq!(back, group);
    }

    #[test]
    fn test_custom_cap() {
        let mut group: BoundedGroup<Row, 2> = BoundedGroup::new();
        assert!(group.add_row());
        assert!(group.add_row());
        assert!(!group.add_row());
        assert_eq!(group.len(), 2);
    }
}
