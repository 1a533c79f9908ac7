use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::debug;
use uuid::Uuid;

/// A record that can be shown in a searchable, sortable table.
pub trait TableRow {
    type SortKey: Copy + PartialEq;

    fn row_id(&self) -> Uuid;

    /// Text fields the substring query is matched against.
    fn search_haystacks(&self) -> Vec<&str>;

    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "\u{2191}",
            Self::Descending => "\u{2193}",
        }
    }
}

/// One rendered page of a filtered, sorted table.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    /// Rows matching the current query, across all pages.
    pub total_rows: usize,
    pub total_pages: usize,
    /// 1-based display bounds ("Showing 6-10 of 12"); both zero
    /// when the page is empty.
    pub first_row: usize,
    pub last_row: usize,
}

/// View state of one table: the collection plus its query, sort,
/// page cursor, and multi-select set. The visible page is always
/// derived, never stored.
#[derive(Clone, PartialEq)]
pub struct ListState<T: TableRow> {
    rows: Vec<T>,
    query: String,
    sort_key: Option<T::SortKey>,
    direction: SortDirection,
    page: usize,
    page_size: usize,
    selected: BTreeSet<Uuid>,
}

impl<T: TableRow + Clone> ListState<T> {
    pub fn new(rows: Vec<T>, page_size: usize) -> Self {
        Self {
            rows,
            query: String::new(),
            sort_key: None,
            direction: SortDirection::Ascending,
            page: 1,
            page_size: page_size.max(1),
            selected: BTreeSet::new(),
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn sort(&self) -> Option<(T::SortKey, SortDirection)> {
        self.sort_key.map(|key| (key, self.direction))
    }

    /// Changing the query invalidates the selection but keeps the
    /// page cursor where it was; a narrowed result set can therefore
    /// show an empty page until the user navigates.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected.clear();
    }

    /// Toggling the active key flips direction; a new key starts
    /// ascending.
    pub fn toggle_sort(&mut self, key: T::SortKey) {
        if self.sort_key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.sort_key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.page = page.clamp(1, last);
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size)
    }

    pub fn visible_page(&self) -> ListPage<T> {
        let filtered = self.filtered();
        let total_rows = filtered.len();
        let total_pages = total_rows.div_ceil(self.page_size);

        let start = (self.page - 1) * self.page_size;
        let rows: Vec<T> = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        let (first_row, last_row) = if rows.is_empty() {
            (0, 0)
        } else {
            (start + 1, start + rows.len())
        };

        ListPage {
            rows,
            total_rows,
            total_pages,
            first_row,
            last_row,
        }
    }

    fn filtered(&self) -> Vec<&T> {
        let needle = self.query.to_lowercase();
        let mut rows: Vec<&T> = self
            .rows
            .iter()
            .filter(|row| {
                needle.is_empty()
                    || row
                        .search_haystacks()
                        .iter()
                        .any(|hay| hay.to_lowercase().contains(&needle))
            })
            .collect();

        if let Some(key) = self.sort_key {
            // sort_by is stable: ties keep insertion order.
            rows.sort_by(|a, b| {
                let ordering = a.compare_by(b, key);
                match self.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        rows
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle_selected(&mut self, id: Uuid) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Header checkbox: when every row of the visible page is already
    /// selected the whole selection is dropped, otherwise the visible
    /// page becomes the selection.
    pub fn toggle_select_all_visible(&mut self) {
        let visible: BTreeSet<Uuid> = self
            .visible_page()
            .rows
            .iter()
            .map(TableRow::row_id)
            .collect();

        if !visible.is_empty() && visible.iter().all(|id| self.selected.contains(id)) {
            self.selected.clear();
        } else {
            self.selected = visible;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn add_row(&mut self, row: T) {
        debug!(total = self.rows.len() + 1, "added table row");
        self.rows.push(row);
        self.selected.clear();
    }

    /// Replaces the row with the same id; absent ids are a no-op.
    pub fn update_row(&mut self, row: T) -> bool {
        let id = row.row_id();
        let replaced = match self.rows.iter_mut().find(|have| have.row_id() == id) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        };
        if replaced {
            self.selected.clear();
        }
        replaced
    }

    pub fn remove_row(&mut self, id: Uuid) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.row_id() != id);
        let removed = self.rows.len() != before;
        if removed {
            self.selected.clear();
        }
        removed
    }

    /// Bulk delete: drops every selected row, then the selection.
    pub fn remove_selected(&mut self) -> usize {
        let before = self.rows.len();
        let selected = std::mem::take(&mut self.selected);
        self.rows.retain(|row| !selected.contains(&row.row_id()));
        let removed = before - self.rows.len();
        debug!(removed, "bulk-deleted table rows");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: Uuid,
        name: String,
        rank: u32,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowKey {
        Name,
        Rank,
    }

    impl TableRow for Row {
        type SortKey = RowKey;

        fn row_id(&self) -> Uuid {
            self.id
        }

        fn search_haystacks(&self) -> Vec<&str> {
            vec![&self.name]
        }

        fn compare_by(&self, other: &Self, key: RowKey) -> Ordering {
            match key {
                RowKey::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                RowKey::Rank => self.rank.cmp(&other.rank),
            }
        }
    }

    fn row(name: &str, rank: u32) -> Row {
        Row {
            id: Uuid::new_v4(),
            name: name.to_string(),
            rank,
        }
    }

    fn names(page: &ListPage<Row>) -> Vec<&str> {
        page.rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let list = ListState::new(vec![row("a", 1), row("b", 2)], 5);
        assert_eq!(list.visible_page().total_rows, 2);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let mut list = ListState::new(
            vec![row("Alice", 1), row("bob", 2), row("Charlie", 3)],
            5,
        );
        list.set_query("b");
        assert_eq!(names(&list.visible_page()), vec!["bob"]);

        list.set_query("CHAR");
        assert_eq!(names(&list.visible_page()), vec!["Charlie"]);
    }

    #[test]
    fn sort_toggle_flips_and_double_toggle_restores() {
        let mut list = ListState::new(
            vec![row("Alice", 1), row("bob", 2), row("Charlie", 3)],
            5,
        );
        let original = names(&list.visible_page())
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        list.toggle_sort(RowKey::Name);
        assert_eq!(names(&list.visible_page()), vec!["Alice", "bob", "Charlie"]);

        list.toggle_sort(RowKey::Name);
        assert_eq!(names(&list.visible_page()), vec!["Charlie", "bob", "Alice"]);

        list.toggle_sort(RowKey::Name);
        assert_eq!(names(&list.visible_page()), original);
    }

    #[test]
    fn new_sort_key_resets_to_ascending() {
        let mut list = ListState::new(vec![row("b", 2), row("a", 1)], 5);
        list.toggle_sort(RowKey::Name);
        list.toggle_sort(RowKey::Name);
        assert_eq!(list.sort(), Some((RowKey::Name, SortDirection::Descending)));

        list.toggle_sort(RowKey::Rank);
        assert_eq!(list.sort(), Some((RowKey::Rank, SortDirection::Ascending)));
    }

    #[test]
    fn filter_and_sort_are_idempotent() {
        let mut list = ListState::new(
            vec![row("ab", 3), row("aa", 1), row("ba", 2), row("ab", 0)],
            10,
        );
        list.set_query("a");
        list.toggle_sort(RowKey::Name);

        let first = list.visible_page();
        let second = list.visible_page();
        assert_eq!(first, second);
    }

    #[test]
    fn pagination_partitions_without_gaps_or_overlap() {
        let rows: Vec<Row> = (0..12).map(|i| row(&format!("row{i:02}"), i)).collect();
        let mut list = ListState::new(rows, 5);

        let mut seen = Vec::new();
        for page in 1..=list.total_pages() {
            list.set_page(page);
            let visible = list.visible_page();
            assert!(visible.rows.len() <= 5);
            seen.extend(visible.rows.iter().map(|r| r.name.clone()));
        }

        assert_eq!(seen.len(), 12);
        assert_eq!(
            seen,
            (0..12).map(|i| format!("row{i:02}")).collect::<Vec<_>>()
        );

        list.set_page(3);
        assert_eq!(list.visible_page().rows.len(), 2);
        assert_eq!(list.visible_page().first_row, 11);
        assert_eq!(list.visible_page().last_row, 12);
    }

    #[test]
    fn set_page_clamps_to_bounds() {
        let rows: Vec<Row> = (0..7).map(|i| row(&format!("r{i}"), i)).collect();
        let mut list = ListState::new(rows, 5);

        list.set_page(99);
        assert_eq!(list.page(), 2);

        list.set_page(0);
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn narrowing_query_keeps_page_cursor() {
        // Deliberate source quirk: the page index survives a filter
        // change, so the view can land on an empty page.
        let rows: Vec<Row> = (0..12).map(|i| row(&format!("row{i:02}"), i)).collect();
        let mut list = ListState::new(rows, 5);
        list.set_page(3);

        list.set_query("row00");
        assert_eq!(list.page(), 3);
        assert!(list.visible_page().rows.is_empty());
        assert_eq!(list.visible_page().total_rows, 1);
    }

    #[test]
    fn delete_by_id_and_unknown_id() {
        let rows = vec![row("a", 1), row("b", 2), row("c", 3)];
        let victim = rows[1].id;
        let mut list = ListState::new(rows, 5);

        assert!(list.remove_row(victim));
        assert_eq!(list.rows().len(), 2);
        assert!(list.rows().iter().all(|r| r.id != victim));

        assert!(!list.remove_row(Uuid::new_v4()));
        assert_eq!(list.rows().len(), 2);
    }

    #[test]
    fn update_row_replaces_by_id() {
        let rows = vec![row("a", 1), row("b", 2)];
        let mut renamed = rows[0].clone();
        renamed.name = "z".to_string();
        let mut list = ListState::new(rows, 5);

        assert!(list.update_row(renamed.clone()));
        assert_eq!(list.rows()[0], renamed);

        assert!(!list.update_row(row("ghost", 9)));
        assert_eq!(list.rows().len(), 2);
    }

    #[test]
    fn mutations_clear_selection() {
        let rows = vec![row("a", 1), row("b", 2), row("c", 3)];
        let kept = rows[0].id;
        let gone = rows[2].id;
        let mut list = ListState::new(rows, 5);

        list.toggle_selected(kept);
        list.toggle_selected(gone);
        assert_eq!(list.selected_count(), 2);

        list.remove_row(gone);
        assert_eq!(list.selected_count(), 0);

        list.toggle_selected(kept);
        list.add_row(row("d", 4));
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn bulk_delete_removes_selected_and_clears() {
        let rows = vec![row("a", 1), row("b", 2), row("c", 3)];
        let first = rows[0].id;
        let third = rows[2].id;
        let mut list = ListState::new(rows, 5);

        list.toggle_selected(first);
        list.toggle_selected(third);
        assert_eq!(list.remove_selected(), 2);
        assert_eq!(names(&list.visible_page()), vec!["b"]);
        assert_eq!(list.selected_count(), 0);
    }

    #[test]
    fn select_all_visible_toggles() {
        let rows: Vec<Row> = (0..7).map(|i| row(&format!("r{i}"), i)).collect();
        let mut list = ListState::new(rows, 5);

        list.toggle_select_all_visible();
        assert_eq!(list.selected_count(), 5);

        list.toggle_select_all_visible();
        assert_eq!(list.selected_count(), 0);
    }
}
