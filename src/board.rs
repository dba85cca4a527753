//! Board View Model
//!
//! Groups fetched tasks under their columns for rendering.

use crate::config::PREVIEW_CHARS;
use crate::models::{Column, Task};

/// A column with the tasks placed in it, in fetch order
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub column: Column,
    pub tasks: Vec<Task>,
}

/// Render model of one board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    /// Tasks whose `column_id` matches no rendered column
    pub orphans: Vec<Task>,
}

impl BoardView {
    /// Place every task in the column its `column_id` names.
    /// Columns are ordered by `order_index`, then id.
    pub fn build(columns: &[Column], tasks: &[Task]) -> Self {
        let mut ordered = columns.to_vec();
        sort_columns(&mut ordered);

        let mut view = BoardView {
            columns: ordered
                .into_iter()
                .map(|column| ColumnView { column, tasks: Vec::new() })
                .collect(),
            orphans: Vec::new(),
        };

        for task in tasks {
            match view.columns.iter_mut().find(|c| c.column.id == task.column_id) {
                Some(col) => col.tasks.push(task.clone()),
                None => view.orphans.push(task.clone()),
            }
        }
        view
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    pub fn tasks_in(&self, column_id: u32) -> Vec<Task> {
        self.columns
            .iter()
            .find(|c| c.column.id == column_id)
            .map(|c| c.tasks.clone())
            .unwrap_or_default()
    }

    pub fn first_column_id(&self) -> Option<u32> {
        self.columns.first().map(|c| c.column.id)
    }
}

pub fn sort_columns(columns: &mut [Column]) {
    columns.sort_by_key(|c| (c.order_index, c.id));
}

/// `order_index` for a column appended after the existing ones
pub fn next_order_index(columns: &[Column]) -> i32 {
    columns
        .iter()
        .map(|c| c.order_index)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

/// Card preview: the first [`PREVIEW_CHARS`] characters, with "..." when cut.
///
/// The description is trimmed first; blank or whitespace-only text gives no preview.
pub fn description_preview(description: Option<&str>) -> Option<String> {
    let text = description?.trim();
    if text.is_empty() {
        return None;
    }
    if text.chars().count() > PREVIEW_CHARS {
        let cut: String = text.chars().take(PREVIEW_CHARS).collect();
        Some(format!("{cut}..."))
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn column(id: u32, order_index: i32) -> Column {
        Column { id, title: format!("Col {}", id), order_index, board_id: Some(10) }
    }

    fn task(id: u32, column_id: u32) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            start_date: None,
            due_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            column_id,
            created_at: None,
            updated_at: None,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<u32> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_tasks_placed_by_column_id() {
        let columns = vec![column(1, 0), column(2, 1)];
        let tasks = vec![task(10, 2), task(11, 1), task(12, 2)];

        let view = BoardView::build(&columns, &tasks);

        assert_eq!(ids(&view.columns[0].tasks), vec![11]);
        assert_eq!(ids(&view.columns[1].tasks), vec![10, 12]);
        for col in &view.columns {
            assert!(col.tasks.iter().all(|t| t.column_id == col.column.id));
        }
        assert_eq!(view.card_count(), 3);
        assert!(view.orphans.is_empty());
    }

    #[test]
    fn test_orphaned_tasks_are_dropped() {
        let columns = vec![column(1, 0)];
        let tasks = vec![task(10, 1), task(11, 99)];

        let view = BoardView::build(&columns, &tasks);

        assert_eq!(view.card_count(), 1);
        assert_eq!(ids(&view.orphans), vec![11]);
    }

    #[test]
    fn test_columns_sorted_by_order_then_id() {
        let columns = vec![column(3, 99), column(1, 5), column(2, 99), column(4, 0)];
        let view = BoardView::build(&columns, &[]);
        let order: Vec<u32> = view.columns.iter().map(|c| c.column.id).collect();
        assert_eq!(order, vec![4, 1, 2, 3]);
        assert_eq!(view.first_column_id(), Some(4));
    }

    #[test]
    fn test_empty_board() {
        let view = BoardView::build(&[], &[task(1, 1)]);
        assert!(view.columns.is_empty());
        assert_eq!(view.first_column_id(), None);
        assert_eq!(view.orphans.len(), 1);
        assert!(view.tasks_in(1).is_empty());
    }

    #[test]
    fn test_next_order_index() {
        assert_eq!(next_order_index(&[]), 0);
        assert_eq!(next_order_index(&[column(1, 0), column(2, 7), column(3, 3)]), 8);
    }

    #[test]
    fn test_description_preview() {
        assert_eq!(description_preview(None), None);
        assert_eq!(description_preview(Some("   ")), None);
        assert_eq!(description_preview(Some("short")), Some("short".to_string()));

        let exact = "a".repeat(PREVIEW_CHARS);
        assert_eq!(description_preview(Some(&exact)), Some(exact.clone()));

        let long = "é".repeat(PREVIEW_CHARS + 5);
        let preview = description_preview(Some(&long)).unwrap();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_description_preview_measures_trimmed_text() {
        assert_eq!(description_preview(Some("\n\t ")), None);

        let body = "b".repeat(PREVIEW_CHARS);
        let padded = format!("   {}   ", body);
        assert_eq!(description_preview(Some(&padded)), Some(body));
    }
}
