use tracing::debug;
use uuid::Uuid;

use crate::record::{Task, TaskStatus};

/// The kanban board: an ordered task list partitioned by status.
/// Tasks move between columns independently; every status is
/// reachable from every other.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    tasks: Vec<Task>,
}

impl Board {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Column contents in insertion order.
    pub fn tasks_in(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.status == status)
            .collect()
    }

    pub fn count_in(&self, status: TaskStatus) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.status == status)
            .count()
    }

    /// Drop handler: rewrites exactly the moved task's status field.
    /// Unknown ids are a no-op.
    pub fn move_task(&mut self, id: Uuid, status: TaskStatus) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                debug!(
                    task = %id,
                    from = task.status.as_key(),
                    to = status.as_key(),
                    "moved kanban task"
                );
                task.status = status;
                true
            }
            None => false,
        }
    }

    pub fn add_task(&mut self, task: Task) {
        debug!(task = %task.id, column = task.status.as_key(), "added kanban task");
        self.tasks.push(task);
    }

    /// Replaces the task with the same id; absent ids are a no-op.
    pub fn update_task(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|have| have.id == task.id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    pub fn remove_task(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Appends a trimmed tag; blank input is rejected, duplicates are
    /// permitted.
    pub fn add_tag(&mut self, id: Uuid, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.tags.push(tag.to_string());
                true
            }
            None => false,
        }
    }

    /// Removes a tag by position; out-of-range indexes are a no-op.
    pub fn remove_tag(&mut self, id: Uuid, index: usize) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) if index < task.tags.len() => {
                task.tags.remove(index);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::record::TaskPriority;

    fn task(title: &str, status: TaskStatus) -> Task {
        Task::new(
            title,
            "",
            TaskPriority::Medium,
            status,
            "Sarah Johnson",
            NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date"),
            vec!["design".to_string()],
        )
    }

    #[test]
    fn partition_covers_all_tasks() {
        let board = Board::new(vec![
            task("a", TaskStatus::Todo),
            task("b", TaskStatus::InProgress),
            task("c", TaskStatus::Todo),
            task("d", TaskStatus::Done),
        ]);

        assert_eq!(board.count_in(TaskStatus::Todo), 2);
        assert_eq!(board.count_in(TaskStatus::InProgress), 1);
        assert_eq!(board.count_in(TaskStatus::Done), 1);

        let total: usize = TaskStatus::all()
            .into_iter()
            .map(|status| board.count_in(status))
            .sum();
        assert_eq!(total, board.len());
    }

    #[test]
    fn move_changes_only_the_moved_status() {
        let mut board = Board::new(vec![
            task("a", TaskStatus::Todo),
            task("b", TaskStatus::InProgress),
        ]);
        let moved = board.tasks()[0].id;
        let before = board.tasks().to_vec();

        assert!(board.move_task(moved, TaskStatus::Done));

        let after = board.tasks();
        assert_eq!(after[0].status, TaskStatus::Done);
        assert_eq!(after[1], before[1]);

        let mut expected = before[0].clone();
        expected.status = TaskStatus::Done;
        assert_eq!(after[0], expected);
    }

    #[test]
    fn move_unknown_id_is_a_noop() {
        let mut board = Board::new(vec![task("a", TaskStatus::Todo)]);
        let before = board.tasks().to_vec();

        assert!(!board.move_task(Uuid::new_v4(), TaskStatus::Done));
        assert_eq!(board.tasks(), before.as_slice());
    }

    #[test]
    fn reentry_to_a_prior_column_is_allowed() {
        let mut board = Board::new(vec![task("a", TaskStatus::Todo)]);
        let id = board.tasks()[0].id;

        assert!(board.move_task(id, TaskStatus::Done));
        assert!(board.move_task(id, TaskStatus::Todo));
        assert_eq!(board.tasks()[0].status, TaskStatus::Todo);
    }

    #[test]
    fn remove_task_by_id() {
        let mut board = Board::new(vec![
            task("a", TaskStatus::Todo),
            task("b", TaskStatus::Done),
        ]);
        let victim = board.tasks()[1].id;

        assert!(board.remove_task(victim));
        assert_eq!(board.len(), 1);
        assert!(board.task(victim).is_none());

        assert!(!board.remove_task(victim));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn add_tag_trims_and_rejects_blank() {
        let mut board = Board::new(vec![task("a", TaskStatus::Todo)]);
        let id = board.tasks()[0].id;

        assert!(board.add_tag(id, "  urgent  "));
        assert_eq!(board.tasks()[0].tags, vec!["design", "urgent"]);

        assert!(!board.add_tag(id, "   "));
        assert_eq!(board.tasks()[0].tags.len(), 2);

        // Duplicates are permitted.
        assert!(board.add_tag(id, "urgent"));
        assert_eq!(board.tasks()[0].tags, vec!["design", "urgent", "urgent"]);
    }

    #[test]
    fn remove_tag_by_index_ignores_out_of_range() {
        let mut board = Board::new(vec![task("a", TaskStatus::Todo)]);
        let id = board.tasks()[0].id;
        board.add_tag(id, "urgent");

        assert!(board.remove_tag(id, 0));
        assert_eq!(board.tasks()[0].tags, vec!["urgent"]);

        assert!(!board.remove_tag(id, 5));
        assert_eq!(board.tasks()[0].tags, vec!["urgent"]);
    }

    #[test]
    fn slot_round_trip_reconstructs_equal_board() {
        let board = Board::new(vec![
            task("a", TaskStatus::Todo),
            task("b", TaskStatus::InProgress),
            task("c", TaskStatus::Done),
        ]);

        let json = serde_json::to_string(board.tasks()).expect("serialize tasks");
        let restored: Vec<Task> = serde_json::from_str(&json).expect("parse tasks");

        assert_eq!(restored, board.tasks());
    }
}
