//! In-memory task collection and the operations commands perform on it.
//!
//! [`TaskRepository`] owns the ordered list of tasks loaded from the store.
//! Operations never touch the disk; the command layer saves the repository
//! through [`Storage`](super::storage::Storage) once a mutation succeeds.
//!
//! Ids are positional. After a delete every remaining task is renumbered to
//! its 1-based index, which keeps ids contiguous so `next_id` can be derived
//! from the length of the list.

use super::task::{Status, Task, TaskFilter};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskRepository {
    tasks: Vec<Task>,
}

impl TaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
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

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Id the next added task will receive: the current count plus one.
    pub fn next_id(&self) -> u32 {
        self.tasks.len() as u32 + 1
    }

    /// Appends a `todo` task created at `now` and returns its id.
    pub fn add(&mut self, description: &str, now: &str) -> u32 {
        let id = self.next_id();
        self.tasks.push(Task::new(id, description, now));
        id
    }

    /// Replaces the description of task `id` and stamps `updated_at`.
    ///
    /// Returns `false` without changing anything when no such task exists.
    pub fn update_description(&mut self, id: u32, description: &str, now: &str) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.description = description.to_string();
                task.updated_at = Some(now.to_string());
                true
            }
            None => false,
        }
    }

    /// Removes task `id` and renumbers the rest to 1..=N in list order.
    ///
    /// Returns the removed task, or `None` if the id was not present.
    pub fn delete(&mut self, id: u32) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        let removed = self.tasks.remove(index);
        self.renumber();
        Some(removed)
    }

    fn renumber(&mut self) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.id = index as u32 + 1;
        }
    }

    /// Sets the status of task `id`. `updated_at` is left as it was.
    pub fn change_status(&mut self, id: u32, status: Status) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    /// Tasks selected by `filter`, in stored order.
    pub fn list(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "1/1/2024, 9:00:00 AM";
    const LATER: &str = "1/2/2024, 10:30:00 AM";

    fn repo_with(descriptions: &[&str]) -> TaskRepository {
        let mut repo = TaskRepository::new();
        for description in descriptions {
            repo.add(description, NOW);
        }
        repo
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(TaskRepository::new().next_id(), 1);
    }

    #[test]
    fn add_assigns_sequential_ids_with_todo_status() {
        let mut repo = TaskRepository::new();

        assert_eq!(repo.add("first", NOW), 1);
        assert_eq!(repo.add("second", NOW), 2);

        let second = repo.get(2).unwrap();
        assert_eq!(second.description, "second");
        assert_eq!(second.status, Status::Todo);
        assert_eq!(second.created_at, NOW);
        assert_eq!(second.updated_at, None);
    }

    #[test]
    fn delete_renumbers_remaining_tasks() {
        let mut repo = repo_with(&["a", "b", "c"]);

        let removed = repo.delete(2).unwrap();
        assert_eq!(removed.description, "b");

        let ids: Vec<u32> = repo.tasks().iter().map(|task| task.id).collect();
        let descriptions: Vec<&str> = repo.tasks().iter().map(|task| task.description.as_str()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(descriptions, vec!["a", "c"]);
    }

    #[test]
    fn add_after_delete_reuses_the_freed_number() {
        let mut repo = repo_with(&["a", "b", "c"]);
        repo.delete(1);

        assert_eq!(repo.add("d", NOW), 3);
        let ids: Vec<u32> = repo.tasks().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn delete_missing_id_leaves_repository_unchanged() {
        let mut repo = repo_with(&["a", "b"]);
        let before = repo.clone();

        assert!(repo.delete(5).is_none());
        assert_eq!(repo, before);
    }

    #[test]
    fn delete_preserves_created_at() {
        let mut repo = TaskRepository::new();
        repo.add("a", NOW);
        repo.add("b", LATER);

        repo.delete(1);
        assert_eq!(repo.get(1).unwrap().created_at, LATER);
    }

    #[test]
    fn update_description_touches_only_the_target() {
        let mut repo = repo_with(&["a", "b"]);

        assert!(repo.update_description(1, "x", LATER));

        let first = repo.get(1).unwrap();
        assert_eq!(first.description, "x");
        assert_eq!(first.updated_at.as_deref(), Some(LATER));
        assert_eq!(first.created_at, NOW);

        let second = repo.get(2).unwrap();
        assert_eq!(second.description, "b");
        assert_eq!(second.updated_at, None);
    }

    #[test]
    fn update_description_of_missing_task_is_rejected() {
        let mut repo = repo_with(&["a"]);
        let before = repo.clone();

        assert!(!repo.update_description(3, "x", LATER));
        assert_eq!(repo, before);
    }

    #[test]
    fn change_status_does_not_touch_updated_at() {
        let mut repo = repo_with(&["a", "b"]);

        assert!(repo.change_status(2, Status::Done));

        let second = repo.get(2).unwrap();
        assert_eq!(second.status, Status::Done);
        assert_eq!(second.updated_at, None);
        assert_eq!(repo.get(1).unwrap().status, Status::Todo);
    }

    #[test]
    fn list_filters_by_status_preserving_order() {
        let mut repo = repo_with(&["a", "b", "c", "d"]);
        repo.change_status(4, Status::InProgress);
        repo.change_status(2, Status::InProgress);
        repo.change_status(3, Status::Done);

        let in_progress: Vec<u32> = repo
            .list(TaskFilter::ByStatus(Status::InProgress))
            .iter()
            .map(|task| task.id)
            .collect();
        assert_eq!(in_progress, vec![2, 4]);

        assert_eq!(repo.list(TaskFilter::All).len(), 4);
        assert!(repo.list(TaskFilter::ByStatus(Status::Todo)).iter().all(|task| task.id == 1));
    }
}
