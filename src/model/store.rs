use std::path::{Path, PathBuf};

use crate::io::store_io;
use crate::model::task::Task;
use crate::ops::task_ops;

/// Sole owner and mutator of the task list.
///
/// Seeds itself from the task file once at construction; every mutation that
/// changed the list writes the new snapshot back. Writes are best-effort:
/// a failed write never interrupts the session.
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Load the store from the given task file. A missing or unreadable file
    /// seeds an empty list.
    pub fn load(path: PathBuf) -> Self {
        let tasks = store_io::read_tasks(&path);
        TaskStore { tasks, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current snapshot, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.state).count()
    }

    /// Append a new incomplete task and return its id. Callers are
    /// responsible for rejecting blank descriptions.
    pub fn add(&mut self, description: String) -> u64 {
        let id = task_ops::add_task(&mut self.tasks, description);
        self.persist();
        id
    }

    /// Remove the task with the given id. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: u64) -> bool {
        let removed = task_ops::delete_task(&mut self.tasks, id);
        if removed {
            self.persist();
        }
        removed
    }

    /// Flip the completion state of the task with the given id.
    /// Unknown ids are a silent no-op.
    pub fn toggle(&mut self, id: u64) -> bool {
        let toggled = task_ops::toggle_task(&mut self.tasks, id);
        if toggled {
            self.persist();
        }
        toggled
    }

    /// Replace the description of the task with the given id.
    /// Unknown ids are a silent no-op; empty text is the caller's guard.
    pub fn edit(&mut self, id: u64, description: String) -> bool {
        let edited = task_ops::edit_task(&mut self.tasks, id, description);
        if edited {
            self.persist();
        }
        edited
    }

    /// Write the current snapshot back to the task file.
    ///
    /// Skipped when the list is empty: deleting the last task leaves the
    /// previous snapshot on disk until the next add.
    fn persist(&self) {
        if self.tasks.is_empty() {
            return;
        }
        let _ = store_io::write_tasks(&self.path, &self.tasks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, TaskStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        (dir, TaskStore::load(path))
    }

    #[test]
    fn loads_empty_when_file_is_missing() {
        let (_dir, store) = temp_store();
        assert!(store.is_empty());
    }

    #[test]
    fn add_persists_and_reloads() {
        let (_dir, mut store) = temp_store();
        let id = store.add("Buy milk".into());
        let path = store.path().to_path_buf();

        let reloaded = TaskStore::load(path);
        assert_eq!(reloaded.len(), 1);
        let task = reloaded.get(id).unwrap();
        assert_eq!(task.description, "Buy milk");
        assert!(!task.state);
    }

    #[test]
    fn mutations_persist_across_reloads() {
        let (_dir, mut store) = temp_store();
        let a = store.add("one".into());
        let b = store.add("two".into());
        store.toggle(b);
        store.edit(a, "one, revised".into());
        let path = store.path().to_path_buf();

        let reloaded = TaskStore::load(path);
        assert_eq!(reloaded.get(a).unwrap().description, "one, revised");
        assert!(reloaded.get(b).unwrap().state);
    }

    #[test]
    fn unknown_id_mutations_do_not_touch_the_file() {
        let (_dir, mut store) = temp_store();
        assert!(!store.toggle(99));
        assert!(!store.delete(99));
        assert!(!store.edit(99, "ghost".into()));
        // Nothing was ever written
        assert!(!store.path().exists());
    }

    #[test]
    fn deleting_the_last_task_leaves_the_snapshot_stale() {
        let (_dir, mut store) = temp_store();
        let id = store.add("only task".into());
        store.delete(id);
        assert!(store.is_empty());

        // The file still holds the one-task snapshot
        let on_disk = store_io::read_tasks(store.path());
        assert_eq!(on_disk.len(), 1);
        assert_eq!(on_disk[0].description, "only task");

        // The next add replaces it
        store.add("fresh start".into());
        let on_disk = store_io::read_tasks(store.path());
        assert_eq!(on_disk.len(), 1);
        assert_eq!(on_disk[0].description, "fresh start");
    }

    #[test]
    fn deleting_a_task_from_a_pair_persists_the_survivor() {
        let (_dir, mut store) = temp_store();
        let a = store.add("one".into());
        store.add("two".into());
        store.delete(a);

        let on_disk = store_io::read_tasks(store.path());
        assert_eq!(on_disk.len(), 1);
        assert_eq!(on_disk[0].description, "two");
    }

    #[test]
    fn done_count_tracks_toggles() {
        let (_dir, mut store) = temp_store();
        let a = store.add("one".into());
        store.add("two".into());
        assert_eq!(store.done_count(), 0);
        store.toggle(a);
        assert_eq!(store.done_count(), 1);
        store.toggle(a);
        assert_eq!(store.done_count(), 0);
    }
}
