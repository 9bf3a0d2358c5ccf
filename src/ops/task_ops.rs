use chrono::Utc;

use crate::model::task::Task;

/// Generate a fresh task id.
///
/// Ids keep the epoch-millisecond shape of the persisted format but are
/// bumped past the list's current maximum, so rapid additions within one
/// clock tick stay unique and ids are strictly increasing.
pub fn fresh_id(tasks: &[Task]) -> u64 {
    let now = Utc::now().timestamp_millis().max(0) as u64;
    let floor = tasks.iter().map(|t| t.id.saturating_add(1)).max().unwrap_or(0);
    now.max(floor)
}

/// Append a new incomplete task, returning its id.
///
/// Emptiness is not checked here; interactive callers trim and reject blank
/// text before calling.
pub fn add_task(tasks: &mut Vec<Task>, description: String) -> u64 {
    let id = fresh_id(tasks);
    tasks.push(Task::new(id, description));
    id
}

/// Remove the task with the given id, preserving the order of the rest.
/// Unknown ids are a no-op. Returns whether anything was removed.
pub fn delete_task(tasks: &mut Vec<Task>, id: u64) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

/// Flip the completion state of the task with the given id.
/// Unknown ids are a no-op. Returns whether a task was toggled.
pub fn toggle_task(tasks: &mut [Task], id: u64) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.state = !task.state;
            true
        }
        None => false,
    }
}

/// Replace the description of the task with the given id, leaving id and
/// state untouched. Unknown ids are a no-op. Empty text is not filtered
/// here; interactive callers guard before calling.
pub fn edit_task(tasks: &mut [Task], id: u64, description: String) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.description = description;
            true
        }
        None => false,
    }
}
