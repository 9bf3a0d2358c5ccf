use crate::model::task::Task;

/// Plain-text row: id, checkbox, description
pub fn task_line(task: &Task) -> String {
    format!(
        "{:>13}  [{}] {}",
        task.id,
        task.checkbox_char(),
        task.description
    )
}

/// Print the task list as plain rows or as the JSON array (the same layout
/// the store persists).
pub fn print_tasks(tasks: &[Task], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(tasks).unwrap_or_else(|_| "[]".into())
        );
    } else if tasks.is_empty() {
        println!("no tasks");
    } else {
        for task in tasks {
            println!("{}", task_line(task));
        }
    }
}

/// Print a single task as a plain row or a JSON object.
pub fn print_task(task: &Task, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(task).unwrap_or_else(|_| "{}".into())
        );
    } else {
        println!("{}", task_line(task));
    }
}
