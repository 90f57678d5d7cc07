use serde::{Deserialize, Serialize};

/// Task progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
}

impl TaskStatus {
    /// Human-readable label, identical to the on-disk spelling
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

/// A single tracked task.
///
/// Completion is derived from `status`; the `complete` flag only exists in
/// the persisted form (see [`TaskRecord`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TaskRecord", from = "TaskRecord")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub status: TaskStatus,
}

impl Task {
    /// Create a new task in the `Todo` state
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            status: TaskStatus::Todo,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Flip between done and not done. Anything that isn't done becomes done.
    pub fn toggle_done(&mut self) {
        self.status = if self.is_complete() {
            TaskStatus::Todo
        } else {
            TaskStatus::Done
        };
    }

    pub fn mark_in_progress(&mut self) {
        self.status = TaskStatus::InProgress;
    }
}

/// On-disk shape of a task: `{"id", "title", "status", "complete"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TaskRecord {
    id: u64,
    title: String,
    status: TaskStatus,
    complete: bool,
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        let complete = task.is_complete();
        TaskRecord {
            id: task.id,
            title: task.title,
            status: task.status,
            complete,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        if record.complete != (record.status == TaskStatus::Done) {
            log::debug!(
                "task {}: complete={} disagrees with status {:?}, keeping status",
                record.id,
                record.complete,
                record.status
            );
        }
        Task {
            id: record.id,
            title: record.title,
            status: record.status,
        }
    }
}
