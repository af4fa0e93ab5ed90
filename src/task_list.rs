use crate::error::{Result, TaskError};
use crate::task::{Status, Task};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Active and archived tasks, in insertion order. Display numbers are
/// 1-based positions in these vectors.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskList {
    #[serde(default)]
    pub active: Vec<Task>,
    #[serde(default)]
    pub archived: Vec<Task>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StatusUpdate<'a> {
    Updated(&'a Task),
    Archived(&'a Task),
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(active: Vec<Task>, archived: Vec<Task>) -> Self {
        Self { active, archived }
    }

    /// Appends to the active list. Only a status update archives a task.
    pub fn add(&mut self, task: Task) {
        debug!(description = %task.description, status = %task.status, "adding task");
        self.active.push(task);
    }

    /// Removes the active task at 1-based `number`.
    pub fn remove(&mut self, number: usize) -> Result<Task> {
        let index = self.active_index(number)?;
        let task = self.active.remove(index);
        info!(number, description = %task.description, "removed task");
        Ok(task)
    }

    /// Sets the status of the active task at 1-based `number`. Completing a
    /// task moves it to the end of the archive.
    pub fn set_status(&mut self, number: usize, status: Status) -> Result<StatusUpdate<'_>> {
        let index = self.active_index(number)?;
        if status == Status::Complete {
            let mut task = self.active.remove(index);
            task.status = status;
            info!(number, description = %task.description, "archived task");
            self.archived.push(task);
            match self.archived.last() {
                Some(archived) => Ok(StatusUpdate::Archived(archived)),
                None => unreachable!("archive is non-empty after push"),
            }
        } else {
            let task = &mut self.active[index];
            task.status = status;
            info!(number, description = %task.description, %status, "updated task status");
            Ok(StatusUpdate::Updated(task))
        }
    }

    pub fn overdue_on(&self, today: NaiveDate) -> Vec<&Task> {
        self.active
            .iter()
            .filter(|t| t.is_overdue_on(today))
            .collect()
    }

    fn active_index(&self, number: usize) -> Result<usize> {
        if number == 0 || number > self.active.len() {
            return Err(TaskError::InvalidIndex(number.to_string()));
        }
        Ok(number - 1)
    }
}

/// Parses a 1-based task number typed by the user, bounded by `len`.
pub fn parse_task_number(input: &str, len: usize) -> Result<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(number) if (1..=len).contains(&number) => Ok(number),
        _ => Err(TaskError::InvalidIndex(trimmed.to_string())),
    }
}
