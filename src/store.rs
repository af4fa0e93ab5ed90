use crate::error::Result;
use crate::task::Task;
use crate::task_list::TaskList;
use serde_json::Value;
use std::{fs, io::ErrorKind, path::Path};
use tracing::{debug, info};

pub const DEFAULT_FILE: &str = "my_new_tasks.json";

/// Writes both lists to `path` as `{"active": [...], "archived": [...]}`,
/// replacing any existing content.
pub fn save(list: &TaskList, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let data = serde_json::to_string_pretty(list)?;
    fs::write(path, data)?;
    info!(
        path = %path.display(),
        active = list.active.len(),
        archived = list.archived.len(),
        "saved tasks"
    );
    Ok(())
}

/// Reads both lists from `path`. A missing file yields empty lists.
pub fn load(path: impl AsRef<Path>) -> Result<TaskList> {
    let path = path.as_ref();
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no task file yet, starting empty");
            return Ok(TaskList::new());
        }
        Err(err) => return Err(err.into()),
    };

    // Older files hold a bare array of active tasks
    let value: Value = serde_json::from_str(&data)?;
    let list = match value {
        legacy @ Value::Array(_) => {
            let active: Vec<Task> = serde_json::from_value(legacy)?;
            TaskList::from_parts(active, Vec::new())
        }
        value => serde_json::from_value(value)?,
    };
    info!(
        path = %path.display(),
        active = list.active.len(),
        archived = list.archived.len(),
        "loaded tasks"
    );
    Ok(list)
}
