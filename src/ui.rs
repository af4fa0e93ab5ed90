use crate::dates::parse_due_date_from;
use crate::task::{Priority, Status, Task};
use crate::task_list::{parse_task_number, StatusUpdate, TaskList};
use chrono::{Local, NaiveDate};
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use tracing::debug;

const EMPTY_LIST: &str = "Your to-do list is empty.";
const INVALID_NUMBER: &str = "Invalid task number. Please try again.";

/// Line-oriented front end over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
    /// Fixed day for date checks; the local clock when unset.
    today: Option<NaiveDate>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
            today: None,
        }
    }

    /// Pins "today" instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu until `Q` or end of input. Saving is left to the caller.
    pub fn run(&mut self, list: &mut TaskList) -> io::Result<()> {
        loop {
            writeln!(
                self.output,
                "\nEnter 'A' to add a task, 'R' to remove a task, 'U' to update task status,"
            )?;
            writeln!(
                self.output,
                "'D' to display tasks, 'V' to view archived tasks, or 'Q' to quit:"
            )?;
            let Some(choice) = self.read_line()? else {
                debug!("end of input at menu");
                return Ok(());
            };

            match choice.to_uppercase().as_str() {
                "A" => self.add_task(list)?,
                "R" => self.remove_task(list)?,
                "U" => self.update_task_status(list)?,
                "D" => self.display_tasks(list)?,
                "V" => self.display_archived(list)?,
                "Q" => return Ok(()),
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Prints every overdue active task, or nothing when none are late.
    pub fn check_overdue(&mut self, list: &TaskList) -> io::Result<()> {
        let today = self.today();
        let overdue = list.overdue_on(today);
        if overdue.is_empty() {
            return Ok(());
        }
        writeln!(self.output, "\nOverdue tasks:")?;
        for task in overdue {
            let line = format!("- {}", task.render_on(today));
            let line = self.paint_overdue(line);
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output)
    }

    pub fn add_task(&mut self, list: &mut TaskList) -> io::Result<()> {
        let Some(task) = self.read_task()? else {
            return Ok(());
        };
        list.add(task);
        writeln!(self.output, "Task added successfully!")
    }

    pub fn remove_task(&mut self, list: &mut TaskList) -> io::Result<()> {
        if list.active.is_empty() {
            return writeln!(self.output, "{EMPTY_LIST}");
        }
        self.display_tasks(list)?;

        loop {
            let Some(input) =
                self.prompt("Enter the number of the task you want to remove: ")?
            else {
                return Ok(());
            };
            let removed = parse_task_number(&input, list.active.len())
                .and_then(|number| list.remove(number));
            match removed {
                Ok(task) => {
                    let today = self.today();
                    return writeln!(self.output, "Task removed: {}", task.render_on(today));
                }
                Err(_) => writeln!(self.output, "{INVALID_NUMBER}")?,
            }
        }
    }

    pub fn update_task_status(&mut self, list: &mut TaskList) -> io::Result<()> {
        if list.active.is_empty() {
            return writeln!(self.output, "{EMPTY_LIST}");
        }
        self.display_tasks(list)?;

        loop {
            let Some(input) =
                self.prompt("Enter the number of the task you want to update: ")?
            else {
                return Ok(());
            };
            let number = match parse_task_number(&input, list.active.len()) {
                Ok(number) => number,
                Err(_) => {
                    writeln!(self.output, "{INVALID_NUMBER}")?;
                    continue;
                }
            };

            let Some(input) =
                self.prompt("Enter new status (In Progress, On Hold, Complete): ")?
            else {
                return Ok(());
            };
            let status = match input.parse::<Status>() {
                Ok(status) => status,
                Err(_) => {
                    writeln!(self.output, "Invalid status. Please try again.")?;
                    continue;
                }
            };

            let today = self.today();
            return match list.set_status(number, status) {
                Ok(StatusUpdate::Archived(task)) => {
                    writeln!(self.output, "Task archived: {}", task.render_on(today))
                }
                Ok(StatusUpdate::Updated(task)) => {
                    writeln!(self.output, "Task updated: {}", task.render_on(today))
                }
                Err(err) => writeln!(self.output, "{err}"),
            };
        }
    }

    pub fn display_tasks(&mut self, list: &TaskList) -> io::Result<()> {
        if list.active.is_empty() {
            return writeln!(self.output, "{EMPTY_LIST}");
        }
        let today = self.today();
        writeln!(self.output, "Your to-do list:")?;
        for (i, task) in list.active.iter().enumerate() {
            let line = format!("{}. {}", i + 1, task.render_on(today));
            let line = if task.is_overdue_on(today) {
                self.paint_overdue(format!("{line} (OVERDUE)"))
            } else if task.is_due_soon_on(today) {
                self.paint_due_soon(format!("{line} (DUE SOON)"))
            } else {
                line
            };
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    pub fn display_archived(&mut self, list: &TaskList) -> io::Result<()> {
        if list.archived.is_empty() {
            return writeln!(self.output, "No archived tasks.");
        }
        let today = self.today();
        writeln!(self.output, "Archived tasks:")?;
        for (i, task) in list.archived.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, task.render_on(today))?;
        }
        Ok(())
    }

    /// Collects a new task. `None` when input ends part way through.
    fn read_task(&mut self) -> io::Result<Option<Task>> {
        let Some(description) = self.prompt("Enter the task description: ")? else {
            return Ok(None);
        };

        let due_date = loop {
            let Some(input) = self.prompt(
                "Enter the due date (YYYY-MM-DD, today, tomorrow, next week, next month) or leave blank for no due date: ",
            )?
            else {
                return Ok(None);
            };
            if input.is_empty() {
                break None;
            }
            match parse_due_date_from(&input, self.today()) {
                Ok(date) => break Some(date),
                Err(_) => writeln!(self.output, "Invalid date format. Please try again.")?,
            }
        };

        let Some(input) = self.prompt("Enter priority (high/medium/low): ")? else {
            return Ok(None);
        };
        let priority = input.parse::<Priority>().unwrap_or_default();

        let Some(input) = self.prompt("Enter status (in progress, on hold, complete): ")? else {
            return Ok(None);
        };
        let status = input.parse::<Status>().unwrap_or_default();

        Ok(Some(Task::new(description, due_date, priority, status)))
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next trimmed line, or `None` at end of input. Invalid UTF-8 is
    /// replaced, so a garbled line reads as ordinary bad input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn paint_overdue(&self, line: String) -> String {
        if self.color {
            line.red().to_string()
        } else {
            line
        }
    }

    fn paint_due_soon(&self, line: String) -> String {
        if self.color {
            line.yellow().to_string()
        } else {
            line
        }
    }
}
