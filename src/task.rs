use crate::dates::DATE_FORMAT;
use crate::error::TaskError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    #[serde(
        default,
        serialize_with = "due_date_format::serialize",
        deserialize_with = "due_date_format::deserialize"
    )]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[serde(rename = "high", alias = "High")]
    High,
    #[default]
    #[serde(rename = "medium", alias = "Medium")]
    Medium,
    #[serde(rename = "low", alias = "Low")]
    Low,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    #[serde(rename = "in progress", alias = "In Progress")]
    InProgress,
    #[serde(rename = "on hold", alias = "On Hold")]
    OnHold,
    #[serde(rename = "complete", alias = "Complete")]
    Complete,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(TaskError::InvalidPriority(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "in progress",
            Status::OnHold => "on hold",
            Status::Complete => "complete",
        }
    }
}

impl FromStr for Status {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Collapse inner whitespace so "In   Progress" still matches
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        match normalized.as_str() {
            "in progress" | "in-progress" => Ok(Status::InProgress),
            "on hold" | "on-hold" => Ok(Status::OnHold),
            "complete" => Ok(Status::Complete),
            _ => Err(TaskError::InvalidStatus(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Task {
    pub fn new(
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
        priority: Priority,
        status: Status,
    ) -> Self {
        Self {
            description: description.into(),
            due_date,
            priority,
            status,
        }
    }

    /// True when the due date lies strictly before `today`.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due < today)
    }

    /// True when the task falls due within the next day: today or tomorrow.
    /// Overdue tasks are not due soon.
    pub fn is_due_soon_on(&self, today: NaiveDate) -> bool {
        let Some(due) = self.due_date else {
            return false;
        };
        let horizon = today.checked_add_days(Days::new(1)).unwrap_or(today);
        today <= due && due <= horizon
    }

    pub fn due_label_on(&self, today: NaiveDate) -> String {
        match self.due_date {
            None => "No due date".to_string(),
            Some(due) if due == today => "Today".to_string(),
            Some(due) if Some(due) == today.checked_add_days(Days::new(1)) => {
                "Tomorrow".to_string()
            }
            Some(due) => due.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn render_on(&self, today: NaiveDate) -> String {
        format!(
            "{} (Due: {}, Priority: {}, Status: {})",
            self.description,
            self.due_label_on(today),
            self.priority,
            self.status
        )
    }
}

/// `YYYY-MM-DD` on disk, empty string (or null) when unset.
mod due_date_format {
    use crate::dates::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
        }
    }
}
