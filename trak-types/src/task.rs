use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Todo
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new_with_current_time(id: TaskId, payload: CreateTask) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: payload.title,
            description: payload.description,
            priority: payload.priority,
            status: TaskStatus::default(),
            deadline: payload.deadline,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: TaskPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskPriority::High).unwrap(),
            r#""high""#
        );
        assert_eq!(
            serde_json::from_str::<TaskPriority>(r#""low""#).unwrap(),
            TaskPriority::Low
        );
    }

    #[test]
    fn priority_ordering() {
        assert!(TaskPriority::Low < TaskPriority::Medium);
        assert!(TaskPriority::Medium < TaskPriority::High);
    }

    #[test]
    fn status_defaults_to_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }

    #[test]
    fn task_id_round_trips_through_str() {
        let id: TaskId = "42".parse().unwrap();
        assert_eq!(id, TaskId(42));
        assert_eq!(id.to_string(), "42");
        assert!("not-a-number".parse::<TaskId>().is_err());
    }

    #[test]
    fn update_treats_null_and_absent_the_same() {
        let absent: UpdateTask = serde_json::from_str("{}").unwrap();
        let null: UpdateTask =
            serde_json::from_str(r#"{"description": null, "priority": null, "deadline": null}"#)
                .unwrap();

        assert!(absent.description.is_none() && null.description.is_none());
        assert!(absent.priority.is_none() && null.priority.is_none());
        assert!(absent.deadline.is_none() && null.deadline.is_none());
    }

    #[test]
    fn new_task_stamps_both_timestamps_once() {
        let task = Task::new_with_current_time(
            TaskId(1),
            CreateTask {
                title: "write docs".into(),
                description: None,
                priority: TaskPriority::Medium,
                deadline: None,
            },
        );

        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[test]
    fn absent_optionals_are_skipped_on_the_wire() {
        let task = Task::new_with_current_time(
            TaskId(7),
            CreateTask {
                title: "ship it".into(),
                description: None,
                priority: TaskPriority::High,
                deadline: None,
            },
        );

        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("deadline").is_none());
        assert_eq!(json["status"], "todo");
    }
}
