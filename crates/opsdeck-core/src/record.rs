use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::listing::TableRow;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
    pub status: UserStatus,
    pub last_login: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        avatar: impl Into<String>,
        status: UserStatus,
        last_login: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            avatar: avatar.into(),
            status,
            last_login,
        }
    }
}

/// Sortable columns of the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortKey {
    Name,
    Role,
    Status,
    LastLogin,
}

impl TableRow for User {
    type SortKey = UserSortKey;

    fn row_id(&self) -> Uuid {
        self.id
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.role]
    }

    fn compare_by(&self, other: &Self, key: UserSortKey) -> Ordering {
        match key {
            UserSortKey::Name => fold_cmp(&self.name, &other.name),
            UserSortKey::Role => fold_cmp(&self.role, &other.role),
            UserSortKey::Status => self.status.as_key().cmp(other.status.as_key()),
            UserSortKey::LastLogin => self.last_login.cmp(&other.last_login),
        }
    }
}

fn fold_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

// Serialized kebab-case so the persisted slot keeps the
// `in-progress` wire spelling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn all() -> [Self; 3] {
        [Self::Todo, Self::InProgress, Self::Done]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub tags: Vec<String>,
}

impl Task {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
        status: TaskStatus,
        assignee: impl Into<String>,
        due_date: NaiveDate,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            priority,
            status,
            assignee: assignee.into(),
            due_date,
            tags,
        }
    }

    /// First name of the assignee, or a placeholder when unassigned.
    pub fn assignee_short(&self) -> &str {
        match self.assignee.split_whitespace().next() {
            Some(first) => first,
            None => "Unassigned",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Meeting,
    Deadline,
    Event,
}

impl EventKind {
    pub fn all() -> [Self; 3] {
        [Self::Meeting, Self::Deadline, Self::Event]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Deadline => "deadline",
            Self::Event => "event",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "meeting" => Some(Self::Meeting),
            "deadline" => Some(Self::Deadline),
            "event" => Some(Self::Event),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Meeting => "Meeting",
            Self::Deadline => "Deadline",
            Self::Event => "Event",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub kind: EventKind,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        kind: EventKind,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date,
            time: time.into(),
            kind,
            description: None,
            location: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: u32,
    pub user: String,
    pub action: String,
    pub time: String,
}

impl Activity {
    pub fn new(id: u32, user: impl Into<String>, action: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id,
            user: user.into(),
            action: action.into(),
            time: time.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_status_round_trips_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).expect("serialize status");
        assert_eq!(json, "\"in-progress\"");

        let parsed: TaskStatus = serde_json::from_str(&json).expect("parse status");
        assert_eq!(parsed, TaskStatus::InProgress);
    }

    #[test]
    fn status_keys_invert() {
        for status in TaskStatus::all() {
            assert_eq!(TaskStatus::from_key(status.as_key()), Some(status));
        }
        assert_eq!(TaskStatus::from_key("archived"), None);
    }

    #[test]
    fn assignee_short_takes_first_name() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date");
        let mut task = Task::new(
            "t",
            "",
            TaskPriority::Low,
            TaskStatus::Todo,
            "Sarah Johnson",
            date,
            vec![],
        );
        assert_eq!(task.assignee_short(), "Sarah");

        task.assignee = String::new();
        assert_eq!(task.assignee_short(), "Unassigned");
    }
}
