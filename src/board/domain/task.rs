//! Task entity and its creation/update payloads.

use super::{BoardError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A card on the board.
///
/// Tasks are owned by the board's task table and referenced by exactly one
/// column's task-id list. The id and creation timestamp are fixed at
/// creation; title, description, and labels may be edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    labels: Vec<String>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from a draft, stamping it with the clock's time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTaskTitle`] when the draft title is empty
    /// after trimming.
    pub fn from_draft(draft: TaskDraft, clock: &impl Clock) -> Result<Self, BoardError> {
        let title = validated_title(&draft.title).ok_or(BoardError::EmptyTaskTitle)?;
        Ok(Self {
            id: TaskId::new(),
            title,
            description: draft.description,
            labels: draft.labels,
            created_at: clock.utc(),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Merges a patch into this task, leaving unset fields unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTaskTitle`] when the patch renames the
    /// task to an empty or whitespace-only title. The task is not modified
    /// on error.
    pub fn apply_patch(&mut self, patch: TaskPatch) -> Result<(), BoardError> {
        // Validate the rename before touching any field so a rejected
        // patch leaves the task untouched.
        let mut renamed = None;
        if let Some(raw) = patch.title.as_deref() {
            renamed = Some(validated_title(raw).ok_or(BoardError::EmptyTaskTitle)?);
        }
        if let Some(title) = renamed {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(labels) = patch.labels {
            self.labels = labels;
        }
        Ok(())
    }
}

/// Trims a candidate title, rejecting empty results.
fn validated_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    labels: Vec<String>,
}

impl TaskDraft {
    /// Creates a draft with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            labels: Vec::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the task labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = String>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }
}

/// Partial update for an existing task.
///
/// Unset fields keep their current value; the id and creation timestamp
/// can never be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    labels: Option<Vec<String>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames the task.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the task labels wholesale.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = String>) -> Self {
        self.labels = Some(labels.into_iter().collect());
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.labels.is_none()
    }
}
