use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::required_text;
use crate::error::{ClassifiedFault, FaultResult};

/// Maximum length of a todo description
pub const MAX_TODO_DESCRIPTION_LEN: usize = 500;

/// A todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDo {
    pub id: i32,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ToDo {
    pub fn create(description: &str) -> FaultResult<Self> {
        let description = required_text(description, "Description", MAX_TODO_DESCRIPTION_LEN)?;
        Ok(Self {
            id: 0,
            description,
            is_completed: false,
            created_at: Utc::now(),
            updated_at: None,
            completed_at: None,
        })
    }

    pub fn update_description(&mut self, description: &str) -> FaultResult<()> {
        self.description = required_text(description, "Description", MAX_TODO_DESCRIPTION_LEN)?;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn mark_completed(&mut self) -> FaultResult<()> {
        if self.is_completed {
            return Err(ClassifiedFault::validation("ToDo is already completed"));
        }
        let now = Utc::now();
        self.is_completed = true;
        self.completed_at = Some(now);
        self.updated_at = Some(now);
        Ok(())
    }

    pub fn mark_incomplete(&mut self) -> FaultResult<()> {
        if !self.is_completed {
            return Err(ClassifiedFault::validation("ToDo is already incomplete"));
        }
        self.is_completed = false;
        self.completed_at = None;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Move to the requested completion state, doing nothing if already there
    pub fn set_completed(&mut self, completed: bool) -> FaultResult<()> {
        match (self.is_completed, completed) {
            (false, true) => self.mark_completed(),
            (true, false) => self.mark_incomplete(),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_cycle() {
        let mut todo = ToDo::create("Reconcile bank statement").unwrap();
        assert!(!todo.is_completed);
        assert!(todo.completed_at.is_none());

        todo.mark_completed().unwrap();
        assert!(todo.is_completed);
        assert!(todo.completed_at.is_some());
        assert_eq!(todo.mark_completed().unwrap_err().to_string(), "ToDo is already completed");

        todo.mark_incomplete().unwrap();
        assert!(todo.completed_at.is_none());
        assert_eq!(todo.mark_incomplete().unwrap_err().to_string(), "ToDo is already incomplete");
    }

    #[test]
    fn test_set_completed_is_idempotent() {
        let mut todo = ToDo::create("Close period").unwrap();
        todo.set_completed(false).unwrap();
        assert!(todo.updated_at.is_none());

        todo.set_completed(true).unwrap();
        todo.set_completed(true).unwrap();
        assert!(todo.is_completed);
    }

    #[test]
    fn test_description_limit() {
        let long = "t".repeat(MAX_TODO_DESCRIPTION_LEN + 1);
        assert!(ToDo::create(&long).is_err());
        assert!(ToDo::create(&"t".repeat(MAX_TODO_DESCRIPTION_LEN)).is_ok());
    }
}
