//! Editable, ordered collection of task records.
//!
//! Edits touch only the records; the caller rebuilds the network
//! afterwards.

use thiserror::Error;

use crate::models::TaskRecord;
use crate::network::predecessor_names;

/// Errors that can occur while editing a record set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Task already exists: {0}")]
    DuplicateTask(String),
    #[error("Task not found: {0}")]
    TaskNotFound(String),
}

/// Task records in caller order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<TaskRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskRecord> {
        self.records.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TaskRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    fn position(&self, name: &str) -> Result<usize, RecordError> {
        self.records
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| RecordError::TaskNotFound(name.to_string()))
    }

    /// Append a record. Names must be unique.
    pub fn add(&mut self, record: TaskRecord) -> Result<(), RecordError> {
        if self.get(&record.name).is_some() {
            return Err(RecordError::DuplicateTask(record.name));
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove a record and drop its name from every other predecessor list.
    pub fn remove(&mut self, name: &str) -> Result<TaskRecord, RecordError> {
        let position = self.position(name)?;
        let removed = self.records.remove(position);
        for record in &mut self.records {
            if predecessor_names(&record.predecessors).any(|p| p == name) {
                record.predecessors = predecessor_names(&record.predecessors)
                    .filter(|p| *p != name)
                    .collect::<Vec<_>>()
                    .join(",");
            }
        }
        Ok(removed)
    }

    /// Change the duration and predecessors of an existing record. The name
    /// and layout hints stay as they are.
    pub fn update(
        &mut self,
        name: &str,
        duration: u32,
        predecessors: &str,
    ) -> Result<(), RecordError> {
        let position = self.position(name)?;
        let record = &mut self.records[position];
        record.duration = duration.to_string();
        record.predecessors = predecessors.to_string();
        Ok(())
    }

    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

impl From<Vec<TaskRecord>> for RecordSet {
    fn from(records: Vec<TaskRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a TaskRecord;
    type IntoIter = std::slice::Iter<'a, TaskRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
