use chrono::NaiveDate;
use thiserror::Error;

use crate::{
    consts::consts::EntityId,
    model::{lead::Lead, user::User, UpdateStatement},
};

#[derive(Error, Debug, PartialEq)]
pub enum ApplyErrors {
    // CRUD - GET
    #[error("Not found, record does not exist: {0}")]
    CannotGetDoesNotExist(EntityId),

    // CRUD - CREATE
    #[error("Cannot create, required field is empty: {0}")]
    MissingRequiredField(String),

    // CRUD - UPDATE
    #[error("Cannot Update, record does not exist: {0}")]
    CannotUpdateDoesNotExist(EntityId),

    // Constraints
    #[error("Cannot set field to null: {0}")]
    NotNullConstraintViolation(String),

    #[error("Follow up date out of range: {0} days")]
    FollowUpOutOfRange(u32),
}

/// Anything the tables store, records are looked up by id
pub trait Record: Clone {
    fn id(&self) -> &EntityId;
}

impl Record for Lead {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

impl Record for User {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Where a newly added record lands in the list
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Front,
    Back,
}

/// Values a statement needs from outside the table
#[derive(Clone, Debug)]
pub struct ApplyContext {
    pub today: NaiveDate,
    pub follow_up_days: u32,
}

/// Ordered list of records. Identifiers are assumed unique and are never checked.
#[derive(Clone, Debug)]
pub struct RecordTable<T: Record> {
    rows: Vec<T>,
    placement: Placement,
}

impl<T: Record> RecordTable<T> {
    pub fn new(placement: Placement) -> Self {
        Self {
            rows: vec![],
            placement,
        }
    }

    pub fn from_rows(rows: Vec<T>, placement: Placement) -> Self {
        Self { rows, placement }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Next identifier, taken from the current list length. Not collision safe.
    pub fn next_id(&self) -> EntityId {
        EntityId::from_list_length(self.rows.len())
    }

    pub fn insert(&mut self, record: T) {
        match self.placement {
            Placement::Front => self.rows.insert(0, record),
            Placement::Back => self.rows.push(record),
        }
    }

    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Builds the replacement from the current record and swaps it in. If `update` fails
    /// the table is left untouched.
    pub fn replace<F>(&mut self, id: &EntityId, update: F) -> Result<T, ApplyErrors>
    where
        F: FnOnce(&T) -> Result<T, ApplyErrors>,
    {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or(ApplyErrors::CannotUpdateDoesNotExist(id.clone()))?;

        let replacement = update(row)?;
        *row = replacement.clone();

        Ok(replacement)
    }

    pub fn replace_all(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }
}

// Field setters shared by the update statements

pub fn set_required(
    field: &str,
    update: UpdateStatement<String>,
    value: &mut String,
) -> Result<(), ApplyErrors> {
    match update {
        UpdateStatement::Set(new_value) => {
            if new_value.is_empty() {
                return Err(ApplyErrors::NotNullConstraintViolation(field.to_string()));
            }

            *value = new_value;
        }
        UpdateStatement::Unset => {
            return Err(ApplyErrors::NotNullConstraintViolation(field.to_string()))
        }
        UpdateStatement::NoChanges => {}
    }

    Ok(())
}

pub fn set_text(update: UpdateStatement<String>, value: &mut String) {
    match update {
        UpdateStatement::Set(new_value) => *value = new_value,
        UpdateStatement::Unset => value.clear(),
        UpdateStatement::NoChanges => {}
    }
}

pub fn set_value<T>(
    field: &str,
    update: UpdateStatement<T>,
    value: &mut T,
) -> Result<(), ApplyErrors> {
    match update {
        UpdateStatement::Set(new_value) => *value = new_value,
        UpdateStatement::Unset => {
            return Err(ApplyErrors::NotNullConstraintViolation(field.to_string()))
        }
        UpdateStatement::NoChanges => {}
    }

    Ok(())
}

/// Blank optional text is stored as absent
pub fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn set_optional<T>(update: UpdateStatement<T>, value: &mut Option<T>) {
    match update {
        UpdateStatement::Set(new_value) => *value = Some(new_value),
        UpdateStatement::Unset => *value = None,
        UpdateStatement::NoChanges => {}
    }
}
