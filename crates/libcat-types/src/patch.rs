use serde_json::{Map, Value};

use crate::book::BookField;
use crate::error::ValidationError;
use crate::json::{as_integer, is_truthy};

/// Field-level overwrite set for an update.
///
/// `None` leaves the stored value alone. Built from a request body with
/// [`BookPatch::from_json`], or directly with the `with_*` builders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i64>,
    pub copies: Option<i64>,
}

impl BookPatch {
    /// Parse an update request body.
    ///
    /// `year` and `copies` are checked first: if present they must be
    /// integers, and an explicit `null` counts as present. Falsy text values
    /// are dropped; a truthy non-string is rejected. `book_id` and unknown
    /// keys are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let year = optional_integer(obj, BookField::Year)?;
        let copies = optional_integer(obj, BookField::Copies)?;

        Ok(Self {
            title: optional_text(obj, BookField::Title)?,
            author: optional_text(obj, BookField::Author)?,
            genre: optional_text(obj, BookField::Genre)?,
            year,
            copies,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_copies(mut self, copies: i64) -> Self {
        self.copies = Some(copies);
        self
    }

    /// Returns `true` if applying the patch cannot change a record.
    pub fn is_empty(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, str::is_empty);
        blank(&self.title)
            && blank(&self.author)
            && blank(&self.genre)
            && self.year.is_none()
            && self.copies.is_none()
    }
}

fn optional_integer(
    obj: &Map<String, Value>,
    field: BookField,
) -> Result<Option<i64>, ValidationError> {
    match obj.get(field.as_str()) {
        None => Ok(None),
        Some(v) => as_integer(v)
            .map(Some)
            .ok_or(ValidationError::NotAnInteger { field }),
    }
}

fn optional_text(
    obj: &Map<String, Value>,
    field: BookField,
) -> Result<Option<String>, ValidationError> {
    match obj.get(field.as_str()) {
        None => Ok(None),
        Some(v) if !is_truthy(v) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::NotAString { field }),
    }
}
