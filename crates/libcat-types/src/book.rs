use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::id::BookId;
use crate::json::as_integer;
use crate::patch::BookPatch;

/// Names of the persisted book fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookField {
    BookId,
    Title,
    Author,
    Genre,
    Year,
    Copies,
}

impl BookField {
    /// JSON key of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BookId => "book_id",
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
            Self::Year => "year",
            Self::Copies => "copies",
        }
    }

    /// Capitalized name used in client-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::BookId => "Book ID",
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Genre => "Genre",
            Self::Year => "Year",
            Self::Copies => "Copies",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry.
///
/// Field order here is the order written to disk and returned to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i64,
    pub copies: i64,
}

impl Book {
    pub fn new(
        book_id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i64,
        copies: i64,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            year,
            copies,
        }
    }

    /// Build a book from a create request body.
    ///
    /// `book_id`, `title`, `author`, and `genre` must be present and
    /// non-empty; `year` and `copies` must be integers. Fields other than
    /// the six known ones are ignored.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let book_id = obj
            .get(BookField::BookId.as_str())
            .and_then(BookId::from_json)
            .ok_or(ValidationError::InvalidBook { field: BookField::BookId })?;

        Ok(Self {
            book_id,
            title: required_text(obj, BookField::Title)?,
            author: required_text(obj, BookField::Author)?,
            genre: required_text(obj, BookField::Genre)?,
            year: required_integer(obj, BookField::Year)?,
            copies: required_integer(obj, BookField::Copies)?,
        })
    }

    pub fn matches(&self, id: &BookId) -> bool {
        &self.book_id == id
    }

    /// Overwrite fields from a patch.
    ///
    /// Text fields only change when the patch carries a non-empty value;
    /// `year` and `copies` change whenever present, zero included.
    pub fn apply(&mut self, patch: &BookPatch) {
        if let Some(title) = non_empty(&patch.title) {
            self.title = title.to_string();
        }
        if let Some(author) = non_empty(&patch.author) {
            self.author = author.to_string();
        }
        if let Some(genre) = non_empty(&patch.genre) {
            self.genre = genre.to_string();
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(copies) = patch.copies {
            self.copies = copies;
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn required_text(obj: &Map<String, Value>, field: BookField) -> Result<String, ValidationError> {
    match obj.get(field.as_str()) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(ValidationError::InvalidBook { field }),
    }
}

fn required_integer(obj: &Map<String, Value>, field: BookField) -> Result<i64, ValidationError> {
    obj.get(field.as_str())
        .and_then(as_integer)
        .ok_or(ValidationError::InvalidBook { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "book_id": "b1",
            "title": "T",
            "author": "A",
            "genre": "G",
            "year": 2020,
            "copies": 3
        })
    }

    #[test]
    fn from_json_valid() {
        let book = Book::from_json(&valid_body()).unwrap();
        assert_eq!(book, Book::new("b1", "T", "A", "G", 2020, 3));
    }

    #[test]
    fn from_json_ignores_unknown_fields() {
        let mut body = valid_body();
        body["shelf"] = json!("east wing");
        let book = Book::from_json(&body).unwrap();
        let out = serde_json::to_value(&book).unwrap();
        assert!(out.get("shelf").is_none());
    }

    #[test]
    fn from_json_numeric_id_becomes_string() {
        let mut body = valid_body();
        body["book_id"] = json!(12);
        let book = Book::from_json(&body).unwrap();
        assert_eq!(book.book_id.as_str(), "12");
    }

    #[test]
    fn from_json_rejects_string_year() {
        let mut body = valid_body();
        body["year"] = json!("2020");
        let err = Book::from_json(&body).unwrap_err();
        assert_eq!(err, ValidationError::InvalidBook { field: BookField::Year });
    }

    #[test]
    fn from_json_rejects_missing_author() {
        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("author");
        let err = Book::from_json(&body).unwrap_err();
        assert_eq!(err.field(), Some(BookField::Author));
    }

    #[test]
    fn from_json_rejects_empty_title() {
        let mut body = valid_body();
        body["title"] = json!("");
        assert!(Book::from_json(&body).is_err());
    }

    #[test]
    fn from_json_rejects_fractional_copies() {
        let mut body = valid_body();
        body["copies"] = json!(1.5);
        assert!(Book::from_json(&body).is_err());
    }

    #[test]
    fn from_json_accepts_zero_copies() {
        let mut body = valid_body();
        body["copies"] = json!(0);
        assert_eq!(Book::from_json(&body).unwrap().copies, 0);
    }

    #[test]
    fn from_json_rejects_non_object() {
        let err = Book::from_json(&json!([1, 2])).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn serialized_field_order() {
        let book = Book::new("b1", "T", "A", "G", 2020, 3);
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(
            json,
            r#"{"book_id":"b1","title":"T","author":"A","genre":"G","year":2020,"copies":3}"#
        );
    }

    #[test]
    fn apply_overwrites_selectively() {
        let mut book = Book::new("b1", "T", "A", "G", 2020, 3);
        let patch = BookPatch {
            title: Some(String::new()),
            author: Some("New Author".into()),
            copies: Some(0),
            ..BookPatch::default()
        };
        book.apply(&patch);
        assert_eq!(book.title, "T");
        assert_eq!(book.author, "New Author");
        assert_eq!(book.genre, "G");
        assert_eq!(book.year, 2020);
        assert_eq!(book.copies, 0);
    }

    #[test]
    fn field_names() {
        assert_eq!(BookField::Copies.as_str(), "copies");
        assert_eq!(BookField::Copies.label(), "Copies");
        assert_eq!(BookField::BookId.to_string(), "book_id");
    }
}
