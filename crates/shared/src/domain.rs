use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Identifier carried by a card's `data-id` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Ordered,
    Preparing,
    Served,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Ordered, Column::Preparing, Column::Served];

    /// Value used for the `data-area` attribute and the wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            Column::Ordered => "ordered",
            Column::Preparing => "preparing",
            Column::Served => "served",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Column::Ordered => "Ordered",
            Column::Preparing => "Preparing",
            Column::Served => "Served",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ordered" => Ok(Column::Ordered),
            "preparing" => Ok(Column::Preparing),
            "served" => Ok(Column::Served),
            other => Err(BoardError::UnknownColumn(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub title: String,
    pub table: String,
    pub column: Column,
    pub created: DateTime<Utc>,
}

/// Fields supplied by a form before an id and timestamp are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub title: String,
    pub table: String,
    pub column: Column,
}
