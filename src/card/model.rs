//! Card data model and the small value types the widget is driven by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FlashcardError;

/// Host-owned card content. The widget only ever reads named fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardModel(Map<String, Value>);

impl CardModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object. Anything other than an object is a parse error.
    pub fn from_json(raw: &str) -> Result<Self, FlashcardError> {
        serde_json::from_str::<Map<String, Value>>(raw)
            .map(Self)
            .map_err(|source| FlashcardError::Parse { source })
    }

    /// Builder-style insert, mostly for hosts assembling a model in code.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Textual form of a field.
    ///
    /// Strings are returned as-is, numbers and booleans as their JSON text.
    /// Null, arrays and objects have no textual content.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}

impl From<Map<String, Value>> for CardModel {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// The content fields a selector may name directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentField {
    Name,
    Image,
    Description,
}

impl ContentField {
    /// Lookup order used by [`FaceSelector::Auto`].
    pub const AUTO_ORDER: [ContentField; 3] =
        [ContentField::Image, ContentField::Name, ContentField::Description];

    pub fn key(self) -> &'static str {
        match self {
            ContentField::Name => "name",
            ContentField::Image => "image",
            ContentField::Description => "description",
        }
    }
}

/// Chooses what a face shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceSelector {
    /// A named content field of the model.
    Field(ContentField),
    /// Whichever content field is present.
    Auto,
    /// Any other string: a model key if one matches, otherwise the content itself.
    Literal(String),
}

impl FaceSelector {
    pub const AUTO: &'static str = "auto";

    pub fn parse(raw: &str) -> Self {
        match raw {
            "name" => FaceSelector::Field(ContentField::Name),
            "image" => FaceSelector::Field(ContentField::Image),
            "description" => FaceSelector::Field(ContentField::Description),
            Self::AUTO => FaceSelector::Auto,
            other => FaceSelector::Literal(other.to_string()),
        }
    }

    /// Resolve the content value this selector points at.
    pub fn resolve(&self, model: &CardModel) -> Option<String> {
        match self {
            FaceSelector::Field(field) => model.text(field.key()),
            FaceSelector::Auto => ContentField::AUTO_ORDER
                .iter()
                .filter_map(|field| model.text(field.key()))
                .find(|value| !value.is_empty()),
            FaceSelector::Literal(literal) => {
                if model.contains(literal) {
                    model.text(literal)
                } else {
                    Some(literal.clone())
                }
            }
        }
    }
}

/// Which physical side of the card is toward the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Up,
    Down,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
        }
    }

    /// The side visible in this orientation.
    pub fn visible_side(self) -> Side {
        match self {
            Orientation::Up => Side::Front,
            Orientation::Down => Side::Back,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Up => "up",
            Orientation::Down => "down",
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Orientation::Up),
            "down" => Ok(Orientation::Down),
            other => Err(format!("expected \"up\" or \"down\", got \"{other}\"")),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two faces of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Front => f.write_str("front"),
            Side::Back => f.write_str("back"),
        }
    }
}
