//! Declared attributes: the string-valued source of truth for card state.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The attributes the widget observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeName {
    Front,
    Back,
    Face,
    Hidden,
    Flippable,
    Value,
}

impl AttributeName {
    pub const OBSERVED: [AttributeName; 6] = [
        AttributeName::Front,
        AttributeName::Back,
        AttributeName::Value,
        AttributeName::Face,
        AttributeName::Hidden,
        AttributeName::Flippable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeName::Front => "front",
            AttributeName::Back => "back",
            AttributeName::Face => "face",
            AttributeName::Hidden => "hidden",
            AttributeName::Flippable => "flippable",
            AttributeName::Value => "value",
        }
    }
}

impl FromStr for AttributeName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeName::OBSERVED
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn bool_attribute(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub fn parse_bool_attribute(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Raw attribute storage, including names the widget does not observe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    values: BTreeMap<String, String>,
}

impl AttributeMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Store a value, returning the previous one.
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        self.values.insert(name.to_string(), value.to_string())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Put back a previous value (or absence) after a rejected write.
    pub fn restore(&mut self, name: &str, previous: Option<String>) {
        match previous {
            Some(value) => {
                self.values.insert(name.to_string(), value);
            }
            None => {
                self.values.remove(name);
            }
        }
    }
}
