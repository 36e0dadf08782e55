use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplicationCommandOptionChoice {
    pub name: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<HashMap<Box<str>, Box<str>>>,
    pub value: ChoiceValue,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ChoiceValue {
    Integer(i64),
    Number(f64),
    String(Box<str>),
}

impl ApplicationCommandOptionChoice {
    pub fn new(name: impl Into<Box<str>>, value: impl Into<ChoiceValue>) -> Self {
        ApplicationCommandOptionChoice {
            name: name.into(),
            name_localizations: None,
            value: value.into(),
        }
    }
}

impl From<&str> for ChoiceValue {
    fn from(s: &str) -> Self {
        ChoiceValue::String(Box::from(s))
    }
}

impl From<String> for ChoiceValue {
    fn from(s: String) -> Self {
        ChoiceValue::String(s.into_boxed_str())
    }
}

impl From<i64> for ChoiceValue {
    fn from(i: i64) -> Self {
        ChoiceValue::Integer(i)
    }
}

impl From<f64> for ChoiceValue {
    fn from(f: f64) -> Self {
        ChoiceValue::Number(f)
    }
}
