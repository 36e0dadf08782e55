use crate::handler::Argument;
use crate::Error;
use model::interaction::{ApplicationCommandInteractionDataOption, ApplicationCommandOptionType};
use model::Snowflake;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    User(Snowflake),
    Channel(Snowflake),
    Role(Snowflake),
    Mentionable(Snowflake),
    Attachment(Snowflake),
}

impl ArgumentValue {
    /// Coerces a raw option value according to its wire type. Reference types
    /// stay as ids; the entities themselves are in the command's resolved
    /// data.
    pub fn coerce(kind: ApplicationCommandOptionType, value: &Value) -> Option<ArgumentValue> {
        use ApplicationCommandOptionType as T;

        Some(match kind {
            T::String => ArgumentValue::String(value.as_str()?.to_owned()),
            T::Integer => ArgumentValue::Integer(match value {
                Value::String(s) => s.parse().ok()?,
                _ => value.as_i64()?,
            }),
            T::Number => ArgumentValue::Number(value.as_f64()?),
            T::Boolean => ArgumentValue::Boolean(value.as_bool()?),
            T::User => ArgumentValue::User(Snowflake::from_value(value)?),
            T::Channel => ArgumentValue::Channel(Snowflake::from_value(value)?),
            T::Role => ArgumentValue::Role(Snowflake::from_value(value)?),
            T::Mentionable => ArgumentValue::Mentionable(Snowflake::from_value(value)?),
            T::Attachment => ArgumentValue::Attachment(Snowflake::from_value(value)?),
            T::SubCommand | T::SubCommandGroup => return None,
        })
    }

    pub fn as_snowflake(&self) -> Option<Snowflake> {
        match self {
            ArgumentValue::User(id)
            | ArgumentValue::Channel(id)
            | ArgumentValue::Role(id)
            | ArgumentValue::Mentionable(id)
            | ArgumentValue::Attachment(id) => Some(*id),
            _ => None,
        }
    }
}

/// Command arguments by name, already coerced to their declared types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    values: HashMap<String, ArgumentValue>,
}

impl Arguments {
    /// Skips subcommand markers, coerces every leaf option, then checks that
    /// each required argument arrived.
    pub(crate) fn normalize(
        options: &[ApplicationCommandInteractionDataOption],
        schema: &[Argument],
    ) -> Result<Arguments, Error> {
        let mut values = HashMap::with_capacity(options.len());

        for option in options {
            if option.r#type.is_structural() {
                continue;
            }

            if let Some(declared) = schema.iter().find(|a| a.name == option.name) {
                if declared.kind != option.r#type {
                    return Err(Error::ArgumentTypeMismatch {
                        name: option.name.clone(),
                        declared: declared.kind,
                        sent: option.r#type,
                    });
                }
            }

            let value = option
                .value
                .as_ref()
                .and_then(|value| ArgumentValue::coerce(option.r#type, value))
                .ok_or_else(|| Error::InvalidArgument(option.name.clone()))?;

            values.insert(option.name.to_string(), value);
        }

        if let Some(missing) = schema
            .iter()
            .find(|a| a.required && !values.contains_key(&*a.name))
        {
            return Err(Error::MissingArgument(missing.name.clone()));
        }

        Ok(Arguments { values })
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
        self.values.get(name)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            ArgumentValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            ArgumentValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Integers are accepted too, since both are JSON numbers.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            ArgumentValue::Number(n) => Some(*n),
            ArgumentValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            ArgumentValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn snowflake(&self, name: &str) -> Option<Snowflake> {
        self.get(name)?.as_snowflake()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(value: Value) -> Vec<ApplicationCommandInteractionDataOption> {
        serde_json::from_value(value).unwrap()
    }

    fn schema() -> Vec<Argument> {
        vec![
            Argument::new("text", "what to say", ApplicationCommandOptionType::String).required(),
            Argument::new("times", "how often", ApplicationCommandOptionType::Integer),
        ]
    }

    #[test]
    fn test_coerces_by_wire_type() {
        let options = options(json!([
            {"name": "text", "type": 3, "value": "hi"},
            {"name": "times", "type": 4, "value": 3},
            {"name": "ratio", "type": 10, "value": 0.5},
            {"name": "loud", "type": 5, "value": true},
            {"name": "who", "type": 6, "value": "80351110224678912"},
            {"name": "file", "type": 11, "value": "1100000000000000001"}
        ]));

        let args = Arguments::normalize(&options, &schema()).unwrap();

        assert_eq!(args.string("text"), Some("hi"));
        assert_eq!(args.integer("times"), Some(3));
        assert_eq!(args.number("times"), Some(3.0));
        assert_eq!(args.number("ratio"), Some(0.5));
        assert_eq!(args.boolean("loud"), Some(true));
        assert_eq!(args.snowflake("who"), Some(Snowflake(80351110224678912)));
        assert_eq!(
            args.get("file"),
            Some(&ArgumentValue::Attachment(Snowflake(1100000000000000001)))
        );
        assert_eq!(args.len(), 6);
    }

    #[test]
    fn test_skips_subcommands() {
        let options = options(json!([
            {"name": "text", "type": 3, "value": "hi"},
            {"name": "admin", "type": 1, "options": [{"name": "x", "type": 3, "value": "y"}]}
        ]));

        let args = Arguments::normalize(&options, &schema()).unwrap();
        assert_eq!(args.len(), 1);
        assert!(args.get("admin").is_none());
    }

    #[test]
    fn test_missing_required() {
        let options = options(json!([{"name": "times", "type": 4, "value": 2}]));

        assert!(matches!(
            Arguments::normalize(&options, &schema()),
            Err(Error::MissingArgument(name)) if &*name == "text"
        ));
    }

    #[test]
    fn test_invalid_values() {
        let bad_integer = options(json!([
            {"name": "text", "type": 3, "value": "hi"},
            {"name": "times", "type": 4, "value": "lots"}
        ]));
        assert!(matches!(
            Arguments::normalize(&bad_integer, &schema()),
            Err(Error::InvalidArgument(_))
        ));

        let mismatched = options(json!([{"name": "text", "type": 4, "value": 1}]));
        assert!(matches!(
            Arguments::normalize(&mismatched, &schema()),
            Err(Error::ArgumentTypeMismatch { .. })
        ));
    }
}
