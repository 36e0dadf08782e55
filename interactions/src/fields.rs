use model::interaction::ModalSubmitComponent;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Values(Vec<String>),
}

/// A submitted modal, flattened to its input fields by custom id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSubmission {
    pub fields: HashMap<String, FieldValue>,
    /// The data half of the modal's custom id.
    pub data: String,
}

impl ModalSubmission {
    pub(crate) fn new(components: &[ModalSubmitComponent], data: &str) -> ModalSubmission {
        let mut fields = HashMap::new();
        flatten(components, &mut fields);

        ModalSubmission {
            fields,
            data: data.to_owned(),
        }
    }

    pub fn get(&self, custom_id: &str) -> Option<&FieldValue> {
        self.fields.get(custom_id)
    }

    pub fn text(&self, custom_id: &str) -> Option<&str> {
        match self.get(custom_id)? {
            FieldValue::Text(text) => Some(text),
            FieldValue::Values(_) => None,
        }
    }

    pub fn values(&self, custom_id: &str) -> Option<&[String]> {
        match self.get(custom_id)? {
            FieldValue::Values(values) => Some(values),
            FieldValue::Text(_) => None,
        }
    }
}

fn flatten(components: &[ModalSubmitComponent], fields: &mut HashMap<String, FieldValue>) {
    for component in components {
        match component {
            ModalSubmitComponent::ActionRow(row) => flatten(&row.components, fields),
            ModalSubmitComponent::Label(label) => {
                flatten(std::slice::from_ref(&*label.component), fields)
            }
            ModalSubmitComponent::TextInput(input) => {
                fields.insert(
                    input.custom_id.to_string(),
                    FieldValue::Text(input.value.to_string()),
                );
            }
            ModalSubmitComponent::Select(select) => {
                fields.insert(
                    select.custom_id.to_string(),
                    FieldValue::Values(select.values.iter().map(|v| v.to_string()).collect()),
                );
            }
            ModalSubmitComponent::TextDisplay(_) | ModalSubmitComponent::Other(_) => {}
        }
    }
}
