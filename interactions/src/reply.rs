use model::channel::message::PartialAttachment;
use model::interaction::{InteractionCallbackData, InteractionResponse};

/// A file uploaded alongside a message. Sent as the `files[n]` multipart part
/// unless `key` names another part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub data: Vec<u8>,
    pub key: Option<String>,
    pub description: Option<String>,
}

impl File {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> File {
        File {
            name: name.into(),
            data: data.into(),
            key: None,
            description: None,
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> File {
        self.key = Some(key.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> File {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn part_name(&self, index: usize) -> String {
        self.key
            .clone()
            .unwrap_or_else(|| format!("files[{}]", index))
    }
}

/// Message content plus any files to upload with it.
#[derive(Debug, Clone, Default)]
pub struct MessagePayload {
    pub data: InteractionCallbackData,
    pub files: Vec<File>,
}

impl MessagePayload {
    pub fn new(data: InteractionCallbackData) -> MessagePayload {
        MessagePayload {
            data,
            files: Vec::new(),
        }
    }

    pub fn file(mut self, file: File) -> MessagePayload {
        self.files.push(file);
        self
    }

    /// Fills in attachment metadata for the uploaded files when the caller
    /// didn't provide any.
    pub(crate) fn describe_files(data: &mut InteractionCallbackData, files: &[File]) {
        if !data.attachments.is_empty() {
            return;
        }

        data.attachments = files
            .iter()
            .enumerate()
            .map(|(i, file)| PartialAttachment {
                id: i as u64,
                filename: file.name.clone(),
                description: file.description.clone(),
            })
            .collect();
    }
}

impl From<InteractionCallbackData> for MessagePayload {
    fn from(data: InteractionCallbackData) -> Self {
        MessagePayload::new(data)
    }
}

impl From<&str> for MessagePayload {
    fn from(content: &str) -> Self {
        MessagePayload::new(InteractionCallbackData::from(content))
    }
}

impl From<String> for MessagePayload {
    fn from(content: String) -> Self {
        MessagePayload::new(InteractionCallbackData::from(content))
    }
}

/// What a handler answers the HTTP request with.
#[derive(Debug, Clone)]
pub struct Reply {
    response: InteractionResponse,
    files: Vec<File>,
}

impl Reply {
    pub(crate) fn new(response: InteractionResponse) -> Reply {
        Reply {
            response,
            files: Vec::new(),
        }
    }

    pub(crate) fn with_files(mut response: InteractionResponse, files: Vec<File>) -> Reply {
        if !files.is_empty() {
            if let Some(data) = response.message_data_mut() {
                MessagePayload::describe_files(data, &files);
            }
        }

        Reply { response, files }
    }

    pub fn pong() -> Reply {
        Reply::new(InteractionResponse::new_pong())
    }

    pub fn response(&self) -> &InteractionResponse {
        &self.response
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn into_parts(self) -> (InteractionResponse, Vec<File>) {
        (self.response, self.files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::interaction::InteractionResponseType;

    #[test]
    fn test_files_get_attachment_metadata() {
        let reply = Reply::with_files(
            InteractionResponse::new_channel_message_with_source("report".into()),
            vec![
                File::new("a.txt", "a"),
                File::new("b.png", vec![0u8, 1]).description("chart"),
            ],
        );

        let json = serde_json::to_value(reply.response()).unwrap();
        assert_eq!(
            json["data"]["attachments"],
            serde_json::json!([
                {"id": 0, "filename": "a.txt"},
                {"id": 1, "filename": "b.png", "description": "chart"}
            ])
        );
        assert_eq!(reply.files()[1].part_name(1), "files[1]");
    }

    #[test]
    fn test_explicit_part_key() {
        let file = File::new("a.txt", "a").key("custom");
        assert_eq!(file.part_name(0), "custom");
    }

    #[test]
    fn test_pong() {
        assert_eq!(
            Reply::pong().response().response_type(),
            InteractionResponseType::Pong
        );
    }
}
