use crate::reply::{File, Reply};
use crate::Error;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;

pub const JSON: &str = "application/json";
pub const TEXT: &str = "text/plain; charset=utf-8";

/// A fully encoded HTTP response, ready for the host to write out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Response {
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> Result<Response, Error> {
        Ok(Response {
            status,
            content_type: JSON.to_owned(),
            body: serde_json::to_vec(value).map_err(Error::EncodeError)?,
        })
    }

    pub fn text(status: StatusCode, text: &str) -> Response {
        Response {
            status,
            content_type: TEXT.to_owned(),
            body: text.as_bytes().to_vec(),
        }
    }

    /// Signature failures answer in plain text, everything else as
    /// `{"error": "..."}`.
    pub fn error(error: &Error) -> Response {
        let status = error.status_code();

        if status == StatusCode::UNAUTHORIZED {
            return Response::text(status, &error.to_string());
        }

        Response {
            status,
            content_type: JSON.to_owned(),
            body: json!({ "error": error }).to_string().into_bytes(),
        }
    }

    /// JSON when there are no files, otherwise `multipart/form-data` with the
    /// response in a `payload_json` part.
    pub fn from_reply(reply: Reply) -> Result<Response, Error> {
        let (response, files) = reply.into_parts();

        if files.is_empty() {
            return Response::json(StatusCode::OK, &response);
        }

        let payload = serde_json::to_vec(&response).map_err(Error::EncodeError)?;
        let boundary = uuid::Uuid::new_v4().simple().to_string();

        Ok(Response {
            status: StatusCode::OK,
            content_type: format!("multipart/form-data; boundary={}", boundary),
            body: multipart(&boundary, &payload, &files),
        })
    }

    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

fn multipart(boundary: &str, payload: &[u8], files: &[File]) -> Vec<u8> {
    let mut body = Vec::with_capacity(
        payload.len() + files.iter().map(|f| f.data.len() + 128).sum::<usize>() + 256,
    );

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"payload_json\"\r\n");
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", JSON).as_bytes());
    body.extend_from_slice(payload);
    body.extend_from_slice(b"\r\n");

    for (i, file) in files.iter().enumerate() {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                quote(&file.part_name(i)),
                quote(&file.name)
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(&file.data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}

// Header parameter values can't carry raw quotes or line breaks.
fn quote(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
