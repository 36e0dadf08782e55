use crate::http::{CommitOnDrain, Server};
use interactions::Handled;
use std::sync::Arc;
use tokio::sync::oneshot;
use warp::http::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use warp::hyper::body::Bytes;
use warp::hyper::Body;
use warp::reply::Response;
use warp::Rejection;

pub async fn handle(
    server: Arc<Server>,
    signature: Option<String>,
    timestamp: Option<String>,
    body: Bytes,
) -> Result<Response, Rejection> {
    let Handled { response, deferred } = server
        .gateway
        .handle(signature.as_deref(), timestamp.as_deref(), &body[..])
        .await;

    let length = response.body.len();

    // Deferred jobs start only once the acknowledgement has left; a streamed
    // body is the only point where hyper tells us that.
    let res_body = match deferred {
        Some(job) => {
            let (tx, rx) = oneshot::channel();
            server.tasks.spawn(job.run_after(rx));
            Body::wrap_stream(CommitOnDrain::new(response.body, tx))
        }
        None => Body::from(response.body),
    };

    let mut res = Response::new(res_body);
    *res.status_mut() = response.status;

    let headers = res.headers_mut();
    headers.insert(CONTENT_LENGTH, HeaderValue::from(length));
    if let Ok(content_type) = HeaderValue::from_str(&response.content_type) {
        headers.insert(CONTENT_TYPE, content_type);
    }

    Ok(res)
}
