use futures::Stream;
use std::convert::Infallible;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use warp::hyper::body::Bytes;

/// A single-chunk response body that signals once hyper has taken the chunk.
/// With a known length hyper drops the stream right after writing it instead
/// of polling for the end, so the signal is sent on drop as well. Dropping it
/// before the chunk was taken drops the sender instead.
pub struct CommitOnDrain {
    body: Option<Bytes>,
    delivered: Option<oneshot::Sender<()>>,
}

impl CommitOnDrain {
    pub fn new(body: impl Into<Bytes>, delivered: oneshot::Sender<()>) -> CommitOnDrain {
        CommitOnDrain {
            body: Some(body.into()),
            delivered: Some(delivered),
        }
    }

    fn commit(&mut self) {
        if let Some(delivered) = self.delivered.take() {
            // The job may already be gone if the server is shutting down.
            let _ = delivered.send(());
        }
    }
}

impl Stream for CommitOnDrain {
    type Item = Result<Bytes, Infallible>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(body) = self.body.take() {
            return Poll::Ready(Some(Ok(body)));
        }

        self.commit();
        Poll::Ready(None)
    }
}

impl Drop for CommitOnDrain {
    fn drop(&mut self) {
        if self.body.is_none() {
            self.commit();
        }
    }
}
