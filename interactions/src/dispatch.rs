use crate::handler::{Command, Runner};
use crate::{Error, Reply};
use futures::future::BoxFuture;
use futures::FutureExt;
use model::interaction::{InteractionCallbackData, InteractionResponse};
use model::Snowflake;
use std::fmt;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{debug, error, warn};

pub const OWNER_ONLY_MESSAGE: &str = "This command is owner-only.";

/// The outcome of running a handler: a reply to send now, or an
/// acknowledgement to send now plus work to start once it has been sent.
#[derive(Debug)]
pub enum Dispatch {
    Immediate(Reply),
    Deferred {
        acknowledgement: Reply,
        job: DeferredJob,
    },
}

/// A deferred handler that has been bound to its interaction but not polled
/// yet. Dropping it without running discards the handler.
pub struct DeferredJob {
    label: String,
    future: BoxFuture<'static, anyhow::Result<()>>,
}

impl DeferredJob {
    pub(crate) fn new(label: String, future: BoxFuture<'static, anyhow::Result<()>>) -> DeferredJob {
        DeferredJob { label, future }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Failures have nowhere to go once the acknowledgement is out, so they
    /// are logged.
    pub async fn run(self) {
        debug!(handler = %self.label, "Running deferred handler");

        if let Err(e) = self.future.await {
            error!(handler = %self.label, error = ?e, "Deferred handler failed");
        }
    }

    /// Waits for the acknowledgement to be delivered before running. If the
    /// sender is dropped the response never went out, and the handler is
    /// discarded.
    pub async fn run_after(self, delivered: oneshot::Receiver<()>) {
        match delivered.await {
            Ok(()) => self.run().await,
            Err(_) => {
                warn!(handler = %self.label, "Acknowledgement was not delivered, discarding deferred handler")
            }
        }
    }
}

impl fmt::Debug for DeferredJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredJob")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

pub(crate) async fn dispatch<I, A>(
    runner: &Runner<I, A>,
    label: String,
    interaction: I,
    args: A,
) -> Result<Dispatch, Error>
where
    I: Send + 'static,
    A: Send + 'static,
{
    match runner {
        Runner::Immediate(callback) => callback(interaction, args)
            .await
            .map(Dispatch::Immediate)
            .map_err(|error| Error::Handler { label, error }),

        Runner::Deferred {
            acknowledgement,
            callback,
        } => {
            let callback = Arc::clone(callback);
            let future = async move { callback(interaction, args).await }.boxed();

            Ok(Dispatch::Deferred {
                acknowledgement: acknowledgement.reply(),
                job: DeferredJob::new(label, future),
            })
        }
    }
}

/// `None` when the user may run the command. Owner-only commands are denied
/// to everyone when no owner is configured.
pub(crate) fn authorize(
    command: &Command,
    user_id: Option<Snowflake>,
    owner_id: Option<Snowflake>,
) -> Option<Reply> {
    if !command.owner_only {
        return None;
    }

    match (user_id, owner_id) {
        (Some(user_id), Some(owner_id)) if user_id == owner_id => None,
        _ => {
            debug!(command = %command.name, user = ?user_id, "Denied owner-only command");

            let data = InteractionCallbackData::new()
                .content(OWNER_ONLY_MESSAGE)
                .ephemeral();
            Some(Reply::new(
                InteractionResponse::new_channel_message_with_source(data),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::tests::base;
    use crate::interaction::InteractionKind;
    use crate::{Acknowledgement, InteractionBase};
    use model::interaction::{ApplicationCommandType, InteractionResponseType};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn command_base() -> InteractionBase {
        base(InteractionKind::Command(ApplicationCommandType::ChatInput))
    }

    #[tokio::test]
    async fn test_immediate() {
        let runner = Runner::immediate(|i: InteractionBase, name: &'static str| async move {
            i.reply(format!("hello {}", name)).map_err(anyhow::Error::from)
        });

        let dispatch = dispatch(&runner, "greet".to_owned(), command_base(), "bob")
            .await
            .unwrap();

        match dispatch {
            Dispatch::Immediate(reply) => assert_eq!(
                reply.response().response_type(),
                InteractionResponseType::ChannelMessageWithSource
            ),
            other => panic!("expected an immediate reply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_immediate_failure_is_labelled() {
        let runner = Runner::immediate(|i: InteractionBase, _: ()| async move {
            i.defer_update().map_err(anyhow::Error::from)
        });

        let err = dispatch(&runner, "command:broken".to_owned(), command_base(), ())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("command:broken"));
        assert!(err.to_string().contains("CommandInteractionCannotDeferUpdate"));
    }

    #[tokio::test]
    async fn test_deferred_does_not_start_until_run() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let runner = Runner::deferred_ephemeral(move |_: InteractionBase, _: ()| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, anyhow::Error>(())
            }
        });
        assert_eq!(
            runner.acknowledgement(),
            Some(Acknowledgement::Reply { ephemeral: true })
        );

        let (acknowledgement, job) =
            match dispatch(&runner, "slow".to_owned(), command_base(), ()).await.unwrap() {
                Dispatch::Deferred { acknowledgement, job } => (acknowledgement, job),
                other => panic!("expected a deferred dispatch, got {:?}", other),
            };

        assert_eq!(
            acknowledgement.response().response_type(),
            InteractionResponseType::DeferredChannelMessageWithSource
        );
        assert_eq!(job.label(), "slow");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(job.run_after(rx));
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        tx.send(()).unwrap();
        handle.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_undelivered_job_is_discarded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let job = DeferredJob::new(
            "dropped".to_owned(),
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, anyhow::Error>(())
            }
            .boxed(),
        );

        let (tx, rx) = oneshot::channel::<()>();
        drop(tx);
        job.run_after(rx).await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_owner_gate() {
        let open = Command::new(
            "open",
            "anyone",
            Runner::immediate(|i: crate::CommandInteraction, _| async move {
                i.reply("ok").map_err(anyhow::Error::from)
            }),
        );
        let locked = open.clone().owner_only();

        let owner = Some(Snowflake(1));
        let stranger = Some(Snowflake(2));

        assert!(authorize(&open, stranger, None).is_none());
        assert!(authorize(&locked, owner, owner).is_none());

        for (user, configured) in [(stranger, owner), (None, owner), (owner, None)] {
            let denial = authorize(&locked, user, configured).expect("should be denied");
            let json = serde_json::to_value(denial.response()).unwrap();

            assert_eq!(json["type"], 4);
            assert_eq!(json["data"]["content"], OWNER_ONLY_MESSAGE);
            assert_eq!(json["data"]["flags"], 64);
        }
    }
}
