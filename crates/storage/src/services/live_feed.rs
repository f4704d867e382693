use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::Database;
use crate::dto::participant::ParticipantResponse;
use crate::error::Result;
use crate::repository::participant::ParticipantRepository;
use crate::services::ranking::assign_ranks;

/// Notification channel raised by the participants table trigger.
const CHANNEL: &str = "participants_changed";

/// Live ranked view of the participants table. Every change notification
/// produces a full ranked snapshot; receivers always observe the latest
/// snapshot whole, never a partial merge. Dropping the feed cancels the
/// refresh task.
pub struct ParticipantFeed {
    rx: watch::Receiver<Vec<ParticipantResponse>>,
    task: JoinHandle<()>,
}

impl ParticipantFeed {
    pub fn receiver(&self) -> watch::Receiver<Vec<ParticipantResponse>> {
        self.rx.clone()
    }

    pub fn latest(&self) -> Vec<ParticipantResponse> {
        self.rx.borrow().clone()
    }

    pub fn unsubscribe(self) {}
}

impl Drop for ParticipantFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Opens the live query: takes an initial snapshot, then re-queries on
/// every store change notification. Refresh failures keep the previous
/// snapshot and are logged; the stream itself stays open until the feed
/// is dropped.
pub async fn subscribe_to_participants(db: &Database) -> Result<ParticipantFeed> {
    let initial = ranked_snapshot(db.pool()).await?;

    let mut listener = PgListener::connect_with(db.pool()).await?;
    listener.listen(CHANNEL).await?;

    let (tx, rx) = watch::channel(initial);
    let pool = db.pool().clone();

    let task = tokio::spawn(async move {
        loop {
            if let Err(err) = listener.recv().await {
                tracing::error!("participant feed notification error: {err}");
                tokio::time::sleep(Duration::from_secs(1)).await;
                continue;
            }

            match ranked_snapshot(&pool).await {
                Ok(snapshot) => {
                    if tx.send(snapshot).is_err() {
                        break;
                    }
                }
                Err(err) => tracing::error!("refreshing participant feed failed: {err}"),
            }
        }
    });

    Ok(ParticipantFeed { rx, task })
}

async fn ranked_snapshot(pool: &PgPool) -> Result<Vec<ParticipantResponse>> {
    let participants = ParticipantRepository::new(pool).list(None).await?;
    Ok(assign_ranks(participants))
}
