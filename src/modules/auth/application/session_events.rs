use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, trace, warn};
use uuid::Uuid;

const DEFAULT_CAPACITY: usize = 64;

/// Session state changes, published after they take effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn { admin_id: Uuid, email: String },
    SignedOut { admin_id: Uuid, email: String },
}

/// Broadcasts session changes to every live subscription.
#[derive(Debug, Clone)]
pub struct SessionEvents {
    sender: broadcast::Sender<SessionEvent>,
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl SessionEvents {
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: SessionEvent) {
        trace!(event = ?event, "Publishing session event");
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }

    /// The subscription stays registered until it is dropped.
    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[derive(Debug)]
pub struct SessionSubscription {
    receiver: broadcast::Receiver<SessionEvent>,
}

impl SessionSubscription {
    /// Next event, or `None` once every publisher is gone.
    pub async fn next(&mut self) -> Option<SessionEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Session subscriber fell behind");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

/// Logs every session change until the last publisher is dropped.
pub fn spawn_session_logger(events: &SessionEvents) -> tokio::task::JoinHandle<()> {
    let mut subscription = events.subscribe();

    tokio::spawn(async move {
        while let Some(event) = subscription.next().await {
            match event {
                SessionEvent::SignedIn { admin_id, email } => {
                    info!(%admin_id, %email, "Admin signed in");
                }
                SessionEvent::SignedOut { admin_id, email } => {
                    info!(%admin_id, %email, "Admin signed out");
                }
            }
        }
        trace!("Session event stream closed");
    })
}
