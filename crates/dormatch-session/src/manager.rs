//! Async hand-off of a finalized assignment to the persistence
//! collaborator.
//!
//! The per-move path stays synchronous; the only suspension point of a
//! session is [`SessionManager::finalize`], which sends the export over
//! a channel and awaits the collaborator's acknowledgment before
//! reporting completion.

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use dormatch_core::{MoveEffect, MoveRejection, MoveRequest};

use crate::export::RoomExport;
use crate::session::SessionController;

/// Errors of the finalize hand-off.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The persistence collaborator's receiver is gone.
    #[error("persistence collaborator is no longer listening")]
    PersistenceClosed,

    /// The collaborator received the export but dropped the ack sender
    /// without responding.
    #[error("persistence collaborator never acknowledged the export")]
    AckDropped,
}

/// Events a session emits towards the persistence collaborator.
#[derive(Debug)]
pub enum SessionEvent {
    /// The operator saved: persist these rooms, then signal `ack`.
    Finalized {
        rooms: Vec<RoomExport>,
        ack: oneshot::Sender<()>,
    },
    /// The operator discarded the session; nothing to persist.
    Cancelled,
}

/// Pairs a [`SessionController`] with the event channel to the
/// persistence collaborator.
///
/// # Examples
///
/// ```
/// use dormatch_session::{SessionController, SessionEvent, SessionManager};
/// use dormatch_session::fixture::mock_partitions;
/// use tokio::sync::mpsc;
///
/// # let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
/// # rt.block_on(async {
/// let (sender, mut events) = mpsc::unbounded_channel();
/// let manager = SessionManager::new(SessionController::new(mock_partitions(1, 0)), sender);
///
/// // The collaborator acks every finalized export.
/// tokio::spawn(async move {
///     while let Some(event) = events.recv().await {
///         if let SessionEvent::Finalized { ack, .. } = event {
///             let _ = ack.send(());
///         }
///     }
/// });
///
/// let rooms = manager.finalize().await.unwrap();
/// assert_eq!(rooms.len(), 2);
/// # });
/// ```
#[derive(Debug)]
pub struct SessionManager {
    controller: SessionController,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl SessionManager {
    /// Wraps a controller with a channel to the persistence side.
    pub fn new(controller: SessionController, events: mpsc::UnboundedSender<SessionEvent>) -> Self {
        Self { controller, events }
    }

    /// Forwards a move request to the controller, unchanged.
    pub fn request_move(&mut self, request: MoveRequest) -> Result<MoveEffect, MoveRejection> {
        self.controller.request_move(request)
    }

    /// Read access to the underlying controller.
    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    /// Exports the assignment, hands it to the persistence collaborator
    /// and suspends until the network acknowledgment arrives.
    ///
    /// # Errors
    ///
    /// [`SessionError::PersistenceClosed`] if nobody listens on the
    /// channel, [`SessionError::AckDropped`] if the collaborator drops
    /// the ack without answering. The export is returned to the caller
    /// on success so it can also be rendered locally.
    pub async fn finalize(self) -> Result<Vec<RoomExport>, SessionError> {
        let rooms = self.controller.finalize();
        let (ack, acked) = oneshot::channel();
        self.events
            .send(SessionEvent::Finalized {
                rooms: rooms.clone(),
                ack,
            })
            .map_err(|_| SessionError::PersistenceClosed)?;
        acked.await.map_err(|_| SessionError::AckDropped)?;
        Ok(rooms)
    }

    /// Discards the session and notifies the collaborator.
    pub fn cancel(self) {
        if self.events.send(SessionEvent::Cancelled).is_err() {
            warn!("persistence collaborator gone before cancel notice");
        }
        self.controller.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::mock_partitions;

    fn manager_with_channel() -> (SessionManager, mpsc::UnboundedReceiver<SessionEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let controller = SessionController::new(mock_partitions(2, 5));
        (SessionManager::new(controller, sender), receiver)
    }

    #[tokio::test]
    async fn finalize_waits_for_ack_and_returns_export() {
        let (mut manager, mut events) = manager_with_channel();
        manager
            .request_move(MoveRequest::new("A-Room-1", 0, "A-Room-2", 0))
            .unwrap();

        let collaborator = tokio::spawn(async move {
            match events.recv().await {
                Some(SessionEvent::Finalized { rooms, ack }) => {
                    ack.send(()).unwrap();
                    rooms
                }
                other => panic!("expected finalize event, got {other:?}"),
            }
        });

        let rooms = manager.finalize().await.unwrap();
        let persisted = collaborator.await.unwrap();
        assert_eq!(rooms, persisted);
        assert_eq!(rooms.len(), 4);
    }

    #[tokio::test]
    async fn finalize_fails_when_collaborator_is_gone() {
        let (manager, events) = manager_with_channel();
        drop(events);
        assert!(matches!(
            manager.finalize().await,
            Err(SessionError::PersistenceClosed)
        ));
    }

    #[tokio::test]
    async fn finalize_fails_when_ack_is_dropped() {
        let (manager, mut events) = manager_with_channel();
        tokio::spawn(async move {
            if let Some(SessionEvent::Finalized { ack, .. }) = events.recv().await {
                drop(ack);
            }
        });
        assert!(matches!(
            manager.finalize().await,
            Err(SessionError::AckDropped)
        ));
    }

    #[tokio::test]
    async fn cancel_emits_cancelled_event() {
        let (manager, mut events) = manager_with_channel();
        manager.cancel();
        assert!(matches!(events.recv().await, Some(SessionEvent::Cancelled)));
    }
}
