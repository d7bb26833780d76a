//! Background avatar loading
//!
//! Each request runs as a tokio task. Results come back over an unbounded
//! channel tagged with the ticket of the request that produced them; the UI
//! loop drains the channel between frames.

use std::path::PathBuf;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use super::composer::AvatarTicket;
use crate::model::avatar::{load_avatar, AvatarError, AvatarGeometry, AvatarImage};

/// A finished avatar request
#[derive(Debug)]
pub struct AvatarEvent {
    pub ticket: AvatarTicket,
    pub result: Result<AvatarImage, AvatarError>,
}

pub struct AvatarLoader {
    handle: Handle,
    geometry: AvatarGeometry,
    tx: UnboundedSender<AvatarEvent>,
    rx: UnboundedReceiver<AvatarEvent>,
}

impl AvatarLoader {
    pub fn new(handle: Handle, geometry: AvatarGeometry) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            geometry,
            tx,
            rx,
        }
    }

    /// Start reading and decoding `path` in the background
    pub fn spawn(&self, ticket: AvatarTicket, path: PathBuf) {
        let tx = self.tx.clone();
        let geometry = self.geometry;
        tracing::debug!("Loading avatar {:?} from {}", ticket, path.display());
        self.handle.spawn(async move {
            let result = load_avatar(path, geometry).await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(AvatarEvent { ticket, result });
        });
    }

    /// Next finished request, if one is ready
    pub fn try_next(&mut self) -> Option<AvatarEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next finished request
    pub async fn next(&mut self) -> Option<AvatarEvent> {
        self.rx.recv().await
    }
}
