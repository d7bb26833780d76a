//! Composer: owns the draft and derives the preview from it
//!
//! State changes arrive as [`ComposerMessage`]s through [`Composer::update`],
//! which dispatches to the typed helpers. Each handler replaces the draft
//! with a new record; the preview is recomputed from scratch by
//! [`Composer::render`].
//!
//! Avatar loading is split in two: [`Composer::begin_avatar_request`] hands
//! out a ticket, and [`Composer::finish_avatar_request`] applies the decoded
//! result later. Only the most recent ticket may change the draft, so a slow
//! decode of an older file never overwrites a newer choice.

use std::path::PathBuf;
use std::sync::Arc;

use crate::model::{AssetCatalog, AvatarError, AvatarImage, Badge, DraftField, PostDraft};
use crate::view::preview::{Placeholders, PreviewView};

/// Sequence number of an avatar request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AvatarTicket(pub u64);

/// What happened to a finished avatar request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarUpdate {
    /// The decoded image replaced the avatar
    Applied,
    /// A newer request was issued after this one; the result was dropped
    Superseded,
}

/// A state change for the composer
#[derive(Debug)]
pub enum ComposerMessage {
    UpdateField(DraftField, String),
    SelectBadge(Badge),
    AvatarLoaded {
        ticket: AvatarTicket,
        result: Result<AvatarImage, AvatarError>,
    },
}

pub struct Composer {
    draft: PostDraft,
    assets: AssetCatalog,
    placeholders: Placeholders,
    default_avatar: Option<Arc<AvatarImage>>,
    next_ticket: u64,
    /// Latest outstanding avatar request and the file it is for
    pending_avatar: Option<(AvatarTicket, PathBuf)>,
}

impl Composer {
    pub fn new(assets: AssetCatalog, placeholders: Placeholders) -> Self {
        Self {
            draft: PostDraft::new(),
            assets,
            placeholders,
            default_avatar: None,
            next_ticket: 0,
            pending_avatar: None,
        }
    }

    /// Use a decoded image as the default avatar placeholder
    pub fn with_default_avatar(mut self, image: Option<AvatarImage>) -> Self {
        self.default_avatar = image.map(Arc::new);
        self
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn assets(&self) -> &AssetCatalog {
        &self.assets
    }

    /// File of the avatar request still in flight, if any
    pub fn pending_avatar(&self) -> Option<&PathBuf> {
        self.pending_avatar.as_ref().map(|(_, path)| path)
    }

    /// Apply one message. Only `AvatarLoaded` can fail.
    pub fn update(
        &mut self,
        message: ComposerMessage,
    ) -> Result<Option<AvatarUpdate>, AvatarError> {
        match message {
            ComposerMessage::UpdateField(field, value) => {
                self.update_field(field, value);
                Ok(None)
            }
            ComposerMessage::SelectBadge(badge) => {
                self.select_badge(badge);
                Ok(None)
            }
            ComposerMessage::AvatarLoaded { ticket, result } => {
                self.finish_avatar_request(ticket, result).map(Some)
            }
        }
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        tracing::trace!(?field, len = value.len(), "update field");
        self.draft = self.draft.with_field(field, value);
    }

    /// Select a badge. Selecting the active badge again keeps it selected.
    pub fn select_badge(&mut self, badge: Badge) {
        tracing::debug!(badge = badge.value(), "select badge");
        self.draft = self.draft.with_badge(badge);
    }

    /// Register a new avatar request, superseding any outstanding one
    pub fn begin_avatar_request(&mut self, path: impl Into<PathBuf>) -> AvatarTicket {
        self.next_ticket += 1;
        let ticket = AvatarTicket(self.next_ticket);
        let path = path.into();
        if let Some((old, old_path)) = &self.pending_avatar {
            tracing::debug!(
                "Avatar request {:?} for {} superseded by {:?}",
                old,
                old_path.display(),
                ticket
            );
        }
        self.pending_avatar = Some((ticket, path));
        ticket
    }

    /// Apply the outcome of an avatar request
    ///
    /// On failure the previous avatar (or its absence) is kept and the error
    /// is returned. Results for superseded tickets are dropped, whether they
    /// succeeded or not.
    pub fn finish_avatar_request(
        &mut self,
        ticket: AvatarTicket,
        result: Result<AvatarImage, AvatarError>,
    ) -> Result<AvatarUpdate, AvatarError> {
        match &self.pending_avatar {
            Some((latest, _)) if *latest == ticket => {}
            _ => {
                tracing::debug!("Dropping stale avatar result {:?}", ticket);
                return Ok(AvatarUpdate::Superseded);
            }
        }
        self.pending_avatar = None;

        let image = result?;
        tracing::info!(
            "Avatar set from {} ({})",
            image.source().display(),
            image.mime_type()
        );
        self.draft = self.draft.with_avatar(Arc::new(image));
        Ok(AvatarUpdate::Applied)
    }

    /// Derive the preview from the current draft
    pub fn render(&self) -> PreviewView {
        PreviewView::from_draft(
            &self.draft,
            &self.assets,
            &self.placeholders,
            self.default_avatar.as_ref(),
        )
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(AssetCatalog::default(), Placeholders::default())
    }
}
