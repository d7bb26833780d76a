//! Application runtime
//!
//! [`App`] ties the pieces together: it owns the [`Composer`], the form
//! control state and the avatar loader, turns key events into composer
//! messages, and draws the screen.

pub mod composer;

#[cfg(feature = "runtime")]
pub mod avatar_loader;
#[cfg(feature = "runtime")]
mod render;

pub use composer::{AvatarTicket, AvatarUpdate, Composer, ComposerMessage};

#[cfg(feature = "runtime")]
pub use runtime::App;

#[cfg(feature = "runtime")]
mod runtime {
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use anyhow::Result;
    use crossterm::event::{self, Event, KeyEvent};
    use ratatui::DefaultTerminal;
    use tokio::runtime::Handle;

    use super::avatar_loader::{AvatarEvent, AvatarLoader};
    use super::composer::{AvatarUpdate, Composer};
    use crate::config::Config;
    use crate::input::keybindings::action_for_key;
    use crate::input::Action;
    use crate::model::avatar::accepts_image_path;
    use crate::model::{AssetCatalog, AvatarGeometry, Badge};
    use crate::view::form::{Focus, FormState};
    use crate::view::theme::Theme;
    use crate::view::ui::StatusMessage;

    /// How long the event loop waits for input before checking background work
    const POLL_INTERVAL: Duration = Duration::from_millis(50);

    pub struct App {
        pub(super) composer: Composer,
        pub(super) form: FormState,
        pub(super) theme: Theme,
        pub(super) geometry: AvatarGeometry,
        pub(super) status: Option<StatusMessage>,
        loader: AvatarLoader,
        should_quit: bool,
    }

    impl App {
        pub fn new(config: &Config, theme: Theme, handle: Handle) -> Self {
            let geometry = config.avatar.geometry();
            let assets = config
                .assets_dir
                .clone()
                .map(AssetCatalog::new)
                .unwrap_or_default();
            let default_avatar = assets.load_default_avatar(geometry);
            let composer = Composer::new(assets, config.placeholders.clone())
                .with_default_avatar(default_avatar);

            Self {
                composer,
                form: FormState::new(),
                theme,
                geometry,
                status: None,
                loader: AvatarLoader::new(handle, geometry),
                should_quit: false,
            }
        }

        pub fn composer(&self) -> &Composer {
            &self.composer
        }

        pub fn form(&self) -> &FormState {
            &self.form
        }

        pub fn status(&self) -> Option<&StatusMessage> {
            self.status.as_ref()
        }

        pub fn should_quit(&self) -> bool {
            self.should_quit
        }

        /// Start loading a photo, superseding any load still in flight
        pub fn choose_avatar(&mut self, path: impl Into<PathBuf>) {
            let path = path.into();
            let ticket = self.composer.begin_avatar_request(&path);
            self.form.photo.set_value(path.to_string_lossy());
            self.loader.spawn(ticket, path);
        }

        /// Run the event loop until the user quits
        pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
            while !self.should_quit {
                terminal.draw(|frame| self.render(frame))?;

                if event::poll(POLL_INTERVAL)? {
                    if let Event::Key(key) = event::read()? {
                        self.handle_key(key);
                    }
                }
                self.process_async_messages();
            }
            Ok(())
        }

        /// Apply any avatar loads that have finished
        ///
        /// Returns true if at least one result arrived.
        pub fn process_async_messages(&mut self) -> bool {
            let mut received = false;
            while let Some(event) = self.loader.try_next() {
                self.apply_avatar_event(event);
                received = true;
            }
            received
        }

        fn apply_avatar_event(&mut self, event: AvatarEvent) {
            match self.composer.finish_avatar_request(event.ticket, event.result) {
                Ok(AvatarUpdate::Applied) => {
                    let name = self
                        .composer
                        .draft()
                        .avatar
                        .as_ref()
                        .and_then(|a| a.source().file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    self.status = Some(StatusMessage::info(format!("Photo loaded: {}", name)));
                }
                Ok(AvatarUpdate::Superseded) => {}
                Err(e) => {
                    tracing::warn!("Avatar load failed: {}", e);
                    self.status = Some(StatusMessage::error(e.to_string()));
                }
            }
        }

        pub fn handle_key(&mut self, key: KeyEvent) {
            if let Some(action) = action_for_key(&key, self.form.focus.key_context()) {
                self.dispatch(action);
            }
        }

        pub fn dispatch(&mut self, action: Action) {
            tracing::trace!(?action, focus = ?self.form.focus, "dispatch");
            match action {
                Action::Quit => self.should_quit = true,
                Action::FocusNext => self.set_focus(self.form.focus.next()),
                Action::FocusPrev => self.set_focus(self.form.focus.prev()),
                Action::Submit => self.submit(),
                Action::BadgeHighlightPrev => self.form.move_badge_highlight(-1),
                Action::BadgeHighlightNext => self.form.move_badge_highlight(1),
                Action::SelectBadgeAt(index) => {
                    if let Some(badge) = Badge::ALL.get(index) {
                        self.form.badge_highlight = index;
                        self.composer.select_badge(*badge);
                    }
                }
                edit => self.edit_focused(edit),
            }
        }

        fn set_focus(&mut self, focus: Focus) {
            self.form.focus = focus;
            if focus == Focus::Badge {
                self.form.badge_highlight = self.composer.draft().badge.index();
            }
        }

        fn submit(&mut self) {
            match self.form.focus {
                Focus::Photo => self.submit_photo(),
                Focus::Badge => {
                    let badge = self.form.highlighted_badge();
                    self.composer.select_badge(badge);
                }
                Focus::Name | Focus::Username | Focus::Text => {
                    self.set_focus(self.form.focus.next())
                }
            }
        }

        fn submit_photo(&mut self) {
            let raw = self.form.photo.value().trim().to_string();
            if raw.is_empty() {
                return;
            }
            let path = expand_home(&raw);
            if !accepts_image_path(&path) {
                self.status = Some(StatusMessage::error(format!(
                    "{} is not an image file",
                    path.display()
                )));
                return;
            }
            self.status = None;
            self.choose_avatar(path);
        }

        fn edit_focused(&mut self, action: Action) {
            let focus = self.form.focus;
            let Some(input) = self.form.focused_input_mut() else {
                return;
            };
            let old_value = input.value().to_string();

            match action {
                Action::InsertChar(c) => input.insert_char(c),
                Action::InsertNewline => input.insert_newline(),
                Action::DeleteBackward => input.delete_prev_char(),
                Action::DeleteForward => input.delete_next_char(),
                Action::MoveLeft => input.move_left(),
                Action::MoveRight => input.move_right(),
                Action::MoveLineStart => input.move_home(),
                Action::MoveLineEnd => input.move_end(),
                Action::ClearField => input.clear(),
                _ => return,
            }

            if input.value() != old_value {
                if let Some(field) = focus.draft_field() {
                    let value = input.value().to_string();
                    self.composer.update_field(field, value);
                }
            }
        }
    }

    /// Expand a leading `~/` to the home directory
    fn expand_home(raw: &str) -> PathBuf {
        if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        Path::new(raw).to_path_buf()
    }

}
