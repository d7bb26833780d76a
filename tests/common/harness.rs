// Drives the app with key events and renders into an in-memory terminal

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tweetsmith::app::App;
use tweetsmith::config::Config;
use tweetsmith::view::theme::Theme;

/// How long `wait_for_avatar` waits before giving up
const AVATAR_TIMEOUT: Duration = Duration::from_secs(5);

pub struct ComposerTestHarness {
    app: App,
    terminal: Terminal<TestBackend>,
    // Keeps avatar loads running; must outlive `app`
    _runtime: tokio::runtime::Runtime,
}

impl ComposerTestHarness {
    pub fn new(width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_config(Config::default(), width, height)
    }

    pub fn with_config(config: Config, width: u16, height: u16) -> anyhow::Result<Self> {
        super::tracing::init_tracing_from_env();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let theme = Theme::from_name(&config.theme, None);
        let app = App::new(&config, theme, runtime.handle().clone());
        let terminal = Terminal::new(TestBackend::new(width, height))?;

        Ok(Self {
            app,
            terminal,
            _runtime: runtime,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.app.handle_key(KeyEvent::new(code, modifiers));
        self.render()
    }

    pub fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        for c in text.chars() {
            self.app
                .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        self.render()
    }

    /// Press Tab `count` times
    pub fn tab(&mut self, count: usize) -> anyhow::Result<()> {
        for _ in 0..count {
            self.app
                .handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        }
        self.render()
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let app = &self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    /// Wait until no avatar load is outstanding, applying results as they arrive
    pub fn wait_for_avatar(&mut self) -> anyhow::Result<()> {
        let start = Instant::now();
        loop {
            self.app.process_async_messages();
            if self.app.composer().pending_avatar().is_none() {
                return self.render();
            }
            if start.elapsed() > AVATAR_TIMEOUT {
                anyhow::bail!("Timed out waiting for avatar load");
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    /// One screen row as a string
    pub fn screen_row(&self, y: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    /// Whole screen, rows joined with newlines
    pub fn screen_to_string(&self) -> String {
        let height = self.terminal.backend().buffer().area.height;
        (0..height)
            .map(|y| self.screen_row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Assert that some row of the screen contains `text`
    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }
}
