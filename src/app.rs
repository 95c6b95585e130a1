//! Application struct and poll loop.
//!
//! Owns the feed client and color theme. Each cycle shows a status line,
//! fetches disruptions, then either draws the cards or blanks the console
//! until the next poll.

use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use rand::Rng;

use crate::config::Config;
use crate::feed::FeedClient;
use crate::models::{split_alert, Grid};
use crate::terminal::{self, Blanking};
use crate::ui::{status_screen, ColorTheme, ComposedScreen, ScreenComposer};

/// Main application struct.
pub struct App {
    config: Config,
    feed: FeedClient,
    theme: ColorTheme,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let feed = FeedClient::new(
            &config.api_base,
            Duration::from_secs(config.fetch_timeout_secs),
        );
        let theme = ColorTheme::load(config.colors_file.as_deref());

        Self {
            config: config.clone(),
            feed,
            theme,
        }
    }

    /// Run until Ctrl-C, then hand the console back.
    pub async fn run(&self) -> Result<()> {
        terminal::run_hook(self.config.dim_command.as_deref());
        if let Err(e) = terminal::hide_cursor() {
            tracing::warn!(error = %e, "cannot hide cursor");
        }

        let outcome = tokio::select! {
            result = self.poll_loop() => result,
            signal = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                signal.map_err(Into::into)
            }
        };

        self.shutdown();
        outcome
    }

    async fn poll_loop(&self) -> Result<()> {
        loop {
            let wait = self.cycle().await?;
            tracing::debug!(secs = wait.as_secs(), "sleeping");
            tokio::time::sleep(wait).await;
        }
    }

    /// One poll. Returns how long to wait before the next one.
    async fn cycle(&self) -> io::Result<Duration> {
        self.show_status(&t!("status.checking"))?;

        let lines = match self.config.resolve_lines() {
            Ok(lines) => lines,
            Err(e) => {
                tracing::error!(error = %e, "cannot resolve line list");
                let error = e.to_string();
                let secs = self.config.retry_secs;
                self.show_status(&t!("status.error", error = error, secs = secs))?;
                return Ok(Duration::from_secs(self.config.retry_secs));
            }
        };

        let alerts = self.feed.fetch(&lines).await;
        if alerts.is_empty() {
            self.blank(Blanking::Force);
            return Ok(Duration::from_secs(self.config.idle_secs));
        }

        self.blank(Blanking::Wake);
        let screen = self.compose(&alerts, terminal::grid_size(), &mut rand::thread_rng());
        tracing::info!(
            alerts = alerts.len(),
            placed = screen.placed,
            skipped = screen.skipped,
            "drew cards"
        );
        terminal::write_frame(&screen.output)?;
        Ok(Duration::from_secs(self.config.refresh_secs))
    }

    fn compose<R: Rng + ?Sized>(&self, alerts: &[String], grid: Grid, rng: &mut R) -> ComposedScreen {
        ScreenComposer::new(&self.theme, split_alert)
            .with_card_width(self.config.card_width)
            .with_urgency_marker(self.config.urgency_marker.as_str())
            .compose(alerts, grid, Local::now().naive_local(), rng)
    }

    fn show_status(&self, msg: &str) -> io::Result<()> {
        terminal::write_frame(&status_screen(msg, terminal::grid_size()))
    }

    fn blank(&self, blanking: Blanking) {
        if self.config.blanking {
            terminal::set_blanking(blanking);
        }
    }

    fn shutdown(&self) {
        terminal::run_hook(self.config.bright_command.as_deref());
        self.blank(Blanking::Restore);
        if let Err(e) = terminal::restore() {
            tracing::warn!(error = %e, "cannot restore terminal");
        }
        println!("\n{}", t!("app.stopped"));
        tracing::info!("stopped");
    }
}
