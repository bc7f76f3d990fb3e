//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the simulated submission failure switch
const SIMULATE_FAILURE_ENV: &str = "FOLIO_SIMULATE_FAILURE";

/// User configuration for the TUI. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FolioConfig {
    /// Delay between hiding a page and showing the next, in ms
    pub transition_delay_ms: Option<u64>,
    /// Delay between consecutive fade-in reveals, in ms
    pub stagger_ms: Option<u64>,
    /// How long the success notice stays up, in ms
    pub success_notice_ms: Option<u64>,
    /// Quiet period before a resize is acted on, in ms
    pub resize_debounce_ms: Option<u64>,
    /// Duration of smooth scroll jumps, in ms
    pub smooth_scroll_ms: Option<u64>,
    /// Scroll offset (rows) past which the header turns translucent
    pub header_threshold: Option<u16>,
    /// Terminal width (columns) above which the full nav bar is shown
    pub menu_breakpoint: Option<u16>,
    /// Simulated submission delay, in ms
    pub submission_delay_ms: Option<u64>,
    /// Make the simulated submission endpoint fail
    pub simulate_failure: Option<bool>,
}

/// Resolved coordinator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub transition_delay: Duration,
    pub stagger: Duration,
    pub success_notice: Duration,
    pub resize_debounce: Duration,
    pub smooth_scroll: Duration,
    pub header_threshold: u16,
    pub menu_breakpoint: u16,
    /// Rows of header height subtracted from smooth scroll targets
    pub header_height: u16,
    /// Rows trimmed off the viewport bottom for fade-in observation
    pub reveal_margin: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transition_delay: Duration::from_millis(150),
            stagger: Duration::from_millis(100),
            success_notice: Duration::from_millis(5000),
            resize_debounce: Duration::from_millis(250),
            smooth_scroll: Duration::from_millis(800),
            header_threshold: 3,
            menu_breakpoint: 80,
            header_height: 0,
            reveal_margin: 1,
        }
    }
}

impl FolioConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FolioConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Coordinator settings with defaults filled in
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        let ms = |value: Option<u64>, default: Duration| {
            value.map(Duration::from_millis).unwrap_or(default)
        };

        Settings {
            transition_delay: ms(self.transition_delay_ms, defaults.transition_delay),
            stagger: ms(self.stagger_ms, defaults.stagger),
            success_notice: ms(self.success_notice_ms, defaults.success_notice),
            resize_debounce: ms(self.resize_debounce_ms, defaults.resize_debounce),
            smooth_scroll: ms(self.smooth_scroll_ms, defaults.smooth_scroll),
            header_threshold: self.header_threshold.unwrap_or(defaults.header_threshold),
            menu_breakpoint: self.menu_breakpoint.unwrap_or(defaults.menu_breakpoint),
            ..defaults
        }
    }

    /// Simulated submission delay
    pub fn submission_delay(&self) -> Duration {
        self.submission_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::submission::DEFAULT_SUBMISSION_DELAY)
    }

    /// Whether the simulated endpoint should fail, honouring the env override
    pub fn simulate_failure(&self) -> bool {
        match std::env::var(SIMULATE_FAILURE_ENV) {
            Ok(value) => matches!(value.as_str(), "1" | "true" | "yes"),
            Err(_) => self.simulate_failure.unwrap_or(false),
        }
    }
}
