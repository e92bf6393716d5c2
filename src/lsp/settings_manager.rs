//! Settings management for the LSP server.
//!
//! `SettingsManager` owns the current workspace settings together with the
//! token encoding derived from them. Both are swapped atomically, so a
//! request always sees an encoding that matches the settings it logs.

use arc_swap::ArcSwap;
use serde_json::Value;
use std::sync::Arc;

use crate::analysis::TokenEncoding;
use crate::config::WorkspaceSettings;

/// Settings as applied, plus what was resolved from them.
#[derive(Debug)]
pub(crate) struct ResolvedSettings {
    pub(crate) settings: WorkspaceSettings,
    pub(crate) encoding: TokenEncoding,
}

impl ResolvedSettings {
    fn resolve(settings: WorkspaceSettings) -> Self {
        let encoding = TokenEncoding::from_config(&settings.semantic_tokens);
        Self { settings, encoding }
    }
}

/// Where a settings payload came from, for log messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SettingsSource {
    InitializationOptions,
    ClientConfiguration,
}

impl SettingsSource {
    fn description(self) -> &'static str {
        match self {
            SettingsSource::InitializationOptions => "initialization options",
            SettingsSource::ClientConfiguration => "client configuration",
        }
    }
}

/// Thread-safe holder of the current workspace settings.
pub(crate) struct SettingsManager {
    current: ArcSwap<ResolvedSettings>,
}

impl std::fmt::Debug for SettingsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsManager")
            .field("current", &"ArcSwap<ResolvedSettings>")
            .finish()
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsManager {
    /// Create a manager holding the default settings.
    pub(crate) fn new() -> Self {
        Self {
            current: ArcSwap::new(Arc::new(ResolvedSettings::resolve(
                WorkspaceSettings::default(),
            ))),
        }
    }

    /// Load the current settings and their encoding.
    pub(crate) fn load(&self) -> Arc<ResolvedSettings> {
        self.current.load_full()
    }

    /// Apply new workspace settings.
    pub(crate) fn apply_settings(&self, settings: WorkspaceSettings) {
        self.current
            .store(Arc::new(ResolvedSettings::resolve(settings)));
    }

    /// Parse and apply a client JSON payload.
    ///
    /// A payload that does not parse leaves the current settings in place.
    /// Returns whether the settings were replaced.
    pub(crate) fn apply_json(&self, source: SettingsSource, value: &Value) -> bool {
        if value.is_null() {
            return false;
        }
        match WorkspaceSettings::from_json(value) {
            Ok(settings) => {
                log::info!(
                    target: "hieroglyph::settings",
                    "Applied settings from {}",
                    source.description()
                );
                log::debug!(target: "hieroglyph::settings", "{:?}", settings);
                self.apply_settings(settings);
                true
            }
            Err(error) => {
                log::warn!(
                    target: "hieroglyph::settings",
                    "Ignoring invalid settings from {}: {}",
                    source.description(),
                    error
                );
                false
            }
        }
    }
}
