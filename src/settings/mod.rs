use lazy_static::lazy_static;
use log::{info, warn};
use std::env;
use std::sync::RwLock;

/// Session-wide preferences from the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub notifications: bool,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Notifications,
    DarkMode,
}

impl Toggle {
    pub fn label(&self) -> &'static str {
        match self {
            Toggle::Notifications => "Notifications",
            Toggle::DarkMode => "Dark Mode",
        }
    }
}

impl Settings {
    /// Builds settings from a variable lookup, keeping defaults for anything
    /// missing or unparseable.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            notifications: read_flag(&lookup, "IWA_NOTIFICATIONS").unwrap_or(defaults.notifications),
            dark_mode: read_flag(&lookup, "IWA_DARK_MODE").unwrap_or(defaults.dark_mode),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Notifications => self.notifications,
            Toggle::DarkMode => self.dark_mode,
        }
    }

    pub fn set(&mut self, toggle: Toggle, value: bool) {
        match toggle {
            Toggle::Notifications => self.notifications = value,
            Toggle::DarkMode => self.dark_mode = value,
        }
    }
}

fn read_flag<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match parse_flag(&raw) {
        Some(value) => Some(value),
        None => {
            warn!("Ignoring {}={:?}, expected true/false", key, raw);
            None
        }
    }
}

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

lazy_static! {
    static ref SETTINGS: RwLock<Settings> = RwLock::new(Settings::default());
}

pub fn init(settings: Settings) {
    let mut guard = SETTINGS.write().unwrap_or_else(|e| e.into_inner());
    *guard = settings;
    info!(
        "Settings initialized: notifications={}, dark_mode={}",
        settings.notifications, settings.dark_mode
    );
}

pub fn current() -> Settings {
    *SETTINGS.read().unwrap_or_else(|e| e.into_inner())
}

/// Flips one toggle and returns its new value.
pub fn toggle(which: Toggle) -> bool {
    let mut guard = SETTINGS.write().unwrap_or_else(|e| e.into_inner());
    let value = !guard.get(which);
    guard.set(which, value);
    info!("{} set to {}", which.label(), value);
    value
}
