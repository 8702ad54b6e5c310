//! Sample configuration, read from the environment.

use std::{env, fmt::Display, str::FromStr};

#[derive(Debug, Copy, Clone, PartialEq)]
#[must_use]
pub(crate) struct Config {
    pub(crate) frames: u32,
    pub(crate) target_fps: u32,
    pub(crate) window_width: u32,
    pub(crate) window_height: u32,
    pub(crate) degrees_per_second: f32,
    pub(crate) paused: bool,
    /// Frame at which the animation clock is rewound.
    pub(crate) reset_frame: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frames: env_or("TRIFORCE_FRAMES", 8),
            target_fps: env_or("TARGET_FPS", 60),
            window_width: env_or("WINDOW_WIDTH", 800),
            window_height: env_or("WINDOW_HEIGHT", 600),
            degrees_per_second: env_or("DEGREES_PER_SECOND", 45.0),
            paused: env::var("PAUSED").is_ok(),
            reset_frame: parse_opt("RESET_FRAME", env::var("RESET_FRAME").ok()),
        }
    }
}

impl Config {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seconds between animation steps.
    pub(crate) fn frame_delta(&self) -> f32 {
        1.0 / self.target_fps as f32
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    parse_or(key, env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match value.map(|value| value.parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(err)) => {
            tracing::warn!("invalid {key}: {err}, using default of {default}");
            default
        }
        None => default,
    }
}

fn parse_opt<T>(key: &str, value: Option<String>) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    match value?.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("invalid {key}: {err}, ignoring");
            None
        }
    }
}
