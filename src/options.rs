//! Configuration of the overlay.

use std::{env, str::FromStr};

use anyhow::{bail, Context};

use crate::bridge::Source;
use crate::session::StaleHands;

/// Options for running the overlay.
///
/// Construct with [`Options::default`] or [`Options::from_env`] and customize with the builder
/// methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    source: Source,
    fps: u32,
    scale: u32,
    title: String,
    stale_hands: StaleHands,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: Source::Stdin,
            fps: 30,
            scale: 3,
            title: env!("CARGO_PKG_NAME").to_string(),
            stale_hands: StaleHands::Keep,
        }
    }
}

impl Options {
    /// Environment variable selecting the [`Source`].
    pub const SOURCE_VAR: &'static str = "HANDMARK_SOURCE";
    /// Environment variable overriding the frame rate.
    pub const FPS_VAR: &'static str = "HANDMARK_FPS";
    /// Environment variable overriding the window scale factor.
    pub const SCALE_VAR: &'static str = "HANDMARK_SCALE";
    /// Environment variable enabling [`StaleHands::Clear`].
    pub const CLEAR_STALE_HANDS_VAR: &'static str = "HANDMARK_CLEAR_STALE_HANDS";

    /// Creates [`Options`] from the process environment, using defaults for unset variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Creates [`Options`] from the variables returned by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut options = Self::default();
        if let Some(source) = lookup(Self::SOURCE_VAR) {
            options.source = parse_var(Self::SOURCE_VAR, &source)?;
        }
        if let Some(fps) = lookup(Self::FPS_VAR) {
            let fps = parse_var(Self::FPS_VAR, &fps)?;
            options = options.fps(fps).context(Self::FPS_VAR)?;
        }
        if let Some(scale) = lookup(Self::SCALE_VAR) {
            let scale = parse_var(Self::SCALE_VAR, &scale)?;
            options = options.scale(scale).context(Self::SCALE_VAR)?;
        }
        if let Some(clear) = lookup(Self::CLEAR_STALE_HANDS_VAR) {
            if parse_flag(Self::CLEAR_STALE_HANDS_VAR, &clear)? {
                options.stale_hands = StaleHands::Clear;
            }
        }
        Ok(options)
    }

    /// Sets where tracker snapshots are read from.
    #[inline]
    pub fn source(self, source: Source) -> Self {
        Self { source, ..self }
    }

    /// Sets the target frame rate. Must be between 1 and 240.
    pub fn fps(self, fps: u32) -> anyhow::Result<Self> {
        if !(1..=240).contains(&fps) {
            bail!("frame rate must be between 1 and 240, got {fps}");
        }
        Ok(Self { fps, ..self })
    }

    /// Sets the integer factor the canvas is scaled up by in the window. Must be between 1 and 16.
    pub fn scale(self, scale: u32) -> anyhow::Result<Self> {
        if !(1..=16).contains(&scale) {
            bail!("window scale must be between 1 and 16, got {scale}");
        }
        Ok(Self { scale, ..self })
    }

    /// Sets the window title.
    #[inline]
    pub fn title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    /// Sets what happens to the displayed hands when the tracker loses them.
    #[inline]
    pub fn stale_hands(self, stale_hands: StaleHands) -> Self {
        Self {
            stale_hands,
            ..self
        }
    }

    pub fn get_source(&self) -> &Source {
        &self.source
    }

    pub fn get_fps(&self) -> u32 {
        self.fps
    }

    pub fn get_scale(&self) -> u32 {
        self.scale
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_stale_hands(&self) -> StaleHands {
        self.stale_hands
    }
}

fn parse_var<T>(name: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Into<anyhow::Error>,
{
    value
        .trim()
        .parse::<T>()
        .map_err(Into::<anyhow::Error>::into)
        .with_context(|| format!("invalid value `{value}` for {name}"))
}

fn parse_flag(name: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => bail!("invalid value `{value}` for {name}, expected `1` or `0`"),
    }
}
