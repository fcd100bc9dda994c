//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults match [`crate::consts`];
//! the browser shell may override them from a JSON blob in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to velocity each tick
    pub gravity: f32,
    /// Velocity assigned on jump (negative = up)
    pub jump_force: f32,

    /// Fixed horizontal position of the player's left edge
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,

    /// Leftward scroll per tick
    pub scroll_speed: f32,
    /// Total width of each obstacle pair
    pub pair_width: f32,
    /// Vertical gap the player flies through
    pub gap_size: f32,
    /// Frames between spawns
    pub spawn_interval: u64,
    /// Minimum distance from the field edges to the gap
    pub gap_margin: f32,

    /// Segments narrower than this are folded into their neighbour
    pub min_segment_width: f32,
    /// Lowest segment height as a fraction of the cluster height
    pub min_height_fraction: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            scroll_speed: SCROLL_SPEED,
            pair_width: PAIR_WIDTH,
            gap_size: GAP_SIZE,
            spawn_interval: SPAWN_INTERVAL,
            gap_margin: GAP_MARGIN,

            min_segment_width: MIN_SEGMENT_WIDTH,
            min_height_fraction: MIN_HEIGHT_FRACTION,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "rooftop_rush_tuning";

    /// Parse tuning from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Replace values that would break the simulation with their defaults
    pub fn sanitized(self) -> Self {
        let defaults = Tuning::default();
        let mut out = self;

        fn fix(name: &str, value: &mut f32, fallback: f32, ok: impl Fn(f32) -> bool) {
            if !value.is_finite() || !ok(*value) {
                log::warn!("Tuning {name}={value} out of range, using {fallback}");
                *value = fallback;
            }
        }

        fix("gravity", &mut out.gravity, defaults.gravity, |_| true);
        fix("jump_force", &mut out.jump_force, defaults.jump_force, |_| true);
        fix("player_x", &mut out.player_x, defaults.player_x, |v| v >= 0.0);
        fix("player_width", &mut out.player_width, defaults.player_width, |v| v > 0.0);
        fix("player_height", &mut out.player_height, defaults.player_height, |v| v > 0.0);
        fix("scroll_speed", &mut out.scroll_speed, defaults.scroll_speed, |v| v >= 0.0);
        fix("pair_width", &mut out.pair_width, defaults.pair_width, |v| v > 0.0);
        fix("gap_size", &mut out.gap_size, defaults.gap_size, |v| v >= 0.0);
        fix("gap_margin", &mut out.gap_margin, defaults.gap_margin, |v| v >= 0.0);
        fix(
            "min_segment_width",
            &mut out.min_segment_width,
            defaults.min_segment_width,
            |v| v > 0.0,
        );
        fix(
            "min_height_fraction",
            &mut out.min_height_fraction,
            defaults.min_height_fraction,
            |v| (0.0..=1.0).contains(&v),
        );

        if out.spawn_interval == 0 {
            log::warn!(
                "Tuning spawn_interval=0 out of range, using {}",
                defaults.spawn_interval
            );
            out.spawn_interval = defaults.spawn_interval;
        }

        out
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring invalid tuning overrides: {e}"),
                }
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.15);
        assert_eq!(t.jump_force, -3.8);
        assert_eq!(t.spawn_interval, 150);
        assert_eq!(t.gap_size, 200.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.25, "pair_width": 120 }"#).unwrap();
        assert_eq!(t.gravity, 0.25);
        assert_eq!(t.pair_width, 120.0);
        assert_eq!(t.jump_force, JUMP_FORCE);
        assert_eq!(t.spawn_interval, SPAWN_INTERVAL);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Tuning::from_json("{ gravity: }").is_err());
        assert!(Tuning::from_json(r#"{ "spawn_interval": -4 }"#).is_err());
    }

    #[test]
    fn test_sanitize_repairs_degenerate_values() {
        let t = Tuning {
            spawn_interval: 0,
            pair_width: -10.0,
            min_height_fraction: 1.5,
            gravity: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(t.spawn_interval, SPAWN_INTERVAL);
        assert_eq!(t.pair_width, PAIR_WIDTH);
        assert_eq!(t.min_height_fraction, MIN_HEIGHT_FRACTION);
        assert_eq!(t.gravity, GRAVITY);
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let t = Tuning {
            gravity: 0.2,
            gap_size: 150.0,
            ..Default::default()
        };
        assert_eq!(t.clone().sanitized(), t);
    }
}
