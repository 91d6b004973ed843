//! Persisted canvas state and its JSON codec.

use crate::shapes::{Arrow, Circle, Rectangle, Scribble, DEFAULT_BACKGROUND_COLOR};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when persisted state cannot be decoded.
///
/// Decoding is all-or-nothing: on failure the live store is left untouched.
#[derive(Debug, Error)]
#[error("invalid canvas state: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// The persisted aggregate: background color plus the four shape collections.
///
/// The background image is intentionally excluded, matching the reference
/// behavior (re-importing it is a manual step after load).
///
/// Load is tolerant: every top-level key may be absent and defaults to an
/// empty collection (or `#ffffff` for the background); unknown extra keys are
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    #[serde(rename = "backgroundColor", default = "default_background")]
    pub background_color: String,
    #[serde(default)]
    pub rectangles: Vec<Rectangle>,
    #[serde(default)]
    pub circles: Vec<Circle>,
    #[serde(default)]
    pub scribbles: Vec<Scribble>,
    #[serde(default)]
    pub arrows: Vec<Arrow>,
}

fn default_background() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            background_color: default_background(),
            rectangles: Vec::new(),
            circles: Vec::new(),
            scribbles: Vec::new(),
            arrows: Vec::new(),
        }
    }
}

impl CanvasState {
    /// Serialize to the persisted JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a persisted JSON document.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when all four collections are empty.
    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
            && self.circles.is_empty()
            && self.scribbles.is_empty()
            && self.arrows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_default_state() {
        let state = CanvasState::default();
        assert!(state.is_empty());
        assert_eq!(state.background_color, "#ffffff");
    }

    #[test]
    fn test_roundtrip() {
        let mut state = CanvasState::default();
        state.background_color = "#abcdef".into();
        state.rectangles.push(Rectangle::new("#ff0000".into(), Point::new(1.0, 2.0)));
        state.circles.push(Circle::new("#00ff00".into(), Point::new(3.0, 4.0)));
        state.scribbles.push(Scribble::new("#0000ff".into(), Point::new(5.0, 6.0)));
        state.arrows.push(Arrow::new("#000000".into(), Point::new(7.0, 8.0)));

        let json = state.to_json().unwrap();
        let back = CanvasState::from_json(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_missing_keys_default() {
        let state = CanvasState::from_json(r##"{"backgroundColor":"#111111"}"##).unwrap();
        assert_eq!(state.background_color, "#111111");
        assert!(state.is_empty());
    }

    #[test]
    fn test_missing_arrows_key() {
        let json = r##"{"backgroundColor":"#222222","rectangles":[],"circles":[],"scribbles":[]}"##;
        let state = CanvasState::from_json(json).unwrap();
        assert!(state.arrows.is_empty());
        assert_eq!(state.background_color, "#222222");
    }

    #[test]
    fn test_missing_background_defaults_white() {
        let state = CanvasState::from_json("{}").unwrap();
        assert_eq!(state.background_color, "#ffffff");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let state = CanvasState::from_json(r##"{"version":3,"author":"x"}"##).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_malformed_input_fails() {
        assert!(CanvasState::from_json("not json").is_err());
        assert!(CanvasState::from_json(r##"{"rectangles":"nope"}"##).is_err());
    }

    #[test]
    fn test_background_color_key_is_camel_case() {
        let state = CanvasState::default();
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("backgroundColor").is_some());
    }
}
