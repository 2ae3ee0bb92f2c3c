//! Stroke scripts: recorded input events replayed onto a canvas.
//!
//! A script is a JSON document:
//!
//! ```json
//! {
//!   "width": 400,
//!   "height": 300,
//!   "events": [
//!     { "type": "tool", "tool": "crayon" },
//!     { "type": "down", "x": 100, "y": 100 },
//!     { "type": "move", "x": 110, "y": 104 },
//!     { "type": "up" }
//!   ]
//! }
//! ```

use crate::draw::Surface;
use crate::input::{InputEvent, InputState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a stroke script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read stroke script {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid stroke script {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A sequence of input events plus an optional canvas size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeScript {
    /// Canvas width; the configured width is used when absent
    #[serde(default)]
    pub width: Option<u32>,
    /// Canvas height; the configured height is used when absent
    #[serde(default)]
    pub height: Option<u32>,
    pub events: Vec<InputEvent>,
}

impl StrokeScript {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ScriptError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Feeds every event to `state` in order, returning the number of
    /// segments painted.
    pub fn apply<S: Surface>(&self, state: &mut InputState<S>) -> usize {
        let mut painted = 0;
        for event in &self.events {
            if state.handle_event(*event) {
                painted += 1;
            }
        }
        log::debug!(
            "Replayed {} events, {} segments painted",
            self.events.len(),
            painted
        );
        painted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BrushConfig, RecordingSurface};
    use crate::input::Tool;

    const SCRIPT: &str = r#"{
        "width": 320,
        "events": [
            { "type": "tool", "tool": "multi-rainbow" },
            { "type": "brush_size", "size": 9 },
            { "type": "down", "x": 10, "y": 10 },
            { "type": "move", "x": 20, "y": 12 },
            { "type": "move", "x": 30, "y": 15 },
            { "type": "leave" },
            { "type": "resize", "width": 640, "height": 480 },
            { "type": "clear" }
        ]
    }"#;

    #[test]
    fn parses_tagged_events() {
        let script: StrokeScript = serde_json::from_str(SCRIPT).unwrap();
        assert_eq!(script.width, Some(320));
        assert_eq!(script.height, None);
        assert_eq!(script.events.len(), 8);
        assert_eq!(
            script.events[0],
            InputEvent::Tool {
                tool: Tool::MultiRainbow
            }
        );
        assert_eq!(script.events[5], InputEvent::Leave);
    }

    #[test]
    fn apply_counts_painted_segments() {
        let script: StrokeScript = serde_json::from_str(SCRIPT).unwrap();
        let mut state =
            InputState::with_surface(BrushConfig::default(), RecordingSurface::new(320, 240));
        assert_eq!(script.apply(&mut state), 2);
        assert_eq!(state.brush.size(), 9.0);
        assert_eq!(state.brush.hue(), 6);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = StrokeScript::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ScriptError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
