//! Input handling and brush state.
//!
//! This module translates pointer and toolbar events into drawing actions.
//! It maintains the stroke in progress, the active tool and brush settings,
//! and drives the stroke renderer on every pointer move.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::InputEvent;
pub use state::InputState;
pub use tool::Tool;
