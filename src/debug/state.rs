//! Debug domain: overlay state resource.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay (position, grounded, charges) is visible
    pub show_info: bool,
    /// Whether to draw this frame's probe rays
    pub show_probes: bool,
}
