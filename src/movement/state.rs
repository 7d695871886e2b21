//! Movement domain: grounded/jumping state and the jump-charge budget.

use bevy::prelude::*;

/// Per-actor movement state, recomputed every frame from the vertical
/// resolve outcome.
///
/// Kept as a plain value with explicit transitions so frame sequences replay
/// deterministically in tests without a live scene.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CharacterState {
    pub grounded: bool,
    pub jumping: bool,
    /// Elapsed time in the current jump arc.
    pub jump_elapsed: f32,
    /// Jump charges left until the next landing.
    pub jumps_left: u32,
}

impl CharacterState {
    /// Spawn state: airborne, with the initial fall counting as the first
    /// spent charge.
    pub fn airborne(max_jumps: u32) -> Self {
        Self {
            grounded: false,
            jumping: false,
            jump_elapsed: 0.0,
            jumps_left: max_jumps.saturating_sub(1),
        }
    }

    /// Consume a jump charge if any remain. Returns whether the arc starts.
    pub fn try_jump(&mut self) -> bool {
        if self.jumps_left == 0 {
            return false;
        }
        self.jumps_left -= 1;
        self.jumping = true;
        self.grounded = false;
        self.jump_elapsed = 0.0;
        true
    }

    /// Fold this frame's vertical resolve into the grounded state. Returns
    /// true exactly on the airborne-to-grounded transition.
    ///
    /// An obstruction only grounds the actor when the net vertical
    /// displacement was non-positive; a ceiling hit while rising must not
    /// register as a landing.
    pub fn settle(&mut self, hit: bool, frame_dy: f32, max_jumps: u32) -> bool {
        if hit && frame_dy <= 0.0 {
            let landed = !self.grounded;
            self.grounded = true;
            self.jumping = false;
            if landed {
                self.jumps_left = max_jumps;
            }
            landed
        } else {
            self.grounded = false;
            false
        }
    }

    /// Clear the jumping flag once the arc has played out with no landing.
    pub fn expire_jump(&mut self, final_time: f32) {
        if self.jumping && self.jump_elapsed > final_time {
            self.jumping = false;
        }
    }
}
