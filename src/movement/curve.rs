//! Movement domain: keyframed jump height curve.

use bevy::prelude::*;

/// One keyframe of a time-to-height curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub height: f32,
}

/// Malformed curve data, rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveError {
    /// A curve needs at least two keyframes to interpolate between.
    TooFewKeys(usize),
    NegativeTime(f32),
    /// Keyframe times must strictly increase.
    NonIncreasingTime { index: usize, time: f32 },
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::TooFewKeys(count) => {
                write!(f, "jump curve needs at least 2 keyframes, got {}", count)
            }
            CurveError::NegativeTime(time) => {
                write!(f, "jump curve starts at negative time {}", time)
            }
            CurveError::NonIncreasingTime { index, time } => {
                write!(
                    f,
                    "jump curve keyframe {} at time {} does not increase",
                    index, time
                )
            }
        }
    }
}

/// Piecewise-linear height curve sampled by elapsed jump time.
///
/// The driver differences two consecutive samples to get a frame's vertical
/// displacement, so the curve may rise and fall freely across its apex; the
/// resolver never assumes a velocity direction.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct JumpCurve {
    keys: Vec<Keyframe>,
}

impl Default for JumpCurve {
    fn default() -> Self {
        // 0.6 s arc peaking at 96 px.
        Self {
            keys: vec![
                Keyframe { time: 0.0, height: 0.0 },
                Keyframe { time: 0.15, height: 64.0 },
                Keyframe { time: 0.3, height: 96.0 },
                Keyframe { time: 0.45, height: 64.0 },
                Keyframe { time: 0.6, height: 0.0 },
            ],
        }
    }
}

impl JumpCurve {
    pub fn new(keys: Vec<Keyframe>) -> Result<Self, CurveError> {
        if keys.len() < 2 {
            return Err(CurveError::TooFewKeys(keys.len()));
        }
        if keys[0].time < 0.0 {
            return Err(CurveError::NegativeTime(keys[0].time));
        }
        for (i, pair) in keys.windows(2).enumerate() {
            if pair[1].time <= pair[0].time {
                return Err(CurveError::NonIncreasingTime {
                    index: i + 1,
                    time: pair[1].time,
                });
            }
        }
        Ok(Self { keys })
    }

    /// Height at `t`, clamped to the first/last keyframe outside the range.
    pub fn sample(&self, t: f32) -> f32 {
        let first = self.keys[0];
        if t <= first.time {
            return first.height;
        }
        let last = self.keys[self.keys.len() - 1];
        if t >= last.time {
            return last.height;
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.time {
                let u = (t - a.time) / (b.time - a.time);
                return a.height + (b.height - a.height) * u;
            }
        }
        last.height
    }

    /// Time of the final keyframe; past this the jump arc is over.
    pub fn final_time(&self) -> f32 {
        self.keys[self.keys.len() - 1].time
    }
}
