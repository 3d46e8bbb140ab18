//! Scale-out / scale-in switch between the two visual variants.
//!
//! Only one variant is ever shown: the outgoing one shrinks to zero over the
//! first half of [`MODE_TRANSITION`], then the incoming one grows from zero
//! over the second half. Reversing mid-way continues from the current scale.

use crate::constants::MODE_TRANSITION;
use crate::easing::{ease_in_out_cubic, progress};
use crate::theme::VisualMode;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Stage {
    Steady,
    Leaving { since: Duration },
    Entering { since: Duration },
}

/// Reported by [`ModeSwitch::advance`] when the shown variant changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swap {
    pub from: VisualMode,
    pub to: VisualMode,
}

#[derive(Clone, Debug)]
pub struct ModeSwitch {
    shown: VisualMode,
    target: VisualMode,
    stage: Stage,
    half: Duration,
}

impl ModeSwitch {
    pub fn new(mode: VisualMode) -> Self {
        Self {
            shown: mode,
            target: mode,
            stage: Stage::Steady,
            half: MODE_TRANSITION / 2,
        }
    }

    /// Variant whose elements are currently rendered.
    pub fn shown(&self) -> VisualMode {
        self.shown
    }

    pub fn target(&self) -> VisualMode {
        self.target
    }

    pub fn in_transition(&self) -> bool {
        self.stage != Stage::Steady
    }

    /// Ask for `mode`. Returns false when it is already the target.
    pub fn request(&mut self, mode: VisualMode, now: Duration) -> bool {
        if mode == self.target {
            return false;
        }
        self.target = mode;
        self.stage = match self.stage {
            Stage::Steady => Stage::Leaving { since: now },
            Stage::Leaving { since } if mode == self.shown => {
                let p = progress(now.saturating_sub(since), self.half);
                Stage::Entering {
                    since: now.saturating_sub(self.half.mul_f32(1.0 - p)),
                }
            }
            Stage::Entering { since } => {
                let p = progress(now.saturating_sub(since), self.half);
                Stage::Leaving {
                    since: now.saturating_sub(self.half.mul_f32(1.0 - p)),
                }
            }
            leaving => leaving,
        };
        true
    }

    /// Move through stage boundaries that `now` has passed.
    pub fn advance(&mut self, now: Duration) -> Option<Swap> {
        let mut swap = None;
        if let Stage::Leaving { since } = self.stage {
            if now.saturating_sub(since) >= self.half {
                swap = Some(Swap {
                    from: self.shown,
                    to: self.target,
                });
                self.shown = self.target;
                self.stage = Stage::Entering {
                    since: since + self.half,
                };
            }
        }
        if let Stage::Entering { since } = self.stage {
            if now.saturating_sub(since) >= self.half {
                self.stage = Stage::Steady;
            }
        }
        swap
    }

    /// Time from `now` until the next stage boundary, if one is pending.
    pub fn next_deadline(&self, now: Duration) -> Option<Duration> {
        match self.stage {
            Stage::Steady => None,
            Stage::Leaving { since } | Stage::Entering { since } => {
                Some((since + self.half).saturating_sub(now))
            }
        }
    }

    /// Scale (and opacity) multiplier for the shown variant.
    pub fn scale(&self, now: Duration) -> f32 {
        match self.stage {
            Stage::Steady => 1.0,
            Stage::Leaving { since } => {
                1.0 - ease_in_out_cubic(progress(now.saturating_sub(since), self.half))
            }
            Stage::Entering { since } => {
                ease_in_out_cubic(progress(now.saturating_sub(since), self.half))
            }
        }
    }
}
