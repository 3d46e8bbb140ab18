//! Frame-gated pointer sampler.
//!
//! Pointer moves closer together than [`POINTER_FRAME_GATE`] are coalesced
//! into a single pending position that is flushed by the next animation
//! frame. Only the most recent coordinate survives; at most one deferred
//! frame is outstanding at any time.

use crate::constants::POINTER_FRAME_GATE;
use glam::Vec2;
use std::time::Duration;

/// What the host has to do after feeding a pointer move in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleOutcome {
    /// Accepted immediately; the caller applies the position.
    Accepted(Vec2),
    /// Stored as pending; the caller must request one animation frame.
    Deferred,
    /// Replaced an already pending position; a frame is already requested.
    Coalesced,
    /// Listener not active yet (or torn down); the move is dropped.
    Ignored,
}

#[derive(Clone, Debug, Default)]
pub struct PointerSampler {
    /// Latest accepted position.
    pub position: Option<Vec2>,
    pub visible: bool,
    listening: bool,
    last_accept: Option<Duration>,
    pending: Option<Vec2>,
    accepted: u64,
}

impl PointerSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of accepted samples so far.
    pub fn accepted_count(&self) -> u64 {
        self.accepted
    }

    pub fn activate(&mut self) {
        self.listening = true;
    }

    /// Stop listening, hide, and drop any pending sample.
    pub fn deactivate(&mut self) {
        self.listening = false;
        self.visible = false;
        self.pending = None;
    }

    pub fn on_pointer_move(&mut self, pos: Vec2, now: Duration) -> SampleOutcome {
        if !self.listening || !pos.is_finite() {
            return SampleOutcome::Ignored;
        }
        let gated = self
            .last_accept
            .is_some_and(|last| now.saturating_sub(last) < POINTER_FRAME_GATE);
        if gated || self.pending.is_some() {
            let was_pending = self.pending.replace(pos).is_some();
            return if was_pending {
                SampleOutcome::Coalesced
            } else {
                SampleOutcome::Deferred
            };
        }
        self.accept(pos, now);
        SampleOutcome::Accepted(pos)
    }

    /// Flush the pending sample on the deferred animation frame.
    pub fn on_frame(&mut self, now: Duration) -> Option<Vec2> {
        let pos = self.pending.take()?;
        if !self.listening {
            return None;
        }
        self.accept(pos, now);
        Some(pos)
    }

    fn accept(&mut self, pos: Vec2, now: Duration) {
        self.position = Some(pos);
        self.last_accept = Some(now);
        self.accepted += 1;
        self.visible = true;
    }
}
