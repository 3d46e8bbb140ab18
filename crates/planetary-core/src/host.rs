//! The environment's scheduling facilities as seen by the overlay.
//!
//! The overlay never owns a timer itself. It asks the host for timeouts,
//! intervals, animation frames and the pointer subscription, keeps the
//! returned [`Handle`]s, and the host calls back into the overlay with the
//! [`Wake`] it was registered for. Everything runs on one thread.

use std::collections::BTreeMap;
use std::time::Duration;

/// Opaque registration id assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(pub u32);

/// Which overlay transition a registration drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wake {
    /// Activation delay elapsed; start listening for pointer moves.
    Activate,
    /// Flush the coalesced pointer sample.
    DeferredSample,
    /// Spring integration and drawing.
    RenderFrame,
    /// Fixed-period particle field step.
    ParticleTick,
    /// Mode transition reached a stage boundary.
    TransitionStep,
}

/// Registrations return `None` when the environment refused them; the
/// overlay asks again on its next sync.
pub trait Host {
    fn set_timeout(&mut self, wake: Wake, delay: Duration) -> Option<Handle>;
    fn set_interval(&mut self, wake: Wake, period: Duration) -> Option<Handle>;
    fn request_frame(&mut self, wake: Wake) -> Option<Handle>;
    fn subscribe_pointer(&mut self) -> Option<Handle>;
    /// Cancel any registration. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    Timeout(Wake, Duration),
    Interval(Wake, Duration),
    Frame(Wake),
    Pointer,
}

/// In-memory host that records registrations, for tests and headless runs.
///
/// Timeouts and frames stay active until [`RecordingHost::fire`] or `cancel`;
/// intervals and the pointer subscription until `cancel`.
#[derive(Debug, Default)]
pub struct RecordingHost {
    next: u32,
    active: BTreeMap<Handle, Registration>,
    pub cancelled: Vec<Handle>,
    pub registered: usize,
    /// While set, every registration is refused.
    pub refuse: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, r: Registration) -> Option<Handle> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        let h = Handle(self.next);
        self.active.insert(h, r);
        self.registered += 1;
        Some(h)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn active(&self) -> impl Iterator<Item = (&Handle, &Registration)> {
        self.active.iter()
    }

    /// Active registrations that would wake the overlay with `wake`.
    pub fn pending(&self, wake: Wake) -> Vec<Handle> {
        self.active
            .iter()
            .filter(|(_, r)| match r {
                Registration::Timeout(w, _) | Registration::Interval(w, _) | Registration::Frame(w) => {
                    *w == wake
                }
                Registration::Pointer => false,
            })
            .map(|(h, _)| *h)
            .collect()
    }

    pub fn has_pointer_subscription(&self) -> bool {
        self.active.values().any(|r| *r == Registration::Pointer)
    }

    /// Mark a one-shot registration as fired. Intervals stay registered.
    /// Returns the wake it was registered for.
    pub fn fire(&mut self, handle: Handle) -> Option<Wake> {
        match self.active.get(&handle).copied()? {
            Registration::Interval(w, _) => Some(w),
            Registration::Timeout(w, _) | Registration::Frame(w) => {
                self.active.remove(&handle);
                Some(w)
            }
            Registration::Pointer => None,
        }
    }
}

impl Host for RecordingHost {
    fn set_timeout(&mut self, wake: Wake, delay: Duration) -> Option<Handle> {
        self.register(Registration::Timeout(wake, delay))
    }

    fn set_interval(&mut self, wake: Wake, period: Duration) -> Option<Handle> {
        self.register(Registration::Interval(wake, period))
    }

    fn request_frame(&mut self, wake: Wake) -> Option<Handle> {
        self.register(Registration::Frame(wake))
    }

    fn subscribe_pointer(&mut self) -> Option<Handle> {
        self.register(Registration::Pointer)
    }

    fn cancel(&mut self, handle: Handle) {
        if self.active.remove(&handle).is_some() {
            self.cancelled.push(handle);
        }
    }
}
