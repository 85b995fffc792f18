use scrollbox::{FrameStatus, Host, Liveness, ScrollBox};

/// Tick interval used when the host cannot schedule refresh-synchronized callbacks (30fps).
pub const FALLBACK_FRAME_INTERVAL_MS: u64 = 1000 / 30;

/// Host-side scheduling of the next frame callback.
pub trait FrameScheduler {
    /// Requests a callback on the next display refresh.
    ///
    /// Returns `false` if refresh-synchronized scheduling is unavailable.
    fn request_animation_frame(&mut self) -> bool;

    /// Requests a callback after `delay_ms`.
    fn set_timeout(&mut self, delay_ms: u64);
}

/// How the next tick was scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cadence {
    DisplayRefresh,
    Timer,
}

/// A self-rescheduling frame loop bound to one scroll box lifecycle.
///
/// Each tick checks the box's [`Liveness`] first and simply does not re-arm once the box was
/// unmounted or dropped; there is nothing to cancel.
///
/// At most one callback is outstanding at any time. Starting the loop while a callback from an
/// earlier lifecycle is still pending rebinds that callback instead of arming a second one.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    liveness: Option<Liveness>,
    cadence: Option<Cadence>,
    pending: bool,
    ticks: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the loop to a lifecycle and arms the first tick, unless a callback is already
    /// pending.
    pub fn start(&mut self, liveness: Liveness, scheduler: &mut impl FrameScheduler) {
        adebug!(pending = self.pending, "FrameLoop::start");
        self.liveness = Some(liveness);
        self.ticks = 0;
        if !self.pending {
            self.arm(scheduler);
        }
    }

    pub fn is_running(&self) -> bool {
        self.liveness.as_ref().is_some_and(Liveness::is_alive)
    }

    /// Whether a scheduled callback has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// How the most recent tick was scheduled.
    pub fn cadence(&self) -> Option<Cadence> {
        self.cadence
    }

    /// Number of ticks handled since `start`.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn arm(&mut self, scheduler: &mut impl FrameScheduler) {
        let cadence = if scheduler.request_animation_frame() {
            Cadence::DisplayRefresh
        } else {
            scheduler.set_timeout(FALLBACK_FRAME_INTERVAL_MS);
            Cadence::Timer
        };
        self.cadence = Some(cadence);
        self.pending = true;
    }

    fn stop(&mut self) {
        adebug!(ticks = self.ticks, "FrameLoop stopped");
        self.liveness = None;
        self.cadence = None;
    }

    /// Handles one scheduled callback: reconciles, then re-arms while the box is alive.
    ///
    /// Returns `false` once the loop stopped; no further callback is scheduled in that case.
    pub fn on_frame<H: Host>(
        &mut self,
        sb: &mut ScrollBox<H>,
        scheduler: &mut impl FrameScheduler,
        now_ms: u64,
    ) -> bool {
        self.pending = false;
        if self.liveness.is_none() {
            awarn!("FrameLoop::on_frame called before start");
            return false;
        }
        if !self.is_running() {
            self.stop();
            return false;
        }
        self.ticks = self.ticks.saturating_add(1);
        atrace!(now_ms, ticks = self.ticks, "FrameLoop::on_frame");
        if sb.frame(now_ms) == FrameStatus::Stop {
            self.stop();
            return false;
        }
        self.arm(scheduler);
        true
    }
}
