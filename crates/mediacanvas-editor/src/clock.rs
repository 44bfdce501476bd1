//! Playback clock: a playhead that advances by a fixed step on a fixed
//! interval while running.
//!
//! At most one ticker task exists. Every start bumps a generation counter
//! and the ticker exits as soon as it observes a different generation, so a
//! ticker cancelled mid-tick can never advance the playhead.

use mediacanvas_core::{PlaybackConfig, PlayheadTime};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

/// Transport state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClockStatus {
    Stopped,
    Running,
}

/// Snapshot of the clock as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaybackState {
    pub current_time: f64,
    pub is_playing: bool,
}

struct ClockInner {
    time: PlayheadTime,
    status: ClockStatus,
    generation: u64,
    ticker: Option<JoinHandle<()>>,
}

impl ClockInner {
    fn stop(&mut self) {
        self.status = ClockStatus::Stopped;
        self.generation += 1;
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

pub struct PlaybackClock {
    inner: Arc<Mutex<ClockInner>>,
    step: PlayheadTime,
    interval: Duration,
    runtime: Option<Handle>,
}

impl PlaybackClock {
    /// Create a stopped clock at time zero.
    ///
    /// The ticker runs on the runtime current at construction, or failing
    /// that on the one current when playback starts. With neither, the host
    /// drives the clock by calling [`tick`].
    ///
    /// [`tick`]: PlaybackClock::tick
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ClockInner {
                time: PlayheadTime::ZERO,
                status: ClockStatus::Stopped,
                generation: 0,
                ticker: None,
            })),
            step: PlayheadTime::from_seconds_f64(config.tick_step_secs),
            interval: config.tick_interval(),
            runtime: Handle::try_current().ok(),
        }
    }

    pub fn status(&self) -> ClockStatus {
        self.inner.lock().status
    }

    pub fn is_playing(&self) -> bool {
        self.status() == ClockStatus::Running
    }

    pub fn playhead(&self) -> PlayheadTime {
        self.inner.lock().time
    }

    /// Current time in seconds.
    pub fn current_time(&self) -> f64 {
        self.playhead().to_seconds_f64()
    }

    pub fn state(&self) -> PlaybackState {
        let inner = self.inner.lock();
        PlaybackState {
            current_time: inner.time.to_seconds_f64(),
            is_playing: inner.status == ClockStatus::Running,
        }
    }

    /// Flip between stopped and running. Returns the new status.
    pub fn toggle_play(&self) -> ClockStatus {
        let mut inner = self.inner.lock();
        match inner.status {
            ClockStatus::Running => {
                inner.stop();
                debug!(time = %inner.time, "Playback paused");
            }
            ClockStatus::Stopped => {
                self.start(&mut inner);
                debug!(time = %inner.time, "Playback started");
            }
        }
        inner.status
    }

    /// Stop and rewind to zero, whatever the current state.
    pub fn reset_timer(&self) {
        let mut inner = self.inner.lock();
        inner.stop();
        inner.time = PlayheadTime::ZERO;
        debug!("Playback reset");
    }

    /// Move the playhead without changing the transport state.
    /// Negative times clamp to zero.
    pub fn seek(&self, seconds: f64) {
        let mut inner = self.inner.lock();
        inner.time = PlayheadTime::from_seconds_f64(seconds);
        debug!(time = %inner.time, "Seeked");
    }

    /// Advance one step if running. Returns whether the playhead moved.
    pub fn tick(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.status != ClockStatus::Running {
            return false;
        }
        inner.time += self.step;
        true
    }

    fn start(&self, inner: &mut ClockInner) {
        inner.status = ClockStatus::Running;
        inner.generation += 1;

        let Some(runtime) = self
            .runtime
            .clone()
            .or_else(|| Handle::try_current().ok())
        else {
            debug!("No async runtime; playhead advances only through tick()");
            return;
        };
        let ticker = runtime.spawn(run_ticker(
            Arc::downgrade(&self.inner),
            inner.generation,
            self.step,
            self.interval,
        ));
        if let Some(stale) = inner.ticker.replace(ticker) {
            stale.abort();
        }
    }
}

impl Drop for PlaybackClock {
    fn drop(&mut self) {
        self.inner.lock().stop();
    }
}

async fn run_ticker(
    clock: Weak<Mutex<ClockInner>>,
    generation: u64,
    step: PlayheadTime,
    period: Duration,
) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let Some(clock) = clock.upgrade() else {
            return;
        };
        let mut inner = clock.lock();
        if inner.generation != generation || inner.status != ClockStatus::Running {
            return;
        }
        inner.time += step;
        trace!(time = %inner.time, "Tick");
    }
}
