use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Recurring tick that drives the viewer's progress timer.
#[async_trait]
pub trait TickSource: Send {
    async fn next_tick(&mut self);
}

/// Ticks every `period` on the tokio clock, first tick one period from now.
///
/// Under a paused tokio clock (`tokio::time::pause`) ticks advance virtually.
pub struct IntervalTicks {
    interval: Interval,
}

impl IntervalTicks {
    pub fn new(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

#[async_trait]
impl TickSource for IntervalTicks {
    async fn next_tick(&mut self) {
        self.interval.tick().await;
    }
}
