//! Battery monitor state machine and poll loop.
//!
//! Transitions are edge-triggered: a notification fires only when the
//! classified level changes, never repeatedly while a level is
//! sustained, so a short poll interval cannot spam alerts.

use std::time::Duration;
use tracing::{debug, info, warn};

use crate::battery::{BatteryError, BatterySource};
use crate::config::Config;
use crate::level::{classify, Level};
use crate::notifier::{Notifier, Urgency};
use crate::sound::SoundPlayer;

pub struct BatteryMonitor<B, N, P> {
    config: Config,
    battery: B,
    notifier: N,
    sound: P,
    level: Level,
    // 0 = no notification visible. Nonzero exactly when level != Normal.
    notification_id: u32,
}

impl<B, N, P> BatteryMonitor<B, N, P>
where
    B: BatterySource,
    N: Notifier,
    P: SoundPlayer,
{
    pub fn new(config: Config, battery: B, notifier: N, sound: P) -> Self {
        Self {
            config,
            battery,
            notifier,
            sound,
            level: Level::Normal,
            notification_id: 0,
        }
    }

    /// Run one check immediately, then one per poll interval, forever.
    /// A failed check is logged and never stops the loop.
    pub async fn run(&mut self) {
        info!(
            "Starting battery monitor (poll interval: {}s)",
            self.config.poll_interval
        );
        info!(
            "Low threshold: {}%, critical threshold: {}%",
            self.config.low_battery.threshold, self.config.critical_battery.threshold
        );

        let mut ticker = tokio::time::interval(Duration::from_secs(self.config.poll_interval));
        loop {
            ticker.tick().await;
            if let Err(e) = self.check() {
                warn!("Check failed: {e}");
            }
        }
    }

    /// One poll tick: classify the charge and apply the minimal
    /// transition.
    fn check(&mut self) -> Result<(), BatteryError> {
        let charging = self.battery.is_charging()?;

        if charging {
            // On mains power classification is skipped entirely.
            if self.level != Level::Normal {
                info!("Power connected, clearing notifications");
                self.clear();
            }
            return Ok(());
        }

        let capacity = self.battery.capacity()?;
        debug!("Battery: {capacity}% (discharging)");

        let new_level = classify(
            capacity,
            charging,
            &self.config.low_battery,
            &self.config.critical_battery,
        );

        if new_level != self.level && new_level != Level::Normal {
            self.raise(new_level, capacity);
        } else if new_level == Level::Normal && self.level != Level::Normal {
            info!("Battery recovered ({capacity}%)");
            self.clear();
        }

        Ok(())
    }

    /// Enter or escalate an alert level: send the new notification,
    /// close the stale one, play the cue. On send failure nothing is
    /// advanced, so the next tick retries the same transition.
    fn raise(&mut self, new_level: Level, capacity: u8) {
        info!("Battery level changed to: {new_level} ({capacity}%)");

        let spec = match new_level {
            Level::Critical => &self.config.critical_battery,
            _ => &self.config.low_battery,
        };
        let body = spec.format_message(capacity);

        match self
            .notifier
            .send(&spec.title, &body, Urgency::Critical, &spec.icon)
        {
            Ok(id) => {
                // The sink does no implicit replacement; drop the stale
                // alert ourselves.
                if self.notification_id != 0 && self.notification_id != id {
                    if let Err(e) = self.notifier.close(self.notification_id) {
                        warn!("Failed to close notification: {e}");
                    }
                }
                self.notification_id = id;
                if let Some(sound) = &spec.sound {
                    self.sound.play(sound);
                }
                self.level = new_level;
            }
            Err(e) => warn!("Failed to send notification: {e}"),
        }
    }

    fn clear(&mut self) {
        if let Err(e) = self.notifier.close(self.notification_id) {
            warn!("Failed to close notification: {e}");
        }
        self.notification_id = 0;
        self.level = Level::Normal;
    }
}
