//! Best-effort sound playback via an external player.
//!
//! Playback is dispatched as a detached task: no result channel, no
//! join point, and no effect on the poll loop if still running when
//! the next tick begins.

use tracing::debug;

use crate::config::expand_home;

/// Fire-and-forget audio cue. Implementations must never block the
/// caller or propagate failure.
pub trait SoundPlayer {
    fn play(&self, path: &str);
}

/// Plays through `paplay`, falling back to `aplay -q` once, then gives
/// up silently.
pub struct CommandSoundPlayer;

impl SoundPlayer for CommandSoundPlayer {
    fn play(&self, path: &str) {
        if path.is_empty() {
            return;
        }

        let path = expand_home(path);
        debug!("Playing sound {}", path.display());

        tokio::spawn(async move {
            let played = tokio::process::Command::new("paplay")
                .arg(&path)
                .status()
                .await
                .map(|status| status.success())
                .unwrap_or(false);

            if !played {
                let _ = tokio::process::Command::new("aplay")
                    .arg("-q")
                    .arg(&path)
                    .status()
                    .await;
            }
        });
    }
}
