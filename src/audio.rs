//! Audible cues played on some joint selections
//!
//! `CueBank` decides whether a selection plays a clip and which one, using an
//! injected RNG so tests can seed it. `CuePlayer` starts playback and returns
//! immediately; overlapping clips are allowed.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::WidgetConfig;

/// Clip choice for selections
#[derive(Debug, Clone)]
pub struct CueBank<R: RngCore> {
    clips: [PathBuf; 2],
    odds: u32,
    enabled: bool,
    rng: R,
}

impl<R: RngCore> CueBank<R> {
    pub fn new(clips: [PathBuf; 2], odds: u32, enabled: bool, rng: R) -> Self {
        Self {
            clips,
            odds,
            enabled,
            rng,
        }
    }

    /// Roll for a cue: one in `odds`, then either clip with equal chance
    pub fn pick(&mut self) -> Option<&Path> {
        if !self.enabled || self.odds == 0 {
            return None;
        }
        if self.rng.random_range(0..self.odds) != 0 {
            return None;
        }
        let index = self.rng.random_range(0..self.clips.len());
        Some(&self.clips[index])
    }
}

impl CueBank<ChaCha8Rng> {
    /// Bank configured from `config`, seeded from `cue_seed` when set
    pub fn from_config(config: &WidgetConfig) -> Self {
        let seed = config.cue_seed.unwrap_or_else(rand::random);
        Self::new(
            config.cue_clips.clone(),
            config.cue_odds,
            config.play_cues,
            ChaCha8Rng::seed_from_u64(seed),
        )
    }
}

/// Fire-and-forget clip playback
pub trait CuePlayer {
    fn play(&self, clip: &Path);
}

/// Plays clips by spawning an external program (e.g. `paplay`)
#[derive(Debug, Clone)]
pub struct CommandCuePlayer {
    program: String,
}

impl CommandCuePlayer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CommandCuePlayer {
    /// Start the program and reap it from a detached thread once it exits
    fn spawn(&self, clip: &Path) -> std::io::Result<JoinHandle<()>> {
        let mut child = Command::new(&self.program)
            .arg(clip)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        let program = self.program.clone();
        Ok(thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                log::warn!("Cue player {} exited with {}", program, status);
            }
            Ok(_) => {}
            Err(e) => log::warn!("Failed to wait for cue player {}: {}", program, e),
        }))
    }
}

impl CuePlayer for CommandCuePlayer {
    fn play(&self, clip: &Path) {
        log::debug!("Playing cue {} with {}", clip.display(), self.program);
        if let Err(e) = self.spawn(clip) {
            log::error!("Failed to play cue {}: {}", clip.display(), e);
        }
    }
}

/// Logs cues instead of playing them
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&self, clip: &Path) {
        log::info!("Cue {} (silent)", clip.display());
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn clips() -> [PathBuf; 2] {
        [PathBuf::from("ouch.mp3"), PathBuf::from("getoff.mp3")]
    }

    #[test]
    fn test_disabled_never_plays() {
        let mut bank = CueBank::new(clips(), 1, false, ChaCha8Rng::seed_from_u64(1));
        for _ in 0..50 {
            assert!(bank.pick().is_none());
        }
    }

    #[test]
    fn test_odds_of_one_always_plays() {
        let mut bank = CueBank::new(clips(), 1, true, ChaCha8Rng::seed_from_u64(1));
        let mut seen = [false; 2];
        for _ in 0..200 {
            let clip = bank.pick().unwrap().to_path_buf();
            let index = clips().iter().position(|c| *c == clip).unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn test_one_in_five_rate() {
        let mut bank = CueBank::new(clips(), 5, true, ChaCha8Rng::seed_from_u64(42));
        let hits = (0..10_000).filter(|_| bank.pick().is_some()).count();
        assert!((1_700..2_300).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = CueBank::new(clips(), 5, true, ChaCha8Rng::seed_from_u64(9));
        let mut b = CueBank::new(clips(), 5, true, ChaCha8Rng::seed_from_u64(9));
        for _ in 0..100 {
            assert_eq!(
                a.pick().map(Path::to_path_buf),
                b.pick().map(Path::to_path_buf)
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_command_player_reaps_child() {
        let player = CommandCuePlayer::new("true");
        let reaper = player.spawn(Path::new("ouch.mp3")).unwrap();
        // join returns only after wait() has collected the exit status
        reaper.join().unwrap();
    }

    #[test]
    fn test_command_player_missing_program() {
        let player = CommandCuePlayer::new("/nonexistent/cue-player");
        assert!(player.spawn(Path::new("ouch.mp3")).is_err());
        player.play(Path::new("ouch.mp3"));
    }

    #[test]
    fn test_from_config() {
        let config = WidgetConfig {
            cue_seed: Some(3),
            play_cues: false,
            ..Default::default()
        };
        let mut bank = CueBank::from_config(&config);
        assert!(bank.pick().is_none());
    }
}
