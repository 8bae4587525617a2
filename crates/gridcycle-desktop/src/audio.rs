use macroquad::audio::{PlaySoundParams, Sound, load_sound, play_sound, stop_sound};

use gridcycle_core::game_trait::GameEvent;

pub const BACKGROUND_TRACK: &str = "assets/background.ogg";
pub const CRASH_CUE: &str = "assets/crash.wav";
pub const POWER_UP_CUE: &str = "assets/power_up.wav";

/// One-shot cues the game can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Crash,
    PowerUp,
}

impl AudioEvent {
    pub fn from_game_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Crashed { .. } => Some(AudioEvent::Crash),
            GameEvent::PowerUpCollected { .. } => Some(AudioEvent::PowerUp),
            GameEvent::ScoreUpdate { .. } | GameEvent::RoundComplete => None,
        }
    }
}

/// Queue of audio events to be played at the end of the frame.
#[derive(Default)]
pub struct AudioEventQueue {
    events: Vec<AudioEvent>,
}

impl AudioEventQueue {
    /// Queue the cue for every game event that has one.
    pub fn extend_from_game_events(&mut self, events: &[GameEvent]) {
        self.events
            .extend(events.iter().filter_map(AudioEvent::from_game_event));
    }

    /// Play and drain every queued cue. Returns how many were handled.
    pub fn process(&mut self, manager: &AudioManager) -> usize {
        let handled = self.events.len();
        for event in self.events.drain(..) {
            manager.play(event);
        }
        handled
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioSettings {
    pub effects_volume: f32,
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            effects_volume: 0.7,
            music_volume: 0.4,
            muted: false,
        }
    }
}

#[derive(Debug)]
pub enum AudioError {
    Load { path: &'static str, reason: String },
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load { path, reason } => write!(f, "failed to load {path}: {reason}"),
        }
    }
}

impl std::error::Error for AudioError {}

struct Cues {
    background: Sound,
    crash: Sound,
    power_up: Sound,
}

/// Best-effort playback. Without cues every call is a no-op.
pub struct AudioManager {
    cues: Option<Cues>,
    settings: AudioSettings,
}

impl AudioManager {
    pub fn silent(settings: AudioSettings) -> Self {
        Self {
            cues: None,
            settings,
        }
    }

    /// Load all three assets. Any failure disables audio for the session.
    pub async fn load(settings: AudioSettings) -> Self {
        if settings.muted {
            tracing::info!("Audio muted");
            return Self::silent(settings);
        }
        match load_cues().await {
            Ok(cues) => {
                tracing::info!("Audio ready");
                Self {
                    cues: Some(cues),
                    settings,
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Audio disabled, continuing silently");
                Self::silent(settings)
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.cues.is_some() && !self.settings.muted
    }

    pub fn start_music(&self) {
        let Some(cues) = self.active_cues() else {
            return;
        };
        play_sound(
            &cues.background,
            PlaySoundParams {
                looped: true,
                volume: self.settings.music_volume,
            },
        );
    }

    pub fn stop_music(&self) {
        if let Some(cues) = &self.cues {
            stop_sound(&cues.background);
        }
    }

    pub fn play(&self, event: AudioEvent) {
        let Some(cues) = self.active_cues() else {
            return;
        };
        let sound = match event {
            AudioEvent::Crash => &cues.crash,
            AudioEvent::PowerUp => &cues.power_up,
        };
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: self.settings.effects_volume,
            },
        );
    }

    fn active_cues(&self) -> Option<&Cues> {
        self.cues.as_ref().filter(|_| !self.settings.muted)
    }
}

async fn load_cue(path: &'static str) -> Result<Sound, AudioError> {
    load_sound(path).await.map_err(|e| AudioError::Load {
        path,
        reason: format!("{e:?}"),
    })
}

async fn load_cues() -> Result<Cues, AudioError> {
    Ok(Cues {
        background: load_cue(BACKGROUND_TRACK).await?,
        crash: load_cue(CRASH_CUE).await?,
        power_up: load_cue(POWER_UP_CUE).await?,
    })
}
