//! Active-speaker registry: which participants currently have an indicator.
//!
//! Two states per participant: no entry, or an entry whose `fade_timer`
//! counts down whenever the speaker is quiet. Speaking refreshes the timer
//! to the full fade-out window (instant attack, timed decay); the entry is
//! removed the exact tick the timer reaches zero. Entries keep insertion
//! order, so a speaker who drops out and returns is appended at the end.

use tracing::debug;

use crate::config::OverlayConfig;
use crate::participant::Participant;
use crate::speaking::is_speaking;
use crate::volumes::VolumePreferenceStore;

/// One on-screen indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerEntry {
    pub session_id: u64,
    /// Display name captured at creation, used for the label and the
    /// preference key.
    pub name: String,
    /// Seconds left before eviction once the speaker goes quiet.
    pub fade_timer: f32,
    /// Bar fill in [0, 1]. Rendering only; independent of the speaking bool.
    pub smoothed_amplitude: f32,
}

/// Membership changes produced by one tick, so paired resources (hit
/// regions) can be synchronized in the same frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickOutcome {
    pub added: Vec<u64>,
    pub removed: Vec<u64>,
}

pub struct ActiveSpeakerRegistry {
    config: OverlayConfig,
    entries: Vec<SpeakerEntry>,
}

impl ActiveSpeakerRegistry {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Ordered snapshot of the current indicators, insertion order.
    pub fn entries(&self) -> &[SpeakerEntry] {
        &self.entries
    }

    pub fn contains(&self, session_id: u64) -> bool {
        self.entries.iter().any(|e| e.session_id == session_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Advance the registry by `dt` seconds against this frame's participant
    /// list. Call exactly once per rendered frame.
    ///
    /// A participant absent from `participants` counts as not speaking and
    /// decays through the normal fade-out. The local player is never added.
    /// When a new entry is created for a player with a saved volume, that
    /// volume is applied to the participant (applied, not re-saved).
    pub fn tick(
        &mut self,
        dt: f32,
        local_session_id: u64,
        category_gain: f32,
        participants: &mut [Participant],
        volumes: &VolumePreferenceStore,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        let config = &self.config;

        // Phase 1: refresh or decay existing entries.
        for entry in &mut self.entries {
            let participant = participants
                .iter()
                .find(|p| p.session_id == entry.session_id);
            let speaking = participant
                .map(|p| is_speaking(p, category_gain, config))
                .unwrap_or(false);

            if speaking {
                entry.fade_timer = config.fade_out_time;
                if let Some(p) = participant {
                    entry.smoothed_amplitude =
                        (p.amplitude * config.amplitude_display_boost).min(1.0);
                }
            } else {
                entry.fade_timer -= dt;
                entry.smoothed_amplitude =
                    (entry.smoothed_amplitude - dt / config.fade_out_time).max(0.0);
            }
        }

        // Phase 2: evict expired entries this same tick.
        self.entries.retain(|entry| {
            if entry.fade_timer <= 0.0 {
                debug!(session_id = entry.session_id, name = %entry.name, "voice bar removed");
                outcome.removed.push(entry.session_id);
                false
            } else {
                true
            }
        });

        // Phase 3: add entries for newly speaking participants.
        for participant in participants.iter_mut() {
            if participant.session_id == local_session_id {
                continue;
            }
            if self.contains(participant.session_id) {
                continue;
            }
            if !is_speaking(participant, category_gain, config) {
                continue;
            }

            if let Some(saved) = volumes.lookup(&participant.name) {
                participant.voice_volume = saved;
            }
            debug!(
                session_id = participant.session_id,
                name = %participant.name,
                "voice bar added"
            );
            self.entries.push(SpeakerEntry {
                session_id: participant.session_id,
                name: participant.name.clone(),
                fade_timer: config.fade_out_time,
                smoothed_amplitude: (participant.amplitude * config.amplitude_display_boost)
                    .min(1.0),
            });
            outcome.added.push(participant.session_id);
        }

        outcome
    }
}
