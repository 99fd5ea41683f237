//! Overlay tunables. Defaults carry the production constants.

/// Tunable parameters for speaking classification and indicator lifetime.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Minimum effective volume (amplitude * gains) that counts as speaking.
    pub voice_threshold: f32,
    /// Seconds an indicator lingers after its speaker goes quiet.
    pub fade_out_time: f32,
    /// Upper bound for a per-player volume preference.
    pub max_voice_boost: f32,
    /// Visual gain applied to the bar fill so quiet voices stay visible.
    pub amplitude_display_boost: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            voice_threshold: 0.01,
            fade_out_time: 0.9,
            max_voice_boost: 2.0,
            amplitude_display_boost: 2.0,
        }
    }
}
