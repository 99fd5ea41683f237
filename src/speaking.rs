//! Per-frame speaking classification.
//!
//! Pure threshold decision with no smoothing; hysteresis lives in the
//! registry's fade timer, not here.

use crate::config::OverlayConfig;
use crate::participant::Participant;

/// Whether `participant` is audibly speaking this frame.
///
/// Effective volume is `amplitude * gain * category_gain * voice_volume`.
/// Either mute flag, a missing stream, or a stream that is not playing
/// short-circuits to `false` regardless of amplitude.
pub fn is_speaking(participant: &Participant, category_gain: f32, config: &OverlayConfig) -> bool {
    if participant.muted || participant.muted_locally {
        return false;
    }
    if !participant.stream_active || !participant.stream_playing {
        return false;
    }

    let effective =
        participant.amplitude * participant.gain * category_gain * participant.voice_volume;
    effective > config.voice_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker(amplitude: f32) -> Participant {
        let mut p = Participant::new(7, "Alice");
        p.amplitude = amplitude;
        p.stream_active = true;
        p.stream_playing = true;
        p
    }

    #[test]
    fn amplitude_above_threshold_is_speaking() {
        // 0.5 * 1 * 1 * 1 > 0.01
        let config = OverlayConfig::default();
        assert!(is_speaking(&speaker(0.5), 1.0, &config));
    }

    #[test]
    fn barely_above_threshold_still_counts() {
        let config = OverlayConfig::default();
        assert!(is_speaking(&speaker(0.011), 1.0, &config));
        assert!(!is_speaking(&speaker(0.01), 1.0, &config));
    }

    #[test]
    fn local_mute_wins_over_any_amplitude() {
        let config = OverlayConfig::default();
        let mut p = speaker(0.9);
        p.muted_locally = true;
        assert!(!is_speaking(&p, 1.0, &config));
    }

    #[test]
    fn global_mute_wins_over_any_amplitude() {
        let config = OverlayConfig::default();
        let mut p = speaker(0.9);
        p.muted = true;
        assert!(!is_speaking(&p, 1.0, &config));
    }

    #[test]
    fn missing_or_paused_stream_is_silent() {
        let config = OverlayConfig::default();
        let mut p = speaker(0.9);
        p.stream_active = false;
        assert!(!is_speaking(&p, 1.0, &config));

        let mut p = speaker(0.9);
        p.stream_playing = false;
        assert!(!is_speaking(&p, 1.0, &config));
    }

    #[test]
    fn gains_multiply_into_the_decision() {
        let config = OverlayConfig::default();
        // 0.5 * 1 * 0.01 = 0.005, under threshold once the category is ducked.
        assert!(!is_speaking(&speaker(0.5), 0.01, &config));

        // A boosted per-player volume lifts a quiet voice over the line.
        let mut p = speaker(0.008);
        p.voice_volume = 2.0;
        assert!(is_speaking(&p, 1.0, &config));
    }
}
