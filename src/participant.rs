//! Participant snapshot and the collaborator seams the host implements.

/// Per-frame view of one connected participant, as reported by the network
/// layer. The overlay treats everything as read-only except `voice_volume`,
/// which the preference-application path may write.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    /// Stable session identifier, unique for the lifetime of the connection.
    pub session_id: u64,
    /// Display name. Also the key for the persisted volume preference.
    pub name: String,
    /// Raw voice amplitude for this frame, >= 0.
    pub amplitude: f32,
    /// Output gain applied to this participant's stream, >= 0.
    pub gain: f32,
    /// Muted for everyone (server-side).
    pub muted: bool,
    /// Muted only on this client.
    pub muted_locally: bool,
    /// Whether a voice stream exists for this participant.
    pub stream_active: bool,
    /// Whether that stream is currently playing out.
    pub stream_playing: bool,
    /// Per-player volume scalar, in [0, max boost].
    pub voice_volume: f32,
}

impl Participant {
    /// Neutral snapshot: unity gain and volume, no stream, not muted.
    pub fn new(session_id: u64, name: impl Into<String>) -> Self {
        Self {
            session_id,
            name: name.into(),
            amplitude: 0.0,
            gain: 1.0,
            muted: false,
            muted_locally: false,
            stream_active: false,
            stream_playing: false,
            voice_volume: 1.0,
        }
    }
}

/// The network client's view of the session, polled once per frame.
pub trait ParticipantSource {
    /// Session id of the local player, always excluded from the overlay.
    fn local_session_id(&self) -> u64;

    /// Category-wide gain multiplier for the voice channel.
    fn category_gain(&self) -> f32 {
        1.0
    }

    /// Currently connected participants. Mutable so the overlay can apply a
    /// saved volume preference when a speaker first appears.
    fn participants_mut(&mut self) -> &mut [Participant];
}

/// Host extension point for highlighting whoever is speaking in-world
/// (e.g. forcing a nameplate visible). Called once per participant per tick.
pub trait PresenceOverride {
    fn set_speaking(&mut self, session_id: u64, speaking: bool);
}
