//! Speaker-activity overlay core for a multiplayer voice chat HUD.
//!
//! Samples a per-participant amplitude signal every frame, keeps a fading
//! indicator per active speaker, lays the indicators out with matching
//! clickable regions, and persists per-player volume preferences. Rendering,
//! audio playback, networking, and dialog construction stay on the host side
//! of the trait seams in [`draw`], [`participant`], and [`regions`].

pub mod config;
pub mod draw;
pub mod layout;
pub mod overlay;
pub mod participant;
pub mod regions;
pub mod registry;
pub mod speaking;
mod telemetry;
pub mod volumes;

pub use config::OverlayConfig;
pub use draw::{DrawSurface, Rect, Rgba, TextMeasure};
pub use overlay::{HudContext, VoiceOverlay, VolumeDialogRequest};
pub use participant::{Participant, ParticipantSource, PresenceOverride};
pub use regions::{HitRegionManager, RegionHost, RegionId};
pub use registry::{ActiveSpeakerRegistry, SpeakerEntry, TickOutcome};
pub use telemetry::{init_tracing, trace_log_path};
pub use volumes::{VolumePreferenceStore, DEFAULT_VOLUME};
