//! Overlay lifecycle manager: the per-frame update/draw entry points the
//! host subscribes, plus click-to-dialog forwarding and slider write-back.
//!
//! One instance per session, created on session start and torn down on
//! session end. Nothing here blocks; preference writes are small synchronous
//! rewrites.

use crossbeam_channel::Sender;
use tracing::debug;

use crate::config::OverlayConfig;
use crate::draw::{DrawSurface, Rgba, TextMeasure};
use crate::layout::{self, SlotLayout};
use crate::participant::{Participant, ParticipantSource, PresenceOverride};
use crate::regions::{HitRegionManager, RegionHost, RegionId};
use crate::registry::ActiveSpeakerRegistry;
use crate::speaking::is_speaking;
use crate::volumes::VolumePreferenceStore;

const BAR_FILL: Rgba = Rgba::from_rgb(50, 205, 50);
const BAR_OUTLINE: Rgba = Rgba::from_rgb(127, 145, 153);
const LABEL_COLOR: Rgba = Rgba::from_rgb(255, 255, 255);
const LABEL_SHADOW: Rgba = Rgba::from_rgb(0, 0, 0);

/// Host-side frame context passed to both entry points.
#[derive(Debug, Clone, Copy)]
pub struct HudContext {
    pub screen_width: f32,
    /// An input-blocking menu is open; hit regions are hidden and disabled.
    pub menu_open: bool,
    /// The whole HUD is suppressed; nothing is drawn or clickable.
    pub hud_disabled: bool,
}

impl HudContext {
    fn regions_active(&self) -> bool {
        !self.menu_open && !self.hud_disabled
    }
}

/// Request to open the per-player volume/mute control. The dialog itself is
/// a collaborator on the receiving end of the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeDialogRequest {
    pub session_id: u64,
    pub name: String,
}

pub struct VoiceOverlay {
    config: OverlayConfig,
    registry: ActiveSpeakerRegistry,
    regions: HitRegionManager,
    volumes: VolumePreferenceStore,
    dialog_tx: Sender<VolumeDialogRequest>,
    /// Slots from the most recent update; the draw pass reads these so both
    /// passes agree on positions within a frame.
    slots: Vec<SlotLayout>,
}

impl VoiceOverlay {
    pub fn new(
        config: OverlayConfig,
        volumes: VolumePreferenceStore,
        dialog_tx: Sender<VolumeDialogRequest>,
    ) -> Self {
        Self {
            registry: ActiveSpeakerRegistry::new(config.clone()),
            regions: HitRegionManager::new(),
            volumes,
            dialog_tx,
            slots: Vec::new(),
            config,
        }
    }

    pub fn registry(&self) -> &ActiveSpeakerRegistry {
        &self.registry
    }

    pub fn volumes(&self) -> &VolumePreferenceStore {
        &self.volumes
    }

    /// Advance one frame: classify speakers, update indicator membership and
    /// timers, recompute layout, and synchronize hit regions. Call exactly
    /// once per rendered frame. A missing participant source makes this a
    /// safe no-op.
    pub fn update<H>(
        &mut self,
        dt: f32,
        source: Option<&mut dyn ParticipantSource>,
        presence: Option<&mut dyn PresenceOverride>,
        ui: &mut H,
        ctx: &HudContext,
    ) where
        H: RegionHost + TextMeasure,
    {
        let Some(source) = source else {
            return;
        };

        let local = source.local_session_id();
        let category_gain = source.category_gain();
        let participants = source.participants_mut();

        let outcome = self
            .registry
            .tick(dt, local, category_gain, participants, &self.volumes);
        if !outcome.added.is_empty() || !outcome.removed.is_empty() {
            debug!(
                added = outcome.added.len(),
                removed = outcome.removed.len(),
                active = self.registry.len(),
                "speaker set changed"
            );
        }

        if let Some(presence) = presence {
            for p in participants.iter() {
                let speaking =
                    p.session_id != local && is_speaking(p, category_gain, &self.config);
                presence.set_speaking(p.session_id, speaking);
            }
        }

        self.slots = layout::compute_positions(self.registry.entries(), ctx.screen_width, &*ui);
        // Region destruction for removed entries happens inside sync, in
        // this same tick.
        self.regions.sync(&self.slots, &mut *ui);
        self.regions.set_all_visible(ctx.regions_active(), &mut *ui);
    }

    /// Paint every indicator at the positions computed by the last update.
    /// Read-only with respect to overlay state.
    pub fn draw(&self, surface: &mut dyn DrawSurface, ctx: &HudContext) {
        if ctx.hud_disabled {
            return;
        }

        for (entry, slot) in self.registry.entries().iter().zip(&self.slots) {
            let alpha = (entry.fade_timer / self.config.fade_out_time).min(1.0);
            let (label_x, label_y) = slot.label_pos;
            surface.draw_text(
                label_x + 1.0,
                label_y + 1.0,
                &entry.name,
                LABEL_SHADOW.with_opacity(alpha),
            );
            surface.draw_text(label_x, label_y, &entry.name, LABEL_COLOR.with_opacity(alpha));
            surface.draw_progress_bar(
                slot.bar,
                entry.smoothed_amplitude,
                BAR_FILL.with_opacity(alpha),
                BAR_OUTLINE.with_opacity(alpha),
            );
        }
    }

    /// Forward a region activation to the volume-dialog opener. Returns
    /// whether the click mapped to a live speaker.
    pub fn handle_click(&self, region: RegionId) -> bool {
        let Some(session_id) = self.regions.participant_for(region) else {
            return false;
        };
        let Some(entry) = self
            .registry
            .entries()
            .iter()
            .find(|e| e.session_id == session_id)
        else {
            return false;
        };
        debug!(session_id, name = %entry.name, "voice bar clicked");
        let _ = self.dialog_tx.send(VolumeDialogRequest {
            session_id,
            name: entry.name.clone(),
        });
        true
    }

    /// Slider write-back from the volume dialog: apply to the live
    /// participant and persist immediately.
    pub fn set_participant_volume(&mut self, participant: &mut Participant, volume: f32) {
        let volume = volume.clamp(0.0, self.config.max_voice_boost);
        participant.voice_volume = volume;
        self.volumes.set(&participant.name, volume);
    }

    /// Session end: destroy every hit region and write the preference
    /// document one last time.
    pub fn teardown(&mut self, host: &mut dyn RegionHost) {
        self.regions.clear(host);
        self.registry.clear();
        self.slots.clear();
        self.volumes.persist();
    }
}
