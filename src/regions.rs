//! Hit-region bookkeeping so every visible indicator has exactly one
//! clickable region, and none outlives its indicator.
//!
//! The host owns the actual interactive widgets behind [`RegionHost`]; this
//! manager only tracks the pairing and drives create/move/show/destroy.

use tracing::debug;

use crate::draw::Rect;
use crate::layout::SlotLayout;

/// Opaque handle to a host-owned interactive region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(pub u64);

/// Interactive-region primitives supplied by the drawing surface.
pub trait RegionHost {
    fn create_region(&mut self, rect: Rect) -> RegionId;
    fn move_region(&mut self, id: RegionId, rect: Rect);
    fn set_region_visible(&mut self, id: RegionId, visible: bool);
    fn destroy_region(&mut self, id: RegionId);
}

#[derive(Debug, Clone)]
struct Binding {
    session_id: u64,
    region: RegionId,
}

pub struct HitRegionManager {
    bindings: Vec<Binding>,
    visible: bool,
}

impl Default for HitRegionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HitRegionManager {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            visible: true,
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Session id bound to `region`, if the region is still live.
    pub fn participant_for(&self, region: RegionId) -> Option<u64> {
        self.bindings
            .iter()
            .find(|b| b.region == region)
            .map(|b| b.session_id)
    }

    /// Bring the region set in line with this frame's slots: create regions
    /// for new slots, reposition survivors (even when the rect is unchanged,
    /// to tolerate screen-size changes), and destroy regions whose slot is
    /// gone. Destruction happens here, in the same tick the entry left the
    /// registry.
    pub fn sync(&mut self, slots: &[SlotLayout], host: &mut dyn RegionHost) {
        // Drop regions with no surviving slot first so a reused slot index
        // never briefly has two regions.
        self.bindings.retain(|binding| {
            let alive = slots.iter().any(|s| s.session_id == binding.session_id);
            if !alive {
                debug!(session_id = binding.session_id, "hit region destroyed");
                host.destroy_region(binding.region);
            }
            alive
        });

        for slot in slots {
            match self
                .bindings
                .iter()
                .find(|b| b.session_id == slot.session_id)
            {
                Some(binding) => host.move_region(binding.region, slot.hit),
                None => {
                    let region = host.create_region(slot.hit);
                    if !self.visible {
                        host.set_region_visible(region, false);
                    }
                    debug!(session_id = slot.session_id, ?region, "hit region created");
                    self.bindings.push(Binding {
                        session_id: slot.session_id,
                        region,
                    });
                }
            }
        }
    }

    /// Global visibility override: hide and disable every region while a
    /// blocking menu is open or the HUD is suppressed, restore when it
    /// clears. Regions are kept, not destroyed.
    pub fn set_all_visible(&mut self, visible: bool, host: &mut dyn RegionHost) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        for binding in &self.bindings {
            host.set_region_visible(binding.region, visible);
        }
    }

    /// Destroy every region (session teardown).
    pub fn clear(&mut self, host: &mut dyn RegionHost) {
        for binding in self.bindings.drain(..) {
            host.destroy_region(binding.region);
        }
    }
}
