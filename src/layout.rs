//! Indicator geometry so drawing and hit regions agree on every pixel.
//!
//! Pure arithmetic: indicators stack top-down, right-aligned, one slot per
//! ordered registry entry. Degenerate screen sizes are not guarded; they
//! produce off-screen rectangles, which is display-only degradation.

use crate::draw::{Rect, TextMeasure};
use crate::registry::SpeakerEntry;

pub const BAR_WIDTH: f32 = 150.0;
pub const BAR_HEIGHT: f32 = 20.0;
pub const BAR_SPACING: f32 = 10.0;
pub const TEXT_HEIGHT: f32 = 15.0;
pub const RIGHT_MARGIN: f32 = 10.0;
pub const TOP_MARGIN: f32 = 100.0;
/// Gap between the label's right edge and the bar's left edge.
pub const LABEL_GAP: f32 = 5.0;
/// Padding added around bar + label when shaping the clickable region.
pub const HIT_PADDING: f32 = 5.0;

/// Vertical stride from one slot to the next.
pub fn slot_height() -> f32 {
    BAR_HEIGHT + TEXT_HEIGHT + BAR_SPACING
}

/// Geometry for one indicator slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotLayout {
    pub session_id: u64,
    /// Amplitude bar rectangle.
    pub bar: Rect,
    /// Top-left of the name label, immediately left of the bar.
    pub label_pos: (f32, f32),
    /// Measured extent of the name label.
    pub label_size: (f32, f32),
    /// Clickable rectangle enclosing bar and label plus padding.
    pub hit: Rect,
}

/// Compute a slot per entry, in entry order. Slot index is position in the
/// sequence, so membership changes snap everything below the change point.
pub fn compute_positions(
    entries: &[SpeakerEntry],
    screen_width: f32,
    measure: &dyn TextMeasure,
) -> Vec<SlotLayout> {
    let bar_x = screen_width - BAR_WIDTH - RIGHT_MARGIN;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let y = TOP_MARGIN + index as f32 * slot_height();
            let (label_w, label_h) = measure.measure_text(&entry.name);
            let label_x = bar_x - label_w - LABEL_GAP;
            let hit = Rect::new(
                label_x - HIT_PADDING,
                y - HIT_PADDING,
                label_w + LABEL_GAP + BAR_WIDTH + HIT_PADDING * 2.0,
                label_h.max(BAR_HEIGHT) + HIT_PADDING * 2.0,
            );
            SlotLayout {
                session_id: entry.session_id,
                bar: Rect::new(bar_x, y, BAR_WIDTH, BAR_HEIGHT),
                label_pos: (label_x, y),
                label_size: (label_w, label_h),
                hit,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedFont;

    impl TextMeasure for FixedFont {
        fn measure_text(&self, text: &str) -> (f32, f32) {
            (text.chars().count() as f32 * 7.0, TEXT_HEIGHT)
        }
    }

    fn entry(session_id: u64, name: &str) -> SpeakerEntry {
        SpeakerEntry {
            session_id,
            name: name.to_string(),
            fade_timer: 0.9,
            smoothed_amplitude: 0.5,
        }
    }

    #[test]
    fn bars_are_right_aligned_and_stacked() {
        let entries = vec![entry(1, "Dan"), entry(2, "Erin")];
        let slots = compute_positions(&entries, 1920.0, &FixedFont);

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].bar.x, 1920.0 - BAR_WIDTH - RIGHT_MARGIN);
        assert_eq!(slots[0].bar.y, TOP_MARGIN);
        assert_eq!(slots[1].bar.y, TOP_MARGIN + slot_height());
        assert_eq!(slots[0].bar.x, slots[1].bar.x);
    }

    #[test]
    fn slot_index_follows_entry_order() {
        // After Dan leaves, Erin holds slot 0 and Finn appends at slot 1.
        let entries = vec![entry(2, "Erin"), entry(3, "Finn")];
        let slots = compute_positions(&entries, 1920.0, &FixedFont);
        assert_eq!(slots[0].session_id, 2);
        assert_eq!(slots[0].bar.y, TOP_MARGIN);
        assert_eq!(slots[1].session_id, 3);
        assert_eq!(slots[1].bar.y, TOP_MARGIN + slot_height());
    }

    #[test]
    fn label_sits_left_of_the_bar() {
        let entries = vec![entry(1, "Alice")];
        let slots = compute_positions(&entries, 1920.0, &FixedFont);
        let slot = &slots[0];
        assert_eq!(
            slot.label_pos.0,
            slot.bar.x - slot.label_size.0 - LABEL_GAP
        );
        assert_eq!(slot.label_pos.1, slot.bar.y);
    }

    #[test]
    fn hit_rect_encloses_bar_and_label_with_padding() {
        let entries = vec![entry(1, "Alice")];
        let slots = compute_positions(&entries, 1920.0, &FixedFont);
        let slot = &slots[0];

        assert!(slot.hit.x <= slot.label_pos.0 - HIT_PADDING);
        assert!(slot.hit.x + slot.hit.w >= slot.bar.x + slot.bar.w + HIT_PADDING);
        assert!(slot.hit.y <= slot.bar.y - HIT_PADDING);
        assert!(slot.hit.y + slot.hit.h >= slot.bar.y + slot.bar.h + HIT_PADDING);
    }

    #[test]
    fn longer_names_widen_the_hit_rect() {
        let short = compute_positions(&[entry(1, "Al")], 1920.0, &FixedFont);
        let long = compute_positions(&[entry(1, "Bartholomew")], 1920.0, &FixedFont);
        assert!(long[0].hit.w > short[0].hit.w);
        // Right edge stays pinned to the bar regardless of name length.
        let right = |slot: &SlotLayout| slot.hit.x + slot.hit.w;
        assert_eq!(right(&long[0]), right(&short[0]));
    }

    #[test]
    fn degenerate_screen_width_still_produces_rects() {
        // Not a fault: rects simply land off-screen.
        let entries = vec![entry(1, "Alice")];
        let slots = compute_positions(&entries, 0.0, &FixedFont);
        assert_eq!(slots.len(), 1);
        assert!(slots[0].bar.x < 0.0);
    }
}
