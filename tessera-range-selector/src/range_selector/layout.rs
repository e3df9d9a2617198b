use tessera_ui::{Constraint, DimensionValue, Dp, ParentConstraint, Px, PxPosition};

use super::{HANDLE_DIAMETER, MIN_TOUCH_TARGET, TRACK_HEIGHT};

/// Resolved geometry of the range track for one frame.
///
/// The selectable span runs between the leftmost and rightmost handle center
/// positions, inset by half a handle on each side so a handle at either end
/// stays fully inside the component.
#[derive(Clone, Copy, PartialEq)]
pub(super) struct TrackLayout {
    pub component_width: Px,
    pub component_height: Px,
    pub track_width: Px,
    pub track_height: Px,
    pub track_y: Px,
    pub handle_diameter: Px,
    pub handle_y: Px,
}

pub(super) fn track_layout(component_width: Px) -> TrackLayout {
    let handle_diameter = HANDLE_DIAMETER.to_px();
    let track_height = TRACK_HEIGHT.to_px();
    let touch_target = MIN_TOUCH_TARGET.to_px();
    let component_height = Px(handle_diameter.0.max(track_height.0).max(touch_target.0));

    TrackLayout {
        component_width,
        component_height,
        track_width: Px((component_width.0 - handle_diameter.0).max(0)),
        track_height,
        track_y: Px((component_height.0 - track_height.0) / 2),
        handle_diameter,
        handle_y: Px((component_height.0 - handle_diameter.0) / 2),
    }
}

pub(super) fn resolve_component_width(parent_constraint: ParentConstraint<'_>) -> Px {
    let fallback = Dp(260.0).to_px();
    let merged = Constraint::new(
        parent_constraint.width(),
        DimensionValue::Fixed(TRACK_HEIGHT.to_px()),
    )
    .merge(parent_constraint);

    match merged.width {
        DimensionValue::Fixed(px) => px,
        DimensionValue::Fill { max, .. } | DimensionValue::Wrap { max, .. } => {
            max.unwrap_or(fallback)
        }
    }
}

impl TrackLayout {
    /// X position of the leftmost handle center.
    pub fn track_start(&self) -> f32 {
        self.handle_diameter.to_f32() / 2.0
    }

    /// Handle center position for a track fraction.
    pub fn handle_center_x(&self, fraction: f64) -> f32 {
        self.track_start() + fraction.clamp(0.0, 1.0) as f32 * self.track_width.to_f32()
    }

    /// Top-left position for a handle at the given fraction.
    pub fn handle_position(&self, fraction: f64) -> PxPosition {
        let left = self.handle_center_x(fraction) - self.handle_diameter.to_f32() / 2.0;
        PxPosition::new(Px(left.round() as i32), self.handle_y)
    }

    /// X offset and width of the highlighted span between the two handles.
    pub fn active_span(&self, low_fraction: f64, high_fraction: f64) -> (Px, Px) {
        let low_x = self.handle_center_x(low_fraction);
        let high_x = self.handle_center_x(high_fraction.max(low_fraction));
        (
            Px(low_x.round() as i32),
            Px((high_x - low_x).round().max(0.0) as i32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TrackLayout {
        track_layout(Px(220))
    }

    #[test]
    fn track_is_inset_by_one_handle() {
        let layout = layout();
        assert_eq!(layout.track_width, Px(220) - layout.handle_diameter);
        assert_eq!(
            layout.track_start(),
            layout.handle_diameter.to_f32() / 2.0
        );
    }

    #[test]
    fn handle_centers_cover_the_full_span() {
        let layout = layout();
        assert_eq!(layout.handle_center_x(0.0), layout.track_start());
        assert_eq!(
            layout.handle_center_x(1.0),
            layout.track_start() + layout.track_width.to_f32()
        );
        // Out-of-range fractions stay inside the track.
        assert_eq!(layout.handle_center_x(-0.5), layout.handle_center_x(0.0));
        assert_eq!(layout.handle_center_x(1.5), layout.handle_center_x(1.0));
    }

    #[test]
    fn active_span_runs_between_handle_centers() {
        let layout = layout();
        let (x, width) = layout.active_span(0.25, 0.75);
        let expected_x = layout.handle_center_x(0.25).round() as i32;
        let expected_width = (layout.track_width.to_f32() / 2.0).round() as i32;
        assert_eq!(x, Px(expected_x));
        assert_eq!(width, Px(expected_width));
    }

    #[test]
    fn inverted_span_collapses_to_zero_width() {
        let layout = layout();
        let (_, width) = layout.active_span(0.8, 0.2);
        assert_eq!(width, Px(0));
    }

    #[test]
    fn degenerate_component_width_yields_empty_track() {
        let layout = track_layout(Px(4));
        assert_eq!(layout.track_width, Px(0));
    }
}
