use tessera_ui::{
    CallbackWith, CursorEventContent, Focus, InputHandlerInput, State,
    accesskit::{Action, Role},
    winit::window::CursorIcon,
};

use tessera_components::pos_misc::is_position_in_component;

use crate::scale::RangeScale;

use super::{MIN_TOUCH_TARGET, RangeTrackArgs, layout::TrackLayout};

/// One of the two endpoints of a range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// The lower endpoint.
    Low,
    /// The upper endpoint.
    High,
}

/// Controller for the `range_selector` component.
pub struct RangeSelectorController {
    pub(crate) is_hovered: bool,
    pub(crate) active_handle: Option<Handle>,
    pub(crate) focus_low: Focus,
    pub(crate) focus_high: Focus,
}

impl RangeSelectorController {
    /// Creates a new range selector controller.
    pub fn new() -> Self {
        Self {
            is_hovered: false,
            active_handle: None,
            focus_low: Focus::new(),
            focus_high: Focus::new(),
        }
    }

    /// The handle currently being dragged, if any.
    pub fn active_handle(&self) -> Option<Handle> {
        self.active_handle
    }

    /// Returns whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active_handle.is_some()
    }

    /// Returns whether the cursor is hovering over the track.
    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }
}

impl Default for RangeSelectorController {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamps a dragged value against the opposite endpoint: the low handle may
/// never pass the current high value and the high handle may never pass the
/// current low value.
pub(super) fn constrain_drag(handle: Handle, value: f64, low: f64, high: f64) -> f64 {
    match handle {
        Handle::Low => value.min(high),
        Handle::High => value.max(low),
    }
}

/// The legal interval for one handle, reflecting the live mutual constraint.
pub(super) fn handle_bounds(handle: Handle, scale: &RangeScale, low: f64, high: f64) -> (f64, f64) {
    match handle {
        Handle::Low => (scale.lower_bound(), high),
        Handle::High => (low, scale.upper_bound()),
    }
}

/// Picks the handle a press lands on, or `None` when the press misses both.
///
/// The nearer handle wins. When the handles overlap, the side of the shared
/// center the cursor falls on decides: the left side picks the low handle
/// (which can still move left), the right side the high handle.
pub(super) fn pick_handle(
    cursor_x: f32,
    low_center: f32,
    high_center: f32,
    hit_radius: f32,
) -> Option<Handle> {
    let dist_low = (cursor_x - low_center).abs();
    let dist_high = (cursor_x - high_center).abs();
    if dist_low > hit_radius && dist_high > hit_radius {
        return None;
    }
    if dist_low < dist_high {
        Some(Handle::Low)
    } else if dist_high < dist_low {
        Some(Handle::High)
    } else if cursor_x < high_center {
        Some(Handle::Low)
    } else {
        Some(Handle::High)
    }
}

fn hit_radius() -> f32 {
    MIN_TOUCH_TARGET.to_px().to_f32() / 2.0
}

pub(super) fn handle_track_input(
    input: &mut InputHandlerInput<'_>,
    state: &State<RangeSelectorController>,
    args: &RangeTrackArgs,
    layout: &TrackLayout,
) {
    if args.disabled {
        state.with_mut(|inner| {
            inner.is_hovered = false;
            inner.active_handle = None;
        });
        return;
    }

    let in_component = input
        .cursor_position_rel
        .map(|pos| is_position_in_component(input.computed_data, pos))
        .unwrap_or(false);

    state.with_mut(|inner| inner.is_hovered = in_component);
    if in_component {
        input.requests.cursor_icon = CursorIcon::Pointer;
    }

    // Once a drag is active the gesture follows the cursor wherever it goes;
    // an idle track ignores everything outside its own bounds.
    if !in_component && !state.with(|s| s.is_dragging()) {
        return;
    }

    let cursor_x = input.cursor_position_rel.map(|pos| pos.x.to_f32());
    let low_fraction = args.scale.to_fraction(args.low);
    let high_fraction = args.scale.to_fraction(args.high);
    let mut drag_started = false;

    for event in input.cursor_events.iter() {
        match &event.content {
            CursorEventContent::Pressed(_) => {
                if let Some(x) = cursor_x
                    && let Some(handle) = pick_handle(
                        x,
                        layout.handle_center_x(low_fraction),
                        layout.handle_center_x(high_fraction),
                        hit_radius(),
                    )
                {
                    state.with_mut(|inner| {
                        inner.active_handle = Some(handle);
                        match handle {
                            Handle::Low => inner.focus_low.request_focus(),
                            Handle::High => inner.focus_high.request_focus(),
                        }
                    });
                    drag_started = true;
                    tracing::trace!(?handle, "range drag started");
                }
            }
            CursorEventContent::Released(_) => {
                if state.with_mut(|inner| inner.active_handle.take()).is_some() {
                    tracing::trace!("range drag ended");
                }
            }
            _ => {}
        }
    }

    if let (Some(handle), Some(x)) = (state.with(|s| s.active_handle), cursor_x) {
        // The press itself only arms the drag; values change on movement.
        // Each move resolves the value from the current cursor position from
        // scratch, so coalesced or repeated events cannot drift the state.
        if !drag_started {
            let mapped =
                args.scale
                    .value_at_pointer(x, layout.track_start(), layout.track_width.to_f32());
            let constrained = constrain_drag(handle, mapped, args.low, args.high);
            match handle {
                Handle::Low if constrained != args.low => args.on_low_change.call(constrained),
                Handle::High if constrained != args.high => args.on_high_change.call(constrained),
                _ => {}
            }
        }
        // The gesture owns the pointer until release.
        input.block_cursor();
    }
}

#[derive(Clone, PartialEq)]
pub(super) struct HandleAccessibilityArgs {
    pub key: &'static str,
    pub label: String,
    pub description: Option<String>,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub scale: RangeScale,
    pub disabled: bool,
    pub on_change: CallbackWith<f64>,
}

pub(super) fn apply_handle_accessibility(
    input: &InputHandlerInput<'_>,
    args: &HandleAccessibilityArgs,
) {
    let mut builder = input
        .accessibility()
        .role(Role::Slider)
        .key(args.key)
        .label(args.label.clone());
    if let Some(description) = args.description.as_ref() {
        builder = builder.description(description.clone());
    }
    builder = builder
        .numeric_value(args.value)
        .numeric_range(args.min, args.max);
    if args.disabled {
        builder = builder.disabled();
    } else {
        builder = builder
            .focusable()
            .action(Action::Increment)
            .action(Action::Decrement);
    }
    builder.commit();

    if args.disabled {
        return;
    }

    let args = args.clone();
    input.set_accessibility_action_handler(move |action| {
        let steps = match action {
            Action::Increment => 1,
            Action::Decrement => -1,
            _ => return,
        };
        let next = args
            .scale
            .nudged(args.value, steps)
            .clamp(args.min, args.max);
        if next != args.value {
            args.on_change.call(next);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_handle_never_passes_high() {
        assert_eq!(constrain_drag(Handle::Low, 90.0, 25.0, 75.0), 75.0);
        assert_eq!(constrain_drag(Handle::Low, 10.0, 25.0, 75.0), 10.0);
    }

    #[test]
    fn high_handle_never_passes_low() {
        assert_eq!(constrain_drag(Handle::High, 10.0, 25.0, 75.0), 25.0);
        assert_eq!(constrain_drag(Handle::High, 90.0, 25.0, 75.0), 90.0);
    }

    #[test]
    fn handle_bounds_reflect_mutual_constraint() {
        let scale = RangeScale::continuous(0.0, 100.0);
        assert_eq!(handle_bounds(Handle::Low, &scale, 25.0, 75.0), (0.0, 75.0));
        assert_eq!(
            handle_bounds(Handle::High, &scale, 25.0, 75.0),
            (25.0, 100.0)
        );
    }

    #[test]
    fn press_misses_both_handles() {
        assert_eq!(pick_handle(150.0, 20.0, 60.0, 20.0), None);
    }

    #[test]
    fn press_picks_the_nearer_handle() {
        assert_eq!(pick_handle(25.0, 20.0, 200.0, 20.0), Some(Handle::Low));
        assert_eq!(pick_handle(195.0, 20.0, 200.0, 20.0), Some(Handle::High));
    }

    #[test]
    fn overlapping_handles_split_on_cursor_side() {
        assert_eq!(pick_handle(95.0, 100.0, 100.0, 20.0), Some(Handle::Low));
        assert_eq!(pick_handle(105.0, 100.0, 100.0, 20.0), Some(Handle::High));
        assert_eq!(pick_handle(100.0, 100.0, 100.0, 20.0), Some(Handle::High));
    }
}
