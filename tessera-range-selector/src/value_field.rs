//! Single-line numeric entry field with commit-on-blur semantics.
//!
//! The field keeps whatever the user types verbatim and only interprets it
//! when focus leaves the field: valid numbers are clamped into the field's
//! legal interval and reported through [`ValueFieldArgs::on_commit`], invalid
//! text silently reverts to the last committed value. The committed value is
//! owned by the caller; the field resynchronizes its text whenever that value
//! changes.

use derive_setters::Setters;
use tessera_ui::{
    CallbackWith, Color, CursorEventContent, Dp, Focus, InputHandlerInput, Modifier, State,
    accesskit::Role,
    remember, tessera, use_context,
    winit::{
        event::ElementState,
        keyboard::{Key, NamedKey},
        window::CursorIcon,
    },
};
use unicode_segmentation::UnicodeSegmentation;

use tessera_components::{
    alignment::CrossAxisAlignment,
    modifier::ModifierExt as _,
    pos_misc::is_position_in_component,
    row::{RowArgs, row},
    shape_def::{RoundedCorner, Shape},
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::MaterialTheme,
};

/// Renders a value the way the field displays it.
///
/// Uses the shortest decimal representation that round-trips, so `100.0`
/// renders as `100` and `1.99` as `1.99`.
pub fn format_value_plain(value: f64) -> String {
    value.to_string()
}

/// Parses committed text and clamps the result into `[min, max]`.
///
/// Returns `None` when the text is not a finite number, in which case the
/// edit is discarded.
pub(crate) fn resolve_commit(text: &str, min: f64, max: f64) -> Option<f64> {
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then(|| value.clamp(min, max))
}

/// State owned by a [`value_field`]: the uncommitted text, the committed
/// value it was last synchronized to, and the field's focus handle.
pub struct ValueFieldController {
    text: String,
    synced_value: f64,
    focus: Focus,
    was_focused: bool,
    suppress_commit: bool,
}

impl ValueFieldController {
    /// Creates a controller synchronized to the given committed value.
    pub fn new(value: f64) -> Self {
        Self {
            text: format_value_plain(value),
            synced_value: value,
            focus: Focus::new(),
            was_focused: false,
            suppress_commit: false,
        }
    }

    /// The current, possibly uncommitted, text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the field currently holds focus.
    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    /// Resynchronizes the text to a new committed value.
    ///
    /// A no-op while the committed value is unchanged, so in-progress edits
    /// survive re-renders that do not touch this side of the range.
    pub(crate) fn sync_to(&mut self, value: f64) {
        if value != self.synced_value && !(value.is_nan() && self.synced_value.is_nan()) {
            self.synced_value = value;
            self.text = format_value_plain(value);
        }
    }

    fn insert(&mut self, segment: &str) {
        self.text.push_str(segment);
    }

    fn delete_backward(&mut self) {
        if let Some((offset, _)) = self.text.grapheme_indices(true).next_back() {
            self.text.truncate(offset);
        }
    }

    fn revert(&mut self) {
        self.text = format_value_plain(self.synced_value);
    }
}

/// Arguments for the [`value_field`] component.
#[derive(PartialEq, Clone, Setters)]
pub struct ValueFieldArgs {
    /// Modifier chain applied to the field container.
    pub modifier: Modifier,
    /// The committed value, owned by the caller.
    pub value: f64,
    /// Smallest value a commit may report.
    pub min: f64,
    /// Largest value a commit may report.
    pub max: f64,
    /// Called with the clamped value when an edit commits.
    #[setters(skip)]
    pub on_commit: CallbackWith<f64>,
    /// Font size of the field text.
    pub font_size: Dp,
    /// Optional label announced by assistive technologies.
    #[setters(strip_option, into)]
    pub accessibility_label: Option<String>,
    /// Optional external controller for text and focus state.
    #[setters(skip)]
    pub controller: Option<State<ValueFieldController>>,
}

impl ValueFieldArgs {
    /// Creates field arguments for a committed value and its legal interval.
    pub fn new(value: f64, min: f64, max: f64) -> Self {
        Self {
            modifier: Modifier::new(),
            value,
            min,
            max,
            on_commit: CallbackWith::new(|_| {}),
            font_size: Dp(14.0),
            accessibility_label: None,
            controller: None,
        }
    }

    /// Sets the commit handler.
    pub fn on_commit<F>(mut self, on_commit: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_commit = CallbackWith::new(on_commit);
        self
    }

    /// Sets the commit handler using a shared callback.
    pub fn on_commit_shared(mut self, on_commit: impl Into<CallbackWith<f64>>) -> Self {
        self.on_commit = on_commit.into();
        self
    }

    /// Sets an external field controller.
    pub fn controller(mut self, controller: State<ValueFieldController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

fn field_shape() -> Shape {
    Shape::RoundedRectangle {
        top_left: RoundedCorner::manual(Dp(4.0), 3.0),
        top_right: RoundedCorner::manual(Dp(4.0), 3.0),
        bottom_right: RoundedCorner::manual(Dp(4.0), 3.0),
        bottom_left: RoundedCorner::manual(Dp(4.0), 3.0),
    }
}

fn caret(color: Color, font_size: Dp) {
    surface(
        &SurfaceArgs::default()
            .modifier(
                Modifier::new()
                    .width(Dp(1.5))
                    .height(Dp(font_size.0 * 1.2)),
            )
            .style(color.into())
            .shape(field_shape()),
    );
}

/// # value_field
///
/// Renders an editable numeric field bound to a caller-owned value.
///
/// ## Usage
///
/// Use for numeric entry that must stay consistent with other state, such as
/// the endpoints of a range selection. Edits are interpreted only when focus
/// leaves the field; until then the raw text is preserved, including
/// intermediate states that do not parse.
///
/// ## Parameters
///
/// - `args` — value, legal interval, and commit handler; see
///   [`ValueFieldArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use tessera_range_selector::value_field::{ValueFieldArgs, value_field};
/// # use tessera_components::theme::{MaterialTheme, material_theme};
///
/// # material_theme(MaterialTheme::default, || {
/// value_field(
///     &ValueFieldArgs::new(25.0, 0.0, 75.0).on_commit(|committed| {
///         println!("low endpoint is now {committed}");
///     }),
/// );
/// # });
/// # }
/// # component();
/// ```
#[tessera]
pub fn value_field(args: &ValueFieldArgs) {
    let args: ValueFieldArgs = args.clone();
    let controller = args.controller.unwrap_or_else(|| {
        let initial = args.value;
        remember(move || ValueFieldController::new(initial))
    });

    controller.with_mut(|c| c.sync_to(args.value));

    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let focused = controller.with(|c| c.is_focused());
    let style = if focused {
        SurfaceStyle::FilledOutlined {
            fill_color: scheme.surface,
            border_color: scheme.primary,
            border_width: Dp(2.0),
        }
    } else {
        SurfaceStyle::FilledOutlined {
            fill_color: scheme.surface_variant,
            border_color: scheme.outline_variant,
            border_width: Dp(1.0),
        }
    };

    let display = controller.with(|c| c.text().to_string());
    let text_color = scheme.on_surface;
    let caret_color = scheme.primary;
    let font_size = args.font_size;

    surface(
        &SurfaceArgs::default()
            .modifier(args.modifier.clone())
            .style(style)
            .shape(field_shape())
            .child(move || {
                let display = display.clone();
                Modifier::new()
                    .padding_symmetric(Dp(10.0), Dp(6.0))
                    .run(move || {
                        let display = display.clone();
                        row(
                            RowArgs::default().cross_axis_alignment(CrossAxisAlignment::Center),
                            move |scope| {
                                let display = display.clone();
                                scope.child(move || {
                                    text(
                                        &TextArgs::default()
                                            .text(display.clone())
                                            .size(font_size)
                                            .color(text_color),
                                    );
                                });
                                if focused {
                                    scope.child(move || caret(caret_color, font_size));
                                }
                            },
                        );
                    });
            }),
    );

    let handler_args = ValueFieldArgs {
        controller: None,
        ..args
    };
    input_handler(move |mut input| {
        handle_field_input(&mut input, &handler_args, &controller);
    });
}

fn handle_field_input(
    input: &mut InputHandlerInput<'_>,
    args: &ValueFieldArgs,
    controller: &State<ValueFieldController>,
) {
    // Commit runs on every focus loss, whichever way focus left: a click
    // outside, Enter, or another component taking focus.
    let focused = controller.with(|c| c.is_focused());
    let was_focused = controller.with_mut(|c| std::mem::replace(&mut c.was_focused, focused));
    if was_focused && !focused {
        commit_pending(args, controller);
    }

    let in_bounds = input
        .cursor_position_rel
        .map(|pos| is_position_in_component(input.computed_data, pos))
        .unwrap_or(false);
    if in_bounds {
        input.requests.cursor_icon = CursorIcon::Text;
    }

    let pressed = input
        .cursor_events
        .iter()
        .any(|event| matches!(event.content, CursorEventContent::Pressed(_)));
    if pressed {
        if in_bounds {
            if !focused {
                controller.with(|c| c.focus.request_focus());
            }
            input.block_cursor();
        } else if focused {
            controller.with(|c| c.focus.unfocus());
        }
    }

    if controller.with(|c| c.is_focused()) {
        for key_event in input.keyboard_events.drain(..) {
            if key_event.state != ElementState::Pressed {
                continue;
            }
            match &key_event.logical_key {
                Key::Character(segment) => {
                    controller.with_mut(|c| c.insert(segment.as_str()));
                }
                Key::Named(NamedKey::Space) => controller.with_mut(|c| c.insert(" ")),
                Key::Named(NamedKey::Backspace) => controller.with_mut(|c| c.delete_backward()),
                Key::Named(NamedKey::Enter) | Key::Named(NamedKey::Tab) => {
                    controller.with(|c| c.focus.unfocus());
                }
                Key::Named(NamedKey::Escape) => {
                    controller.with_mut(|c| {
                        c.revert();
                        c.suppress_commit = true;
                    });
                    controller.with(|c| c.focus.unfocus());
                }
                _ => {}
            }
        }
    }

    apply_field_accessibility(input, args);
}

fn commit_pending(args: &ValueFieldArgs, controller: &State<ValueFieldController>) {
    if controller.with_mut(|c| std::mem::take(&mut c.suppress_commit)) {
        return;
    }
    let pending = controller.with(|c| c.text().to_string());
    match resolve_commit(&pending, args.min, args.max) {
        Some(value) => args.on_commit.call(value),
        None => controller.with_mut(|c| c.revert()),
    }
}

fn apply_field_accessibility(input: &mut InputHandlerInput<'_>, args: &ValueFieldArgs) {
    let mut builder = input.accessibility().role(Role::TextInput);
    if let Some(label) = args.accessibility_label.as_ref() {
        builder = builder.label(label.clone());
    }
    builder.focusable().commit();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_clamps_low_edit_to_high_value() {
        // Low field with high currently at 75.
        assert_eq!(resolve_commit("80", 0.0, 75.0), Some(75.0));
    }

    #[test]
    fn commit_clamps_high_edit_to_low_value() {
        // High field with low currently at 25.
        assert_eq!(resolve_commit("20", 25.0, 100.0), Some(25.0));
    }

    #[test]
    fn commit_clamps_to_global_lower_bound() {
        assert_eq!(resolve_commit("5", 10.0, 75.0), Some(10.0));
    }

    #[test]
    fn commit_rejects_text_that_is_not_a_number() {
        assert_eq!(resolve_commit("abc", 0.0, 100.0), None);
        assert_eq!(resolve_commit("", 0.0, 100.0), None);
        assert_eq!(resolve_commit("1.2.3", 0.0, 100.0), None);
        assert_eq!(resolve_commit("NaN", 0.0, 100.0), None);
        assert_eq!(resolve_commit("inf", 0.0, 100.0), None);
    }

    #[test]
    fn commit_accepts_padded_and_scientific_notation() {
        assert_eq!(resolve_commit("  42.5 ", 0.0, 100.0), Some(42.5));
        assert_eq!(resolve_commit("1e2", 0.0, 100.0), Some(100.0));
        assert_eq!(resolve_commit("-3", 0.0, 100.0), Some(0.0));
    }

    #[test]
    fn controller_keeps_pending_edit_while_value_is_unchanged() {
        let mut controller = ValueFieldController::new(25.0);
        controller.insert("9");
        assert_eq!(controller.text(), "259");
        controller.sync_to(25.0);
        assert_eq!(controller.text(), "259");
    }

    #[test]
    fn controller_resynchronizes_when_value_changes() {
        let mut controller = ValueFieldController::new(25.0);
        controller.insert("9");
        controller.sync_to(40.0);
        assert_eq!(controller.text(), "40");
    }

    #[test]
    fn revert_restores_committed_text() {
        let mut controller = ValueFieldController::new(1.99);
        controller.insert("abc");
        controller.revert();
        assert_eq!(controller.text(), "1.99");
    }

    #[test]
    fn delete_backward_removes_whole_graphemes() {
        let mut controller = ValueFieldController::new(0.0);
        controller.insert("é");
        controller.delete_backward();
        controller.delete_backward();
        assert_eq!(controller.text(), "");
    }

    #[test]
    fn plain_format_matches_display_expectations() {
        assert_eq!(format_value_plain(100.0), "100");
        assert_eq!(format_value_plain(1.99), "1.99");
        assert_eq!(format_value_plain(-0.5), "-0.5");
    }
}
