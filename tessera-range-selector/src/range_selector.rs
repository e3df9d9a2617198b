//! An interactive dual-handle selector for picking a sub-range of an interval.
//!
//! ## Usage
//!
//! Use to let users narrow a value interval from both ends, for example a
//! price filter. The caller owns the two current values and feeds them back
//! in after every change callback.
use derive_setters::Setters;
use tessera_ui::{
    CallbackWith, Color, ComputedData, Constraint, DimensionValue, Dp, MeasurementError, Modifier,
    Px, PxPosition, State,
    layout::{LayoutInput, LayoutOutput, LayoutSpec},
    remember, tessera, use_context,
};

use tessera_components::{
    alignment::{CrossAxisAlignment, MainAxisAlignment},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    shape_def::{RoundedCorner, Shape},
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, surface},
    text::{TextArgs, text},
    theme::MaterialTheme,
};

use crate::{
    scale::RangeScale,
    value_field::{ValueFieldArgs, format_value_plain, value_field},
};

use interaction::{
    HandleAccessibilityArgs, apply_handle_accessibility, handle_bounds, handle_track_input,
};
use layout::{TrackLayout, resolve_component_width, track_layout};
use render::{SelectorColors, render_active_span, render_handle, render_track_base};

pub use interaction::{Handle, RangeSelectorController};

mod interaction;
mod layout;
mod render;

const TRACK_HEIGHT: Dp = Dp(6.0);
const HANDLE_DIAMETER: Dp = Dp(20.0);
const MIN_TOUCH_TARGET: Dp = Dp(40.0);
const VALUE_CELL_WIDTH: Dp = Dp(88.0);
const CELL_GAP: Dp = Dp(12.0);

/// Arguments for the `range_selector` component.
#[derive(PartialEq, Clone, Setters)]
pub struct RangeSelectorArgs {
    /// Modifier chain applied to the selector subtree.
    pub modifier: Modifier,
    /// The selectable interval, continuous or discrete.
    pub scale: RangeScale,
    /// The current lower endpoint, owned by the caller.
    pub low: f64,
    /// The current upper endpoint, owned by the caller.
    pub high: f64,
    /// Called with the new lower endpoint when it changes.
    #[setters(skip)]
    pub on_low_change: CallbackWith<f64>,
    /// Called with the new upper endpoint when it changes.
    #[setters(skip)]
    pub on_high_change: CallbackWith<f64>,
    /// Whether the endpoint values are editable as text. When `false` the
    /// selector shows read-only formatted labels instead of input fields.
    pub editable: bool,
    /// Renders an endpoint value for the read-only labels.
    #[setters(skip)]
    pub format_value: CallbackWith<f64, String>,
    /// Color of the unselected part of the track.
    pub track_color: Color,
    /// Color of the selected span between the handles.
    pub active_track_color: Color,
    /// Color of the two handles.
    pub handle_color: Color,
    /// Disable interaction.
    pub disabled: bool,
    /// Optional accessibility label for the selector.
    #[setters(strip_option, into)]
    pub accessibility_label: Option<String>,
    /// Optional accessibility description for the selector.
    #[setters(strip_option, into)]
    pub accessibility_description: Option<String>,
    /// Optional external controller for drag, hover, and focus state.
    #[setters(skip)]
    pub controller: Option<State<RangeSelectorController>>,
}

impl RangeSelectorArgs {
    /// Creates selector arguments for a scale and the two current endpoints.
    pub fn new(scale: RangeScale, low: f64, high: f64) -> Self {
        let scheme = use_context::<MaterialTheme>()
            .expect("MaterialTheme must be provided")
            .get()
            .color_scheme;
        Self {
            modifier: Modifier::new(),
            scale,
            low,
            high,
            on_low_change: CallbackWith::new(|_| {}),
            on_high_change: CallbackWith::new(|_| {}),
            editable: true,
            format_value: CallbackWith::new(format_value_plain),
            track_color: scheme.surface_variant,
            active_track_color: scheme.primary,
            handle_color: scheme.primary,
            disabled: false,
            accessibility_label: None,
            accessibility_description: None,
            controller: None,
        }
    }

    /// Sets the lower endpoint change handler.
    pub fn on_low_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_low_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the lower endpoint change handler using a shared callback.
    pub fn on_low_change_shared(mut self, on_change: impl Into<CallbackWith<f64>>) -> Self {
        self.on_low_change = on_change.into();
        self
    }

    /// Sets the upper endpoint change handler.
    pub fn on_high_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.on_high_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the upper endpoint change handler using a shared callback.
    pub fn on_high_change_shared(mut self, on_change: impl Into<CallbackWith<f64>>) -> Self {
        self.on_high_change = on_change.into();
        self
    }

    /// Sets the formatter used by the read-only value labels.
    pub fn format_value<F>(mut self, format: F) -> Self
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.format_value = CallbackWith::new(format);
        self
    }

    /// Sets an external selector controller.
    pub fn controller(mut self, controller: State<RangeSelectorController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

impl Default for RangeSelectorArgs {
    fn default() -> Self {
        Self::new(RangeScale::continuous(0.0, 1.0), 0.0, 1.0)
    }
}

#[derive(Clone, PartialEq)]
pub(crate) struct RangeTrackArgs {
    pub scale: RangeScale,
    pub low: f64,
    pub high: f64,
    pub colors: SelectorColors,
    pub disabled: bool,
    pub accessibility_label: Option<String>,
    pub accessibility_description: Option<String>,
    pub on_low_change: CallbackWith<f64>,
    pub on_high_change: CallbackWith<f64>,
    pub controller: State<RangeSelectorController>,
}

#[derive(Clone, PartialEq)]
struct HandleNodeArgs {
    layout: TrackLayout,
    colors: SelectorColors,
    accessibility: HandleAccessibilityArgs,
}

#[tessera]
fn range_handle_node(args: &HandleNodeArgs) {
    render_handle(args.layout, &args.colors);
    let accessibility = args.accessibility.clone();

    input_handler(move |input| {
        apply_handle_accessibility(&input, &accessibility);
    });
}

#[derive(Clone, PartialEq)]
struct RangeTrackLayoutSpec {
    low_fraction: f64,
    high_fraction: f64,
}

impl LayoutSpec for RangeTrackLayoutSpec {
    fn measure(
        &self,
        input: &LayoutInput<'_>,
        output: &mut LayoutOutput<'_>,
    ) -> Result<ComputedData, MeasurementError> {
        let component_width = resolve_component_width(input.parent_constraint());
        let resolved = track_layout(component_width);
        measure_range_track(input, output, resolved, self.low_fraction, self.high_fraction)
    }
}

fn measure_range_track(
    input: &LayoutInput<'_>,
    output: &mut LayoutOutput<'_>,
    layout: TrackLayout,
    low_fraction: f64,
    high_fraction: f64,
) -> Result<ComputedData, MeasurementError> {
    // Order in render: base, active span, low handle, high handle.
    let base_id = input.children_ids()[0];
    let active_id = input.children_ids()[1];
    let low_handle_id = input.children_ids()[2];
    let high_handle_id = input.children_ids()[3];

    let base_constraint = Constraint::new(
        DimensionValue::Fixed(layout.component_width),
        DimensionValue::Fixed(layout.track_height),
    );
    input.measure_child(base_id, &base_constraint)?;
    output.place_child(base_id, PxPosition::new(Px(0), layout.track_y));

    let (span_x, span_width) = layout.active_span(low_fraction, high_fraction);
    let active_constraint = Constraint::new(
        DimensionValue::Fixed(span_width),
        DimensionValue::Fixed(layout.track_height),
    );
    input.measure_child(active_id, &active_constraint)?;
    output.place_child(active_id, PxPosition::new(span_x, layout.track_y));

    let handle_constraint = Constraint::new(
        DimensionValue::Fixed(layout.handle_diameter),
        DimensionValue::Fixed(layout.handle_diameter),
    );
    input.measure_child(low_handle_id, &handle_constraint)?;
    output.place_child(low_handle_id, layout.handle_position(low_fraction));
    input.measure_child(high_handle_id, &handle_constraint)?;
    output.place_child(high_handle_id, layout.handle_position(high_fraction));

    Ok(ComputedData {
        width: layout.component_width,
        height: layout.component_height,
    })
}

#[tessera]
fn range_track(args: &RangeTrackArgs) {
    let args: RangeTrackArgs = args.clone();
    let low_fraction = args.scale.to_fraction(args.low).clamp(0.0, 1.0);
    let high_fraction = args.scale.to_fraction(args.high).clamp(low_fraction, 1.0);

    // Width-independent parts of the geometry are enough for the render
    // pass; the real width is resolved again during measurement and in the
    // input handler.
    let initial_layout = track_layout(Dp(260.0).to_px());

    render_track_base(initial_layout, &args.colors);
    render_active_span(initial_layout, &args.colors);

    let low_bounds = handle_bounds(Handle::Low, &args.scale, args.low, args.high);
    range_handle_node(&HandleNodeArgs {
        layout: initial_layout,
        colors: args.colors,
        accessibility: HandleAccessibilityArgs {
            key: "range_selector_low_handle",
            label: args
                .accessibility_label
                .clone()
                .unwrap_or_else(|| "Minimum handle".to_string()),
            description: args.accessibility_description.clone(),
            value: args.low,
            min: low_bounds.0,
            max: low_bounds.1,
            scale: args.scale.clone(),
            disabled: args.disabled,
            on_change: args.on_low_change.clone(),
        },
    });

    let high_bounds = handle_bounds(Handle::High, &args.scale, args.low, args.high);
    range_handle_node(&HandleNodeArgs {
        layout: initial_layout,
        colors: args.colors,
        accessibility: HandleAccessibilityArgs {
            key: "range_selector_high_handle",
            label: args
                .accessibility_label
                .clone()
                .unwrap_or_else(|| "Maximum handle".to_string()),
            description: args.accessibility_description.clone(),
            value: args.high,
            min: high_bounds.0,
            max: high_bounds.1,
            scale: args.scale.clone(),
            disabled: args.disabled,
            on_change: args.on_high_change.clone(),
        },
    });

    let state = args.controller;
    let handler_args = args.clone();
    input_handler(move |mut input| {
        let resolved = track_layout(input.computed_data.width);
        handle_track_input(&mut input, &state, &handler_args, &resolved);
    });

    layout(RangeTrackLayoutSpec {
        low_fraction,
        high_fraction,
    });
}

fn placeholder_shape() -> Shape {
    Shape::RoundedRectangle {
        top_left: RoundedCorner::manual(Dp(8.0), 3.0),
        top_right: RoundedCorner::manual(Dp(8.0), 3.0),
        bottom_right: RoundedCorner::manual(Dp(8.0), 3.0),
        bottom_left: RoundedCorner::manual(Dp(8.0), 3.0),
    }
}

#[tessera]
fn invalid_range_placeholder() {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let text_color = scheme.on_error_container;

    surface(
        &SurfaceArgs::default()
            .style(scheme.error_container.into())
            .shape(placeholder_shape())
            .child(move || {
                Modifier::new()
                    .padding_symmetric(Dp(16.0), Dp(10.0))
                    .run(move || {
                        text(
                            &TextArgs::default()
                                .text("Range configuration is invalid")
                                .size(Dp(14.0))
                                .color(text_color),
                        );
                    });
            }),
    );
}

/// # range_selector
///
/// Renders a dual-handle range selector: a track with a highlighted span
/// between two draggable handles, flanked by the current endpoint values as
/// editable fields or read-only labels.
///
/// ## Usage
///
/// Use for filtering by an interval, such as a price range. The component is
/// controlled: it reports every accepted change through the callbacks and
/// re-derives handle positions and field texts from the values passed in by
/// the caller, which stays the single source of truth.
///
/// Dragging the low handle can never report a value above the current upper
/// endpoint, and the high handle never one below the current lower endpoint.
/// Text edits commit when a field loses focus, clamped the same way; text
/// that does not parse as a number reverts silently.
///
/// An invalid configuration (empty interval, unordered stop values, or
/// non-finite numbers) renders a static placeholder instead of interactive
/// content.
///
/// ## Parameters
///
/// - `args` — configures the interval, current values, and callbacks; see
///   [`RangeSelectorArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use tessera_range_selector::range_selector::{RangeSelectorArgs, range_selector};
/// use tessera_range_selector::scale::RangeScale;
/// use tessera_ui::{Dp, Modifier};
/// use tessera_components::modifier::ModifierExt as _;
/// # use tessera_components::theme::{MaterialTheme, material_theme};
///
/// # material_theme(MaterialTheme::default, || {
/// range_selector(
///     &RangeSelectorArgs::new(RangeScale::continuous(1.0, 100.0), 25.0, 75.0)
///         .modifier(Modifier::new().width(Dp(420.0)))
///         .on_low_change(|low| println!("low is now {low}"))
///         .on_high_change(|high| println!("high is now {high}")),
/// );
/// # });
/// # }
/// # component();
/// ```
#[tessera]
pub fn range_selector(args: &RangeSelectorArgs) {
    let args: RangeSelectorArgs = args.clone();
    if args.scale.validate().is_err() || !args.low.is_finite() || !args.high.is_finite() {
        invalid_range_placeholder();
        return;
    }

    let controller = args
        .controller
        .unwrap_or_else(|| remember(RangeSelectorController::new));

    let low = args.low;
    let high = args.high.max(low);
    let scale = args.scale.clone();
    let colors = SelectorColors {
        track: args.track_color,
        active_track: args.active_track_color,
        handle: args.handle_color,
    };

    let track_args = RangeTrackArgs {
        scale: scale.clone(),
        low,
        high,
        colors,
        disabled: args.disabled,
        accessibility_label: args.accessibility_label.clone(),
        accessibility_description: args.accessibility_description.clone(),
        on_low_change: args.on_low_change.clone(),
        on_high_change: args.on_high_change.clone(),
        controller,
    };

    let low_cell = value_cell_args(&args, Handle::Low, low, high);
    let high_cell = value_cell_args(&args, Handle::High, low, high);

    row(
        RowArgs::default()
            .modifier(args.modifier.clone())
            .main_axis_alignment(MainAxisAlignment::Start)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            let low_cell = low_cell.clone();
            scope.child(move || value_cell(&low_cell));
            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().width(CELL_GAP))));

            let track_args = track_args.clone();
            scope.child_weighted(move || range_track(&track_args), 1.0);

            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().width(CELL_GAP))));
            let high_cell = high_cell.clone();
            scope.child(move || value_cell(&high_cell));
        },
    );
}

#[derive(Clone, PartialEq)]
enum ValueCellArgs {
    Editable(ValueFieldArgs),
    Label(String),
}

fn value_cell_args(
    args: &RangeSelectorArgs,
    handle: Handle,
    low: f64,
    high: f64,
) -> ValueCellArgs {
    let value = match handle {
        Handle::Low => low,
        Handle::High => high,
    };
    if !args.editable {
        return ValueCellArgs::Label(args.format_value.call(value));
    }

    let (min, max) = handle_bounds(handle, &args.scale, low, high);
    let scale = args.scale.clone();
    let report = match handle {
        Handle::Low => args.on_low_change.clone(),
        Handle::High => args.on_high_change.clone(),
    };
    // Discrete selections only ever report stop values, so committed text
    // snaps before it reaches the caller.
    let on_commit = CallbackWith::new(move |committed: f64| report.call(scale.clamp(committed)));

    let label = match handle {
        Handle::Low => "Minimum value",
        Handle::High => "Maximum value",
    };
    ValueCellArgs::Editable(
        ValueFieldArgs::new(value, min, max)
            .modifier(Modifier::new().width(VALUE_CELL_WIDTH))
            .accessibility_label(label)
            .on_commit_shared(on_commit),
    )
}

#[tessera]
fn value_cell(args: &ValueCellArgs) {
    match args {
        ValueCellArgs::Editable(field_args) => value_field(field_args),
        ValueCellArgs::Label(label) => {
            let scheme = use_context::<MaterialTheme>()
                .expect("MaterialTheme must be provided")
                .get()
                .color_scheme;
            text(
                &TextArgs::default()
                    .text(label.clone())
                    .size(Dp(14.0))
                    .color(scheme.on_surface),
            );
        }
    }
}
