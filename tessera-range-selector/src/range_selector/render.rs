use tessera_ui::{Color, DimensionValue, Modifier};

use tessera_components::{
    modifier::ModifierExt as _,
    shape_def::Shape,
    surface::{SurfaceArgs, surface},
};

use super::layout::TrackLayout;

#[derive(Clone, Copy, PartialEq)]
pub(super) struct SelectorColors {
    pub track: Color,
    pub active_track: Color,
    pub handle: Color,
}

pub(super) fn render_track_base(layout: TrackLayout, colors: &SelectorColors) {
    surface(
        &SurfaceArgs::default()
            .modifier(Modifier::new().constrain(
                Some(DimensionValue::FILLED),
                Some(DimensionValue::Fixed(layout.track_height)),
            ))
            .style(colors.track.into())
            .shape(Shape::capsule()),
    );
}

pub(super) fn render_active_span(layout: TrackLayout, colors: &SelectorColors) {
    surface(
        &SurfaceArgs::default()
            .modifier(Modifier::new().constrain(
                Some(DimensionValue::FILLED),
                Some(DimensionValue::Fixed(layout.track_height)),
            ))
            .style(colors.active_track.into())
            .shape(Shape::capsule()),
    );
}

pub(super) fn render_handle(layout: TrackLayout, colors: &SelectorColors) {
    surface(
        &SurfaceArgs::default()
            .modifier(Modifier::new().constrain(
                Some(DimensionValue::Fixed(layout.handle_diameter)),
                Some(DimensionValue::Fixed(layout.handle_diameter)),
            ))
            .style(colors.handle.into())
            .shape(Shape::Ellipse),
    );
}
