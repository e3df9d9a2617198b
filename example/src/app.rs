use tessera_ui::{Color, Dp, Modifier, State, remember, tessera, use_context};

use tessera_components::{
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    scrollable::{ScrollableArgs, scrollable},
    shape_def::{RoundedCorner, Shape},
    spacer::{SpacerArgs, spacer},
    surface::{SurfaceArgs, surface},
    text::{TextArgs, text},
    theme::{MaterialTheme, material_theme},
};

use crate::{continuous_page::continuous_page, discrete_page::discrete_page};

/// The page currently shown by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DemoPage {
    Home,
    Continuous,
    Discrete,
}

/// Root component of the demo application.
#[tessera]
pub fn app() {
    material_theme(MaterialTheme::default, root_content);
}

#[tessera]
fn root_content() {
    let page = remember(|| DemoPage::Home);
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;

    surface(
        &SurfaceArgs::default()
            .modifier(Modifier::new().fill_max_size())
            .style(scheme.surface.into())
            .child(move || {
                scrollable(
                    &ScrollableArgs::default()
                        .modifier(Modifier::new().fill_max_width())
                        .child(move || {
                            Modifier::new().padding_all(Dp(24.0)).run(move || {
                                match page.get() {
                                    DemoPage::Home => home_page(page),
                                    DemoPage::Continuous => continuous_page(page),
                                    DemoPage::Discrete => discrete_page(page),
                                }
                            });
                        }),
                );
            }),
    );
}

#[tessera]
fn home_page(page: State<DemoPage>) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let subtitle_color = scheme.on_surface_variant;

    column(ColumnArgs::default(), move |scope| {
        scope.child(|| {
            text(
                &TextArgs::default()
                    .text("Range Selector Demo")
                    .size(Dp(24.0)),
            );
        });
        scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(8.0)))));
        scope.child(move || {
            text(
                &TextArgs::default()
                    .text("Custom dual-handle range selection component")
                    .size(Dp(14.0))
                    .color(subtitle_color),
            );
        });
        scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(24.0)))));
        scope.child(move || {
            nav_card(
                page,
                DemoPage::Continuous,
                "Exercise 1",
                "Normal range",
                "Editable values with drag support",
            );
        });
        scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(12.0)))));
        scope.child(move || {
            nav_card(
                page,
                DemoPage::Discrete,
                "Exercise 2",
                "Fixed values range",
                "Currency values with predefined stops",
            );
        });
    });
}

fn card_shape() -> Shape {
    Shape::RoundedRectangle {
        top_left: RoundedCorner::manual(Dp(12.0), 3.0),
        top_right: RoundedCorner::manual(Dp(12.0), 3.0),
        bottom_right: RoundedCorner::manual(Dp(12.0), 3.0),
        bottom_left: RoundedCorner::manual(Dp(12.0), 3.0),
    }
}

#[tessera]
fn nav_card(
    page: State<DemoPage>,
    target: DemoPage,
    title: &'static str,
    subtitle: &'static str,
    detail: &'static str,
) {
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let title_color = scheme.on_surface;
    let detail_color = scheme.on_surface_variant;

    surface(
        &SurfaceArgs::default()
            .modifier(Modifier::new().width(Dp(420.0)))
            .style(scheme.surface_container.into())
            .shape(card_shape())
            .on_click(move || page.set(target))
            .child(move || {
                card_body(title, subtitle, detail, title_color, detail_color);
            }),
    );
}

fn card_body(
    title: &'static str,
    subtitle: &'static str,
    detail: &'static str,
    title_color: Color,
    detail_color: Color,
) {
    Modifier::new().padding_all(Dp(16.0)).run(move || {
        column(ColumnArgs::default(), move |scope| {
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(title)
                        .size(Dp(18.0))
                        .color(title_color),
                );
            });
            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(4.0)))));
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(subtitle)
                        .size(Dp(14.0))
                        .color(title_color),
                );
            });
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(detail)
                        .size(Dp(12.0))
                        .color(detail_color),
                );
            });
        });
    });
}
