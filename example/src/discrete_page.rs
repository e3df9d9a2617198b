use std::sync::Arc;

use parking_lot::RwLock;
use tessera_ui::{Color, Dp, Modifier, State, remember, tessera, use_context};

use tessera_components::{
    button::{ButtonArgs, button},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    spacer::{SpacerArgs, spacer},
    text::{TextArgs, text},
    theme::MaterialTheme,
};
use tessera_range_selector::{
    range_selector::{RangeSelectorArgs, range_selector},
    scale::RangeScale,
};

use crate::{app::DemoPage, range_data};

#[derive(Clone)]
enum DiscretePhase {
    Loading,
    Failed(String),
    Ready {
        stops: Vec<f64>,
        low: f64,
        high: f64,
    },
}

type SharedModel = Arc<RwLock<DiscretePhase>>;

fn format_currency(value: f64) -> String {
    format!("€{value:.2}")
}

fn spawn_stops_fetch(model: SharedModel) {
    range_data::runtime().spawn(async move {
        match range_data::fetch_stop_values().await {
            Ok(stops) => {
                tracing::debug!(count = stops.len(), "stop values loaded");
                let low = stops.first().copied().unwrap_or(0.0);
                let high = stops.last().copied().unwrap_or(0.0);
                *model.write() = DiscretePhase::Ready { stops, low, high };
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load stop values");
                *model.write() = DiscretePhase::Failed(err.to_string());
            }
        }
    });
}

#[tessera]
pub(crate) fn discrete_page(page: State<DemoPage>) {
    let model: State<SharedModel> = remember(|| {
        let model = Arc::new(RwLock::new(DiscretePhase::Loading));
        spawn_stops_fetch(model.clone());
        model
    });
    let shared = model.get();
    let phase = shared.read().clone();
    let scheme = use_context::<MaterialTheme>()
        .expect("MaterialTheme must be provided")
        .get()
        .color_scheme;
    let detail_color = scheme.on_surface_variant;
    let error_color = scheme.error;
    let active_color = scheme.primary;

    column(ColumnArgs::default(), move |scope| {
        scope.child(move || {
            button(&ButtonArgs::text(move || page.set(DemoPage::Home)).child(|| {
                text(&TextArgs::default().text("Back"));
            }));
        });
        scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(8.0)))));
        scope.child(|| {
            text(
                &TextArgs::default()
                    .text("Exercise 2: Fixed Values Range")
                    .size(Dp(20.0)),
            );
        });
        scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(8.0)))));

        match phase.clone() {
            DiscretePhase::Loading => {
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text("Loading range data...")
                            .color(detail_color),
                    );
                });
            }
            DiscretePhase::Failed(message) => {
                let shared = shared.clone();
                scope.child(move || {
                    text(&TextArgs::default().text(message.clone()).color(error_color));
                });
                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(8.0)))));
                scope.child(move || {
                    let shared = shared.clone();
                    button(
                        &ButtonArgs::filled(move || {
                            *shared.write() = DiscretePhase::Loading;
                            spawn_stops_fetch(shared.clone());
                        })
                        .child(|| {
                            text(&TextArgs::default().text("Retry"));
                        }),
                    );
                });
            }
            DiscretePhase::Ready { stops, low, high } => {
                let shared = shared.clone();
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text("Drag the handles to select fixed prices")
                            .size(Dp(14.0))
                            .color(detail_color),
                    );
                });
                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0)))));

                let on_low = {
                    let shared = shared.clone();
                    move |value: f64| {
                        if let DiscretePhase::Ready { low, .. } = &mut *shared.write() {
                            *low = value;
                        }
                    }
                };
                let on_high = {
                    let shared = shared.clone();
                    move |value: f64| {
                        if let DiscretePhase::Ready { high, .. } = &mut *shared.write() {
                            *high = value;
                        }
                    }
                };
                let selector_stops = stops.clone();
                scope.child(move || {
                    range_selector(
                        &RangeSelectorArgs::new(
                            RangeScale::discrete(selector_stops.clone()),
                            low,
                            high,
                        )
                        .modifier(Modifier::new().width(Dp(460.0)))
                        .editable(false)
                        .format_value(format_currency)
                        .on_low_change(on_low.clone())
                        .on_high_change(on_high.clone()),
                    );
                });

                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0)))));
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text("Available values:")
                            .size(Dp(13.0))
                            .color(detail_color),
                    );
                });
                let listed_stops = stops.clone();
                scope.child(move || {
                    stop_list(listed_stops.clone(), low, high, active_color, detail_color);
                });
            }
        }
    });
}

#[tessera]
fn stop_list(stops: Vec<f64>, low: f64, high: f64, active_color: Color, inactive_color: Color) {
    row(RowArgs::default(), move |scope| {
        for stop in stops.clone() {
            let selected = stop >= low && stop <= high;
            let color = if selected { active_color } else { inactive_color };
            scope.child(move || {
                text(
                    &TextArgs::default()
                        .text(format_currency(stop))
                        .size(Dp(13.0))
                        .color(color),
                );
            });
            scope.child(|| spacer(&SpacerArgs::new(Modifier::new().width(Dp(10.0)))));
        }
    });
}
