use std::sync::Arc;

use parking_lot::RwLock;
use tessera_ui::{Dp, Modifier, State, remember, tessera, use_context};

use tessera_components::{
    button::{ButtonArgs, button},
    column::{ColumnArgs, column},
    modifier::ModifierExt as _,
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
enum ContinuousPhase {
    Loading,
    Failed(String),
    Ready {
        lower: f64,
        upper: f64,
        low: f64,
        high: f64,
    },
}

type SharedModel = Arc<RwLock<ContinuousPhase>>;

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn spawn_bounds_fetch(model: SharedModel) {
    range_data::runtime().spawn(async move {
        match range_data::fetch_continuous_bounds().await {
            Ok(bounds) => {
                tracing::debug!(min = bounds.min, max = bounds.max, "continuous bounds loaded");
                *model.write() = ContinuousPhase::Ready {
                    lower: bounds.min,
                    upper: bounds.max,
                    low: bounds.min,
                    high: bounds.max,
                };
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load continuous bounds");
                *model.write() = ContinuousPhase::Failed(err.to_string());
            }
        }
    });
}

#[tessera]
pub(crate) fn continuous_page(page: State<DemoPage>) {
    let model: State<SharedModel> = remember(|| {
        let model = Arc::new(RwLock::new(ContinuousPhase::Loading));
        spawn_bounds_fetch(model.clone());
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
                    .text("Exercise 1: Normal Range")
                    .size(Dp(20.0)),
            );
        });
        scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(8.0)))));

        match phase.clone() {
            ContinuousPhase::Loading => {
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text("Loading range data...")
                            .color(detail_color),
                    );
                });
            }
            ContinuousPhase::Failed(message) => {
                let shared = shared.clone();
                scope.child(move || {
                    text(&TextArgs::default().text(message.clone()).color(error_color));
                });
                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(8.0)))));
                scope.child(move || {
                    let shared = shared.clone();
                    button(
                        &ButtonArgs::filled(move || {
                            *shared.write() = ContinuousPhase::Loading;
                            spawn_bounds_fetch(shared.clone());
                        })
                        .child(|| {
                            text(&TextArgs::default().text("Retry"));
                        }),
                    );
                });
            }
            ContinuousPhase::Ready {
                lower,
                upper,
                low,
                high,
            } => {
                let shared = shared.clone();
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text("Drag the handles or edit the values directly")
                            .size(Dp(14.0))
                            .color(detail_color),
                    );
                });
                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0)))));

                let on_low = {
                    let shared = shared.clone();
                    move |value: f64| {
                        if let ContinuousPhase::Ready { low, .. } = &mut *shared.write() {
                            *low = round_to_cents(value);
                        }
                    }
                };
                let on_high = {
                    let shared = shared.clone();
                    move |value: f64| {
                        if let ContinuousPhase::Ready { high, .. } = &mut *shared.write() {
                            *high = round_to_cents(value);
                        }
                    }
                };
                scope.child(move || {
                    range_selector(
                        &RangeSelectorArgs::new(RangeScale::continuous(lower, upper), low, high)
                            .modifier(Modifier::new().width(Dp(460.0)))
                            .on_low_change(on_low.clone())
                            .on_high_change(on_high.clone()),
                    );
                });

                scope.child(|| spacer(&SpacerArgs::new(Modifier::new().height(Dp(16.0)))));
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text(format!("Allowed range: {lower} - {upper}"))
                            .size(Dp(13.0))
                            .color(detail_color),
                    );
                });
                scope.child(move || {
                    text(
                        &TextArgs::default()
                            .text(format!("Selected: {low:.2} - {high:.2}"))
                            .size(Dp(13.0))
                            .color(detail_color),
                    );
                });
            }
        }
    });
}
