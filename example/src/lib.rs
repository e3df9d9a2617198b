//! Demo application for `tessera-range-selector`.
//!
//! Two pages drive the range selector from a mock data source: a continuous
//! range with editable endpoints and a discrete price range with fixed stop
//! values.

mod app;
mod continuous_page;
mod discrete_page;
mod range_data;

pub use app::app;

use tessera_ui::{EntryPoint, PipelineContext, RenderModule, entry};

struct ComponentsModule;

impl RenderModule for ComponentsModule {
    fn register_pipelines(&self, context: &mut PipelineContext<'_>) {
        tessera_components::init(context);
    }
}

/// Builds the application entry point.
#[entry]
pub fn range_selector_demo() -> EntryPoint {
    EntryPoint::new(app).module(ComponentsModule)
}

/// Runs the demo on desktop platforms.
#[cfg(not(target_os = "android"))]
pub fn desktop_main() -> Result<(), tessera_ui::winit::error::EventLoopError> {
    range_selector_demo().run_desktop()
}
