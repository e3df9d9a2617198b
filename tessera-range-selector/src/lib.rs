//! A dual-handle range selection component for the Tessera UI framework.
//!
//! The selector is controlled: the caller owns the two current endpoint
//! values and receives every accepted change through callbacks, while the
//! component only keeps transient interaction state (the active drag, hover,
//! focus, and uncommitted field text). Both a continuous interval and a
//! discrete list of stop values are supported, see [`scale::RangeScale`].
//!
//! # Example
//!
//! ```
//! # use tessera_ui::tessera;
//! # #[tessera]
//! # fn component() {
//! use tessera_range_selector::range_selector::{RangeSelectorArgs, range_selector};
//! use tessera_range_selector::scale::RangeScale;
//! # use tessera_components::theme::{MaterialTheme, material_theme};
//!
//! # material_theme(MaterialTheme::default, || {
//! range_selector(
//!     &RangeSelectorArgs::new(RangeScale::continuous(1.0, 100.0), 25.0, 75.0)
//!         .on_low_change(|low| { /* store the new lower endpoint */ })
//!         .on_high_change(|high| { /* store the new upper endpoint */ }),
//! );
//! # });
//! # }
//! # component();
//! ```
//!
//! The pipelines of `tessera-components` must be registered at application
//! startup; this crate draws exclusively through them.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod range_selector;
pub mod scale;
pub mod value_field;
