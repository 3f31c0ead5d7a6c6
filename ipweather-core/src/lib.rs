//! Core library for the `ipweather` widget.
//!
//! This crate defines:
//! - Configuration for the fixed service endpoints and band colors
//! - The two-stage fetch pipeline (IP location, then weather) and its scheduler
//! - Payload validation, unit conversion and presentation formatting
//! - The view abstraction the widget renders into
//!
//! It is used by `ipweather-cli`, but any host that can implement
//! [`ViewSink`] can embed the widget.

pub mod band;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod present;
pub mod scheduler;
pub mod transport;
pub mod units;
pub mod validate;
pub mod view;

pub use band::TemperatureBand;
pub use config::{BandPalette, Config};
pub use error::StageError;
pub use model::{LocationRecord, SkyCondition, WeatherRecord};
pub use pipeline::{CycleOutcome, CycleReport, FetchPipeline};
pub use present::{Rendering, TemperatureDisplay, weather_icon_markup};
pub use scheduler::{Scheduler, SchedulerHandle};
pub use transport::{HttpTransport, Transport};
pub use units::kelvin_to_fahrenheit;
pub use view::{DisplayState, MemoryView, Region, RegionState, ViewController, ViewSink};
