//! chartopts
//!
//! Turns an analytics chart configuration and its evaluation result into a
//! renderer-ready chart option tree. Pairs with the `chartopts` CLI.
//!
//! ### Features
//! - Resolve tagged grouping values (moments, behaviors, metadata, users, timestamps, ...)
//!   to display labels
//! - Pick category and series axes, detecting time-series axes by content
//! - Line, bar and donut layouts, plus a line-shaped fallback
//! - Donut legend/overlay script with the aggregated statistic
//! - Export payload for the rendering engine, CSV of the resolved data table
//!
//! ### Example
//! ```no_run
//! use chartopts::{ChartRequest, ExportSettings};
//!
//! let json = std::fs::read_to_string("request.json")?;
//! let request = ChartRequest::from_json(&json)?;
//! let payload = request.build_payload(&ExportSettings::default())?;
//! chartopts::storage::save_json(&payload, "payload.json")?;
//! # Ok::<(), chartopts::ChartError>(())
//! ```

pub mod chart;
pub mod error;
pub mod format;
pub mod models;
pub mod request;
pub mod resolve;
pub mod stats;
pub mod storage;
pub mod time;

pub use chart::{ChartOptions, ChartSpec, synthesize};
pub use error::{ChartError, Result};
pub use models::{AttributeValue, ChartConfig, DataMaps, EvaluationData};
pub use request::{ChartRequest, ExportPayload, ExportSettings, OutputFormat};
