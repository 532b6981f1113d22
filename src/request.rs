//! Request envelope and the export payload handed to the rendering engine.

use crate::chart::{ChartSpec, synthesize};
use crate::error::{ChartError, Result};
use crate::models::{ChartConfig, ChartDisplayType, DataMaps, EvaluationData};
use serde::{Deserialize, Serialize};

/// Export defaults; a request's `renderingConfig` overrides width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSettings {
    pub scale: u32,
    pub default_width: u32,
    pub default_height: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            scale: 2,
            default_width: 1000,
            default_height: 600,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Incoming chart export request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartRequest {
    pub chart_config: Option<ChartConfig>,
    pub evaluation_data: Option<EvaluationData>,
    pub chart_data_maps: Option<DataMaps>,
    pub rendering_config: Option<RenderSize>,
}

/// The three inputs synthesis needs, all present.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedRequest<'r> {
    pub chart: &'r ChartConfig,
    pub evaluation: &'r EvaluationData,
    pub maps: &'r DataMaps,
}

impl ChartRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check that all required inputs are present; the error names every missing one.
    pub fn validate(&self) -> Result<ValidatedRequest<'_>> {
        match (&self.chart_config, &self.evaluation_data, &self.chart_data_maps) {
            (Some(chart), Some(evaluation), Some(maps)) => Ok(ValidatedRequest {
                chart,
                evaluation,
                maps,
            }),
            _ => {
                let fields = [
                    ("chartConfig", self.chart_config.is_none()),
                    ("evaluationData", self.evaluation_data.is_none()),
                    ("chartDataMaps", self.chart_data_maps.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();
                Err(ChartError::MissingInput { fields })
            }
        }
    }

    /// Validate, synthesize, and wrap the result for the rendering engine.
    pub fn build_payload(&self, settings: &ExportSettings) -> Result<ExportPayload> {
        let valid = self.validate()?;
        let options = synthesize(valid.chart, valid.evaluation, valid.maps);
        let size = self.rendering_config.clone().unwrap_or_default();
        log::debug!(
            "built {:?} options with {} series",
            options.spec.chart.kind,
            options.spec.series.len()
        );
        Ok(ExportPayload {
            export: ExportJob {
                format: OutputFormat::for_display_type(valid.chart.display_type()),
                scale: settings.scale,
                options: options.spec,
                custom_code: options.custom_code,
                height: size.height.unwrap_or(settings.default_height),
                width: size.width.unwrap_or(settings.default_width),
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Pdf,
}

impl OutputFormat {
    /// Documents only when a PDF export is requested; images otherwise.
    pub fn for_display_type(display_type: Option<ChartDisplayType>) -> Self {
        match display_type {
            Some(ChartDisplayType::PdfExport) => OutputFormat::Pdf,
            _ => OutputFormat::Png,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportPayload {
    pub export: ExportJob,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportJob {
    #[serde(rename = "type")]
    pub format: OutputFormat,
    pub scale: u32,
    pub options: ChartSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
    pub height: u32,
    pub width: u32,
}
