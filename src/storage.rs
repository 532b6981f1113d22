use crate::chart::{ChartSpec, Series, SeriesData};
use crate::error::Result;
use crate::format::{ValueStyle, format_data_point_value};
use crate::models::MetricConfig;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One row of the resolved data table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub series: String,
    pub category: String,
    pub value: Option<f64>,
}

/// Flatten the series of a chart spec into `(series, category, value)` rows.
///
/// Plain value arrays are aligned with the x-axis categories; named points and pie
/// slices carry their own labels.
pub fn table_rows(spec: &ChartSpec) -> Vec<TableRow> {
    let categories = spec.categories();
    let mut rows = Vec::new();
    for series in &spec.series {
        match series {
            Series::Cartesian(s) => match &s.data {
                SeriesData::Values(values) => {
                    rows.extend(categories.iter().zip(values).map(|(c, v)| TableRow {
                        series: s.name.clone(),
                        category: c.clone(),
                        value: *v,
                    }))
                }
                SeriesData::Points(points) => rows.extend(points.iter().map(|p| TableRow {
                    series: s.name.clone(),
                    category: p.name.clone(),
                    value: Some(p.y),
                })),
            },
            Series::Pie(s) => rows.extend(s.data.iter().map(|p| TableRow {
                series: s.name.clone(),
                category: p.name.clone(),
                value: Some(p.y),
            })),
        }
    }
    rows
}

/// Save the chart's data table as CSV with header, values formatted for `metric`.
pub fn save_csv<P: AsRef<Path>>(
    spec: &ChartSpec,
    metric: Option<&MetricConfig>,
    path: P,
) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["series", "category", "value"])?;
    for row in table_rows(spec) {
        let value = format_data_point_value(row.value, metric, ValueStyle::Csv);
        wtr.write_record([row.series.as_str(), row.category.as_str(), value.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save any serializable value (options or export payload) as pretty JSON.
pub fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::template;
    use crate::chart::types::{CartesianSeries, SeriesType};
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let mut spec = template::baseline();
        spec.x_axis.categories = Some(vec!["Jan".into(), "Feb".into()]);
        spec.series = vec![Series::Cartesian(CartesianSeries {
            kind: Some(SeriesType::Line),
            name: "Jan, Feb".into(),
            data: SeriesData::Values(vec![Some(1.0), None]),
            legend_symbol: None,
            show_in_legend: None,
            marker: None,
        })];
        save_csv(&spec, None, &csvp).unwrap();
        save_json(&spec, &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
        let text = std::fs::read_to_string(&csvp).unwrap();
        assert_eq!(text, "series,category,value\n\"Jan, Feb\",Jan,1\n\"Jan, Feb\",Feb,\n");
    }
}
