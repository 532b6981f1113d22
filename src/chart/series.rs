//! Group projected points into renderer series.

use super::axis::ProjectedPoint;
use super::types::{NamedPoint, SeriesData};
use crate::models::DataMaps;
use crate::resolve::resolve_label;
use ahash::AHashMap;
use std::cmp::Ordering;

/// Line/bar data: categories plus one entry per series.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianData {
    pub categories: Vec<String>,
    pub series: Vec<SeriesGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGroup {
    pub name: String,
    pub data: SeriesData,
}

struct Labeled {
    value: f64,
    category: String,
    name: String,
}

/// Build line/bar series.
///
/// Points without a value, a category label, or a series label (when the result has a
/// series axis) are dropped. Series without an explicit series axis take
/// `fallback_name`. When a single series remains it is renamed to the joined
/// categories and its data laid out by category position.
pub fn build_cartesian(
    points: &[ProjectedPoint<'_>],
    maps: &DataMaps,
    fallback_name: &str,
) -> CartesianData {
    let labeled: Vec<Labeled> = points
        .iter()
        .filter_map(|p| {
            let value = p.value.filter(|v| v.is_finite())?;
            let category = resolve_label(p.category?, maps)?;
            let name = match p.series {
                Some(series) => resolve_label(series, maps)?,
                None => fallback_name.to_owned(),
            };
            Some(Labeled {
                value,
                category,
                name,
            })
        })
        .collect();
    log_dropped(points.len(), labeled.len());

    let mut categories: Vec<String> = Vec::new();
    for l in &labeled {
        if !categories.contains(&l.category) {
            categories.push(l.category.clone());
        }
    }

    let groups = group_by_name(&labeled);
    if let [(name, members)] = groups.as_slice() {
        log::debug!("collapsing single series {name:?} onto {} categories", categories.len());
        let data = categories
            .iter()
            .map(|c| members.iter().find(|l| &l.category == c).map(|l| l.value))
            .collect();
        return CartesianData {
            series: vec![SeriesGroup {
                name: categories.join(", "),
                data: SeriesData::Values(data),
            }],
            categories,
        };
    }

    let series = groups
        .into_iter()
        .map(|(name, members)| SeriesGroup {
            name: name.to_owned(),
            data: SeriesData::Points(
                members
                    .iter()
                    .map(|l| NamedPoint::new(l.category.clone(), l.value))
                    .collect(),
            ),
        })
        .collect();
    CartesianData { categories, series }
}

/// Build pie slices: one per distinct label, values summed, largest first.
///
/// A slice is labeled by the resolved series label, else the resolved category,
/// else `fallback_name`; only points without a finite value are dropped. Equal sums
/// keep first-seen order.
pub fn build_pie(
    points: &[ProjectedPoint<'_>],
    maps: &DataMaps,
    fallback_name: &str,
) -> Vec<NamedPoint> {
    let labeled: Vec<(String, f64)> = points
        .iter()
        .filter_map(|p| {
            let value = p.value.filter(|v| v.is_finite())?;
            let name = p
                .series
                .and_then(|attr| resolve_label(attr, maps))
                .or_else(|| p.category.and_then(|attr| resolve_label(attr, maps)))
                .unwrap_or_else(|| fallback_name.to_owned());
            Some((name, value))
        })
        .collect();
    log_dropped(points.len(), labeled.len());

    let mut index: AHashMap<&str, usize> = AHashMap::new();
    let mut slices: Vec<NamedPoint> = Vec::new();
    for (name, value) in &labeled {
        match index.get(name.as_str()) {
            Some(&i) => slices[i].y += value,
            None => {
                index.insert(name.as_str(), slices.len());
                slices.push(NamedPoint::new(name.clone(), *value));
            }
        }
    }
    slices.sort_by(|a, b| b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal));
    slices
}

/// Group by series name, keeping first-seen order of names and of points.
fn group_by_name(labeled: &[Labeled]) -> Vec<(&str, Vec<&Labeled>)> {
    let mut index: AHashMap<&str, usize> = AHashMap::new();
    let mut groups: Vec<(&str, Vec<&Labeled>)> = Vec::new();
    for l in labeled {
        match index.get(l.name.as_str()) {
            Some(&i) => groups[i].1.push(l),
            None => {
                index.insert(l.name.as_str(), groups.len());
                groups.push((l.name.as_str(), vec![l]));
            }
        }
    }
    groups
}

fn log_dropped(total: usize, kept: usize) {
    if kept < total {
        log::debug!("dropped {} of {total} data points without value or label", total - kept);
    }
}
