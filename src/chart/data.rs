use std::ops::Range;

use crate::errors::BenchError;
use crate::types::{Dataset, Operation, SeriesSet};

use super::options::SeriesSelection;

/// One line on the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSeries<'a> {
    pub label: String,
    pub structure: &'a str,
    pub operation: Operation,
    pub values: &'a [i64],
}

/// Renderer input: a shared x-axis `0..samples` and the selected y-series.
#[derive(Debug, Clone)]
pub struct ChartData<'a> {
    samples: usize,
    series: Vec<NamedSeries<'a>>,
}

impl<'a> ChartData<'a> {
    /// Pick the selected (structure, operation) series out of `dataset`.
    ///
    /// Series come out structure by structure, operations in selection order.
    ///
    /// # Errors
    /// `EmptySelection` if nothing is selected, `UnknownStructure` if the
    /// selection names a structure the dataset does not hold.
    pub fn from_dataset(
        dataset: &'a Dataset,
        selection: &SeriesSelection,
    ) -> Result<Self, BenchError> {
        let picked: Vec<(&'a str, &'a SeriesSet)> = match &selection.structures {
            Some(list) => list
                .iter()
                .map(|name| {
                    dataset
                        .iter()
                        .find(|(k, _)| *k == name.as_str())
                        .ok_or_else(|| BenchError::UnknownStructure(name.clone()))
                })
                .collect::<Result<_, _>>()?,
            None => dataset.iter().collect(),
        };
        let mut series = Vec::with_capacity(picked.len() * selection.operations.len());
        for (name, set) in picked {
            for &op in &selection.operations {
                series.push(NamedSeries {
                    label: format!("{name} {op}"),
                    structure: name,
                    operation: op,
                    values: set.series(op),
                });
            }
        }
        if series.is_empty() {
            return Err(BenchError::EmptySelection);
        }
        Ok(Self { samples: dataset.samples(), series })
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// The x-axis: sample indices in benchmark order.
    #[must_use]
    pub fn x(&self) -> Range<usize> {
        0..self.samples
    }

    #[must_use]
    pub fn series(&self) -> &[NamedSeries<'a>] {
        &self.series
    }

    /// Smallest and largest value over all series, `None` when there are no samples.
    #[must_use]
    pub fn value_bounds(&self) -> Option<(i64, i64)> {
        let mut it = self.series.iter().flat_map(|s| s.values.iter().copied());
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
