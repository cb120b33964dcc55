//! Labelled result matrices and the ordered set they are compared in.

use std::path::Path;

use sd_core::ResultMatrix;
use sd_core::record::COL_AGENTS;
use sd_output::{ManifestEntry, load_result_matrix};

use crate::{AnalysisError, AnalysisResult};

// ── Dataset ───────────────────────────────────────────────────────────────────

/// One loaded result file.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub file:             String,
    pub label:            String,
    /// Stationary agents present during the measurement.
    pub secondary_agents: u32,
    pub matrix:           ResultMatrix,
}

impl Dataset {
    pub fn new(entry: ManifestEntry, matrix: ResultMatrix) -> Self {
        Self {
            file:             entry.file,
            label:            entry.label,
            secondary_agents: entry.secondary_agents,
            matrix,
        }
    }

    /// Legend text: the label, plus the stationary-agent count when present.
    pub fn display_label(&self) -> String {
        if self.secondary_agents > 0 {
            format!("{}, {} casus", self.label, self.secondary_agents)
        } else {
            self.label.clone()
        }
    }

    /// X coordinate of each row.  With `fold` the secondary agents are added
    /// to the primary count so both populations share one axis.
    pub fn x_values(&self, fold: bool) -> Vec<f64> {
        let offset = if fold { f64::from(self.secondary_agents) } else { 0.0 };
        self.matrix
            .column(COL_AGENTS)
            .into_iter()
            .map(|n| n + offset)
            .collect()
    }
}

// ── DatasetSet ────────────────────────────────────────────────────────────────

/// Datasets keyed by file name, iterated in first-insertion order.
#[derive(Clone, Debug, Default)]
pub struct DatasetSet {
    datasets: Vec<Dataset>,
}

impl DatasetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `dataset`.  A dataset with the same file name is replaced in
    /// place and returned.
    pub fn insert(&mut self, dataset: Dataset) -> Option<Dataset> {
        match self.datasets.iter_mut().find(|d| d.file == dataset.file) {
            Some(slot) => {
                tracing::warn!(file = %dataset.file, "dataset listed twice; keeping the later entry");
                Some(std::mem::replace(slot, dataset))
            }
            None => {
                self.datasets.push(dataset);
                None
            }
        }
    }

    pub fn get(&self, file: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.file == file)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dataset> {
        self.datasets.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

impl<'a> IntoIterator for &'a DatasetSet {
    type Item = &'a Dataset;
    type IntoIter = std::slice::Iter<'a, Dataset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Dataset> for DatasetSet {
    fn from_iter<I: IntoIterator<Item = Dataset>>(iter: I) -> Self {
        let mut set = Self::new();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

/// Load every manifest entry's result file from `dir`.
///
/// # Errors
/// [`AnalysisError::Dataset`] naming the first file that fails to load.
pub fn load_datasets(entries: Vec<ManifestEntry>, dir: &Path) -> AnalysisResult<DatasetSet> {
    let mut set = DatasetSet::new();
    for entry in entries {
        let matrix = load_result_matrix(&dir.join(&entry.file))
            .map_err(|source| AnalysisError::Dataset { file: entry.file.clone(), source })?;
        tracing::info!(file = %entry.file, label = %entry.label, rows = matrix.len(), "dataset loaded");
        set.insert(Dataset::new(entry, matrix));
    }
    Ok(set)
}
