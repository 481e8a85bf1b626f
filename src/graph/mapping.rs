use std::collections::{HashMap, HashSet};
use std::io::Read;

use log::warn;
use serde::Deserialize;

use super::node_link::WeightedGraph;
use crate::error::{MappingIssue, Result, VizError};

#[derive(Debug, Deserialize)]
struct MappingRow {
    #[serde(alias = "micro")]
    fine: String,
    #[serde(alias = "macro")]
    coarse: String,
}

/// Fine node -> coarse node, iterated in the order fine nodes were first seen.
#[derive(Clone, Debug, Default)]
pub struct FineToCoarse {
    entries: Vec<(String, String)>,
    index_by_fine: HashMap<String, usize>,
}

#[derive(Clone, Debug, Default)]
pub struct CoarseGroups {
    groups: Vec<(String, Vec<String>)>,
    index_by_coarse: HashMap<String, usize>,
}

/// Reads a CSV table with `fine` and `coarse` columns (`micro` / `macro`
/// are accepted too). Other columns, such as an exported row index, are
/// ignored.
pub fn read_mapping<R: Read>(reader: R) -> Result<FineToCoarse> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for row in reader.deserialize::<MappingRow>() {
        let row = row?;
        rows.push((row.fine, row.coarse));
    }

    Ok(FineToCoarse::from_pairs(rows))
}

impl FineToCoarse {
    /// Builds the forward map. A fine node listed twice keeps its first
    /// position and takes the coarse node of its last row.
    pub fn from_pairs<I, F, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, C)>,
        F: Into<String>,
        C: Into<String>,
    {
        let mut map = Self::default();
        for (fine, coarse) in pairs {
            let fine = fine.into();
            let coarse = coarse.into();

            if let Some(&index) = map.index_by_fine.get(&fine) {
                let previous = &mut map.entries[index].1;
                if *previous != coarse {
                    warn!("fine node {fine:?} reassigned from {previous:?} to {coarse:?}");
                }
                *previous = coarse;
                continue;
            }

            map.index_by_fine.insert(fine.clone(), map.entries.len());
            map.entries.push((fine, coarse));
        }
        map
    }

    pub fn coarse_of(&self, fine: &str) -> Option<&str> {
        self.index_by_fine
            .get(fine)
            .map(|&index| self.entries[index].1.as_str())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(fine, coarse)| (fine.as_str(), coarse.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn invert(&self) -> CoarseGroups {
        let mut groups = CoarseGroups::default();
        for (fine, coarse) in self.iter() {
            let index = match groups.index_by_coarse.get(coarse) {
                Some(&index) => index,
                None => {
                    let index = groups.groups.len();
                    groups.index_by_coarse.insert(coarse.to_owned(), index);
                    groups.groups.push((coarse.to_owned(), Vec::new()));
                    index
                }
            };
            groups.groups[index].1.push(fine.to_owned());
        }
        groups
    }

    pub fn validate(&self, fine: &dyn WeightedGraph, coarse: &dyn WeightedGraph) -> Result<()> {
        if let Some(unmapped) = fine.nodes().find(|id| self.coarse_of(id).is_none()) {
            return Err(VizError::mapping(MappingIssue::FineNodeUnmapped(
                unmapped.to_owned(),
            )));
        }

        for (fine_id, coarse_id) in self.iter() {
            if !fine.contains_node(fine_id) {
                return Err(VizError::mapping(MappingIssue::FineNodeNotInGraph(
                    fine_id.to_owned(),
                )));
            }
            if !coarse.contains_node(coarse_id) {
                return Err(VizError::mapping(MappingIssue::CoarseNodeNotInGraph(
                    coarse_id.to_owned(),
                )));
            }
        }

        let referenced = self
            .entries
            .iter()
            .map(|(_, coarse_id)| coarse_id.as_str())
            .collect::<HashSet<_>>();
        if let Some(empty) = coarse.nodes().find(|id| !referenced.contains(id)) {
            return Err(VizError::mapping(MappingIssue::CoarseNodeWithoutMembers(
                empty.to_owned(),
            )));
        }

        Ok(())
    }
}

impl CoarseGroups {
    pub fn members(&self, coarse: &str) -> Option<&[String]> {
        self.index_by_coarse
            .get(coarse)
            .map(|&index| self.groups[index].1.as_slice())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[String])> + '_ {
        self.groups
            .iter()
            .map(|(coarse, members)| (coarse.as_str(), members.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn largest_group(&self) -> usize {
        self.groups
            .iter()
            .map(|(_, members)| members.len())
            .max()
            .unwrap_or(0)
    }

    pub fn merged_count(&self) -> usize {
        self.groups
            .iter()
            .filter(|(_, members)| members.len() > 1)
            .count()
    }
}
