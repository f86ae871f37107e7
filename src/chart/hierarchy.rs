//! Hierarchy aggregation
//!
//! Turns table rows into the flat node arrays a hierarchical chart needs.
//! Every row walks its path from root to leaf and adds its weight (its
//! value, or 1 without a values column) to each node on the way, so a
//! parent's value is always the total of its children.

use crate::constants::{MIXED_CATEGORY, NODE_ID_ESCAPE, NODE_ID_SEPARATOR};
use crate::types::{DataCell, Table};
use serde::Serialize;
use std::collections::HashMap;

/// A single segment of the chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HierarchyNode {
    /// Path prefix joined with `/`, with `/` and `\` in labels escaped
    pub id: String,
    pub label: String,
    /// Parent id, empty for roots
    pub parent: String,
    /// 0 for roots
    pub depth: usize,
    pub value: f64,
    pub color: Option<NodeColor>,
}

/// Color assigned to a node from the color column
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeColor {
    /// Weighted mean of a numeric color column
    Continuous(f64),
    /// Shared category, or `(?)` when the node's rows disagree
    Category(String),
}

/// Nodes in insertion order; parents always come before their children
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Hierarchy {
    pub nodes: Vec<HierarchyNode>,
}

impl Hierarchy {
    /// Number of levels actually present
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth + 1).max().unwrap_or(0)
    }

    pub fn roots(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter().filter(|n| n.parent.is_empty())
    }

    pub fn node(&self, id: &str) -> Option<&HierarchyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a HierarchyNode> + 'a {
        self.nodes.iter().filter(move |n| n.parent == id)
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for node in &self.nodes {
            if let Some(NodeColor::Category(c)) = &node.color {
                if !seen.contains(&c.as_str()) {
                    seen.push(c.as_str());
                }
            }
        }
        seen
    }
}

/// How the color column is read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorField {
    Continuous(usize),
    Categorical(usize),
}

#[derive(Default)]
enum CategoryState {
    #[default]
    Unset,
    Single(String),
    Mixed,
}

#[derive(Default)]
struct Accumulator {
    value: f64,
    weighted_sum: f64,
    weight: f64,
    plain_sum: f64,
    count: usize,
    category: CategoryState,
}

enum ColorSample {
    Number(f64),
    Category(String),
}

impl Accumulator {
    fn add(&mut self, weight: f64, sample: Option<&ColorSample>) {
        self.value += weight;
        match sample {
            Some(ColorSample::Number(c)) => {
                self.weighted_sum += weight * c;
                self.weight += weight;
                self.plain_sum += c;
                self.count += 1;
            }
            Some(ColorSample::Category(c)) => {
                self.category = match std::mem::take(&mut self.category) {
                    CategoryState::Unset => CategoryState::Single(c.clone()),
                    CategoryState::Single(existing) if existing == *c => {
                        CategoryState::Single(existing)
                    }
                    _ => CategoryState::Mixed,
                };
            }
            None => {}
        }
    }

    fn color(&self, field: Option<ColorField>) -> Option<NodeColor> {
        match field? {
            ColorField::Continuous(_) => {
                if self.count == 0 {
                    None
                } else if self.weight != 0.0 {
                    Some(NodeColor::Continuous(self.weighted_sum / self.weight))
                } else {
                    Some(NodeColor::Continuous(self.plain_sum / self.count as f64))
                }
            }
            ColorField::Categorical(_) => match &self.category {
                CategoryState::Unset => None,
                CategoryState::Single(c) => Some(NodeColor::Category(c.clone())),
                CategoryState::Mixed => Some(NodeColor::Category(MIXED_CATEGORY.to_string())),
            },
        }
    }
}

/// Aggregate table rows into hierarchy nodes.
///
/// `path` and `values` are column indices. Errors are plain messages; the
/// builder wraps them as construction errors.
pub fn build_hierarchy(
    table: &Table,
    path: &[usize],
    values: Option<usize>,
    color: Option<ColorField>,
) -> Result<Hierarchy, String> {
    let mut nodes: Vec<HierarchyNode> = Vec::new();
    let mut accumulators: Vec<Accumulator> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for (row_idx, row) in table.rows.iter().enumerate() {
        let levels = row_levels(table, &row.cells, path, row_idx)?;
        if levels.is_empty() {
            skipped += 1;
            continue;
        }

        let weight = match values {
            Some(col) => match row.cells.get(col) {
                Some(DataCell::Number(n)) => *n,
                Some(DataCell::Text(s)) => {
                    return Err(format!(
                        "Values column '{}' must be numeric, found '{}' in row {}",
                        table.columns[col],
                        s,
                        row_idx + 1
                    ));
                }
                _ => 0.0,
            },
            None => 1.0,
        };

        let sample = color.and_then(|field| match field {
            ColorField::Continuous(col) => row
                .cells
                .get(col)
                .and_then(DataCell::as_f64)
                .map(ColorSample::Number),
            ColorField::Categorical(col) => row
                .cells
                .get(col)
                .filter(|cell| !cell.is_empty())
                .map(|cell| ColorSample::Category(cell.to_string())),
        });

        let mut id = String::new();
        for (depth, label) in levels.into_iter().enumerate() {
            let parent = id.clone();
            if depth > 0 {
                id.push(NODE_ID_SEPARATOR);
            }
            push_escaped(&mut id, &label);

            let slot = match index.get(&id) {
                Some(&slot) => slot,
                None => {
                    nodes.push(HierarchyNode {
                        id: id.clone(),
                        label,
                        parent,
                        depth,
                        value: 0.0,
                        color: None,
                    });
                    accumulators.push(Accumulator::default());
                    index.insert(id.clone(), nodes.len() - 1);
                    nodes.len() - 1
                }
            };
            accumulators[slot].add(weight, sample.as_ref());
        }
    }

    if nodes.is_empty() {
        return Err(format!(
            "No rows have a value in hierarchy column '{}'",
            path.first().map(|&c| table.columns[c].as_str()).unwrap_or_default()
        ));
    }
    if skipped > 0 {
        tracing::debug!(skipped, "Rows without a root level left out of the hierarchy");
    }

    for (node, acc) in nodes.iter_mut().zip(&accumulators) {
        node.value = acc.value;
        node.color = acc.color(color);
    }

    Ok(Hierarchy { nodes })
}

/// Append a label to a node id so that no label can pose as a deeper path
fn push_escaped(id: &mut String, label: &str) {
    for ch in label.chars() {
        if ch == NODE_ID_SEPARATOR || ch == NODE_ID_ESCAPE {
            id.push(NODE_ID_ESCAPE);
        }
        id.push(ch);
    }
}

/// Labels along a row's path, cut at the first missing level
fn row_levels(
    table: &Table,
    cells: &[DataCell],
    path: &[usize],
    row_idx: usize,
) -> Result<Vec<String>, String> {
    let mut levels = Vec::with_capacity(path.len());
    let mut gap: Option<usize> = None;
    for &col in path {
        match cells.get(col) {
            Some(cell) if !cell.is_empty() => {
                if let Some(missing) = gap {
                    return Err(format!(
                        "Missing value in column '{}' (row {}) cannot have non-missing children",
                        table.columns[missing],
                        row_idx + 1
                    ));
                }
                levels.push(cell.to_string());
            }
            _ => {
                gap.get_or_insert(col);
            }
        }
    }
    Ok(levels)
}
