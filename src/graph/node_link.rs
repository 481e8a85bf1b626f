use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: f64,
}

/// Anything that can list its nodes and its weighted edges.
pub trait WeightedGraph {
    /// Node identifiers in a stable iteration order.
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = &str> + '_>;

    fn weighted_edges(&self) -> Box<dyn ExactSizeIterator<Item = WeightedEdge<'_>> + '_>;

    fn contains_node(&self, id: &str) -> bool;

    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Smallest and largest edge weight, `None` for a graph without edges.
    fn weight_range(&self) -> Option<(f64, f64)> {
        self.weighted_edges().fold(None, |range, edge| match range {
            None => Some((edge.weight, edge.weight)),
            Some((min, max)) => Some((min.min(edge.weight), max.max(edge.weight))),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct NodeLinkGraph {
    ids: Vec<String>,
    index_by_id: HashMap<String, usize>,
    edges: Vec<(usize, usize, f64)>,
}

impl NodeLinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: impl Into<String>) -> usize {
        let id = id.into();
        if let Some(&index) = self.index_by_id.get(&id) {
            return index;
        }

        let index = self.ids.len();
        self.index_by_id.insert(id.clone(), index);
        self.ids.push(id);
        index
    }

    pub fn add_edge(&mut self, source: impl Into<String>, target: impl Into<String>, weight: f64) {
        let source = self.add_node(source);
        let target = self.add_node(target);
        self.edges.push((source, target, weight));
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges as index pairs into [`WeightedGraph::nodes`] order.
    pub fn indexed_edges(&self) -> &[(usize, usize, f64)] {
        &self.edges
    }
}

impl WeightedGraph for NodeLinkGraph {
    fn nodes(&self) -> Box<dyn ExactSizeIterator<Item = &str> + '_> {
        Box::new(self.ids.iter().map(String::as_str))
    }

    fn weighted_edges(&self) -> Box<dyn ExactSizeIterator<Item = WeightedEdge<'_>> + '_> {
        Box::new(self.edges.iter().map(move |&(source, target, weight)| WeightedEdge {
            source: &self.ids[source],
            target: &self.ids[target],
            weight,
        }))
    }

    fn contains_node(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }
}
