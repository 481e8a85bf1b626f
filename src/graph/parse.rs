use serde_json::{Map, Number, Value};

use super::node_link::NodeLinkGraph;
use crate::error::{Result, VizError};

/// Parses a node-link JSON document: `{"nodes": [...], "edges": [...]}`.
///
/// Nodes may be bare ids or objects with an `id` field, `links` is accepted
/// in place of `edges`, and a missing edge weight counts as `1.0`.
pub fn parse_graph(raw: &str) -> Result<NodeLinkGraph> {
    let parsed: Value =
        serde_json::from_str(raw).map_err(|error| VizError::GraphFormat(error.to_string()))?;
    let object = parsed
        .as_object()
        .ok_or_else(|| VizError::GraphFormat("top level value must be an object".to_owned()))?;

    let mut graph = NodeLinkGraph::new();

    for node in array_field(object, &["nodes"])? {
        let id = match node {
            Value::Object(fields) => fields
                .get("id")
                .and_then(normalize_id)
                .ok_or_else(|| VizError::GraphFormat(format!("node without usable id: {node}")))?,
            other => normalize_id(other)
                .ok_or_else(|| VizError::GraphFormat(format!("unusable node id: {other}")))?,
        };
        graph.add_node(id);
    }

    for edge in array_field(object, &["edges", "links"])? {
        let fields = edge
            .as_object()
            .ok_or_else(|| VizError::GraphFormat(format!("edge must be an object: {edge}")))?;
        let source = endpoint(fields, "source")?;
        let target = endpoint(fields, "target")?;
        let weight = match fields.get("weight") {
            None | Some(Value::Null) => 1.0,
            Some(value) => value.as_f64().ok_or_else(|| {
                VizError::GraphFormat(format!("edge {source} - {target} has non-numeric weight"))
            })?,
        };
        graph.add_edge(source, target, weight);
    }

    Ok(graph)
}

fn array_field<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Result<&'a [Value]> {
    let Some(value) = names.iter().find_map(|name| object.get(*name)) else {
        return Ok(&[]);
    };

    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| VizError::GraphFormat(format!("{:?} must be an array", names[0])))
}

fn endpoint(fields: &Map<String, Value>, key: &str) -> Result<String> {
    fields
        .get(key)
        .and_then(normalize_id)
        .ok_or_else(|| VizError::GraphFormat(format!("edge is missing a usable {key:?}")))
}

fn normalize_id(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_owned()),
        Value::Number(number) => Some(number_id(number)),
        _ => None,
    }
}

const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// `1.0` and `1` name the same node, as they do in a CSV cell.
fn number_id(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER => {
            (value as i64).to_string()
        }
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedGraph;

    #[test]
    fn parses_bare_ids_and_weighted_edges() {
        let graph = parse_graph(
            r#"{
                "nodes": [1, 2, "three"],
                "edges": [
                    {"source": 1, "target": 2, "weight": 0.5},
                    {"source": 2, "target": "three"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["1", "2", "three"]);
        assert_eq!(graph.indexed_edges(), &[(0, 1, 0.5), (1, 2, 1.0)]);
    }

    #[test]
    fn accepts_node_objects_and_links_alias() {
        let graph = parse_graph(
            r#"{
                "directed": false,
                "nodes": [{"id": "a"}, {"id": "b", "label": "ignored"}],
                "links": [{"source": "a", "target": "b", "weight": 4}]
            }"#,
        )
        .unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.weight_range(), Some((4.0, 4.0)));
    }

    #[test]
    fn integral_float_ids_match_integer_ids() {
        let graph = parse_graph(
            r#"{
                "nodes": [1.0, 2, -3.0, 2.5],
                "edges": [{"source": 1, "target": 2.0}]
            }"#,
        )
        .unwrap();

        assert_eq!(
            graph.nodes().collect::<Vec<_>>(),
            vec!["1", "2", "-3", "2.5"]
        );
        assert_eq!(graph.indexed_edges(), &[(0, 1, 1.0)]);
    }

    #[test]
    fn edge_endpoints_are_declared_implicitly() {
        let graph = parse_graph(r#"{"edges": [{"source": "x", "target": "y"}]}"#).unwrap();
        assert!(graph.contains_node("x"));
        assert!(graph.contains_node("y"));
    }

    #[test]
    fn empty_document_is_an_empty_graph() {
        let graph = parse_graph("{}").unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn rejects_non_numeric_weight() {
        let error = parse_graph(
            r#"{"nodes": [1, 2], "edges": [{"source": 1, "target": 2, "weight": "heavy"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(error, VizError::GraphFormat(_)));
    }

    #[test]
    fn rejects_non_object_document() {
        assert!(matches!(
            parse_graph("[1, 2, 3]"),
            Err(VizError::GraphFormat(_))
        ));
        assert!(matches!(parse_graph("not json"), Err(VizError::GraphFormat(_))));
    }
}
