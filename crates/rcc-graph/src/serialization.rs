use rcc_core::errors::{ErrorInfo, RccError};
use rcc_core::VertexId;
use serde::{Deserialize, Serialize};

use crate::graph::{AttributedGraph, BondOrder, EdgeAttrs, VertexAttrs};

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &AttributedGraph) -> Result<Vec<u8>, RccError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| RccError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<AttributedGraph, RccError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| RccError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &AttributedGraph) -> Result<String, RccError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| RccError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<AttributedGraph, RccError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| RccError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

impl Serialize for AttributedGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        SerializableGraph::from_graph(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AttributedGraph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let serializable = SerializableGraph::deserialize(deserializer)?;
        serializable
            .into_graph()
            .map_err(|err| serde::de::Error::custom(err.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    vertices: Vec<SerializableVertex>,
    edges: Vec<SerializableEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SerializableVertex {
    id: u64,
    element: String,
    charge: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SerializableEdge {
    a: u64,
    b: u64,
    order: BondOrder,
    standard_order: i32,
}

impl SerializableGraph {
    fn from_graph(graph: &AttributedGraph) -> Self {
        let vertices = graph
            .vertex_payloads()
            .map(|(id, attrs)| SerializableVertex {
                id: id.as_raw(),
                element: attrs.element.clone(),
                charge: attrs.charge,
            })
            .collect();
        let edges = graph
            .edges()
            .map(|(a, b, attrs)| SerializableEdge {
                a: a.as_raw(),
                b: b.as_raw(),
                order: attrs.order,
                standard_order: attrs.standard_order,
            })
            .collect();
        Self { vertices, edges }
    }

    fn into_graph(self) -> Result<AttributedGraph, RccError> {
        let mut graph = AttributedGraph::new();
        for vertex in self.vertices {
            graph.add_vertex(
                VertexId::from_raw(vertex.id),
                VertexAttrs::new(vertex.element, vertex.charge),
            )?;
        }
        for edge in self.edges {
            graph.add_edge(
                VertexId::from_raw(edge.a),
                VertexId::from_raw(edge.b),
                EdgeAttrs::new(edge.order, edge.standard_order),
            )?;
        }
        Ok(graph)
    }
}
