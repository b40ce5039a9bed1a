//! Knowledge graph assembly over petgraph.
//!
//! Nodes are keyed by their normalized entity text. Re-visiting a node only
//! unions its provenance; edges are keyed by the ordered (subject, object)
//! pair and their label follows the configured [`EdgeLabelPolicy`].

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::EdgeLabelPolicy;
use crate::ingest::normalize;
use crate::relationship::Relationship;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    /// Source files mentioning this entity, sorted and unique
    pub referenced_by: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl GraphNode {
    fn new(id: String) -> Self {
        Self {
            id,
            referenced_by: Vec::new(),
            topic: None,
        }
    }

    fn add_reference(&mut self, source_file: &str) {
        if let Err(pos) = self
            .referenced_by
            .binary_search_by(|f| f.as_str().cmp(source_file))
        {
            self.referenced_by.insert(pos, source_file.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Relation of the last relationship seen for this pair
    pub label: String,
    /// Every distinct relation seen, in first-seen order, under
    /// [`EdgeLabelPolicy::Accumulate`]; just `label` otherwise
    pub labels: Vec<String>,
}

impl GraphEdge {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            labels: vec![label.to_string()],
        }
    }

    fn relabel(&mut self, label: &str, policy: EdgeLabelPolicy) {
        match policy {
            EdgeLabelPolicy::LastWriteWins => *self = Self::new(label),
            EdgeLabelPolicy::Accumulate => {
                if !self.labels.iter().any(|l| l == label) {
                    self.labels.push(label.to_string());
                }
                self.label = label.to_string();
            }
        }
    }
}

/// Serialized edge handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub label: String,
    pub labels: Vec<String>,
}

/// Finished graph plus the topic list, as consumed by a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<EdgeRecord>,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    graph: DiGraph<GraphNode, GraphEdge>,
    node_index: HashMap<String, NodeIndex>,
    policy: EdgeLabelPolicy,
}

/// Assembles relationships in order with last-write-wins edge labels.
#[must_use]
pub fn build_graph(relationships: &[Relationship]) -> KnowledgeGraph {
    KnowledgeGraph::build(relationships, EdgeLabelPolicy::LastWriteWins)
}

impl KnowledgeGraph {
    #[must_use]
    pub fn new(policy: EdgeLabelPolicy) -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: HashMap::new(),
            policy,
        }
    }

    #[must_use]
    pub fn build(relationships: &[Relationship], policy: EdgeLabelPolicy) -> Self {
        let mut graph = Self::new(policy);
        for rel in relationships {
            graph.add_relationship(rel);
        }
        graph
    }

    /// Entities are normalized again here, since a `Relationship` may have
    /// been deserialized rather than built with `Relationship::new`.
    pub fn add_relationship(&mut self, rel: &Relationship) {
        let subject = normalize(&rel.subject);
        let object = normalize(&rel.object);
        if subject.is_empty() || object.is_empty() {
            tracing::debug!("Skipping relationship with an empty entity: {}", rel);
            return;
        }

        let source = self.ensure_node(subject, &rel.source_file);
        let target = self.ensure_node(object, &rel.source_file);

        match self.graph.find_edge(source, target) {
            Some(edge) => {
                if let Some(weight) = self.graph.edge_weight_mut(edge) {
                    weight.relabel(&rel.relation, self.policy);
                }
            }
            None => {
                self.graph
                    .add_edge(source, target, GraphEdge::new(&rel.relation));
            }
        }
    }

    fn ensure_node(&mut self, id: String, source_file: &str) -> NodeIndex {
        let index = match self.node_index.get(&id) {
            Some(&index) => index,
            None => {
                let index = self.graph.add_node(GraphNode::new(id.clone()));
                self.node_index.insert(id, index);
                index
            }
        };
        self.graph[index].add_reference(source_file);
        index
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index.get(&normalize(id)).map(|&i| &self.graph[i])
    }

    #[must_use]
    pub fn edge(&self, source: &str, target: &str) -> Option<&GraphEdge> {
        let source = *self.node_index.get(&normalize(source))?;
        let target = *self.node_index.get(&normalize(target))?;
        self.graph
            .find_edge(source, target)
            .and_then(|e| self.graph.edge_weight(e))
    }

    /// Nodes in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    /// `(source, target, edge)` in first-seen order.
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode, &GraphNode, &GraphEdge)> {
        self.graph.edge_references().map(|e| {
            (
                &self.graph[e.source()],
                &self.graph[e.target()],
                e.weight(),
            )
        })
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    #[must_use]
    pub const fn policy(&self) -> EdgeLabelPolicy {
        self.policy
    }

    /// Underlying petgraph graph, for layout or traversal by renderers.
    #[must_use]
    pub const fn inner(&self) -> &DiGraph<GraphNode, GraphEdge> {
        &self.graph
    }

    /// Tags each node with the first topic contained in its lower-cased id.
    pub fn assign_topics(&mut self, topics: &[String]) {
        for node in self.graph.node_weights_mut() {
            let id = node.id.to_lowercase();
            node.topic = topics.iter().find(|t| id.contains(t.as_str())).cloned();
        }
    }

    #[must_use]
    pub fn to_export(&self, topics: &[String]) -> GraphExport {
        GraphExport {
            nodes: self.nodes().cloned().collect(),
            edges: self
                .edges()
                .map(|(source, target, edge)| EdgeRecord {
                    source: source.id.clone(),
                    target: target.id.clone(),
                    label: edge.label.clone(),
                    labels: edge.labels.clone(),
                })
                .collect(),
            topics: topics.to_vec(),
        }
    }
}
