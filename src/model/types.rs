//! Graph, subgraph and statement types
//!
//! Containers own their statements and only ever append to them. The
//! builder methods live on [`Container`](crate::builder::Container); this
//! module is data plus the serde representation used by description files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::{AttrValue, AttributeList, NodeId};
use crate::error::DotError;

/// Root container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphRepr")]
pub struct Graph {
    pub(crate) strict: bool,
    pub(crate) directed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    pub(crate) statements: Vec<Statement>,
}

impl Graph {
    pub fn new(name: Option<&str>, directed: bool) -> Self {
        Self {
            strict: false,
            directed,
            name: name.map(str::to_string),
            statements: Vec::new(),
        }
    }

    /// Mark the graph as strict (no multi-edges)
    pub fn strict(&mut self) -> &mut Self {
        self.strict = true;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

/// Nested container; also a statement and a possible edge endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SubgraphRepr")]
pub struct Subgraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip)]
    pub(crate) directed: bool,
    pub(crate) statements: Vec<Statement>,
}

impl Subgraph {
    /// Standalone subgraph, for use as an edge endpoint. Subgraphs nested in
    /// a graph should be created with
    /// [`Container::subgraph`](crate::builder::Container::subgraph).
    pub fn new(name: Option<&str>, directed: bool) -> Self {
        Self {
            name: name.map(str::to_string),
            directed,
            statements: Vec::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub(crate) fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
        propagate_directed(&mut self.statements, directed);
    }
}

/// One line-level construct inside a graph or subgraph body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    Node(NodeStmt),
    Edge(EdgeStmt),
    Attr(AttrStmt),
    Subgraph(Subgraph),
    Identity(IdentityStmt),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStmt {
    pub(crate) id: NodeId,
    #[serde(default, deserialize_with = "one_or_many")]
    pub(crate) attributes: Vec<AttributeList>,
}

impl NodeStmt {
    pub fn new(id: NodeId, attributes: AttributeList) -> Self {
        Self {
            id,
            attributes: vec![attributes],
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn attributes(&self) -> &[AttributeList] {
        &self.attributes
    }
}

/// Either side of an edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EndpointRepr", into = "EndpointRepr")]
pub enum Endpoint {
    Node(NodeId),
    Subgraph(Subgraph),
}

impl From<NodeId> for Endpoint {
    fn from(id: NodeId) -> Self {
        Endpoint::Node(id)
    }
}

impl From<Subgraph> for Endpoint {
    fn from(subgraph: Subgraph) -> Self {
        Endpoint::Subgraph(subgraph)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum EndpointRepr {
    Node(NodeId),
    Subgraph { subgraph: Subgraph },
}

impl From<EndpointRepr> for Endpoint {
    fn from(repr: EndpointRepr) -> Self {
        match repr {
            EndpointRepr::Node(id) => Endpoint::Node(id),
            EndpointRepr::Subgraph { subgraph } => Endpoint::Subgraph(subgraph),
        }
    }
}

impl From<Endpoint> for EndpointRepr {
    fn from(endpoint: Endpoint) -> Self {
        match endpoint {
            Endpoint::Node(id) => EndpointRepr::Node(id),
            Endpoint::Subgraph(subgraph) => EndpointRepr::Subgraph { subgraph },
        }
    }
}

/// A chain `from OP to[0] OP to[1] ...`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EdgeRepr")]
pub struct EdgeStmt {
    #[serde(skip)]
    pub(crate) directed: bool,
    pub(crate) from: Endpoint,
    pub(crate) to: Vec<Endpoint>,
    pub(crate) attributes: Vec<AttributeList>,
}

impl EdgeStmt {
    /// Fails when `to` is empty
    pub fn new(
        directed: bool,
        from: Endpoint,
        to: Vec<Endpoint>,
        attributes: AttributeList,
    ) -> Result<Self, DotError> {
        if to.is_empty() {
            return Err(DotError::invalid_argument(
                "edge requires at least one destination",
            ));
        }

        Ok(Self {
            directed,
            from,
            to,
            attributes: vec![attributes],
        })
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn from(&self) -> &Endpoint {
        &self.from
    }

    pub fn to(&self) -> &[Endpoint] {
        &self.to
    }

    pub fn attributes(&self) -> &[AttributeList] {
        &self.attributes
    }

    pub(crate) fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
        for endpoint in std::iter::once(&mut self.from).chain(self.to.iter_mut()) {
            if let Endpoint::Subgraph(subgraph) = endpoint {
                subgraph.set_directed(directed);
            }
        }
    }
}

#[derive(Deserialize)]
struct EdgeRepr {
    from: Endpoint,
    #[serde(deserialize_with = "one_or_many")]
    to: Vec<Endpoint>,
    #[serde(default, deserialize_with = "one_or_many")]
    attributes: Vec<AttributeList>,
}

impl TryFrom<EdgeRepr> for EdgeStmt {
    type Error = DotError;

    fn try_from(repr: EdgeRepr) -> Result<Self, Self::Error> {
        let mut edge = EdgeStmt::new(false, repr.from, repr.to, AttributeList::new())?;
        edge.attributes = repr.attributes;
        Ok(edge)
    }
}

/// Which kind of element an attribute statement sets defaults for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrComponent {
    Graph,
    Node,
    Edge,
}

impl AttrComponent {
    pub fn keyword(&self) -> &'static str {
        match self {
            AttrComponent::Graph => "graph",
            AttrComponent::Node => "node",
            AttrComponent::Edge => "edge",
        }
    }
}

impl fmt::Display for AttrComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for AttrComponent {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graph" => Ok(AttrComponent::Graph),
            "node" => Ok(AttrComponent::Node),
            "edge" => Ok(AttrComponent::Edge),
            other => Err(DotError::invalid_argument(format!(
                "unknown attribute component '{other}', expected graph, node or edge"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrStmt {
    pub(crate) component: AttrComponent,
    #[serde(default, deserialize_with = "one_or_many")]
    pub(crate) attributes: Vec<AttributeList>,
}

impl AttrStmt {
    pub fn new(component: AttrComponent, attributes: AttributeList) -> Self {
        Self {
            component,
            attributes: vec![attributes],
        }
    }

    pub fn component(&self) -> AttrComponent {
        self.component
    }

    pub fn attributes(&self) -> &[AttributeList] {
        &self.attributes
    }
}

/// A bare `key=value` statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityStmt {
    pub(crate) key: String,
    pub(crate) value: AttrValue,
}

impl IdentityStmt {
    pub fn new(key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &AttrValue {
        &self.value
    }
}

pub(crate) fn propagate_directed(statements: &mut [Statement], directed: bool) {
    for statement in statements {
        match statement {
            Statement::Subgraph(subgraph) => subgraph.set_directed(directed),
            Statement::Edge(edge) => edge.set_directed(directed),
            Statement::Node(_) | Statement::Attr(_) | Statement::Identity(_) => {}
        }
    }
}

// Description files write the container's own attributes as a top-level
// table; they become the leading `graph[...]` statement.
#[derive(Deserialize)]
struct GraphRepr {
    #[serde(default)]
    strict: bool,
    #[serde(default)]
    directed: bool,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    attributes: AttributeList,
    #[serde(default)]
    statements: Vec<Statement>,
}

impl TryFrom<GraphRepr> for Graph {
    type Error = DotError;

    fn try_from(repr: GraphRepr) -> Result<Self, Self::Error> {
        let mut statements = Vec::with_capacity(repr.statements.len() + 1);
        if !repr.attributes.is_empty() {
            statements.push(Statement::Attr(AttrStmt::new(
                AttrComponent::Graph,
                repr.attributes,
            )));
        }
        statements.extend(repr.statements);
        propagate_directed(&mut statements, repr.directed);

        Ok(Graph {
            strict: repr.strict,
            directed: repr.directed,
            name: repr.name,
            statements,
        })
    }
}

#[derive(Deserialize)]
struct SubgraphRepr {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    attributes: AttributeList,
    #[serde(default)]
    statements: Vec<Statement>,
}

impl From<SubgraphRepr> for Subgraph {
    fn from(repr: SubgraphRepr) -> Self {
        let mut statements = Vec::with_capacity(repr.statements.len() + 1);
        if !repr.attributes.is_empty() {
            statements.push(Statement::Attr(AttrStmt::new(
                AttrComponent::Graph,
                repr.attributes,
            )));
        }
        statements.extend(repr.statements);

        Subgraph {
            name: repr.name,
            directed: false,
            statements,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;

    #[test]
    fn test_edge_requires_destination() {
        let result = EdgeStmt::new(
            true,
            Endpoint::Node(NodeId::new("a")),
            vec![],
            AttributeList::new(),
        );

        match result {
            Err(DotError::InvalidArgument { message }) => {
                assert_eq!(message, "edge requires at least one destination")
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_attr_component_from_str() {
        assert_eq!("node".parse::<AttrComponent>().unwrap(), AttrComponent::Node);
        assert_eq!("edge".parse::<AttrComponent>().unwrap(), AttrComponent::Edge);
        assert!(matches!(
            "cluster".parse::<AttrComponent>(),
            Err(DotError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_deserialize_propagates_directedness() {
        let graph: Graph = serde_json::from_value(serde_json::json!({
            "directed": true,
            "statements": [
                {
                    "kind": "subgraph",
                    "name": "cluster_a",
                    "statements": [{ "kind": "edge", "from": "x", "to": "y" }]
                },
                {
                    "kind": "edge",
                    "from": { "subgraph": { "statements": [] } },
                    "to": ["z:p"]
                }
            ]
        }))
        .unwrap();

        let Statement::Subgraph(subgraph) = &graph.statements()[0] else {
            panic!("Expected subgraph");
        };
        assert!(subgraph.is_directed());
        let Statement::Edge(inner) = &subgraph.statements()[0] else {
            panic!("Expected edge");
        };
        assert!(inner.is_directed());

        let Statement::Edge(edge) = &graph.statements()[1] else {
            panic!("Expected edge");
        };
        assert!(edge.is_directed());
        let Endpoint::Subgraph(endpoint) = edge.from() else {
            panic!("Expected subgraph endpoint");
        };
        assert!(endpoint.is_directed());
        assert_eq!(edge.to(), &[Endpoint::Node(NodeId::with_port("z", "p"))]);
    }

    #[test]
    fn test_deserialize_rejects_empty_destinations() {
        let result: Result<Graph, _> = serde_json::from_value(serde_json::json!({
            "statements": [{ "kind": "edge", "from": "a", "to": [] }]
        }));

        let err = result.unwrap_err().to_string();
        assert!(err.contains("at least one destination"), "{err}");
    }

    #[test]
    fn test_top_level_attributes_become_graph_statement() {
        let graph: Graph = serde_json::from_value(serde_json::json!({
            "name": "g",
            "attributes": { "rankdir": "LR" }
        }))
        .unwrap();

        assert_eq!(
            graph.statements(),
            &[Statement::Attr(AttrStmt::new(
                AttrComponent::Graph,
                attrs! { "rankdir" => "LR" }
            ))]
        );
    }
}
