//! # Graph Builder
//!
//! Composable operations that append statements to a graph or subgraph.
//!
//! Every operation takes the container by `&mut` and hands the same
//! container back so calls chain left to right. The one exception is
//! [`Container::subgraph`], which appends a new subgraph and returns *it*,
//! redirecting further chaining into the nested scope.
//!
//! ## Example
//!
//! ```
//! use dotweave::builder::{Container, digraph};
//! use dotweave::{attrs, render};
//!
//! # fn main() -> Result<(), dotweave::error::DotError> {
//! let mut g = digraph(None, attrs! {});
//! g.edge("a", &["b"], attrs! {})?;
//!
//! assert_eq!(render(&g), "digraph {\n  \"a\"->\"b\";\n}");
//! # Ok(())
//! # }
//! ```

use crate::error::{DotError, Result};
use crate::model::{
    AttrComponent, AttrStmt, AttrValue, AttributeList, EdgeStmt, Endpoint, Graph, IdentityStmt,
    NodeId, NodeStmt, Statement, Subgraph,
};

mod sealed {
    use crate::model::Statement;

    pub trait Sealed {
        fn statements_mut(&mut self) -> &mut Vec<Statement>;
    }
}

use sealed::Sealed;

/// New undirected root graph. Non-empty `attrs` become a leading
/// `graph[...]` statement.
pub fn graph(name: Option<&str>, attrs: AttributeList) -> Graph {
    let mut g = Graph::new(name, false);
    g.attr_for(AttrComponent::Graph, attrs);
    g
}

/// New directed root graph
pub fn digraph(name: Option<&str>, attrs: AttributeList) -> Graph {
    let mut g = Graph::new(name, true);
    g.attr_for(AttrComponent::Graph, attrs);
    g
}

/// Mark a root graph strict. Only [`Graph`] has this flag.
pub fn strict(g: &mut Graph) -> &mut Graph {
    g.strict()
}

/// A graph or subgraph that statements can be appended to
pub trait Container: Sealed {
    fn is_directed(&self) -> bool;

    fn statements(&self) -> &[Statement];

    /// Append a prebuilt statement
    fn push(&mut self, statement: Statement) -> &mut Self {
        self.statements_mut().push(statement);
        self
    }

    /// Declare a node. The node is declared even when `attrs` is empty.
    fn node(&mut self, id: impl Into<NodeId>, attrs: AttributeList) -> &mut Self {
        self.push(Statement::Node(NodeStmt::new(id.into(), attrs)))
    }

    /// Add an edge chain between node ids written as `name[:port[:compass]]`
    fn edge(&mut self, from: &str, to: &[&str], attrs: AttributeList) -> Result<&mut Self> {
        if to.is_empty() {
            return Err(DotError::invalid_argument(
                "edge requires at least one destination",
            ));
        }

        let from = Endpoint::Node(NodeId::parse(from)?);
        let to = to
            .iter()
            .map(|id| NodeId::parse(id).map(Endpoint::Node))
            .collect::<Result<Vec<_>>>()?;

        self.edge_between(from, to, attrs)
    }

    /// Add an edge chain whose endpoints may be subgraphs
    fn edge_between(
        &mut self,
        from: impl Into<Endpoint>,
        to: Vec<Endpoint>,
        attrs: AttributeList,
    ) -> Result<&mut Self> {
        let directed = self.is_directed();
        let mut edge = EdgeStmt::new(directed, from.into(), to, attrs)?;
        edge.set_directed(directed);
        Ok(self.push(Statement::Edge(edge)))
    }

    /// Set defaults for `graph`, `node` or `edge`. Empty `attrs` append
    /// nothing.
    fn attr(&mut self, component: &str, attrs: AttributeList) -> Result<&mut Self> {
        let component = component.parse::<AttrComponent>()?;
        Ok(self.attr_for(component, attrs))
    }

    fn attr_for(&mut self, component: AttrComponent, attrs: AttributeList) -> &mut Self {
        if attrs.is_empty() {
            return self;
        }
        self.push(Statement::Attr(AttrStmt::new(component, attrs)))
    }

    /// Append a bare `key=value` statement
    fn assign(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.push(Statement::Identity(IdentityStmt::new(key, value)))
    }

    /// Append a new subgraph and return it for further chaining
    fn subgraph(&mut self, name: Option<&str>, attrs: AttributeList) -> &mut Subgraph {
        let mut subgraph = Subgraph::new(name, self.is_directed());
        subgraph.attr_for(AttrComponent::Graph, attrs);

        let statements = self.statements_mut();
        statements.push(Statement::Subgraph(subgraph));
        match statements.last_mut() {
            Some(Statement::Subgraph(subgraph)) => subgraph,
            _ => unreachable!("subgraph was just appended"),
        }
    }

    /// Append a new subgraph, fill it in `build`, and return the parent
    fn with_subgraph<F>(
        &mut self,
        name: Option<&str>,
        attrs: AttributeList,
        build: F,
    ) -> Result<&mut Self>
    where
        F: FnOnce(&mut Subgraph) -> Result<()>,
    {
        build(self.subgraph(name, attrs))?;
        Ok(self)
    }
}

impl Sealed for Graph {
    fn statements_mut(&mut self) -> &mut Vec<Statement> {
        &mut self.statements
    }
}

impl Container for Graph {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

impl Sealed for Subgraph {
    fn statements_mut(&mut self) -> &mut Vec<Statement> {
        &mut self.statements
    }
}

impl Container for Subgraph {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn statements(&self) -> &[Statement] {
        &self.statements
    }
}
