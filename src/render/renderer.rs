use std::fmt;
use std::io::Write;

use crate::error::{DotError, Result};
use crate::model::{
    AttrStmt, AttrValue, AttributeList, EdgeStmt, Endpoint, Graph, IdentityStmt, NodeId,
    NodeStmt, Statement, Subgraph,
};

const INDENT: &str = "  ";

/// Serializes the graph model to DOT text
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer {
    escape_quotes: bool,
}

impl DotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape unescaped `"` in names and plain values. Off by default, in
    /// which case quoting is the caller's responsibility. HTML values are
    /// never touched.
    pub fn escape_quotes(mut self, escape_quotes: bool) -> Self {
        self.escape_quotes = escape_quotes;
        self
    }

    pub fn render(&self, graph: &Graph) -> String {
        self.display(graph).to_string()
    }

    pub fn render_to(&self, graph: &Graph, output: &mut dyn Write) -> Result<()> {
        write!(output, "{}", self.display(graph)).map_err(DotError::from)
    }

    /// Lazily rendered view, usable with `format!` and friends
    pub fn display<'a>(&self, graph: &'a Graph) -> Rendered<'a> {
        Rendered {
            renderer: *self,
            graph,
        }
    }

    fn write_graph(&self, out: &mut dyn fmt::Write, graph: &Graph) -> fmt::Result {
        if graph.is_strict() {
            out.write_str("strict ")?;
        }
        out.write_str(if graph.is_directed() {
            "digraph"
        } else {
            "graph"
        })?;
        if let Some(name) = graph.name() {
            out.write_char(' ')?;
            self.write_quoted(out, name)?;
        }
        out.write_str(" {\n")?;
        self.write_body(out, graph.statements(), 1)?;
        out.write_char('}')
    }

    fn write_subgraph(
        &self,
        out: &mut dyn fmt::Write,
        subgraph: &Subgraph,
        depth: usize,
    ) -> fmt::Result {
        out.write_str("subgraph")?;
        if let Some(name) = subgraph.name() {
            out.write_char(' ')?;
            self.write_quoted(out, name)?;
        }
        out.write_str(" {\n")?;
        self.write_body(out, subgraph.statements(), depth + 1)?;
        write_indent(out, depth)?;
        out.write_char('}')
    }

    fn write_body(
        &self,
        out: &mut dyn fmt::Write,
        statements: &[Statement],
        depth: usize,
    ) -> fmt::Result {
        for statement in statements {
            write_indent(out, depth)?;
            self.write_statement(out, statement, depth)?;
            out.write_str(";\n")?;
        }
        Ok(())
    }

    fn write_statement(
        &self,
        out: &mut dyn fmt::Write,
        statement: &Statement,
        depth: usize,
    ) -> fmt::Result {
        match statement {
            Statement::Node(node) => self.write_node(out, node),
            Statement::Edge(edge) => self.write_edge(out, edge, depth),
            Statement::Attr(attr) => self.write_attr(out, attr),
            Statement::Subgraph(subgraph) => self.write_subgraph(out, subgraph, depth),
            Statement::Identity(identity) => self.write_identity(out, identity),
        }
    }

    fn write_node(&self, out: &mut dyn fmt::Write, node: &NodeStmt) -> fmt::Result {
        self.write_node_id(out, node.id())?;
        self.write_attribute_lists(out, node.attributes(), true)
    }

    fn write_edge(&self, out: &mut dyn fmt::Write, edge: &EdgeStmt, depth: usize) -> fmt::Result {
        let op = if edge.is_directed() { "->" } else { "--" };

        self.write_endpoint(out, edge.from(), depth)?;
        for endpoint in edge.to() {
            out.write_str(op)?;
            self.write_endpoint(out, endpoint, depth)?;
        }
        self.write_attribute_lists(out, edge.attributes(), true)
    }

    fn write_attr(&self, out: &mut dyn fmt::Write, attr: &AttrStmt) -> fmt::Result {
        out.write_str(attr.component().keyword())?;
        // A bare keyword is not a statement in DOT.
        if attr.attributes().is_empty() {
            return out.write_str("[]");
        }
        self.write_attribute_lists(out, attr.attributes(), false)
    }

    fn write_identity(&self, out: &mut dyn fmt::Write, identity: &IdentityStmt) -> fmt::Result {
        out.write_str(identity.key())?;
        out.write_char('=')?;
        self.write_value(out, identity.value())
    }

    fn write_endpoint(
        &self,
        out: &mut dyn fmt::Write,
        endpoint: &Endpoint,
        depth: usize,
    ) -> fmt::Result {
        match endpoint {
            Endpoint::Node(id) => self.write_node_id(out, id),
            Endpoint::Subgraph(subgraph) => self.write_subgraph(out, subgraph, depth),
        }
    }

    fn write_node_id(&self, out: &mut dyn fmt::Write, id: &NodeId) -> fmt::Result {
        self.write_quoted(out, id.name())?;
        if let Some(port) = id.port() {
            out.write_str(port)?;
        }
        Ok(())
    }

    fn write_attribute_lists(
        &self,
        out: &mut dyn fmt::Write,
        lists: &[AttributeList],
        skip_empty: bool,
    ) -> fmt::Result {
        for list in lists {
            if skip_empty && list.is_empty() {
                continue;
            }
            out.write_char('[')?;
            for (key, value) in list.iter() {
                out.write_str(key)?;
                out.write_char('=')?;
                self.write_value(out, value)?;
                out.write_char(';')?;
            }
            out.write_char(']')?;
        }
        Ok(())
    }

    fn write_value(&self, out: &mut dyn fmt::Write, value: &AttrValue) -> fmt::Result {
        match value {
            AttrValue::Plain(text) => self.write_quoted(out, text),
            AttrValue::Html(markup) => write!(out, "<{markup}>"),
        }
    }

    fn write_quoted(&self, out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
        out.write_char('"')?;
        if self.escape_quotes {
            write_escaped(out, text)?;
        } else {
            out.write_str(text)?;
        }
        out.write_char('"')
    }
}

fn write_indent(out: &mut dyn fmt::Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

// Quotes already preceded by a backslash are left alone. A trailing lone
// backslash is doubled so it cannot swallow the closing quote.
fn write_escaped(out: &mut dyn fmt::Write, text: &str) -> fmt::Result {
    let mut escaped = false;
    for c in text.chars() {
        if c == '"' && !escaped {
            out.write_char('\\')?;
        }
        escaped = c == '\\' && !escaped;
        out.write_char(c)?;
    }
    if escaped {
        out.write_char('\\')?;
    }
    Ok(())
}

/// A graph paired with the renderer that will format it
pub struct Rendered<'a> {
    renderer: DotRenderer,
    graph: &'a Graph,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.renderer.write_graph(f, self.graph)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DotRenderer::default().write_graph(f, self)
    }
}

impl fmt::Display for Subgraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DotRenderer::default().write_subgraph(f, self, 0)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DotRenderer::default().write_statement(f, self, 0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DotRenderer::default().write_node_id(f, self)
    }
}
