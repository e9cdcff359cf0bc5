//! Checks serializer output against the DOT grammar
//!
//! The checker below accepts the subset of the Graphviz grammar that a
//! conformant parser accepts for graphs, subgraphs, node, edge, attribute
//! and `ID = ID` statements. It also verifies that every edge operator
//! matches the root graph's directedness.

use dotweave::interop::from_petgraph;
use dotweave::{
    AttrComponent, Compass, Container, DotRenderer, Endpoint, Graph, NodeId, Subgraph, attrs,
    digraph, graph, html,
};
use petgraph::graph::DiGraph;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Id(String),
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semi,
    Comma,
    Equals,
    Colon,
    EdgeOp(&'static str),
}

fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '{' => {
                tokens.push(Token::LBrace);
                i += 1;
            }
            '}' => {
                tokens.push(Token::RBrace);
                i += 1;
            }
            '[' => {
                tokens.push(Token::LBracket);
                i += 1;
            }
            ']' => {
                tokens.push(Token::RBracket);
                i += 1;
            }
            ';' => {
                tokens.push(Token::Semi);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            '=' => {
                tokens.push(Token::Equals);
                i += 1;
            }
            ':' => {
                tokens.push(Token::Colon);
                i += 1;
            }
            '-' if chars.get(i + 1) == Some(&'>') => {
                tokens.push(Token::EdgeOp("->"));
                i += 2;
            }
            '-' if chars.get(i + 1) == Some(&'-') => {
                tokens.push(Token::EdgeOp("--"));
                i += 2;
            }
            '"' => {
                let mut text = String::new();
                i += 1;
                loop {
                    match chars.get(i) {
                        None => return Err("unterminated quoted string".to_string()),
                        Some('\\') => {
                            let next = chars.get(i + 1).ok_or("dangling backslash")?;
                            text.push('\\');
                            text.push(*next);
                            i += 2;
                        }
                        Some('"') => {
                            i += 1;
                            break;
                        }
                        Some(other) => {
                            text.push(*other);
                            i += 1;
                        }
                    }
                }
                tokens.push(Token::Id(text));
            }
            '<' => {
                let mut depth = 0usize;
                let start = i;
                loop {
                    match chars.get(i) {
                        None => return Err("unterminated HTML string".to_string()),
                        Some('<') => depth += 1,
                        Some('>') => {
                            depth -= 1;
                            if depth == 0 {
                                i += 1;
                                break;
                            }
                        }
                        Some(_) => {}
                    }
                    i += 1;
                }
                tokens.push(Token::Id(chars[start..i].iter().collect()));
            }
            c if c.is_alphanumeric() || c == '_' || c == '.' || !c.is_ascii() => {
                let start = i;
                while i < chars.len()
                    && (chars[i].is_alphanumeric()
                        || chars[i] == '_'
                        || chars[i] == '.'
                        || !chars[i].is_ascii())
                {
                    i += 1;
                }
                tokens.push(Token::Id(chars[start..i].iter().collect()));
            }
            other => return Err(format!("unexpected character {other:?}")),
        }
    }

    Ok(tokens)
}

struct Checker {
    tokens: Vec<Token>,
    pos: usize,
    edge_op: &'static str,
}

fn is_keyword(text: &str, keyword: &str) -> bool {
    text.eq_ignore_ascii_case(keyword)
}

impl Checker {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some(Token::Id(text)) if is_keyword(text, keyword))
    }

    fn next(&mut self) -> Result<Token, String> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or("unexpected end of input")?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(&mut self, expected: Token) -> Result<(), String> {
        let token = self.next()?;
        if token == expected {
            Ok(())
        } else {
            Err(format!("expected {expected:?}, found {token:?}"))
        }
    }

    fn id(&mut self) -> Result<String, String> {
        match self.next()? {
            Token::Id(text) => Ok(text),
            other => Err(format!("expected ID, found {other:?}")),
        }
    }

    fn graph(&mut self) -> Result<(), String> {
        if self.peek_keyword("strict") {
            self.pos += 1;
        }
        let kind = self.id()?;
        self.edge_op = if is_keyword(&kind, "digraph") {
            "->"
        } else if is_keyword(&kind, "graph") {
            "--"
        } else {
            return Err(format!("expected graph or digraph, found {kind}"));
        };
        if let Some(Token::Id(_)) = self.peek() {
            self.pos += 1;
        }
        self.expect(Token::LBrace)?;
        self.stmt_list()?;
        self.expect(Token::RBrace)?;

        match self.peek() {
            None => Ok(()),
            Some(token) => Err(format!("trailing token {token:?}")),
        }
    }

    fn stmt_list(&mut self) -> Result<(), String> {
        while !matches!(self.peek(), Some(Token::RBrace) | None) {
            self.stmt()?;
            if matches!(self.peek(), Some(Token::Semi)) {
                self.pos += 1;
            }
        }
        Ok(())
    }

    fn stmt(&mut self) -> Result<(), String> {
        if self.peek_keyword("graph") || self.peek_keyword("node") || self.peek_keyword("edge") {
            self.pos += 1;
            if !matches!(self.peek(), Some(Token::LBracket)) {
                return Err("attribute statement without attribute list".to_string());
            }
            return self.attr_lists();
        }

        if self.peek_keyword("subgraph") || matches!(self.peek(), Some(Token::LBrace)) {
            self.subgraph()?;
            return self.edge_tail(false);
        }

        self.id()?;
        if matches!(self.peek(), Some(Token::Equals)) {
            self.pos += 1;
            self.id()?;
            return Ok(());
        }
        self.port()?;
        self.edge_tail(true)
    }

    fn edge_tail(&mut self, allow_node_attrs: bool) -> Result<(), String> {
        let mut is_edge = false;
        while let Some(Token::EdgeOp(op)) = self.peek().cloned() {
            if op != self.edge_op {
                return Err(format!("edge operator {op} in a graph using {}", self.edge_op));
            }
            self.pos += 1;
            is_edge = true;
            if self.peek_keyword("subgraph") || matches!(self.peek(), Some(Token::LBrace)) {
                self.subgraph()?;
            } else {
                self.id()?;
                self.port()?;
            }
        }

        if matches!(self.peek(), Some(Token::LBracket)) {
            if !is_edge && !allow_node_attrs {
                return Err("attribute list after a bare subgraph".to_string());
            }
            self.attr_lists()?;
        }
        Ok(())
    }

    fn port(&mut self) -> Result<(), String> {
        // `:ID` optionally followed by `:compass`
        if matches!(self.peek(), Some(Token::Colon)) {
            self.pos += 1;
            self.id()?;
            if matches!(self.peek(), Some(Token::Colon)) {
                self.pos += 1;
                let compass = self.id()?;
                if !Compass::ALL.iter().any(|c| c.as_str() == compass) {
                    return Err(format!("invalid compass point {compass}"));
                }
            }
        }
        Ok(())
    }

    fn subgraph(&mut self) -> Result<(), String> {
        if self.peek_keyword("subgraph") {
            self.pos += 1;
            if let Some(Token::Id(_)) = self.peek() {
                self.pos += 1;
            }
        }
        self.expect(Token::LBrace)?;
        self.stmt_list()?;
        self.expect(Token::RBrace)
    }

    fn attr_lists(&mut self) -> Result<(), String> {
        while matches!(self.peek(), Some(Token::LBracket)) {
            self.pos += 1;
            while !matches!(self.peek(), Some(Token::RBracket)) {
                self.id()?;
                self.expect(Token::Equals)?;
                self.id()?;
                if matches!(self.peek(), Some(Token::Semi) | Some(Token::Comma)) {
                    self.pos += 1;
                }
            }
            self.expect(Token::RBracket)?;
        }
        Ok(())
    }
}

fn check_dot(dot: &str) -> Result<(), String> {
    let mut checker = Checker {
        tokens: tokenize(dot)?,
        pos: 0,
        edge_op: "--",
    };
    checker.graph()
}

#[track_caller]
fn assert_valid(graph: &Graph) {
    for renderer in [DotRenderer::new(), DotRenderer::new().escape_quotes(true)] {
        let dot = renderer.render(graph);
        if let Err(e) = check_dot(&dot) {
            panic!("invalid DOT ({e}):\n{dot}");
        }
    }
}

#[test]
fn test_checker_rejects_invalid_dot() {
    assert!(check_dot("graph { \"a\"->\"b\"; }").is_err());
    assert!(check_dot("digraph { node; }").is_err());
    assert!(check_dot("digraph { \"a\"->; }").is_err());
    assert!(check_dot("graph { \"a\":p:up; }").is_err());
    assert!(check_dot("graph { \"a\" ").is_err());
    assert!(check_dot("graph { } }").is_err());
    assert!(check_dot("digraph { \"a\"->\"b\"[label=\"x\";]; }").is_ok());
}

#[test]
fn test_demos_are_valid() {
    for (name, graph) in dotweave::demos::all().unwrap() {
        let dot = dotweave::render(&graph);
        assert!(check_dot(&dot).is_ok(), "demo {name} rendered invalid DOT");
    }
}

#[test]
fn test_empty_graphs_are_valid() {
    assert_valid(&graph(None, attrs! {}));
    assert_valid(&digraph(Some("empty"), attrs! {}));

    let mut strict = graph(Some("s"), attrs! {});
    strict.strict();
    assert_valid(&strict);
}

#[test]
fn test_builder_sequences_are_valid() {
    let names = ["a", "b:p", "c:p:ne", "d:_", "e:x:c", "with space", "ünï"];

    for directed in [false, true] {
        for (i, from) in names.iter().enumerate() {
            let to: Vec<&str> = names.iter().cycle().skip(i + 1).take(i % 3 + 1).copied().collect();

            let mut g = if directed {
                digraph(Some("seq"), attrs! { "rankdir" => "LR" })
            } else {
                graph(Some("seq"), attrs! {})
            };
            g.node(*from, attrs! {})
                .attr("node", attrs! { "shape" => "box", "color" => "#fff" })
                .unwrap()
                .attr("edge", attrs! {})
                .unwrap()
                .edge(from, &to, attrs! { "label" => format!("edge {i}") })
                .unwrap()
                .assign("splines", "ortho");

            let cluster = format!("cluster_{i}");
            g.subgraph(Some(&cluster), attrs! { "label" => *from })
                .edge(from, &to, attrs! {})
                .unwrap()
                .subgraph(None, attrs! {})
                .node("deep", attrs! { "label" => html("<b>deep</b>") });

            assert_valid(&g);
        }
    }
}

#[test]
fn test_subgraph_endpoints_are_valid() {
    for directed in [false, true] {
        let mut g = Graph::new(None, directed);
        let mut left = Subgraph::new(Some("left"), directed);
        left.node("l1", attrs! {}).node("l2", attrs! {});
        let mut right = Subgraph::new(None, !directed);
        right.edge("r1", &["r2"], attrs! {}).unwrap();

        g.edge_between(
            left,
            vec![
                Endpoint::Node(NodeId::with_compass("mid", None, Compass::Underscore)),
                Endpoint::Subgraph(right),
            ],
            attrs! { "style" => "bold" },
        )
        .unwrap();

        assert_valid(&g);
    }
}

#[test]
fn test_quoted_content_is_valid_when_escaped() {
    let mut g = digraph(Some("say \"hi\""), attrs! {});
    g.node("q\"uote", attrs! { "label" => "a \"b\" c", "tooltip" => "already \\\"ok\\\"" })
        .attr_for(AttrComponent::Graph, attrs! { "label" => "in \\\"quotes\\\"" })
        .edge("x", &["y"], attrs! { "label" => "\"" })
        .unwrap()
        .node("C:\\dir\\", attrs! { "label" => "C:\\dir\\", "xlabel" => "\\" });

    let dot = DotRenderer::new().escape_quotes(true).render(&g);
    assert_eq!(check_dot(&dot), Ok(()), "{dot}");
}

#[test]
fn test_petgraph_conversion_is_valid() {
    let mut deps = DiGraph::<String, usize>::new();
    let nodes: Vec<_> = (0..5).map(|i| deps.add_node(format!("crate-{i}"))).collect();
    for window in nodes.windows(2) {
        deps.add_edge(window[0], window[1], 1);
    }
    deps.add_edge(nodes[4], nodes[0], 2);

    let g = from_petgraph(
        &deps,
        |name| attrs! { "label" => name.as_str() },
        |weight| attrs! { "weight" => *weight },
    )
    .unwrap();

    assert_valid(&g);
}
