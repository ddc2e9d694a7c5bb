use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::core::{DependencyGraph, DependencyKind, LibraryId, ModuleId};
use crate::error::{Error, Result};

pub const DEFAULT_CLONE_LIMIT: usize = 10_000;

/// Graphviz `rankdir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    LeftRight,
    TopBottom,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::LeftRight => "LR",
            Direction::TopBottom => "TB",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LR" => Ok(Direction::LeftRight),
            "TB" => Ok(Direction::TopBottom),
            _ => Err(format!(
                "Unknown direction: '{}'. Valid directions: LR (horizontal), TB (vertical)",
                s
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeColors {
    pub fill: String,
    pub text: String,
    pub edge: String,
}

impl NodeColors {
    pub fn new(fill: &str, text: &str, edge: &str) -> Self {
        Self {
            fill: fill.to_string(),
            text: text.to_string(),
            edge: edge.to_string(),
        }
    }
}

/// Colour scheme per node role. Edges take the colour of their target's role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub root: NodeColors,
    pub project: NodeColors,
    pub library: NodeColors,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            root: NodeColors::new("#4CAF50", "white", "#2E7D32"),
            project: NodeColors::new("#81C784", "black", "#2E7D32"),
            library: NodeColors::new("#BA68C8", "white", "#6A1B9A"),
        }
    }
}

impl Palette {
    fn for_kind(&self, kind: DependencyKind) -> &NodeColors {
        match kind {
            DependencyKind::Project => &self.project,
            DependencyKind::Library => &self.library,
        }
    }
}

/// One line of a DOT document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Graph-level attribute or default style, emitted as-is
    Attribute(String),
    Node {
        id: String,
        label: String,
        fill: String,
        font: String,
    },
    Edge {
        from: String,
        to: String,
        color: String,
        dashed: bool,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Attribute(attr) => write!(f, "  {attr}"),
            Statement::Node {
                id,
                label,
                fill,
                font,
            } => write!(
                f,
                "  \"{}\" [fillcolor=\"{}\", label=\"{}\", fontcolor=\"{}\"];",
                escape(id),
                fill,
                escape(label),
                font
            ),
            Statement::Edge {
                from,
                to,
                color,
                dashed,
            } => {
                let style = if *dashed { "style=dashed, " } else { "" };
                write!(
                    f,
                    "  \"{}\" -> \"{}\" [{}color=\"{}\"];",
                    escape(from),
                    escape(to),
                    style,
                    color
                )
            }
        }
    }
}

fn escape(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

/// A rendered diagram: graph attributes first, then node and edge statements in
/// the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    statements: Vec<Statement>,
}

impl Diagram {
    fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// `(id, label)` of every node declaration, repeats included.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Node { id, label, .. } => Some((id.as_str(), label.as_str())),
            _ => None,
        })
    }

    /// `(from, to)` of every edge statement.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.statements.iter().filter_map(|s| match s {
            Statement::Edge { from, to, .. } => Some((from.as_str(), to.as_str())),
            _ => None,
        })
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.edges().filter(|(_, to)| *to == id).count()
    }

    pub fn to_dot(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph Dependencies {{")?;
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        write!(f, "}}")
    }
}

/// Turns a [`DependencyGraph`] into a Graphviz diagram.
#[derive(Debug, Clone)]
pub struct DotFormatter {
    direction: Direction,
    /// Clone shared dependencies so every node has a single parent
    duplicate_nodes: bool,
    clone_limit: usize,
    palette: Palette,
}

impl DotFormatter {
    pub fn new() -> Self {
        Self {
            direction: Direction::default(),
            duplicate_nodes: false,
            clone_limit: DEFAULT_CLONE_LIMIT,
            palette: Palette::default(),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_duplicate_nodes(mut self, enabled: bool) -> Self {
        self.duplicate_nodes = enabled;
        self
    }

    /// Upper bound on cloned nodes in duplicated-tree mode.
    pub fn with_clone_limit(mut self, limit: usize) -> Self {
        self.clone_limit = limit;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn format_to_file(
        &self,
        graph: &DependencyGraph,
        root: &ModuleId,
        output_path: &Path,
    ) -> Result<()> {
        let diagram = self.render(graph, root)?;
        fs::write(output_path, diagram.to_dot())?;
        Ok(())
    }

    pub fn render(&self, graph: &DependencyGraph, root: &ModuleId) -> Result<Diagram> {
        let mut diagram = self.preamble(root);
        if self.duplicate_nodes {
            TreeExpansion::new(self, graph, diagram).run(root.as_str())
        } else {
            self.render_shared(graph, &mut diagram);
            Ok(diagram)
        }
    }

    fn preamble(&self, root: &ModuleId) -> Diagram {
        let mut diagram = Diagram::default();
        diagram.push(Statement::Attribute(format!("rankdir={};", self.direction)));
        diagram.push(Statement::Attribute(
            "node [shape=box, style=filled, width=2, height=0.5, fontname=\"Arial\"];".to_string(),
        ));
        diagram.push(Statement::Attribute(
            "edge [penwidth=1.5, fontname=\"Arial\"];".to_string(),
        ));
        diagram.push(Statement::Node {
            id: root.to_string(),
            label: root.to_string(),
            fill: self.palette.root.fill.clone(),
            font: self.palette.root.text.clone(),
        });
        diagram
    }

    fn render_shared(&self, graph: &DependencyGraph, diagram: &mut Diagram) {
        for kind in [DependencyKind::Project, DependencyKind::Library] {
            for module in graph.modules() {
                for dep in graph.deps_of_kind(module.as_str(), kind) {
                    diagram.push(self.node(dep, dep, kind));
                    diagram.push(self.edge(module.as_str(), dep, kind));
                }
            }
        }
    }

    fn node(&self, id: &str, label: &str, kind: DependencyKind) -> Statement {
        let colors = self.palette.for_kind(kind);
        Statement::Node {
            id: id.to_string(),
            label: label.to_string(),
            fill: colors.fill.clone(),
            font: colors.text.clone(),
        }
    }

    fn edge(&self, from: &str, to: &str, kind: DependencyKind) -> Statement {
        Statement::Edge {
            from: from.to_string(),
            to: to.to_string(),
            color: self.palette.for_kind(kind).edge.clone(),
            dashed: kind == DependencyKind::Library,
        }
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Breadth-first walk over the diagram that clones any node about to receive a
/// second parent. Clones replay the children of the node they were cloned from.
struct TreeExpansion<'a> {
    formatter: &'a DotFormatter,
    graph: &'a DependencyGraph,
    diagram: Diagram,
    added_nodes: HashSet<String>,
    /// dependency -> first node that claimed it as a child
    processed_nodes: HashMap<String, String>,
    node_counters: HashMap<String, usize>,
    queued_nodes: HashSet<String>,
    processed_edges: HashSet<(String, String)>,
    /// clone id -> id it was cloned from
    origins: HashMap<String, String>,
    /// every module and library id in the graph, never handed out as a clone id
    reserved: HashSet<&'a str>,
    queue: VecDeque<String>,
    clones: usize,
}

impl<'a> TreeExpansion<'a> {
    fn new(formatter: &'a DotFormatter, graph: &'a DependencyGraph, diagram: Diagram) -> Self {
        Self {
            formatter,
            graph,
            diagram,
            added_nodes: HashSet::new(),
            processed_nodes: HashMap::new(),
            node_counters: HashMap::new(),
            queued_nodes: HashSet::new(),
            processed_edges: HashSet::new(),
            origins: HashMap::new(),
            reserved: graph_ids(graph),
            queue: VecDeque::new(),
            clones: 0,
        }
    }

    fn run(mut self, root: &str) -> Result<Diagram> {
        self.added_nodes.insert(root.to_string());
        // The root has no parent; any edge back to it must produce a clone.
        self.processed_nodes.insert(root.to_string(), String::new());
        self.enqueue(root.to_string());

        let graph = self.graph;
        while let Some(current) = self.queue.pop_front() {
            self.queued_nodes.remove(&current);
            let base = self.base_of(&current).to_string();

            for kind in [DependencyKind::Project, DependencyKind::Library] {
                for dep in graph.deps_of_kind(&base, kind) {
                    self.attach(&current, dep, kind)?;
                }
            }
        }

        Ok(self.diagram)
    }

    fn attach(&mut self, current: &str, dep: &str, kind: DependencyKind) -> Result<()> {
        let claimed_by_current = self.processed_nodes.get(dep).map(|parent| parent == current);
        match claimed_by_current {
            None => {
                if self.added_nodes.insert(dep.to_string()) {
                    self.diagram.push(self.formatter.node(dep, dep, kind));
                }
                self.connect(current, dep, kind);
                self.processed_nodes
                    .insert(dep.to_string(), current.to_string());
                self.enqueue(dep.to_string());
            }
            Some(true) => {}
            Some(false) => {
                let clone = self.clone_node(dep, kind)?;
                self.connect(current, &clone, kind);
                self.expand_clone(&clone, dep)?;
            }
        }
        Ok(())
    }

    /// Gives a fresh clone of `base` its own copies of `base`'s children.
    fn expand_clone(&mut self, clone: &str, base: &str) -> Result<()> {
        let graph = self.graph;
        for kind in [DependencyKind::Project, DependencyKind::Library] {
            for child in graph.deps_of_kind(base, kind) {
                if !self
                    .processed_edges
                    .insert((clone.to_string(), child.to_string()))
                {
                    continue;
                }
                let child_clone = self.clone_node(child, kind)?;
                self.connect(clone, &child_clone, kind);
                self.enqueue(child_clone);
            }
        }
        Ok(())
    }

    fn clone_node(&mut self, base: &str, kind: DependencyKind) -> Result<String> {
        if self.clones >= self.formatter.clone_limit {
            return Err(Error::CloneLimitExceeded {
                limit: self.formatter.clone_limit,
            });
        }
        self.clones += 1;

        let counter = self.node_counters.entry(base.to_string()).or_default();
        let mut id;
        loop {
            *counter += 1;
            id = format!("{base}_{counter}");
            if !self.added_nodes.contains(&id) && !self.reserved.contains(id.as_str()) {
                break;
            }
        }

        self.added_nodes.insert(id.clone());
        self.origins.insert(id.clone(), base.to_string());
        self.diagram.push(self.formatter.node(&id, base, kind));
        Ok(id)
    }

    fn connect(&mut self, from: &str, to: &str, kind: DependencyKind) {
        if self
            .processed_edges
            .insert((from.to_string(), to.to_string()))
        {
            self.diagram.push(self.formatter.edge(from, to, kind));
        }
    }

    fn enqueue(&mut self, id: String) {
        if self.queued_nodes.insert(id.clone()) {
            self.queue.push_back(id);
        }
    }

    fn base_of<'s>(&'s self, id: &'s str) -> &'s str {
        self.origins.get(id).map(String::as_str).unwrap_or(id)
    }
}

fn graph_ids(graph: &DependencyGraph) -> HashSet<&str> {
    let mut ids: HashSet<&str> = graph.modules().map(ModuleId::as_str).collect();
    for (_, deps) in graph.projects() {
        ids.extend(deps.iter().map(ModuleId::as_str));
    }
    for (_, deps) in graph.libraries() {
        ids.extend(deps.iter().map(LibraryId::as_str));
    }
    ids
}
