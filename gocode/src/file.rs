//! Go source files as ordered, editable node sequences.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use gocode_render::{FileBuilder, ImportSet, Indent, RenderConfig};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    node::Node,
};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable handle to a node inside a [`File`].
///
/// Ids are assigned on insertion and never reused, so two structurally
/// identical nodes are still told apart. A cloned file keeps the ids of the
/// file it was cloned from; any other file rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rendering directive: refer to the package at `path` as `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportAlias {
    pub name: String,
    pub path: String,
}

impl ImportAlias {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// A Go source file: a package name and an ordered sequence of nodes.
///
/// # Example
///
/// ```
/// use gocode::{File, ast::{Function, Var}};
///
/// let mut file = File::new("demo", [Var::new("a", "int")]);
/// let a = file.ids().next().unwrap();
/// file.insert_before(a, Function::new("init")).unwrap();
///
/// assert_eq!(file.render(), "package demo\n\nfunc init() {}\n\nvar a int\n");
/// ```
#[derive(Debug, Clone)]
pub struct File {
    package: String,
    header: Option<String>,
    nodes: Vec<(NodeId, Node)>,
    aliases: IndexMap<String, String>,
    indent: Indent,
}

impl File {
    /// Create a file holding exactly `nodes`, in order.
    pub fn new<I>(package: impl Into<String>, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self {
            package: package.into(),
            header: None,
            nodes: nodes
                .into_iter()
                .map(|node| (NodeId::next(), node.into()))
                .collect(),
            aliases: IndexMap::new(),
            indent: Indent::GO,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Append a node.
    pub fn push(&mut self, node: impl Into<Node>) -> NodeId {
        let id = NodeId::next();
        let node = node.into();
        debug!(%id, kind = node.kind(), "appending node");
        self.nodes.push((id, node));
        id
    }

    /// Node ids in sequence order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|(id, _)| *id)
    }

    /// Nodes in sequence order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.position(id).map(|i| &self.nodes[i].1)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.position(id).map(|i| &mut self.nodes[i].1)
    }

    /// Index of the node in the sequence.
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|(node_id, _)| *node_id == id)
    }

    /// Insert `node` right after `target`.
    pub fn insert_after(&mut self, target: NodeId, node: impl Into<Node>) -> Result<NodeId> {
        let index = self.locate(target)?;
        Ok(self.insert_at(index + 1, node.into()))
    }

    /// Insert `node` right before `target`.
    pub fn insert_before(&mut self, target: NodeId, node: impl Into<Node>) -> Result<NodeId> {
        let index = self.locate(target)?;
        Ok(self.insert_at(index, node.into()))
    }

    /// Remove a node, returning it.
    pub fn remove(&mut self, id: NodeId) -> Result<Node> {
        let index = self.locate(id)?;
        let (_, node) = self.nodes.remove(index);
        debug!(%id, kind = node.kind(), "removed node");
        Ok(node)
    }

    /// Record alias directives. A later directive for the same path wins.
    pub fn set_import_aliases(&mut self, aliases: impl IntoIterator<Item = ImportAlias>) {
        for alias in aliases {
            self.aliases.insert(alias.path, alias.name);
        }
    }

    /// Set a comment emitted above the package clause.
    pub fn set_header_comment(&mut self, text: impl Into<String>) {
        self.header = Some(text.into());
    }

    /// Apply indentation, header and alias directives from configuration.
    pub fn configure(&mut self, config: &RenderConfig) {
        self.indent = config.indent;
        if let Some(header) = &config.header {
            self.header = Some(header.clone());
        }
        for (path, name) in &config.import_aliases {
            self.aliases.insert(path.clone(), name.clone());
        }
    }

    /// Parse a TOML render configuration and apply it.
    pub fn configure_from_toml(&mut self, toml: &str) -> Result<()> {
        let config = RenderConfig::from_toml_str(toml).map_err(Error::config)?;
        self.configure(&config);
        Ok(())
    }

    /// Render the whole file.
    ///
    /// Import nodes join the import block instead of the body, and their
    /// local names are used wherever the same path is referenced. Alias
    /// directives still take precedence. Rendering never changes the file;
    /// repeated calls give the same text.
    pub fn render(&self) -> String {
        let mut imports = ImportSet::for_file();
        imports.aliases(self.aliases.iter().map(|(p, n)| (p.as_str(), n.as_str())));
        for (_, node) in &self.nodes {
            if let Node::Import(import) = node {
                imports.require(import.path(), import.alias_name());
            }
        }

        let mut builder = FileBuilder::with_indent(self.package.clone(), self.indent).imports(imports);
        if let Some(header) = &self.header {
            builder = builder.header(header.clone());
        }
        for (_, node) in &self.nodes {
            if !matches!(node, Node::Import(_)) {
                builder.add(node);
            }
        }
        builder.build()
    }

    fn locate(&self, id: NodeId) -> Result<usize> {
        self.position(id).ok_or_else(|| {
            warn!(%id, package = %self.package, "node not found");
            Error::not_found(id)
        })
    }

    fn insert_at(&mut self, index: usize, node: Node) -> NodeId {
        let id = NodeId::next();
        debug!(%id, index, kind = node.kind(), "inserting node");
        self.nodes.insert(index, (id, node));
        id
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Comment, Var};

    fn three() -> (File, Vec<NodeId>) {
        let file = File::new(
            "demo",
            [Var::new("a", "int"), Var::new("b", "int"), Var::new("c", "int")],
        );
        let ids = file.ids().collect();
        (file, ids)
    }

    fn names(file: &File) -> Vec<String> {
        file.nodes().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_file() {
        let file = File::new("demo", Vec::<Node>::new());
        assert!(file.is_empty());
        assert_eq!(file.render(), "package demo\n");
    }

    #[test]
    fn test_new_keeps_order() {
        let (file, ids) = three();
        assert_eq!(file.len(), 3);
        assert_eq!(file.position(ids[2]), Some(2));
        assert_eq!(names(&file), ["var a int", "var b int", "var c int"]);
    }

    #[test]
    fn test_insert_after_unknown_target() {
        let (mut file, _) = three();
        let (other, other_ids) = three();
        drop(other);

        let err = file
            .insert_after(other_ids[0], Var::new("x", "int"))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { id } if id == other_ids[0]));
        assert_eq!(file.len(), 3);
        assert_eq!(names(&file), ["var a int", "var b int", "var c int"]);
    }

    #[test]
    fn test_insert_before_first_prepends() {
        let (mut file, ids) = three();
        let id = file.insert_before(ids[0], Var::new("x", "int")).unwrap();
        assert_eq!(file.position(id), Some(0));
        assert_eq!(names(&file)[0], "var x int");
    }

    #[test]
    fn test_insert_after_last_appends() {
        let (mut file, ids) = three();
        let id = file.insert_after(ids[2], Var::new("x", "int")).unwrap();
        assert_eq!(file.position(id), Some(3));
        assert_eq!(file.ids().last(), Some(id));
    }

    #[test]
    fn test_insert_in_middle() {
        let (mut file, ids) = three();
        file.insert_after(ids[0], Var::new("x", "int")).unwrap();
        assert_eq!(
            names(&file),
            ["var a int", "var x int", "var b int", "var c int"]
        );
    }

    #[test]
    fn test_identical_nodes_are_distinct() {
        let mut file = File::new("demo", [Var::new("a", "int"), Var::new("a", "int")]);
        let ids: Vec<_> = file.ids().collect();
        assert_ne!(ids[0], ids[1]);

        file.insert_after(ids[1], Comment::new("after second")).unwrap();
        assert_eq!(file.position(ids[1]), Some(1));
        assert_eq!(names(&file)[2], "// after second");
    }

    #[test]
    fn test_remove() {
        let (mut file, ids) = three();
        let removed = file.remove(ids[1]).unwrap();
        assert_eq!(removed.to_string(), "var b int");
        assert_eq!(file.len(), 2);
        assert!(file.get(ids[1]).is_none());
        assert!(file.remove(ids[1]).is_err());
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let (mut file, ids) = three();
        if let Some(Node::Var(var)) = file.get_mut(ids[0]) {
            var.set_value(Some(4.into()));
        }
        assert_eq!(names(&file)[0], "var a int = 4");
    }

    #[test]
    fn test_later_alias_directive_wins() {
        let mut file = File::new("demo", Vec::<Node>::new());
        file.set_import_aliases([
            ImportAlias::new("a", "example.com/x"),
            ImportAlias::new("b", "example.com/x"),
        ]);
        assert_eq!(file.aliases.get("example.com/x").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_invalid_toml_config() {
        let mut file = File::new("demo", Vec::<Node>::new());
        let err = file.configure_from_toml("indent = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_clone_shares_ids() {
        let (file, ids) = three();
        let mut copy = file.clone();
        assert_eq!(copy.ids().collect::<Vec<_>>(), ids);

        let id = copy.insert_after(ids[0], Var::new("x", "int")).unwrap();
        assert_eq!(copy.position(id), Some(1));
        assert_eq!(file.position(id), None);
        assert_eq!(file.len(), 3);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(7).to_string(), "#7");
    }
}
