//! Parsed document tree.
//!
//! All nodes live in one arena owned by [`Document`]. Index 0 is the
//! synthetic root, which has no name and no parent. Children are stored as
//! indices in insertion order; a node refers back to its parent by index
//! and never owns it. Dropping the document releases every node, attribute
//! and body exactly once.

use std::fmt;

/// Index of a node inside its [`Document`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A `name="value"` pair; names need not be unique within a node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: Vec<u8>,
}

impl Attribute {
    pub fn new(name: String, value: Vec<u8>) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value text, or `None` when the raw bytes are not valid UTF-8
    pub fn value(&self) -> Option<&str> {
        std::str::from_utf8(&self.value).ok()
    }

    /// Raw value bytes, exactly as written between the quotes
    pub fn value_bytes(&self) -> &[u8] {
        &self.value
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct NodeData {
    name: Option<String>,
    parent: Option<NodeId>,
    attributes: Vec<Attribute>,
    children: Vec<NodeId>,
    body: Option<Vec<u8>>,
}

/// A parsed XML document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    const ROOT: NodeId = NodeId(0);

    /// An empty document holding only the nameless root
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                name: None,
                parent: None,
                attributes: Vec::new(),
                children: Vec::new(),
                body: None,
            }],
        }
    }

    /// The synthetic root. Its attributes come from the `<?xml ...?>`
    /// declaration and its children are the top-level elements.
    pub fn root(&self) -> Node<'_> {
        Node {
            doc: self,
            id: Self::ROOT,
        }
    }

    pub(crate) fn root_id(&self) -> NodeId {
        Self::ROOT
    }

    /// Look a node up by id
    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        self.nodes.get(id.0).map(|_| Node { doc: self, id })
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the document has no elements
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Allocate a detached element; it joins the tree on [`Self::append_child`].
    pub(crate) fn create_element(&mut self, name: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            name: Some(name),
            parent: None,
            attributes: Vec::new(),
            children: Vec::new(),
            body: None,
        });
        id
    }

    pub(crate) fn push_attribute(&mut self, id: NodeId, attribute: Attribute) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.attributes.push(attribute);
        }
    }

    pub(crate) fn attribute_count(&self, id: NodeId) -> usize {
        self.nodes.get(id.0).map_or(0, |node| node.attributes.len())
    }

    pub(crate) fn set_body(&mut self, id: NodeId, body: Vec<u8>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.body = Some(body);
        }
    }

    /// Attach `child` as the last child of `parent`, recording the back-reference.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(child.0) {
            debug_assert!(node.parent.is_none(), "node inserted twice");
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(child);
        }
    }

    #[allow(clippy::indexing_slicing)]
    fn data(&self, id: NodeId) -> &NodeData {
        // Node handles are only built from ids that index into `nodes`.
        &self.nodes[id.0]
    }
}

/// Borrowed handle to one node of a [`Document`]
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.doc, other.doc)
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

impl<'a> Node<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Element name; `None` only for the document root
    pub fn name(&self) -> Option<&'a str> {
        self.data().name.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.id == Document::ROOT
    }

    pub fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| Self { doc: self.doc, id })
    }

    /// Child elements in document order
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let doc = self.doc;
        self.data()
            .children
            .iter()
            .map(move |&id| Node { doc, id })
    }

    /// Attributes in document order
    pub fn attributes(&self) -> &'a [Attribute] {
        &self.data().attributes
    }

    /// Accumulated, entity-decoded character data directly inside this node.
    ///
    /// `None` when there is no character data or it is not valid UTF-8; the
    /// bytes are always available through [`Self::body_bytes`].
    pub fn body(&self) -> Option<&'a str> {
        self.body_bytes().and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    /// Raw body bytes, copied verbatim apart from entity decoding
    pub fn body_bytes(&self) -> Option<&'a [u8]> {
        self.data().body.as_deref()
    }

    /// First child named `name`, in insertion order
    pub fn child(&self, name: &str) -> Option<Node<'a>> {
        self.children().find(|child| child.name() == Some(name))
    }

    /// Value of the first attribute named `name`, in insertion order.
    ///
    /// `None` when there is no such attribute or its value is not valid UTF-8.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.find_attribute(name).and_then(Attribute::value)
    }

    /// Raw value bytes of the first attribute named `name`
    pub fn attribute_bytes(&self, name: &str) -> Option<&'a [u8]> {
        self.find_attribute(name).map(Attribute::value_bytes)
    }

    fn find_attribute(&self, name: &str) -> Option<&'a Attribute> {
        self.attributes().iter().find(|attr| attr.name() == name)
    }

    fn data(&self) -> &'a NodeData {
        self.doc.data(self.id)
    }
}
