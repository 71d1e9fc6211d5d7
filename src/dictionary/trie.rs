//! Arena-backed prefix tree
//!
//! Nodes live in a single `Vec` and refer to their children by index. Each
//! node is reachable from exactly one parent, and the whole tree is released
//! at once when the arena is dropped.

use super::DictionaryError;

const ALPHABET: usize = 26;

/// Index of a node in the trie arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; ALPHABET],
    terminal: bool,
}

/// Prefix tree over lowercase ASCII words
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

impl Trie {
    /// The root node, which holds no letter
    pub const ROOT: NodeId = NodeId(0);

    /// Create an empty trie holding only the root
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            words: 0,
        }
    }

    /// Add a word, creating nodes along its path as needed
    ///
    /// Inserting a word twice is a no-op.
    ///
    /// # Errors
    /// Returns `InvalidWord` if the word is empty or has characters outside
    /// `a..=z` (the trie is left untouched), or `AllocationFailure` if the
    /// arena cannot grow.
    pub fn insert(&mut self, word: &str) -> Result<(), DictionaryError> {
        let letters = word
            .bytes()
            .map(letter_index)
            .collect::<Option<Vec<_>>>()
            .filter(|letters| !letters.is_empty())
            .ok_or_else(|| DictionaryError::InvalidWord(word.to_string()))?;

        let mut node = Self::ROOT;
        for index in letters {
            node = match self.nodes[node.0 as usize].children[index] {
                Some(child) => child,
                None => {
                    let child = self.push_node()?;
                    self.nodes[node.0 as usize].children[index] = Some(child);
                    child
                }
            };
        }

        let last = &mut self.nodes[node.0 as usize];
        if !last.terminal {
            last.terminal = true;
            self.words += 1;
        }

        Ok(())
    }

    fn push_node(&mut self) -> Result<NodeId, DictionaryError> {
        let id = u32::try_from(self.nodes.len()).map_err(|_| DictionaryError::AllocationFailure)?;
        self.nodes
            .try_reserve(1)
            .map_err(|_| DictionaryError::AllocationFailure)?;
        self.nodes.push(Node::default());
        Ok(NodeId(id))
    }

    /// Check whether `word` is stored
    ///
    /// With `allow_prefix`, any path that exists counts, including proper
    /// prefixes of stored words.
    ///
    /// # Examples
    /// ```
    /// use tileset::dictionary::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("bc").unwrap();
    ///
    /// assert!(trie.contains("bc", false));
    /// assert!(!trie.contains("b", false));
    /// assert!(trie.contains("b", true));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str, allow_prefix: bool) -> bool {
        self.walk(word)
            .is_some_and(|node| allow_prefix || self.is_terminal(node))
    }

    /// Follow `word` from the root, returning the node it ends at
    #[must_use]
    pub fn walk(&self, word: &str) -> Option<NodeId> {
        word.bytes()
            .try_fold(Self::ROOT, |node, letter| self.child(node, letter))
    }

    /// Child of `node` for `letter`, if any word continues that way
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        letter_index(letter).and_then(|index| self.nodes[node.0 as usize].children[index])
    }

    /// Whether a word ends at `node`
    #[inline]
    #[must_use]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].terminal
    }

    /// Whether any word continues past `node`
    #[inline]
    #[must_use]
    pub fn has_children(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].children.iter().any(Option::is_some)
    }

    /// Number of distinct words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, including the root
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
