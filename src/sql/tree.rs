use super::classifier::DML_COMMANDS;
use std::fmt;

/// A node of the shallow syntax tree: a value and its owned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTreeNode {
    pub value: String,
    pub children: Vec<SyntaxTreeNode>,
}

impl SyntaxTreeNode {
    pub fn new(value: impl Into<String>) -> Self {
        SyntaxTreeNode {
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, node: SyntaxTreeNode) {
        self.children.push(node);
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        writeln!(f, "{}'{}'", "\t".repeat(level), self.value)?;
        for child in &self.children {
            child.fmt_at(f, level + 1)?;
        }
        Ok(())
    }
}

/// Renders the tree depth-first pre-order, one node per line, values
/// single-quoted, children indented one tab deeper than their parent.
impl fmt::Display for SyntaxTreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

/// Builds the fixed-depth tree for a recognized command.
///
/// The root carries the command upper-cased. A DML root gets exactly one
/// child holding the rest of the tokens re-joined with spaces. A DDL root
/// gets two children: the object-type token upper-cased (taken positionally,
/// without re-checking it against the object-type set) and the remaining
/// tokens re-joined with spaces.
///
/// # Arguments
/// * `tokens` - The tokenized statement; `tokens[0]` is the command.
/// * `command` - A recognized DML or DDL keyword.
///
/// # Returns
/// The root node. Callers must classify first: for DDL commands the shape
/// pattern guarantees at least two tokens, which this function relies on.
pub fn build(tokens: &[String], command: &str) -> SyntaxTreeNode {
    let command = command.to_uppercase();
    let mut root = SyntaxTreeNode::new(command.as_str());

    if DML_COMMANDS.contains(&command.as_str()) {
        root.add_child(SyntaxTreeNode::new(tokens[1..].join(" ")));
    } else {
        root.add_child(SyntaxTreeNode::new(tokens[1].to_uppercase()));
        root.add_child(SyntaxTreeNode::new(tokens[2..].join(" ")));
    }

    root
}
