use std::collections::HashMap;

/// A single folder in the tree. Children are keyed by name, so names are
/// unique within one folder; no ordering is kept on the map itself.
#[derive(Debug, Default)]
pub struct Folder {
    pub name: String,
    pub children: HashMap<String, Folder>,
}

impl Folder {
    pub fn new(name: String) -> Self {
        Self {
            name,
            children: HashMap::new(),
        }
    }

    /// Look up a child by name, inserting an empty folder first if it does
    /// not exist yet. Repeated calls with the same name return the same
    /// node, so anything already built underneath it is preserved. Any
    /// string is a valid name, including the empty string.
    pub fn get_or_create_child(&mut self, name: &str) -> &mut Folder {
        self.children
            .entry(name.to_string())
            .or_insert_with(|| Folder::new(name.to_string()))
    }

    /// Append this folder's line and then its subtree to `out`, depth-first,
    /// siblings in ascending byte-wise name order. A depth of -1 marks the
    /// synthetic root, which emits no line of its own; its children start at
    /// depth 0. Indentation is one space per depth level.
    pub fn render(&self, depth: isize, out: &mut Vec<String>) {
        self.render_with_indent(depth, 1, out);
    }

    /// Same traversal as `render`, with `unit` spaces per depth level.
    pub fn render_with_indent(&self, depth: isize, unit: usize, out: &mut Vec<String>) {
        if depth != -1 {
            let mut line = " ".repeat(depth as usize * unit);
            line.push_str(&self.name);
            out.push(line);
        }

        // Map iteration order is arbitrary; always sort before emitting.
        let mut names: Vec<&String> = self.children.keys().collect();
        names.sort_unstable();

        for name in names {
            self.children[name].render_with_indent(depth + 1, unit, out);
        }
    }
}
