use crate::tree::Folder;

/// Summary statistics over a built folder tree.
pub struct Stats {
    total_folders: usize,
    max_depth: usize,
}

impl Stats {
    /// Walk the tree and count every folder below the root, tracking the
    /// deepest nesting level reached (root's direct children are depth 0).
    pub fn collect(root: &Folder) -> Self {
        let mut stats = Self {
            total_folders: 0,
            max_depth: 0,
        };

        for child in root.children.values() {
            stats.visit(child, 0);
        }

        stats
    }

    fn visit(&mut self, folder: &Folder, depth: usize) {
        self.total_folders += 1;
        self.max_depth = self.max_depth.max(depth);

        for child in folder.children.values() {
            self.visit(child, depth + 1);
        }
    }

    pub fn total_folders(&self) -> usize {
        self.total_folders
    }

    /// Render the footer line, e.g. "4 folders, max depth 2".
    pub fn render(&self) -> String {
        let noun = if self.total_folders == 1 {
            "folder"
        } else {
            "folders"
        };
        format!(
            "{} {}, max depth {}",
            self.total_folders, noun, self.max_depth
        )
    }
}
