use super::node::Folder;

/// Split `path` on `delimiter` and descend from `root` one segment at a
/// time, creating folders as needed. Empty segments (consecutive, leading
/// or trailing delimiters) create a folder whose name is the empty string;
/// nothing is rejected.
pub fn insert_path(root: &mut Folder, path: &str, delimiter: char) {
    let mut current = root;
    for segment in path.split(delimiter) {
        current = current.get_or_create_child(segment);
    }
}

/// Build a tree from a flat list of delimited paths, rooted at an anonymous
/// folder. Insertion order does not affect the resulting shape.
pub fn build_tree(paths: &[String], delimiter: char) -> Folder {
    let mut root = Folder::new(String::new());
    for path in paths {
        insert_path(&mut root, path, delimiter);
    }
    root
}

/// Build the tree and render it as one line per distinct folder, children
/// sorted by name and indented one space per nesting level. The root is
/// excluded, so top-level folders carry no indentation.
#[allow(dead_code)]
pub fn solve(paths: &[String], delimiter: char) -> Vec<String> {
    let root = build_tree(paths, delimiter);
    let mut lines = Vec::new();
    root.render(-1, &mut lines);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_solve_empty_input() {
        assert_eq!(solve(&[], '\\'), Vec::<String>::new());
    }

    #[test]
    fn test_solve_shared_prefix() {
        let lines = solve(&paths(&["a\\b", "a\\c"]), '\\');
        assert_eq!(lines, vec!["a", " b", " c"]);
    }

    #[test]
    fn test_solve_nested_and_sibling() {
        let lines = solve(&paths(&["a\\b\\c", "a\\d"]), '\\');
        assert_eq!(lines, vec!["a", " b", "  c", " d"]);
    }

    #[test]
    fn test_solve_sorts_regardless_of_input_order() {
        let lines = solve(&paths(&["b", "a"]), '\\');
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_solve_single_segment() {
        let lines = solve(&paths(&["docs"]), '\\');
        assert_eq!(lines, vec!["docs"]);
    }

    #[test]
    fn test_solve_duplicate_paths_once() {
        let once = solve(&paths(&["a\\b"]), '\\');
        let twice = solve(&paths(&["a\\b", "a\\b"]), '\\');
        assert_eq!(once, twice);
    }

    #[test]
    fn test_solve_order_independent() {
        let input = ["x\\y", "a\\b\\c", "x", "a\\d"];
        let forward = solve(&paths(&input), '\\');

        let mut reversed: Vec<String> = paths(&input);
        reversed.reverse();
        assert_eq!(solve(&reversed, '\\'), forward);
    }

    #[test]
    fn test_solve_line_count_matches_distinct_folders() {
        // a, b, c, d, x, y: six distinct folders across all levels.
        let lines = solve(&paths(&["a\\b\\c", "a\\d", "x\\y"]), '\\');
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_solve_consecutive_delimiters_make_empty_folder() {
        let lines = solve(&paths(&["a\\\\b"]), '\\');
        // The middle segment is empty, so depth 1 holds a nameless folder.
        assert_eq!(lines, vec!["a", " ", "  b"]);
    }

    #[test]
    fn test_solve_empty_path_is_one_empty_folder() {
        let lines = solve(&paths(&[""]), '\\');
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_solve_with_slash_delimiter() {
        let lines = solve(&paths(&["a/b", "a/c"]), '/');
        assert_eq!(lines, vec!["a", " b", " c"]);
    }

    #[test]
    fn test_insert_path_reuses_existing_branch() {
        let mut root = Folder::new(String::new());
        insert_path(&mut root, "a\\b", '\\');
        insert_path(&mut root, "a\\c", '\\');

        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children["a"].children.len(), 2);
    }
}
