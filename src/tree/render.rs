use std::fmt;

use crate::order::SortOrder;

use super::node::Node;
use super::SortedTree;

/// Columns of indentation added per tree level.
const SPACER: usize = 2;

/// Minimum inner width of the rendered frame.
const MIN_WIDTH: usize = 40;

impl<T, S> SortedTree<T, S>
where
    T: fmt::Debug,
    S: SortOrder<T>,
    S::Key: fmt::Debug,
{
    /// Renders the tree as a text block for diagnostics.
    ///
    /// The left (minimum) side of the tree is printed above its parent and
    /// the right side below, with `/` and `\` rules connecting children to
    /// parents. Subtrees deeper than `max_depth` are truncated with a
    /// `- ...` marker. When `show_key` is set, nodes whose stored sort key
    /// is distinct from their value are annotated with `(key=...)`.
    ///
    /// Purely cosmetic; nothing in the tree depends on this output.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_tree::SortedTree;
    ///
    /// let mut tree = SortedTree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    /// tree.insert(8);
    ///
    /// let rendered = tree.render(10, true);
    /// assert!(rendered.contains("/-3"));
    /// assert!(rendered.contains("-5"));
    /// assert!(rendered.contains("\\-8"));
    /// ```
    pub fn render(&self, max_depth: usize, show_key: bool) -> String {
        let (top, mid, bot) = self.render_parts(self.root.as_deref(), max_depth, show_key);

        let lines: Vec<String> = top.into_iter().chain(Some(mid)).chain(bot).collect();
        let width = lines
            .iter()
            .map(|line| line.len())
            .max()
            .unwrap_or(0)
            .max(MIN_WIDTH);

        let mut out = String::new();
        out.push_str(&format!("+-{:->width$}-+\n", "MIN", width = width));
        for line in &lines {
            out.push_str(&format!("| {:<width$} |\n", line, width = width));
        }
        out.push_str(&format!("+-{:->width$}-+\n", "MAX", width = width));
        out
    }

    /// Returns the lines above the node, the node's own line, and the
    /// lines below it.
    fn render_parts(
        &self,
        node: Option<&Node<T, S>>,
        depth: usize,
        show_key: bool,
    ) -> (Vec<String>, String, Vec<String>) {
        if depth == 0 {
            return (Vec::new(), String::from("- ..."), Vec::new());
        }

        let node = match node {
            Some(node) => node,
            None => return (Vec::new(), String::from("- EMPTY"), Vec::new()),
        };

        let mut mid = format!("-{:?}", node.value);
        if show_key {
            if let Some(key) = self.order.stored_key(&node.key) {
                mid.push_str(&format!(" (key={:?})", key));
            }
        }

        let mut top = Vec::new();
        let mut bot = Vec::new();

        if node.has_left() {
            let (t, m, b) = self.render_parts(node.left(), depth - 1, show_key);
            let indent = " ".repeat(b.len() + SPACER);

            for line in t {
                top.push(format!("{} {}", indent, line));
            }
            top.push(format!("{}/{}", indent, m));
            for (i, line) in b.iter().enumerate() {
                top.push(format!(
                    "{}/{}{}",
                    " ".repeat(b.len() - i + SPACER - 1),
                    " ".repeat(i + 1),
                    line,
                ));
            }
        }

        if node.has_right() {
            let (t, m, b) = self.render_parts(node.right(), depth - 1, show_key);
            let indent = " ".repeat(t.len() + SPACER);

            for (i, line) in t.iter().enumerate() {
                bot.push(format!(
                    "{}\\{}{}",
                    " ".repeat(i + SPACER),
                    " ".repeat(t.len() - i),
                    line,
                ));
            }
            bot.push(format!("{}\\{}", indent, m));
            for line in b {
                bot.push(format!("{} {}", indent, line));
            }
        }

        (top, mid, bot)
    }
}

impl<T, S> fmt::Display for SortedTree<T, S>
where
    T: fmt::Debug,
    S: SortOrder<T>,
    S::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(10, true))
    }
}
