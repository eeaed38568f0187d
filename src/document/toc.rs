//! Table of contents synthesis
//!
//! Turns the flat, ordered heading list into a forest of owned
//! [`TableOfContentsItem`] nodes.

use super::models::{Heading, TableOfContentsItem};

/// Build a nested table of contents from headings in document order.
///
/// A heading becomes a child of the nearest preceding heading with a
/// smaller level, or a root when there is none. Level jumps (1 → 3) nest
/// directly without synthetic intermediate entries.
pub fn generate_table_of_contents(headings: &[Heading]) -> Vec<TableOfContentsItem> {
    let mut roots: Vec<TableOfContentsItem> = Vec::new();
    // Open nodes, outermost first. A node is attached to its parent once it
    // can receive no further children.
    let mut stack: Vec<(TableOfContentsItem, u32)> = Vec::new();

    for heading in headings {
        while stack.last().is_some_and(|(_, level)| *level >= heading.level) {
            close_top(&mut stack, &mut roots);
        }

        stack.push((
            TableOfContentsItem::new(heading.title.clone(), heading.page_number),
            heading.level,
        ));
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

fn close_top(stack: &mut Vec<(TableOfContentsItem, u32)>, roots: &mut Vec<TableOfContentsItem>) {
    if let Some((node, _)) = stack.pop() {
        match stack.last_mut() {
            Some((parent, _)) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}
