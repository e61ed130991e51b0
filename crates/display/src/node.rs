//! For the position of a call within the tree being displayed.
//!
//! A [`DisplayNode`] borrows its call and shares a link to the display node of
//! the calling frame. The links form a chain up to the root, walked when
//! composing the indentation of a line.

use std::{iter, rc::Rc, slice};

use calltree_types::CallNode;
use log::trace;

use crate::{
    glyph::{INDENT_BAR, INDENT_BLANK, LAST_CONNECTOR, MIDDLE_CONNECTOR},
    title::{title, DisplayError},
};

/// A call plus what is needed to draw it at its place in the tree.
#[derive(Debug)]
pub struct DisplayNode<'a> {
    call: &'a CallNode,
    parent: Option<Rc<DisplayNode<'a>>>,
    is_last: bool,
}

impl<'a> DisplayNode<'a> {
    /// Walks the tree in pre-order (call before the calls it made).
    ///
    /// Can be called again on the same root to start over.
    pub fn make_tree(root: &'a CallNode) -> CallTreeIter<'a> {
        CallTreeIter {
            root: Some(root),
            frames: vec![],
        }
    }

    pub fn call(&self) -> &'a CallNode {
        self.call
    }

    /// Display node of the calling frame. None for the root.
    pub fn parent(&self) -> Option<&DisplayNode<'a>> {
        self.parent.as_deref()
    }

    /// Whether this is the final call made by its parent. Not meaningful for the root.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn depth(&self) -> usize {
        self.call.depth
    }

    pub fn title(&self) -> Result<String, DisplayError> {
        title(self.call)
    }

    /// Parent, grandparent and so on, ending with the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &DisplayNode<'a>> {
        iter::successors(self.parent(), |node| node.parent())
    }

    /// One line of the text tree.
    ///
    /// The root is the bare title. Other calls get a connector, preceded by one
    /// indentation block for every ancestor below the root.
    pub fn render(&self) -> Result<String, DisplayError> {
        let title = self.title()?;
        if self.is_root() {
            return Ok(title);
        }
        let connector = match self.is_last {
            true => LAST_CONNECTOR,
            false => MIDDLE_CONNECTOR,
        };
        let indent: Vec<&str> = self
            .ancestors()
            .filter(|ancestor| !ancestor.is_root())
            .map(|ancestor| match ancestor.is_last {
                true => INDENT_BLANK,
                false => INDENT_BAR,
            })
            .collect();

        let mut line: String = indent.into_iter().rev().collect();
        line.push_str(connector);
        line.push(' ');
        line.push_str(&title);
        Ok(line)
    }
}

/// A call that made calls, and the calls not yet reached.
#[derive(Debug)]
struct Frame<'a> {
    node: Rc<DisplayNode<'a>>,
    children: iter::Enumerate<slice::Iter<'a, CallNode>>,
    count: usize,
}

/// Lazy pre-order walk over a call tree.
///
/// A display node is only created when it is reached. One frame is kept per
/// level of the current path, and only for calls that made calls.
#[derive(Debug)]
pub struct CallTreeIter<'a> {
    root: Option<&'a CallNode>,
    frames: Vec<Frame<'a>>,
}

impl<'a> CallTreeIter<'a> {
    fn emit(
        &mut self,
        call: &'a CallNode,
        parent: Option<Rc<DisplayNode<'a>>>,
        is_last: bool,
    ) -> Rc<DisplayNode<'a>> {
        trace!(
            "Call tree node at depth {} with {} children",
            call.depth,
            call.children.len()
        );
        let node = Rc::new(DisplayNode {
            call,
            parent,
            is_last,
        });
        if !call.children.is_empty() {
            self.frames.push(Frame {
                node: Rc::clone(&node),
                children: call.children.iter().enumerate(),
                count: call.children.len(),
            });
        }
        node
    }
}

impl<'a> Iterator for CallTreeIter<'a> {
    type Item = Rc<DisplayNode<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            return Some(self.emit(root, None, false));
        }
        loop {
            let frame = self.frames.last_mut()?;
            match frame.children.next() {
                Some((index, child)) => {
                    let position = index + 1;
                    let is_last = position == frame.count;
                    let parent = Rc::clone(&frame.node);
                    return Some(self.emit(child, Some(parent), is_last));
                }
                None => {
                    self.frames.pop();
                }
            }
        }
    }
}
