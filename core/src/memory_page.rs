//! An in-process document tree implementing [`Page`].
//!
//! Enough of the DOM to drive every component without a browser: elements
//! with attributes, a class list, text and children, plus recorded focus
//! and console output.

use std::cell::{Cell, RefCell};

use crate::page::{Page, Selector};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct ElementData {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl ElementData {
    fn new(tag: &str, parent: Option<usize>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            text: String::new(),
            parent,
            children: Vec::new(),
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(key, _)| key != name);
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|value| value.split_whitespace().any(|item| item == class))
            .unwrap_or(false)
    }

    fn matches(&self, selector: Selector) -> bool {
        match selector {
            Selector::Id(id) => self.attribute("id") == Some(id),
            Selector::Class(class) => self.has_class(class),
            Selector::Tag(tag) => self.tag.eq_ignore_ascii_case(tag),
            Selector::Attr(name) => self.attribute(name).is_some(),
            Selector::AttrPrefix(name, prefix) => self
                .attribute(name)
                .map(|value| value.starts_with(prefix))
                .unwrap_or(false),
            Selector::AnyOf(options) => options.iter().any(|option| self.matches(*option)),
        }
    }
}

pub struct MemoryPage {
    elements: RefCell<Vec<ElementData>>,
    focused: Cell<Option<NodeId>>,
    logs: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// A document holding only `<html>` with an empty `<body>`.
    pub fn new() -> Self {
        let page = Self {
            elements: RefCell::new(vec![ElementData::new("html", None)]),
            focused: Cell::new(None),
            logs: RefCell::new(Vec::new()),
            warnings: RefCell::new(Vec::new()),
        };
        page.append(&page.root(), "body");
        page
    }

    pub fn body(&self) -> NodeId {
        NodeId(1)
    }

    /// Appends a new `tag` element as the last child of `parent`.
    pub fn append(&self, parent: &NodeId, tag: &str) -> NodeId {
        let mut elements = self.elements.borrow_mut();
        let id = elements.len();
        elements.push(ElementData::new(tag, Some(parent.0)));
        elements[parent.0].children.push(id);
        NodeId(id)
    }

    /// Appends `tag` with the given attributes.
    pub fn element(&self, parent: &NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let node = self.append(parent, tag);
        for (name, value) in attributes {
            self.set_attribute(&node, name, value);
        }
        node
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused.get()
    }

    pub fn logs(&self) -> Vec<String> {
        self.logs.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    fn is_attached(&self, node: usize) -> bool {
        let elements = self.elements.borrow();
        let mut current = node;
        loop {
            if current == 0 {
                return true;
            }
            match elements[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn descendants(&self, start: usize, include_start: bool) -> Vec<usize> {
        let elements = self.elements.borrow();
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if current != start || include_start {
                order.push(current);
            }
            for child in elements[current].children.iter().rev() {
                stack.push(*child);
            }
        }
        order
    }

    fn search(&self, scope: Option<&NodeId>, selector: Selector) -> Vec<NodeId> {
        let candidates = match scope {
            Some(scope) => self.descendants(scope.0, false),
            None => self.descendants(0, true),
        };
        let elements = self.elements.borrow();
        candidates
            .into_iter()
            .filter(|id| elements[*id].matches(selector))
            .map(NodeId)
            .collect()
    }
}

impl Page for MemoryPage {
    type Node = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn query(&self, scope: Option<&NodeId>, selector: Selector) -> Option<NodeId> {
        self.search(scope, selector).into_iter().next()
    }

    fn query_all(&self, scope: Option<&NodeId>, selector: Selector) -> Vec<NodeId> {
        self.search(scope, selector)
    }

    fn matches(&self, node: &NodeId, selector: Selector) -> bool {
        self.elements.borrow()[node.0].matches(selector)
    }

    fn closest(&self, node: &NodeId, selector: Selector) -> Option<NodeId> {
        let elements = self.elements.borrow();
        let mut current = Some(node.0);
        while let Some(id) = current {
            if elements[id].matches(selector) {
                return Some(NodeId(id));
            }
            current = elements[id].parent;
        }
        None
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let elements = self.elements.borrow();
        let mut current = Some(node.0);
        while let Some(id) = current {
            if id == ancestor.0 {
                return true;
            }
            current = elements[id].parent;
        }
        false
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.elements.borrow()[node.0]
            .attribute(name)
            .map(str::to_string)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.elements.borrow_mut()[node.0].set_attribute(name, value);
    }

    fn remove_attribute(&self, node: &NodeId, name: &str) {
        self.elements.borrow_mut()[node.0].remove_attribute(name);
    }

    fn text(&self, node: &NodeId) -> String {
        let mut text = self.elements.borrow()[node.0].text.clone();
        for child in self.descendants(node.0, false) {
            text.push_str(&self.elements.borrow()[child].text);
        }
        text
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut elements = self.elements.borrow_mut();
        let children = std::mem::take(&mut elements[node.0].children);
        for child in children {
            elements[child].parent = None;
        }
        elements[node.0].text = text.to_string();
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.elements.borrow()[node.0].has_class(class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let mut elements = self.elements.borrow_mut();
        let element = &mut elements[node.0];
        let next = match element.attribute("class") {
            Some(current) if !current.trim().is_empty() => format!("{} {class}", current.trim()),
            _ => class.to_string(),
        };
        element.set_attribute("class", &next);
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        let mut elements = self.elements.borrow_mut();
        let element = &mut elements[node.0];
        let Some(current) = element.attribute("class") else {
            return;
        };
        let next = current
            .split_whitespace()
            .filter(|item| *item != class)
            .collect::<Vec<_>>()
            .join(" ");
        element.set_attribute("class", &next);
    }

    fn focus(&self, node: &NodeId) {
        if self.is_attached(node.0) {
            self.focused.set(Some(*node));
        }
    }

    fn log(&self, message: &str) {
        self.logs.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}
