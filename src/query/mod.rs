//! Chainable, selector-scoped access to a parsed page.
//!
//! A [`Selection`] is an ordered, possibly empty set of nodes. Navigating an
//! empty selection yields another empty selection and every accessor on it
//! reports absence, so extractors can chain freely and decide at the end
//! which fields are mandatory.

pub mod number;

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::warn;

pub use number::{Number, id_at, parse_number};

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css)
        .inspect_err(|e| warn!("invalid CSS selector '{}': {}", css, e))
        .ok()
}

/// One fetched page, parsed once and never mutated.
pub struct Page {
    html: Html,
}

impl Page {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Selects every element of the page matching `css`.
    pub fn select(&self, css: &str) -> Selection<'_> {
        match selector(css) {
            Some(selector) => Selection::from_elements(self.html.select(&selector)),
            None => Selection::default(),
        }
    }

    pub fn root(&self) -> Selection<'_> {
        Selection::from_elements(std::iter::once(self.html.root_element()))
    }
}

#[derive(Debug, Clone, Copy)]
enum Item<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
}

impl<'a> Item<'a> {
    fn element(self) -> Option<ElementRef<'a>> {
        match self {
            Item::Element(el) => Some(el),
            Item::Text(_) => None,
        }
    }

    fn push_text(self, out: &mut String) {
        match self {
            Item::Element(el) => el.text().for_each(|t| out.push_str(t)),
            Item::Text(t) => out.push_str(t),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    items: Vec<Item<'a>>,
}

impl<'a> Selection<'a> {
    fn from_elements(elements: impl IntoIterator<Item = ElementRef<'a>>) -> Self {
        let mut seen = HashSet::new();
        let items = elements
            .into_iter()
            .filter(|el| seen.insert(el.id()))
            .map(Item::Element)
            .collect();
        Self { items }
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'a>> + '_ {
        self.items.iter().filter_map(|item| item.element())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True iff at least one node matched.
    pub fn exists(&self) -> bool {
        !self.is_empty()
    }

    /// Descendants of every selected element matching `css`.
    pub fn find(&self, css: &str) -> Selection<'a> {
        let Some(selector) = selector(css) else {
            return Selection::default();
        };
        let matches: Vec<_> = self
            .elements()
            .flat_map(|el| el.select(&selector).collect::<Vec<_>>())
            .collect();
        Selection::from_elements(matches)
    }

    /// Child elements of every selected element.
    pub fn children(&self) -> Selection<'a> {
        Selection::from_elements(
            self.elements()
                .flat_map(|el| el.children().filter_map(ElementRef::wrap))
                .collect::<Vec<_>>(),
        )
    }

    /// Child elements matching `css`.
    pub fn children_matching(&self, css: &str) -> Selection<'a> {
        let Some(selector) = selector(css) else {
            return Selection::default();
        };
        let children = self.children();
        Selection::from_elements(
            children
                .elements()
                .filter(|el| selector.matches(el))
                .collect::<Vec<_>>(),
        )
    }

    /// Child nodes, text included, of every selected element.
    pub fn contents(&self) -> Selection<'a> {
        let items = self
            .elements()
            .flat_map(|el| {
                el.children().filter_map(|node| match ElementRef::wrap(node) {
                    Some(child) => Some(Item::Element(child)),
                    None => node.value().as_text().map(|text| Item::Text(&**text)),
                })
            })
            .collect();
        Selection { items }
    }

    pub fn parent(&self) -> Selection<'a> {
        Selection::from_elements(
            self.elements()
                .filter_map(|el| el.parent().and_then(ElementRef::wrap))
                .collect::<Vec<_>>(),
        )
    }

    /// The next sibling element of every selected element.
    pub fn next(&self) -> Selection<'a> {
        Selection::from_elements(
            self.elements()
                .filter_map(|el| el.next_siblings().find_map(ElementRef::wrap))
                .collect::<Vec<_>>(),
        )
    }

    /// The previous sibling element of every selected element.
    pub fn prev(&self) -> Selection<'a> {
        Selection::from_elements(
            self.elements()
                .filter_map(|el| el.prev_siblings().find_map(ElementRef::wrap))
                .collect::<Vec<_>>(),
        )
    }

    /// The node at `index`, or an empty selection.
    pub fn nth(&self, index: usize) -> Selection<'a> {
        Selection {
            items: self.items.get(index).copied().into_iter().collect(),
        }
    }

    pub fn first(&self) -> Selection<'a> {
        self.nth(0)
    }

    pub fn last(&self) -> Selection<'a> {
        Selection {
            items: self.items.last().copied().into_iter().collect(),
        }
    }

    /// Keeps the nodes for which `keep` returns true.
    pub fn filter(&self, mut keep: impl FnMut(&Selection<'a>) -> bool) -> Selection<'a> {
        Selection {
            items: self
                .iter()
                .filter(|single| keep(single))
                .flat_map(|single| single.items)
                .collect(),
        }
    }

    /// Each selected node as its own single-node selection.
    pub fn iter(&self) -> impl Iterator<Item = Selection<'a>> + '_ {
        self.items.iter().map(|item| Selection { items: vec![*item] })
    }

    /// Combined text of all selected nodes.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            item.push_text(&mut out);
        }
        out
    }

    /// Whitespace-trimmed text, `None` when nothing is left.
    pub fn trim_text(&self) -> Option<String> {
        let text = self.text();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Attribute of the first selected element, `""` when missing.
    pub fn attr(&self, name: &str) -> &'a str {
        self.elements()
            .next()
            .and_then(|el| el.value().attr(name))
            .unwrap_or_default()
    }

    pub fn attr_then<T>(&self, name: &str, then: impl FnOnce(&'a str) -> T) -> T {
        then(self.attr(name))
    }

    /// Attribute of the first selected element, `None` when missing or empty.
    pub fn attr_opt(&self, name: &str) -> Option<&'a str> {
        Some(self.attr(name)).filter(|value| !value.is_empty())
    }

    /// Value of a `data-*` attribute, e.g. `data("unix")` reads `data-unix`.
    pub fn data(&self, name: &str) -> Option<&'a str> {
        self.attr_opt(&format!("data-{name}"))
    }

    /// Class names of the first selected element.
    pub fn classes(&self) -> Vec<&'a str> {
        self.elements()
            .next()
            .map(|el| el.value().classes().collect())
            .unwrap_or_default()
    }

    pub fn num_from_text<T: Number>(&self) -> Option<T> {
        parse_number(&self.text())
    }

    pub fn num_from_attr<T: Number>(&self, name: &str) -> Option<T> {
        parse_number(self.attr(name))
    }

    /// Id taken from the `index`-th path segment of an attribute (usually `href`).
    pub fn id_at(&self, name: &str, index: usize) -> Option<u64> {
        id_at(self.attr(name), index)
    }
}


#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_navigation_never_panics(markup in ".*", css in "[a-z.# >]{0,12}") {
            let page = Page::parse(&markup);
            let selection = page.select(&css);
            let _ = selection.find("a").parent().contents().last().text();
            let _ = selection.first().num_from_attr::<f64>("data-unix");
            let _ = selection.nth(3).trim_text();
        }
    }
}
