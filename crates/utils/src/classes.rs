// ABOUTME: Frequency counts of tag.class descriptors for elements carrying a class attribute.
// ABOUTME: Counting works on pre-extracted element data; collect_elements extracts it from HTML.

use std::collections::{BTreeMap, HashMap, HashSet};

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SolverError;

/// Tag name and class list of one element, in attribute order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementClasses {
    pub tag_name: String,
    pub classes: Vec<String>,
}

impl ElementClasses {
    pub fn new<I, S>(tag_name: impl Into<String>, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag_name: tag_name.into(),
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Options for [`enumerate_class_descriptors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassOptions {
    /// For elements with several classes, also count each class on its own.
    ///
    /// `<div class="this that">` then yields `div.this.that`, `div.this` and
    /// `div.that`.
    pub verbose: bool,
    /// Sort class names first so `div.b.a` and `div.a.b` share one entry.
    pub sort_class_names: bool,
}

impl ClassOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn sort_class_names(mut self, sort: bool) -> Self {
        self.sort_class_names = sort;
        self
    }
}

/// Counts `tag.class1.class2` descriptors, keyed and ordered by descriptor.
pub fn enumerate_class_descriptors(
    elements: &[ElementClasses],
    opts: &ClassOptions,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();

    for element in elements {
        let tag = element.tag_name.to_lowercase();
        let mut classes: Vec<&str> = element.classes.iter().map(String::as_str).collect();
        if opts.sort_class_names {
            classes.sort_unstable();
        }

        *counts
            .entry(format!("{}.{}", tag, classes.join(".")))
            .or_insert(0) += 1;

        if opts.verbose && classes.len() > 1 {
            for class in &classes {
                *counts.entry(format!("{}.{}", tag, class)).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Extracts tag names and class lists from every element with a `class`
/// attribute, in document order.
///
/// With a `scope` selector only descendants of matching elements are taken,
/// not the matching elements themselves.
pub fn collect_elements(html: &str, scope: Option<&str>) -> Result<Vec<ElementClasses>, SolverError> {
    let document = Html::parse_document(html);
    let with_class = Selector::parse("[class]").map_err(|e| SolverError::selector("[class]", e))?;

    let mut elements = Vec::new();
    match scope {
        None => elements.extend(document.select(&with_class).map(to_element_classes)),
        Some(scope) => {
            let scope_sel = Selector::parse(scope).map_err(|e| SolverError::selector(scope, e))?;
            let mut seen = HashSet::new();
            let mut found: Vec<ElementRef<'_>> = Vec::new();
            for root in document.select(&scope_sel) {
                for el in root.select(&with_class) {
                    if el.id() != root.id() && seen.insert(el.id()) {
                        found.push(el);
                    }
                }
            }
            // Nested scopes can yield descendants out of order.
            let order: HashMap<_, usize> = document
                .select(&with_class)
                .enumerate()
                .map(|(pos, el)| (el.id(), pos))
                .collect();
            found.sort_by_key(|el| order.get(&el.id()).copied());
            elements.extend(found.into_iter().map(to_element_classes));
        }
    }

    debug!(count = elements.len(), "collected classed elements");
    Ok(elements)
}

fn to_element_classes(el: ElementRef<'_>) -> ElementClasses {
    let class_attr = el.value().attr("class").unwrap_or_default();
    ElementClasses::new(el.value().name(), class_attr.split_whitespace())
}
