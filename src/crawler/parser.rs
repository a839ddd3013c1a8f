//! HTML document wrapper for contact and link mining
//!
//! This module wraps a parsed `scraper::Html` tree and exposes the three views
//! the crawl needs:
//! - All visible text, joined with a single space
//! - Every `<a href>` anchor with its inner text, in document order
//! - Anchors whose href starts with a given prefix (`mailto:`, `tel:`)

use scraper::{ElementRef, Html, Selector};

/// Elements whose text content is never rendered
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "template"];

/// An anchor element reduced to the parts the crawl reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Raw href attribute value
    pub href: String,

    /// Inner text with each text node trimmed and concatenated
    pub text: String,
}

impl Anchor {
    fn from_element(element: ElementRef<'_>) -> Option<Self> {
        let href = element.value().attr("href")?;
        let text = element
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<String>();

        Some(Self {
            href: href.to_string(),
            text,
        })
    }
}

/// A parsed HTML page
pub struct PageDocument {
    document: Html,
}

impl PageDocument {
    /// Parses HTML content into a document tree
    ///
    /// # Example
    ///
    /// ```
    /// use site_contacts::crawler::PageDocument;
    ///
    /// let doc = PageDocument::parse(r#"<p>Hi</p><a href="/a">A</a>"#);
    /// assert_eq!(doc.anchors().len(), 1);
    /// ```
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Returns all visible text nodes joined with a single space
    ///
    /// Text inside `<script>`, `<style>` and `<template>` is skipped.
    /// `<noscript>` fallback content is kept.
    pub fn visible_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();

        for node in self.document.root_element().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };

            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|e| e.name()))
                .map_or(false, |name| INVISIBLE_ELEMENTS.contains(&name));

            if !hidden {
                parts.push(&**text);
            }
        }

        parts.join(" ")
    }

    /// Returns every anchor carrying an href attribute, in document order
    pub fn anchors(&self) -> Vec<Anchor> {
        match Selector::parse("a[href]") {
            Ok(selector) => self
                .document
                .select(&selector)
                .filter_map(Anchor::from_element)
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns the anchors whose href starts with `prefix`
    ///
    /// This is a `a[href^="prefix"]` selector query, so the comparison is
    /// case-sensitive.
    pub fn anchors_with_href_prefix(&self, prefix: &str) -> Vec<Anchor> {
        let query = format!("a[href^=\"{}\"]", prefix.replace('"', "\\\""));
        let selector = Selector::parse(&query);

        match selector {
            Ok(selector) => self
                .document
                .select(&selector)
                .filter_map(Anchor::from_element)
                .collect(),
            Err(_) => self
                .anchors()
                .into_iter()
                .filter(|a| a.href.starts_with(prefix))
                .collect(),
        }
    }
}
