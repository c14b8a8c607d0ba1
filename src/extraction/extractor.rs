//! Answer board extraction
//!
//! Walks a DOM snapshot and turns every result element into a [`Record`].
//! Missing names and slots degrade to empty strings and are reported as
//! [`Anomaly`] values; only a missing container aborts the pass.

use super::record::{Anomaly, AnomalyKind, Extraction, Record, SLOT_COUNT};
use crate::dom::{DomNode, ElementNode};
use crate::error::ExtractionError;
use crate::export::escape_quotes;
use crate::selectors::SelectorSet;
use tracing::{debug, info, instrument, warn};

/// Extracts records according to a [`SelectorSet`]
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'s> {
    selectors: &'s SelectorSet,
}

impl<'s> Extractor<'s> {
    /// Create an extractor using `selectors`
    pub fn new(selectors: &'s SelectorSet) -> Self {
        Self { selectors }
    }

    /// Run a full pass: locate, enumerate, and extract every element
    #[instrument(skip_all)]
    pub fn extract(&self, root: &ElementNode) -> Result<Extraction, ExtractionError> {
        let container = self.locate_container(root)?;
        let elements = self.enumerate_result_elements(container);
        debug!("Found {} result elements", elements.len());

        let mut extraction = Extraction::default();
        for (position, element) in elements.into_iter().enumerate() {
            let record = self.extract_record(position, element, &mut extraction.anomalies);
            extraction.records.push(record);
        }

        info!(
            "Extracted {} records with {} anomalies",
            extraction.records.len(),
            extraction.anomalies.len()
        );
        Ok(extraction)
    }

    /// Find the first element, `root` included, carrying every container class
    pub fn locate_container<'a>(
        &self,
        root: &'a ElementNode,
    ) -> Result<&'a ElementNode, ExtractionError> {
        let container = &self.selectors.container;
        std::iter::once(root)
            .chain(root.descendants())
            .find(|el| el.has_all_classes(container))
            .ok_or_else(|| {
                ExtractionError::ContainerNotFound(self.selectors.container_signature())
            })
    }

    /// All result elements inside `container`, in document order
    pub fn enumerate_result_elements<'a>(
        &self,
        container: &'a ElementNode,
    ) -> Vec<&'a ElementNode> {
        container
            .descendants()
            .filter(|el| el.has_class(&self.selectors.item))
            .collect()
    }

    /// Build one record, recording anomalies instead of failing
    pub fn extract_record(
        &self,
        position: usize,
        element: &ElementNode,
        anomalies: &mut Vec<Anomaly>,
    ) -> Record {
        let element = self.scoped(element);
        let mut report = |kind: AnomalyKind| {
            let anomaly = Anomaly {
                element: position,
                kind,
            };
            warn!("{}", anomaly);
            anomalies.push(anomaly);
            String::new()
        };

        let name = self.extract_name(element).unwrap_or_else(&mut report);
        let slots: [String; SLOT_COUNT] = std::array::from_fn(|index| {
            self.extract_field_at(element, index)
                .unwrap_or_else(&mut report)
        });
        Record::new(name, slots)
    }

    /// Trimmed text of the name card's name element
    pub fn extract_name(&self, element: &ElementNode) -> Result<String, AnomalyKind> {
        element
            .find_class(&self.selectors.name_card)
            .and_then(|card| card.find_class(&self.selectors.name_text))
            .map(|label| label.text_content().trim().to_string())
            .ok_or(AnomalyKind::NameMissing)
    }

    /// Text of the slot tagged with the positional marker for `index`.
    ///
    /// The first candidate, in document order, whose raw class attribute
    /// contains the marker as a substring wins. Its first child node's text
    /// is trimmed and quote-escaped.
    pub fn extract_field_at(
        &self,
        element: &ElementNode,
        index: usize,
    ) -> Result<String, AnomalyKind> {
        let marker = self.selectors.field_marker_for(index);
        let candidate_class = self.selectors.field_class.as_deref();

        let slot = element
            .descendants()
            .filter(|el| candidate_class.map_or(true, |class| el.has_class(class)))
            .find(|el| el.class_attr().contains(&marker))
            .ok_or(AnomalyKind::FieldMissing { index })?;

        let text = slot
            .first_child()
            .map(DomNode::text_content)
            .unwrap_or_default();
        Ok(escape_quotes(text.trim()))
    }

    fn scoped<'a>(&self, element: &'a ElementNode) -> &'a ElementNode {
        match &self.selectors.scope {
            Some(scope) => element.find_class(scope).unwrap_or_else(|| {
                debug!("Result element has no .{} wrapper, using it directly", scope);
                element
            }),
            None => element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(index: usize, text: &str) -> ElementNode {
        ElementNode::new("div", format!("square {index} correct")).text(text)
    }

    fn answer(name: Option<&str>, squares: Vec<ElementNode>) -> ElementNode {
        let mut inner = ElementNode::new("div", "square-container");
        if let Some(name) = name {
            inner = inner.child(
                ElementNode::new("div", "square")
                    .child(ElementNode::new("img", "champion-icon"))
                    .child(ElementNode::new("span", "champion-icon-name").text(format!(" {name} "))),
            );
        }
        for sq in squares {
            inner = inner.child(sq);
        }
        ElementNode::new("div", "classic-answer").child(inner)
    }

    fn board(answers: Vec<ElementNode>) -> ElementNode {
        let container = ElementNode::new("div", "answers-container classic-answers-container")
            .with_children(answers.into_iter().map(DomNode::from).collect());
        ElementNode::new("html", "").child(ElementNode::new("body", "").child(container))
    }

    #[test]
    fn test_locate_container_missing() {
        let selectors = SelectorSet::default();
        let root = ElementNode::new("html", "").child(ElementNode::new("div", "answers-container"));
        let err = Extractor::new(&selectors).locate_container(&root).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::ContainerNotFound(
                ".answers-container.classic-answers-container".to_string()
            )
        );
    }

    #[test]
    fn test_locate_container_may_be_root() {
        let selectors = SelectorSet::default();
        let root = ElementNode::new("div", "classic-answers-container answers-container");
        assert!(Extractor::new(&selectors).locate_container(&root).is_ok());
    }

    #[test]
    fn test_enumerate_in_document_order() {
        let selectors = SelectorSet::default();
        let root = board(vec![answer(Some("Ahri"), vec![]), answer(Some("Garen"), vec![])]);
        let extractor = Extractor::new(&selectors);
        let container = extractor.locate_container(&root).unwrap();
        let names: Vec<String> = extractor
            .enumerate_result_elements(container)
            .into_iter()
            .map(|el| extractor.extract_name(el).unwrap())
            .collect();
        assert_eq!(names, vec!["Ahri", "Garen"]);
    }

    #[test]
    fn test_extract_name_trims() {
        let selectors = SelectorSet::default();
        let el = answer(Some("Kai'Sa"), vec![]);
        assert_eq!(Extractor::new(&selectors).extract_name(&el).unwrap(), "Kai'Sa");
    }

    #[test]
    fn test_extract_name_card_without_label() {
        let selectors = SelectorSet::default();
        let el = ElementNode::new("div", "classic-answer").child(square(0, "Female"));
        assert_eq!(
            Extractor::new(&selectors).extract_name(&el),
            Err(AnomalyKind::NameMissing)
        );
    }

    #[test]
    fn test_extract_field_first_child_only() {
        let selectors = SelectorSet::default();
        let slot = ElementNode::new("div", "square 1 partial")
            .text("  Top, Mid ")
            .child(ElementNode::new("div", "arrow").text("higher"));
        let el = answer(None, vec![slot]);
        assert_eq!(
            Extractor::new(&selectors).extract_field_at(&el, 1).unwrap(),
            "Top, Mid"
        );
    }

    #[test]
    fn test_extract_field_escapes_quotes() {
        let selectors = SelectorSet::default();
        let el = answer(None, vec![square(5, r#"Region "A""#)]);
        assert_eq!(
            Extractor::new(&selectors).extract_field_at(&el, 5).unwrap(),
            r#"Region ""A"""#
        );
    }

    #[test]
    fn test_extract_field_missing() {
        let selectors = SelectorSet::default();
        let el = answer(None, vec![square(0, "Female")]);
        assert_eq!(
            Extractor::new(&selectors).extract_field_at(&el, 4),
            Err(AnomalyKind::FieldMissing { index: 4 })
        );
    }

    #[test]
    fn test_extract_field_empty_slot_is_not_missing() {
        let selectors = SelectorSet::default();
        let el = answer(None, vec![ElementNode::new("div", "square 2")]);
        assert_eq!(Extractor::new(&selectors).extract_field_at(&el, 2).unwrap(), "");
    }

    #[test]
    fn test_extract_field_requires_candidate_class() {
        let selectors = SelectorSet::default();
        let decoy = ElementNode::new("div", "not-a-square 3").text("decoy");
        let el = answer(None, vec![decoy, square(3, "Mana")]);
        assert_eq!(Extractor::new(&selectors).extract_field_at(&el, 3).unwrap(), "Mana");
    }

    #[test]
    fn test_extract_collects_anomalies() {
        let selectors = SelectorSet::default();
        let squares = (0..SLOT_COUNT)
            .filter(|&i| i != 3)
            .map(|i| square(i, &format!("v{i}")))
            .collect();
        let root = board(vec![answer(None, squares)]);
        let extraction = Extractor::new(&selectors).extract(&root).unwrap();

        assert_eq!(extraction.records.len(), 1);
        let record = &extraction.records[0];
        assert_eq!(record.name(), "");
        assert_eq!(record.slots()[3], "");
        assert_eq!(record.slots()[6], "v6");
        assert_eq!(
            extraction.anomalies,
            vec![
                Anomaly {
                    element: 0,
                    kind: AnomalyKind::NameMissing
                },
                Anomaly {
                    element: 0,
                    kind: AnomalyKind::FieldMissing { index: 3 }
                },
            ]
        );
    }

    #[test]
    fn test_scope_fallback_to_element() {
        let selectors = SelectorSet::default();
        let el = ElementNode::new("div", "classic-answer").child(square(0, "Male"));
        let mut anomalies = Vec::new();
        let record = Extractor::new(&selectors).extract_record(0, &el, &mut anomalies);
        assert_eq!(record.slots()[0], "Male");
        assert_eq!(anomalies.len(), 1 + SLOT_COUNT - 1);
    }

    #[test]
    fn test_empty_container_yields_no_records() {
        let selectors = SelectorSet::default();
        let extraction = Extractor::new(&selectors).extract(&board(vec![])).unwrap();
        assert!(extraction.records.is_empty());
        assert!(extraction.anomalies.is_empty());
    }
}
