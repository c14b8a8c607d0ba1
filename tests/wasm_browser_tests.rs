//! WASM Browser Tests for loldle-export
//!
//! Exercises the live DOM binding and the download sink in a real browser.
//! Run with: `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use loldle_export::dom::web::{snapshot_document, snapshot_element};
use loldle_export::sink::BrowserDownloadSink;
use loldle_export::{build_document, Delivery, Document, SelectorSet, Sink};
use wasm_bindgen_test::*;
use web_sys::{Document as WebDocument, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> WebDocument {
    web_sys::window()
        .expect("no global window exists")
        .document()
        .expect("should have a document")
}

fn create_element(tag: &str, class: &str) -> Element {
    let el = document().create_element(tag).expect("should create element");
    el.set_attribute("class", class).expect("should set class");
    el
}

/// Build `<div class="classic-answer">` with a name card and the given slots
fn answer(name: &str, slots: &[(usize, &str)]) -> Element {
    let answer = create_element("div", "classic-answer");
    let inner = create_element("div", "square-container");

    let card = create_element("div", "square");
    let label = create_element("span", "champion-icon-name");
    label.set_text_content(Some(name));
    card.append_child(&label).unwrap();
    inner.append_child(&card).unwrap();

    for (i, text) in slots {
        let square = create_element("div", &format!("square {i} square-good"));
        square.set_text_content(Some(*text));
        inner.append_child(&square).unwrap();
    }
    answer.append_child(&inner).unwrap();
    answer
}

/// Append a board to the body and return a cleanup closure
fn mount_board(answers: &[Element]) -> impl FnOnce() {
    let board = create_element("div", "answers-container classic-answers-container");
    for a in answers {
        board.append_child(a).unwrap();
    }
    let body = document().body().expect("should have body");
    body.append_child(&board).expect("should append");

    move || {
        if let Some(parent) = board.parent_element() {
            parent.remove_child(&board).ok();
        }
    }
}

#[wasm_bindgen_test]
fn test_snapshot_element_copies_classes_and_text() {
    let el = answer("Ahri", &[(0, "Female")]);
    let snapshot = snapshot_element(&el);

    assert_eq!(snapshot.tag(), "div");
    assert_eq!(snapshot.class_attr(), "classic-answer");
    let square = snapshot
        .descendants()
        .find(|e| e.class_attr() == "square 0 square-good")
        .expect("slot copied");
    assert_eq!(square.text_content(), "Female");
}

#[wasm_bindgen_test]
fn test_live_board_extraction() {
    let cleanup = mount_board(&[
        answer("Ahri", &[(0, "Female"), (1, "Mid")]),
        answer("Garen", &[(0, "Male")]),
    ]);

    let root = snapshot_document().expect("document snapshot");
    let (doc, anomalies) = build_document(&root, &SelectorSet::default()).unwrap();
    cleanup();

    let rows: Vec<&str> = doc.as_str().lines().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], r#"Ahri,"Female","Mid","","","","","""#);
    assert_eq!(rows[1], r#"Garen,"Male","","","","","","""#);
    assert_eq!(anomalies.len(), 5 + 6);
}

#[wasm_bindgen_test]
fn test_missing_board_in_live_page() {
    let root = snapshot_document().expect("document snapshot");
    assert!(build_document(&root, &SelectorSet::default()).is_err());
}

#[wasm_bindgen_test]
fn test_download_sink_leaves_no_anchor() {
    let anchors = || document().query_selector_all("a").unwrap().length();
    let before = anchors();
    let doc = Document::from_records(&[]);
    let delivery = BrowserDownloadSink::new()
        .deliver(&doc, "loldle_data.csv")
        .unwrap();

    assert!(matches!(delivery, Delivery::Delivered { .. }));
    assert_eq!(anchors(), before);
}
