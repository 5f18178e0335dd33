//! End-to-end coverage: CMS payload in, rendered page out.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use vetrina::application::page::{PageError, PageService};
use vetrina::application::render::{dispatch_blocks, heading_rule, render_document};
use vetrina::domain::blocks::parse_blocks;
use vetrina::domain::structured_text::StructuredTextField;
use vetrina::infra::cms::{CmsError, ContentSource};

/// Serves a canned `data` object for every query, keyed on a marker in the
/// query text the way the real API is keyed on the root field.
struct CannedSource {
    home: Value,
    faq_paths: Value,
    faq_question: Value,
}

impl CannedSource {
    fn with_fixture() -> Arc<Self> {
        Arc::new(Self {
            home: json!({
                "pageHome": {
                    "sections": [
                        {
                            "__typename": "CommonMenuRecord",
                            "links": [{ "label": "FAQ", "url": "/faq" }],
                        },
                        {
                            "__typename": "PagehomeHerosectionRecord",
                            "title": "Learn anything",
                            "description": "Answers curated by the team.",
                        },
                        { "__typename": "UnknownRecord", "payload": 1 },
                        {
                            "__typename": "CommonFooterRecord",
                            "description": "All rights reserved.",
                        },
                    ],
                },
            }),
            faq_paths: json!({
                "allContentFaqQuestions": [
                    { "id": "q1", "title": "How do I start?" },
                    { "id": "q2", "title": "Is it free?" },
                ],
            }),
            faq_question: json!({
                "contentFaqQuestion": {
                    "title": "How do I start?",
                    "content": {
                        "value": {
                            "schema": "dast",
                            "document": {
                                "type": "root",
                                "children": [
                                    {
                                        "type": "heading",
                                        "level": 3,
                                        "children": [{ "type": "span", "value": "Hi" }],
                                    },
                                    {
                                        "type": "paragraph",
                                        "children": [
                                            { "type": "span", "value": "Sign up " },
                                            { "type": "span", "value": "today." },
                                        ],
                                    },
                                ],
                            },
                        },
                    },
                },
            }),
        })
    }
}

#[async_trait]
impl ContentSource for CannedSource {
    async fn execute(&self, query: &str, _variables: Value) -> Result<Value, CmsError> {
        if query.contains("pageHome") {
            Ok(self.home.clone())
        } else if query.contains("allContentFaqQuestions") {
            Ok(self.faq_paths.clone())
        } else if query.contains("contentFaqQuestion") {
            Ok(self.faq_question.clone())
        } else {
            Err(CmsError::MissingData)
        }
    }
}

#[test]
fn block_list_renders_known_blocks_in_order_and_drops_the_unknown_one() {
    let blocks = parse_blocks(vec![
        json!({ "__typename": "CommonMenuRecord", "links": [] }),
        json!({ "__typename": "PagehomeHerosectionRecord", "title": "Learn anything" }),
        json!({ "__typename": "UnknownRecord" }),
    ]);

    let rendered = dispatch_blocks(&blocks).expect("dispatch");
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].record_type, "CommonMenuRecord");
    assert_eq!(rendered[1].record_type, "PagehomeHerosectionRecord");
}

#[test]
fn structured_text_field_renders_through_the_heading_rule() {
    let field: StructuredTextField = serde_json::from_value(json!({
        "value": {
            "schema": "dast",
            "document": {
                "type": "root",
                "children": [{
                    "type": "heading",
                    "level": 3,
                    "children": [{ "type": "span", "value": "Hi" }],
                }],
            },
        },
    }))
    .expect("field decodes");

    let rules = [heading_rule()];
    let html = render_document(&field.value.document, &rules).expect("render");
    assert!(html.starts_with("<h3 class=\"text text-heading3\""));
    assert!(html.contains(">Hi<"));
    assert!(html.ends_with("</h3>"));
}

#[test]
fn paragraph_with_two_spans_renders_one_wrapper() {
    let field: StructuredTextField = serde_json::from_value(json!({
        "value": {
            "document": {
                "type": "root",
                "children": [{
                    "type": "paragraph",
                    "children": [
                        { "type": "span", "value": "Hello, " },
                        { "type": "span", "value": "world" },
                    ],
                }],
            },
        },
    }))
    .expect("field decodes");

    let html = render_document(&field.value.document, &[]).expect("render");
    assert_eq!(html, "<p>Hello, world</p>");
}

#[tokio::test]
async fn home_page_composes_dispatched_sections_in_document_order() {
    let service = PageService::new(CannedSource::with_fixture());

    let html = service.home_page().await.expect("home page");
    let nav = html.find("<nav").expect("menu rendered");
    let hero = html.find("Learn anything").expect("hero rendered");
    let footer = html.find("<footer").expect("footer rendered");
    assert!(nav < hero && hero < footer);
    assert!(!html.contains("UnknownRecord"));
}

#[tokio::test]
async fn faq_question_page_renders_title_body_and_chrome() {
    let service = PageService::new(CannedSource::with_fixture());

    let html = service.faq_question_page("q1").await.expect("faq page");
    assert!(html.contains("<title>FAQ - How do I start?</title>"));
    assert!(html.contains("<h1 class=\"text text-heading1\">How do I start?</h1>"));
    assert!(html.contains("<h3 class=\"text text-heading3\""));
    assert!(html.contains("<p>Sign up today.</p>"));
    assert!(html.contains("<nav"));
    assert!(html.contains("<footer"));
}

#[tokio::test]
async fn faq_question_paths_enumerates_every_question() {
    let service = PageService::new(CannedSource::with_fixture());

    let paths = service.faq_question_paths().await.expect("paths");
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].id, "q1");
    assert_eq!(paths[1].id, "q2");
}

#[tokio::test]
async fn missing_question_surfaces_as_missing_content() {
    struct EmptySource;

    #[async_trait]
    impl ContentSource for EmptySource {
        async fn execute(&self, _query: &str, _variables: Value) -> Result<Value, CmsError> {
            Ok(json!({ "contentFaqQuestion": null }))
        }
    }

    let service = PageService::new(Arc::new(EmptySource));
    let err = service
        .faq_question_page("missing")
        .await
        .expect_err("missing content");
    assert!(matches!(err, PageError::MissingContent { .. }));
}
