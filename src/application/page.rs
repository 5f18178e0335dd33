//! Page assembly services: fetch CMS content and compose full pages.
//!
//! The one await point per page is the CMS fetch; everything after it is the
//! pure rendering pipeline. Each call owns its payload, so concurrent page
//! builds never share state.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::application::chrome::default_chrome;
use crate::application::render::{RenderError, dispatch_blocks, heading_rule, render_document};
use crate::domain::blocks::parse_blocks;
use crate::domain::structured_text::StructuredTextField;
use crate::infra::cms::{CmsError, ContentSource};
use crate::presentation::views::{
    FaqQuestionContext, FaqQuestionTemplate, HomeTemplate, PageMetaView, render_fragment,
};

const FAQ_PATHS_PAGE_SIZE: u64 = 100;

const FAQ_PATHS_QUERY: &str = r"
query FaqQuestionPaths($first: IntType, $skip: IntType) {
  allContentFaqQuestions(first: $first, skip: $skip) {
    id
    title
  }
}
";

const FAQ_QUESTION_QUERY: &str = r"
query FaqQuestion($id: ItemId) {
  contentFaqQuestion(filter: { id: { eq: $id } }) {
    title
    content {
      value
    }
  }
}
";

const HOME_QUERY: &str = r"
query HomePage {
  pageHome {
    sections
  }
}
";

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Cms(#[from] CmsError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("cms payload missing `{path}`")]
    MissingContent { path: &'static str },
    #[error("cms payload failed to decode: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One entry from the static-path enumeration: enough for the embedding
/// build to produce a page per FAQ question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqQuestionPath {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
struct FaqQuestionRecord {
    title: String,
    content: StructuredTextField,
}

#[derive(Clone)]
pub struct PageService {
    source: Arc<dyn ContentSource>,
}

impl PageService {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Enumerate FAQ question ids for the static build.
    pub async fn faq_question_paths(&self) -> Result<Vec<FaqQuestionPath>, PageError> {
        let data = self
            .source
            .execute(
                FAQ_PATHS_QUERY,
                serde_json::json!({ "first": FAQ_PATHS_PAGE_SIZE, "skip": 0 }),
            )
            .await?;

        let questions = data
            .get("allContentFaqQuestions")
            .cloned()
            .ok_or(PageError::MissingContent {
                path: "allContentFaqQuestions",
            })?;
        Ok(serde_json::from_value(questions)?)
    }

    /// Render one FAQ question page: the title as the page heading, the
    /// structured-text body through the heading override rule, wrapped in
    /// the default chrome.
    pub async fn faq_question_page(&self, id: &str) -> Result<String, PageError> {
        let data = self
            .source
            .execute(FAQ_QUESTION_QUERY, serde_json::json!({ "id": id }))
            .await?;

        let record = data
            .get("contentFaqQuestion")
            .filter(|value| !value.is_null())
            .cloned()
            .ok_or(PageError::MissingContent {
                path: "contentFaqQuestion",
            })?;
        let question: FaqQuestionRecord = serde_json::from_value(record)?;

        let rules = [heading_rule()];
        let content_html = render_document(&question.content.value.document, &rules)?;

        let template = FaqQuestionTemplate {
            meta: PageMetaView {
                title: format!("FAQ - {}", question.title),
                description: question.title.clone(),
            },
            chrome: default_chrome()?,
            content: FaqQuestionContext {
                title: question.title,
                content_html,
            },
        };
        Ok(render_fragment(template)?)
    }

    /// Render the home page: the CMS block list through the section
    /// dispatcher, in document order.
    pub async fn home_page(&self) -> Result<String, PageError> {
        let data = self
            .source
            .execute(HOME_QUERY, serde_json::json!({}))
            .await?;

        let sections = data
            .pointer("/pageHome/sections")
            .and_then(|value| value.as_array())
            .cloned()
            .ok_or(PageError::MissingContent {
                path: "pageHome.sections",
            })?;

        let blocks = parse_blocks(sections);
        let rendered = dispatch_blocks(&blocks)?;

        let template = HomeTemplate {
            meta: PageMetaView {
                title: "Home".to_string(),
                description: "Marketing and FAQ pages rendered from the CMS.".to_string(),
            },
            sections: rendered.into_iter().map(|block| block.html).collect(),
        };
        Ok(render_fragment(template)?)
    }
}
