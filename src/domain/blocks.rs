//! Content blocks: the discriminated units of page content the CMS returns.
//!
//! The record-type set is closed. The CMS schema establishes it, and the
//! variants below mirror it one-to-one; anything else folds into
//! [`ContentBlock::Unknown`] so a single stray block can never fail a page.

use serde::Deserialize;

/// JSON field carrying the record-type discriminator.
pub const TYPENAME_FIELD: &str = "__typename";

pub const SEO_BLOCK_RECORD: &str = "CommonSeoBlockRecord";
pub const MENU_RECORD: &str = "CommonMenuRecord";
pub const HERO_SECTION_RECORD: &str = "PagehomeHerosectionRecord";
pub const FAQ_QUESTIONS_SECTION_RECORD: &str = "PagefaqDisplayquestionSectionRecord";
pub const FOOTER_RECORD: &str = "CommonFooterRecord";

/// One discriminated unit of page content, immutable for the duration of a
/// render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    SeoBlock(SeoBlockRecord),
    Menu(MenuRecord),
    HeroSection(HeroSectionRecord),
    FaqQuestionsSection(FaqQuestionsSectionRecord),
    Footer(FooterRecord),
    /// Record types outside the schema, kept so callers can report what was
    /// skipped.
    Unknown { record_type: String },
}

impl ContentBlock {
    /// The CMS model name carried in `__typename`.
    pub fn record_type(&self) -> &str {
        match self {
            ContentBlock::SeoBlock(_) => SEO_BLOCK_RECORD,
            ContentBlock::Menu(_) => MENU_RECORD,
            ContentBlock::HeroSection(_) => HERO_SECTION_RECORD,
            ContentBlock::FaqQuestionsSection(_) => FAQ_QUESTIONS_SECTION_RECORD,
            ContentBlock::Footer(_) => FOOTER_RECORD,
            ContentBlock::Unknown { record_type } => record_type.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoBlockRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    #[serde(default)]
    pub links: Vec<MenuLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSectionRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta_label: Option<String>,
    #[serde(default)]
    pub cta_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqQuestionCard {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqQuestionsSectionRecord {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<FaqQuestionCard>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterRecord {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub links: Vec<MenuLink>,
}

/// Decode an ordered block list, preserving input order.
pub fn parse_blocks(values: Vec<serde_json::Value>) -> Vec<ContentBlock> {
    values.into_iter().map(parse_block).collect()
}

/// Decode one CMS block. A missing or unrecognised `__typename` produces
/// [`ContentBlock::Unknown`], as does a known type whose payload fails to
/// decode; the dispatcher treats both as skippable, so neither is an error
/// here.
pub fn parse_block(value: serde_json::Value) -> ContentBlock {
    let record_type = value
        .get(TYPENAME_FIELD)
        .and_then(|field| field.as_str())
        .unwrap_or_default()
        .to_string();

    let decoded = match record_type.as_str() {
        SEO_BLOCK_RECORD => serde_json::from_value(value).map(ContentBlock::SeoBlock),
        MENU_RECORD => serde_json::from_value(value).map(ContentBlock::Menu),
        HERO_SECTION_RECORD => serde_json::from_value(value).map(ContentBlock::HeroSection),
        FAQ_QUESTIONS_SECTION_RECORD => {
            serde_json::from_value(value).map(ContentBlock::FaqQuestionsSection)
        }
        FOOTER_RECORD => serde_json::from_value(value).map(ContentBlock::Footer),
        _ => return ContentBlock::Unknown { record_type },
    };

    match decoded {
        Ok(block) => block,
        Err(err) => {
            tracing::warn!(
                record_type = %record_type,
                error = %err,
                "content block payload failed to decode"
            );
            ContentBlock::Unknown { record_type }
        }
    }
}
