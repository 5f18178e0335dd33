//! Section dispatcher: resolves each CMS record type to its block renderer.
//!
//! The mapping is closed. [`ContentBlock`] enumerates every record type the
//! schema defines, so the match below is exhaustive and adding a record type
//! without deciding its disposition is a compile error. Blocks without an
//! enabled renderer are dropped from the output, never reported as errors.

use crate::application::render::types::{BlockOutcome, RenderError, RenderedBlock};
use crate::domain::blocks::ContentBlock;
use crate::presentation::views::{
    FaqQuestionsSectionTemplate, FooterTemplate, HeroSectionTemplate, MenuTemplate,
    render_fragment,
};

/// Render an ordered block list into an ordered list of HTML fragments, one
/// per renderable block, input order preserved. Input blocks are not
/// mutated; re-dispatching the same list yields identical output.
pub fn dispatch_blocks(blocks: &[ContentBlock]) -> Result<Vec<RenderedBlock>, RenderError> {
    let mut rendered = Vec::with_capacity(blocks.len());
    for block in blocks {
        match dispatch_block(block)? {
            BlockOutcome::Rendered(output) => rendered.push(output),
            BlockOutcome::Disabled { record_type } => {
                tracing::debug!(record_type = %record_type, "block renderer disabled, skipping");
            }
            BlockOutcome::Unsupported { record_type } => {
                tracing::debug!(record_type = %record_type, "no renderer registered, skipping");
            }
        }
    }
    Ok(rendered)
}

/// Resolve one block against the dispatch table.
pub fn dispatch_block(block: &ContentBlock) -> Result<BlockOutcome, RenderError> {
    let outcome = match block {
        // The SEO block keeps its renderer but is switched off: pages set
        // their own head metadata through the layout for now.
        ContentBlock::SeoBlock(_) => BlockOutcome::Disabled {
            record_type: block.record_type().to_string(),
        },
        ContentBlock::Menu(record) => rendered(
            block,
            render_fragment(MenuTemplate::from_record(record))?,
        ),
        ContentBlock::HeroSection(record) => rendered(
            block,
            render_fragment(HeroSectionTemplate::from_record(record))?,
        ),
        ContentBlock::FaqQuestionsSection(record) => rendered(
            block,
            render_fragment(FaqQuestionsSectionTemplate::from_record(record))?,
        ),
        ContentBlock::Footer(record) => rendered(
            block,
            render_fragment(FooterTemplate::from_record(record))?,
        ),
        ContentBlock::Unknown { record_type } => BlockOutcome::Unsupported {
            record_type: record_type.clone(),
        },
    };
    Ok(outcome)
}

fn rendered(block: &ContentBlock, html: String) -> BlockOutcome {
    BlockOutcome::Rendered(RenderedBlock {
        record_type: block.record_type().to_string(),
        html,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blocks::{
        FaqQuestionCard, FaqQuestionsSectionRecord, HeroSectionRecord, MenuLink, MenuRecord,
        SeoBlockRecord,
    };

    fn menu_block() -> ContentBlock {
        ContentBlock::Menu(MenuRecord {
            links: vec![MenuLink {
                label: "FAQ".to_string(),
                url: "/faq".to_string(),
            }],
        })
    }

    fn hero_block() -> ContentBlock {
        ContentBlock::HeroSection(HeroSectionRecord {
            title: "Learn anything".to_string(),
            description: String::new(),
            cta_label: None,
            cta_url: None,
        })
    }

    #[test]
    fn dispatch_renders_each_enabled_record_through_its_renderer() {
        let outcome = dispatch_block(&menu_block()).expect("dispatch");
        let BlockOutcome::Rendered(output) = outcome else {
            panic!("expected rendered menu");
        };
        assert_eq!(output.record_type, "CommonMenuRecord");
        assert!(output.html.contains("<nav"));
        assert!(output.html.contains("href=\"/faq\""));

        let outcome = dispatch_block(&hero_block()).expect("dispatch");
        let BlockOutcome::Rendered(output) = outcome else {
            panic!("expected rendered hero");
        };
        assert_eq!(output.record_type, "PagehomeHerosectionRecord");
        assert!(output.html.contains("Learn anything"));
    }

    #[test]
    fn dispatch_drops_unknown_blocks_and_preserves_order() {
        let blocks = vec![
            menu_block(),
            hero_block(),
            ContentBlock::Unknown {
                record_type: "UnknownRecord".to_string(),
            },
        ];

        let rendered = dispatch_blocks(&blocks).expect("dispatch");
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].record_type, "CommonMenuRecord");
        assert_eq!(rendered[1].record_type, "PagehomeHerosectionRecord");
    }

    #[test]
    fn disabled_and_unsupported_outcomes_stay_distinct() {
        let seo = ContentBlock::SeoBlock(SeoBlockRecord {
            title: "FAQ".to_string(),
            description: String::new(),
        });
        assert_eq!(
            dispatch_block(&seo).expect("dispatch"),
            BlockOutcome::Disabled {
                record_type: "CommonSeoBlockRecord".to_string()
            }
        );

        let unknown = ContentBlock::Unknown {
            record_type: "FutureRecord".to_string(),
        };
        assert_eq!(
            dispatch_block(&unknown).expect("dispatch"),
            BlockOutcome::Unsupported {
                record_type: "FutureRecord".to_string()
            }
        );
    }

    #[test]
    fn faq_questions_section_links_each_question() {
        let block = ContentBlock::FaqQuestionsSection(FaqQuestionsSectionRecord {
            title: "Common questions".to_string(),
            questions: vec![
                FaqQuestionCard {
                    id: "q1".to_string(),
                    title: "How do I start?".to_string(),
                },
                FaqQuestionCard {
                    id: "q2".to_string(),
                    title: "Is it free?".to_string(),
                },
            ],
        });

        let BlockOutcome::Rendered(output) = dispatch_block(&block).expect("dispatch") else {
            panic!("expected rendered section");
        };
        assert!(output.html.contains("href=\"/faq/q1\""));
        assert!(output.html.contains("href=\"/faq/q2\""));
        let q1 = output.html.find("How do I start?").expect("first question");
        let q2 = output.html.find("Is it free?").expect("second question");
        assert!(q1 < q2);
    }

    #[test]
    fn dispatching_an_empty_list_yields_no_output() {
        assert!(dispatch_blocks(&[]).expect("dispatch").is_empty());
    }
}
