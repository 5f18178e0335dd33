use askama::{Error as AskamaError, Template};

use crate::application::render::types::RenderError;
use crate::domain::blocks::{
    FaqQuestionsSectionRecord, FooterRecord, HeroSectionRecord, MenuRecord, SeoBlockRecord,
};

/// Render a template into an HTML fragment, mapping askama failures into the
/// pipeline error type.
pub fn render_fragment<T: Template>(template: T) -> Result<String, RenderError> {
    template.render().map_err(|err: AskamaError| RenderError::Template {
        message: err.to_string(),
    })
}

#[derive(Clone)]
pub struct MenuLinkView {
    pub label: String,
    pub href: String,
}

#[derive(Clone)]
pub struct MenuView {
    pub links: Vec<MenuLinkView>,
}

#[derive(Template)]
#[template(path = "blocks/menu.html")]
pub struct MenuTemplate {
    pub view: MenuView,
}

impl MenuTemplate {
    pub fn from_record(record: &MenuRecord) -> Self {
        Self {
            view: MenuView {
                links: record
                    .links
                    .iter()
                    .map(|link| MenuLinkView {
                        label: link.label.clone(),
                        href: link.url.clone(),
                    })
                    .collect(),
            },
        }
    }
}

#[derive(Clone)]
pub struct FooterView {
    pub copy: String,
    pub links: Vec<MenuLinkView>,
}

#[derive(Template)]
#[template(path = "blocks/footer.html")]
pub struct FooterTemplate {
    pub view: FooterView,
}

impl FooterTemplate {
    pub fn from_record(record: &FooterRecord) -> Self {
        Self {
            view: FooterView {
                copy: record.description.clone(),
                links: record
                    .links
                    .iter()
                    .map(|link| MenuLinkView {
                        label: link.label.clone(),
                        href: link.url.clone(),
                    })
                    .collect(),
            },
        }
    }
}

#[derive(Clone)]
pub struct CtaView {
    pub label: String,
    pub href: String,
}

#[derive(Clone)]
pub struct HeroSectionView {
    pub title: String,
    pub description: String,
    pub cta: Option<CtaView>,
}

#[derive(Template)]
#[template(path = "blocks/hero_section.html")]
pub struct HeroSectionTemplate {
    pub view: HeroSectionView,
}

impl HeroSectionTemplate {
    pub fn from_record(record: &HeroSectionRecord) -> Self {
        // A call to action needs both halves; a label without a destination
        // renders as nothing rather than a dead link.
        let cta = match (&record.cta_label, &record.cta_url) {
            (Some(label), Some(url)) => Some(CtaView {
                label: label.clone(),
                href: url.clone(),
            }),
            _ => None,
        };

        Self {
            view: HeroSectionView {
                title: record.title.clone(),
                description: record.description.clone(),
                cta,
            },
        }
    }
}

#[derive(Clone)]
pub struct FaqQuestionCardView {
    pub title: String,
    pub href: String,
}

#[derive(Clone)]
pub struct FaqQuestionsSectionView {
    pub title: String,
    pub questions: Vec<FaqQuestionCardView>,
}

#[derive(Template)]
#[template(path = "blocks/faq_questions_section.html")]
pub struct FaqQuestionsSectionTemplate {
    pub view: FaqQuestionsSectionView,
}

impl FaqQuestionsSectionTemplate {
    pub fn from_record(record: &FaqQuestionsSectionRecord) -> Self {
        Self {
            view: FaqQuestionsSectionView {
                title: record.title.clone(),
                questions: record
                    .questions
                    .iter()
                    .map(|question| FaqQuestionCardView {
                        title: question.title.clone(),
                        href: format!("/faq/{}", question.id),
                    })
                    .collect(),
            },
        }
    }
}

#[derive(Clone)]
pub struct SeoBlockView {
    pub title: String,
    pub description: String,
}

/// Head metadata fragment. The renderer is kept wired up even while the
/// dispatch table has its entry switched off.
#[derive(Template)]
#[template(path = "blocks/seo_block.html")]
pub struct SeoBlockTemplate {
    pub view: SeoBlockView,
}

impl SeoBlockTemplate {
    pub fn from_record(record: &SeoBlockRecord) -> Self {
        Self {
            view: SeoBlockView {
                title: record.title.clone(),
                description: record.description.clone(),
            },
        }
    }
}

#[derive(Clone)]
pub struct PageMetaView {
    pub title: String,
    pub description: String,
}

/// Menu and footer fragments wrapped around page content. Pages that source
/// chrome from the CMS block list leave these out of their layout instead.
#[derive(Clone)]
pub struct LayoutChrome {
    pub menu_html: String,
    pub footer_html: String,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub meta: PageMetaView,
    pub sections: Vec<String>,
}

#[derive(Clone)]
pub struct FaqQuestionContext {
    pub title: String,
    pub content_html: String,
}

#[derive(Template)]
#[template(path = "faq_question.html")]
pub struct FaqQuestionTemplate {
    pub meta: PageMetaView,
    pub chrome: LayoutChrome,
    pub content: FaqQuestionContext,
}
