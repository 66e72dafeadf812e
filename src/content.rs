//! Static page content
//!
//! Every string on the page lives here. Nothing is mutated at runtime.

use crate::reveal::RevealEffect;

/// A block of the page that reveals on scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatedSection {
    pub id: &'static str,
    pub effect: RevealEffect,
    /// Stagger relative to siblings
    pub delay_ms: u32,
}

impl AnimatedSection {
    const fn new(id: &'static str, effect: RevealEffect, delay_ms: u32) -> Self {
        Self {
            id,
            effect,
            delay_ms,
        }
    }
}

pub const HERO_TEXT: AnimatedSection = AnimatedSection::new("hero-text", RevealEffect::FadeUp, 0);
pub const HERO_IMAGE: AnimatedSection =
    AnimatedSection::new("hero-image", RevealEffect::ScaleIn, 200);
pub const ABOUT: AnimatedSection = AnimatedSection::new("about", RevealEffect::FadeUp, 0);
pub const CONTACT: AnimatedSection = AnimatedSection::new("contact", RevealEffect::FadeUp, 0);

/// Every animated section, in page order
pub fn animated_sections() -> impl Iterator<Item = AnimatedSection> {
    [HERO_TEXT, HERO_IMAGE, ABOUT]
        .into_iter()
        .chain(GALLERY.into_iter().map(|item| item.section))
        .chain([CONTACT])
}

/// Look up an animated section by element id
pub fn section_by_id(id: &str) -> Option<AnimatedSection> {
    animated_sections().find(|s| s.id == id)
}

/// Hero copy
pub mod hero {
    pub const TITLE: &str = "Portfólio";
    pub const TITLE_ACCENT: &str = "Profissional";
    pub const TAGLINE: &str = "Modelo iniciante com experiência em editoriais de moda, campanhas comerciais e trabalhos artísticos. Disponível para projetos criativos e colaborações.";
    pub const IMAGE: &str = "/images/model1.jpg";
    pub const IMAGE_ALT: &str = "Modelo profissional";
}

/// About copy
pub mod about {
    pub const TITLE: &str = "Sobre Mim";
    pub const PARAGRAPHS: [&str; 2] = [
        "Sou um modelo profissional em início de carreira, apaixonado por moda e expressão artística. Com experiência em trabalhos editoriais e comerciais, busco constantemente expandir meu portfólio e colaborar com fotógrafos, designers e marcas que valorizam criatividade e autenticidade.",
        "Meu objetivo é trazer versatilidade e profissionalismo a cada projeto, adaptando-me a diferentes estilos e conceitos visuais. Estou disponível para ensaios fotográficos, desfiles, campanhas publicitárias e projetos editoriais.",
    ];
}

/// Element id of the gallery anchor
pub const PORTFOLIO_ANCHOR: &str = "portfolio";
pub const PORTFOLIO_TITLE: &str = "Portfólio";

/// Grid footprint of a gallery item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GallerySpan {
    /// One cell
    Single,
    /// Two columns wide
    Wide,
    /// Two columns wide and two rows tall
    Feature,
}

impl GallerySpan {
    pub fn class(&self) -> &'static str {
        match self {
            GallerySpan::Single => "span-single",
            GallerySpan::Wide => "span-wide",
            GallerySpan::Feature => "span-feature",
        }
    }
}

/// One photo in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub section: AnimatedSection,
    pub image: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    /// CSS `aspect-ratio` value
    pub aspect: &'static str,
    pub span: GallerySpan,
}

pub const GALLERY: [GalleryItem; 4] = [
    GalleryItem {
        section: AnimatedSection::new("gallery-1", RevealEffect::ScaleIn, 0),
        image: "/images/model2.jpg",
        alt: "Editorial de moda",
        title: "Editorial de Moda",
        subtitle: Some("Conceito minimalista"),
        aspect: "4 / 5",
        span: GallerySpan::Feature,
    },
    GalleryItem {
        section: AnimatedSection::new("gallery-2", RevealEffect::ScaleIn, 100),
        image: "/images/model3.jpg",
        alt: "Retrato artístico",
        title: "Retrato Artístico",
        subtitle: None,
        aspect: "1 / 1",
        span: GallerySpan::Single,
    },
    GalleryItem {
        section: AnimatedSection::new("gallery-3", RevealEffect::ScaleIn, 200),
        image: "/images/model4.jpg",
        alt: "Campanha comercial",
        title: "Campanha Comercial",
        subtitle: None,
        aspect: "3 / 4",
        span: GallerySpan::Single,
    },
    GalleryItem {
        section: AnimatedSection::new("gallery-4", RevealEffect::ScaleIn, 300),
        image: "/images/model5.jpg",
        alt: "Trabalho editorial",
        title: "Trabalho Editorial",
        subtitle: Some("Conceito contemporâneo"),
        aspect: "16 / 9",
        span: GallerySpan::Wide,
    },
];

/// Element id of the contact anchor
pub const CONTACT_ANCHOR: &str = "contato";
pub const CONTACT_TITLE: &str = "Entre em Contato";
pub const CONTACT_INTRO: &str = "Interessado em colaborar? Estou disponível para projetos e sempre aberto a novas oportunidades criativas.";

/// Kind of contact link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Social,
}

impl ContactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Email => "email",
            ContactKind::Phone => "phone",
            ContactKind::Social => "social",
        }
    }

    /// Social profiles open in a new browsing context
    pub fn opens_new_context(&self) -> bool {
        matches!(self, ContactKind::Social)
    }
}

/// A way to reach the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: &'static str,
    /// Human-readable form of the target
    pub detail: &'static str,
}

pub const CONTACTS: [ContactChannel; 3] = [
    ContactChannel {
        kind: ContactKind::Email,
        label: "Email",
        href: "mailto:contato@modelo.com",
        detail: "contato@modelo.com",
    },
    ContactChannel {
        kind: ContactKind::Phone,
        label: "Telefone",
        href: "tel:+5511999999999",
        detail: "+55 11 99999-9999",
    },
    ContactChannel {
        kind: ContactKind::Social,
        label: "Instagram",
        href: "https://instagram.com/modelo",
        detail: "@modelo",
    },
];

/// In-page navigation triggered from the hero buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Contact,
    Portfolio,
}

impl NavAction {
    pub const ALL: [NavAction; 2] = [NavAction::Contact, NavAction::Portfolio];

    /// Element id scrolled into view
    pub fn anchor(&self) -> &'static str {
        match self {
            NavAction::Contact => CONTACT_ANCHOR,
            NavAction::Portfolio => PORTFOLIO_ANCHOR,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavAction::Contact => "Entre em Contato",
            NavAction::Portfolio => "Ver Portfólio",
        }
    }

    /// Element id of the button that triggers this action
    pub fn button_id(&self) -> &'static str {
        match self {
            NavAction::Contact => "nav-contato",
            NavAction::Portfolio => "nav-portfolio",
        }
    }

    pub fn from_button_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.button_id() == id)
    }
}

/// Footer copy
pub mod footer {
    pub const COPYRIGHT: &str = "© 2026 Portfólio Modelo. Todos os direitos reservados.";
    pub const LINKS: [&str; 2] = ["Privacidade", "Termos"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_unique_and_ordered() {
        let ids: Vec<_> = animated_sections().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "hero-text",
                "hero-image",
                "about",
                "gallery-1",
                "gallery-2",
                "gallery-3",
                "gallery-4",
                "contact",
            ]
        );
    }

    #[test]
    fn test_gallery_stagger() {
        let delays: Vec<_> = GALLERY.iter().map(|g| g.section.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert!(GALLERY.iter().all(|g| g.section.effect == RevealEffect::ScaleIn));
    }

    #[test]
    fn test_contact_targets() {
        let hrefs: Vec<_> = CONTACTS.iter().map(|c| c.href).collect();
        assert_eq!(
            hrefs,
            vec![
                "mailto:contato@modelo.com",
                "tel:+5511999999999",
                "https://instagram.com/modelo",
            ]
        );
        assert!(CONTACTS[2].kind.opens_new_context());
        assert!(!CONTACTS[0].kind.opens_new_context());
    }

    #[test]
    fn test_nav_anchors() {
        assert_eq!(NavAction::Portfolio.label(), "Ver Portfólio");
        assert_eq!(NavAction::Portfolio.anchor(), "portfolio");
        assert_eq!(NavAction::Contact.label(), "Entre em Contato");
        assert_eq!(NavAction::Contact.anchor(), "contato");
        assert_eq!(NavAction::from_button_id("nav-contato"), Some(NavAction::Contact));
        assert_eq!(NavAction::from_button_id("nope"), None);
    }

    #[test]
    fn test_section_lookup() {
        assert_eq!(section_by_id("hero-image"), Some(HERO_IMAGE));
        assert_eq!(section_by_id("gallery-3").map(|s| s.delay_ms), Some(200));
        assert!(section_by_id("portfolio").is_none());
    }
}
