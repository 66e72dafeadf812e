//! HTML rendering
//!
//! Produces the whole page as a string from a `VisibilityMap`. The same
//! markup is used for the native pre-render and for the wasm mount.

use crate::config::RevealConfig;
use crate::consts::ANIMATE_ATTR;
use crate::content::{
    self, AnimatedSection, ContactChannel, GalleryItem, NavAction, ABOUT, CONTACT, HERO_IMAGE,
    HERO_TEXT,
};
use crate::reveal::SectionStyle;
use crate::visibility::VisibilityMap;

/// Render the full page
pub fn render_page(visibility: &VisibilityMap, config: &RevealConfig) -> String {
    let ctx = RenderCtx { visibility, config };
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<div class=\"page\">");
    html.push_str(&ctx.hero());
    html.push_str(&ctx.about());
    html.push_str(&ctx.gallery());
    html.push_str(&ctx.contact());
    html.push_str(&footer());
    html.push_str("</div>");
    html
}

/// Opening tag attributes for an animated section
pub fn animated_attrs(section: &AnimatedSection, style: &SectionStyle, classes: &str) -> String {
    format!(
        "id=\"{}\" {}=\"\" data-reveal=\"{}\" class=\"{} {}\" style=\"{}\"",
        section.id,
        ANIMATE_ATTR,
        section.effect.as_str(),
        classes,
        style.state_class(),
        escape(&style.to_css()),
    )
}

struct RenderCtx<'a> {
    visibility: &'a VisibilityMap,
    config: &'a RevealConfig,
}

impl RenderCtx<'_> {
    fn open(&self, tag: &str, section: &AnimatedSection, classes: &str) -> String {
        let style = SectionStyle::compute(
            section.effect,
            self.visibility.is_visible(section.id),
            section.delay_ms,
            self.config,
        );
        format!("<{} {}>", tag, animated_attrs(section, &style, classes))
    }

    fn hero(&self) -> String {
        let buttons: String = NavAction::ALL
            .iter()
            .map(|action| {
                let variant = match action {
                    NavAction::Contact => "btn btn-solid",
                    NavAction::Portfolio => "btn btn-outline",
                };
                format!(
                    "<button type=\"button\" id=\"{}\" class=\"{}\" data-target=\"{}\">{}</button>",
                    action.button_id(),
                    variant,
                    action.anchor(),
                    escape(action.label()),
                )
            })
            .collect();

        format!(
            "<section class=\"hero\">\
             <div class=\"hero-backdrop\"></div>\
             <div class=\"container hero-grid\">\
             {open_text}\
             <h1>{title}<br><span class=\"accent\">{accent}</span></h1>\
             <p class=\"lead\">{tagline}</p>\
             <div class=\"actions\">{buttons}</div>\
             </div>\
             {open_image}\
             <div class=\"frame portrait\">\
             <img src=\"{img}\" alt=\"{alt}\">\
             <div class=\"vignette\"></div>\
             </div>\
             <div class=\"corner-line\"></div>\
             </div>\
             </div>\
             </section>",
            open_text = self.open("div", &HERO_TEXT, "hero-text"),
            title = escape(content::hero::TITLE),
            accent = escape(content::hero::TITLE_ACCENT),
            tagline = escape(content::hero::TAGLINE),
            buttons = buttons,
            open_image = self.open("div", &HERO_IMAGE, "hero-image"),
            img = content::hero::IMAGE,
            alt = escape(content::hero::IMAGE_ALT),
        )
    }

    fn about(&self) -> String {
        let paragraphs: String = content::about::PARAGRAPHS
            .iter()
            .map(|p| format!("<p>{}</p>", escape(p)))
            .collect();
        format!(
            "<section class=\"about\"><div class=\"container\">\
             {open}<h2>{title}</h2><div class=\"rule\"></div>{paragraphs}</div>\
             </div></section>",
            open = self.open("div", &ABOUT, "narrow centered"),
            title = escape(content::about::TITLE),
            paragraphs = paragraphs,
        )
    }

    fn gallery_item(&self, item: &GalleryItem) -> String {
        let subtitle = item
            .subtitle
            .map(|s| format!("<p>{}</p>", escape(s)))
            .unwrap_or_default();
        format!(
            "{open}\
             <div class=\"frame\" style=\"aspect-ratio: {aspect};\">\
             <img src=\"{img}\" alt=\"{alt}\" loading=\"lazy\">\
             <div class=\"vignette\"></div>\
             <div class=\"caption\"><h3>{title}</h3>{subtitle}</div>\
             </div>\
             </div>",
            open = self.open("div", &item.section, &format!("gallery-item {}", item.span.class())),
            aspect = item.aspect,
            img = item.image,
            alt = escape(item.alt),
            title = escape(item.title),
            subtitle = subtitle,
        )
    }

    fn gallery(&self) -> String {
        let items: String = content::GALLERY
            .iter()
            .map(|item| self.gallery_item(item))
            .collect();
        format!(
            "<section id=\"{anchor}\" class=\"portfolio\"><div class=\"container\">\
             <div class=\"section-head\"><h2>{title}</h2><div class=\"rule\"></div></div>\
             <div class=\"gallery-grid\">{items}</div>\
             </div></section>",
            anchor = content::PORTFOLIO_ANCHOR,
            title = escape(content::PORTFOLIO_TITLE),
            items = items,
        )
    }

    fn contact(&self) -> String {
        let links: String = content::CONTACTS.iter().map(contact_link).collect();
        format!(
            "<section id=\"{anchor}\" class=\"contact\"><div class=\"container\">\
             {open}<h2>{title}</h2><div class=\"rule\"></div>\
             <p class=\"lead\">{intro}</p>\
             <div class=\"contact-grid\">{links}</div>\
             </div></div></section>",
            anchor = content::CONTACT_ANCHOR,
            open = self.open("div", &CONTACT, "narrow centered"),
            title = escape(content::CONTACT_TITLE),
            intro = escape(content::CONTACT_INTRO),
            links = links,
        )
    }
}

fn contact_link(channel: &ContactChannel) -> String {
    let target = if channel.kind.opens_new_context() {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    format!(
        "<a href=\"{href}\" class=\"contact-card\" data-kind=\"{kind}\"{target}>\
         <span class=\"icon icon-{kind}\"></span>\
         <span class=\"label\">{label}</span>\
         <span class=\"detail\">{detail}</span>\
         </a>",
        href = escape(channel.href),
        kind = channel.kind.as_str(),
        target = target,
        label = escape(channel.label),
        detail = escape(channel.detail),
    )
}

fn footer() -> String {
    let links: String = content::footer::LINKS
        .iter()
        .map(|l| format!("<a href=\"#\">{}</a>", escape(l)))
        .collect();
    format!(
        "<footer class=\"site-footer\"><div class=\"container footer-row\">\
         <p>{}</p><nav>{}</nav></div></footer>",
        escape(content::footer::COPYRIGHT),
        links,
    )
}

/// Escape text for HTML content and double-quoted attributes
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden_page() -> String {
        render_page(&VisibilityMap::new(), &RevealConfig::default())
    }

    /// Opening tag of the element with `id`
    fn tag_of<'a>(html: &'a str, id: &str) -> &'a str {
        let needle = format!("id=\"{}\"", id);
        let pos = html.find(&needle).unwrap();
        let start = html[..pos].rfind('<').unwrap();
        let end = pos + html[pos..].find('>').unwrap();
        &html[start..=end]
    }

    #[test]
    fn test_every_section_marked() {
        let html = hidden_page();
        for section in content::animated_sections() {
            let tag = tag_of(&html, section.id);
            assert!(tag.contains("data-animate"), "{} not marked", section.id);
        }
        assert_eq!(html.matches("data-animate").count(), 8);
    }

    #[test]
    fn test_hero_text_hidden_then_settled() {
        let html = hidden_page();
        let tag = tag_of(&html, "hero-text");
        assert!(tag.contains("opacity: 0;"));
        assert!(tag.contains("translateY(2rem)"));
        assert!(tag.contains("is-hidden"));

        let mut map = VisibilityMap::new();
        map.mark_visible("hero-text");
        let html = render_page(&map, &RevealConfig::default());
        let tag = tag_of(&html, "hero-text");
        assert!(tag.contains("opacity: 1;"));
        assert!(tag.contains("translateY(0rem) scale(1)"));
        assert!(tag.contains("is-revealed"));
        // Others stay hidden
        assert!(tag_of(&html, "about").contains("is-hidden"));
    }

    #[test]
    fn test_contact_links() {
        let html = hidden_page();
        assert!(html.contains("href=\"mailto:contato@modelo.com\""));
        assert!(html.contains("href=\"tel:+5511999999999\""));
        assert!(html.contains(
            "href=\"https://instagram.com/modelo\" class=\"contact-card\" data-kind=\"social\" target=\"_blank\" rel=\"noopener noreferrer\""
        ));
        assert_eq!(html.matches("target=\"_blank\"").count(), 1);
    }

    #[test]
    fn test_anchors_and_buttons() {
        let html = hidden_page();
        assert!(html.contains("<section id=\"portfolio\""));
        assert!(html.contains("<section id=\"contato\""));
        assert!(html.contains(
            "id=\"nav-portfolio\" class=\"btn btn-outline\" data-target=\"portfolio\">Ver Portfólio<"
        ));
        assert!(html.contains(
            "id=\"nav-contato\" class=\"btn btn-solid\" data-target=\"contato\">Entre em Contato<"
        ));
    }

    #[test]
    fn test_all_images_referenced() {
        let html = hidden_page();
        for n in 1..=5 {
            assert!(html.contains(&format!("src=\"/images/model{}.jpg\"", n)));
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b> & \"c\""), "a&lt;b&gt; &amp; &quot;c&quot;");
        assert_eq!(escape("Portfólio"), "Portfólio");
    }
}
