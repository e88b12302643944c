//! Page Renderer — composes the portfolio document from static content.
//!
//! Each list (nav entries, skills, projects) maps one record to one view
//! fragment. Highlight and menu changes after the first paint are applied by
//! small scripts instead of re-rendering the whole document.

use crate::types::content::{NavItem, PortfolioContent, Project, Skill};
use crate::types::section::UiState;

const STYLES: &str = include_str!("../../resources/ui/portfolio.css");
const BRIDGE_JS: &str = include_str!("../../resources/ui/bridge.js");

/// Prefix under which local assets are served by the custom protocol.
pub const ASSET_PREFIX: &str = "/assets";

/// Trait defining the page renderer interface.
pub trait PageRendererTrait {
    fn render_page(&self, state: &UiState) -> String;
    fn highlight_script(&self, active: &str) -> String;
    fn menu_script(&self, open: bool) -> String;
    fn content(&self) -> &PortfolioContent;
}

pub struct PageRenderer {
    content: PortfolioContent,
}

impl PageRenderer {
    pub fn new(content: PortfolioContent) -> Self {
        Self { content }
    }

    fn render_nav(&self, state: &UiState) -> String {
        let items = self.content.nav_items();
        let desktop: String = items
            .iter()
            .map(|item| nav_button(item, &state.active_section, "nav-link"))
            .collect();
        let mobile: String = items
            .iter()
            .map(|item| nav_button(item, &state.active_section, "nav-link mobile"))
            .collect();
        let menu_class = if state.menu_open { "mobile-menu open" } else { "mobile-menu" };
        let toggle_icon = if state.menu_open { "\u{2715}" } else { "\u{2630}" };
        let social = escape_html(&self.content.profile.social_url);

        format!(
            concat!(
                "<nav class=\"navbar\"><div class=\"nav-inner\">",
                "<span class=\"brand\">Portfolio</span>",
                "<div class=\"nav-links\">{desktop}",
                "<a class=\"social\" href=\"{social}\" target=\"_blank\" rel=\"noopener noreferrer\">GitHub</a>",
                "</div>",
                "<button class=\"menu-toggle\" data-menu-toggle aria-expanded=\"{expanded}\">{icon}</button>",
                "</div><div class=\"{menu_class}\" data-mobile-menu>{mobile}</div></nav>"
            ),
            desktop = desktop,
            social = social,
            expanded = state.menu_open,
            icon = toggle_icon,
            menu_class = menu_class,
            mobile = mobile,
        )
    }

    fn render_hero(&self) -> String {
        format!(
            concat!(
                "<section id=\"home\" class=\"hero\"><div class=\"container\">",
                "<h1>Hi, I'm <span class=\"gradient-text\">{name}</span></h1>",
                "<p class=\"tagline\">{tagline}</p>",
                "</div></section>"
            ),
            name = escape_html(&self.content.profile.name),
            tagline = escape_html(&self.content.profile.tagline),
        )
    }

    fn render_about(&self) -> String {
        let paragraphs: String = self
            .content
            .profile
            .about
            .iter()
            .map(|p| format!("<p>{}</p>", escape_html(p)))
            .collect();
        format!(
            concat!(
                "<section id=\"about\" class=\"about\"><div class=\"container two-col\">",
                "<div><h2>About Me</h2>{paragraphs}</div>",
                "<div class=\"photo-wrap\"><img class=\"photo\" src=\"{photo}\" alt=\"Profile\"></div>",
                "</div></section>"
            ),
            paragraphs = paragraphs,
            photo = escape_html(&asset_url(&self.content.profile.photo)),
        )
    }

    fn render_skills(&self) -> String {
        let cards: String = self.content.skills.iter().map(skill_card).collect();
        format!(
            "<section id=\"skills\" class=\"skills\"><h2>Skills</h2><div class=\"skill-grid\">{}</div></section>",
            cards
        )
    }

    fn render_projects(&self) -> String {
        let cards: String = self.content.projects.iter().map(project_card).collect();
        format!(
            "<section id=\"projects\" class=\"projects\"><h2>Projects</h2><div class=\"container project-grid\">{}</div></section>",
            cards
        )
    }

    fn render_contact(&self) -> String {
        let profile = &self.content.profile;
        let email = match &profile.email {
            Some(addr) => format!(
                "<a class=\"contact-link\" href=\"mailto:{0}\">{0}</a>",
                escape_html(addr)
            ),
            None => String::new(),
        };
        format!(
            concat!(
                "<section id=\"contact\" class=\"contact\"><div class=\"container\">",
                "<h2>Get In Touch</h2>{email}",
                "<a class=\"contact-link\" href=\"{social}\" target=\"_blank\" rel=\"noopener noreferrer\">GitHub</a>",
                "</div></section>"
            ),
            email = email,
            social = escape_html(&profile.social_url),
        )
    }
}

impl PageRendererTrait for PageRenderer {
    /// Renders the complete HTML document for the given UI state.
    fn render_page(&self, state: &UiState) -> String {
        let mut html = String::with_capacity(STYLES.len() + BRIDGE_JS.len() + 8192);
        html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\">");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
        html.push_str("<title>");
        html.push_str(&escape_html(&self.content.profile.name));
        html.push_str(" | Portfolio</title><style>");
        html.push_str(STYLES);
        html.push_str("</style></head><body>");
        html.push_str(&self.render_nav(state));
        html.push_str(&self.render_hero());
        html.push_str(&self.render_about());
        html.push_str(&self.render_skills());
        html.push_str(&self.render_projects());
        html.push_str(&self.render_contact());
        html.push_str("<script>");
        html.push_str(BRIDGE_JS);
        html.push_str("</script></body></html>");
        html
    }

    fn highlight_script(&self, active: &str) -> String {
        format!(
            "if(window.__folio_setActive)__folio_setActive({})",
            js_string(active)
        )
    }

    fn menu_script(&self, open: bool) -> String {
        format!("if(window.__folio_setMenu)__folio_setMenu({})", open)
    }

    fn content(&self) -> &PortfolioContent {
        &self.content
    }
}

fn nav_button(item: &NavItem, active: &str, base_class: &str) -> String {
    let class = if item.id == active {
        format!("{} active", base_class)
    } else {
        base_class.to_string()
    };
    format!(
        "<button class=\"{}\" data-nav=\"{}\">{}</button>",
        class,
        escape_html(&item.id),
        escape_html(&item.label)
    )
}

fn skill_card(skill: &Skill) -> String {
    format!(
        "<div class=\"skill-card skill-{}\">{}</div>",
        css_token(&skill.color),
        escape_html(&skill.name)
    )
}

fn project_card(project: &Project) -> String {
    let tech: String = project
        .tech
        .iter()
        .map(|t| format!("<span class=\"tag\">{}</span>", escape_html(t)))
        .collect();
    format!(
        concat!(
            "<div class=\"project-card\" data-project=\"{id}\">",
            "<img src=\"{image}\" alt=\"{title}\">",
            "<div class=\"project-body\"><h3>{title}</h3><p>{description}</p>",
            "<div class=\"tags\">{tech}</div>",
            "<div class=\"project-links\">",
            "<a href=\"{demo}\" target=\"_blank\" rel=\"noopener noreferrer\">Live Demo</a>",
            "<a href=\"{github}\" target=\"_blank\" rel=\"noopener noreferrer\">Source</a>",
            "</div></div></div>"
        ),
        id = project.id,
        image = escape_html(&asset_url(&project.image)),
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        tech = tech,
        demo = escape_html(&project.demo),
        github = escape_html(&project.github),
    )
}

/// Maps a content image reference (`/dashboard.png`) to its served URL.
pub fn asset_url(path: &str) -> String {
    format!("{}/{}", ASSET_PREFIX, path.trim_start_matches('/'))
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Keeps only characters valid in a CSS class suffix.
fn css_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

fn js_string(input: &str) -> String {
    serde_json::Value::String(input.to_string()).to_string()
}
