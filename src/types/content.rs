use serde::{Deserialize, Serialize};

/// A skill card: display name plus the styling tag used for its gradient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub color: String,
}

/// A showcased project with its outbound links and preview image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub demo: String,
    pub github: String,
    pub image: String,
}

/// Owner details shown in the hero, about and contact sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub photo: String,
    pub social_url: String,
    pub email: Option<String>,
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

/// All static display data. Built once at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl PortfolioContent {
    /// Navigation entries, one per tracked section.
    pub fn nav_items(&self) -> Vec<NavItem> {
        [
            ("home", "Home"),
            ("about", "About"),
            ("skills", "Skills"),
            ("projects", "Projects"),
        ]
        .iter()
        .map(|(id, label)| NavItem {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect()
    }

    /// Every local asset the page references, in render order.
    pub fn asset_paths(&self) -> Vec<&str> {
        let mut paths = vec![self.profile.photo.as_str()];
        paths.extend(self.projects.iter().map(|p| p.image.as_str()));
        paths
    }
}

fn skill(name: &str, color: &str) -> Skill {
    Skill {
        name: name.to_string(),
        color: color.to_string(),
    }
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Chirag Gupta".to_string(),
                tagline: "Frontend Developer passionate about crafting responsive and user-friendly web experiences".to_string(),
                about: vec![
                    "I'm an enthusiastic Frontend Developer with hands-on experience in building modern web applications using React.js, Next.js, and Tailwind CSS.".to_string(),
                    "My expertise lies in creating clean UI components, integrating APIs, and optimizing performance for a seamless user experience.".to_string(),
                    "Beyond coding, I focus on writing maintainable code, following best practices, and constantly learning to sharpen my skills as a developer.".to_string(),
                ],
                photo: "/myPhoto.jpg".to_string(),
                social_url: "https://github.com/ChiragGup".to_string(),
                email: None,
            },
            skills: vec![
                skill("React.js", "blue"),
                skill("JavaScript", "yellow"),
                skill("HTML/CSS", "orange"),
                skill("Tailwind CSS", "teal"),
                skill("Next.js", "gray"),
                skill("Git/GitHub", "pink"),
            ],
            projects: vec![
                Project {
                    id: 1,
                    title: "Smart Search Dashboard".to_string(),
                    description: "A responsive frontend dashboard that fetches data from a public API and supports real-time, case-insensitive search filtering with clean UI.".to_string(),
                    tech: tags(&["React", "API Integration", "Tailwind CSS"]),
                    demo: "https://search-dash-board.vercel.app/".to_string(),
                    github: "https://github.com/ChiragGup/search-dashboard".to_string(),
                    image: "/dashboard.png".to_string(),
                },
                Project {
                    id: 2,
                    title: "E-Commerce Website".to_string(),
                    description: "A frontend e-commerce application built with React and Context API featuring product listing, add-to-cart functionality, and responsive UI.".to_string(),
                    tech: tags(&["React", "Context API", "Tailwind CSS"]),
                    demo: "https://e-commerce-red-chi-93.vercel.app/".to_string(),
                    github: "https://github.com/ChiragGup/e-commerce".to_string(),
                    image: "/ecommerce.png".to_string(),
                },
                Project {
                    id: 3,
                    title: "Personal Portfolio Website".to_string(),
                    description: "A modern, fully responsive personal portfolio website built with React.js and Tailwind CSS, showcasing projects, skills, and contact information in a clean and professional UI.".to_string(),
                    tech: tags(&["Reactjs", "Tailwind CSS"]),
                    demo: "https://last-port-web.vercel.app/".to_string(),
                    github: "https://github.com/ChiragGup/lastPortWeb".to_string(),
                    image: "/portfolio.png".to_string(),
                },
            ],
        }
    }
}
