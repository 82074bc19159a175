//! Read-only site content: about text, skills, projects, experience and
//! contact links.
//!
//! The built-in records are the default. A page can replace them by embedding
//! JSON in `<script id="portfolio-content" type="application/json">`; fields
//! left out of that JSON fall back to the built-in values.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// Element id of the optional embedded content.
pub const CONTENT_ELEMENT_ID: &str = "portfolio-content";

/// A titled group of skills.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
	pub title: String,
	pub skills: Vec<String>,
}

/// A link to a project's source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepoLink {
	/// Button text, e.g. "Code" or "Backend".
	pub label: String,
	pub url: String,
}

/// A showcased project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
	pub title: String,
	pub description: String,
	/// Screenshot URL.
	pub image: String,
	pub technologies: Vec<String>,
	pub live_url: String,
	#[serde(default)]
	pub repositories: Vec<RepoLink>,
}

/// A timeline entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
	pub title: String,
	pub organization: String,
	pub period: String,
	pub description: String,
	pub technologies: Vec<String>,
}

/// A way to reach the site owner. Entries without `href` are shown as text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
	pub label: String,
	pub text: String,
	#[serde(default)]
	pub href: Option<String>,
}

/// A strength highlighted in the about section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
	pub title: String,
	pub description: String,
}

/// A headline number, e.g. "25+ Technologies".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
	pub value: String,
	pub label: String,
}

/// Text and highlights of the about section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
	pub greeting: String,
	pub paragraphs: Vec<String>,
	pub features: Vec<Feature>,
	pub stats: Vec<Stat>,
}

/// Icon-style link under the hero heading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
	pub label: String,
	pub href: String,
}

/// Everything the page sections display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
	pub name: String,
	pub role: String,
	pub socials: Vec<SocialLink>,
	pub about: AboutContent,
	pub skills: Vec<SkillCategory>,
	pub projects: Vec<Project>,
	pub experience: Vec<Experience>,
	pub contact: Vec<ContactLink>,
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

const EMAIL: &str = "emmanueloghene72@gmail.com";

impl Default for AboutContent {
	fn default() -> Self {
		Self {
			greeting: "Hi there! 👋".into(),
			paragraphs: strings(&[
				"I'm a passionate frontend developer with over 3 years of experience creating \
				 digital experiences that combine beautiful design with seamless functionality. \
				 I specialize in React, Next.js, and modern web technologies.",
				"When I'm not coding, you can find me exploring new technologies, contributing \
				 to open source projects, or sharing my knowledge through blog posts and \
				 community talks. I believe in continuous learning and staying up-to-date with \
				 the latest industry trends.",
				"My goal is to create meaningful digital experiences that not only look great \
				 but also solve real problems and provide genuine value to users.",
			]),
			features: vec![
				Feature {
					title: "Clean Code".into(),
					description: "Writing maintainable, scalable, and well-documented code that \
						follows best practices."
						.into(),
				},
				Feature {
					title: "Design Systems".into(),
					description: "Creating consistent and reusable component libraries that scale \
						across projects."
						.into(),
				},
				Feature {
					title: "Performance".into(),
					description: "Optimizing applications for speed, accessibility, and excellent \
						user experience."
						.into(),
				},
			],
			stats: [
				("100+", "Happy Clients"),
				("25+", "Technologies"),
				("1000+", "Cups of Coffee"),
				("15+", "Team Projects"),
			]
			.into_iter()
			.map(|(value, label)| Stat {
				value: value.into(),
				label: label.into(),
			})
			.collect(),
		}
	}
}

impl Default for PortfolioContent {
	fn default() -> Self {
		Self {
			name: "Emmanuel".into(),
			role: "Frontend Developer".into(),
			socials: vec![
				SocialLink {
					label: "GitHub".into(),
					href: "https://github.com/OgheneDev".into(),
				},
				SocialLink {
					label: "LinkedIn".into(),
					href: "https://www.linkedin.com/in/emmanuel-oghene-0242182ab".into(),
				},
				SocialLink {
					label: "Email".into(),
					href: format!("mailto:{}", EMAIL),
				},
			],
			about: AboutContent::default(),
			skills: vec![
				SkillCategory {
					title: "Frontend Technologies".into(),
					skills: strings(&[
						"React",
						"Next.js",
						"TypeScript",
						"JavaScript",
						"HTML5",
						"CSS3",
						"Tailwind CSS",
						"Redux",
						"Zustand",
					]),
				},
				SkillCategory {
					title: "Backend & Database".into(),
					skills: strings(&["Node.js", "Express", "MongoDB", "Firebase", "Rest APIs"]),
				},
				SkillCategory {
					title: "Tools & Workflow".into(),
					skills: strings(&["Git", "GitHub", "VS Code", "Figma", "Vite", "npm/yarn"]),
				},
			],
			projects: vec![
				Project {
					title: "TechNest".into(),
					description: "A full-stack e-commerce solution with Next.js and Express.js. \
						Features include product catalog, shopping cart, and secure checkout."
						.into(),
					image: "https://res.cloudinary.com/dgc8cd67w/image/upload/v1748603305/Annotation_2025-05-30_120753_mpkdoz.png".into(),
					technologies: strings(&[
						"Next.js",
						"TypeScript",
						"TailwindCSS",
						"Express.js",
						"MongoDB",
						"Zustand",
					]),
					live_url: "https://technest-two.vercel.app/".into(),
					repositories: vec![RepoLink {
						label: "Code".into(),
						url: "https://github.com/OgheneDev/technest-frontend".into(),
					}],
				},
				Project {
					title: "Task Management App".into(),
					description: "A full-stack web app that helps users manage tasks efficiently. \
						It includes secure user authentication, full CRUD capabilities for tasks, \
						and automated email reminders for deadlines."
						.into(),
					image: "https://res.cloudinary.com/dgc8cd67w/image/upload/v1748602298/Annotation_2025-05-30_115125_suvipj.png".into(),
					technologies: strings(&[
						"Next.js",
						"TypeScript",
						"TailwindCSS",
						"Node.js",
						"Express.js",
						"Nodemailer",
						"MongoDB",
					]),
					live_url: "https://task-app-frontend-rho.vercel.app/".into(),
					repositories: vec![RepoLink {
						label: "Code".into(),
						url: "https://github.com/OgheneDev/task-app-frontend".into(),
					}],
				},
				Project {
					title: "Burn and Co.".into(),
					description: "A jewellery listing website with a custom real-time chat widget \
						built using Firebase, featuring a clean UI with React.js and Tailwind CSS."
						.into(),
					image: "https://res.cloudinary.com/dgc8cd67w/image/upload/v1759343879/Annotation_2025-10-01_193741_j7cuy7.png".into(),
					technologies: strings(&["React.js", "Tailwind", "JavaScript", "Firebase"]),
					live_url: "https://jewellery-ebon.vercel.app/".into(),
					repositories: vec![RepoLink {
						label: "Code".into(),
						url: "https://github.com/OgheneDev/jewellery".into(),
					}],
				},
			],
			experience: vec![
				Experience {
					title: "Freelance Frontend Developer".into(),
					organization: "Migho Invest Limited".into(),
					period: "June 2024 - September 2024".into(),
					description: "Built the main website and an admin dashboard for an investment \
						platform with React and Next.js, alongside a backend developer and a \
						UI/UX designer."
						.into(),
					technologies: strings(&[
						"React",
						"Next.js",
						"TypeScript",
						"TailwindCSS",
						"Redux",
						"Chart.js",
					]),
				},
				Experience {
					title: "Frontend Developer".into(),
					organization: "Rheel Estate Limited".into(),
					period: "January 2025 - April 2025".into(),
					description: "Led frontend development of a real estate platform and its \
						landing page, integrating the backend APIs and real-time features."
						.into(),
					technologies: strings(&[
						"React",
						"Next.js",
						"TypeScript",
						"TailwindCSS",
						"Framer Motion",
						"REST APIs",
					]),
				},
			],
			contact: vec![
				ContactLink {
					label: "Email".into(),
					text: EMAIL.into(),
					href: Some(format!("mailto:{}", EMAIL)),
				},
				ContactLink {
					label: "Phone".into(),
					text: "+234 916 247 5151".into(),
					href: Some("tel:+2349162475151".into()),
				},
				ContactLink {
					label: "WhatsApp".into(),
					text: "+234 807 192 0976".into(),
					href: Some("https://wa.me/2348071920976".into()),
				},
				ContactLink {
					label: "GitHub".into(),
					text: "github.com/OgheneDev".into(),
					href: Some("https://github.com/OgheneDev".into()),
				},
				ContactLink {
					label: "Location".into(),
					text: "Benin City, Nigeria".into(),
					href: None,
				},
			],
		}
	}
}

impl PortfolioContent {
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}

fn embedded_json() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONTENT_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Content for this page: the embedded JSON if present and valid, otherwise
/// the built-in records.
pub fn load_content() -> PortfolioContent {
	let Some(json) = embedded_json() else {
		return PortfolioContent::default();
	};
	match PortfolioContent::from_json(&json) {
		Ok(content) => {
			info!(
				"content: loaded {} projects, {} experience entries",
				content.projects.len(),
				content.experience.len()
			);
			content
		}
		Err(e) => {
			warn!("content: failed to parse embedded content: {}", e);
			PortfolioContent::default()
		}
	}
}
