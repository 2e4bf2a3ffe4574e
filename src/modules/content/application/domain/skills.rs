use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub id: u32,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

/// The fixed skills section of the public site. It is not backed by a
/// collection.
#[derive(Debug, Clone, Serialize)]
pub struct SkillCatalog {
    pub categories: Vec<SkillCategory>,
    pub soft_skills: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub programming_languages: &'static [&'static str],
}

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Frontend Development",
        &[
            "HTML",
            "CSS",
            "JavaScript",
            "TypeScript",
            "React",
            "Next.js",
            "Tailwind",
            "Framer Motion",
            "Bootstrap",
        ],
    ),
    (
        "Backend Development",
        &["Node.js", "Express.js", "Python", "Django", "Flask", "REST API"],
    ),
    (
        "Databases",
        &[
            "MongoDB",
            "MySQL",
            "PostgreSQL",
            "MS Server",
            "Oracle",
            "Firebase",
            "NoSQL",
            "SQL",
        ],
    ),
    ("Mobile & UI/UX", &["Figma", "React Native", "Flutter", "Dart"]),
    (
        "DevOps & Tools",
        &["Git", "GitHub", "Docker", "AWS", "Vercel", "Netlify", "Postman"],
    ),
    (
        "Other Skills",
        &[
            "Machine Learning",
            "Deep Learning",
            "Web Scraping",
            "Technical Writing",
            "Agile",
            "Testing",
        ],
    ),
];

const SOFT_SKILLS: &[&str] = &[
    "Leadership Quality",
    "Communication",
    "Quick Learner",
    "Problem Solving",
    "Creative Thinking",
    "Strategic Planning",
];

const TOOLS: &[&str] = &[
    "VS Code",
    "Jupyter Notebook",
    "Github Desktop",
    "Linux",
    "Chrome DevTools",
];

const PROGRAMMING_LANGUAGES: &[&str] = &["Python", "C", "C++", "Java"];

impl SkillCatalog {
    pub fn standard() -> Self {
        let categories = CATEGORIES
            .iter()
            .zip(1..)
            .map(|(&(title, skills), id)| SkillCategory { id, title, skills })
            .collect();

        Self {
            categories,
            soft_skills: SOFT_SKILLS,
            tools: TOOLS,
            programming_languages: PROGRAMMING_LANGUAGES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_numbered_from_one() {
        let catalog = SkillCatalog::standard();

        assert_eq!(catalog.categories.len(), 6);
        assert_eq!(catalog.categories[0].id, 1);
        assert_eq!(catalog.categories[0].title, "Frontend Development");
        assert_eq!(catalog.categories[5].id, 6);
    }

    #[test]
    fn catalog_serializes_as_json_object() {
        let value = serde_json::to_value(SkillCatalog::standard()).unwrap();

        assert!(value["categories"].is_array());
        assert_eq!(value["programming_languages"][0], "Python");
        assert!(value["soft_skills"]
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s == "Problem Solving"));
    }
}
