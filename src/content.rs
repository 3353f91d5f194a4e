//! Fixed page content. Nothing here changes at runtime.

pub const WELCOME_TEXT: &str = "Hi, my name is Varun Shetti. Welcome to my portfolio! I'm a passionate Full-Stack Developer specializing in React, Next.js, and API design. Let's build something amazing together!";
pub const TITLE_TEXT: &str = "Full-Stack Web & App Developer";
pub const DESCRIPTION_TEXT: &str =
    "Crafting beautiful, responsive, and functional web and mobile experiences.";

pub const OWNER_INITIALS: &str = "VS";
pub const COPYRIGHT_LINE: &str = "© 2024 Varun Pradeep Shetti. All rights reserved.";
pub const RESUME_PATH: &str = "/resume.pdf";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Code,
    Globe,
    Smartphone,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Globe => "◍",
            Self::Smartphone => "▯",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub image: &'static str,
}

pub const SKILLS: [Skill; 9] = [
    Skill { name: "HTML", icon: Icon::Code },
    Skill { name: "CSS", icon: Icon::Code },
    Skill { name: "JavaScript", icon: Icon::Code },
    Skill { name: "TypeScript", icon: Icon::Code },
    Skill { name: "Next.js", icon: Icon::Globe },
    Skill { name: "React Native", icon: Icon::Smartphone },
    Skill { name: "Python", icon: Icon::Code },
    Skill { name: "Bootstrap", icon: Icon::Code },
    Skill { name: "Tailwind CSS", icon: Icon::Code },
];

pub const PROJECTS: [Project; 3] = [
    Project {
        name: "E-commerce Platform",
        description: "A full-stack e-commerce solution built with Next.js and Python backend.",
        details: "Features include user authentication, product catalog, shopping cart, and payment integration.",
        image: "/images/ecommerce-platform.jpg",
    },
    Project {
        name: "Mobile Fitness App",
        description: "A React Native app for tracking workouts and nutrition.",
        details: "Includes workout planning, progress tracking, and integration with health APIs.",
        image: "/images/fitness-app.jpg",
    },
    Project {
        name: "Portfolio Website",
        description: "This responsive portfolio website built with Next.js and Tailwind CSS.",
        details: "Showcases projects, skills, and contact information with a unique command-line interface.",
        image: "/images/portfolio-website.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_names_are_unique() {
        let names: HashSet<_> = PROJECTS.iter().map(|project| project.name).collect();
        assert_eq!(names.len(), PROJECTS.len());
    }

    #[test]
    fn react_native_uses_the_phone_glyph() {
        let skill = SKILLS
            .iter()
            .find(|skill| skill.name == "React Native")
            .expect("skill present");
        assert_eq!(skill.icon, Icon::Smartphone);
    }
}
