use crate::domain::model::{ProjectEntry, SectionId};

pub const SECTIONS: [&str; 4] = ["hero", "about", "projects", "contact"];

pub fn sample_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry::new(
            "This Website",
            "Tiny yet pretty portfolio website build using SvelteKit",
            &["Svelte", "SvelteKit", "TailwindCSS", "NodeJS"],
            &["Scroll-paging", "High mobile compat", "Responsivity"],
            "/website.png",
            "https://github.com/lumijiez/lumijiez-web",
        ),
        ProjectEntry::new(
            "Wirestream",
            "From-scratch Java WebAPI framework, inspired by Express.js",
            &["Java", "Pure Java"],
            &["HTTP/S", "WebSocket", "Threading", "TCP/IP", "Middleware"],
            "/wirestream.png",
            "https://github.com/lumijiez/wirestream",
        ),
        ProjectEntry::new(
            "Raven",
            "Security-focused chat application, encrypted & tested",
            &[
                "Java",
                "Spring",
                "Kafka",
                "Stomp",
                "ECC",
                "HTTPS",
                "Docker",
                "MongoDB",
                "PostgreSQL",
                "Security",
                "JWT",
            ],
            &[
                "Microservice architecture",
                "Scalable",
                "Secure",
                "Message Broker",
                "MFA",
            ],
            "/raven.png",
            "https://github.com/lumijiez/raven",
        ),
        ProjectEntry::new(
            "Bugger",
            "Immersive 2D Java/LibGDX Top-Down shooter. Clean code, appropriate design patterns, spotless performance",
            &["Java", "LibGDX", "LWJGL"],
            &["Fantastic performance", "Design patterns", "GL shaders"],
            "/bugger.png",
            "https://github.com/lumijiez/bugger",
        ),
        // Same features as Bugger; features are free-form per entry.
        ProjectEntry::new(
            "Other projects",
            "Many more projects, assignments and tasks can be found on my GitHub!",
            &["Java", "C#", "APIs", "etc."],
            &["Fantastic performance", "Design patterns", "GL shaders"],
            "/etc.png",
            "https://github.com/lumijiez",
        ),
    ]
}

pub fn sample_sections() -> Vec<SectionId> {
    SECTIONS.iter().map(|s| SectionId::from(*s)).collect()
}
