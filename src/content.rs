//! Static portfolio content rendered by the page sections.

pub const OWNER: &str = "Pratham";
pub const TAGLINE: &str = "COMPUTER ENGINEER • SYSTEM ARCHITECT • INNOVATOR";
pub const INTRO: &str = "Building next-generation systems that scale. Specializing in distributed architectures, high-performance computing, and AI-driven solutions that power the future.";

pub const ABOUT: [&str; 3] = [
    "Computer Science graduate with expertise in building scalable, high-performance systems. I architect solutions that handle millions of users while maintaining sub-millisecond response times.",
    "My approach combines theoretical computer science foundations with practical engineering experience, focusing on system design, performance optimization, and cutting-edge technology integration.",
    "Currently exploring the intersection of distributed systems and machine learning, building the infrastructure that powers next-generation AI applications.",
];

pub const FOCUS_TAGS: [&str; 4] = [
    "System Design",
    "Performance Engineering",
    "Distributed Systems",
    "AI/ML",
];

/// (value, label) pairs for the about section's stat grid.
pub const STATS: [(&str, &str); 4] = [
    ("CS", "Student"),
    ("20+", "Projects Built"),
    ("24/7", "Learning Mode"),
    ("∞", "Curiosity Level"),
];

/// Keys and values of the `cat tech_stack.json` terminal card.
pub const TECH_STACK: [(&str, &str); 4] = [
    ("frontend", r#"["JavaScript", "HTML5", "CSS3"]"#),
    ("backend", r#"["Python", "Node.js"]"#),
    ("interests", r#"["FinTech", "Trading Algorithms", "Market Analysis"]"#),
    ("passion", r#""Building the future of finance""#),
];

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
}

pub static SKILLS: [Skill; 4] = [
    Skill {
        name: "JavaScript",
        level: 95,
        color: "yellow",
    },
    Skill {
        name: "Python",
        level: 90,
        color: "blue",
    },
    Skill {
        name: "Frontend",
        level: 88,
        color: "purple",
    },
    Skill {
        name: "FinTech",
        level: 85,
        color: "green",
    },
];

/// (label, value) summary rows under the skill cards.
pub const SKILL_SUMMARY: [(&str, &str); 3] = [
    ("Performance Score", "92.5% Overall"),
    ("Growth Rate", "+15% This Month"),
    ("Active Projects", "8 In Progress"),
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub metrics: &'static str,
    pub category: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Distributed Computing Platform",
        description: "High-performance distributed system handling 10M+ requests/day with auto-scaling microservices architecture.",
        tech: &["Go", "Kubernetes", "Redis", "PostgreSQL", "gRPC"],
        metrics: "99.99% uptime, <50ms latency",
        category: "Infrastructure",
    },
    Project {
        title: "Real-time Analytics Engine",
        description: "Stream processing system for real-time data analytics with ML-powered insights and predictive modeling.",
        tech: &["Python", "Apache Kafka", "TensorFlow", "ClickHouse", "Docker"],
        metrics: "1TB+ data/day processed",
        category: "Data Engineering",
    },
    Project {
        title: "AI-Powered Code Assistant",
        description: "Intelligent code completion and refactoring tool using transformer models and static analysis.",
        tech: &["TypeScript", "PyTorch", "WebAssembly", "LSP", "Tree-sitter"],
        metrics: "40% dev productivity boost",
        category: "AI/ML",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InDevelopment,
    AlphaTesting,
    ResearchPhase,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::InDevelopment => "In Development",
            Status::AlphaTesting => "Alpha Testing",
            Status::ResearchPhase => "Research Phase",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Status::InDevelopment => "text-blue bg-blue/10 border-blue/30",
            Status::AlphaTesting => "text-purple bg-purple/10 border-purple/30",
            Status::ResearchPhase => "text-orange bg-orange/10 border-orange/30",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Priority::High => "text-red bg-red/10 border-red/30",
            Priority::Medium => "text-yellow bg-yellow/10 border-yellow/30",
            Priority::Low => "text-green bg-green/10 border-green/30",
        }
    }
}

pub struct OngoingProject {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: Status,
    pub priority: Priority,
    /// Percent complete, 0-100.
    pub progress: u8,
    pub team_size: u8,
    pub commits: u32,
    pub timeline: &'static str,
    pub last_update: &'static str,
    pub looking_for: &'static [&'static str],
}

pub static ONGOING: [OngoingProject; 3] = [
    OngoingProject {
        title: "QuantumTrade AI",
        description: "Revolutionary trading algorithm using quantum computing principles and machine learning for cryptocurrency market prediction.",
        tech: &["Python", "TensorFlow", "Qiskit", "FastAPI", "Redis"],
        status: Status::InDevelopment,
        priority: Priority::High,
        progress: 75,
        team_size: 3,
        commits: 247,
        timeline: "Q2 2024",
        last_update: "2 hours ago",
        looking_for: &["ML Engineer", "Quantum Computing Specialist"],
    },
    OngoingProject {
        title: "EcoChain Network",
        description: "Sustainable blockchain platform for carbon credit trading with zero-energy consensus mechanism.",
        tech: &["Rust", "Substrate", "React", "GraphQL", "IPFS"],
        status: Status::AlphaTesting,
        priority: Priority::Medium,
        progress: 60,
        team_size: 5,
        commits: 189,
        timeline: "Q3 2024",
        last_update: "5 hours ago",
        looking_for: &["Blockchain Developer", "Frontend Engineer"],
    },
    OngoingProject {
        title: "NeuralCloud OS",
        description: "Next-generation operating system with built-in AI assistance and distributed computing capabilities.",
        tech: &["C++", "Rust", "WebAssembly", "TensorFlow", "gRPC"],
        status: Status::ResearchPhase,
        priority: Priority::High,
        progress: 35,
        team_size: 2,
        commits: 156,
        timeline: "Q4 2024",
        last_update: "1 day ago",
        looking_for: &["Systems Engineer", "AI Researcher", "UI/UX Designer"],
    },
];

/// Options of the contact form's project type select, as (value, label).
/// The empty value means "not chosen".
pub const PROJECT_TYPES: [(&str, &str); 7] = [
    ("", "Select project type"),
    ("web-development", "Web Development"),
    ("system-architecture", "System Architecture"),
    ("ai-ml", "AI/ML Integration"),
    ("consulting", "Technical Consulting"),
    ("collaboration", "Collaboration"),
    ("other", "Other"),
];

pub struct ContactLink {
    pub label: &'static str,
    pub detail: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email",
        detail: "pratham@example.com",
        href: "mailto:pratham@example.com",
        icon: "devicon-google-plain",
    },
    ContactLink {
        label: "LinkedIn",
        detail: "Connect professionally",
        href: "https://linkedin.com/in/pratham",
        icon: "devicon-linkedin-plain",
    },
    ContactLink {
        label: "GitHub",
        detail: "View my code",
        href: "https://github.com/pratham",
        icon: "devicon-github-plain",
    },
];

pub const NAV_SECTIONS: [&str; 5] = ["About", "Skills", "Projects", "Ongoing", "Contact"];

/// Anchor id of a nav section.
pub fn section_id(label: &str) -> String {
    label.to_lowercase()
}
