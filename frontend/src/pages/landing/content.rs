#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const PRODUCT_NAME: &str = "Project Alchemist";
pub const HEADING_PREFIX: &str = "Project";
pub const HEADING_ACCENT: &str = "Alchemist";
pub const SUBTITLE: &str =
    "Revolutionizing document and order management with AI-powered automation";

pub const DOCUMENT_TYPES_TITLE: &str = "Supported Document Types";
pub const DOCUMENT_TYPES: &str =
    "Certificate of Origin, Commercial Invoice, Proof of Payment, Contract, Bill of Lading, and more.";

pub const TECH_STACK_TITLE: &str = "Cutting-Edge Tech Stack";
pub const TECH_STACK: &str =
    "Python 3.10, React, FastAPI, MongoDB, Azure Blob Storage, Langchain with GPT-4";

pub const TESTIMONIALS_TITLE: &str = "What Our Users Say";

pub const CTA_TITLE: &str = "Ready to Transform Your Workflow?";
pub const CTA_TEXT: &str = "Join the AI revolution in document and order management today!";
pub const CTA_BUTTON: &str = "Get Started";

pub const COPYRIGHT: &str = "© 2024 Project Alchemist. All rights reserved.";

pub const FEATURES: [FeatureEntry; 12] = [
    FeatureEntry {
        icon: "🧠",
        title: "AI Agent",
        description: "Intelligent AI agent powered by GPT-4 for complex tasks, queries, and document processing workflows.",
    },
    FeatureEntry {
        icon: "📊",
        title: "Order Management",
        description: "Streamlined order placement, status tracking, and document submission with real-time updates.",
    },
    FeatureEntry {
        icon: "📄",
        title: "Document Processing",
        description: "AI-driven document validation, type recognition, and field extraction for various document types.",
    },
    FeatureEntry {
        icon: "🔍",
        title: "Content Checker",
        description: "AI-powered checking system with customizable rules for validating orders and documents across the same order ID.",
    },
    FeatureEntry {
        icon: "🚀",
        title: "Extraction Express",
        description: "Rapid document validation and key field extraction tool for efficient data processing.",
    },
    FeatureEntry {
        icon: "📚",
        title: "Chase Book",
        description: "Comprehensive order management system for viewing, editing, and tracking all orders in one place.",
    },
    FeatureEntry {
        icon: "🔔",
        title: "Smart Reminders",
        description: "Automated reminders via email and WhatsApp for timely document submission and updates.",
    },
    FeatureEntry {
        icon: "👥",
        title: "Role-Based Access",
        description: "Tailored functionalities for admins and clients with secure access control and user management.",
    },
    FeatureEntry {
        icon: "🌐",
        title: "Multi-Country Support",
        description: "Configurable settings for different countries with country-specific document types and key fields.",
    },
    FeatureEntry {
        icon: "📱",
        title: "Multi-Channel Integration",
        description: "Seamless communication through various channels like email, WhatsApp, and web portal using a unified API.",
    },
    FeatureEntry {
        icon: "📈",
        title: "Market Researcher",
        description: "AI-powered online market research agent to gather information about interested companies and industry trends.",
    },
    FeatureEntry {
        icon: "🧙‍♂️",
        title: "Data Wizard",
        description: "Advanced data visualization and insights tool for transforming raw data into actionable intelligence.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "\"Project Alchemist has revolutionized our document management process. It's like having a team of experts working 24/7!\"",
        author: "- Sarah J., Operations Manager",
    },
    Testimonial {
        quote: "\"The AI-powered content checker has significantly reduced errors and improved our compliance. It's a game-changer!\"",
        author: "- Michael L., Compliance Officer",
    },
    Testimonial {
        quote: "\"The multi-country support and data visualization tools have given us insights we never had before. Highly recommended!\"",
        author: "- Elena R., Global Logistics Director",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn feature_titles_are_unique() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn features_keep_catalogue_order() {
        assert_eq!(FEATURES[0].title, "AI Agent");
        assert_eq!(FEATURES[4].title, "Extraction Express");
        assert_eq!(FEATURES[11].title, "Data Wizard");
        assert_eq!(FEATURES[11].icon, "🧙‍♂️");
    }

    #[test]
    fn every_entry_is_filled_in() {
        for feature in FEATURES.iter() {
            assert!(!feature.icon.is_empty());
            assert!(!feature.title.is_empty());
            assert!(feature.description.ends_with('.'), "{}", feature.title);
        }
        for testimonial in TESTIMONIALS.iter() {
            assert!(testimonial.quote.starts_with('"') && testimonial.quote.ends_with('"'));
            assert!(testimonial.author.starts_with("- "));
        }
    }

    #[test]
    fn product_name_matches_heading_parts() {
        assert_eq!(PRODUCT_NAME, format!("{} {}", HEADING_PREFIX, HEADING_ACCENT));
        assert!(COPYRIGHT.contains(PRODUCT_NAME));
    }
}
