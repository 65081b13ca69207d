//! Copy and per-entry rendering parameters for the landing page sections.

pub const BRAND: &str = "BeyondChats";
pub const BRAND_ACCENT: &str = "AI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    Features,
    HowItWorks,
    Solutions,
    WhyChooseUs,
    Testimonials,
    Pricing,
    Cta,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::HowItWorks,
        SectionId::Solutions,
        SectionId::WhyChooseUs,
        SectionId::Testimonials,
        SectionId::Pricing,
        SectionId::Cta,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Features => "features",
            SectionId::HowItWorks => "how-it-works",
            SectionId::Solutions => "solutions",
            SectionId::WhyChooseUs => "why-choose-us",
            SectionId::Testimonials => "testimonials",
            SectionId::Pricing => "pricing",
            SectionId::Cta => "cta",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let id = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }
}

/// Sections the navbar highlights, top to bottom.
pub const SPY_SECTIONS: &[&str] = &["hero", "features", "solutions", "testimonials", "pricing", "cta"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Mic,
    Video,
    Message,
    Shield,
    Bolt,
    Globe,
    Sparkles,
    CheckCircle,
    Users,
    TrendingUp,
    Award,
    Star,
    ArrowRight,
    Play,
    Menu,
    Close,
    Sun,
    Moon,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Mic => "fa-solid fa-microphone",
            Icon::Video => "fa-solid fa-video",
            Icon::Message => "fa-regular fa-comment",
            Icon::Shield => "fa-solid fa-shield-halved",
            Icon::Bolt => "fa-solid fa-bolt",
            Icon::Globe => "fa-solid fa-globe",
            Icon::Sparkles => "fa-solid fa-wand-magic-sparkles",
            Icon::CheckCircle => "fa-regular fa-circle-check",
            Icon::Users => "fa-solid fa-users",
            Icon::TrendingUp => "fa-solid fa-arrow-trend-up",
            Icon::Award => "fa-solid fa-award",
            Icon::Star => "fa-solid fa-star",
            Icon::ArrowRight => "fa-solid fa-arrow-right",
            Icon::Play => "fa-solid fa-play",
            Icon::Menu => "fa-solid fa-bars",
            Icon::Close => "fa-solid fa-xmark",
            Icon::Sun => "fa-solid fa-sun",
            Icon::Moon => "fa-solid fa-moon",
        }
    }
}

/// Background gradients for icon tiles and step badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    SkyToIndigo,
    IndigoToSky,
    SkyToTeal,
    TealToSky,
    BlueCyan,
    PurplePink,
    OrangeRed,
    GreenEmerald,
}

impl Accent {
    pub fn gradient(self) -> &'static str {
        match self {
            Accent::SkyToIndigo => "linear-gradient(135deg, #1d9bf0, #4d7ce6)",
            Accent::IndigoToSky => "linear-gradient(135deg, #4d7ce6, #1d9bf0)",
            Accent::SkyToTeal => "linear-gradient(135deg, #1d9bf0, #26d9d9)",
            Accent::TealToSky => "linear-gradient(135deg, #26d9d9, #1d9bf0)",
            Accent::BlueCyan => "linear-gradient(135deg, #3b82f6, #06b6d4)",
            Accent::PurplePink => "linear-gradient(135deg, #a855f7, #ec4899)",
            Accent::OrangeRed => "linear-gradient(135deg, #f97316, #ef4444)",
            Accent::GreenEmerald => "linear-gradient(135deg, #22c55e, #10b981)",
        }
    }
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 4] = [
    Stat { value: "50M+", label: "Calls" },
    Stat { value: "100+", label: "Langs" },
    Stat { value: "4K", label: "Video" },
    Stat { value: "<100ms", label: "Latency" },
];

pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::Mic,
        title: "AI Voice Chatbot",
        description: "Natural language voice interactions powered by advanced AI. Handle customer calls 24/7 with human-like conversations.",
        accent: Accent::SkyToIndigo,
    },
    Feature {
        icon: Icon::Video,
        title: "AI Video Calling",
        description: "Crystal-clear video calls with real-time AI translation, transcription, and intelligent meeting summaries.",
        accent: Accent::IndigoToSky,
    },
    Feature {
        icon: Icon::Message,
        title: "Bulk WhatsApp",
        description: "Send personalized messages at scale. Smart scheduling, analytics, and automation for maximum engagement.",
        accent: Accent::SkyToTeal,
    },
    Feature {
        icon: Icon::Shield,
        title: "Enterprise Security",
        description: "End-to-end encryption, SOC 2 compliance, and GDPR ready. Your data security is our priority.",
        accent: Accent::TealToSky,
    },
    Feature {
        icon: Icon::Bolt,
        title: "Lightning Fast",
        description: "Sub-50ms latency with our global edge network. Seamless real-time communication anywhere.",
        accent: Accent::SkyToIndigo,
    },
    Feature {
        icon: Icon::Globe,
        title: "Global Scale",
        description: "Infrastructure in 150+ countries. Automatic failover and load balancing for ultimate reliability.",
        accent: Accent::IndigoToSky,
    },
];

pub struct Step {
    pub number: u8,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub media: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        number: 1,
        icon: Icon::Video,
        title: "Start Your Video Call",
        description: "Launch a crystal-clear 4K video call with just one click. Invite unlimited participants instantly.",
        accent: Accent::BlueCyan,
        media: "/couple-call.mp4",
    },
    Step {
        number: 2,
        icon: Icon::Globe,
        title: "AI Translation Activates",
        description: "Real-time translation in 100+ languages automatically detects and translates conversations as you speak.",
        accent: Accent::PurplePink,
        media: "/Ai-translation.mp4",
    },
    Step {
        number: 3,
        icon: Icon::Sparkles,
        title: "Live Transcription",
        description: "Every word is captured with 99% accuracy. Speaker identification and timestamps included automatically.",
        accent: Accent::OrangeRed,
        media: "/live-translation.mp4",
    },
    Step {
        number: 4,
        icon: Icon::CheckCircle,
        title: "Smart Summaries Generated",
        description: "AI analyzes your meeting and generates actionable summaries with key decisions and next steps.",
        accent: Accent::GreenEmerald,
        media: "/data-analysis.mp4",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

/// Decides between `<video>` and `<img>` from the file extension.
pub fn media_kind(path: &str) -> MediaKind {
    let lower = path.to_ascii_lowercase();
    if lower.ends_with(".mp4") || lower.ends_with(".webm") {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artwork {
    Voice,
    Video,
}

impl Artwork {
    pub fn icon(self) -> Icon {
        match self {
            Artwork::Voice => Icon::Mic,
            Artwork::Video => Icon::Video,
        }
    }

    pub fn media(self) -> &'static str {
        match self {
            Artwork::Voice => "/Ai_voice_agent.mp4",
            Artwork::Video => "/AI_video_call.mp4",
        }
    }
}

pub struct Solution {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub artwork: Artwork,
}

pub const SOLUTIONS: [Solution; 2] = [
    Solution {
        title: "AI Voice Chatbot",
        subtitle: "24/7 Intelligent Conversations",
        description: "Deploy sophisticated AI voice agents that understand context, handle complex queries, and seamlessly escalate to human agents when needed.",
        features: &[
            "Natural language processing",
            "Multi-language support",
            "Sentiment analysis",
            "Smart call routing",
            "Real-time analytics",
        ],
        artwork: Artwork::Voice,
    },
    Solution {
        title: "AI Video Calling",
        subtitle: "Next-Gen Video Communication",
        description: "Transform your video meetings with AI-powered features that boost productivity and break down language barriers.",
        features: &[
            "Live transcription",
            "Real-time translation",
            "Meeting summaries",
            "Action item extraction",
            "Screen sharing & recording",
        ],
        artwork: Artwork::Video,
    },
];

pub struct Reason {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const REASONS: [Reason; 6] = [
    Reason {
        icon: Icon::Shield,
        title: "Enterprise-Grade Security",
        description: "Bank-level encryption, SOC 2 Type II certified, and GDPR compliant. Your data is protected with military-grade security protocols.",
    },
    Reason {
        icon: Icon::Bolt,
        title: "Lightning-Fast Performance",
        description: "Sub-50ms latency with our global edge network. Experience real-time communication without delays or interruptions.",
    },
    Reason {
        icon: Icon::Users,
        title: "24/7 Expert Support",
        description: "Dedicated support team available around the clock. Get help when you need it with our industry-leading response times.",
    },
    Reason {
        icon: Icon::TrendingUp,
        title: "Proven Track Record",
        description: "Trusted by 10,000+ businesses worldwide. Join the companies that have transformed their communication with our platform.",
    },
    Reason {
        icon: Icon::Award,
        title: "Industry Recognition",
        description: "Award-winning AI technology recognized by leading industry analysts. Innovation that sets the standard.",
    },
    Reason {
        icon: Icon::CheckCircle,
        title: "99.9% Uptime SLA",
        description: "Guaranteed reliability with automatic failover and redundancy. Your business never stops, and neither do we.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    Monthly(u32),
    Custom,
}

impl Price {
    pub fn amount(self) -> String {
        match self {
            Price::Monthly(dollars) => dollars.to_string(),
            Price::Custom => "Custom".to_string(),
        }
    }

    pub fn is_custom(self) -> bool {
        matches!(self, Price::Custom)
    }

    pub fn cta_label(self) -> &'static str {
        match self {
            Price::Monthly(_) => "Get Started",
            Price::Custom => "Contact Sales",
        }
    }
}

pub struct Plan {
    pub name: &'static str,
    pub price: Price,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: Price::Monthly(49),
        description: "Perfect for small teams getting started with AI communication.",
        features: &[
            "1,000 AI voice minutes",
            "50 video call hours",
            "5,000 WhatsApp messages",
            "Basic analytics",
            "Email support",
        ],
        popular: false,
    },
    Plan {
        name: "Professional",
        price: Price::Monthly(149),
        description: "For growing businesses that need more power and flexibility.",
        features: &[
            "10,000 AI voice minutes",
            "500 video call hours",
            "50,000 WhatsApp messages",
            "Advanced analytics",
            "Priority support",
            "Custom integrations",
            "Team collaboration",
        ],
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price: Price::Custom,
        description: "Tailored solutions for large organizations with specific needs.",
        features: &[
            "Unlimited voice minutes",
            "Unlimited video calls",
            "Unlimited messages",
            "Dedicated support",
            "Custom AI training",
            "SLA guarantee",
            "On-premise options",
            "White-label solution",
        ],
        popular: false,
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

impl Testimonial {
    /// Avatar text: first letter of each word in the author's name.
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "BeyondChatsAI transformed our customer support. We've reduced response times by 80% while maintaining high satisfaction scores.",
        author: "Sarah Chen",
        role: "VP of Customer Success",
        company: "TechFlow Inc.",
    },
    Testimonial {
        quote: "The AI video calling features are incredible. Real-time translation has opened up new markets we couldn't reach before.",
        author: "Marcus Rodriguez",
        role: "Head of Sales",
        company: "GlobalReach",
    },
    Testimonial {
        quote: "Bulk WhatsApp messaging at this scale with such precision targeting? Game-changer for our marketing campaigns.",
        author: "Emily Watson",
        role: "CMO",
        company: "Growth Labs",
    },
];

pub const LOGOS: [&str; 6] = [
    "TechFlow",
    "GlobalReach",
    "Growth Labs",
    "Innovate Co",
    "Scale Up",
    "Future Corp",
];

pub struct NavLink {
    pub label: &'static str,
    pub section: SectionId,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Features", section: SectionId::Features },
    NavLink { label: "Solutions", section: SectionId::Solutions },
    NavLink { label: "Pricing", section: SectionId::Pricing },
    NavLink { label: "Testimonials", section: SectionId::Testimonials },
];

pub struct LinkGroup {
    pub title: &'static str,
    pub links: [&'static str; 5],
}

pub const FOOTER_LINKS: [LinkGroup; 4] = [
    LinkGroup {
        title: "Product",
        links: ["Features", "Pricing", "Integrations", "API", "Documentation"],
    },
    LinkGroup {
        title: "Company",
        links: ["About", "Blog", "Careers", "Press", "Contact"],
    },
    LinkGroup {
        title: "Resources",
        links: ["Help Center", "Community", "Webinars", "Case Studies", "Status"],
    },
    LinkGroup {
        title: "Legal",
        links: ["Privacy", "Terms", "Security", "GDPR", "Cookie Policy"],
    },
];

/// Social network name and its Font Awesome brand icon.
pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("twitter", "fa-brands fa-x-twitter"),
    ("linkedin", "fa-brands fa-linkedin-in"),
    ("github", "fa-brands fa-github"),
    ("youtube", "fa-brands fa-youtube"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.as_str()), Some(section));
            assert_eq!(
                SectionId::from_anchor(&format!("#{}", section.as_str())),
                Some(section)
            );
        }
        assert_eq!(SectionId::from_anchor("nonexistent-id"), None);
    }

    #[test]
    fn spied_and_linked_sections_exist() {
        for id in SPY_SECTIONS {
            assert!(SectionId::from_anchor(id).is_some(), "{} is not a section", id);
        }
        for link in &NAV_LINKS {
            assert!(SPY_SECTIONS.contains(&link.section.as_str()));
        }
    }

    #[test]
    fn initials_from_author() {
        assert_eq!(TESTIMONIALS[0].initials(), "SC");
        assert_eq!(TESTIMONIALS[1].initials(), "MR");
        assert_eq!(TESTIMONIALS[2].initials(), "EW");
    }

    #[test]
    fn custom_price_has_no_amount_or_checkout() {
        assert_eq!(Price::Monthly(149).amount(), "149");
        assert_eq!(Price::Monthly(149).cta_label(), "Get Started");
        assert!(Price::Custom.is_custom());
        assert_eq!(Price::Custom.amount(), "Custom");
        assert_eq!(Price::Custom.cta_label(), "Contact Sales");
    }

    #[test]
    fn exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|plan| plan.popular).count(), 1);
    }

    #[test]
    fn media_kind_by_extension() {
        assert_eq!(media_kind("/couple-call.mp4"), MediaKind::Video);
        assert_eq!(media_kind("/demo.WEBM"), MediaKind::Video);
        assert_eq!(media_kind("/robot.png"), MediaKind::Image);
        assert_eq!(media_kind("/loop.gif"), MediaKind::Image);
    }
}
