//! The fixed catalog of synthetic customers.
//!
//! Every fetch builds its profiles from this table; only timestamps and
//! daily history change between requests.

/// Static description of one catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct PersonaSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub page_views: u32,
    pub time_on_site: u32,
    pub interactions: [&'static str; 3],
    pub persona_type: &'static str,
    pub interests: [&'static str; 3],
    pub communication: &'static str,
    pub frequency: &'static str,
}

/// Number of profiles returned by every fetch.
pub const CATALOG_SIZE: usize = 20;

pub static CATALOG: [PersonaSeed; CATALOG_SIZE] = [
    PersonaSeed {
        id: "1",
        name: "Emma Thompson",
        email: "emma@example.com",
        page_views: 145,
        time_on_site: 450,
        interactions: ["product_view", "cart_add", "wishlist_add"],
        persona_type: "Fashion Enthusiast",
        interests: ["clothing", "accessories", "trends"],
        communication: "email",
        frequency: "daily",
    },
    PersonaSeed {
        id: "2",
        name: "James Wilson",
        email: "james@example.com",
        page_views: 89,
        time_on_site: 320,
        interactions: ["blog_read", "newsletter_signup", "product_review"],
        persona_type: "Tech Professional",
        interests: ["gadgets", "software", "productivity"],
        communication: "sms",
        frequency: "weekly",
    },
    PersonaSeed {
        id: "3",
        name: "Sophia Chen",
        email: "sophia@example.com",
        page_views: 234,
        time_on_site: 560,
        interactions: ["course_enrollment", "video_watch", "forum_post"],
        persona_type: "Student",
        interests: ["education", "technology", "books"],
        communication: "app",
        frequency: "daily",
    },
    PersonaSeed {
        id: "4",
        name: "Michael Rodriguez",
        email: "michael@example.com",
        page_views: 167,
        time_on_site: 420,
        interactions: ["fitness_tracking", "meal_plan", "workout_complete"],
        persona_type: "Fitness Enthusiast",
        interests: ["health", "nutrition", "exercise"],
        communication: "sms",
        frequency: "daily",
    },
    PersonaSeed {
        id: "5",
        name: "Isabella Martinez",
        email: "isabella@example.com",
        page_views: 198,
        time_on_site: 480,
        interactions: ["recipe_save", "ingredient_purchase", "review_post"],
        persona_type: "Food Blogger",
        interests: ["cooking", "recipes", "photography"],
        communication: "email",
        frequency: "weekly",
    },
    PersonaSeed {
        id: "6",
        name: "William Taylor",
        email: "william@example.com",
        page_views: 156,
        time_on_site: 390,
        interactions: ["investment_research", "portfolio_update", "market_analysis"],
        persona_type: "Investor",
        interests: ["finance", "stocks", "cryptocurrency"],
        communication: "app",
        frequency: "realtime",
    },
    PersonaSeed {
        id: "7",
        name: "Olivia Brown",
        email: "olivia@example.com",
        page_views: 178,
        time_on_site: 440,
        interactions: ["art_purchase", "gallery_view", "artist_follow"],
        persona_type: "Art Collector",
        interests: ["contemporary art", "exhibitions", "artists"],
        communication: "email",
        frequency: "weekly",
    },
    PersonaSeed {
        id: "8",
        name: "Ethan Parker",
        email: "ethan@example.com",
        page_views: 210,
        time_on_site: 520,
        interactions: ["game_play", "tournament_entry", "team_join"],
        persona_type: "Gamer",
        interests: ["esports", "streaming", "competitive gaming"],
        communication: "discord",
        frequency: "realtime",
    },
    PersonaSeed {
        id: "9",
        name: "Ava Johnson",
        email: "ava@example.com",
        page_views: 145,
        time_on_site: 380,
        interactions: ["travel_booking", "itinerary_save", "review_write"],
        persona_type: "Travel Enthusiast",
        interests: ["adventure", "culture", "photography"],
        communication: "email",
        frequency: "weekly",
    },
    PersonaSeed {
        id: "10",
        name: "Lucas Kim",
        email: "lucas@example.com",
        page_views: 189,
        time_on_site: 460,
        interactions: ["music_stream", "playlist_create", "artist_follow"],
        persona_type: "Music Lover",
        interests: ["indie", "concerts", "vinyl"],
        communication: "app",
        frequency: "daily",
    },
    PersonaSeed {
        id: "11",
        name: "Sarah Anderson",
        email: "sarah@example.com",
        page_views: 167,
        time_on_site: 410,
        interactions: ["project_create", "team_invite", "document_share"],
        persona_type: "Project Manager",
        interests: ["productivity", "team management", "agile"],
        communication: "slack",
        frequency: "realtime",
    },
    PersonaSeed {
        id: "12",
        name: "David Lee",
        email: "david@example.com",
        page_views: 223,
        time_on_site: 540,
        interactions: ["code_commit", "pull_request", "issue_comment"],
        persona_type: "Developer",
        interests: ["open source", "machine learning", "web3"],
        communication: "github",
        frequency: "daily",
    },
    PersonaSeed {
        id: "13",
        name: "Mia Patel",
        email: "mia@example.com",
        page_views: 178,
        time_on_site: 430,
        interactions: ["design_upload", "client_feedback", "project_complete"],
        persona_type: "Designer",
        interests: ["UI/UX", "typography", "branding"],
        communication: "email",
        frequency: "weekly",
    },
    PersonaSeed {
        id: "14",
        name: "Alexander White",
        email: "alex@example.com",
        page_views: 156,
        time_on_site: 390,
        interactions: ["property_view", "appointment_schedule", "offer_submit"],
        persona_type: "Real Estate Agent",
        interests: ["property market", "architecture", "investment"],
        communication: "phone",
        frequency: "realtime",
    },
    PersonaSeed {
        id: "15",
        name: "Charlotte Davis",
        email: "charlotte@example.com",
        page_views: 198,
        time_on_site: 470,
        interactions: ["event_planning", "vendor_contact", "budget_update"],
        persona_type: "Event Planner",
        interests: ["weddings", "corporate events", "decoration"],
        communication: "email",
        frequency: "daily",
    },
    PersonaSeed {
        id: "16",
        name: "Benjamin Foster",
        email: "ben@example.com",
        page_views: 167,
        time_on_site: 420,
        interactions: ["photo_upload", "album_create", "print_order"],
        persona_type: "Photographer",
        interests: ["portrait", "landscape", "editing"],
        communication: "app",
        frequency: "weekly",
    },
    PersonaSeed {
        id: "17",
        name: "Victoria Scott",
        email: "victoria@example.com",
        page_views: 189,
        time_on_site: 450,
        interactions: ["class_schedule", "student_message", "assignment_grade"],
        persona_type: "Teacher",
        interests: ["education", "online learning", "pedagogy"],
        communication: "email",
        frequency: "daily",
    },
    PersonaSeed {
        id: "18",
        name: "Henry Wilson",
        email: "henry@example.com",
        page_views: 210,
        time_on_site: 500,
        interactions: ["research_paper", "experiment_log", "grant_application"],
        persona_type: "Scientist",
        interests: ["research", "data analysis", "publications"],
        communication: "email",
        frequency: "weekly",
    },
    PersonaSeed {
        id: "19",
        name: "Zoe Garcia",
        email: "zoe@example.com",
        page_views: 178,
        time_on_site: 430,
        interactions: ["sustainability_pledge", "recycling_log", "community_event"],
        persona_type: "Environmental Activist",
        interests: ["sustainability", "climate action", "community"],
        communication: "app",
        frequency: "daily",
    },
    PersonaSeed {
        id: "20",
        name: "Daniel Murphy",
        email: "daniel@example.com",
        page_views: 156,
        time_on_site: 380,
        interactions: ["podcast_record", "episode_edit", "guest_schedule"],
        persona_type: "Podcaster",
        interests: ["audio production", "storytelling", "interviews"],
        communication: "slack",
        frequency: "daily",
    },
];
