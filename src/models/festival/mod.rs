//! Static page content for the festival: sections, event tracks and schedule.

use super::carousel::ImageRef;
use super::registration::Category;

/// Scroll targets on the page, in top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Events,
    Gallery,
    Schedule,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Events,
        Section::Gallery,
        Section::Schedule,
        Section::Contact,
    ];

    /// Anchor id used by navigation links
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Events => "events",
            Section::Gallery => "gallery",
            Section::Schedule => "schedule",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navbar
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Events => "Events",
            Section::Gallery => "Gallery",
            Section::Schedule => "Schedule",
            Section::Contact => "Register",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|section| section.anchor() == anchor)
    }
}

/// One of the four event tracks shown as cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTrack {
    pub category: Category,
    pub description: String,
    /// Gradient endpoints as `#rrggbb`
    pub accent: (String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDay {
    pub day: String,
    pub date: String,
    pub info: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub venue: String,
    pub email: String,
    pub phone: String,
}

/// Everything the page renders that is not driven by a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalContent {
    pub name: String,
    pub tagline: String,
    pub venue: String,
    pub about: Vec<String>,
    pub about_images: Vec<ImageRef>,
    pub tracks: Vec<EventTrack>,
    pub schedule: Vec<ScheduleDay>,
    pub arena_note: String,
    pub contact: ContactInfo,
    pub motto: String,
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?q=80&w=1200&auto=format&fit=crop")
}

/// Default gallery shots for the carousel.
pub fn default_gallery() -> Vec<ImageRef> {
    [
        "photo-1542751371-adc38448a05e",
        "photo-1542909168-82c3e7fdca5c",
        "photo-1520523839897-bd0b52f945a0",
        "photo-1520975922284-9d8a622dbde1",
    ]
    .into_iter()
    .map(|photo| ImageRef::new(unsplash(photo), "Event shot"))
    .collect()
}

impl Default for FestivalContent {
    fn default() -> Self {
        let track = |category, description: &str, from: &str, to: &str| EventTrack {
            category,
            description: description.to_string(),
            accent: (from.to_string(), to.to_string()),
        };
        let day = |day: &str, date: &str, info: &str| ScheduleDay {
            day: day.to_string(),
            date: date.to_string(),
            info: info.to_string(),
        };

        Self {
            name: "SPARK 2K25".to_string(),
            tagline: "Where innovation meets adrenaline: a high-octane college fest inspired by the world of modern warfare gaming.".to_string(),
            venue: "SV College · Tirupati".to_string(),
            about: vec![
                "A celebration of talent, technology, and teamwork. Step into an immersive arena where coding meets combat, creativity faces challenges, and every moment feels cinematic.".to_string(),
                "Join students from across the region in Technical battles, Gaming tournaments, Cultural showcases, and pure Fun events, all under one electrifying sky.".to_string(),
            ],
            about_images: [
                "photo-1511512578047-dfb367046420",
                "photo-1535223289827-42f1e9919769",
                "photo-1519985176271-adb1088fa94c",
                "photo-1511884642898-4c92249e20b6",
            ]
            .into_iter()
            .map(|photo| ImageRef::new(unsplash(photo), "Prev event"))
            .collect(),
            tracks: vec![
                track(Category::Technical, "Hackathons, AI duels, robotics, dev sprints", "#22d3ee", "#0891b2"),
                track(Category::Gaming, "BGMI, Valorant, FIFA: tournaments & arenas", "#fb923c", "#ef4444"),
                track(Category::Cultural, "Music, dance, fashion: primetime showcases", "#c084fc", "#ec4899"),
                track(Category::Fun, "Mini-games, treasure hunts, chill zones", "#a3e635", "#10b981"),
            ],
            schedule: vec![
                day("Day 1", "Mar 15", "Inauguration, Tech Battles, Hackathons"),
                day("Day 2", "Mar 16", "BGMI, Valorant, FIFA – Eliminations"),
                day("Day 3", "Mar 17", "Cultural Night, Finals, Closing Ceremony"),
            ],
            arena_note: "Main arena opens at 9:00 AM, Tirupati".to_string(),
            contact: ContactInfo {
                venue: "SV College, Tirupati".to_string(),
                email: "spark@svcolleges.edu.in".to_string(),
                phone: "+91 98765 43210".to_string(),
            },
            motto: "Rise. Play. Conquer.".to_string(),
        }
    }
}
