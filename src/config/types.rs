use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default = "default_slides")]
    pub slides: Vec<Slide>,
    #[serde(default = "default_experience")]
    pub experience: Vec<Experience>,
    #[serde(default = "default_skills")]
    pub skills: Vec<Skill>,
    #[serde(default = "default_tech_stack")]
    pub tech_stack: Vec<TechSkill>,
    #[serde(default = "default_philosophy")]
    pub philosophy: Vec<Principle>,
    #[serde(default = "default_stats")]
    pub stats: Vec<StatSpec>,
}

/// Who the page is about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Phrases and cadence for the hero typewriter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    /// Delay before each typed character, in milliseconds.
    #[serde(default = "default_type_ms")]
    pub type_ms: u64,
    /// Pause on a fully typed phrase, in milliseconds.
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
    /// Delay before each deleted character, in milliseconds.
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
}

/// Where the projects gallery comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedConfig {
    /// Account whose public repositories are listed.
    pub owner: String,
    /// API root (e.g., "https://api.github.com").
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Number of records kept after sorting.
    #[serde(default = "default_feed_limit")]
    pub limit: usize,
    /// Total request timeout in seconds.
    #[serde(default = "default_feed_timeout")]
    pub timeout_seconds: u64,
}

/// Timing knobs for the page animations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Fraction of a region that must be on screen to count as entered.
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f32,
    /// Number of ticks a stat counter takes to reach its target.
    #[serde(default = "default_counter_steps")]
    pub counter_steps: u32,
    /// Interval between counter ticks, in milliseconds.
    #[serde(default = "default_counter_tick_ms")]
    pub counter_tick_ms: u64,
    /// Interval between hero slides, in milliseconds.
    #[serde(default = "default_slide_interval_ms")]
    pub slide_interval_ms: u64,
    /// Redraw cadence of the terminal surface, in milliseconds.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slide {
    pub headline: String,
    pub subheadline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TechSkill {
    pub name: String,
    /// Proficiency in percent, 0..=100.
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Principle {
    pub title: String,
    pub description: String,
}

/// One animated number on the stats section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatSpec {
    /// Stable key used in `counter_values()`.
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub suffix: String,
    /// Region whose first appearance starts the counter.
    #[serde(default = "default_stat_region")]
    pub region: String,
    pub target: u64,
}

fn default_type_ms() -> u64 {
    100
}

fn default_hold_ms() -> u64 {
    1500
}

fn default_delete_ms() -> u64 {
    50
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_feed_limit() -> usize {
    6
}

fn default_feed_timeout() -> u64 {
    10
}

fn default_visibility_threshold() -> f32 {
    0.1
}

fn default_counter_steps() -> u32 {
    200
}

fn default_counter_tick_ms() -> u64 {
    1
}

fn default_slide_interval_ms() -> u64 {
    5000
}

fn default_frame_ms() -> u64 {
    16
}

fn default_stat_region() -> String {
    "stats".to_string()
}

fn default_slides() -> Vec<Slide> {
    [
        (
            "Hi, I'm Yaka Hemanth",
            "Frontend Developer at Photonx Technologies Pvt Ltd",
        ),
        (
            "Building futuristic, pixel-perfect interfaces",
            "Crafting experiences that matter",
        ),
        (
            "React • Tailwind • MUI • Redux",
            "HTML, CSS, JavaScript, Bootstrap, Webflow",
        ),
    ]
    .into_iter()
    .map(|(headline, subheadline)| Slide {
        headline: headline.to_string(),
        subheadline: subheadline.to_string(),
    })
    .collect()
}

fn default_experience() -> Vec<Experience> {
    vec![Experience {
        role: "Frontend Developer".to_string(),
        company: "Photonx Technologies Pvt Ltd".to_string(),
        period: "2023 – Present".to_string(),
        description: "Developed and maintained responsive React applications using MUI, \
                      Redux Toolkit, and Webflow integrations. Collaborated with design teams \
                      to implement pixel-perfect UI components."
            .to_string(),
    }]
}

fn default_skills() -> Vec<Skill> {
    [
        ("Frontend Development", "Expert"),
        ("UI/UX Design", "Advanced"),
        ("Performance", "Optimized"),
        ("Problem Solving", "Creative"),
    ]
    .into_iter()
    .map(|(label, value)| Skill {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

fn default_tech_stack() -> Vec<TechSkill> {
    [
        ("HTML", 100),
        ("CSS", 100),
        ("Tailwind CSS", 100),
        ("Bootstrap", 100),
        ("JavaScript", 95),
        ("React", 95),
        ("MUI", 100),
        ("Redux", 80),
        ("Webflow", 100),
    ]
    .into_iter()
    .map(|(name, percentage)| TechSkill {
        name: name.to_string(),
        percentage,
    })
    .collect()
}

fn default_philosophy() -> Vec<Principle> {
    [
        (
            "Minimalist Aesthetics",
            "Embracing white space and clean design principles to create intuitive and elegant interfaces.",
        ),
        (
            "Performance First",
            "Optimizing every aspect for speed and efficiency, ensuring seamless user experiences.",
        ),
        (
            "Creative Innovation",
            "Pushing boundaries while maintaining usability, finding the perfect balance between form and function.",
        ),
    ]
    .into_iter()
    .map(|(title, description)| Principle {
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn default_stats() -> Vec<StatSpec> {
    [
        ("projects", "Projects Completed", "+", 10),
        ("satisfaction", "Client Satisfaction", "%", 98),
        ("years", "Years Experience", "+", 1),
        ("response", "Hours Response", "h", 24),
    ]
    .into_iter()
    .map(|(id, label, suffix, target)| StatSpec {
        id: id.to_string(),
        label: label.to_string(),
        suffix: suffix.to_string(),
        region: default_stat_region(),
        target,
    })
    .collect()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Yaka Hemanth".to_string(),
            tagline: "Crafting pixel-perfect interfaces and seamless user experiences".to_string(),
            bio: "Frontend developer specializing in React, Tailwind, MUI, and modern JavaScript. \
                  Passionate about clean code and intuitive UI/UX design. I bring ideas to life \
                  through pixel-perfect implementations and seamless user experiences."
                .to_string(),
            email: "yakahemanth3@gmail.com".to_string(),
            socials: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/hemanthyaka".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/yaka-hemanth-ba111227a/".to_string(),
                },
                SocialLink {
                    label: "Twitter".to_string(),
                    url: "https://twitter.com".to_string(),
                },
            ],
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Frontend Developer".to_string(),
                "React Specialist".to_string(),
                "UI/UX Enthusiast".to_string(),
            ],
            type_ms: default_type_ms(),
            hold_ms: default_hold_ms(),
            delete_ms: default_delete_ms(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            owner: "hemanthyaka".to_string(),
            api_base: default_api_base(),
            limit: default_feed_limit(),
            timeout_seconds: default_feed_timeout(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: default_visibility_threshold(),
            counter_steps: default_counter_steps(),
            counter_tick_ms: default_counter_tick_ms(),
            slide_interval_ms: default_slide_interval_ms(),
            frame_ms: default_frame_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            typewriter: TypewriterConfig::default(),
            feed: FeedConfig::default(),
            animation: AnimationConfig::default(),
            slides: default_slides(),
            experience: default_experience(),
            skills: default_skills(),
            tech_stack: default_tech_stack(),
            philosophy: default_philosophy(),
            stats: default_stats(),
        }
    }
}
