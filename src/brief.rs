//! Content briefs and generation actions
//!
//! A brief describes what the creator wants (topic, platform, tone, audience). The
//! generation action selects which artifact is requested and, through it, the prompt
//! template, the provider limits, and the fallback catalog entry.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publishing platform a brief targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Youtube,
    Tiktok,
    Instagram,
    Twitter,
    Linkedin,
    Podcast,
    Blog,
    Newsletter,
}

impl Platform {
    pub const ALL: [Platform; 8] = [
        Platform::Youtube,
        Platform::Tiktok,
        Platform::Instagram,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Podcast,
        Platform::Blog,
        Platform::Newsletter,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Tiktok => "tiktok",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Podcast => "podcast",
            Platform::Blog => "blog",
            Platform::Newsletter => "newsletter",
        }
    }

    /// Human label used inside prompts.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "X (Twitter)",
            Platform::Linkedin => "LinkedIn",
            Platform::Podcast => "Podcast",
            Platform::Blog => "Blog",
            Platform::Newsletter => "Newsletter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Platform {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.slug() == normalized)
            .ok_or_else(|| ApiError::InvalidInput(format!("Unknown platform: {}", s)))
    }
}

/// Format of the piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    ShortForm,
    #[default]
    LongForm,
    Carousel,
    Thread,
    Story,
    Reel,
    Article,
    Episode,
}

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        ContentType::ShortForm,
        ContentType::LongForm,
        ContentType::Carousel,
        ContentType::Thread,
        ContentType::Story,
        ContentType::Reel,
        ContentType::Article,
        ContentType::Episode,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ContentType::ShortForm => "short-form",
            ContentType::LongForm => "long-form",
            ContentType::Carousel => "carousel",
            ContentType::Thread => "thread",
            ContentType::Story => "story",
            ContentType::Reel => "reel",
            ContentType::Article => "article",
            ContentType::Episode => "episode",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::ShortForm => "Short-Form Video",
            ContentType::LongForm => "Long-Form Video",
            ContentType::Carousel => "Carousel Post",
            ContentType::Thread => "Thread",
            ContentType::Story => "Story",
            ContentType::Reel => "Reel",
            ContentType::Article => "Article",
            ContentType::Episode => "Episode",
        }
    }

    /// Platforms this format is usually published on. Advisory only.
    pub fn platforms(self) -> &'static [Platform] {
        use Platform::*;
        match self {
            ContentType::ShortForm => &[Youtube, Tiktok, Instagram],
            ContentType::LongForm => &[Youtube, Podcast],
            ContentType::Carousel => &[Instagram, Linkedin],
            ContentType::Thread => &[Twitter, Linkedin],
            ContentType::Story => &[Instagram, Tiktok],
            ContentType::Reel => &[Instagram, Tiktok, Youtube],
            ContentType::Article => &[Blog, Linkedin, Newsletter],
            ContentType::Episode => &[Podcast, Youtube],
        }
    }

    pub fn supports(self, platform: Platform) -> bool {
        self.platforms().contains(&platform)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ContentType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ContentType::ALL
            .into_iter()
            .find(|c| c.slug() == normalized)
            .ok_or_else(|| ApiError::InvalidInput(format!("Unknown content type: {}", s)))
    }
}

/// Kind of artifact requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationAction {
    GenerateContent,
    GenerateHooks,
    GenerateScript,
    PostingTimes,
    Chat,
}

impl GenerationAction {
    pub const ALL: [GenerationAction; 5] = [
        GenerationAction::GenerateContent,
        GenerationAction::GenerateHooks,
        GenerationAction::GenerateScript,
        GenerationAction::PostingTimes,
        GenerationAction::Chat,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            GenerationAction::GenerateContent => "generate-content",
            GenerationAction::GenerateHooks => "generate-hooks",
            GenerationAction::GenerateScript => "generate-script",
            GenerationAction::PostingTimes => "posting-times",
            GenerationAction::Chat => "chat",
        }
    }

    /// Free-form actions expect prose rather than structured output, so unparsable
    /// text is salvaged into the script field instead of being discarded.
    pub fn is_free_form(self) -> bool {
        matches!(self, GenerationAction::GenerateScript | GenerationAction::Chat)
    }

    /// Number of hooks asked for when the request does not specify a count.
    pub fn default_hook_count(self) -> usize {
        match self {
            GenerationAction::GenerateHooks => 20,
            _ => 5,
        }
    }
}

impl fmt::Display for GenerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for GenerationAction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        GenerationAction::ALL
            .into_iter()
            .find(|a| a.slug() == normalized)
            .ok_or_else(|| ApiError::UnknownAction(s.to_string()))
    }
}

fn default_tone() -> String {
    "Professional".to_string()
}

/// What the creator asked for. Immutable once handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBrief {
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub content_type: ContentType,
    pub topic: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

impl ContentBrief {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            platform: Platform::default(),
            content_type: ContentType::default(),
            topic: topic.into(),
            tone: default_tone(),
            audience: None,
            context: None,
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Reject briefs that cannot be dispatched. Runs before any side effect.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.topic.trim().is_empty() {
            return Err(ApiError::Validation(
                "Please enter a topic for your content.".to_string(),
            ));
        }
        Ok(())
    }

    /// Audience only when it carries text.
    pub fn audience(&self) -> Option<&str> {
        non_blank(self.audience.as_deref())
    }

    /// Additional context only when it carries text.
    pub fn context(&self) -> Option<&str> {
        non_blank(self.context.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn default_niche() -> String {
    "general".to_string()
}

/// Per-request knobs that shape the prompt but not the brief itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    #[serde(default = "default_niche")]
    pub niche: String,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub target_length: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            niche: default_niche(),
            count: None,
            target_length: None,
            style: None,
        }
    }
}

impl GenerationOptions {
    pub const MAX_HOOK_COUNT: usize = 50;

    /// Requested hook count, clamped to a sane range.
    pub fn hook_count(&self, action: GenerationAction) -> usize {
        self.count
            .unwrap_or_else(|| action.default_hook_count())
            .clamp(1, Self::MAX_HOOK_COUNT)
    }

    pub fn target_length(&self) -> &str {
        non_blank(self.target_length.as_deref()).unwrap_or("10-minute")
    }

    pub fn style(&self) -> &str {
        non_blank(self.style.as_deref()).unwrap_or("conversational")
    }
}
