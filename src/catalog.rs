//! Fallback Content Catalog
//!
//! Hand-curated packages compiled into the binary, one per generation action. Used
//! wholesale when the provider is unreachable or its text cannot be parsed, and field
//! by field when parsing only partially succeeds. Entries never depend on the brief so
//! the same input always yields the same output.

use crate::brief::GenerationAction;
use crate::package::{ContentPackage, PackageField};

const CONTENT_HOOKS: [&str; 5] = [
    "Nobody tells you this about growing on social media, but after reaching 1M followers, I can tell you the #1 mistake creators make is...",
    "I spent $10,000 testing content strategies so you don't have to. Here are the 3 that actually work in 2026...",
    "Stop doing THIS if you want to grow. I wasted 2 years before I figured this out.",
    "The algorithm doesn't hate you -- you're just making this one critical mistake that 97% of creators don't know about.",
    "What if I told you that your content isn't the problem? After coaching 500+ creators, I found that the REAL issue is...",
];

const CONTENT_SCRIPT: &str = r#"COLD OPEN (0:00-0:15):
"What if I told you that 97% of content creators are making a critical mistake that's killing their growth?"

INTRO (0:15-0:45):
"Hey everyone, welcome back. Today I'm sharing something that completely changed how I approach content creation."

CHAPTER 1: THE PROBLEM (0:45-3:00):
"Most creators focus on the WRONG metrics. They obsess over views and followers, but completely ignore the metric that actually drives growth."

CHAPTER 2: THE FRAMEWORK (3:00-7:00):
"I call this the Content Depth Framework, and it has three pillars: Hook Hierarchy, Value Stack, and Engagement Loop."

OUTRO:
"If this video helped you, like and subscribe. Drop a comment telling me your biggest content creation challenge.""#;

const CONTENT_CAPTION: &str = "The #1 mistake killing your content growth (and what to do instead).

I analyzed 500+ creators to find what separates the top 1% from everyone else.

The answer? It's not about posting more. It's about DEPTH.

Save this and implement it in your next piece of content.";

const CONTENT_HASHTAGS: [&str; 15] = [
    "#contentcreator",
    "#contentcreation",
    "#growthhacking",
    "#socialmediatips",
    "#creatoreconomy",
    "#contentstrategy",
    "#socialmediamarketing",
    "#youtubergrowth",
    "#creatortips",
    "#contentmarketing",
    "#digitalmarketing",
    "#growthstrategy",
    "#viralcontent",
    "#algorithmsecrets",
    "#creatorlife",
];

const CONTENT_B_ROLL: [&str; 5] = [
    "Scrolling through social media feeds on phone (close-up shot)",
    "Typing on laptop showing analytics dashboard",
    "Time-lapse of content planning whiteboard session",
    "Split screen comparison of two creator profiles",
    "Screen recording of actual content planning document",
];

const CONTENT_THUMBNAIL: &str = r#"MAIN IMAGE: Split screen showing a frustrated creator on the left vs. a confident, successful creator on the right.

TEXT OVERLAY: "THE #1 MISTAKE" in bold text at the top, with "97% of Creators Make" below.

STYLE: High contrast, slightly oversaturated. Red/orange tint on the "before" side, green/blue tint on the "after" side."#;

/// Four hooks in each of the five styles: controversial, curiosity, story, stat, question.
const HOOK_LIBRARY: [&str; 20] = [
    "Everything your favorite guru told you about growing an audience is wrong.",
    "Posting every day is a lie, and here's the proof nobody wants you to see.",
    "Stop listening to growth advice from 2019. 90% of it is outdated.",
    "The platforms don't want you to know this about reach.",
    "I found a loophole in the algorithm that changed everything...",
    "There's a hidden pattern in viral posts that nobody talks about.",
    "This one simple change to my intros doubled my watch time in 30 days.",
    "I accidentally discovered why my best videos flopped. Here's what happened...",
    "6 months ago, I had 200 followers. Then I discovered...",
    "My first viral post was a complete accident. Here's what I learned.",
    "I remember the exact moment creating content changed my life forever.",
    "The day my channel got demonetized was the best thing that ever happened.",
    "97% of creators get their first 3 seconds wrong. Here's what the data shows.",
    "Studies show strong hooks can increase retention by 340%. Here's how.",
    "Only 3% of creators know this about watch time. The numbers don't lie.",
    "I analyzed 1,000 viral videos. The results were shocking.",
    "What if everything you know about going viral is based on outdated advice?",
    "Have you ever wondered why some creators blow up while others stall?",
    "What would you do if you could double your views in just 30 days?",
    "Why do 95% of creators quit within their first year?",
];

const HOOKS_CAPTION: &str = "20 scroll-stopping hooks across 5 styles. Pick one, film it today, and tell me which style performed best.";

const SCRIPT_BODY: &str = r#"COLD OPEN (0:00 - 0:20)
[DELIVERY NOTE: Look straight into the lens, no intro music yet.]
"What if I told you that everything you know about this topic is based on advice that's completely outdated?"

INTRO (0:20 - 1:00)
"Hey everyone, welcome back. Today I'm breaking down the framework I wish I had on day one."

SECTION 1: THE FOUNDATION (1:00 - 4:00)
[TIMESTAMP 1:00] "Let's start with the basics, because most people skip them."
[DELIVERY NOTE: Slow down here, this is the part viewers rewatch.]

SECTION 2: THE STRATEGY (4:00 - 8:00)
[TIMESTAMP 4:00] "Now here's where it gets interesting."
[CTA PLACEMENT: Mid-roll subscribe reminder.]

SECTION 3: IMPLEMENTATION (8:00 - 12:00)
[TIMESTAMP 8:00] "Let me show you exactly how to implement this, step by step."

OUTRO (12:00 - 13:00)
"If this helped, like this video and subscribe for more. Tell me in the comments which step you're starting with.""#;

const POSTING_SLOTS: [&str; 5] = [
    "Tuesday 9:00 AM -- commute scrolling peaks before the workday starts",
    "Wednesday 12:00 PM -- lunch-break browsing drives fast early engagement",
    "Thursday 7:00 PM -- evening sessions are the longest of the week",
    "Saturday 10:00 AM -- relaxed weekend viewers watch long-form content",
    "Sunday 6:00 PM -- planning-mode audiences save and share more",
];

const POSTING_SCRIPT: &str = "Posting schedule for the week:

1. Tuesday 9:00 AM -- publish your strongest short-form piece.
2. Wednesday 12:00 PM -- follow up with a carousel or thread.
3. Thursday 7:00 PM -- release long-form content for evening viewers.
4. Saturday 10:00 AM -- share behind-the-scenes or community posts.
5. Sunday 6:00 PM -- post a teaser for next week's content.

Test each slot for two weeks, then double down on the top performers.";

const CHAT_SCRIPT: &str = "Here's a quick plan to get your next piece of content moving:

1. Pick one specific problem your audience has this week.
2. Open with a bold claim or a surprising number in the first 3 seconds.
3. Deliver one actionable takeaway instead of five shallow ones.
4. End with a question that invites comments.

Tell me your topic and platform and I'll turn this into hooks, a script, and a caption.";

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn content_package() -> ContentPackage {
    ContentPackage {
        hooks: owned(&CONTENT_HOOKS),
        script: CONTENT_SCRIPT.to_string(),
        caption: CONTENT_CAPTION.to_string(),
        hashtags: owned(&CONTENT_HASHTAGS),
        b_roll_list: owned(&CONTENT_B_ROLL),
        thumbnail_concept: CONTENT_THUMBNAIL.to_string(),
    }
}

fn hooks_package() -> ContentPackage {
    ContentPackage {
        hooks: owned(&HOOK_LIBRARY),
        caption: HOOKS_CAPTION.to_string(),
        ..content_package()
    }
}

fn script_package() -> ContentPackage {
    ContentPackage {
        script: SCRIPT_BODY.to_string(),
        ..content_package()
    }
}

fn posting_times_package() -> ContentPackage {
    ContentPackage {
        hooks: owned(&POSTING_SLOTS),
        script: POSTING_SCRIPT.to_string(),
        ..content_package()
    }
}

fn chat_package() -> ContentPackage {
    ContentPackage {
        script: CHAT_SCRIPT.to_string(),
        ..content_package()
    }
}

/// Static lookup over the compiled-in packages.
pub struct FallbackCatalog;

impl FallbackCatalog {
    /// Full package for an action.
    pub fn entry(action: GenerationAction) -> ContentPackage {
        match action {
            GenerationAction::GenerateContent => content_package(),
            GenerationAction::GenerateHooks => hooks_package(),
            GenerationAction::GenerateScript => script_package(),
            GenerationAction::PostingTimes => posting_times_package(),
            GenerationAction::Chat => chat_package(),
        }
    }

    /// Catalog sequence for one field of an action's entry.
    pub fn sequence(action: GenerationAction, field: PackageField) -> Vec<String> {
        Self::entry(action)
            .sequence(field)
            .map(|items| items.to_vec())
            .unwrap_or_default()
    }

    /// Catalog scalar for one field of an action's entry.
    pub fn scalar(action: GenerationAction, field: PackageField) -> String {
        Self::entry(action)
            .scalar(field)
            .map(str::to_string)
            .unwrap_or_default()
    }
}
