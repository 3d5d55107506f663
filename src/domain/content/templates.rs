//! Template catalog and placeholder table.
//!
//! Templates reference placeholders as `{name}`. Each known placeholder has a
//! resolver reading the strategy analysis and a fixed fallback used when the
//! analysis has nothing to offer.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::types::ContentType;
use crate::domain::strategy::StrategyAnalysis;

const POST_TEMPLATES: &[&str] = &[
    "💡 {pillar}: {message} What's your experience with this? {hashtags}",
    "🌟 {insight} - Here's how we're making a difference: {example} {hashtags}",
    "📈 {statistic} Did you know this about {topic}? Share your thoughts! {hashtags}",
    "🎯 {goal} - We're committed to {action}. Join us on this journey! {hashtags}",
    "✨ {value_prop} - Why choose {brand_aspect}? {reasons} {hashtags}",
];

const STORY_TEMPLATES: &[&str] = &[
    "Behind the scenes: {process}",
    "Quick tip: {advice}",
    "Today's focus: {priority}",
    "Team spotlight: {achievement}",
    "Customer love: {testimonial}",
];

const VIDEO_SCRIPT_TEMPLATES: &[&str] = &[
    "Hook: {attention_grabber}\nProblem: {pain_point}\nSolution: {our_approach}\nCall to action: {cta}",
    "Introduction: {brand_intro}\nValue proposition: {main_benefit}\nProof: {social_proof}\nNext steps: {cta}",
];

const BLOG_OUTLINE_TEMPLATES: &[&str] = &[
    "1. Introduction to {topic}\n2. Why {problem} matters\n3. Our solution: {approach}\n4. Case study: {example}\n5. Implementation steps\n6. Conclusion and next steps",
    "1. The challenge of {industry_issue}\n2. Traditional approaches vs. innovation\n3. Our methodology\n4. Results and benefits\n5. Getting started",
];

const EMAIL_TEMPLATES: &[&str] = &[
    "Subject: {compelling_subject}\n\nHi {name},\n\n{personal_intro}\n\n{value_proposition}\n\n{call_to_action}\n\nBest regards,\n{sender}",
];

static CATALOG: Lazy<HashMap<ContentType, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        (ContentType::Post, POST_TEMPLATES),
        (ContentType::Story, STORY_TEMPLATES),
        (ContentType::VideoScript, VIDEO_SCRIPT_TEMPLATES),
        (ContentType::BlogOutline, BLOG_OUTLINE_TEMPLATES),
        (ContentType::Email, EMAIL_TEMPLATES),
    ])
});

/// Ordered templates for a content type. Types without an entry use the post list.
pub fn templates_for(content_type: ContentType) -> &'static [&'static str] {
    CATALOG
        .get(&content_type)
        .copied()
        .unwrap_or(POST_TEMPLATES)
}

/// Round-robin pick: `items[index mod len]`. `items` must be non-empty.
pub fn round_robin<T>(items: &[T], index: usize) -> &T {
    &items[index % items.len()]
}

/// Template for the `index`-th request of a content type.
pub fn select_template(content_type: ContentType, index: usize) -> &'static str {
    *round_robin(templates_for(content_type), index)
}

/// Reads a value out of an analysis, if it has one.
pub type Resolver = fn(&StrategyAnalysis) -> Option<String>;

/// A known placeholder: how to resolve it and what to use otherwise.
#[derive(Clone, Copy)]
pub struct Placeholder {
    pub resolve: Resolver,
    pub fallback: &'static str,
}

/// Name of the placeholder filled with the assembled hashtag string.
pub const HASHTAGS_PLACEHOLDER: &str = "hashtags";

fn none(_: &StrategyAnalysis) -> Option<String> {
    None
}

fn first_pillar(a: &StrategyAnalysis) -> Option<String> {
    a.first_pillar_name().map(str::to_string)
}

fn first_message(a: &StrategyAnalysis) -> Option<String> {
    a.first_key_message().map(str::to_string)
}

fn first_goal(a: &StrategyAnalysis) -> Option<String> {
    a.first_goal().map(str::to_string)
}

fn first_advice(a: &StrategyAnalysis) -> Option<String> {
    a.first_recommendation_description().map(str::to_string)
}

fn entry(resolve: Resolver, fallback: &'static str) -> Placeholder {
    Placeholder { resolve, fallback }
}

static PLACEHOLDERS: Lazy<HashMap<&'static str, Placeholder>> = Lazy::new(|| {
    HashMap::from([
        ("pillar", entry(first_pillar, "Innovation")),
        ("message", entry(first_message, "Quality is our commitment")),
        ("insight", entry(first_goal, "Success through innovation")),
        ("example", entry(none, "client success story")),
        (
            "statistic",
            entry(none, "87% of our clients see improvement within 30 days"),
        ),
        ("topic", entry(first_pillar, "success strategies")),
        ("goal", entry(first_goal, "excellence in everything we do")),
        ("action", entry(none, "providing outstanding value")),
        ("value_prop", entry(first_message, "Unmatched quality and service")),
        ("brand_aspect", entry(none, "our approach")),
        (
            "reasons",
            entry(none, "proven results, dedicated support, innovative solutions"),
        ),
        ("process", entry(none, "how we create amazing results")),
        ("advice", entry(first_advice, "focus on what matters most")),
        ("priority", entry(first_pillar, "customer success")),
        ("achievement", entry(none, "exceeding client expectations")),
        (
            "testimonial",
            entry(none, "amazing results that speak for themselves"),
        ),
        (
            "attention_grabber",
            entry(none, "Are you ready to transform your results?"),
        ),
        ("pain_point", entry(none, "the challenge you're facing")),
        ("our_approach", entry(first_message, "our proven methodology")),
        ("cta", entry(none, "Get started today!")),
        ("brand_intro", entry(none, "We're passionate about your success")),
        ("main_benefit", entry(first_goal, "exceptional outcomes")),
        ("social_proof", entry(none, "500+ satisfied clients")),
        ("problem", entry(none, "common industry challenges")),
        ("approach", entry(none, "innovative solutions")),
        ("industry_issue", entry(none, "market challenges")),
        ("compelling_subject", entry(none, "Transform your results today")),
        ("personal_intro", entry(none, "Hope you're having a great day!")),
        ("value_proposition", entry(first_message, "exclusive benefits")),
        (
            "call_to_action",
            entry(none, "Ready to get started? Let's talk!"),
        ),
        ("name", entry(none, "[Name]")),
        ("sender", entry(none, "[Your Name]")),
    ])
});

/// Looks up a known placeholder by name (without braces).
pub fn placeholder(name: &str) -> Option<&'static Placeholder> {
    PLACEHOLDERS.get(name)
}

/// Resolves a known placeholder against an analysis, falling back when absent.
pub fn resolve_placeholder(name: &str, analysis: &StrategyAnalysis) -> Option<String> {
    placeholder(name)
        .map(|p| (p.resolve)(analysis).unwrap_or_else(|| p.fallback.to_string()))
}
