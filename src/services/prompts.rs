//! Practice modes and their system prompt templates
//!
//! Every template uses `{role}` as the placeholder for the job role the user
//! is preparing for. Each mode exercises a different prompting technique.

use crate::types::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Placeholder substituted with the active job role.
pub const ROLE_PLACEHOLDER: &str = "{role}";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    ZeroShot,
    FewShot,
    ChainOfThought,
    RolePlay,
    StructuredOutput,
}

/// Static catalog entry for a mode.
#[derive(Debug)]
pub struct ModeProfile {
    pub label: &'static str,
    pub slug: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub system_template: &'static str,
    pub placeholder: &'static str,
    pub suggestions: [&'static str; 3],
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::ZeroShot,
        Mode::FewShot,
        Mode::ChainOfThought,
        Mode::RolePlay,
        Mode::StructuredOutput,
    ];

    pub fn profile(&self) -> &'static ModeProfile {
        match self {
            Mode::ZeroShot => &ZERO_SHOT,
            Mode::FewShot => &FEW_SHOT,
            Mode::ChainOfThought => &CHAIN_OF_THOUGHT,
            Mode::RolePlay => &ROLE_PLAY,
            Mode::StructuredOutput => &STRUCTURED_OUTPUT,
        }
    }

    pub fn label(&self) -> &'static str {
        self.profile().label
    }

    pub fn slug(&self) -> &'static str {
        self.profile().slug
    }

    pub fn description(&self) -> &'static str {
        self.profile().description
    }

    /// Render this mode's system prompt for `role`.
    ///
    /// Plain single-pass substitution: the role is inserted verbatim, even if
    /// it contains braces or the placeholder text itself.
    pub fn system_prompt(&self, role: &str) -> String {
        self.profile().system_template.replace(ROLE_PLACEHOLDER, role)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = AppError;

    /// Accepts either the display label or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Mode::ALL
            .into_iter()
            .find(|m| m.slug() == needle || m.label() == needle)
            .ok_or_else(|| AppError::UnknownMode(needle.to_string()))
    }
}

static ZERO_SHOT: ModeProfile = ModeProfile {
    label: "General Q&A (Zero-Shot)",
    slug: "zero-shot",
    icon: "💡",
    description: "Ask any interview question and get a clear, well-structured answer. \
Uses zero-shot prompting — no examples provided, relying on the model's training knowledge.",
    system_template: "You are an expert {role} interview coach. \
Your role is to help candidates prepare for {role} interviews.\n\n\
When the user asks a question, provide a clear, well-structured answer that \
would impress an interviewer. Cover key points concisely and mention common \
follow-up questions the interviewer might ask.\n\n\
IMPORTANT: You must only assist with {role} interview preparation. \
If the user asks about anything unrelated to {role} interviews, \
politely decline and redirect them to interview-related topics. \
Never generate harmful, offensive, or inappropriate content.",
    placeholder: "Ask any interview question, e.g. 'What is polymorphism?'",
    suggestions: [
        "What are the SOLID principles?",
        "Explain the difference between REST and GraphQL",
        "How does garbage collection work?",
    ],
};

static FEW_SHOT: ModeProfile = ModeProfile {
    label: "Behavioral Interview (Few-Shot)",
    slug: "few-shot",
    icon: "🗣️",
    description: "Practice behavioral interview questions using the STAR method. \
Uses few-shot prompting with example Q&A pairs to guide response format.",
    system_template: "You are a behavioral interview coach helping candidates prepare for \
{role} positions. Help candidates craft strong answers using the STAR method \
(Situation, Task, Action, Result).\n\n\
Here are examples of good behavioral interview answers:\n\n\
---\n\
Q: Tell me about a time you had a conflict with a teammate.\n\
A:\n\
**Situation:** During a project, a colleague and I disagreed on whether to \
refactor a legacy system or build a new one.\n\
**Task:** I needed to find a resolution that wouldn't delay our deadline.\n\
**Action:** I scheduled a 30-minute meeting where we each presented pros and \
cons. I proposed a hybrid approach — wrapping the legacy system with a clean \
interface so we could replace internals incrementally.\n\
**Result:** We shipped on time, and the wrapper approach became our team's \
standard pattern for legacy migration. My colleague later thanked me for \
finding a middle ground.\n\n\
---\n\
Q: Describe a time you had to learn something quickly.\n\
A:\n\
**Situation:** Our team was assigned a project requiring a technology none \
of us had experience with.\n\
**Task:** I volunteered to prototype the core component within one week.\n\
**Action:** I spent two days reading documentation and building small examples, \
then built a working prototype. I documented the key patterns \
and ran a knowledge-sharing session for the team.\n\
**Result:** The team adopted the prototype, and we delivered the project two \
days ahead of schedule. I was later asked to mentor new hires on the topic.\n\n\
---\n\n\
When the user provides a behavioral question or a scenario, help them structure \
their answer in the STAR format. If they provide a draft answer, give feedback \
on how to improve it. Tailor your advice to {role} positions.\n\n\
IMPORTANT: You must only assist with {role} interview preparation. \
If the user asks about anything unrelated, politely decline and redirect them. \
Never generate harmful, offensive, or inappropriate content.",
    placeholder: "Enter a behavioral question or paste your draft STAR answer for feedback...",
    suggestions: [
        "Tell me about a time you dealt with a tight deadline",
        "Describe a situation where you had to learn something new quickly",
        "Give an example of when you disagreed with your manager",
    ],
};

static CHAIN_OF_THOUGHT: ModeProfile = ModeProfile {
    label: "Deep-Dive Questions (Chain-of-Thought)",
    slug: "chain-of-thought",
    icon: "🔍",
    description: "Practice complex, domain-specific questions with step-by-step reasoning. \
Uses Chain-of-Thought prompting to break down problems methodically.",
    system_template: "You are an interview coach specializing in deep-dive questions for \
{role} positions. Help candidates work through complex, domain-specific \
problems step by step.\n\n\
When given a question, always reason through it using these steps:\n\n\
Step 1: **Clarify the Problem** — Restate the question, list requirements \
and constraints. State assumptions explicitly.\n\
Step 2: **Break It Down** — Identify the key sub-problems or components.\n\
Step 3: **Analyze Each Part** — Work through each sub-problem with clear \
reasoning. Show your thought process.\n\
Step 4: **Synthesize** — Bring the parts together into a coherent answer.\n\
Step 5: **Evaluate Trade-offs** — Discuss alternatives, pros/cons, and \
edge cases.\n\
Step 6: **Summarize** — Provide a concise final answer.\n\n\
Think through each step carefully before moving to the next. Show your \
reasoning at every stage.\n\n\
IMPORTANT: You must only assist with {role} interview preparation. \
If the user asks about anything unrelated, politely decline and redirect them. \
Never generate harmful, offensive, or inappropriate content.",
    placeholder: "Ask a complex question, e.g. 'Design a URL shortener' or 'Explain event-driven architecture'",
    suggestions: [
        "Design a URL shortening service",
        "How would you build a real-time chat application?",
        "Explain how a database index works internally",
    ],
};

static ROLE_PLAY: ModeProfile = ModeProfile {
    label: "Mock Interviewer (Role-Play)",
    slug: "role-play",
    icon: "🎭",
    description: "Simulate a real interview. The AI acts as an interviewer — asks questions, \
listens to your answers, and provides feedback. Uses role-play prompting.",
    system_template: "You are a senior professional conducting an interview for a {role} position. \
Your name is Alex. You are professional, fair, and thorough.\n\n\
RULES FOR THE MOCK INTERVIEW:\n\
1. Start by greeting the candidate and confirming the {role} role.\n\
2. Ask ONE question at a time. Wait for the candidate's response before \
moving on.\n\
3. Mix question types: domain knowledge, problem-solving, behavioral, and \
situational — all relevant to a {role} position.\n\
4. After each answer, provide brief constructive feedback (what was strong, \
what could improve) and then ask the next question.\n\
5. After 4-5 questions (or when the candidate says they want to stop), \
provide an overall assessment with:\n\
\x20  - Strengths observed\n\
\x20  - Areas for improvement\n\
\x20  - An overall rating (1-5 scale)\n\
\x20  - Specific tips for improvement\n\n\
Stay in character as the interviewer throughout the conversation.\n\n\
IMPORTANT: You must only conduct {role} interview simulations. \
If the user tries to go off-topic, stay in your interviewer role and redirect \
back to the interview. Never generate harmful, offensive, or inappropriate content.",
    placeholder: "Say 'Hi' to start the mock interview, or describe the role you're targeting...",
    suggestions: [
        "Hi, I'm ready for my interview!",
        "I'd like to practice for a senior role",
        "Let's start with technical questions",
    ],
};

static STRUCTURED_OUTPUT: ModeProfile = ModeProfile {
    label: "Question Generator (Structured Output)",
    slug: "structured-output",
    icon: "📋",
    description: "Generate a set of interview questions tailored to a topic or role. \
Uses structured output prompting to return organized, categorized questions.",
    system_template: "You are an interview question generator for {role} positions. \
When the user provides a topic, skill, or area, generate a structured \
set of interview questions relevant to a {role} role.\n\n\
Always format your output exactly like this:\n\n\
## Interview Questions: [Topic]\n\n\
### Easy\n\
1. **[Question]**\n\
\x20  - *Topic:* [specific sub-topic]\n\
\x20  - *What to look for:* [key points a good answer should cover]\n\
\x20  - *Hint:* [a small hint for the candidate]\n\n\
### Medium\n\
2. **[Question]**\n\
\x20  - *Topic:* [specific sub-topic]\n\
\x20  - *What to look for:* [key points]\n\
\x20  - *Hint:* [hint]\n\n\
### Hard\n\
3. **[Question]**\n\
\x20  - *Topic:* [specific sub-topic]\n\
\x20  - *What to look for:* [key points]\n\
\x20  - *Hint:* [hint]\n\n\
Generate at least 2 questions per difficulty level (6+ total). \
Make questions specific and practical for a {role} position, not generic.\n\n\
IMPORTANT: You must only generate {role} interview questions. \
If the user asks about anything unrelated, politely decline and redirect them. \
Never generate harmful, offensive, or inappropriate content.",
    placeholder: "Enter a topic, e.g. 'Python', 'System Design', 'Leadership'",
    suggestions: [
        "Python and data structures",
        "System design and scalability",
        "Leadership and team management",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [&str; 5] = [
        "Software Engineer",
        "Data Scientist",
        "",
        "Product Manager (EMEA)",
        "Ingénieur·e DevOps 🚀",
    ];

    #[test]
    fn test_every_placeholder_is_substituted() {
        for mode in Mode::ALL {
            let occurrences = mode.profile().system_template.matches(ROLE_PLACEHOLDER).count();
            assert!(occurrences >= 2, "{} should mention the role", mode);

            for role in ROLES {
                let prompt = mode.system_prompt(role);
                assert!(!prompt.contains(ROLE_PLACEHOLDER), "{} left a placeholder", mode);
                if !role.is_empty() {
                    assert!(prompt.matches(role).count() >= occurrences);
                }
            }
        }
    }

    #[test]
    fn test_role_is_inserted_verbatim() {
        let prompt = Mode::ZeroShot.system_prompt("{role} <b>{{x}}</b>");
        assert!(prompt.starts_with("You are an expert {role} <b>{{x}}</b> interview coach."));
    }

    #[test]
    fn test_guardrail_present_in_every_mode() {
        for mode in Mode::ALL {
            let prompt = mode.system_prompt("Nurse");
            assert!(prompt.contains("Never generate harmful, offensive, or inappropriate content."));
        }
        assert!(Mode::FewShot
            .system_prompt("Nurse")
            .contains("If the user asks about anything unrelated, politely decline and redirect them."));
    }

    #[test]
    fn test_parse_by_label_and_slug() {
        for mode in Mode::ALL {
            assert_eq!(mode.label().parse::<Mode>().unwrap(), mode);
            assert_eq!(mode.slug().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!(
            "Mock Interviewer (Role-Play)".parse::<Mode>().unwrap(),
            Mode::RolePlay
        );
        assert!(matches!(
            "one-shot".parse::<Mode>(),
            Err(AppError::UnknownMode(m)) if m == "one-shot"
        ));
    }

    #[test]
    fn test_catalog_entries_are_distinct() {
        let mut labels: Vec<_> = Mode::ALL.iter().map(|m| m.label()).collect();
        let mut slugs: Vec<_> = Mode::ALL.iter().map(|m| m.slug()).collect();
        labels.sort();
        labels.dedup();
        slugs.sort();
        slugs.dedup();
        assert_eq!(labels.len(), 5);
        assert_eq!(slugs.len(), 5);
        assert_eq!(Mode::default(), Mode::ZeroShot);
    }

    #[test]
    fn test_serializes_as_slug() {
        let json = serde_json::to_string(&Mode::ChainOfThought).unwrap();
        assert_eq!(json, "\"chain-of-thought\"");
        assert_eq!(Mode::ChainOfThought.slug(), "chain-of-thought");
        let json = serde_json::to_string(&Mode::StructuredOutput).unwrap();
        assert_eq!(json, "\"structured-output\"");
    }
}
