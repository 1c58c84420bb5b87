//! Chat page and panel rendering

use super::TemplateEngine;
use crate::services::prompts::Mode;
use crate::types::session::{MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::types::{AppError, MessageRole, Session, SessionStats, MAX_INPUT_LENGTH};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ModeOption {
    pub slug: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub role: MessageRole,
    pub content: String,
}

/// Everything the page and panel templates need, snapshotted from a session.
#[derive(Debug, Serialize)]
pub struct ChatView {
    pub session_id: String,
    pub mode_slug: &'static str,
    pub mode_label: &'static str,
    pub mode_icon: &'static str,
    pub mode_description: &'static str,
    pub placeholder: &'static str,
    pub suggestions: &'static [&'static str],
    pub modes: Vec<ModeOption>,
    pub role: String,
    pub temperature: String,
    pub min_temperature: f32,
    pub max_temperature: f32,
    pub messages: Vec<MessageView>,
    pub stats: SessionStats,
    pub max_input_length: usize,
    pub notice: Option<String>,
}

impl ChatView {
    pub fn from_session(session: &Session) -> Self {
        let mode = session.mode();
        let profile = mode.profile();

        Self {
            session_id: session.id.clone(),
            mode_slug: profile.slug,
            mode_label: profile.label,
            mode_icon: profile.icon,
            mode_description: profile.description,
            placeholder: profile.placeholder,
            suggestions: &profile.suggestions,
            modes: Mode::ALL
                .into_iter()
                .map(|m| ModeOption {
                    slug: m.slug(),
                    label: m.label(),
                    icon: m.profile().icon,
                    selected: m == mode,
                })
                .collect(),
            role: session.role().to_string(),
            temperature: format!("{:.1}", session.temperature()),
            min_temperature: MIN_TEMPERATURE,
            max_temperature: MAX_TEMPERATURE,
            messages: session
                .messages()
                .iter()
                .map(|m| MessageView {
                    role: m.role,
                    content: m.content.clone(),
                })
                .collect(),
            stats: session.stats(),
            max_input_length: MAX_INPUT_LENGTH,
            notice: None,
        }
    }

    /// Attach a user-facing error shown inline in the panel.
    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

impl TemplateEngine {
    /// Render the full chat page
    pub fn render_chat_page(&self, view: &ChatView) -> Result<String, AppError> {
        self.render("index.html", view)
    }

    /// Render the swappable chat panel
    pub fn render_panel(&self, view: &ChatView) -> Result<String, AppError> {
        self.render("panel.html", view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SessionDefaults;

    fn engine() -> TemplateEngine {
        TemplateEngine::new().unwrap()
    }

    #[test]
    fn test_empty_panel_shows_welcome_and_suggestions() {
        let session = Session::new(&SessionDefaults::default());
        let html = engine().render_panel(&ChatView::from_session(&session)).unwrap();

        assert!(html.contains("Ready to practice!"));
        assert!(html.contains("What are the SOLID principles?"));
        assert!(html.contains("Ask any interview question, e.g."));
        assert!(html.contains("Software Engineer"));
    }

    #[test]
    fn test_panel_renders_messages() {
        let mut session = Session::new(&SessionDefaults::default());
        session.begin_turn("<b>What is overfitting?</b>").unwrap();
        session
            .finish_turn(Ok(crate::services::llm::ChatReply {
                content: "**Overfitting** means memorizing noise.".to_string(),
            }))
            .unwrap();

        let html = engine().render_panel(&ChatView::from_session(&session)).unwrap();
        assert!(!html.contains("Ready to practice!"));
        assert!(html.contains("&lt;b&gt;What is overfitting?"));
        assert!(html.contains("<strong>Overfitting</strong> means memorizing noise."));
        assert!(html.contains("Questions Asked"));
    }

    #[test]
    fn test_notice_is_rendered() {
        let session = Session::new(&SessionDefaults::default());
        let view = ChatView::from_session(&session)
            .with_notice("Input too long (2001 characters). Please keep it under 2000 characters.");
        let html = engine().render_panel(&view).unwrap();
        assert!(html.contains("Input too long (2001 characters)"));
    }

    #[test]
    fn test_page_marks_selected_mode() {
        let mut session = Session::new(&SessionDefaults::default());
        session.select_mode(Mode::RolePlay);
        let view = ChatView::from_session(&session);

        assert_eq!(view.modes.iter().filter(|m| m.selected).count(), 1);
        let html = engine().render_chat_page(&view).unwrap();
        assert!(html.contains(r#"value="role-play" selected"#));
        assert!(html.contains(&session.id));
        assert!(html.contains("Mock Interviewer (Role-Play)"));
    }

    #[test]
    fn test_settings_controls_remember_session_values() {
        let mut session = Session::new(&SessionDefaults::default());
        session.select_mode(Mode::FewShot);
        session.set_role("Nurse");
        session.set_temperature(1.2);
        let html = engine().render_chat_page(&ChatView::from_session(&session)).unwrap();

        assert!(html.contains(r#"data-committed="few-shot""#));
        assert!(html.contains(r#"data-committed="Nurse""#));
        assert!(html.contains(r#"data-committed="1.2""#));
        assert!(html.contains(".sidebar select, .sidebar input, .sidebar button"));
    }

    #[test]
    fn test_message_view_roles() {
        let mut session = Session::new(&SessionDefaults::default());
        session.begin_turn("hi").unwrap();
        let view = ChatView::from_session(&session);
        assert_eq!(view.messages.len(), 1);
        assert_eq!(view.messages[0].role, MessageRole::User);
        assert_eq!(view.temperature, "0.7");
    }
}
