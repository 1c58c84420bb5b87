pub mod llm;
pub mod prompts;
mod session;
pub mod template;

pub use llm::{ChatModel, OpenAIClient};
pub use prompts::Mode;
pub use session::{SessionHandle, SessionManager};
