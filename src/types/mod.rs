pub mod errors;
pub mod message;
pub mod session;

pub use errors::AppError;
pub use message::{ChatForm, Message, MessageRole, ModeForm, RoleForm, SessionForm, TemperatureForm};
pub use session::{Session, SessionDefaults, SessionStats, TurnState, MAX_INPUT_LENGTH};
