pub mod attempt;
pub mod focus_session;
pub mod rule;

pub use attempt::BlockedAppAttempt;
pub use focus_session::FocusSession;
pub use rule::{BlockingRule, RuleInput, RuleUpdate};
