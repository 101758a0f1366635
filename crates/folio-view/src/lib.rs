//! View state for the portfolio page.
//!
//! [`PageView`] owns the only mutable state on the page: the mobile menu
//! flag, the active section and the typing-animation progress. Interaction
//! handlers and the typing timer feed [`Message`]s through [`update`], so
//! every mutation happens in one place on the view's own context.

pub mod page;
pub mod state;
pub mod typing;
pub mod update;

pub use page::{PageView, Viewport};
pub use state::{ScrollBehavior, ScrollRequest, ViewState};
pub use typing::{TypingTimer, DEFAULT_TYPING_INTERVAL};
pub use update::{update, Action, Message};
