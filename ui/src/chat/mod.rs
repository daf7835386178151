//! Interdimensional chat room: the message log, the simulated counterpart and
//! the view that drives them.

mod message;
mod session;
mod view;

pub use message::{Author, Message, MessageKind};
pub use session::{
    ChatConfig, ChatSession, ReplyTicket, SendOutcome, SessionState, CANNED_REPLIES,
    REPLY_DELAY_MS,
};
pub use view::ChatView;
