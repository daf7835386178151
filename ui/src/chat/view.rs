use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::{format, timing};
use crate::t;

use super::message::Message;
use super::session::{ChatSession, ReplyTicket, SendOutcome};

type SenderSlot = Rc<RefCell<Option<UnboundedSender<ChatEvent>>>>;
type ReplyTasks = Rc<RefCell<ReplyTimers<Task>>>;

#[component]
pub fn ChatView() -> Element {
    let session = use_signal(|| ChatSession::seeded(timing::now()));
    let mut draft = use_signal(String::new);
    let mut log_end = use_signal(|| Option::<Rc<MountedData>>::None);

    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let reply_tasks: ReplyTasks = use_hook(|| Rc::new(RefCell::new(ReplyTimers::default())));

    let coroutine = {
        let sender_slot = sender_slot.clone();
        let reply_tasks = reply_tasks.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<ChatEvent>| {
            let sender_slot = sender_slot.clone();
            let reply_tasks = reply_tasks.clone();
            let mut session_signal = session;
            let mut draft_signal = draft;

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        ChatEvent::Send(text) => {
                            let outcome =
                                session_signal.with_mut(|s| s.send(&text, timing::now()));
                            match outcome {
                                SendOutcome::Sent { ticket, .. } => {
                                    draft_signal.set(String::new());
                                    queue_reply(&sender_slot, &reply_tasks, ticket);
                                }
                                SendOutcome::Ignored => {}
                            }
                        }
                        ChatEvent::ReplyDue(ticket) => {
                            reply_tasks.borrow_mut().finish(ticket.seq);
                            session_signal.with_mut(|s| {
                                s.deliver_reply(ticket, &mut rand::thread_rng(), timing::now());
                            });
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    // Replies must not outlive the room: cancel timers, then close the session
    // so any ticket already in flight is rejected.
    {
        let reply_tasks = reply_tasks.clone();
        let mut session = session;
        use_drop(move || {
            for task in reply_tasks.borrow_mut().drain() {
                task.cancel();
            }
            if let Ok(mut s) = session.try_write() {
                let dropped = s.close();
                debug!(dropped, "chat view unmounted");
            }
        });
    }

    // Keep the newest message in view.
    use_effect(move || {
        let _len = session.read().len();
        let _typing = session.read().is_awaiting_reply();
        if let Some(anchor) = log_end() {
            spawn(async move {
                let _ = anchor.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    });

    let send_draft = move || coroutine.send(ChatEvent::Send(draft()));

    let (messages, typing) = {
        let snapshot = session.read();
        (snapshot.messages().to_vec(), snapshot.is_awaiting_reply())
    };
    let can_send = !draft().trim().is_empty();

    rsx! {
        article { class: "card chat",
            div { class: "chat__log", role: "log", aria_live: "polite",
                for message in messages {
                    ChatBubble { key: "{message.id}", message: message.clone() }
                }

                if typing {
                    div { class: "chat-message chat-message--typing",
                        aria_label: t!("chat-typing"),
                        span { class: "chat-avatar chat-avatar--unknown", "?" }
                        div { class: "chat-typing",
                            span { class: "chat-typing__dot" }
                            span { class: "chat-typing__dot" }
                            span { class: "chat-typing__dot" }
                        }
                    }
                }

                div {
                    class: "chat__log-end",
                    onmounted: move |evt| log_end.set(Some(evt.data())),
                }
            }

            div { class: "chat__composer",
                div { class: "chat__tools",
                    button { r#type: "button", class: "button button--ghost chat__tool", title: t!("chat-attach"), "📎" }
                    button { r#type: "button", class: "button button--ghost chat__tool", title: t!("chat-image"), "🖼" }
                    button { r#type: "button", class: "button button--ghost chat__tool", title: t!("chat-voice"), "🎤" }
                    button { r#type: "button", class: "button button--ghost chat__tool", title: t!("chat-emoji"), "😊" }
                }

                input {
                    class: "input chat__input",
                    r#type: "text",
                    placeholder: t!("chat-placeholder"),
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if is_send_key(&evt.key()) {
                            evt.prevent_default();
                            send_draft();
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "button button--primary chat__send",
                    aria_label: t!("chat-send"),
                    disabled: !can_send,
                    onclick: move |_| send_draft(),
                    "➤"
                }
            }
        }
    }
}

#[component]
fn ChatBubble(message: Message) -> Element {
    let author = message.author;
    let time_label = format::format_clock(message.sent_at, timing::local_offset());
    let row_class = if author.is_self() {
        "chat-message chat-message--own"
    } else {
        "chat-message"
    };

    rsx! {
        div { class: row_class,
            span { class: "chat-avatar {author.avatar_class()}", "{author.initial()}" }
            div { class: "chat-message__content",
                div { class: "chat-message__meta",
                    span { class: "chat-message__author", "{author.label()}" }
                    span { class: "chat-message__time", "{time_label}" }
                }
                div { class: "chat-message__bubble", "{message.body}" }
            }
        }
    }
}

fn queue_reply(sender_slot: &SenderSlot, reply_tasks: &ReplyTasks, ticket: ReplyTicket) {
    let Some(sender) = sender_slot.borrow().as_ref().cloned() else {
        return;
    };
    let task = spawn(async move {
        timing::sleep_ms(ticket.delay_ms).await;
        let _ = sender.unbounded_send(ChatEvent::ReplyDue(ticket));
    });
    reply_tasks.borrow_mut().track(ticket.seq, task);
}

fn is_send_key(key: &Key) -> bool {
    *key == Key::Enter
}

/// Reply timers still sleeping, keyed by ticket sequence. A timer leaves the
/// map when its reply is handled, so only live timers are cancelled on drop.
#[derive(Debug)]
struct ReplyTimers<H> {
    live: HashMap<u64, H>,
}

impl<H> Default for ReplyTimers<H> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
        }
    }
}

impl<H> ReplyTimers<H> {
    fn track(&mut self, seq: u64, handle: H) {
        self.live.insert(seq, handle);
    }

    fn finish(&mut self, seq: u64) -> Option<H> {
        self.live.remove(&seq)
    }

    fn drain(&mut self) -> impl Iterator<Item = H> + '_ {
        self.live.drain().map(|(_, handle)| handle)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.live.len()
    }
}

#[derive(Debug, Clone)]
enum ChatEvent {
    Send(String),
    ReplyDue(ReplyTicket),
}
