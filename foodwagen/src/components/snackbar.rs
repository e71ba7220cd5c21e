use std::fmt::Display;

use chrono::Duration;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, PartialEq)]
pub enum MsgType {
    Success,
    Warning,
    Error,
}

#[derive(Clone)]
pub struct SnackbarMsg {
    id: Uuid,
    msg_type: MsgType,
    content: String,
}

impl SnackbarMsg {
    pub fn success(content: String) -> Self {
        SnackbarMsg {
            id: Uuid::new_v4(),
            content,
            msg_type: MsgType::Success,
        }
    }

    pub fn error(content: String) -> Self {
        SnackbarMsg {
            id: Uuid::new_v4(),
            content,
            msg_type: MsgType::Error,
        }
    }

    pub fn warning(content: String) -> Self {
        SnackbarMsg {
            id: Uuid::new_v4(),
            content,
            msg_type: MsgType::Warning,
        }
    }
}

pub trait SnackbarContext {
    fn success(&self, msg: &str);
    fn error(&self, msg: &str, e: impl Display);
    fn warning(&self, msg: &str);
}

/// Toast channel. Failures are surfaced here instead of the console alone,
/// without ever blocking the rest of the UI.
#[component]
pub fn Snackbar(children: ChildrenFn) -> impl IntoView {
    let (messages, set_messages) = signal(vec![]);

    provide_context(set_messages);

    view! {
        {children()}
        <div
            class="fixed bottom-4 left-1/2 -translate-x-1/2 z-20 flex flex-col-reverse items-center gap-2"
            data-testid="snackbar-root"
        >
            <For each=move || messages.get() key=|m: &SnackbarMsg| m.id let:child>
                <div
                    class="rounded-lg px-4 py-2 text-white shadow-md select-none w-fit"
                    class:bg-red-600=child.msg_type == MsgType::Error
                    class:bg-green-600=child.msg_type == MsgType::Success
                    class:bg-orange-500=child.msg_type == MsgType::Warning
                    on:click=move |_| set_messages.write().retain(|msg| msg.id != child.id)
                >
                    {child.content}
                </div>
            </For>
        </div>
    }
}

fn insert_message(snck: &Option<WriteSignal<Vec<SnackbarMsg>>>, msg: SnackbarMsg) {
    let id = msg.id;
    if let Some(ctx) = snck {
        let ctx = *ctx;
        ctx.write().push(msg);
        if let Ok(delay) = Duration::seconds(5).to_std() {
            set_timeout(
                move || {
                    ctx.write().retain(|m| m.id != id);
                },
                delay,
            );
        }
    }
}

impl SnackbarContext for Option<WriteSignal<Vec<SnackbarMsg>>> {
    fn success(&self, msg: &str) {
        insert_message(self, SnackbarMsg::success(msg.to_string()));
    }

    fn error(&self, msg: &str, e: impl Display) {
        insert_message(self, SnackbarMsg::error(format!("{}: {}", msg, e)));
    }

    fn warning(&self, msg: &str) {
        insert_message(self, SnackbarMsg::warning(msg.to_string()));
    }
}

pub fn use_snackbar() -> Option<WriteSignal<Vec<SnackbarMsg>>> {
    use_context::<WriteSignal<Vec<SnackbarMsg>>>()
}
