use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_HIDE_MS: u32 = 6_000;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    pub message: String,
}

/// Status banner. Info and success banners hide themselves.
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        let kind = props.kind;
        use_effect_with(props.message.clone(), move |_| {
            visible.set(true);
            let timeout = (kind != NoticeKind::Error).then(|| {
                let visible = visible.clone();
                Timeout::new(AUTO_HIDE_MS, move || visible.set(false))
            });
            move || drop(timeout)
        });
    }

    if !*visible {
        return html! {};
    }

    let on_close = {
        let visible = visible.clone();
        Callback::from(move |_| visible.set(false))
    };

    html! {
        <div class={props.kind.class()} role="status">
            <span>{&props.message}</span>
            <button type="button" class="notice-close" onclick={on_close}>{"×"}</button>
        </div>
    }
}
