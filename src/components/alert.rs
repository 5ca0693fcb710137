//! Inline alert with the four severities and an auto-dismiss timer.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Error,
    Info,
}

impl AlertKind {
    pub fn title_fr(&self) -> &'static str {
        match self {
            AlertKind::Success => "Succès !",
            AlertKind::Warning => "Attention",
            AlertKind::Error => "Erreur !",
            AlertKind::Info => "Information",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success shadow-lg",
            AlertKind::Warning => "alert alert-warning shadow-lg",
            AlertKind::Error => "alert alert-error shadow-lg",
            AlertKind::Info => "alert alert-info shadow-lg",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertMessage {
    pub kind: AlertKind,
    pub text: String,
}

impl AlertMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            text: text.into(),
        }
    }
}

/// Renders the current alert, clearing it after a few seconds.
#[component]
pub fn Alert(
    message: ReadSignal<Option<AlertMessage>>,
    set_message: WriteSignal<Option<AlertMessage>>,
) -> impl IntoView {
    Effect::new(move |_| {
        if message.get().is_some() {
            set_timeout(
                move || set_message.set(None),
                std::time::Duration::from_secs(4),
            );
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class=move || message.get().map(|m| m.kind.class()).unwrap_or_default()>
                <span class="font-bold">
                    {move || message.get().map(|m| m.kind.title_fr()).unwrap_or_default()}
                </span>
                <span>{move || message.get().map(|m| m.text).unwrap_or_default()}</span>
                <button class="btn btn-ghost btn-xs" on:click=move |_| set_message.set(None)>
                    "✕"
                </button>
            </div>
        </Show>
    }
}
