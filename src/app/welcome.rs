//! Bundled welcome page.

use serde::Serialize;

use super::Application;
use crate::http::RequestContext;
use crate::render::{escape_html, HeadContent, View};
use crate::store::StateStore;

#[derive(Debug, Clone, Serialize)]
pub struct WelcomeState {
    pub title: String,
    pub message: String,
    pub path: String,
}

/// Renders a greeting for whatever path was requested.
#[derive(Debug, Clone)]
pub struct WelcomeApp {
    title: String,
}

impl WelcomeApp {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for WelcomeApp {
    fn default() -> Self {
        Self::new("Welcome")
    }
}

impl Application for WelcomeApp {
    type State = WelcomeState;

    fn create_store(&self, ctx: &RequestContext) -> StateStore<WelcomeState> {
        let (handle, store) = StateStore::channel();
        let state = WelcomeState {
            title: self.title.clone(),
            message: "Rendered on the server".to_string(),
            path: ctx.path().to_string(),
        };

        // Settles on the next scheduler tick, like a driver resolving its
        // initial state.
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            handle.emit(state);
        });

        store
    }

    fn render(&self, state: &WelcomeState, _ctx: &RequestContext) -> View {
        let markup = format!(
            "<div class=\"welcome\"><h1>{}</h1><p>{}</p><p>Path: <code>{}</code></p></div>",
            escape_html(&state.title),
            escape_html(&state.message),
            escape_html(&state.path),
        );

        let head = HeadContent::new(state.title.clone())
            .with_meta("description", &state.message);

        View::new(markup, head)
    }
}
