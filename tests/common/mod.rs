//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use ssr_server::app::Application;
use ssr_server::http::{HttpServer, RequestContext};
use ssr_server::render::{HeadContent, RenderPipeline, View, ViewTemplate};
use ssr_server::{ServerConfig, Shutdown, StateStore, StoreError};
use tokio::net::TcpListener;

/// How the scripted store behaves.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum Script {
    /// Emit one snapshot, after `?delay=<ms>` if given.
    Emit,
    /// Emit two snapshots; only the first may be rendered.
    EmitTwice,
    /// Fail before emitting.
    Fail,
    /// Complete without emitting.
    Empty,
    /// Never emit, never complete.
    Hang,
    /// Emit, then panic while rendering.
    PanicInRender,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageState {
    pub title: String,
    pub path: String,
}

/// Test application with a scripted store and a store construction counter.
#[derive(Clone)]
pub struct ScriptedApp {
    script: Script,
    stores: Arc<AtomicUsize>,
}

impl ScriptedApp {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            stores: Arc::new(AtomicUsize::new(0)),
        }
    }

    #[allow(dead_code)]
    pub fn stores_created(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }
}

fn delay_of(ctx: &RequestContext) -> Option<Duration> {
    ctx.uri
        .query()?
        .split('&')
        .find_map(|pair| pair.strip_prefix("delay="))
        .and_then(|ms| ms.parse().ok())
        .map(Duration::from_millis)
}

fn state_for(ctx: &RequestContext) -> PageState {
    let name = ctx.path().trim_matches('/');
    PageState {
        title: format!("page {}", if name.is_empty() { "home" } else { name }),
        path: ctx.path().to_string(),
    }
}

impl Application for ScriptedApp {
    type State = PageState;

    fn create_store(&self, ctx: &RequestContext) -> StateStore<PageState> {
        self.stores.fetch_add(1, Ordering::SeqCst);

        let (handle, store) = StateStore::channel();
        let state = state_for(ctx);
        let delay = delay_of(ctx);
        let script = self.script;

        tokio::spawn(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            match script {
                Script::Emit | Script::PanicInRender => {
                    handle.emit(state);
                }
                Script::EmitTwice => {
                    let mut second = state.clone();
                    second.title = "second snapshot".to_string();
                    handle.emit(state);
                    handle.emit(second);
                }
                Script::Fail => {
                    handle.fail(StoreError::new("backend unavailable"));
                }
                Script::Empty => drop(handle),
                Script::Hang => {
                    std::future::pending::<()>().await;
                    drop(handle);
                }
            }
        });

        store
    }

    fn render(&self, state: &PageState, _ctx: &RequestContext) -> View {
        if let Script::PanicInRender = self.script {
            panic!("render exploded");
        }

        View::new(
            format!("<h1>{}</h1><p>{}</p>", state.title, state.path),
            HeadContent::new(state.title.clone()).with_meta("description", &state.title),
        )
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("server unreachable")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a server on an ephemeral port with test defaults, then let
/// `configure` adjust the config.
pub async fn start_server<A, F>(app: A, configure: F) -> TestServer
where
    A: Application,
    F: FnOnce(&mut ServerConfig),
{
    let mut config = ServerConfig::default();
    config.listener.host = "127.0.0.1".to_string();
    config.listener.port = 0;
    config.static_files.enabled = false;
    config.render.timeout_ms = 500;
    configure(&mut config);

    let template = ViewTemplate::load(None).unwrap();
    let pipeline = RenderPipeline::new(Arc::new(app), Arc::new(template), config.render.timeout());

    let listener = TcpListener::bind(config.listener.bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, Arc::new(pipeline));
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    TestServer {
        addr,
        client,
        shutdown,
    }
}

/// Parse a `Response-Time` header into milliseconds.
#[allow(dead_code)]
pub fn response_time_ms(res: &reqwest::Response) -> f64 {
    let value = res
        .headers()
        .get("response-time")
        .expect("missing Response-Time header")
        .to_str()
        .unwrap();
    let millis = value
        .strip_suffix("ms")
        .expect("Response-Time must end in ms");
    let (_, fraction) = millis.split_once('.').expect("Response-Time must have decimals");
    assert_eq!(fraction.len(), 3, "Response-Time {} not at microsecond resolution", value);
    millis.parse().unwrap()
}
