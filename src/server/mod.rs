//! Development server with live reload

use anyhow::Result;
use axum::{
    body::Body,
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebouncedEvent};
use percent_encoding::percent_decode_str;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;

use crate::Site;

const LIVE_RELOAD_PATH: &str = "/__livereload";

/// Appended to every HTML page while watching
const LIVE_RELOAD_SCRIPT: &str = r#"<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        }
    };
    ws.onclose = function() {
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
"#;

/// How `landing-rs server` runs
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub ip: String,
    pub port: u16,
    /// Regenerate on change and reload connected pages
    pub watch: bool,
    pub open: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
            watch: true,
            open: false,
        }
    }
}

struct ServerState {
    public_dir: PathBuf,
    /// Site root, e.g. `/` or `/docs/`
    root: String,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

/// Serve the public directory until interrupted
pub async fn start(site: &Site, options: ServerOptions) -> Result<()> {
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        public_dir: site.public_dir.clone(),
        root: site.config.root.clone(),
        reload_tx: reload_tx.clone(),
        live_reload: options.watch,
    });

    let app = Router::new()
        .route(LIVE_RELOAD_PATH, get(livereload_handler))
        .fallback(fallback_handler)
        .with_state(state);

    let bind_ip = if options.ip == "localhost" {
        "127.0.0.1"
    } else {
        options.ip.as_str()
    };
    let addr: SocketAddr = format!("{}:{}", bind_ip, options.port).parse()?;

    let url = format!("http://{}:{}{}", options.ip, options.port, site.config.root);
    tracing::info!("Server running at {}", url);
    if options.watch {
        tracing::info!("Live reload enabled. Watching for changes...");
    }
    tracing::info!("Press Ctrl+C to stop.");

    if options.open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if options.watch {
        let site = site.clone();
        // the debouncer delivers on a std channel, so keep it off the async workers
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(&site, reload_tx) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Regenerate on every debounced batch of relevant changes
fn watch_and_reload(site: &Site, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&site.content_dir, &site.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }

    let config_path = site.config_path();
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    for result in rx {
        let events = match result {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
                continue;
            }
        };

        let changed: Vec<&DebouncedEvent> =
            events.iter().filter(|e| !is_ignored(&e.path)).collect();
        if changed.is_empty() {
            continue;
        }
        for event in &changed {
            tracing::info!("File changed: {}", event.path.display());
        }

        // pick up config edits as well as content
        match Site::new(&site.base_dir).and_then(|site| site.generate()) {
            Ok(()) => {
                tracing::info!("Regenerated successfully");
                let _ = reload_tx.send(());
            }
            Err(e) => tracing::error!("Generation failed: {:#}", e),
        }
    }

    Ok(())
}

/// Editor droppings and VCS files
fn is_ignored(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.ends_with('~')
        || name.ends_with(".swp")
        || name == ".DS_Store"
        || path
            .components()
            .any(|c| c.as_os_str() == ".git" || c.as_os_str() == "node_modules")
}

async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            result = reload_rx.recv() => match result {
                Ok(()) => {
                    if socket.send(Message::Text("reload".to_string())).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            },
            msg = socket.recv() => match msg {
                Some(Ok(Message::Ping(data))) => {
                    if socket.send(Message::Pong(data)).await.is_err() {
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                _ => {}
            },
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// HTML pages get the reload script; everything else goes to `ServeDir`
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let resolved = resolve_path(&state.public_dir, &state.root, request.uri().path());

    if state.live_reload {
        if let Some(file_path) = resolved.as_deref().filter(|p| is_html(p)) {
            return match tokio::fs::read_to_string(file_path).await {
                Ok(content) => Html(inject_live_reload(&content)).into_response(),
                Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
            };
        }
    }

    let mut service = ServeDir::new(&state.public_dir).append_index_html_on_directories(true);
    match service.try_call(strip_root(request, &state.root)).await {
        Ok(response) => response.into_response(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
    }
}

/// Map a request path to a file in `public_dir`.
///
/// The site root prefix is removed, percent escapes are decoded, directories
/// resolve to their `index.html` and `/about` may stand for `/about.html`.
/// Paths escaping `public_dir` resolve to nothing.
fn resolve_path(public_dir: &Path, root: &str, uri_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(uri_path).decode_utf8().ok()?;
    let relative = strip_root_prefix(&decoded, root)?.trim_start_matches('/');

    let relative = Path::new(relative);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }

    let candidate = public_dir.join(relative);
    if candidate.is_dir() {
        return Some(candidate.join("index.html"));
    }
    if candidate.is_file() {
        return Some(candidate);
    }

    let with_html = candidate.with_extension("html");
    with_html.is_file().then_some(with_html)
}

fn strip_root_prefix<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    let root = root.trim_end_matches('/');
    if root.is_empty() {
        return Some(path);
    }
    match path.strip_prefix(root) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

/// Rewrite the request URI so `ServeDir` sees paths relative to the site root
fn strip_root(mut request: Request<Body>, root: &str) -> Request<Body> {
    let path = request.uri().path();
    let Some(rest) = strip_root_prefix(path, root) else {
        return request;
    };
    let rest = if rest.is_empty() { "/" } else { rest };
    let rewritten = match request.uri().query() {
        Some(query) => format!("{}?{}", rest, query),
        None => rest.to_string(),
    };
    if let Ok(uri) = rewritten.parse() {
        *request.uri_mut() = uri;
    }
    request
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "html" || ext == "htm")
        .unwrap_or(false)
}

/// Insert the reload script before the last `</body>`, or append it
fn inject_live_reload(html: &str) -> String {
    match html.rfind("</body>") {
        Some(idx) => format!("{}{}{}", &html[..idx], LIVE_RELOAD_SCRIPT, &html[idx..]),
        None => format!("{}{}", html, LIVE_RELOAD_SCRIPT),
    }
}

fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn public_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("blog/hello world")).unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("blog/hello world/index.html"), "post").unwrap();
        fs::write(dir.path().join("pricing.html"), "pricing").unwrap();
        fs::write(dir.path().join("style.css"), "body {}").unwrap();
        dir
    }

    #[test]
    fn test_resolve_path() {
        let dir = public_dir();
        let public = dir.path();

        assert_eq!(
            resolve_path(public, "/", "/"),
            Some(public.join("index.html"))
        );
        assert_eq!(
            resolve_path(public, "/", "/blog/hello%20world/"),
            Some(public.join("blog/hello world/index.html"))
        );
        assert_eq!(
            resolve_path(public, "/", "/pricing"),
            Some(public.join("pricing.html"))
        );
        assert_eq!(
            resolve_path(public, "/", "/style.css"),
            Some(public.join("style.css"))
        );
        assert_eq!(resolve_path(public, "/", "/missing"), None);
        assert_eq!(resolve_path(public, "/", "/../etc/passwd"), None);
        assert_eq!(resolve_path(public, "/", "/%2e%2e/secret"), None);
    }

    #[test]
    fn test_resolve_path_under_root() {
        let dir = public_dir();
        let public = dir.path();
        assert_eq!(
            resolve_path(public, "/site/", "/site/"),
            Some(public.join("index.html"))
        );
        assert_eq!(
            resolve_path(public, "/site/", "/site/pricing"),
            Some(public.join("pricing.html"))
        );
        assert_eq!(resolve_path(public, "/site/", "/sitemap"), None);
        assert_eq!(resolve_path(public, "/site/", "/pricing"), None);
    }

    #[test]
    fn test_inject_live_reload() {
        let html = "<html><body><p>hi</p></body></html>";
        let injected = inject_live_reload(html);
        assert!(injected.contains(LIVE_RELOAD_PATH));
        assert!(injected.ends_with("</script>\n</body></html>"));

        let bare = inject_live_reload("<p>fragment</p>");
        assert!(bare.starts_with("<p>fragment</p><script>"));
    }

    #[test]
    fn test_is_ignored() {
        assert!(is_ignored(Path::new("/site/content/.git/index")));
        assert!(is_ignored(Path::new("/site/content/homepage.yml~")));
        assert!(is_ignored(Path::new("/site/static/.DS_Store")));
        assert!(is_ignored(Path::new("/site/content/.homepage.yml.swp")));
        assert!(!is_ignored(Path::new("/site/content/homepage.yml")));
    }

    #[test]
    fn test_strip_root() {
        let request = Request::builder()
            .uri("/site/style.css?v=2")
            .body(Body::empty())
            .unwrap();
        let request = strip_root(request, "/site/");
        assert_eq!(request.uri().to_string(), "/style.css?v=2");
    }
}
