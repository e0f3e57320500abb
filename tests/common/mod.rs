//! Shared fixtures for the route integration tests.

use std::net::SocketAddr;
use std::path::Path;

use tempfile::TempDir;
use tokio::net::TcpListener;

use xchain_web::config::AppConfig;
use xchain_web::http::{AssetPaths, HttpServer};
use xchain_web::lifecycle::Shutdown;

pub const INDEX_HTML: &str =
    "<!doctype html><html><head><title>explorer</title></head><body><div id=\"app\"></div></body></html>";
pub const SITEMAP_XML: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?><urlset><url><loc>/</loc></url></urlset>";
pub const ROBOTS_TXT: &str = "User-agent: *\nAllow: /\n";
pub const TEST_WIDGET_HTML: &str = "<!doctype html><html><body>ram widget harness</body></html>";

/// Write the served documents into a fresh temp directory.
pub fn asset_fixture() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    write(root.path(), "dist/index.html", INDEX_HTML);
    write(root.path(), "sitemap.xml", SITEMAP_XML);
    write(root.path(), "robots.txt", ROBOTS_TXT);
    write(root.path(), "test_widget/index.html", TEST_WIDGET_HTML);
    root
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

/// Start a server over the given asset root on an ephemeral port.
///
/// Returns the bound address and the shutdown handle keeping it alive.
pub async fn start_server(root: &Path) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(AppConfig::default(), AssetPaths::from_root(root));
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
