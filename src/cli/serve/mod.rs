//! Preview server.
//!
//! Pages are rendered per request from the in-memory store, so the server
//! never touches the output directory. The stylesheet, sitemap and feed are
//! prepared once at startup; files under the asset directory are served
//! from disk.

mod lifecycle;
mod path;
mod response;

use std::sync::Arc;

use anyhow::Result;
use tiny_http::{Method, Request};

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::embed::css::STYLES_CSS;
use crate::generator::minify_xml;
use crate::generator::rss::{FEED_PATH, rss_xml};
use crate::generator::sitemap::Sitemap;
use crate::render::{self, Context};
use crate::site::Route;
use crate::utils::mime::types::{CSS, RSS, XML};
use crate::{debug, log};

/// Request handler threads.
const WORKERS: usize = 4;

/// Everything a request needs, shared read-only across workers.
struct Site {
    store: ContentStore,
    config: SiteConfig,
    sitemap: Option<String>,
    feed: Option<String>,
}

impl Site {
    fn new(store: ContentStore, config: SiteConfig) -> Self {
        let minify = config.build.minify;
        let sitemap = config
            .build
            .sitemap
            .then(|| minify_xml(&Sitemap::build(&store, &config).into_xml(), minify).into_owned());

        let feed = if config.build.rss {
            match rss_xml(&store, &config) {
                Ok(xml) => Some(minify_xml(&xml, minify).into_owned()),
                Err(e) => {
                    log!("rss"; "feed disabled: {e:#}");
                    None
                }
            }
        } else {
            None
        };

        Self {
            store,
            config,
            sitemap,
            feed,
        }
    }
}

/// Bind the server and handle requests until Ctrl-C.
pub fn serve(store: ContentStore, config: SiteConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_shutdown(Arc::clone(&server))?;

    log!("serve"; "http://{}", addr);

    let site = Arc::new(Site::new(store, config));
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKERS)
        .build()?;

    for request in server.incoming_requests() {
        let site = Arc::clone(&site);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &site) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, site: &Site) -> Result<()> {
    if lifecycle::is_shutdown() {
        return response::respond_unavailable(request);
    }
    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request);
    }

    let url = request.url().to_string();
    let path = url.split(['?', '#']).next().unwrap_or_default();

    match path {
        "/styles.css" => return response::respond_static(request, CSS, STYLES_CSS),
        "/sitemap.xml" => {
            if let Some(xml) = &site.sitemap {
                return response::respond_static(request, XML, xml);
            }
        }
        _ if path.trim_start_matches('/') == FEED_PATH => {
            if let Some(xml) = &site.feed {
                return response::respond_static(request, RSS, xml);
            }
        }
        _ => {}
    }

    let route = Route::from_url(&url);
    if route == Route::NotFound
        && let Some(file) = path::resolve_asset(&url, &site.config.content.assets)
    {
        return response::respond_file(request, &file);
    }

    let rendered = render::render_route(&route, &Context::new(&site.store, &site.config));
    debug!("serve"; "{} {} -> {:?}", request.method(), url, rendered.status);
    response::respond_page(request, rendered)
}
