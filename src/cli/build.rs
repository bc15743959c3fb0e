//! Static build.
//!
//! Pipeline: clean -> render every route (parallel) -> 404 page ->
//! stylesheet -> assets -> sitemap -> feed.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::content::paths::static_routes;
use crate::embed::css::STYLES_CSS;
use crate::generator::{rss::build_rss, sitemap::build_sitemap};
use crate::logger::ProgressLine;
use crate::render::{self, Status};
use crate::site::Route;
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// Counts reported at the end of a build.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub assets: usize,
}

pub fn build_site(store: &ContentStore, config: &SiteConfig) -> Result<BuildSummary> {
    let started = Instant::now();
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
        debug!("build"; "cleaned {}", config.root_relative(output).display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    let pages = write_pages(store, config)?;

    write_file(&output.join("styles.css"), STYLES_CSS)?;
    let assets = copy_assets(&config.content.assets, output)?;

    build_sitemap(store, config)?;
    build_rss(store, config)?;

    log!(
        "build";
        "{} and {} in {:.2?} -> {}",
        plural_count(pages, "page"),
        plural_count(assets, "asset"),
        started.elapsed(),
        config.root_relative(output).display()
    );

    Ok(BuildSummary { pages, assets })
}

/// Render every static route plus `404.html`. Returns the number of pages.
fn write_pages(store: &ContentStore, config: &SiteConfig) -> Result<usize> {
    let ctx = render::Context::new(store, config);
    let mut routes = static_routes(store);
    routes.push(Route::NotFound);

    let progress = ProgressLine::new(&[("pages", routes.len())]);
    routes.par_iter().try_for_each(|route| {
        let rendered = render::render_route(route, &ctx);
        if rendered.status == Status::NotFound && *route != Route::NotFound {
            return Err(anyhow!("route {route} has no content"));
        }
        write_file(&route.output_path(&config.build.output), &rendered.html)?;
        progress.inc("pages");
        Ok(())
    })?;
    progress.finish();

    Ok(routes.len())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Copy the static asset tree into the output. A missing source is skipped.
fn copy_assets(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut count = 0;
    copy_dir_recursive(src, dest, &mut count)
        .with_context(|| format!("Failed to copy assets from {}", src.display()))?;
    Ok(count)
}

fn copy_dir_recursive(src_dir: &Path, dest_dir: &Path, count: &mut usize) -> Result<()> {
    for entry in fs::read_dir(src_dir)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dest_path, count)?;
        } else {
            fs::create_dir_all(dest_dir)?;
            fs::copy(&src_path, &dest_path)?;
            *count += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{config, store};
    use tempfile::TempDir;

    fn site_config(dir: &TempDir) -> SiteConfig {
        let mut config = config();
        config.build.output = dir.path().join("public");
        config.content.assets = dir.path().join("static");
        config
    }

    #[test]
    fn test_build_writes_every_route() {
        let dir = TempDir::new().unwrap();
        let config = site_config(&dir);
        let store = store();

        let summary = build_site(&store, &config).unwrap();
        assert_eq!(summary.pages, static_routes(&store).len() + 1);
        assert_eq!(summary.assets, 0);

        let out = &config.build.output;
        for path in [
            "index.html",
            "about/index.html",
            "services/platform/index.html",
            "case-studies/grid/index.html",
            "blog/newer/index.html",
            "blog/category/compliance/index.html",
            "404.html",
            "styles.css",
            "sitemap.xml",
            "blog/rss.xml",
        ] {
            assert!(out.join(path).is_file(), "missing {path}");
        }
    }

    #[test]
    fn test_build_copies_assets_and_cleans() {
        let dir = TempDir::new().unwrap();
        let mut config = site_config(&dir);
        fs::create_dir_all(dir.path().join("static/images")).unwrap();
        fs::write(dir.path().join("static/images/logo.svg"), "<svg/>").unwrap();
        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(config.build.output.join("stale.html"), "old").unwrap();
        config.build.clean = true;
        config.build.rss = false;

        let summary = build_site(&store(), &config).unwrap();
        assert_eq!(summary.assets, 1);
        assert!(config.build.output.join("images/logo.svg").is_file());
        assert!(!config.build.output.join("stale.html").exists());
        assert!(!config.build.output.join("blog/rss.xml").exists());
    }

    #[test]
    fn test_build_stays_inside_output() {
        use crate::content::model::CompanyData;
        use crate::content::resolve::tests::service;

        let dir = TempDir::new().unwrap();
        let mut config = site_config(&dir);
        config.build.rss = false;
        let store = ContentStore::from_parts(
            vec![service(1, "..", "A"), service(2, "../../escaped", "A")],
            vec![],
            vec![],
            CompanyData::default(),
        );

        let summary = build_site(&store, &config).unwrap();
        assert_eq!(summary.pages, Route::STATIC.len() + 1);

        let home = fs::read_to_string(config.build.output.join("index.html")).unwrap();
        assert!(!home.contains("Energy Analytics Service |"));
        let services = fs::read_to_string(config.build.output.join("services/index.html")).unwrap();
        assert!(!services.contains("Energy Analytics Service |"));
        assert!(!dir.path().join("escaped").exists());
    }

    #[test]
    fn test_build_demo_site() {
        let demo = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/tradenexus");
        let toml = fs::read_to_string(demo.join("site.toml")).unwrap();
        let dir = TempDir::new().unwrap();

        let mut config = crate::config::test_parse_config(&toml);
        config.root = demo.clone();
        config.content.dir = demo.join("data");
        config.content.assets = demo.join("static");
        config.build.output = dir.path().join("public");

        let store = crate::cli::load_store(&config).unwrap();
        assert_eq!(store.blogs().len(), 3);
        assert_eq!(store.blogs()[2].slug, "negative-prices-explained");

        let summary = build_site(&store, &config).unwrap();
        assert_eq!(summary.assets, 1);

        let out = &config.build.output;
        let post = fs::read_to_string(out.join("blog/ai-in-energy-trading/index.html")).unwrap();
        assert!(post.contains("<title>How AI Is Reshaping Energy Trading in 2024</title>"));
        assert!(post.contains("January 15, 2024"));

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("https://tradenexus.example/case-studies/solar-developer-forecasting/"));
        assert!(out.join("images/favicon.svg").is_file());
    }
}
