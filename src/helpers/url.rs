//! URL helpers

use crate::config::SiteConfig;

/// Prefix a site-relative path with the configured root
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // root "/site/" -> "/site/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Like [`url_for`], but including the site's scheme and host
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    format!("{}{}", config.url.trim_end_matches('/'), url_for(config, path))
}
