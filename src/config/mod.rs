//! Configuration management.
//!
//! Two layers, one definition each:
//! - [`SiteConfig`]: public URLs baked into both the SSR and WASM builds.
//!   Precedence per value: `PORTFOLIO_*` build-time environment override,
//!   then the built-in default.
//! - [`ServerConfig`]: runtime settings for the axum server, resolved as
//!   defaults overridden by `PORTFOLIO_*` process environment variables.

/// Public URLs rendered into the page.
///
/// Resolved once at compile time so the WASM client carries the same values
/// as the server-rendered HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    /// Canonical URL of the deployed site.
    pub base_url: &'static str,
    /// The blog promoted in the thoughts section.
    pub blog_url: &'static str,
    /// Calendly scheduling widget URL.
    pub calendly_url: &'static str,
    /// Donation link.
    pub coffee_url: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

impl SiteConfig {
    const fn resolve() -> Self {
        Self {
            base_url: override_or(
                option_env!("PORTFOLIO_BASE_URL"),
                "https://felipe-kreulich.vercel.app",
            ),
            blog_url: override_or(
                option_env!("PORTFOLIO_BLOG_URL"),
                "https://kreulich-blog.vercel.app",
            ),
            calendly_url: override_or(
                option_env!("PORTFOLIO_CALENDLY_URL"),
                "https://calendly.com/felipe-kreulich/30min",
            ),
            coffee_url: override_or(
                option_env!("PORTFOLIO_COFFEE_URL"),
                "https://buymeacoffee.com/felipekreulich",
            ),
            github_url: override_or(
                option_env!("PORTFOLIO_GITHUB_URL"),
                "https://github.com/FelipeKreulich",
            ),
            linkedin_url: override_or(
                option_env!("PORTFOLIO_LINKEDIN_URL"),
                "https://www.linkedin.com/in/felipe-kreulich/",
            ),
        }
    }
}

const fn override_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}

/// The site configuration for this build.
pub fn site() -> &'static SiteConfig {
    static SITE: SiteConfig = SiteConfig::resolve();
    &SITE
}

#[cfg(feature = "server")]
pub use server::{load_server_config, ServerConfig};

#[cfg(feature = "server")]
mod server {
    use anyhow::Result;
    use serde::Deserialize;

    /// Runtime settings for the axum server.
    #[derive(Debug, Deserialize)]
    pub struct ServerConfig {
        #[serde(default = "default_port")]
        pub port: u16,

        /// Directory the CV files are served from.
        #[serde(default = "default_public_dir")]
        pub public_dir: String,
    }

    fn default_port() -> u16 {
        3000
    }

    fn default_public_dir() -> String {
        "public".to_string()
    }

    pub fn load_server_config() -> Result<ServerConfig> {
        let config = ::config::Config::builder()
            // Start with defaults
            .set_default("port", 3000)?
            .set_default("public_dir", "public")?
            // Override with environment variables (PORTFOLIO_PORT, PORTFOLIO_PUBLIC_DIR)
            .add_source(::config::Environment::with_prefix("PORTFOLIO").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_urls_have_defaults() {
        let site = site();
        assert!(site.blog_url.starts_with("https://"));
        assert!(site.calendly_url.contains("calendly.com"));
        assert!(site.coffee_url.contains("buymeacoffee.com"));
    }

    #[test]
    fn override_or_prefers_the_override() {
        assert_eq!(override_or(Some("https://example.org"), "x"), "https://example.org");
        assert_eq!(override_or(None, "https://fallback"), "https://fallback");
    }

    #[cfg(feature = "server")]
    mod server {
        use super::super::*;
        use serial_test::serial;

        #[test]
        #[serial]
        fn defaults_apply_without_environment() {
            std::env::remove_var("PORTFOLIO_PORT");
            std::env::remove_var("PORTFOLIO_PUBLIC_DIR");

            let config = load_server_config().unwrap();
            assert_eq!(config.port, 3000);
            assert_eq!(config.public_dir, "public");
        }

        #[test]
        #[serial]
        fn environment_overrides_defaults() {
            std::env::set_var("PORTFOLIO_PORT", "8080");
            std::env::set_var("PORTFOLIO_PUBLIC_DIR", "static");

            let config = load_server_config().unwrap();
            assert_eq!(config.port, 8080);
            assert_eq!(config.public_dir, "static");

            std::env::remove_var("PORTFOLIO_PORT");
            std::env::remove_var("PORTFOLIO_PUBLIC_DIR");
        }
    }
}
