//! Deployment environment derived from the page host name.

use once_cell::unsync::OnceCell;

const DEVELOPMENT_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

pub const DEV_API_BASE_URL: &str = "http://localhost:5000";
pub const PROD_API_BASE_URL: &str = "https://techsuppliers.onrender.com";
pub const PROD_ASSET_BASE_PATH: &str = "/img";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentConfig {
    /// Prefix for static images, empty in development.
    pub asset_base_path: &'static str,
    pub api_base_url: &'static str,
    pub is_production: bool,
}

impl EnvironmentConfig {
    /// Any host other than a local development host is treated as production.
    pub fn resolve(hostname: &str) -> Self {
        if DEVELOPMENT_HOSTS.contains(&hostname) {
            Self {
                asset_base_path: "",
                api_base_url: DEV_API_BASE_URL,
                is_production: false,
            }
        } else {
            Self {
                asset_base_path: PROD_ASSET_BASE_PATH,
                api_base_url: PROD_API_BASE_URL,
                is_production: true,
            }
        }
    }

    /// Configuration for the running page, resolved on first use.
    pub fn current() -> Self {
        thread_local! {
            static CURRENT: OnceCell<EnvironmentConfig> = const { OnceCell::new() };
        }
        CURRENT.with(|cell| {
            *cell.get_or_init(|| {
                let hostname = current_hostname();
                let config = Self::resolve(&hostname);
                log::info!(
                    "Environment: host='{}', production={}, assets='{}', api='{}'",
                    hostname,
                    config.is_production,
                    config.asset_base_path,
                    config.api_base_url
                );
                config
            })
        })
    }
}

fn current_hostname() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_is_development() {
        let config = EnvironmentConfig::resolve("localhost");
        assert_eq!(config.asset_base_path, "");
        assert_eq!(config.api_base_url, DEV_API_BASE_URL);
        assert!(!config.is_production);
    }

    #[test]
    fn loopback_ip_is_development() {
        let config = EnvironmentConfig::resolve("127.0.0.1");
        assert!(!config.is_production);
        assert_eq!(config.asset_base_path, "");
    }

    #[test]
    fn other_hosts_are_production() {
        for host in ["techsuppliers.onrender.com", "example.com", "", "LOCALHOST", "0.0.0.0"] {
            let config = EnvironmentConfig::resolve(host);
            assert!(config.is_production, "{}", host);
            assert_eq!(config.asset_base_path, "/img");
            assert_eq!(config.api_base_url, PROD_API_BASE_URL);
        }
    }
}
