//! Server settings read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::PlanCacheConfig;
use crate::planner::PlannerConfig;

/// Longest token lifetime accepted, 30 days.
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 30;

/// Longest visit the planner will size its table for, one day.
const MAX_BUDGET_CEILING_MINS: u32 = 24 * 60;

/// Error from reading settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Seed account for catalog administration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub staff_id: String,
    pub password: String,
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,

    /// Ride catalog JSON file.
    pub catalog_path: PathBuf,

    /// How often the catalog is reloaded from disk.
    pub catalog_refresh: Duration,

    pub static_dir: PathBuf,

    /// Token signing key. `None` means none was configured.
    pub auth_secret: Option<String>,

    pub token_ttl: chrono::Duration,

    /// `None` leaves the catalog read-only.
    pub admin: Option<AdminAccount>,

    pub planner: PlannerConfig,
    pub plan_cache: PlanCacheConfig,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 5000),
            catalog_path: PathBuf::from("rides.json"),
            catalog_refresh: Duration::from_secs(300),
            static_dir: PathBuf::from("static"),
            auth_secret: None,
            token_ttl: chrono::Duration::hours(1),
            admin: None,
            planner: PlannerConfig::default(),
            plan_cache: PlanCacheConfig::default(),
        }
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, SettingsError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| SettingsError::Invalid { var, value }),
    }
}

impl ServerSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset
    /// variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let defaults = Self::default();

        let host: IpAddr = parse(&lookup, "PARK_HOST", defaults.addr.ip())?;
        let port: u16 = parse(&lookup, "PARK_PORT", defaults.addr.port())?;

        let refresh_secs: u64 = parse(
            &lookup,
            "PARK_CATALOG_REFRESH_SECS",
            defaults.catalog_refresh.as_secs(),
        )?;
        if refresh_secs == 0 {
            return Err(SettingsError::Invalid {
                var: "PARK_CATALOG_REFRESH_SECS",
                value: "0".to_string(),
            });
        }

        let ttl_hours: i64 = parse(&lookup, "PARK_TOKEN_TTL_HOURS", 1)?;
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&ttl_hours) {
            return Err(SettingsError::Invalid {
                var: "PARK_TOKEN_TTL_HOURS",
                value: ttl_hours.to_string(),
            });
        }

        let admin = lookup("PARK_ADMIN_PASSWORD")
            .filter(|p| !p.is_empty())
            .map(|password| AdminAccount {
                staff_id: lookup("PARK_ADMIN_ID")
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| "admin".to_string()),
                password,
            });

        let max_budget_mins: u32 = parse(
            &lookup,
            "PARK_MAX_BUDGET_MINS",
            defaults.planner.max_budget_mins,
        )?;
        if !(1..=MAX_BUDGET_CEILING_MINS).contains(&max_budget_mins) {
            return Err(SettingsError::Invalid {
                var: "PARK_MAX_BUDGET_MINS",
                value: max_budget_mins.to_string(),
            });
        }

        let planner = PlannerConfig::new(
            max_budget_mins,
            parse(
                &lookup,
                "PARK_VIP_DISCOUNT_PERCENT",
                defaults.planner.vip_discount_percent,
            )?,
            parse(
                &lookup,
                "PARK_MANDATORY_BONUS",
                defaults.planner.mandatory_bonus,
            )?,
            parse(&lookup, "PARK_RIDE_GAP_MINS", defaults.planner.ride_gap_mins)?,
        );

        Ok(Self {
            addr: SocketAddr::new(host, port),
            catalog_path: lookup("PARK_CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            catalog_refresh: Duration::from_secs(refresh_secs),
            static_dir: lookup("PARK_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            auth_secret: lookup("PARK_AUTH_SECRET").filter(|s| !s.is_empty()),
            token_ttl: chrono::Duration::hours(ttl_hours),
            admin,
            planner,
            plan_cache: defaults.plan_cache,
        })
    }
}
