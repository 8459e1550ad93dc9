//! Runtime configuration read from the environment.

use tracing::warn;

pub const DEFAULT_ACTOR_BUFFER: usize = 32;
pub const DEFAULT_ORDER_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeConfig {
    /// Mailbox capacity of each actor.
    pub actor_buffer: usize,
    /// Validate-and-deduct attempts per order. At least 1.
    pub order_max_attempts: u32,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            actor_buffer: DEFAULT_ACTOR_BUFFER,
            order_max_attempts: DEFAULT_ORDER_MAX_ATTEMPTS,
        }
    }
}

impl CafeConfig {
    /// Load configuration from environment variables
    ///
    /// - `CAFE_ACTOR_BUFFER` (default 32)
    /// - `CAFE_ORDER_MAX_ATTEMPTS` (default 3)
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            actor_buffer: parse_or(&lookup, "CAFE_ACTOR_BUFFER", defaults.actor_buffer)
                .max(1),
            order_max_attempts: parse_or(
                &lookup,
                "CAFE_ORDER_MAX_ATTEMPTS",
                defaults.order_max_attempts,
            )
            .max(1),
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> T {
    match lookup(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(setting = name, value = %raw, "Ignoring unparseable setting");
            default
        }),
        None => default,
    }
}
