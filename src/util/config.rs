use std::sync::OnceLock;

/// Environment variable naming an optional `key = value` config file.
pub const CONFIG_ENV: &str = "GLCACHE_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Route calls through the state cache. Off means every call goes
    /// straight to the device.
    pub use_cache: bool,
    /// Skip the vertex/color/texcoord pointer caches only. Some Android
    /// drivers reuse client addresses across frames with new contents.
    pub pointer_state_hack: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { use_cache: true, pointer_state_hack: false }
    }
}

static CONFIG: OnceLock<CacheConfig> = OnceLock::new();

/// Process-wide config, read once from `$GLCACHE_CONFIG` if set.
pub fn cache_config() -> &'static CacheConfig {
    CONFIG.get_or_init(read_config)
}

fn read_config() -> CacheConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return CacheConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => parse_config(&text),
        Err(err) => {
            log::warn!("could not read {} ({}); using defaults", path, err);
            CacheConfig::default()
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "TRUE" | "on" | "ON" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "off" | "OFF" | "no" | "NO" => Some(false),
        _ => None,
    }
}

pub fn parse_config(text: &str) -> CacheConfig {
    let mut cfg = CacheConfig::default();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.splitn(2, '=');
        let key = parts.next().unwrap_or("").trim();
        let value = parts.next().unwrap_or("").trim();

        let slot = if key.eq_ignore_ascii_case("use_cache") {
            &mut cfg.use_cache
        } else if key.eq_ignore_ascii_case("pointer_state_hack") {
            &mut cfg.pointer_state_hack
        } else {
            log::warn!("unknown config key {:?}", key);
            continue;
        };

        match parse_flag(value) {
            Some(flag) => *slot = flag,
            None => log::warn!("bad value {:?} for {}", value, key),
        }
    }

    cfg
}
