use std::path::PathBuf;
use std::str::FromStr;

use log::warn;

use crate::core::palette::kinds::PaletteKind;
use crate::core::util::thread_count::default_thread_count;

pub const DEFAULT_OUTPUT_PATH: &str = "output/flame.hdr";

pub const THREADS_ENV: &str = "FLAME_THREADS";
pub const SEED_ENV: &str = "FLAME_SEED";
pub const OUTPUT_ENV: &str = "FLAME_OUTPUT";
pub const PALETTE_ENV: &str = "FLAME_PALETTE";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub thread_count: usize,
    pub seed: Option<u64>,
    pub output_path: PathBuf,
    pub palette_kind: PaletteKind,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            thread_count: default_thread_count(),
            seed: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            palette_kind: PaletteKind::default(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", name, value);
            None
        }
    }
}

impl RenderConfig {
    /// Defaults overridden by `FLAME_THREADS`, `FLAME_SEED`, `FLAME_OUTPUT`
    /// and `FLAME_PALETTE` (`fire` or `blue_white`). Unparsable values are
    /// logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(THREADS_ENV) {
            match parse_var::<usize>(THREADS_ENV, &value) {
                Some(0) => warn!("Ignoring {}=0: at least one thread is needed", THREADS_ENV),
                Some(thread_count) => config.thread_count = thread_count,
                None => {}
            }
        }
        if let Some(value) = lookup(SEED_ENV) {
            if let Some(seed) = parse_var::<u64>(SEED_ENV, &value) {
                config.seed = Some(seed);
            }
        }
        if let Some(value) = lookup(OUTPUT_ENV).filter(|v| !v.trim().is_empty()) {
            config.output_path = PathBuf::from(value);
        }
        if let Some(value) = lookup(PALETTE_ENV) {
            if let Some(palette_kind) = parse_var::<PaletteKind>(PALETTE_ENV, &value) {
                config.palette_kind = palette_kind;
            }
        }

        config
    }
}
