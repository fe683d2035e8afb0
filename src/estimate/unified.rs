//! Per-family estimates for unified-memory systems
//!
//! Unified-memory throughput is not looked up from bandwidth. Each family
//! carries fixed 7B/13B figures calibrated for that product class, plus
//! memory breakpoints below which larger models are not plausible.

use super::Breakpoints;

/// Fixed estimates for one unified-memory product family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnifiedProfile {
    /// Bandwidth (GB/s) assumed when a configuration does not state one
    pub default_bandwidth_gbs: u32,
    /// 7B tokens/sec
    pub tg7b: u32,
    /// 13B tokens/sec
    pub tg13b: u32,
    /// 70B tokens/sec by memory (GB)
    pub tg70b: Breakpoints,
    /// 120B tokens/sec by memory (GB)
    pub tg120b: Breakpoints,
    /// Added to list price for the top of the price range (USD)
    pub price_headroom: u32,
}

impl UnifiedProfile {
    /// 70B tokens/sec, `None` below the plausible memory size
    pub fn tg70b(&self, memory_gb: u32) -> Option<u32> {
        self.tg70b.lookup(memory_gb)
    }

    /// 120B tokens/sec, `None` below the plausible memory size
    pub fn tg120b(&self, memory_gb: u32) -> Option<u32> {
        self.tg120b.lookup(memory_gb)
    }
}

/// Mac Studio (desktop)
pub const MAC_STUDIO: UnifiedProfile = UnifiedProfile {
    default_bandwidth_gbs: 800,
    tg7b: 120,
    tg13b: 72,
    tg70b: Breakpoints::new(&[(256, 20), (128, 16)]),
    tg120b: Breakpoints::new(&[(256, 10)]),
    price_headroom: 1000,
};

/// MacBook Pro (laptop)
pub const MAC_BOOK_PRO: UnifiedProfile = UnifiedProfile {
    default_bandwidth_gbs: 410,
    tg7b: 75,
    tg13b: 45,
    tg70b: Breakpoints::new(&[(128, 6)]),
    tg120b: Breakpoints::new(&[]),
    price_headroom: 500,
};
