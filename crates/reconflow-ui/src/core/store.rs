//! App-wide yewdux store for the shell summary.
//!
//! # Design
//! - One store, two independent slices: tool stats and recent scans.
//! - Each slice has exactly one writer, its own fetch completion.
//! - Slices are replaced as whole records; a failed fetch keeps the prior
//!   value and only flips the slice status.

use reconflow_api_models::{ScanResultSummary, ToolStats};
use yewdux::store::Store;

/// Maximum number of scan results kept for the sidebar.
pub const RECENT_SCANS_LIMIT: usize = 5;

/// Global store for the shell's summary widgets.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ShellStore {
    /// Tool inventory counts.
    pub tools: ToolStatsSlice,
    /// Most recent scan results and the gauge derived from them.
    pub scans: RecentScansSlice,
}

/// Progress of the one-shot fetch backing a slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Request issued, no completion yet.
    #[default]
    Loading,
    /// Last completion succeeded.
    Ready,
    /// Last completion failed; the slice holds its prior value.
    Failed,
}

/// Tool stats plus the status of the fetch that produced them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToolStatsSlice {
    /// Last known counts (zeroed until the first success).
    pub stats: ToolStats,
    /// Fetch status.
    pub status: FetchStatus,
}

/// Bounded window of recent scans.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecentScansSlice {
    /// Up to [`RECENT_SCANS_LIMIT`] entries in backend order.
    pub entries: Vec<ScanResultSummary>,
    /// Entries in `entries` that are still pending or running.
    pub active: u32,
    /// Fetch status.
    pub status: FetchStatus,
}

/// Apply a tool stats completion. `None` means the fetch failed.
pub fn apply_tool_stats(store: &mut ShellStore, fetched: Option<ToolStats>) {
    store.tools = match fetched {
        Some(stats) => ToolStatsSlice {
            stats,
            status: FetchStatus::Ready,
        },
        None => ToolStatsSlice {
            status: FetchStatus::Failed,
            ..store.tools
        },
    };
}

/// Apply a recent scans completion. `None` means the fetch failed.
pub fn apply_recent_scans(store: &mut ShellStore, fetched: Option<Vec<ScanResultSummary>>) {
    match fetched {
        Some(mut entries) => {
            entries.truncate(RECENT_SCANS_LIMIT);
            let active = count_in_flight(&entries);
            store.scans = RecentScansSlice {
                entries,
                active,
                status: FetchStatus::Ready,
            };
        }
        None => store.scans.status = FetchStatus::Failed,
    }
}

/// Number of scans in the window that have not finished.
#[must_use]
pub fn count_in_flight(entries: &[ScanResultSummary]) -> u32 {
    let count = entries
        .iter()
        .filter(|entry| entry.is_in_flight())
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Active scan gauge shown in the sidebar.
#[must_use]
pub const fn select_active_scans(store: &ShellStore) -> u32 {
    store.scans.active
}

/// Share of the recent window that is still running, as a whole percentage.
#[must_use]
pub fn select_scan_load_percent(store: &ShellStore) -> u8 {
    let window = store.scans.entries.len();
    if window == 0 {
        return 0;
    }
    let active = usize::try_from(store.scans.active).unwrap_or(window);
    let percent = active.min(window) * 100 / window;
    u8::try_from(percent).unwrap_or(100)
}
