//! Sidebar summary widgets fed from the shell store.
//!
//! Widgets always render their last known values; a failed fetch only adds a
//! muted "stale" hint.

use crate::core::store::FetchStatus;
use reconflow_api_models::{ScanResultSummary, ToolStats};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ActiveScansProps {
    pub(crate) count: u32,
    pub(crate) load_percent: u8,
}

#[function_component(ActiveScansIndicator)]
pub(crate) fn active_scans_indicator(props: &ActiveScansProps) -> Html {
    let width = format!("width: {}%", props.load_percent);
    html! {
        <div class="mt-8 p-4 bg-gray-700 rounded-lg">
            <div class="flex items-center justify-between mb-2">
                <span class="text-sm text-gray-300">{"Active Scans"}</span>
                <span class="text-cyan-400 font-bold">{props.count}</span>
            </div>
            <div class="w-full bg-gray-600 rounded-full h-2">
                <div class="bg-cyan-400 h-2 rounded-full animate-pulse" style={width}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ToolStatsProps {
    pub(crate) stats: ToolStats,
    pub(crate) status: FetchStatus,
}

#[function_component(ToolStatsSummary)]
pub(crate) fn tool_stats_summary(props: &ToolStatsProps) -> Html {
    let stats = props.stats;
    html! {
        <div class="mt-4 p-4 bg-gray-700 rounded-lg text-sm">
            <div class="flex items-center justify-between mb-2">
                <span class="text-gray-300">{"Tools"}</span>
                {status_hint(props.status)}
            </div>
            {stat_row("Installed", stats.installed, "text-green-400")}
            {stat_row("Online", stats.online, "text-cyan-400")}
            {stat_row("Busy", stats.busy, "text-yellow-400")}
            {stat_row("Failed", stats.failed, "text-red-400")}
            {stat_row("Not installed", stats.not_installed, "text-gray-400")}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RecentScansProps {
    pub(crate) scans: Vec<ScanResultSummary>,
    pub(crate) status: FetchStatus,
}

#[function_component(RecentScansList)]
pub(crate) fn recent_scans_list(props: &RecentScansProps) -> Html {
    let rows = if props.scans.is_empty() {
        html! { <li class="text-gray-500">{"No recent scans"}</li> }
    } else {
        html! {
            {for props.scans.iter().map(scan_row)}
        }
    };
    html! {
        <div class="mt-4 p-4 bg-gray-700 rounded-lg text-sm">
            <div class="flex items-center justify-between mb-2">
                <span class="text-gray-300">{"Recent Scans"}</span>
                {status_hint(props.status)}
            </div>
            <ul class="space-y-1">{rows}</ul>
        </div>
    }
}

fn scan_row(scan: &ScanResultSummary) -> Html {
    let target = scan.target().unwrap_or("unknown target").to_string();
    let tool = scan.tool_name().unwrap_or("-").to_string();
    let status = scan.status().unwrap_or("unknown").to_string();
    html! {
        <li class="flex items-center justify-between gap-2">
            <span class="truncate" title={tool}>{target}</span>
            <span class={classes!("text-xs", if scan.is_in_flight() { "text-cyan-400" } else { "text-gray-400" })}>
                {status}
            </span>
        </li>
    }
}

fn stat_row(label: &'static str, value: u32, accent: &'static str) -> Html {
    html! {
        <div class="flex items-center justify-between">
            <span class="text-gray-400">{label}</span>
            <span class={classes!("font-bold", accent)}>{value}</span>
        </div>
    }
}

fn status_hint(status: FetchStatus) -> Html {
    match status {
        FetchStatus::Loading => html! { <span class="text-xs text-gray-500">{"loading"}</span> },
        FetchStatus::Ready => html! {},
        FetchStatus::Failed => html! { <span class="text-xs text-gray-500">{"stale"}</span> },
    }
}
