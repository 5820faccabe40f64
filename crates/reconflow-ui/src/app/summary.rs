//! One-shot summary fetches issued when the shell mounts.
//!
//! # Design
//! - Two independent tasks; neither waits on or clears the other.
//! - Failures are logged to the console and reported as "no value".
//! - Completions are dropped once the shell lifetime has ended.

use crate::core::lifetime::ShellLifetime;
use crate::core::store::{ShellStore, apply_recent_scans, apply_tool_stats};
use crate::services::api::ApiClient;
use gloo::console;
use reconflow_api_models::{ScanResultSummary, ToolStats};
use std::rc::Rc;
use yewdux::prelude::Dispatch;

pub(crate) fn spawn_summary_fetches(
    client: &Rc<ApiClient>,
    dispatch: &Dispatch<ShellStore>,
    lifetime: &ShellLifetime,
) {
    {
        let client = client.clone();
        let dispatch = dispatch.clone();
        let lifetime = lifetime.clone();
        yew::platform::spawn_local(async move {
            let fetched = load_tool_stats(&client).await;
            lifetime.if_alive(|| {
                dispatch.reduce_mut(|store| apply_tool_stats(store, fetched));
            });
        });
    }
    {
        let client = client.clone();
        let dispatch = dispatch.clone();
        let lifetime = lifetime.clone();
        yew::platform::spawn_local(async move {
            let fetched = load_recent_scans(&client).await;
            lifetime.if_alive(|| {
                dispatch.reduce_mut(|store| apply_recent_scans(store, fetched));
            });
        });
    }
}

async fn load_tool_stats(client: &ApiClient) -> Option<ToolStats> {
    match client.fetch_tool_stats().await {
        Ok(stats) => Some(stats),
        Err(err) => {
            console::error!("error fetching tool stats", err.to_string());
            None
        }
    }
}

async fn load_recent_scans(client: &ApiClient) -> Option<Vec<ScanResultSummary>> {
    match client.fetch_recent_scans().await {
        Ok(scans) => Some(scans),
        Err(err) => {
            console::error!("error fetching recent scans", err.to_string());
            None
        }
    }
}
