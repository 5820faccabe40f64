use crate::components::summary::{ActiveScansIndicator, RecentScansList, ToolStatsSummary};
use crate::core::nav::{NavEntry, Route, Section, nav_entries};
use crate::core::store::{ShellStore, select_active_scans, select_scan_load_percent};
use yew::prelude::*;
use yew_router::prelude::{Link, use_route};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let active = use_route::<Route>().and_then(|route| route.section());

    let tools = use_selector(|store: &ShellStore| store.tools);
    let scans = use_selector(|store: &ShellStore| store.scans.clone());
    let active_scans = use_selector(select_active_scans);
    let load_percent = use_selector(select_scan_load_percent);

    html! {
        <div class="app-shell min-h-screen bg-gray-900 text-white">
            <div class="flex">
                <nav class="sidebar w-64 bg-gray-800 min-h-screen p-4">
                    <div class="brand mb-8">
                        <h1 class="text-2xl font-bold text-cyan-400 mb-2">{"ReconFlow"}</h1>
                        <p class="text-gray-400 text-sm">{"Automated Reconnaissance Platform"}</p>
                    </div>
                    <div class="space-y-2">
                        {for nav_entries().into_iter().map(|entry| nav_item(entry, active))}
                    </div>
                    <ActiveScansIndicator count={*active_scans} load_percent={*load_percent} />
                    <ToolStatsSummary stats={tools.stats} status={tools.status} />
                    <RecentScansList scans={scans.entries.clone()} status={scans.status} />
                </nav>
                <main class="flex-1 p-6">
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(entry: NavEntry, active: Option<Section>) -> Html {
    let classes = classes!(
        "nav-item",
        "block",
        "p-3",
        "rounded-lg",
        "transition-colors",
        if active == Some(entry.section) {
            classes!("active", "bg-cyan-600", "text-white")
        } else {
            classes!("text-gray-300", "hover:bg-gray-700")
        }
    );
    html! {
        <Link<Route> to={Route::from(entry.section)} classes={classes}>
            <i class={classes!(entry.icon, "mr-3")}></i>
            {entry.label}
        </Link<Route>>
    }
}
