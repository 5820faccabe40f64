//! Placeholders for the routed pages hosted by the shell.
//!
//! Page bodies are owned elsewhere; the shell only forwards route parameters.

use crate::core::nav::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RoutedPageProps {
    pub(crate) route: Route,
}

#[function_component(RoutedPage)]
pub(crate) fn routed_page(props: &RoutedPageProps) -> Html {
    let body = match &props.route {
        Route::Dashboard => "Scan activity and platform overview.",
        Route::Targets => "Add, edit and launch scans against targets.",
        Route::Tools => "Install and monitor reconnaissance tools.",
        Route::Workflow => "Live progress of running workflows.",
        Route::DomainResults => "Per-domain results across all scans.",
        Route::DomainDetail { .. } => "Subdomains, endpoints and findings for this domain.",
        Route::SubdomainDetail { .. } => "Liveness, fingerprint and endpoint data for this host.",
        Route::Admin => "Platform administration.",
        Route::NotFound => "Use the navigation to return to a supported view.",
    };
    html! {
        <div class="placeholder">
            <h2 class="text-xl font-semibold mb-2">{props.route.title()}</h2>
            <p class="text-gray-400">{body}</p>
        </div>
    }
}
