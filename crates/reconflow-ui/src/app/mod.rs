use crate::components::pages::RoutedPage;
use crate::components::shell::AppShell;
use crate::core::lifetime::ShellLifetime;
use crate::core::nav::Route;
use crate::core::store::ShellStore;
use crate::services::api::ApiClient;
use environment::backend_base_url;
use summary::spawn_summary_fetches;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

mod environment;
mod summary;

#[function_component(ReconFlowApp)]
pub(crate) fn reconflow_app() -> Html {
    let client = use_memo(|_| ApiClient::new(backend_base_url()), ());

    {
        let client = client.clone();
        use_effect_with_deps(
            move |_| {
                let lifetime = ShellLifetime::new();
                spawn_summary_fetches(&client, &Dispatch::<ShellStore>::new(), &lifetime);
                move || lifetime.end()
            },
            (),
        );
    }

    html! {
        <BrowserRouter>
            <AppShell>
                <Switch<Route> render={switch} />
            </AppShell>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    html! { <RoutedPage route={route} /> }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ReconFlowApp>::with_root(root).render();
    } else {
        yew::Renderer::<ReconFlowApp>::new().render();
    }
}
