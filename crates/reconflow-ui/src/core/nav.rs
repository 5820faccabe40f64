//! Route table and sidebar navigation model.
//!
//! # Design
//! - `Route` is the only route table. The router renders from it and the
//!   sidebar derives its active entry from the same recognized route.
//! - Path parameters are handed to pages verbatim; validating them is the
//!   destination page's job.

use yew_router::prelude::*;

/// Top-level sections shown in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Overview dashboard at `/`.
    Dashboard,
    /// Target management.
    Targets,
    /// Tool inventory management.
    Tools,
    /// Workflow monitor.
    Workflow,
    /// Domain results and their nested detail pages.
    DomainResults,
    /// Admin panel.
    Admin,
}

impl Section {
    /// All sections in sidebar order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Dashboard,
            Self::Targets,
            Self::Tools,
            Self::Workflow,
            Self::DomainResults,
            Self::Admin,
        ]
    }

    /// Sidebar entry for this section.
    #[must_use]
    pub const fn entry(self) -> NavEntry {
        match self {
            Self::Dashboard => NavEntry {
                section: self,
                label: "Dashboard",
                icon: "fas fa-tachometer-alt",
            },
            Self::Targets => NavEntry {
                section: self,
                label: "Target Management",
                icon: "fas fa-bullseye",
            },
            Self::Tools => NavEntry {
                section: self,
                label: "Tools Management",
                icon: "fas fa-toolbox",
            },
            Self::Workflow => NavEntry {
                section: self,
                label: "Workflow Monitor",
                icon: "fas fa-project-diagram",
            },
            Self::DomainResults => NavEntry {
                section: self,
                label: "Domain Results",
                icon: "fas fa-chart-bar",
            },
            Self::Admin => NavEntry {
                section: self,
                label: "Admin Panel",
                icon: "fas fa-cogs",
            },
        }
    }
}

/// One sidebar link: where it goes and how it is labelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Section the entry activates.
    pub section: Section,
    /// Display label.
    pub label: &'static str,
    /// Icon class list.
    pub icon: &'static str,
}

/// Sidebar entries in display order.
#[must_use]
pub fn nav_entries() -> [NavEntry; 6] {
    Section::all().map(Section::entry)
}

/// Routes served by the shell.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Dashboard.
    #[at("/")]
    Dashboard,
    /// Target management.
    #[at("/targets")]
    Targets,
    /// Tools management.
    #[at("/tools")]
    Tools,
    /// Workflow monitor.
    #[at("/workflow")]
    Workflow,
    /// Domain results overview.
    #[at("/scan-results")]
    DomainResults,
    /// One domain's results.
    #[at("/scan-results/domain/:domain_id")]
    DomainDetail {
        /// Domain identifier segment.
        domain_id: String,
    },
    /// One subdomain within a domain.
    #[at("/scan-results/domain/:domain_id/subdomain/:subdomain")]
    SubdomainDetail {
        /// Domain identifier segment.
        domain_id: String,
        /// Subdomain segment.
        subdomain: String,
    },
    /// Admin panel.
    #[at("/admin")]
    Admin,
    /// No route matched.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Resolve a browser path the way the router does when rendering.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }

    /// Section whose sidebar entry is active while this route renders.
    #[must_use]
    pub const fn section(&self) -> Option<Section> {
        match self {
            Self::Dashboard => Some(Section::Dashboard),
            Self::Targets => Some(Section::Targets),
            Self::Tools => Some(Section::Tools),
            Self::Workflow => Some(Section::Workflow),
            Self::DomainResults | Self::DomainDetail { .. } | Self::SubdomainDetail { .. } => {
                Some(Section::DomainResults)
            }
            Self::Admin => Some(Section::Admin),
            Self::NotFound => None,
        }
    }

    /// Heading for the routed content region.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::DomainResults => "Domain Results Overview".to_string(),
            Self::DomainDetail { domain_id } => format!("Domain: {domain_id}"),
            Self::SubdomainDetail {
                domain_id,
                subdomain,
            } => format!("Subdomain: {subdomain} ({domain_id})"),
            Self::NotFound => "Not found".to_string(),
            other => other
                .section()
                .map_or_else(String::new, |section| section.entry().label.to_string()),
        }
    }
}

impl From<Section> for Route {
    fn from(section: Section) -> Self {
        match section {
            Section::Dashboard => Self::Dashboard,
            Section::Targets => Self::Targets,
            Section::Tools => Self::Tools,
            Section::Workflow => Self::Workflow,
            Section::DomainResults => Self::DomainResults,
            Section::Admin => Self::Admin,
        }
    }
}

/// Section whose sidebar entry is active for `path`.
#[must_use]
pub fn active_section(path: &str) -> Option<Section> {
    Route::resolve(path).section()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_subdomain_route_passes_params_verbatim() {
        assert_eq!(
            Route::resolve("/scan-results/domain/example.com/subdomain/api"),
            Route::SubdomainDetail {
                domain_id: "example.com".to_string(),
                subdomain: "api".to_string(),
            }
        );
        assert_eq!(
            Route::resolve("/scan-results/domain/a%20b"),
            Route::DomainDetail {
                domain_id: "a%20b".to_string(),
            }
        );
    }

    #[test]
    fn root_maps_to_dashboard() {
        assert_eq!(Route::resolve("/"), Route::Dashboard);
        assert_eq!(active_section("/"), Some(Section::Dashboard));
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Route::resolve("/tools/"), Route::Tools);
        assert_eq!(active_section("/admin/"), Some(Section::Admin));
    }

    #[test]
    fn exactly_one_entry_is_active_across_route_surface() {
        let paths = [
            "/",
            "/targets",
            "/tools",
            "/workflow",
            "/scan-results",
            "/scan-results/domain/example.com",
            "/scan-results/domain/example.com/subdomain/api",
            "/admin",
        ];
        for path in paths {
            let active: Vec<_> = nav_entries()
                .into_iter()
                .filter(|entry| active_section(path) == Some(entry.section))
                .collect();
            assert_eq!(active.len(), 1, "path {path}");
        }
        assert_eq!(
            active_section("/scan-results/domain/example.com/subdomain/api"),
            Some(Section::DomainResults)
        );
        assert_ne!(active_section("/targets"), Some(Section::Dashboard));
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        for path in ["/nope", "/scan-results/domain", "/targets/extra", "/scan-results/x/y"] {
            assert_eq!(Route::resolve(path), Route::NotFound, "path {path}");
            assert_eq!(active_section(path), None);
        }
    }

    #[test]
    fn empty_segments_render_not_found_and_highlight_nothing() {
        for path in ["//admin", "/scan-results//domain/x"] {
            let rendered = Route::resolve(path);
            assert_eq!(rendered, Route::NotFound, "path {path}");
            assert_eq!(rendered.section(), active_section(path));
            assert_eq!(active_section(path), None);
        }
    }

    #[test]
    fn every_sidebar_link_round_trips_to_its_section() {
        for entry in nav_entries() {
            let route = Route::from(entry.section);
            let path = route.to_path();
            assert_eq!(Route::resolve(&path), route);
            assert_eq!(active_section(&path), Some(entry.section));
        }
    }

    #[test]
    fn titles_follow_route_context() {
        assert_eq!(Route::Dashboard.title(), "Dashboard");
        assert_eq!(
            Route::SubdomainDetail {
                domain_id: "example.com".to_string(),
                subdomain: "api".to_string(),
            }
            .title(),
            "Subdomain: api (example.com)"
        );
    }
}
