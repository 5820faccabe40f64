//! Environment helpers for the app shell.

use crate::core::config::{configured_backend_url, resolve_backend_url};
use gloo::utils::window;

/// Backend base URL, read once at startup.
pub(crate) fn backend_base_url() -> String {
    let origin = window().location().origin().ok();
    resolve_backend_url(configured_backend_url(), origin.as_deref())
}
