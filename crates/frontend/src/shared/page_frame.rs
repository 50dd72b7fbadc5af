//! PageFrame: standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  : `"{entity}--{category}"`, e.g. `"u501_generate_project--usecase"`
//!   - `data-page-category`  : e.g. [`PAGE_CAT_USECASE`]

use leptos::prelude::*;

/// Use-case action page.
pub const PAGE_CAT_USECASE: &str = "usecase";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=page_id
            class="page"
            data-page-category=category
        >
            {children()}
        </div>
    }
}
