use crate::usecases::u501_generate_project::GenerateProjectPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <GenerateProjectPage />
        </ConfigProvider>
    }
}
