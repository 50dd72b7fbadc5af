use super::controller::{GenerateController, GenerateSettings};
use super::state::SubmissionState;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_generate_project::GenerateProject;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn GenerateProjectPage(
    /// Endpoint and archive name; defaults to the shared contract values.
    #[prop(optional)]
    settings: Option<GenerateSettings>,
) -> impl IntoView {
    let settings = StoredValue::new(settings.unwrap_or_default());
    let input_text = RwSignal::new(String::new());
    let submission = RwSignal::new(SubmissionState::Idle);

    let is_busy = move || submission.get() == SubmissionState::Submitting;

    let on_generate = move |_| {
        let text = input_text.get_untracked();
        let controller = GenerateController::browser(&settings.get_value(), submission);
        spawn_local(async move {
            let _ = controller.submit(text).await;
        });
    };

    view! {
        <PageFrame page_id="u501_generate_project--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h1 class="page__title">{GenerateProject::display_name()}</h1>
            </div>
            <div class="page__content">
                <Textarea
                    value=input_text
                    placeholder="Enter your JSON schema here..."
                    class="monospace-textarea"
                    attr:rows=10
                />
                <div class="form__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_generate
                        disabled=Signal::derive(is_busy)
                        loading=Signal::derive(is_busy)
                    >
                        {move || if is_busy() { "Generating..." } else { "Generate & Download" }}
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
