//! Submission controller of the generate page.
//!
//! One call of [`GenerateController::submit`] issues at most one request,
//! and on success exactly one save of the returned archive. Failures end in
//! exactly one notification and are never handed back to the caller.

use super::api::{CodegenTransport, HttpTransport};
use super::error::GenerateError;
use super::state::{BusyFlag, BusyGuard};
use crate::shared::export::{ArtifactSink, BrowserDownload};
use crate::shared::notify::{BrowserAlert, FailureNotifier};
use contracts::usecases::u501_generate_project::{ARCHIVE_FILE_NAME, GENERATE_ENDPOINT};

/// Where the schema is sent and how the archive is named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub endpoint: String,
    pub file_name: String,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            endpoint: GENERATE_ENDPOINT.to_string(),
            file_name: ARCHIVE_FILE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Archive of `bytes` length handed to the browser save.
    Saved { bytes: usize },
    /// Failure reported to the user.
    Failed,
    /// Another submission was still in flight; nothing was sent.
    Rejected,
}

pub struct GenerateController<T, S, N, F> {
    transport: T,
    sink: S,
    notifier: N,
    busy: F,
    file_name: String,
}

impl<F: BusyFlag> GenerateController<HttpTransport, BrowserDownload, BrowserAlert, F> {
    /// Controller wired to `fetch`, the download anchor and `window.alert`.
    pub fn browser(settings: &GenerateSettings, busy: F) -> Self {
        Self::new(
            HttpTransport::new(settings.endpoint.clone()),
            BrowserDownload::default(),
            BrowserAlert,
            busy,
            settings.file_name.clone(),
        )
    }
}

impl<T, S, N, F> GenerateController<T, S, N, F>
where
    T: CodegenTransport,
    S: ArtifactSink,
    N: FailureNotifier,
    F: BusyFlag,
{
    pub fn new(transport: T, sink: S, notifier: N, busy: F, file_name: impl Into<String>) -> Self {
        Self {
            transport,
            sink,
            notifier,
            busy,
            file_name: file_name.into(),
        }
    }

    pub async fn submit(&self, input_text: String) -> SubmitOutcome {
        let Some(_guard) = BusyGuard::try_acquire(&self.busy) else {
            log::warn!("Project generation already in progress, submission ignored");
            return SubmitOutcome::Rejected;
        };

        log::debug!("Submitting schema to generator ({} bytes)", input_text.len());

        match self.generate_and_save(&input_text).await {
            Ok(bytes) => {
                log::info!("Saved {} ({} bytes)", self.file_name, bytes);
                SubmitOutcome::Saved { bytes }
            }
            Err(err) => {
                log::error!("Error generating project: {}", err);
                self.notifier.notify(err.user_message());
                SubmitOutcome::Failed
            }
        }
    }

    async fn generate_and_save(&self, input_text: &str) -> Result<usize, GenerateError> {
        let archive = self.transport.generate(input_text).await?;
        self.sink
            .save(&archive, &self.file_name)
            .map_err(GenerateError::Save)?;
        Ok(archive.len())
    }
}
