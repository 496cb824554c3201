use anyhow::{anyhow, Context, Result};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::time::Duration;

use crate::app_config::Config;
use crate::document;
use crate::export::{self, ExportPipeline, PrintPdfEngine};
use crate::orchestrator::{RequestOrchestrator, RequestState};
use crate::services::HttpSummaryService;

// @module: Application controller for the video and quote workflows

/// Main application controller driving the workflows from the CLI
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    fn service(&self) -> HttpSummaryService {
        HttpSummaryService::new(
            self.config.base_url.clone(),
            Duration::from_secs(self.config.request_timeout_secs),
        )
    }

    fn spinner(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    /// Run the video workflow: submit, display, optionally export.
    pub async fn run_summarize(&self, url: &str, export: bool, output_dir: PathBuf) -> Result<()> {
        let mut orchestrator = RequestOrchestrator::new(self.service());

        let spinner = Self::spinner("Analyzing video...");
        orchestrator.submit(url).await;

        match orchestrator.state() {
            RequestState::Complete(result) => {
                spinner.finish_with_message("Summary ready");

                let doc = document::project(result, Local::now().date_naive());
                println!("{}", document::render_text(&doc));

                if export {
                    let filename = export::derive_filename(Some(result));
                    let options = self.config.export.to_pdf_options();
                    let pipeline = ExportPipeline::new(PrintPdfEngine::new(), options);

                    // Rendering is CPU-bound; keep it off the runtime threads.
                    let export_doc = doc.clone();
                    let export_dir = output_dir.clone();
                    let export_name = filename.clone();
                    let outcome = tokio::task::spawn_blocking(move || {
                        pipeline.export(&export_doc, &export_name, &export_dir)
                    })
                    .await
                    .context("Export task failed")?;

                    // An export failure is logged, never a terminal state;
                    // the summary on screen stays valid and the user can
                    // simply export again.
                    match outcome {
                        Ok(written) => info!("Saved: {:?}", written),
                        Err(err) => error!("Failed to export {}: {}", filename, err),
                    }
                }

                Ok(())
            }
            RequestState::Error(message) => {
                spinner.finish_and_clear();
                Err(anyhow!("{}", message))
            }
            state => {
                // submit always ends in Complete or Error
                spinner.finish_and_clear();
                debug!("Unexpected state after submission: {:?}", state);
                Ok(())
            }
        }
    }

    /// Run the quote workflow.
    ///
    /// A failed fetch is not a terminal error: the user just retries.
    pub async fn run_quote(&self) -> Result<()> {
        let mut orchestrator = RequestOrchestrator::new(self.service());

        let spinner = Self::spinner("Fetching quote of the day...");
        let outcome = orchestrator.fetch_quote().await;
        spinner.finish_and_clear();

        match outcome {
            Ok(()) => {
                if let Some(quote) = orchestrator.quote_state().quote() {
                    println!("\"{}\"", quote.quote);
                    println!("    - {}, {}", quote.author, quote.context);
                }
                Ok(())
            }
            Err(error) => {
                debug!("Quote fetch failed: {}", error);
                warn!("No quote available yet. Try again in a moment.");
                Ok(())
            }
        }
    }
}
