//! Startup wiring: configuration, page document and notes client.

use std::path::PathBuf;
use std::sync::Arc;

use coursenotes_core::{ClientConfig, NotesApiClient, PageData, SemesterTabs};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid configuration: {0}")]
    Config(#[source] coursenotes_core::Error),

    #[error("failed to load page data from {path}: {source}")]
    PageData {
        path: PathBuf,
        #[source]
        source: coursenotes_core::Error,
    },

    #[error("invalid semester panels: {0}")]
    Panels(#[source] coursenotes_core::Error),

    #[error("failed to build notes client: {0}")]
    Client(#[source] coursenotes_core::Error),
}

/// Everything the page needs before the first render
#[derive(Debug, Clone)]
pub struct PageBootstrap {
    pub page: PageData,
    pub tabs: SemesterTabs,
    pub api_client: Arc<NotesApiClient>,
}

/// Resolve configuration from the environment and prepare the page.
pub fn bootstrap_from_env() -> Result<PageBootstrap, BootstrapError> {
    let config = ClientConfig::from_env().map_err(BootstrapError::Config)?;
    bootstrap(&config)
}

pub fn bootstrap(config: &ClientConfig) -> Result<PageBootstrap, BootstrapError> {
    let page = load_page(config)?;
    let tabs = SemesterTabs::new(&page.semesters).map_err(BootstrapError::Panels)?;
    let api_client = NotesApiClient::from_config(config).map_err(BootstrapError::Client)?;

    tracing::info!(
        "Page ready: {} semesters, {} notes, notes server at {}",
        page.semesters.len(),
        page.notes.len(),
        api_client.base_url()
    );

    Ok(PageBootstrap {
        page,
        tabs,
        api_client: Arc::new(api_client),
    })
}

fn load_page(config: &ClientConfig) -> Result<PageData, BootstrapError> {
    let Some(path) = config.page_data_path.as_ref() else {
        tracing::info!("No page document configured, starting with an empty page");
        return Ok(PageData::default());
    };

    PageData::load(path).map_err(|source| BootstrapError::PageData {
        path: path.clone(),
        source,
    })
}
