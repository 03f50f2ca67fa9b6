use std::sync::Arc;

use screening_export::render::Renderer;
use screening_export::styles::PageStyles;
use screening_instruments::definition::load_dir;
use screening_instruments::Registry;

use crate::config::AppConfig;
use crate::manifest::{build_manifest, SlideManifest};

/// Shared application state, injected into all route handlers via Axum state.
/// Everything in it is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub renderer: Arc<Renderer>,
    pub slides: Arc<SlideManifest>,
}

impl AppState {
    pub fn new(registry: Registry, renderer: Renderer, slides: SlideManifest) -> Self {
        Self {
            registry: Arc::new(registry),
            renderer: Arc::new(renderer),
            slides: Arc::new(slides),
        }
    }

    /// Build state from configuration. A malformed instrument definition or
    /// unreadable content directory aborts startup.
    pub fn from_config(config: &AppConfig) -> eyre::Result<Self> {
        let registry = match &config.content.instrument_dir {
            Some(dir) => Registry::with_declared(load_dir(dir)?)?,
            None => Registry::builtin()?,
        };
        tracing::info!(instruments = registry.len(), "instrument registry ready");

        let slides = match &config.content.slides_dir {
            Some(dir) => build_manifest(dir, &config.content.slides_prefix)?,
            None => {
                tracing::info!("no slides directory configured, serving an empty manifest");
                SlideManifest::new()
            }
        };

        let renderer = Renderer::new(PageStyles::default())?;
        Ok(Self::new(registry, renderer, slides))
    }
}
