//! Panel modules for the detail modal's content views.
//!
//! Each tab's view ships a small presentation module (heading, labels,
//! empty-state text, bar scale). Modules resolve on first activation of their
//! tab and stay cached in [`PanelModules`] for the rest of the session.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::tabs::ModalTab;

const BUILTIN_ABOUT: &str = include_str!("../assets/panels/about.ron");
const BUILTIN_BASE_STATS: &str = include_str!("../assets/panels/base-stats.ron");
const BUILTIN_EVOLUTION: &str = include_str!("../assets/panels/evolution.ron");
const BUILTIN_MOVES: &str = include_str!("../assets/panels/moves.ron");

/// Presentation module of a single content view
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PanelModule {
    pub heading: String,
    pub labels: Vec<String>,
    pub empty: String,
    /// Upper bound for bar charts; 0 means "no bars"
    pub scale: u16,
}

impl PanelModule {
    pub fn label<'a>(&'a self, index: usize, fallback: &'a str) -> &'a str {
        self.labels
            .get(index)
            .map(String::as_str)
            .unwrap_or(fallback)
    }

    pub fn empty_text(&self) -> &str {
        if self.empty.is_empty() {
            "Nothing to show."
        } else {
            &self.empty
        }
    }
}

/// Where panel modules are resolved from
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum PanelSource {
    #[default]
    Builtin,
    Dir(PathBuf),
}

#[derive(thiserror::Error, Debug)]
pub enum PanelError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid {tab} module: {source}")]
    Parse {
        tab: ModalTab,
        source: ron::error::SpannedError,
    },
}

/// Resolve the module for `tab`
pub async fn load_module(source: &PanelSource, tab: ModalTab) -> Result<PanelModule, PanelError> {
    let text = match source {
        PanelSource::Builtin => builtin_source(tab).to_string(),
        PanelSource::Dir(dir) => {
            let path = dir.join(format!("{}.ron", tab.id()));
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| PanelError::Read { path, source })?
        }
    };
    let module = parse_module(tab, &text)?;
    tracing::debug!(%tab, heading = %module.heading, "panel module parsed");
    Ok(module)
}

pub fn parse_module(tab: ModalTab, text: &str) -> Result<PanelModule, PanelError> {
    ron::de::from_str(text).map_err(|source| PanelError::Parse { tab, source })
}

fn builtin_source(tab: ModalTab) -> &'static str {
    match tab {
        ModalTab::About => BUILTIN_ABOUT,
        ModalTab::BaseStats => BUILTIN_BASE_STATS,
        ModalTab::Evolution => BUILTIN_EVOLUTION,
        ModalTab::Moves => BUILTIN_MOVES,
    }
}

/// Resolution state of every tab's module
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct PanelModules {
    pub about: DataResource<PanelModule>,
    pub base_stats: DataResource<PanelModule>,
    pub evolution: DataResource<PanelModule>,
    pub moves: DataResource<PanelModule>,
}

impl Default for PanelModules {
    fn default() -> Self {
        Self {
            about: DataResource::Empty,
            base_stats: DataResource::Empty,
            evolution: DataResource::Empty,
            moves: DataResource::Empty,
        }
    }
}

impl PanelModules {
    /// Every tab resolved from the built-in modules
    pub fn builtin_resolved() -> Result<Self, PanelError> {
        let mut modules = Self::default();
        for tab in ModalTab::ALL {
            modules.resolve(tab, parse_module(tab, builtin_source(tab))?);
        }
        Ok(modules)
    }

    pub fn get(&self, tab: ModalTab) -> &DataResource<PanelModule> {
        match tab {
            ModalTab::About => &self.about,
            ModalTab::BaseStats => &self.base_stats,
            ModalTab::Evolution => &self.evolution,
            ModalTab::Moves => &self.moves,
        }
    }

    fn slot_mut(&mut self, tab: ModalTab) -> &mut DataResource<PanelModule> {
        match tab {
            ModalTab::About => &mut self.about,
            ModalTab::BaseStats => &mut self.base_stats,
            ModalTab::Evolution => &mut self.evolution,
            ModalTab::Moves => &mut self.moves,
        }
    }

    pub fn module(&self, tab: ModalTab) -> Option<&PanelModule> {
        self.get(tab).data()
    }

    /// Mark `tab` as loading if nothing was requested for it yet.
    ///
    /// Returns `true` when the caller should start resolving the module.
    pub fn request(&mut self, tab: ModalTab) -> bool {
        let slot = self.slot_mut(tab);
        if slot.is_empty() {
            *slot = DataResource::Loading;
            true
        } else {
            false
        }
    }

    pub fn resolve(&mut self, tab: ModalTab, module: PanelModule) {
        *self.slot_mut(tab) = DataResource::Loaded(module);
    }

    pub fn fail(&mut self, tab: ModalTab, error: String) {
        *self.slot_mut(tab) = DataResource::Failed(error);
    }

    pub fn resolved_count(&self) -> usize {
        ModalTab::ALL
            .into_iter()
            .filter(|tab| self.get(*tab).is_loaded())
            .count()
    }
}
