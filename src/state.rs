//! Application state - single source of truth

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

use crate::artwork::Artwork;
use crate::catalog::{Catalog, CreatureRecord};
use crate::panels::{PanelModules, PanelSource};

/// Everything the dex list, the detail modal and the status bar render from
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    pub entries: Vec<CreatureRecord>,
    pub selected_index: usize,
    /// Entry shown in the detail modal; `None` means the modal is unmounted
    pub detail: Option<usize>,
    /// Favourite creature names, owned here and passed to the modal as a flag
    pub favourites: BTreeSet<String>,
    pub panels: PanelModules,
    pub panel_source: PanelSource,
    /// Directory of the catalog file, for relative artwork references
    pub catalog_dir: Option<PathBuf>,
    pub artwork: BTreeMap<String, DataResource<Artwork>>,
    pub message: Option<String>,
}

impl AppState {
    pub fn new(catalog: Catalog, panel_source: PanelSource, catalog_dir: Option<PathBuf>) -> Self {
        Self {
            entries: catalog.entries,
            panel_source,
            catalog_dir,
            ..Self::default()
        }
    }

    /// Catalog index of `name`, ignoring case
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn selected(&self) -> Option<&CreatureRecord> {
        self.entries.get(self.selected_index)
    }

    pub fn detail_record(&self) -> Option<&CreatureRecord> {
        self.detail.and_then(|index| self.entries.get(index))
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_record().is_some()
    }

    pub fn is_favourite(&self, name: &str) -> bool {
        self.favourites.contains(name)
    }

    pub fn artwork_for(&self, name: &str) -> Option<&Artwork> {
        self.artwork.get(name).and_then(DataResource::data)
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Dex")
                .entry("entries", ron_string(&self.entries.len()))
                .entry("selected", ron_string(&self.selected_index))
                .entry(
                    "detail",
                    ron_string(&self.detail_record().map(|record| record.name.clone())),
                )
                .entry("favourites", ron_string(&self.favourites)),
            DebugSection::new("Panels")
                .entry("source", ron_string(&self.panel_source))
                .entry("resolved", ron_string(&self.panels.resolved_count()))
                .entry("about", ron_string(&resource_status(&self.panels.about)))
                .entry(
                    "base_stats",
                    ron_string(&resource_status(&self.panels.base_stats)),
                )
                .entry(
                    "evolution",
                    ron_string(&resource_status(&self.panels.evolution)),
                )
                .entry("moves", ron_string(&resource_status(&self.panels.moves))),
            DebugSection::new("Status")
                .entry("artwork", ron_string(&self.artwork.len()))
                .entry("message", ron_string(&self.message)),
        ]
    }
}

fn resource_status<T>(resource: &DataResource<T>) -> &'static str {
    if resource.is_loaded() {
        "loaded"
    } else if resource.is_loading() {
        "loading"
    } else if resource.is_failed() {
        "failed"
    } else {
        "empty"
    }
}
