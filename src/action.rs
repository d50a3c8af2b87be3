//! Actions: intents from the dex list and the detail modal, plus async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::artwork::Artwork;
use crate::panels::PanelModule;
use crate::tabs::ModalTab;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Dex category =====
    /// Highlight a catalog entry (by index)
    DexSelect(usize),

    // ===== Detail category =====
    /// Mount the detail modal for the highlighted entry
    DetailOpen,

    /// Unmount the detail modal (the modal's back control)
    DetailClose,

    // ===== Favourite category =====
    /// Flip favourite membership of the record shown in the modal
    FavouriteToggle,

    // ===== Modal category =====
    /// The modal switched tabs; resolve that tab's panel module if needed
    ModalTabDidChange(ModalTab),

    // ===== Panel category =====
    PanelDidLoad { tab: ModalTab, module: PanelModule },
    PanelDidError { tab: ModalTab, error: String },

    // ===== Artwork category =====
    ArtworkDidLoad { name: String, artwork: Artwork },
    ArtworkDidError { name: String, error: String },

    // ===== Uncategorized (global) =====
    /// Force a re-render
    Render,

    /// Exit the application
    Quit,
}
