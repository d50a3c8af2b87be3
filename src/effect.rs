//! Effects - side effects declared by the reducer

use std::path::PathBuf;

use crate::panels::PanelSource;
use crate::tabs::ModalTab;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Resolve the panel module of a tab
    LoadPanel { tab: ModalTab, source: PanelSource },
    /// Decode a local artwork file into a `cols` x `rows` cell picture
    LoadArtwork {
        name: String,
        path: PathBuf,
        cols: u16,
        rows: u16,
    },
}
