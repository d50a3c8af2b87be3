pub mod artwork_view;
pub mod dex_list;
pub mod modal_header;
pub mod pokemon_about;
pub mod pokemon_evolution;
pub mod pokemon_modal;
pub mod pokemon_moves;
pub mod pokemon_stats;
pub mod status_footer;
pub mod suspense;
pub mod tab_content;
pub mod theme;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use artwork_view::{ArtworkView, ArtworkViewProps};
pub use dex_list::{DexList, DexListProps};
pub use modal_header::{ModalHeader, ModalHeaderProps, FAVOURITE_ICON, NOT_FAVOURITE_ICON};
pub use pokemon_about::{PokemonAbout, PokemonAboutProps};
pub use pokemon_evolution::{PokemonEvolution, PokemonEvolutionProps};
pub use pokemon_modal::{detail_props, modal_area, PokemonModal, PokemonModalProps};
pub use pokemon_moves::{PokemonMoves, PokemonMovesProps};
pub use pokemon_stats::{PokemonStats, PokemonStatsProps};
pub use status_footer::{StatusFooter, StatusFooterProps};
pub use suspense::{Suspense, SuspenseProps, LOADING_TEXT};
pub use tab_content::{TabContent, TabContentProps};
