//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::artwork::{self, ARTWORK_COLS, ARTWORK_ROWS};
use crate::effect::Effect;
use crate::state::AppState;
use crate::tabs::ModalTab;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Dex actions =====
        Action::DexSelect(index) => {
            if index < state.entries.len() && index != state.selected_index {
                state.selected_index = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Detail actions =====
        Action::DetailOpen => {
            if state.is_detail_open() || state.selected().is_none() {
                return DispatchResult::unchanged();
            }
            state.detail = Some(state.selected_index);
            state.message = None;

            // A freshly mounted modal always starts on About
            let mut effects: Vec<Effect> = request_panel(state, ModalTab::About).into_iter().collect();
            effects.extend(request_artwork(state));
            DispatchResult::changed_with_many(effects)
        }

        Action::DetailClose => {
            if state.detail.take().is_some() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Favourite actions =====
        Action::FavouriteToggle => {
            let Some(name) = state.detail_record().map(|record| record.name.clone()) else {
                return DispatchResult::unchanged();
            };
            if !state.favourites.remove(&name) {
                state.favourites.insert(name);
            }
            DispatchResult::changed()
        }

        // ===== Modal actions =====
        Action::ModalTabDidChange(tab) => match request_panel(state, tab) {
            Some(effect) => DispatchResult::changed_with(effect),
            None => DispatchResult::unchanged(),
        },

        // ===== Panel actions =====
        Action::PanelDidLoad { tab, module } => {
            state.panels.resolve(tab, module);
            DispatchResult::changed()
        }

        Action::PanelDidError { tab, error } => {
            state.message = Some(format!("{} panel failed: {error}", tab.label()));
            state.panels.fail(tab, error);
            DispatchResult::changed()
        }

        // ===== Artwork actions =====
        Action::ArtworkDidLoad { name, artwork } => {
            state.artwork.insert(name, DataResource::Loaded(artwork));
            DispatchResult::changed()
        }

        Action::ArtworkDidError { name, error } => {
            state.message = Some(format!("Artwork for {name} failed: {error}"));
            state.artwork.insert(name, DataResource::Failed(error));
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn request_panel(state: &mut AppState, tab: ModalTab) -> Option<Effect> {
    state.panels.request(tab).then(|| Effect::LoadPanel {
        tab,
        source: state.panel_source.clone(),
    })
}

fn request_artwork(state: &mut AppState) -> Option<Effect> {
    let record = state.detail_record()?;
    if record.image_url.is_empty() || state.artwork.contains_key(&record.name) {
        return None;
    }
    let path = artwork::resolve_path(&record.image_url, state.catalog_dir.as_deref()).ok()?;
    let name = record.name.clone();
    state.artwork.insert(name.clone(), DataResource::Loading);
    Some(Effect::LoadArtwork {
        name,
        path,
        cols: ARTWORK_COLS,
        rows: ARTWORK_ROWS,
    })
}
