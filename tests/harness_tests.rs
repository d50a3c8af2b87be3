//! Store, component and render tests combined through EffectStoreTestHarness
//!
//! Effects are drained and answered by hand with the actions the effect
//! handler would produce, so panel resolution order is under test control.

use pokemodal::{
    action::Action,
    artwork::{decode_artwork, ARTWORK_COLS, ARTWORK_ROWS},
    catalog::{builtin_asset_dir, Catalog},
    components::{
        detail_props, Component, PokemonModal, StatusFooter, StatusFooterProps, FAVOURITE_ICON,
        LOADING_TEXT,
    },
    effect::Effect,
    panels::{PanelModule, PanelModules, PanelSource},
    reducer::reducer,
    state::AppState,
    tabs::ModalTab,
};
use ratatui::{layout::Rect, Frame};
use tui_dispatch::testing::*;
use tui_dispatch::NumericComponentId;

fn catalog_state(selected: &str) -> AppState {
    let mut state = AppState::new(
        Catalog::builtin().expect("builtin catalog"),
        PanelSource::Builtin,
        None,
    );
    state.selected_index = state.position(selected).expect("catalog entry");
    state
}

/// The built-in module for `tab`, as the effect handler would load it
fn builtin_module(tab: ModalTab) -> PanelModule {
    PanelModules::builtin_resolved()
        .expect("builtin modules")
        .module(tab)
        .cloned()
        .expect("builtin module")
}

fn panel_loaded(tab: ModalTab) -> Action {
    Action::PanelDidLoad {
        tab,
        module: builtin_module(tab),
    }
}

fn draw_detail(modal: &mut PokemonModal, frame: &mut Frame, area: Rect, state: &AppState) {
    modal.set_open(state.is_detail_open());
    if let Some(props) = detail_props(state, true) {
        modal.render(frame, area, props);
    }
}

// ============================================================================
// Panel resolution
// ============================================================================

#[test]
fn test_open_resolves_about_module() {
    let mut harness = EffectStoreTestHarness::new(catalog_state("Pikachu"), reducer);
    let mut modal = PokemonModal::new();

    harness.dispatch_collect(Action::DetailOpen);
    harness.assert_state(|s| s.is_detail_open());
    harness.assert_state(|s| s.panels.get(ModalTab::About).is_loading());

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(|e| {
        matches!(
            e,
            Effect::LoadPanel {
                tab: ModalTab::About,
                source: PanelSource::Builtin,
            }
        )
    });

    let output = harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    assert!(output.contains(LOADING_TEXT), "{output}");
    assert!(output.contains("Pikachu"));

    harness.complete_action(panel_loaded(ModalTab::About));
    let (changed, total) = harness.process_emitted();
    assert_eq!((changed, total), (1, 1));

    let output = harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    assert!(!output.contains(LOADING_TEXT), "{output}");
    assert!(output.contains("Base Exp."));
    assert!(output.contains("0.4 m"));
}

#[test]
fn test_rapid_tab_switching_settles_on_last_tab() {
    let mut harness = EffectStoreTestHarness::new(catalog_state("Eevee"), reducer);
    let mut modal = PokemonModal::new();

    harness.dispatch_collect(Action::DetailOpen);
    harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });

    // About -> Moves -> About before either module resolves
    let actions = harness.send_keys::<NumericComponentId, _, _>("4 1", |state, event| {
        let props = detail_props(state, true).expect("modal open");
        modal
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });
    actions.assert_count(2);
    for action in actions {
        harness.dispatch_collect(action);
    }

    let effects = harness.drain_effects();
    effects.effects_count(2);
    effects.effects_none_match(|e| matches!(e, Effect::LoadArtwork { .. }));

    // Resolutions arrive out of order
    harness.complete_action(panel_loaded(ModalTab::Moves));
    harness.complete_action(panel_loaded(ModalTab::About));
    harness.process_emitted();

    assert_eq!(modal.current_tab(), ModalTab::About);
    let output = harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    assert!(output.contains("Base Exp."), "{output}");
    assert!(!output.contains("Method"), "{output}");
}

#[test]
fn test_resolved_module_not_requested_again() {
    let mut harness = EffectStoreTestHarness::new(catalog_state("Gengar"), reducer);

    harness.dispatch_collect(Action::DetailOpen);
    harness.dispatch_collect(Action::ModalTabDidChange(ModalTab::Evolution));
    harness.drain_effects();
    harness.complete_action(panel_loaded(ModalTab::About));
    harness.complete_action(panel_loaded(ModalTab::Evolution));
    harness.process_emitted();

    let results = harness.dispatch_all([
        Action::ModalTabDidChange(ModalTab::About),
        Action::ModalTabDidChange(ModalTab::Evolution),
        Action::DetailClose,
        Action::DetailOpen,
    ]);
    assert_eq!(results, vec![false, false, true, true]);

    harness.drain_effects().effects_empty();
    harness.assert_state(|s| s.panels.resolved_count() == 2);
}

#[test]
fn test_panel_error_reaches_status_bar() {
    let mut harness = EffectStoreTestHarness::new(catalog_state("Squirtle"), reducer);
    let mut modal = PokemonModal::new();
    let mut footer = StatusFooter::new();

    harness.dispatch_collect(Action::DetailOpen);
    harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    modal.change_tab(ModalTab::Moves, Action::ModalTabDidChange);
    harness.dispatch_collect(Action::ModalTabDidChange(ModalTab::Moves));
    harness.drain_effects();

    harness.complete_action(Action::PanelDidError {
        tab: ModalTab::Moves,
        error: "missing moves.ron".into(),
    });
    harness.process_emitted();

    harness.assert_state(|s| s.panels.get(ModalTab::Moves).is_failed());

    let output = harness.render_plain(120, 1, |frame, area, state| {
        footer.render(
            frame,
            area,
            StatusFooterProps {
                message: state.message.as_deref(),
                detail_open: state.is_detail_open(),
            },
        );
    });
    assert!(output.contains("missing moves.ron"), "{output}");

    // The failed view keeps its placeholder
    let output = harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    assert!(output.contains(LOADING_TEXT), "{output}");
}

// ============================================================================
// Artwork
// ============================================================================

#[test]
fn test_shipped_artwork_overlaps_header() {
    let mut harness = EffectStoreTestHarness::new(catalog_state("Gengar"), reducer);
    let mut modal = PokemonModal::new();

    harness.dispatch_collect(Action::DetailOpen);
    let effects = harness.drain_effects();
    effects.effects_count(2);
    effects.effects_all_match(|e| match e {
        Effect::LoadArtwork { name, path, .. } => {
            name == "Gengar" && path.ends_with("artwork/gengar.png")
        }
        Effect::LoadPanel { .. } => true,
    });

    let bytes = std::fs::read(builtin_asset_dir().join("artwork/gengar.png")).expect("asset");
    let artwork = decode_artwork(&bytes, ARTWORK_COLS, ARTWORK_ROWS).expect("decode");
    harness.complete_action(Action::ArtworkDidLoad {
        name: "Gengar".into(),
        artwork,
    });
    harness.complete_action(panel_loaded(ModalTab::About));
    harness.process_emitted();

    let output = harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    assert!(
        output.contains('\u{2580}') || output.contains('\u{2584}'),
        "{output}"
    );
    assert!(!output.contains("artwork/gengar.png"), "{output}");
}

// ============================================================================
// Favourite and unmount
// ============================================================================

#[test]
fn test_favourite_key_rerenders_filled_icon() {
    let mut harness = EffectStoreTestHarness::new(catalog_state("Bulbasaur"), reducer);
    let mut modal = PokemonModal::new();

    harness.dispatch_collect(Action::DetailOpen);
    let before = harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    assert!(!before.contains(FAVOURITE_ICON));

    let actions = harness.send_keys::<NumericComponentId, _, _>("f", |state, event| {
        let props = detail_props(state, true).expect("modal open");
        modal
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });
    for action in actions {
        harness.dispatch_collect(action);
    }

    harness.assert_state(|s| s.is_favourite("Bulbasaur"));
    let after = harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    assert!(after.contains(FAVOURITE_ICON), "{after}");
}

#[test]
fn test_close_unmounts_and_reopen_starts_on_about() {
    let mut harness = EffectStoreTestHarness::new(catalog_state("Charmander"), reducer);
    let mut modal = PokemonModal::new();

    harness.dispatch_collect(Action::DetailOpen);
    harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    modal.change_tab(ModalTab::BaseStats, Action::ModalTabDidChange);

    harness.dispatch_collect(Action::DetailClose);
    let output = harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    assert!(!output.contains("Charmander"), "{output}");

    harness.dispatch_collect(Action::DetailOpen);
    harness.render_plain(80, 34, |frame, area, state| {
        draw_detail(&mut modal, frame, area, state)
    });
    assert_eq!(modal.current_tab(), ModalTab::About);
}
