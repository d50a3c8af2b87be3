//! Render tests for the detail modal using RenderHarness
//!
//! The modal renders into a test buffer and the plain-text output is checked
//! for the header, the selected tab's view and the absence of the others.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pokemodal::{
    action::Action,
    catalog::{Catalog, CreatureRecord, MoveEntry},
    components::{
        Component, PokemonModal, PokemonModalProps, FAVOURITE_ICON, LOADING_TEXT,
        NOT_FAVOURITE_ICON,
    },
    panels::PanelModules,
    tabs::ModalTab,
};
use tui_dispatch::testing::*;
use tui_dispatch::EventKind;

/// Text only the given tab's view draws
fn view_marker(tab: ModalTab) -> &'static str {
    match tab {
        ModalTab::About => "Base Exp.",
        ModalTab::BaseStats => "Sp. Atk",
        ModalTab::Evolution => "Evolution Chain",
        ModalTab::Moves => "Method",
    }
}

fn pikachu() -> CreatureRecord {
    Catalog::builtin()
        .expect("builtin catalog")
        .entries
        .into_iter()
        .find(|entry| entry.name == "Pikachu")
        .expect("pikachu entry")
}

fn render_modal(modal: &mut PokemonModal, props: PokemonModalProps<'_>) -> String {
    let mut render = RenderHarness::new(80, 34);
    render.render_to_string_plain(|frame| {
        modal.render(frame, frame.area(), props);
    })
}

#[test]
fn test_pikachu_opens_on_about() {
    let record = pikachu();
    let panels = PanelModules::builtin_resolved().expect("builtin modules");
    let mut modal = PokemonModal::new();

    let output = render_modal(
        &mut modal,
        PokemonModalProps::from_record(&record, false, &panels),
    );

    assert!(output.contains("Pikachu"), "name missing:\n{output}");
    assert_eq!(output.matches(" electric ").count(), 1, "one chip:\n{output}");
    assert!(output.contains("112"));
    assert!(output.contains("0.4 m"));
    assert!(output.contains("6.0 kg"));
    assert!(output.contains("static, lightning-rod"));
    assert!(output.contains("When several"));
    assert!(!output.contains(view_marker(ModalTab::BaseStats)));
    assert!(!output.contains(view_marker(ModalTab::Moves)));
}

#[test]
fn test_each_tab_renders_only_its_view() {
    let record = pikachu();
    let panels = PanelModules::builtin_resolved().expect("builtin modules");
    let props = PokemonModalProps::from_record(&record, false, &panels);

    for tab in ModalTab::ALL {
        let mut modal = PokemonModal::new();
        modal.change_tab(tab, Action::ModalTabDidChange);
        let output = render_modal(&mut modal, props);

        assert!(
            output.contains(view_marker(tab)),
            "{tab} view missing:\n{output}"
        );
        for other in ModalTab::ALL.into_iter().filter(|other| *other != tab) {
            assert!(
                !output.contains(view_marker(other)),
                "{other} view leaked into {tab}:\n{output}"
            );
        }
    }
}

#[test]
fn test_views_show_their_fields() {
    let record = pikachu();
    let panels = PanelModules::builtin_resolved().expect("builtin modules");
    let props = PokemonModalProps::from_record(&record, false, &panels);
    let mut modal = PokemonModal::new();

    modal.change_tab(ModalTab::BaseStats, Action::ModalTabDidChange);
    let output = render_modal(&mut modal, props);
    assert!(output.contains(" 90 "), "speed missing:\n{output}");
    assert!(output.contains("320"));

    modal.change_tab(ModalTab::Evolution, Action::ModalTabDidChange);
    let output = render_modal(&mut modal, props);
    for species in ["pichu", "pikachu", "raichu"] {
        assert!(output.contains(species), "{species} missing:\n{output}");
    }

    modal.change_tab(ModalTab::Moves, Action::ModalTabDidChange);
    let output = render_modal(&mut modal, props);
    assert!(output.contains("thunder shock"));
    assert!(output.contains("thunderbolt"));
}

#[test]
fn test_unresolved_module_shows_loading() {
    let record = pikachu();
    let panels = PanelModules::default();
    let mut modal = PokemonModal::new();

    let output = render_modal(
        &mut modal,
        PokemonModalProps::from_record(&record, false, &panels),
    );

    assert!(output.contains(LOADING_TEXT));
    assert!(!output.contains(view_marker(ModalTab::About)));
    // Header does not wait for the content
    assert!(output.contains("Pikachu"));
}

#[test]
fn test_favourite_icon_follows_parent() {
    let record = pikachu();
    let panels = PanelModules::builtin_resolved().expect("builtin modules");
    let mut modal = PokemonModal::new();

    let output = render_modal(
        &mut modal,
        PokemonModalProps::from_record(&record, false, &panels),
    );
    assert!(output.contains(NOT_FAVOURITE_ICON));
    assert!(!output.contains(FAVOURITE_ICON));

    let output = render_modal(
        &mut modal,
        PokemonModalProps::from_record(&record, true, &panels),
    );
    assert!(output.contains(FAVOURITE_ICON));
}

#[test]
fn test_chips_render_in_input_order() {
    let record = CreatureRecord {
        name: "Testmon".into(),
        types: vec!["poison".into(), "dragon".into(), "fairy".into()],
        ..Default::default()
    };
    let panels = PanelModules::builtin_resolved().expect("builtin modules");
    let mut modal = PokemonModal::new();

    let output = render_modal(
        &mut modal,
        PokemonModalProps::from_record(&record, false, &panels),
    );

    let chip_row = output
        .lines()
        .find(|line| line.contains(" poison "))
        .expect("chip row");
    let positions: Vec<usize> = [" poison ", " dragon ", " fairy "]
        .iter()
        .map(|chip| chip_row.find(chip).expect("chip present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{chip_row}");
}

#[test]
fn test_remote_artwork_shows_reference() {
    let record = CreatureRecord {
        name: "Testmon".into(),
        types: vec!["normal".into()],
        image_url: "https://x.io/1.png".into(),
        ..Default::default()
    };
    let panels = PanelModules::default();
    let mut modal = PokemonModal::new();

    let output = render_modal(
        &mut modal,
        PokemonModalProps::from_record(&record, false, &panels),
    );

    assert!(output.contains("https://x.io/1.png"));
}

#[test]
fn test_tiny_area_renders_nothing() {
    let record = pikachu();
    let panels = PanelModules::builtin_resolved().expect("builtin modules");
    let mut modal = PokemonModal::new();
    let mut render = RenderHarness::new(20, 8);

    let output = render.render_to_string_plain(|frame| {
        modal.render(
            frame,
            frame.area(),
            PokemonModalProps::from_record(&record, false, &panels),
        );
    });

    assert!(!output.contains("Pikachu"));
}

#[test]
fn test_long_move_list_scrolls_to_last_entry() {
    let record = CreatureRecord {
        name: "Testmon".into(),
        types: vec!["normal".into()],
        moves: (0..40)
            .map(|index| MoveEntry {
                name: format!("move{index:02}"),
                method: Some("level-up".into()),
                level: Some(index + 1),
            })
            .collect(),
        ..Default::default()
    };
    let panels = PanelModules::builtin_resolved().expect("builtin modules");
    let props = PokemonModalProps::from_record(&record, false, &panels);
    let mut modal = PokemonModal::new();
    modal.change_tab(ModalTab::Moves, Action::ModalTabDidChange);

    let output = render_modal(&mut modal, props);
    assert!(output.contains("move00"), "{output}");
    assert!(!output.contains("move39"), "{output}");

    let down = EventKind::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
    for _ in 0..45 {
        let actions: Vec<Action> = modal.handle_event(&down, props).into_iter().collect();
        actions.assert_empty();
    }
    assert_eq!(modal.move_cursor(), 39);

    let output = render_modal(&mut modal, props);
    assert!(output.contains("move39"), "{output}");
    assert!(!output.contains("move00"), "{output}");
}
