use ratatui::{layout::Rect, Frame};

use super::{
    Component, PokemonAbout, PokemonAboutProps, PokemonEvolution, PokemonEvolutionProps,
    PokemonModalProps, PokemonMoves, PokemonMovesProps, PokemonStats, PokemonStatsProps, Suspense,
    SuspenseProps,
};
use crate::action::Action;
use crate::panels::PanelModule;
use crate::tabs::ModalTab;

/// Picks the single content view of the selected tab and threads it the
/// fields it needs, behind that tab's loading boundary.
pub struct TabContent;

pub struct TabContentProps<'a> {
    pub tab: ModalTab,
    pub modal: &'a PokemonModalProps<'a>,
    /// Moves table, kept by the modal so its scroll survives redraws
    pub moves_view: &'a mut PokemonMoves,
    pub move_selected: usize,
}

impl Component<Action> for TabContent {
    type Props<'a> = TabContentProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let record = props.modal;
        let moves_view = props.moves_view;
        let move_selected = props.move_selected;
        let module = record.panels.get(props.tab);
        let mut suspense = Suspense;

        match props.tab {
            ModalTab::About => {
                let mut render_content = |frame: &mut Frame, area: Rect, module: &PanelModule| {
                    PokemonAbout.render(
                        frame,
                        area,
                        PokemonAboutProps {
                            experience: record.experience,
                            height: record.height,
                            weight: record.weight,
                            abilities: record.abilities,
                            description: record.description,
                            module,
                        },
                    );
                };
                suspense.render(
                    frame,
                    area,
                    SuspenseProps {
                        module,
                        render_content: &mut render_content,
                    },
                );
            }
            ModalTab::BaseStats => {
                let mut render_content = |frame: &mut Frame, area: Rect, module: &PanelModule| {
                    PokemonStats.render(
                        frame,
                        area,
                        PokemonStatsProps {
                            hp: record.hp,
                            attack: record.attack,
                            defense: record.defense,
                            special_attack: record.special_attack,
                            special_defense: record.special_defense,
                            speed: record.speed,
                            module,
                        },
                    );
                };
                suspense.render(
                    frame,
                    area,
                    SuspenseProps {
                        module,
                        render_content: &mut render_content,
                    },
                );
            }
            ModalTab::Evolution => {
                let mut render_content = |frame: &mut Frame, area: Rect, module: &PanelModule| {
                    PokemonEvolution.render(
                        frame,
                        area,
                        PokemonEvolutionProps {
                            name: record.name,
                            evolutions: record.evolutions,
                            module,
                        },
                    );
                };
                suspense.render(
                    frame,
                    area,
                    SuspenseProps {
                        module,
                        render_content: &mut render_content,
                    },
                );
            }
            ModalTab::Moves => {
                let mut render_content = |frame: &mut Frame, area: Rect, module: &PanelModule| {
                    moves_view.render(
                        frame,
                        area,
                        PokemonMovesProps {
                            moves: record.moves,
                            selected: move_selected,
                            module,
                        },
                    );
                };
                suspense.render(
                    frame,
                    area,
                    SuspenseProps {
                        module,
                        render_content: &mut render_content,
                    },
                );
            }
        }
    }
}
