use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Borders, Tabs},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, BorderStyle, Modal, ModalBehavior, ModalProps, ModalStyle, Padding,
};

use super::theme::{ACCENT_TEAL, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use super::{
    ArtworkView, ArtworkViewProps, Component, ModalHeader, ModalHeaderProps, PokemonMoves,
    TabContent, TabContentProps,
};
use crate::action::Action;
use crate::artwork::{Artwork, ARTWORK_COLS, ARTWORK_ROWS};
use crate::catalog::{ChainLink, CreatureRecord, MoveEntry};
use crate::panels::PanelModules;
use crate::state::AppState;
use crate::tabs::{ModalTab, TabState};

pub const MODAL_WIDTH: u16 = 64;
pub const MODAL_HEIGHT: u16 = 30;

/// Header rows above the artwork overlap: controls, name, chips
const HEADER_ROWS: u16 = 3;
/// Artwork rows on each side of the header/content boundary
const OVERLAP_ROWS: u16 = ARTWORK_ROWS / 2;

/// Detail modal of one creature.
///
/// The selected tab and the moves cursor are the only state kept here.
/// Record data and the favourite flag come in through props every render,
/// and back / favourite only emit the parent's actions.
pub struct PokemonModal {
    tabs: TabState,
    move_cursor: usize,
    moves_view: PokemonMoves,
    modal: Modal,
    was_open: bool,
}

#[derive(Clone, Copy)]
pub struct PokemonModalProps<'a> {
    pub name: &'a str,
    pub types: &'a [String],
    pub image_url: &'a str,
    pub experience: u32,
    pub height: u32,
    pub weight: u32,
    pub moves: &'a [MoveEntry],
    pub abilities: &'a [String],
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
    pub description: &'a str,
    pub evolutions: &'a [ChainLink],
    pub is_favourite: bool,
    pub artwork: Option<&'a Artwork>,
    pub panels: &'a PanelModules,
    pub is_focused: bool,
    // Action constructors
    pub on_toggle_favourite: fn() -> Action,
    pub on_close: fn() -> Action,
    pub on_tab_change: fn(ModalTab) -> Action,
}

impl<'a> PokemonModalProps<'a> {
    /// Props for `record` wired to the application's own actions
    pub fn from_record(
        record: &'a CreatureRecord,
        is_favourite: bool,
        panels: &'a PanelModules,
    ) -> Self {
        Self {
            name: &record.name,
            types: &record.types,
            image_url: &record.image_url,
            experience: record.experience,
            height: record.height,
            weight: record.weight,
            moves: &record.moves,
            abilities: &record.abilities,
            hp: record.hp,
            attack: record.attack,
            defense: record.defense,
            special_attack: record.special_attack,
            special_defense: record.special_defense,
            speed: record.speed,
            description: &record.description,
            evolutions: &record.evolutions,
            is_favourite,
            artwork: None,
            panels,
            is_focused: true,
            on_toggle_favourite: || Action::FavouriteToggle,
            on_close: || Action::DetailClose,
            on_tab_change: Action::ModalTabDidChange,
        }
    }
}

/// Props of the mounted modal, if any, with favourite flag and artwork taken
/// from the store
pub fn detail_props(state: &AppState, is_focused: bool) -> Option<PokemonModalProps<'_>> {
    let record = state.detail_record()?;
    Some(PokemonModalProps {
        artwork: state.artwork_for(&record.name),
        is_focused,
        ..PokemonModalProps::from_record(record, state.is_favourite(&record.name), &state.panels)
    })
}

impl Default for PokemonModal {
    fn default() -> Self {
        Self {
            tabs: TabState::new(),
            move_cursor: 0,
            moves_view: PokemonMoves::new(),
            modal: Modal::new(),
            was_open: false,
        }
    }
}

impl PokemonModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track mount state; a modal mounted again starts over on About
    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.tabs.reset();
            self.move_cursor = 0;
        }
        self.was_open = is_open;
    }

    pub fn current_tab(&self) -> ModalTab {
        self.tabs.current()
    }

    /// Highlighted row of the Moves tab
    pub fn move_cursor(&self) -> usize {
        self.move_cursor
    }

    /// Move the Moves cursor by `step`, clamped to `count` rows
    fn step_moves(&mut self, step: isize, count: usize) {
        let last = count.saturating_sub(1);
        self.move_cursor = self.move_cursor.saturating_add_signed(step).min(last);
    }

    /// Tab-change handler: select `tab` and tell the store about it
    pub fn change_tab(&mut self, tab: ModalTab, on_tab_change: fn(ModalTab) -> Action) -> Action {
        self.tabs.select(tab);
        on_tab_change(tab)
    }

    /// Select by tab id; unknown ids change nothing and emit nothing
    pub fn change_tab_id(
        &mut self,
        id: &str,
        on_tab_change: fn(ModalTab) -> Action,
    ) -> Option<Action> {
        self.tabs.select_id(id).map(on_tab_change)
    }
}

/// Screen rect of the modal inside `area`
pub fn modal_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(2).min(MODAL_WIDTH);
    let height = area.height.saturating_sub(2).min(MODAL_HEIGHT);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn modal_style() -> ModalStyle {
    ModalStyle {
        dim_factor: 0.6,
        base: BaseStyle {
            border: Some(BorderStyle {
                borders: Borders::ALL,
                style: Style::default().fg(TEXT_DIM),
                focused_style: Some(Style::default().fg(ACCENT_TEAL)),
            }),
            padding: Padding::default(),
            bg: Some(BG_PANEL),
            fg: Some(TEXT_MAIN),
        },
    }
}

fn render_body(
    frame: &mut Frame,
    area: Rect,
    tab: ModalTab,
    props: &PokemonModalProps<'_>,
    moves_view: &mut PokemonMoves,
    move_selected: usize,
) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_ROWS + OVERLAP_ROWS), // Header panel
        Constraint::Length(OVERLAP_ROWS),               // Artwork overlap
        Constraint::Length(1),                          // Tab bar
        Constraint::Length(1),                          // Spacer
        Constraint::Min(1),                             // Content view
    ])
    .split(area);

    let mut header = ModalHeader;
    header.render(
        frame,
        chunks[0],
        ModalHeaderProps {
            name: props.name,
            types: props.types,
            is_favourite: props.is_favourite,
        },
    );

    let tabs = Tabs::new(ModalTab::ALL.map(ModalTab::label))
        .select(tab.index())
        .style(Style::default().fg(TEXT_DIM))
        .highlight_style(
            Style::default()
                .fg(ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[2]);

    let content_area = Rect {
        x: chunks[4].x + 1,
        width: chunks[4].width.saturating_sub(2),
        ..chunks[4]
    };
    let mut content = TabContent;
    content.render(
        frame,
        content_area,
        TabContentProps {
            tab,
            modal: props,
            moves_view,
            move_selected,
        },
    );

    // Drawn after both panels so it sits across their boundary
    let width = ARTWORK_COLS.min(area.width);
    let top = chunks[0].bottom().saturating_sub(OVERLAP_ROWS).max(area.y);
    let artwork_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: top,
        width,
        height: ARTWORK_ROWS.min(area.bottom().saturating_sub(top)),
    };
    let mut artwork = ArtworkView;
    artwork.render(
        frame,
        artwork_area,
        ArtworkViewProps {
            artwork: props.artwork,
            reference: props.image_url,
        },
    );
}

impl Component<Action> for PokemonModal {
    type Props<'a> = PokemonModalProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some((props.on_close)()),
            KeyCode::Char('f') => Some((props.on_toggle_favourite)()),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
                Some((props.on_tab_change)(self.tabs.cycle(-1)))
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                Some((props.on_tab_change)(self.tabs.cycle(1)))
            }
            KeyCode::Down | KeyCode::Char('j') if self.tabs.current() == ModalTab::Moves => {
                self.step_moves(1, props.moves.len());
                None
            }
            KeyCode::Up | KeyCode::Char('k') if self.tabs.current() == ModalTab::Moves => {
                self.step_moves(-1, props.moves.len());
                None
            }
            KeyCode::Char(digit @ '1'..='4') => ModalTab::from_index(digit as usize - '1' as usize)
                .map(|tab| self.change_tab(tab, props.on_tab_change)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let modal_area = modal_area(area);
        if modal_area.width < 30 || modal_area.height < 16 {
            return;
        }

        let tab = self.tabs.current();
        let move_selected = self.move_cursor;
        let PokemonModal {
            modal, moves_view, ..
        } = self;
        let mut render_content = |frame: &mut Frame, content_area: Rect| {
            render_body(frame, content_area, tab, &props, moves_view, move_selected);
        };

        modal.render(
            frame,
            area,
            ModalProps {
                is_open: true,
                is_focused: props.is_focused,
                area: modal_area,
                style: modal_style(),
                behavior: ModalBehavior {
                    close_on_esc: false,
                    close_on_backdrop: false,
                },
                on_close: props.on_close,
                render_content: &mut render_content,
            },
        );
    }
}
