use std::collections::BTreeSet;

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle,
};

use super::theme::{type_color, ACCENT_GOLD, ACCENT_TEAL, BG_HIGHLIGHT, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::catalog::CreatureRecord;

/// Catalog list; mounts the detail modal for the highlighted entry
pub struct DexList {
    list: SelectList,
}

pub struct DexListProps<'a> {
    pub entries: &'a [CreatureRecord],
    pub selected: usize,
    pub favourites: &'a BTreeSet<String>,
    pub is_focused: bool,
    // Action constructors
    pub on_select: fn(usize) -> Action,
    pub on_open: fn() -> Action,
}

impl Default for DexList {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
        }
    }
}

impl DexList {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(props: &DexListProps<'_>) -> Vec<Line<'static>> {
        props
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let marker = if props.favourites.contains(&entry.name) {
                    "*"
                } else {
                    " "
                };
                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(ACCENT_GOLD)),
                    Span::raw(format!(" #{:03} {:<12}", index + 1, entry.name)),
                ];
                for kind in &entry.types {
                    spans.push(Span::styled(
                        format!(" {kind}"),
                        Style::default().fg(type_color(kind)),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    }

    fn list_style() -> SelectListStyle {
        SelectListStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: None,
                fg: Some(TEXT_MAIN),
            },
            selection: SelectionStyle {
                style: Some(
                    Style::default()
                        .bg(BG_HIGHLIGHT)
                        .fg(TEXT_MAIN)
                        .add_modifier(Modifier::BOLD),
                ),
                marker: None,
                disabled: false,
            },
            ..SelectListStyle::default()
        }
    }
}

impl Component<Action> for DexList {
    type Props<'a> = DexListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Enter => vec![(props.on_open)()],
            KeyCode::Char('q') => vec![Action::Quit],
            _ => {
                let items = Self::items(&props);
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: props.selected.min(items.len().saturating_sub(1)),
                    is_focused: true,
                    style: Self::list_style(),
                    behavior: SelectListBehavior {
                        show_scrollbar: true,
                        wrap_navigation: false,
                    },
                    on_select: props.on_select,
                    render_item: &|item| item.clone(),
                };
                self.list.handle_event(event, list_props).into_iter().collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border = if props.is_focused { ACCENT_TEAL } else { TEXT_DIM };
        let block = Block::default()
            .borders(Borders::ALL)
            .title("DEX")
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items = Self::items(&props);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.selected.min(items.len().saturating_sub(1)),
            is_focused: props.is_focused,
            style: Self::list_style(),
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            on_select: props.on_select,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, inner, list_props);
    }
}
