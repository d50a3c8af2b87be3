use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle,
};

use super::theme::{ACCENT_TEAL, BG_HIGHLIGHT, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;
use crate::catalog::MoveEntry;
use crate::panels::PanelModule;

const NAME_WIDTH: usize = 18;
const METHOD_WIDTH: usize = 12;

/// Move table; rows scroll with the cursor the modal keeps
pub struct PokemonMoves {
    list: SelectList,
}

pub struct PokemonMovesProps<'a> {
    pub moves: &'a [MoveEntry],
    /// Highlighted row
    pub selected: usize,
    pub module: &'a PanelModule,
}

impl Default for PokemonMoves {
    fn default() -> Self {
        Self {
            list: SelectList::new(),
        }
    }
}

impl PokemonMoves {
    pub fn new() -> Self {
        Self::default()
    }
}

fn list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::default(),
            bg: None,
            fg: Some(TEXT_MAIN),
        },
        selection: SelectionStyle {
            style: Some(Style::default().bg(BG_HIGHLIGHT).fg(TEXT_MAIN)),
            marker: None,
            disabled: false,
        },
        ..SelectListStyle::default()
    }
}

fn move_line(entry: &MoveEntry) -> Line<'static> {
    let method = entry.method.as_deref().unwrap_or("-").replace('-', " ");
    let level = entry
        .level
        .filter(|level| *level > 0)
        .map(|level| level.to_string())
        .unwrap_or_else(|| "-".to_string());
    Line::from(vec![
        Span::styled(
            format!("{:<name$} ", entry.name.replace('-', " "), name = NAME_WIDTH),
            Style::default().fg(TEXT_MAIN),
        ),
        Span::styled(
            format!("{method:<width$} ", width = METHOD_WIDTH),
            Style::default().fg(TEXT_DIM),
        ),
        Span::styled(format!("{level:>3}"), Style::default().fg(TEXT_MAIN)),
    ])
}

impl Component<Action> for PokemonMoves {
    type Props<'a> = PokemonMovesProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Column labels
            Constraint::Min(1),    // Rows
        ])
        .split(area);

        let heading = Line::from(Span::styled(
            props.module.heading.clone(),
            Style::default().fg(ACCENT_TEAL).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(heading), chunks[0]);

        if props.moves.is_empty() {
            let empty = Paragraph::new(props.module.empty_text().to_string())
                .style(Style::default().fg(TEXT_DIM));
            frame.render_widget(empty, chunks[1]);
            return;
        }

        let columns = Line::from(Span::styled(
            format!(
                "{:<name$} {:<method$} {:>3}",
                props.module.label(0, "Move"),
                props.module.label(1, "Method"),
                props.module.label(2, "Lv."),
                name = NAME_WIDTH,
                method = METHOD_WIDTH,
            ),
            Style::default().fg(TEXT_DIM).add_modifier(Modifier::UNDERLINED),
        ));
        frame.render_widget(Paragraph::new(columns), chunks[1]);

        let items: Vec<Line> = props.moves.iter().map(move_line).collect();
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: props.selected.min(items.len().saturating_sub(1)),
            is_focused: true,
            style: list_style(),
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            // Selection is driven by the modal's cursor, not by list events
            on_select: |_| Action::Render,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, chunks[2], list_props);
    }
}
