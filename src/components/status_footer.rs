use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    Frame,
};
use tui_dispatch_components::{
    BaseStyle, Padding, StatusBar, StatusBarHint, StatusBarItem, StatusBarProps, StatusBarSection,
    StatusBarStyle,
};

use super::theme::{ACCENT_GOLD, ACCENT_TEAL, BG_BASE, TEXT_DIM, TEXT_MAIN};
use super::Component;
use crate::action::Action;

/// Key hints plus the last failure message. This is where panel and artwork
/// failures surface; the modal itself never shows them.
pub struct StatusFooter {
    status_bar: StatusBar,
}

pub struct StatusFooterProps<'a> {
    pub message: Option<&'a str>,
    pub detail_open: bool,
}

impl Default for StatusFooter {
    fn default() -> Self {
        Self {
            status_bar: StatusBar::new(),
        }
    }
}

impl StatusFooter {
    pub fn new() -> Self {
        Self::default()
    }

    fn hints(detail_open: bool) -> Vec<StatusBarHint<'static>> {
        if detail_open {
            vec![
                StatusBarHint::new("h/l", "Tabs"),
                StatusBarHint::new("1-4", "Jump"),
                StatusBarHint::new("j/k", "Scroll"),
                StatusBarHint::new("f", "Favourite"),
                StatusBarHint::new("Esc", "Back"),
            ]
        } else {
            vec![
                StatusBarHint::new("j/k", "Move"),
                StatusBarHint::new("Enter", "Details"),
                StatusBarHint::new("q", "Quit"),
            ]
        }
    }
}

impl Component<Action> for StatusFooter {
    type Props<'a> = StatusFooterProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let hints = Self::hints(props.detail_open);
        let message = Span::styled(props.message.unwrap_or(""), Style::default().fg(ACCENT_GOLD));
        let items = [StatusBarItem::span(message)];

        let style = StatusBarStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: Some(BG_BASE),
                fg: Some(TEXT_MAIN),
            },
            text: Style::default().fg(TEXT_DIM),
            hint_key: Style::default()
                .fg(ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
            hint_label: Style::default().fg(TEXT_DIM),
            separator: Style::default().fg(TEXT_DIM),
        };

        let status_props = StatusBarProps {
            left: StatusBarSection::hints(&hints).with_separator("  "),
            center: StatusBarSection::empty(),
            right: StatusBarSection::items(&items).with_separator("  "),
            style,
            is_focused: false,
        };
        Component::<Action>::render(&mut self.status_bar, frame, area, status_props);
    }
}
