//! pokemodal - Pokemon catalog with a tabbed detail modal

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokemodal::action::Action;
use pokemodal::artwork;
use pokemodal::catalog::{builtin_asset_dir, load_catalog};
use pokemodal::components::{
    detail_props, modal_area, Component, DexList, DexListProps, PokemonModal, StatusFooter,
    StatusFooterProps,
};
use pokemodal::effect::Effect;
use pokemodal::logging;
use pokemodal::panels::{self, PanelSource};
use pokemodal::reducer::reducer;
use pokemodal::state::AppState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

#[derive(Parser, Debug)]
#[command(name = "pokemodal")]
#[command(about = "Browse a Pokemon catalog and inspect entries in a tabbed detail view")]
struct Args {
    /// Catalog file (RON); the built-in catalog is used when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory with panel modules (about.ron, base-stats.ron, evolution.ron, moves.ron)
    #[arg(long)]
    panels: Option<PathBuf>,

    /// Open this Pokemon's detail view on start
    #[arg(long)]
    pokemon: Option<String>,

    /// Write tracing output to this file (filter from RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PokeComponentId {
    DexList,
    Detail,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum PokeContext {
    Dex,
    Detail,
}

impl EventRoutingState<PokeComponentId, PokeContext> for AppState {
    fn focused(&self) -> Option<PokeComponentId> {
        if self.is_detail_open() {
            Some(PokeComponentId::Detail)
        } else {
            Some(PokeComponentId::DexList)
        }
    }

    fn modal(&self) -> Option<PokeComponentId> {
        if self.is_detail_open() {
            Some(PokeComponentId::Detail)
        } else {
            None
        }
    }

    fn binding_context(&self, id: PokeComponentId) -> PokeContext {
        match id {
            PokeComponentId::DexList => PokeContext::Dex,
            PokeComponentId::Detail => PokeContext::Detail,
        }
    }

    fn default_context(&self) -> PokeContext {
        PokeContext::Dex
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        catalog,
        panels,
        pokemon,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = &log_file {
        logging::init_file_logging(path)?;
    }

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let panel_source = panels.map(PanelSource::Dir).unwrap_or_default();
    let mut state = debug
        .load_state_or_else_async(move || async move {
            let loaded = match load_catalog(catalog.as_deref()).await {
                Ok(loaded) => loaded,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            tracing::info!(entries = loaded.entries.len(), "catalog loaded");

            let catalog_dir = match catalog.as_deref() {
                Some(path) => path.parent().map(Path::to_path_buf),
                None => Some(builtin_asset_dir()),
            };
            Ok::<AppState, io::Error>(AppState::new(loaded, panel_source, catalog_dir))
        })
        .await
        .map_err(debug_error)?;

    let init_action = match pokemon {
        Some(name) => match state.position(&name) {
            Some(index) => {
                state.selected_index = index;
                Some(Action::DetailOpen)
            }
            None => {
                eprintln!("Error: '{name}' is not in the catalog.");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, init_action).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct PokeUi {
    dex_list: DexList,
    detail: PokemonModal,
    footer: StatusFooter,
}

impl PokeUi {
    fn new() -> Self {
        Self {
            dex_list: DexList::new(),
            detail: PokemonModal::new(),
            footer: StatusFooter::new(),
        }
    }

    fn dex_props(state: &AppState, is_focused: bool) -> DexListProps<'_> {
        DexListProps {
            entries: &state.entries,
            selected: state.selected_index,
            favourites: &state.favourites,
            is_focused,
            on_select: Action::DexSelect,
            on_open: || Action::DetailOpen,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<PokeComponentId>,
    ) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Dex list + modal
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        event_ctx.set_component_area(PokeComponentId::DexList, chunks[0]);
        let detail_open = state.is_detail_open();
        let props = Self::dex_props(state, render_ctx.is_focused() && !detail_open);
        self.dex_list.render(frame, chunks[0], props);

        self.footer.render(
            frame,
            chunks[1],
            StatusFooterProps {
                message: state.message.as_deref(),
                detail_open,
            },
        );

        self.detail.set_open(detail_open);
        match detail_props(state, render_ctx.is_focused()) {
            Some(props) => {
                event_ctx.set_component_area(PokeComponentId::Detail, modal_area(chunks[0]));
                self.detail.render(frame, chunks[0], props);
            }
            None => {
                event_ctx.component_areas.remove(&PokeComponentId::Detail);
            }
        }
    }

    fn handle_dex_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let actions: Vec<_> = self
            .dex_list
            .handle_event(event, Self::dex_props(state, true))
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_detail_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.detail.set_open(state.is_detail_open());
        let Some(props) = detail_props(state, true) else {
            return HandlerResponse::ignored();
        };
        let actions: Vec<_> = self.detail.handle_event(event, props).into_iter().collect();
        // Tab switches change local state only; redraw even if the store is unchanged
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: true,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    init_action: Option<Action>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(PokeUi::new()));
    let mut bus: EventBus<AppState, Action, PokeComponentId, PokeContext> = EventBus::new();
    let keybindings: Keybindings<PokeContext> = Keybindings::new();

    let ui_dex = Rc::clone(&ui);
    bus.register(PokeComponentId::DexList, move |event, state| {
        ui_dex.borrow_mut().handle_dex_event(&event.kind, state)
    });

    let ui_detail = Rc::clone(&ui);
    bus.register(PokeComponentId::Detail, move |event, state| {
        ui_detail
            .borrow_mut()
            .handle_detail_event(&event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            init_action,
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning keyed tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadPanel { tab, source } => {
            let key = format!("panel_{}", tab.id());
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match panels::load_module(&source, tab).await {
                    Ok(module) => Action::PanelDidLoad { tab, module },
                    Err(error) => {
                        tracing::warn!(%tab, %error, "panel module failed");
                        Action::PanelDidError {
                            tab,
                            error: error.to_string(),
                        }
                    }
                }
            });
        }
        Effect::LoadArtwork {
            name,
            path,
            cols,
            rows,
        } => {
            let key = format!("artwork_{name}");
            ctx.tasks().spawn(TaskKey::new(key), async move {
                match artwork::load_artwork(&path, cols, rows).await {
                    Ok(artwork) => {
                        tracing::debug!(%name, path = %path.display(), "artwork decoded");
                        Action::ArtworkDidLoad { name, artwork }
                    }
                    Err(error) => {
                        tracing::warn!(%name, %error, "artwork failed");
                        Action::ArtworkDidError {
                            name,
                            error: error.to_string(),
                        }
                    }
                }
            });
        }
    }
}
