pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::error;

use crate::app::{AppContext, Result};
use crate::domain::{Effect, Event, Screen};
use crate::export;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const GENERATION_ERROR: &str =
    "Sorry, something went wrong while generating content. Please try again.";

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));

    loop {
        app.session.repair();
        terminal.draw(|frame| layout::render(frame, &mut app, &ctx.config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => match event::action_for(app.session.screen, &key) {
                Action::Quit => {
                    app.should_quit = true;
                }
                Action::InputChar(c) => {
                    app.input.push(c);
                }
                Action::InputBackspace => {
                    app.input.pop();
                }
                Action::GenerateTopic => {
                    let topic = app.input.trim().to_string();
                    // An empty topic does nothing, like the disabled button.
                    if !topic.is_empty() {
                        let effect = app
                            .session
                            .apply(Event::GenerateRequested { topic: Some(topic) });
                        perform_effect(terminal, &mut app, &ctx, effect).await?;
                    }
                }
                Action::GenerateRandom => {
                    let effect = app.session.apply(Event::GenerateRequested { topic: None });
                    perform_effect(terminal, &mut app, &ctx, effect).await?;
                }
                Action::MoveUp => {
                    app.move_up();
                }
                Action::MoveDown => {
                    app.move_down();
                }
                Action::Select => {
                    let id = app.article_under_cursor().map(|a| a.id.clone());
                    if let Some(id) = id {
                        app.session.apply(Event::ArticleSelected(id));
                        app.detail_scroll = 0;
                        app.clear_status();
                    }
                }
                Action::Back => {
                    let was_list = app.session.screen == Screen::List;
                    app.session.apply(Event::Back);
                    if was_list {
                        app.reset_cursor();
                    }
                    app.clear_status();
                }
                Action::Edit(action) => {
                    let effect = app.session.apply(Event::EditRequested(action));
                    perform_effect(terminal, &mut app, &ctx, effect).await?;
                }
                Action::SaveFile => {
                    let saved = app
                        .session
                        .selected
                        .as_ref()
                        .map(|article| export::save_markdown(article, Path::new(".")));
                    match saved {
                        Some(Ok(path)) => app.set_status(format!("Saved {}", path.display())),
                        Some(Err(e)) => app.set_status(format!("Save failed: {}", e)),
                        None => {}
                    }
                }
                Action::Copy => {
                    let copied = app
                        .session
                        .selected
                        .as_ref()
                        .map(|article| export::copy_to_clipboard(&article.content));
                    match copied {
                        Some(Ok(())) => app.mark_copied(),
                        Some(Err(e)) => app.set_status(format!("Copy failed: {}", e)),
                        None => {}
                    }
                }
                Action::None => {}
            },
            AppEvent::Tick => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Perform a pending service call, drawing a frame first so the in-flight
/// banner is visible while we wait. Exactly one call runs at a time.
async fn perform_effect(
    terminal: &mut Tui,
    app: &mut TuiApp,
    ctx: &Arc<AppContext>,
    effect: Option<Effect>,
) -> Result<()> {
    let Some(effect) = effect else {
        return Ok(());
    };

    terminal.draw(|frame| layout::render(frame, app, &ctx.config.colors))?;

    match effect {
        Effect::Generate { topic } => {
            let result = match &topic {
                Some(topic) => ctx.generator.from_topic(topic).await,
                None => ctx.generator.random_tips().await,
            };
            match result {
                Ok(articles) => {
                    app.session.apply(Event::GenerationSucceeded(articles));
                    app.reset_cursor();
                    app.input.clear();
                }
                Err(e) => {
                    error!("generation failed: {e}");
                    app.session
                        .apply(Event::GenerationFailed(GENERATION_ERROR.to_string()));
                }
            }
        }
        Effect::Edit { content, action } => {
            match ctx.generator.edit_content(&content, action).await {
                Ok(new_content) => {
                    if let Some(id) = app.session.selected.as_ref().map(|a| a.id.clone()) {
                        app.session.apply(Event::EditSucceeded {
                            id,
                            content: new_content,
                        });
                    }
                }
                Err(e) => {
                    // Logged by the state machine; the status note is the
                    // only user-visible trace.
                    app.session.apply(Event::EditFailed(e.to_string()));
                    app.set_status("Edit failed (see logs)".to_string());
                }
            }
        }
    }

    Ok(())
}
