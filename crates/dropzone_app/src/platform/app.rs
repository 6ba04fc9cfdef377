use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use dropzone_core::{update, Msg, Translator, UploadPhase, WidgetState, WidgetViewModel};
use dropzone_logging::{dz_debug, dz_info, dz_trace, dz_warn};

use super::config::{Args, WidgetConfig};
use super::effects::EffectRunner;
use super::input::{self, Command};
use super::page::{file_from_path, Page, PageEvent};
use super::ui::constants::{DROPZONE, FILE_INPUT};
use super::{i18n, logging, ui};

/// Everything the host loop reacts to, in arrival order.
#[derive(Debug)]
pub enum HostEvent {
    Page(PageEvent),
    Widget(Msg),
    Input(String),
    InputClosed,
}

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let config = WidgetConfig::load(args.config.as_deref())?.with_args(&args);
    logging::initialize(config.log, &config.log_file, config.log_level());
    dz_info!("Starting drop zone against {}", config.base_url);

    let dictionary = match &config.dictionary_path {
        Some(path) => i18n::load_file(path)?,
        None => i18n::bundled(&config.lang),
    };
    let translator = Translator::new(Arc::new(dictionary));

    let (event_tx, event_rx) = mpsc::channel::<HostEvent>();
    let effects = EffectRunner::new(&config, event_tx.clone())?;
    let mut app = App::new(translator, config.job_limit, effects, args.interactive);

    if let Some(interval) = config.poll_interval() {
        spawn_poller(event_tx.clone(), interval);
    }
    if args.interactive {
        println!("{}", input::HELP);
        spawn_stdin_reader(event_tx.clone());
    }

    let _ = event_tx.send(HostEvent::Page(PageEvent::Load));
    if !args.files.is_empty() {
        for event in drop_events(&args.files) {
            let _ = event_tx.send(HostEvent::Page(event));
        }
    }
    drop(event_tx);

    let polling = config.poll_interval().is_some();
    while let Ok(event) = event_rx.recv() {
        app.handle(event);
        if app.should_exit(polling) {
            break;
        }
    }

    app.log_summary();
    Ok(())
}

struct App {
    state: WidgetState,
    page: Page,
    effects: EffectRunner,
    last_frame: String,
    /// Whether lines from stdin are still being accepted.
    input_open: bool,
}

impl App {
    fn new(
        translator: Translator,
        job_limit: usize,
        effects: EffectRunner,
        input_open: bool,
    ) -> Self {
        let mut page = Page::new();
        page.apply(ui::layout::initial_commands(&translator));
        let mut app = Self {
            state: WidgetState::new(translator, job_limit),
            page,
            effects,
            last_frame: String::new(),
            input_open,
        };
        app.present();
        app
    }

    fn handle(&mut self, event: HostEvent) {
        match event {
            HostEvent::Page(event) => self.dispatch_page_event(event),
            HostEvent::Widget(msg) => self.dispatch_msg(msg),
            HostEvent::Input(line) if self.input_open => self.handle_input(&line),
            HostEvent::Input(_) => dz_debug!("Input ignored after quit"),
            HostEvent::InputClosed => self.close_input(),
        }
    }

    /// Stops taking commands. Submitted work is still followed to the end.
    fn close_input(&mut self) {
        if std::mem::take(&mut self.input_open) {
            self.page.close_file_picker();
            dz_info!("Input closed; waiting for requests in flight");
        }
    }

    /// The host stops once nobody can add work and nothing is in flight.
    fn should_exit(&self, polling: bool) -> bool {
        should_exit(&self.state.view(), self.input_open, polling)
    }

    fn dispatch_page_event(&mut self, event: PageEvent) {
        dz_trace!("Page event {:?}", event);
        match self.page.dispatch(event) {
            Some(dispatch) => {
                if dispatch.default_prevented {
                    dz_trace!("Default handling suppressed");
                }
                self.dispatch_msg(dispatch.msg);
            }
            None => dz_debug!("Page event ignored"),
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        if was_dirty {
            self.page.apply(ui::render::render(&view));
        }
        self.effects.enqueue(effects, &mut self.page);
        self.present();
    }

    fn handle_input(&mut self, line: &str) {
        if self.page.close_file_picker() {
            let paths = input::parse_paths(line);
            if paths.is_empty() {
                // A cancelled picker fires no change event.
                self.present();
            } else {
                let files = paths.iter().map(|path| file_from_path(path)).collect();
                self.dispatch_page_event(PageEvent::Change {
                    target: FILE_INPUT,
                    files,
                });
            }
            return;
        }

        match input::parse_command(line) {
            Ok(Command::Drop(paths)) => {
                for event in drop_events(&paths) {
                    self.dispatch_page_event(event);
                }
            }
            Ok(Command::Drag) => {
                self.dispatch_page_event(PageEvent::DragEnter { target: DROPZONE });
                self.dispatch_page_event(PageEvent::DragOver { target: DROPZONE });
            }
            Ok(Command::Leave) => {
                self.dispatch_page_event(PageEvent::DragLeave { target: DROPZONE })
            }
            Ok(Command::Click) => self.dispatch_page_event(PageEvent::Click { target: DROPZONE }),
            Ok(Command::Refresh) => self.dispatch_msg(Msg::RefreshRequested),
            Ok(Command::Show) => print!("{}", self.page.render_text()),
            Ok(Command::Help) => println!("{}", input::HELP),
            Ok(Command::Quit) => self.close_input(),
            Err(message) => eprintln!("{message}"),
        }
    }

    fn present(&mut self) {
        let frame = self.page.render_text();
        if frame != self.last_frame {
            println!("{frame}");
            self.last_frame = frame;
        }
    }

    fn log_summary(&self) {
        for row in self.state.view().uploads {
            match row.phase {
                UploadPhase::Uploading => dz_warn!("{} still uploading at exit", row.filename),
                UploadPhase::Done { job_id } => dz_info!("{} -> job #{}", row.filename, job_id),
                UploadPhase::Failed { message } => dz_warn!("{} failed: {}", row.filename, message),
            }
        }
    }
}

fn is_settled(view: &WidgetViewModel) -> bool {
    view.uploads_in_flight == 0 && view.refreshes_in_flight == 0
}

fn should_exit(view: &WidgetViewModel, input_open: bool, polling: bool) -> bool {
    !input_open && !polling && is_settled(view)
}

/// The sequence a browser reports for a drop: enter, over, drop.
fn drop_events(paths: &[PathBuf]) -> Vec<PageEvent> {
    vec![
        PageEvent::DragEnter { target: DROPZONE },
        PageEvent::DragOver { target: DROPZONE },
        PageEvent::Drop {
            target: DROPZONE,
            files: paths.iter().map(|path| file_from_path(path)).collect(),
        },
    ]
}

/// Background tick that re-fetches the job list.
fn spawn_poller(tx: mpsc::Sender<HostEvent>, interval: Duration) {
    thread::spawn(move || loop {
        thread::sleep(interval);
        if tx.send(HostEvent::Widget(Msg::RefreshRequested)).is_err() {
            break;
        }
    });
}

fn spawn_stdin_reader(tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(HostEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    dz_warn!("Reading stdin failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(HostEvent::InputClosed);
    });
}
