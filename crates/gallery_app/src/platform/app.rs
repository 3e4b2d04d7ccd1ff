use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use gallery_core::{init, update, AppState, Msg};
use gallery_logging::{gallery_info, gallery_warn, set_loop_turn};
use log::LevelFilter;

use super::cli::CliArgs;
use super::config::GalleryConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{self, Command, HELP};
use super::ui::render;

/// Everything the event loop reacts to, in arrival order.
pub enum LoopEvent {
    Msg(Msg),
    Line(String),
    InputClosed,
}

pub fn run_app(args: CliArgs) -> anyhow::Result<()> {
    let config = GalleryConfig::load(&args).context("loading configuration")?;
    logging::initialize(config.log_to, log_level(args.verbose));
    match GalleryConfig::source_path(&args) {
        Some(path) => gallery_info!("Loaded config from {:?}", path),
        None => gallery_info!("No config file, using defaults"),
    }
    gallery_info!("Starting with {:?}", config);

    let browser = config.browser_config()?;
    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let runner = EffectRunner::new(config.engine_config(), loop_tx.clone())
        .context("starting page engine")?;
    spawn_stdin_reader(loop_tx);

    let mut stdout = io::stdout();
    writeln!(stdout, "{HELP}\n")?;

    let (mut state, effects) = init(browser);
    runner.enqueue(effects);
    draw(&mut stdout, &mut state)?;

    let mut turn = 0u64;
    while let Ok(event) = loop_rx.recv() {
        turn += 1;
        set_loop_turn(turn);

        match event {
            LoopEvent::Msg(msg) => state = dispatch(state, msg, &runner),
            LoopEvent::Line(line) => match input::parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(stdout, "{HELP}")?,
                Ok(Command::Redraw) => {
                    write!(stdout, "{}", render::render(&state.view()))?;
                    stdout.flush()?;
                }
                Ok(command) => match input::to_msgs(command, &state.view()) {
                    Ok(msgs) => {
                        for msg in msgs {
                            state = dispatch(state, msg, &runner);
                        }
                    }
                    Err(err) => writeln!(stdout, "error: {err}")?,
                },
                Err(input::InputError::Empty) => {}
                Err(err) => writeln!(stdout, "error: {err}")?,
            },
            LoopEvent::InputClosed => break,
        }

        draw(&mut stdout, &mut state)?;
    }

    gallery_info!("Event loop finished after {} turns", turn);
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn draw(out: &mut impl Write, state: &mut AppState) -> io::Result<()> {
    if state.consume_dirty() {
        write!(out, "{}", render::render(&state.view()))?;
        out.flush()?;
    }
    Ok(())
}

fn spawn_stdin_reader(loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if loop_tx.send(LoopEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    gallery_warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
        let _ = loop_tx.send(LoopEvent::InputClosed);
    });
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
