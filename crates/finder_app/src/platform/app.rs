use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use anyhow::Context;
use finder_client::ClientSettings;
use finder_core::{update, AppState, Msg};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(ClientSettings::default(), msg_tx);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut state = AppState::new();

    for line in ui::layout::intro_lines() {
        writeln!(out, "{line}").context("write intro")?;
    }

    loop {
        write!(out, "\n> ").context("write prompt")?;
        out.flush().context("flush prompt")?;

        let mut input = String::new();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .context("read query input")?;
        if read == 0 {
            // EOF: the user closed the input stream.
            break;
        }
        let query = input.trim_end_matches(['\r', '\n']).to_string();

        state = dispatch(state, Msg::QueryChanged(query), &runner);
        state = dispatch(state, Msg::SubmitClicked, &runner);
        render_if_dirty(&mut state, &mut out)?;

        // While a request is in flight the submit control stays disabled:
        // input is not read again until the view leaves Loading.
        while state.view().busy {
            let Ok(msg) = msg_rx.recv() else {
                return Ok(());
            };
            state = dispatch(state, msg, &runner);
            render_if_dirty(&mut state, &mut out)?;
        }
    }

    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn render_if_dirty(state: &mut AppState, out: &mut impl Write) -> anyhow::Result<()> {
    if state.consume_dirty() {
        let view = state.view();
        for line in ui::render::render(&view) {
            writeln!(out, "{line}").context("write view")?;
        }
    }
    Ok(())
}
