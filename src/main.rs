use anyhow::Result;
use clap::Parser;
use tracing::info;

use quizterm::cli::Cli;
use quizterm::core::audio::{AudioSink, Muted, TerminalBell};
use quizterm::core::clock::SystemClock;
use quizterm::core::engine::Engine;
use quizterm::core::terminal;
use quizterm::games::quiz::{QuestionBank, QuizMachine};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = quizterm::logging::init(&cli.log_path())?;

    let mut bank = QuestionBank::with_defaults();
    let loaded = bank.load(&cli.questions);
    info!(loaded, total = bank.len(), "question bank ready");

    let machine = QuizMachine::new(cli.game_config(), bank);
    let audio: Box<dyn AudioSink> = if cli.mute {
        Box::new(Muted)
    } else {
        Box::new(TerminalBell::new())
    };

    let mut terminal = terminal::init()?;
    let result = Engine::new(machine, SystemClock, audio).run(&mut terminal).await;
    terminal::restore();

    result.map(|_| ())
}
