//! Play command - interactive games at the console

use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use crate::{
    app::{DEFAULT_TRAINING_ROUNDS, GameConfig, MAX_STICKS, MIN_STICKS},
    cli::console::{Console, ConsoleObserver, HumanPlayer},
    game::Player,
    hats::{HatAgent, SavedHatAgent, TrainingSession, write_hat_contents_file},
    ports::Learner,
    session::{Session, play_match},
};

/// Who the human plays against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayMode {
    /// Two people at the same console
    Friend,
    /// The AI with no training
    Computer,
    /// The AI after self-play training
    Trained,
}

#[derive(Parser, Debug)]
#[command(about = "Play the Game of Sticks")]
pub struct PlayArgs {
    /// Sticks on the table initially (prompted for when omitted)
    #[arg(long, short = 's')]
    pub sticks: Option<usize>,

    /// Opponent (prompted for when omitted)
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<PlayMode>,

    /// Self-play games for the trained opponent
    #[arg(long, short = 'r', default_value_t = DEFAULT_TRAINING_ROUNDS)]
    pub rounds: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play against a previously saved agent instead of training one
    #[arg(long)]
    pub agent: Option<PathBuf>,

    /// Where to write the AI's hat contents before play starts
    #[arg(long, default_value = "hat-contents.txt")]
    pub hat_contents: PathBuf,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let console = RefCell::new(Console::new(stdin.lock(), io::stdout()));
    run(args, &console)
}

/// Run the play command against an arbitrary console
pub fn run<R: BufRead, W: Write>(args: PlayArgs, console: &RefCell<Console<R, W>>) -> Result<()> {
    console.borrow_mut().say("Welcome to the Game of Sticks!")?;

    let sticks = match args.sticks {
        Some(sticks) => sticks,
        None => console.borrow_mut().prompt_number(
            &format!("How many sticks are there on the table initially ({MIN_STICKS}-{MAX_STICKS})? "),
            MIN_STICKS..=MAX_STICKS,
            &format!("Please enter a number between {MIN_STICKS} and {MAX_STICKS}"),
        )?,
    };
    let mut config = GameConfig::new(sticks).with_training_rounds(args.rounds);
    config.seed = args.seed;
    config.validate()?;

    let mode = match args.mode {
        Some(mode) => mode,
        None => prompt_mode(console)?,
    };
    if args.agent.is_some() && mode != PlayMode::Trained {
        bail!("--agent can only be used against the trained computer");
    }

    match mode {
        PlayMode::Friend => play_friends(sticks, console),
        PlayMode::Computer => {
            let ai = prepare_ai(&config.with_training_rounds(0), None, console)?;
            play_ai(ai, sticks, &args.hat_contents, console)
        }
        PlayMode::Trained => {
            let ai = prepare_ai(&config, args.agent.as_deref(), console)?;
            play_ai(ai, sticks, &args.hat_contents, console)
        }
    }
}

fn prompt_mode<R: BufRead, W: Write>(console: &RefCell<Console<R, W>>) -> Result<PlayMode> {
    let mut console = console.borrow_mut();
    console.say("Options:")?;
    console.say(" Play against a friend (1)")?;
    console.say(" Play against the computer (2)")?;
    console.say(" Play against the trained computer (3)")?;
    let choice = console.prompt_choice(
        "Which option do you take (1-3)? ",
        &["1", "2", "3"],
        "Input invalid. Please enter 1, 2, or 3.",
    )?;
    Ok(match choice {
        "1" => PlayMode::Friend,
        "2" => PlayMode::Computer,
        _ => PlayMode::Trained,
    })
}

fn play_friends<R: BufRead, W: Write>(
    sticks: usize,
    console: &RefCell<Console<R, W>>,
) -> Result<()> {
    let mut one = HumanPlayer::new(console, Player::First.to_string());
    let mut two = HumanPlayer::new(console, Player::Second.to_string());
    let mut observer = ConsoleObserver::new(console, None);

    let record = play_match(sticks, &mut one, &mut two, &mut observer)?;
    let loser = match record.outcome.loser {
        Player::First => one.name(),
        Player::Second => two.name(),
    };
    console.borrow_mut().say(format!("{loser}, you lose."))?;
    Ok(())
}

fn prepare_ai<R: BufRead, W: Write>(
    config: &GameConfig,
    saved: Option<&Path>,
    console: &RefCell<Console<R, W>>,
) -> Result<HatAgent> {
    if let Some(path) = saved {
        return SavedHatAgent::load(path)?.into_agent(config.seed);
    }
    if config.training_rounds > 0 {
        console.borrow_mut().say("Training AI, please wait...")?;
    }
    let mut training = TrainingSession::new(config.training_config())?;
    training.train()?;
    Ok(training.into_second())
}

fn play_ai<R: BufRead, W: Write>(
    ai: HatAgent,
    sticks: usize,
    hat_contents: &Path,
    console: &RefCell<Console<R, W>>,
) -> Result<()> {
    write_hat_contents_file(ai.table(), hat_contents)
        .with_context(|| format!("failed to write {}", hat_contents.display()))?;

    let mut session = Session::new(ai, sticks)?;
    let mut human = HumanPlayer::new(console, Player::First.to_string());
    let mut observer = ConsoleObserver::new(console, Some(Session::AI_SIDE));

    loop {
        let outcome = session.play(&mut human, &mut observer)?;
        let mut console = console.borrow_mut();
        if outcome.is_win_for(Session::AI_SIDE) {
            console.say("You lose.")?;
        } else {
            console.say("AI loses.")?;
        }

        let again = console.prompt_choice(
            "Play again (1 = yes, 0 = no)? ",
            &["1", "0"],
            "Input invalid. Please enter 1 or 0.",
        )?;
        if again == "0" {
            return Ok(());
        }
    }
}
