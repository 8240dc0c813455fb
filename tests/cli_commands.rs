use std::{cell::RefCell, fs, io::Cursor};

use clap::Parser;
use sticks::{
    HatTable,
    cli::{
        commands::{
            play::{PlayArgs, run},
            train::{TrainArgs, execute},
        },
        console::Console,
    },
    hats::{SavedHatAgent, write_hat_contents},
};
use tempfile::tempdir;

type ScriptedConsole = RefCell<Console<Cursor<Vec<u8>>, Vec<u8>>>;

fn scripted(input: &str) -> ScriptedConsole {
    RefCell::new(Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()))
}

fn output_of(console: ScriptedConsole) -> String {
    String::from_utf8(console.into_inner().into_output()).unwrap()
}

#[test]
fn train_writes_agent_report_and_summary() {
    let tmp = tempdir().unwrap();
    let agent_path = tmp.path().join("agent.json");
    let report_path = tmp.path().join("hats.txt");
    let summary_path = tmp.path().join("summary.json");

    let args = TrainArgs::parse_from([
        "sticks-train",
        "--sticks",
        "12",
        "--rounds",
        "150",
        "--seed",
        "7",
        "--no-progress",
        "--output",
        agent_path.to_str().unwrap(),
        "--hat-contents",
        report_path.to_str().unwrap(),
        "--summary",
        summary_path.to_str().unwrap(),
    ]);
    execute(args).expect("training should succeed");

    let saved = SavedHatAgent::load(&agent_path).unwrap();
    assert_eq!(saved.table.starting_sticks(), 12);
    assert_eq!(saved.metadata.rounds, Some(150));
    assert_eq!(saved.metadata.games_learned, 150);

    let report = fs::read_to_string(&report_path).unwrap();
    assert_eq!(report.lines().count(), 13);

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary["rounds"], 150);
    let first = summary["results"]["first_wins"].as_u64().unwrap();
    let second = summary["results"]["second_wins"].as_u64().unwrap();
    assert_eq!(first + second, 150);
}

#[test]
fn friends_mode_announces_the_loser() {
    // 10 sticks, both players take 3, 3, 3 then player 2 takes the last one.
    let console = scripted("3\n3\n3\n1\n");
    let args = PlayArgs::parse_from(["sticks-play", "--sticks", "10", "--mode", "friend"]);
    run(args, &console).unwrap();

    let output = output_of(console);
    assert!(output.starts_with("Welcome to the Game of Sticks!"));
    assert!(output.contains("There are 10 sticks on the board."));
    assert!(output.contains("There is 1 stick on the board."));
    assert!(output.contains("Player 2: How many sticks do you take (1-1)? "));
    assert!(output.contains("Player 2, you lose."));
}

#[test]
fn menus_reprompt_on_invalid_input() {
    // Bad stick counts, a bad menu choice, then a full friends game of 10.
    let console = scripted("5\nabc\n10\n4\n1\n3\n3\n3\n1\n");
    let args = PlayArgs::parse_from(["sticks-play"]);
    run(args, &console).unwrap();

    let output = output_of(console);
    assert_eq!(
        output
            .matches("Please enter a number between 10 and 100")
            .count(),
        2
    );
    assert!(output.contains("Input invalid. Please enter 1, 2, or 3."));
    assert!(output.contains("Player 2, you lose."));
}

#[test]
fn computer_mode_plays_one_game_and_writes_uniform_hats() {
    let tmp = tempdir().unwrap();
    let report = tmp.path().join("hat-contents.txt");
    // The human always takes one stick. Every "0" is rejected as a take, so
    // the first answer read after the game ends is always a "0" to quit.
    let console = scripted(&"1\n0\n".repeat(10));
    let args = PlayArgs::parse_from([
        "sticks-play",
        "--sticks",
        "10",
        "--mode",
        "computer",
        "--seed",
        "3",
        "--hat-contents",
        report.to_str().unwrap(),
    ]);

    run(args, &console).unwrap();

    let output = output_of(console);
    assert!(output.contains("AI selects"));
    assert!(!output.contains("Training AI, please wait..."));
    let endings = output.matches("You lose.").count() + output.matches("AI loses.").count();
    assert_eq!(endings, 1);
    assert_eq!(output.matches("Play again (1 = yes, 0 = no)? ").count(), 1);

    let contents = fs::read_to_string(&report).unwrap();
    let mut expected = Vec::new();
    write_hat_contents(&HatTable::new(10).unwrap(), &mut expected).unwrap();
    assert_eq!(contents, String::from_utf8(expected).unwrap());
}

#[test]
fn trained_mode_can_use_a_saved_agent() {
    let tmp = tempdir().unwrap();
    let agent_path = tmp.path().join("agent.json");
    let report = tmp.path().join("hat-contents.txt");
    execute(TrainArgs::parse_from([
        "sticks-train",
        "--sticks",
        "20",
        "--rounds",
        "50",
        "--seed",
        "1",
        "--no-progress",
        "--output",
        agent_path.to_str().unwrap(),
    ]))
    .unwrap();

    let console = scripted(&"1\n0\n".repeat(20));
    let args = PlayArgs::parse_from([
        "sticks-play",
        "--sticks",
        "15",
        "--mode",
        "trained",
        "--agent",
        agent_path.to_str().unwrap(),
        "--hat-contents",
        report.to_str().unwrap(),
    ]);
    run(args, &console).unwrap();

    let output = output_of(console);
    assert!(output.contains("There are 15 sticks on the board."));
    let saved = SavedHatAgent::load(&agent_path).unwrap();
    let mut expected = Vec::new();
    write_hat_contents(&saved.table, &mut expected).unwrap();
    assert_eq!(
        fs::read_to_string(&report).unwrap(),
        String::from_utf8(expected).unwrap()
    );
}

#[test]
fn out_of_range_sticks_flag_is_rejected() {
    let console = scripted("");
    let args = PlayArgs::parse_from(["sticks-play", "--sticks", "5", "--mode", "friend"]);
    assert!(run(args, &console).is_err());
}

#[test]
fn saved_agent_is_only_accepted_for_the_trained_opponent() {
    let tmp = tempdir().unwrap();
    let report = tmp.path().join("hat-contents.txt");
    let console = scripted("");
    let args = PlayArgs::parse_from([
        "sticks-play",
        "--sticks",
        "10",
        "--mode",
        "computer",
        "--agent",
        "agent.json",
        "--hat-contents",
        report.to_str().unwrap(),
    ]);

    let err = run(args, &console).unwrap_err();
    assert!(err.to_string().contains("--agent"));
    assert!(!report.exists());
}
