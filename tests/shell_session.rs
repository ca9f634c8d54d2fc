//! Drives the menu shell the way a user would, one line at a time

use std::time::Duration;

use chefmenu::config::ShellConfig;
use chefmenu::shell::{Outcome, Shell, session};
use chefmenu_shared::Course;
use tokio::time::Instant;

fn run(shell: &mut Shell, line: &str) -> String {
    match shell.execute(line).expect("command failed") {
        Outcome::Render(output) => output,
        Outcome::Quit => panic!("unexpected quit on '{line}'"),
    }
}

fn shell_with_three_courses() -> Shell {
    let mut shell = Shell::new("R");

    run(&mut shell, "add Starter 45.00 Caesar Salad");
    run(&mut shell, "add Main 120 Steak");
    run(&mut shell, "add dessert 60 Cake");

    shell
}

#[test]
fn test_add_reports_success() {
    let mut shell = Shell::new("R");

    let output = run(&mut shell, "add Main 120 Rib Eye Steak");

    assert_eq!(output, "\"Rib Eye Steak\" added successfully!");
    assert_eq!(shell.store().items()[0].course, Course::Main);
}

#[test]
fn test_add_without_name_leaves_menu_untouched() {
    let mut shell = Shell::new("R");

    let output = run(&mut shell, "add Main 120");

    assert_eq!(output, "Please fill in all fields.");
    assert!(shell.store().is_empty());
}

#[test]
fn test_add_with_bad_price_or_course() {
    let mut shell = Shell::new("R");

    let output = run(&mut shell, "add Main abc Steak");
    assert!(output.contains("invalid price"), "{output}");

    let output = run(&mut shell, "add Drink 15 Cola");
    assert!(output.contains("invalid course 'Drink'"), "{output}");

    assert!(shell.store().is_empty());
}

#[test]
fn test_home_shows_counts_and_averages() {
    let mut shell = shell_with_three_courses();

    let output = run(&mut shell, "home");

    assert!(output.contains("Starters (1 items)"), "{output}");
    assert!(output.contains("Mains (1 items)"), "{output}");
    assert!(output.contains("Average Price: R120.00"), "{output}");
    assert!(output.contains("Caesar Salad  R45.00"), "{output}");
    assert!(output.contains("Total Menu Items: 3"), "{output}");
}

#[test]
fn test_filter_by_search_term() {
    let mut shell = shell_with_three_courses();

    let output = run(&mut shell, "filter ca");

    assert!(output.contains("Showing: 2 items"), "{output}");
    assert!(output.contains("Average Price: R52.50"), "{output}");
    assert!(output.contains("Starters: 1 | Mains: 1 | Desserts: 1"), "{output}");
    assert!(output.contains("Caesar Salad - R45.00 [Starter]"), "{output}");
    assert!(!output.contains("Steak"), "{output}");
}

#[test]
fn test_filter_by_course_without_matches() {
    let mut shell = shell_with_three_courses();

    let output = run(&mut shell, "filter main pasta");

    assert!(output.contains("Showing: 0 items"), "{output}");
    assert!(output.contains("Average Price: R0.00"), "{output}");
    assert!(output.contains("No items found."), "{output}");
}

#[test]
fn test_remove_then_counts() {
    let mut shell = shell_with_three_courses();

    let output = run(&mut shell, "remove 2");
    assert_eq!(output, "\"Steak\" removed.");

    let output = run(&mut shell, "list");
    assert!(output.contains("Starters: 1 | Mains: 0 | Desserts: 1"), "{output}");
    assert!(output.contains("#3 Cake - R60.00 (Dessert)"), "{output}");

    let output = run(&mut shell, "remove 2");
    assert_eq!(output, "menu item 2 not found");
}

#[test]
fn test_card_formats_price() {
    let mut shell = shell_with_three_courses();

    let output = run(&mut shell, "card 3");

    assert!(output.contains("| Cake"), "{output}");
    assert!(output.contains("| Dessert"), "{output}");
    assert!(output.contains("| R60.00"), "{output}");
}

#[test]
fn test_unknown_command_keeps_session() {
    let mut shell = Shell::new("R");

    let output = run(&mut shell, "dance");
    assert!(output.contains("error"), "{output}");

    assert!(matches!(shell.execute("quit"), Ok(Outcome::Quit)));
    assert!(matches!(shell.execute("exit"), Ok(Outcome::Quit)));
}

#[test]
fn test_help_lists_commands() {
    let mut shell = Shell::new("R");

    let output = run(&mut shell, "help");

    for command in ["home", "add", "remove", "filter", "card", "list", "quit"] {
        assert!(output.contains(command), "missing '{command}' in {output}");
    }
}

fn session_config() -> ShellConfig {
    ShellConfig {
        splash_secs: 10,
        currency: "R".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn test_session_runs_line_typed_during_splash() {
    let start = Instant::now();
    let mut output = Vec::new();

    session(
        &session_config(),
        &b"add Main 120 Steak\nlist\nquit\nhome\n"[..],
        &mut output,
    )
    .await
    .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(start.elapsed() < Duration::from_secs(10));
    assert!(text.starts_with("    Chef Menu App"), "{text}");
    assert_eq!(text.matches("Total Menu Items").count(), 1, "{text}");
    assert!(text.contains("\"Steak\" added successfully!"), "{text}");
    assert!(text.contains("#1 Steak - R120.00 (Main)"), "{text}");
}

#[tokio::test(start_paused = true)]
async fn test_session_opens_home_when_splash_runs_out() {
    let (client, server) = tokio::io::duplex(64);
    let mut output = Vec::new();

    let close_after_splash = async move {
        tokio::time::sleep(Duration::from_secs(11)).await;
        drop(client);
    };

    let config = session_config();
    let (result, ()) = tokio::join!(
        session(&config, server, &mut output),
        close_after_splash
    );
    result.unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Total Menu Items: 0"), "{text}");
    assert!(text.contains("Type 'help' for commands."), "{text}");
}

#[tokio::test(start_paused = true)]
async fn test_session_ends_on_input_closed_during_splash() {
    let mut output = Vec::new();

    session(&session_config(), &b""[..], &mut output)
        .await
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Chef Menu App"), "{text}");
    assert!(!text.contains("Total Menu Items"), "{text}");
}
