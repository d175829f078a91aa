//! Tick CLI — the command-line entry point for the todo list.
//!
//! With no arguments it launches the terminal UI. One-shot subcommands
//! drive the same list controller non-interactively:
//!
//! ```text
//! tick                     launch the TUI
//! tick add Buy milk
//! tick list
//! tick done 1              / tick undone 1
//! tick edit 1 [new text]   prompts on stdin if text is omitted
//! tick rm 1
//! tick clear [--yes]
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use tick_core::controller::{ListController, Prompter};
use tick_core::storage::FileSlot;

const USAGE: &str = "\
tick — a todo list

Usage:
  tick                   Launch the terminal UI
  tick add <text>...     Add a todo
  tick list              List todos
  tick done <n>          Mark todo <n> as done
  tick undone <n>        Mark todo <n> as not done
  tick edit <n> [text]   Replace the text of todo <n> (prompts if omitted)
  tick rm <n>            Delete todo <n>
  tick clear [--yes]     Delete all todos (asks for confirmation)
  tick help              Show this help

Numbers are the 1-based positions printed by `tick list`.
The data directory is $TICK_CONFIG_DIR, or $HOME/.config/tick.
";

// ---------------------------------------------------------------------------
// Command parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Tui,
    Add(String),
    List,
    Done(usize),
    Undone(usize),
    Edit { number: usize, text: Option<String> },
    Rm(usize),
    Clear { assume_yes: bool },
    Help,
    Version,
}

fn parse_number(arg: &str) -> Result<usize, String> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("expected a todo number (1-based), got '{}'", arg)),
    }
}

fn parse_args(args: &[&str]) -> Result<Command, String> {
    let Some((&first, rest)) = args.split_first() else {
        return Ok(Command::Tui);
    };
    match first {
        "tui" => Ok(Command::Tui),
        "add" => {
            if rest.is_empty() {
                return Err("add: missing todo text".into());
            }
            Ok(Command::Add(rest.join(" ")))
        }
        "list" | "ls" => Ok(Command::List),
        "done" => match rest {
            [n] => Ok(Command::Done(parse_number(n)?)),
            _ => Err("done: expected exactly one todo number".into()),
        },
        "undone" => match rest {
            [n] => Ok(Command::Undone(parse_number(n)?)),
            _ => Err("undone: expected exactly one todo number".into()),
        },
        "edit" => {
            let Some((&n, text)) = rest.split_first() else {
                return Err("edit: missing todo number".into());
            };
            let text = if text.is_empty() {
                None
            } else {
                Some(text.join(" "))
            };
            Ok(Command::Edit {
                number: parse_number(n)?,
                text,
            })
        }
        "rm" | "delete" => match rest {
            [n] => Ok(Command::Rm(parse_number(n)?)),
            _ => Err("rm: expected exactly one todo number".into()),
        },
        "clear" => match rest {
            [] => Ok(Command::Clear { assume_yes: false }),
            ["--yes"] | ["-y"] => Ok(Command::Clear { assume_yes: true }),
            _ => Err("clear: unknown argument (did you mean --yes?)".into()),
        },
        "help" | "-h" | "--help" => Ok(Command::Help),
        "version" | "--version" | "-V" => Ok(Command::Version),
        other => Err(format!("unknown command '{}' (see 'tick help')", other)),
    }
}

// ---------------------------------------------------------------------------
// Prompters
// ---------------------------------------------------------------------------

/// Answers prompts on stdin/stdout.
struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn prompt_text(&mut self, prompt: &str, seed: &str) -> Option<String> {
        print!("{} [{}]: ", prompt, seed);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line).ok()?;
        let line = line.trim();
        if line.is_empty() {
            None
        } else {
            Some(line.to_string())
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N]: ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Answers prompts from values supplied on the command line
/// (`edit <n> <text>`, `clear --yes`).
struct FixedPrompter {
    text: Option<String>,
    confirmed: bool,
}

impl Prompter for FixedPrompter {
    fn prompt_text(&mut self, _prompt: &str, _seed: &str) -> Option<String> {
        self.text.clone()
    }

    fn confirm(&mut self, _prompt: &str) -> bool {
        self.confirmed
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TICK_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("tick")
}

/// Check a 1-based list number against the current rows.
fn row_index(controller: &ListController<FileSlot>, number: usize) -> Result<usize, String> {
    if number >= 1 && number <= controller.rows().len() {
        Ok(number - 1)
    } else {
        Err(format!("no todo #{}", number))
    }
}

fn run_command(data_dir: &PathBuf, cmd: Command) -> Result<(), String> {
    let mut controller = ListController::new(FileSlot::new(data_dir));

    match cmd {
        Command::Tui | Command::Help | Command::Version => unreachable!("handled in main"),
        Command::Add(text) => {
            if controller.add(&text).map_err(|e| e.to_string())? {
                println!("Added: {}", text.trim());
            } else {
                return Err("add: todo text is empty".into());
            }
        }
        Command::List => {
            if controller.rows().is_empty() {
                println!("No todos.");
            }
            for (i, row) in controller.rows().iter().enumerate() {
                let mark = if row.done { "[x]" } else { "[ ]" };
                println!("{:>3} {} {}", i + 1, mark, row.text);
            }
        }
        Command::Done(n) => {
            let index = row_index(&controller, n)?;
            if !controller.rows()[index].done {
                controller.toggle(index).map_err(|e| e.to_string())?;
            }
            println!("Done: {}", controller.rows()[index].text);
        }
        Command::Undone(n) => {
            let index = row_index(&controller, n)?;
            if controller.rows()[index].done {
                controller.toggle(index).map_err(|e| e.to_string())?;
            }
            println!("Not done: {}", controller.rows()[index].text);
        }
        Command::Edit { number, text } => {
            let index = row_index(&controller, number)?;
            let before = controller.rows()[index].text.clone();
            match text {
                Some(text) => {
                    let mut prompter = FixedPrompter {
                        text: Some(text),
                        confirmed: false,
                    };
                    controller
                        .edit(index, &mut prompter)
                        .map_err(|e| e.to_string())?;
                }
                None => {
                    controller
                        .edit(index, &mut StdinPrompter)
                        .map_err(|e| e.to_string())?;
                }
            }
            let after = &controller.rows()[index].text;
            if *after == before {
                println!("Unchanged: {}", before);
            } else {
                println!("Updated: {}", after);
            }
        }
        Command::Rm(n) => {
            let index = row_index(&controller, n)?;
            let text = controller.rows()[index].text.clone();
            controller.delete(index).map_err(|e| e.to_string())?;
            println!("Deleted: {}", text);
        }
        Command::Clear { assume_yes } => {
            let count = controller.rows().len();
            let cleared = if assume_yes {
                let mut prompter = FixedPrompter {
                    text: None,
                    confirmed: true,
                };
                controller.clear_all(&mut prompter)
            } else {
                controller.clear_all(&mut StdinPrompter)
            }
            .map_err(|e| e.to_string())?;

            if cleared {
                println!("Deleted {} todo(s).", count);
            } else if count == 0 {
                println!("Nothing to clear.");
            } else {
                println!("Aborted.");
            }
        }
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let cmd = match parse_args(&arg_refs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tick: {}", e);
            process::exit(1);
        }
    };

    match cmd {
        Command::Help => {
            print!("{}", USAGE);
        }
        Command::Version => {
            println!("tick {}", env!("CARGO_PKG_VERSION"));
        }
        Command::Tui => {
            let data_dir = resolve_data_dir();
            match tick_tui::tui::Tui::new(&data_dir) {
                Ok(mut tui) => {
                    if let Err(e) = tui.run() {
                        eprintln!("tick tui: {}", e);
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("tick tui: failed to start: {}", e);
                    process::exit(1);
                }
            }
        }
        other => {
            let data_dir = resolve_data_dir();
            if let Err(e) = run_command(&data_dir, other) {
                eprintln!("tick: {}", e);
                process::exit(1);
            }
        }
    }
}
