//! Interactive shell
//!
//! Tokenizes one input line into a command and dispatches it against a
//! namespace. This layer renders results and errors as text; it contains
//! no tree logic of its own.

pub mod format;

use crate::error::FsError;
use crate::tree::Namespace;
use thiserror::Error;
use tracing::debug;

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Touch { name: String },
    Mkdir { name: String },
    Cd { path: String },
    Ls,
    Pwd,
    Rm { name: String },
    Rmdir { name: String },
    Write { name: String, content: String },
    Read { name: String },
    Cp { src: String, dest: String },
    Mv { src: String, dest: String },
    Exit,
}

/// A tokenized input line: blank, or a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Empty,
    Command(Command),
}

/// Tokenizer diagnostics, printed verbatim at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

/// What the loop should do after a command: print `Continue` text (possibly
/// empty) and re-prompt, or leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Exit,
}

/// Split a line into a command. The line is split once on the first space
/// into (command, argument string); `write`, `cp`, and `mv` split the
/// argument string once more, so `write` content may contain spaces.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ParsedLine::Empty);
    }
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line, ""),
    };
    let command = match verb {
        "touch" => Command::Touch {
            name: require_arg(rest, "touch <name>")?,
        },
        "mkdir" => Command::Mkdir {
            name: require_arg(rest, "mkdir <name>")?,
        },
        "cd" => Command::Cd {
            path: require_arg(rest, "cd <path>")?,
        },
        "ls" => Command::Ls,
        "pwd" => Command::Pwd,
        "rm" => Command::Rm {
            name: require_arg(rest, "rm <name>")?,
        },
        "rmdir" => Command::Rmdir {
            name: require_arg(rest, "rmdir <name>")?,
        },
        "write" => {
            let (name, content) = split_two(rest, "write <name> <content...>")?;
            Command::Write { name, content }
        }
        "read" => Command::Read {
            name: require_arg(rest, "read <name>")?,
        },
        "cp" => {
            let (src, dest) = split_two(rest, "cp <src> <dest>")?;
            Command::Cp { src, dest }
        }
        "mv" => {
            let (src, dest) = split_two(rest, "mv <src> <dest>")?;
            Command::Mv { src, dest }
        }
        "exit" => Command::Exit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(ParsedLine::Command(command))
}

/// Dispatch one command against the namespace. `color` controls directory
/// highlighting in listings.
pub fn execute(ns: &mut Namespace, command: Command, color: bool) -> Result<Outcome, FsError> {
    debug!(?command, "dispatching");
    let text = match command {
        Command::Touch { name } => {
            ns.touch(&name)?;
            String::new()
        }
        Command::Mkdir { name } => {
            ns.mkdir(&name)?;
            String::new()
        }
        Command::Cd { path } => {
            ns.cd(&path)?;
            String::new()
        }
        Command::Ls => format::format_listing(&ns.ls(), color),
        Command::Pwd => ns.pwd(),
        Command::Rm { name } => {
            ns.rm(&name)?;
            String::new()
        }
        Command::Rmdir { name } => {
            ns.rmdir(&name)?;
            String::new()
        }
        Command::Write { name, content } => {
            ns.write(&name, &content)?;
            String::new()
        }
        Command::Read { name } => ns.read_file(&name)?,
        Command::Cp { src, dest } => {
            ns.cp(&src, &dest)?;
            String::new()
        }
        Command::Mv { src, dest } => {
            ns.mv(&src, &dest)?;
            String::new()
        }
        Command::Exit => return Ok(Outcome::Exit),
    };
    Ok(Outcome::Continue(text))
}

fn require_arg(rest: &str, usage: &'static str) -> Result<String, ParseError> {
    if rest.trim().is_empty() {
        Err(ParseError::Usage(usage))
    } else {
        Ok(rest.trim().to_string())
    }
}

fn split_two(rest: &str, usage: &'static str) -> Result<(String, String), ParseError> {
    let rest = rest.trim_start();
    match rest.split_once(' ') {
        Some((first, second)) if !first.is_empty() && !second.is_empty() => {
            Ok((first.to_string(), second.to_string()))
        }
        _ => Err(ParseError::Usage(usage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(
            parse_line("touch f").unwrap(),
            ParsedLine::Command(Command::Touch {
                name: "f".to_string()
            })
        );
        assert_eq!(parse_line("ls").unwrap(), ParsedLine::Command(Command::Ls));
        assert_eq!(
            parse_line("pwd").unwrap(),
            ParsedLine::Command(Command::Pwd)
        );
        assert_eq!(
            parse_line("exit").unwrap(),
            ParsedLine::Command(Command::Exit)
        );
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse_line("").unwrap(), ParsedLine::Empty);
        assert_eq!(parse_line("   ").unwrap(), ParsedLine::Empty);
    }

    #[test]
    fn write_content_may_contain_spaces() {
        assert_eq!(
            parse_line("write f hello brave world").unwrap(),
            ParsedLine::Command(Command::Write {
                name: "f".to_string(),
                content: "hello brave world".to_string()
            })
        );
    }

    #[test]
    fn two_argument_commands_need_both() {
        assert_eq!(
            parse_line("mv onlyone").unwrap_err(),
            ParseError::Usage("mv <src> <dest>")
        );
        assert_eq!(
            parse_line("cp").unwrap_err(),
            ParseError::Usage("cp <src> <dest>")
        );
        assert_eq!(
            parse_line("mv a b").unwrap(),
            ParsedLine::Command(Command::Mv {
                src: "a".to_string(),
                dest: "b".to_string()
            })
        );
    }

    #[test]
    fn unknown_command_is_diagnosed() {
        assert_eq!(
            parse_line("frobnicate x").unwrap_err(),
            ParseError::UnknownCommand("frobnicate".to_string())
        );
    }

    #[test]
    fn missing_argument_shows_usage() {
        assert_eq!(
            parse_line("touch").unwrap_err(),
            ParseError::Usage("touch <name>")
        );
        assert_eq!(
            parse_line("cd  ").unwrap_err(),
            ParseError::Usage("cd <path>")
        );
    }

    #[test]
    fn execute_routes_to_the_command_api() {
        let mut ns = Namespace::new();
        let out = execute(
            &mut ns,
            Command::Mkdir {
                name: "d".to_string(),
            },
            false,
        )
        .unwrap();
        assert_eq!(out, Outcome::Continue(String::new()));
        let out = execute(&mut ns, Command::Pwd, false).unwrap();
        assert_eq!(out, Outcome::Continue("/".to_string()));
        assert_eq!(
            execute(&mut ns, Command::Exit, false).unwrap(),
            Outcome::Exit
        );
    }

    #[test]
    fn execute_surfaces_typed_errors() {
        let mut ns = Namespace::new();
        let err = execute(
            &mut ns,
            Command::Read {
                name: "ghost".to_string(),
            },
            false,
        )
        .unwrap_err();
        assert_eq!(err, crate::error::FsError::not_found("/ghost"));
    }
}
