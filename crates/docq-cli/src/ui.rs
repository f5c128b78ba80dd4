//! Terminal rendering and input

use colored::*;
use crossterm::{
    cursor::MoveToColumn,
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, size, Clear, ClearType},
};
use std::io::{self, BufRead, IsTerminal, Write};

use docq_core::Result;

const PROMPT: &str = "you>";

/// Startup banner with the company branding.
pub fn display_banner(company_name: &str) {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(64, terminal_width.saturating_sub(4));
    let inner = banner_width.saturating_sub(2);

    let top = format!("┌{}┐", "─".repeat(inner));
    let bottom = format!("└{}┘", "─".repeat(inner));
    let empty = format!("│{}│", " ".repeat(inner));

    let title = format!("{} Assistant", company_name);
    let lines = [
        title.as_str(),
        "",
        "Ask anything about the company documents.",
        "Answers come from the knowledge base, with context.",
        "",
        "Commands: help · clear · exit",
    ];

    println!();
    println!("{}", top.blue());
    println!("{}", empty.blue());
    for line in lines {
        if line.is_empty() {
            println!("{}", empty.blue());
        } else {
            let pad = inner.saturating_sub(line.chars().count() + 2);
            println!("{}", format!("│  {}{}│", line, " ".repeat(pad)).blue());
        }
    }
    println!("{}", empty.blue());
    println!("{}", bottom.blue());
    println!();
    println!(
        "{}",
        "💡 Tip: ask specific questions; the assistant remembers recent context".dimmed()
    );
    println!();
}

pub fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  {} - Ask a question about the company documents", "<question>".green());
    println!("  {} - Forget the current conversation", "clear".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "exit/quit".green());
    println!();
    println!("{}", "Examples:".bold());
    println!("  when does the office open?");
    println!("  who approves travel expenses?");
    println!("  and what is the limit per night?");
}

/// Show the in-flight indicator; the caller prints the answer when it lands.
pub fn show_thinking() {
    println!("{}", "Searching documents...".dimmed());
}

pub fn render_answer(answer: &str) {
    println!();
    println!("{} {}", "assistant>".cyan().bold(), answer);
    println!();
}

pub fn render_error(message: &str) {
    println!();
    println!("{} {}", "⚠".yellow(), message.red());
    println!();
}

/// Read the next question. Interactive terminals get line editing with
/// history navigation; piped stdin falls back to plain reads so the binary
/// stays scriptable. `None` means the input is exhausted and the session
/// should end.
pub async fn read_question(history: &mut Vec<String>) -> Result<Option<String>> {
    if !io::stdin().is_terminal() {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        return read_plain(&mut reader, history);
    }

    enable_raw_mode()?;
    let result = read_interactive(history);
    disable_raw_mode()?;
    println!();

    let input = result?;
    if !input.is_empty() {
        history.push(input.clone());
    }
    Ok(Some(input))
}

/// One plain line read for piped input. A zero-byte read is end of input,
/// distinct from a blank line.
fn read_plain(reader: &mut impl BufRead, history: &mut Vec<String>) -> Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    let input = input.trim().to_string();
    if !input.is_empty() {
        history.push(input.clone());
    }
    Ok(Some(input))
}

fn redraw(input: &str, cursor: usize) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    write!(stdout, "{} {}", PROMPT.green().bold(), input)?;
    // Move the cursor back from the end of the line to its logical spot.
    let tail = input.chars().count() - cursor;
    if tail > 0 {
        write!(stdout, "\u{1b}[{}D", tail)?;
    }
    stdout.flush()
}

fn read_interactive(history: &mut Vec<String>) -> Result<String> {
    let mut input = String::new();
    let mut cursor = 0usize; // position in chars
    let mut history_index: Option<usize> = None;

    redraw(&input, cursor)?;

    loop {
        let Event::Key(key) = event::read()? else { continue };

        match key.code {
            KeyCode::Enter => return Ok(input.trim().to_string()),
            KeyCode::Esc => return Ok(String::new()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok("exit".to_string());
            }
            KeyCode::Char(c) => {
                let byte_pos = char_to_byte(&input, cursor);
                input.insert(byte_pos, c);
                cursor += 1;
            }
            KeyCode::Backspace => {
                if cursor > 0 {
                    let byte_pos = char_to_byte(&input, cursor - 1);
                    input.remove(byte_pos);
                    cursor -= 1;
                }
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => cursor = (cursor + 1).min(input.chars().count()),
            KeyCode::Up => {
                if !history.is_empty() {
                    let next = match history_index {
                        None => history.len() - 1,
                        Some(i) => i.saturating_sub(1),
                    };
                    history_index = Some(next);
                    input = history[next].clone();
                    cursor = input.chars().count();
                }
            }
            KeyCode::Down => {
                if let Some(i) = history_index {
                    if i + 1 < history.len() {
                        history_index = Some(i + 1);
                        input = history[i + 1].clone();
                    } else {
                        history_index = None;
                        input.clear();
                    }
                    cursor = input.chars().count();
                }
            }
            _ => {}
        }

        redraw(&input, cursor)?;
    }
}

fn char_to_byte(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn plain_read_signals_end_of_input() {
        let mut reader = Cursor::new("when does the office open?\n");
        let mut history = Vec::new();

        let first = read_plain(&mut reader, &mut history).unwrap();
        assert_eq!(first.as_deref(), Some("when does the office open?"));
        assert_eq!(history, vec!["when does the office open?".to_string()]);

        // Exhausted input ends the session instead of looping on "".
        assert_eq!(read_plain(&mut reader, &mut history).unwrap(), None);
        assert_eq!(read_plain(&mut reader, &mut history).unwrap(), None);
    }

    #[test]
    fn blank_line_is_not_end_of_input() {
        let mut reader = Cursor::new("\nnext question\n");
        let mut history = Vec::new();

        assert_eq!(
            read_plain(&mut reader, &mut history).unwrap(),
            Some(String::new())
        );
        assert_eq!(
            read_plain(&mut reader, &mut history).unwrap().as_deref(),
            Some("next question")
        );
        assert_eq!(history, vec!["next question".to_string()]);
    }

    #[test]
    fn char_to_byte_handles_multibyte() {
        let s = "über";
        assert_eq!(char_to_byte(s, 0), 0);
        assert_eq!(char_to_byte(s, 1), 2); // ü is two bytes
        assert_eq!(char_to_byte(s, 4), s.len());
        assert_eq!(char_to_byte(s, 10), s.len());
    }
}
