use crate::utils::error::{DemoError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Facade,
    Strategy,
    All,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::Facade),
            2 => Some(MenuChoice::Strategy),
            3 => Some(MenuChoice::All),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

fn is_integer_literal(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Non-numeric input is an error. Any integer outside 1-4, however large,
/// parses to `None`.
pub fn parse_choice(input: &str) -> Result<Option<MenuChoice>> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(number) => Ok(MenuChoice::from_number(number)),
        Err(_) if is_integer_literal(trimmed) => Ok(None),
        Err(_) => Err(DemoError::InvalidMenuInput {
            input: trimmed.to_string(),
        }),
    }
}

pub fn display_menu<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let rule = "=".repeat(60);
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "           DESIGN PATTERNS INTERACTIVE DEMO")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "1. Facade Pattern - Home Theater System")?;
    writeln!(out, "2. Strategy Pattern - Payment System")?;
    writeln!(out, "3. Run All Examples")?;
    writeln!(out, "4. Exit")?;
    writeln!(out, "{}", rule)?;
    Ok(())
}

/// Runs the menu until the user exits or input ends.
///
/// A failing demo is reported and the menu keeps going; only I/O errors on
/// `input`/`out` end the loop early.
pub fn run_menu<R, W, F>(mut input: R, out: &mut W, mut run_demo: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(MenuChoice, &mut W) -> Result<()>,
{
    tracing::info!("Design Patterns Demo Application Started");
    writeln!(out, "Welcome to the Design Patterns Interactive Demo!")?;
    writeln!(
        out,
        "This application demonstrates various design patterns with practical examples."
    )?;

    loop {
        display_menu(out)?;
        write!(out, "\nEnter your choice (1-4): ")?;
        out.flush()?;

        let mut raw = Vec::new();
        if input.read_until(b'\n', &mut raw)? == 0 {
            tracing::info!("Input closed, leaving menu");
            writeln!(out)?;
            break;
        }

        // 非 UTF-8 的位元組會變成替代字元，交給 parse_choice 拒絕
        let line = String::from_utf8_lossy(&raw);
        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(e) => {
                tracing::warn!("Invalid input: Please enter a number");
                writeln!(out, "{}", e.user_friendly_message())?;
                continue;
            }
        };

        match choice {
            Some(MenuChoice::Exit) => {
                tracing::info!("Application terminated by user");
                writeln!(out, "\nThank you for using the Design Patterns Demo!")?;
                writeln!(out, "Goodbye! 👋")?;
                break;
            }
            Some(choice) => {
                if let Err(e) = run_demo(choice, out) {
                    tracing::error!(
                        "❌ Demo failed: {} (Category: {:?}, Severity: {:?})",
                        e,
                        e.category(),
                        e.severity()
                    );
                    writeln!(out, "❌ {}", e.user_friendly_message())?;
                    writeln!(out, "💡 {}", e.recovery_suggestion())?;
                }
            }
            None => {
                writeln!(out, "Invalid choice. Please enter a number between 1 and 4.")?;
            }
        }
    }

    tracing::info!("Design Patterns Demo Application Ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drive(input: &str) -> (Vec<MenuChoice>, String) {
        let mut chosen = Vec::new();
        let mut out = Vec::new();
        run_menu(Cursor::new(input.to_string()), &mut out, |choice, _| {
            chosen.push(choice);
            Ok(())
        })
        .unwrap();
        (chosen, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice(" 3\n").unwrap(), Some(MenuChoice::All));
        assert_eq!(parse_choice("9").unwrap(), None);
        assert_eq!(parse_choice("-2").unwrap(), None);
        assert!(matches!(
            parse_choice("abc"),
            Err(DemoError::InvalidMenuInput { input }) if input == "abc"
        ));
        assert!(parse_choice("").is_err());
    }

    #[test]
    fn test_parse_choice_overflowing_number_is_out_of_range() {
        assert_eq!(parse_choice("99999999999999999999").unwrap(), None);
        assert_eq!(parse_choice("-99999999999999999999\n").unwrap(), None);
        assert!(parse_choice("+").is_err());
        assert!(parse_choice("12abc").is_err());
    }

    #[test]
    fn test_from_number() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Facade));
        assert_eq!(MenuChoice::from_number(4), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(5), None);
    }

    #[test]
    fn test_menu_dispatches_until_exit() {
        let (chosen, output) = drive("1\n2\n3\n4\n1\n");

        assert_eq!(
            chosen,
            vec![MenuChoice::Facade, MenuChoice::Strategy, MenuChoice::All]
        );
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_menu_reprompts_on_bad_input() {
        let (chosen, output) = drive("hello\n7\n2\n4\n");

        assert_eq!(chosen, vec![MenuChoice::Strategy]);
        assert!(output.contains("Please enter a valid number (1-4)"));
        assert!(output.contains("Invalid choice. Please enter a number between 1 and 4."));
        assert_eq!(output.matches("Enter your choice (1-4): ").count(), 4);
    }

    #[test]
    fn test_menu_overflowing_number_gets_invalid_choice() {
        let (chosen, output) = drive("99999999999999999999\n4\n");

        assert!(chosen.is_empty());
        assert!(output.contains("Invalid choice. Please enter a number between 1 and 4."));
        assert!(!output.contains("Please enter a valid number (1-4)"));
    }

    #[test]
    fn test_menu_reprompts_on_non_utf8_input() {
        let mut chosen = Vec::new();
        let mut out = Vec::new();
        run_menu(Cursor::new(&b"\xff\xfe\n1\n4\n"[..]), &mut out, |choice, _| {
            chosen.push(choice);
            Ok(())
        })
        .unwrap();

        assert_eq!(chosen, vec![MenuChoice::Facade]);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Please enter a valid number (1-4)"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_menu_stops_at_end_of_input() {
        let (chosen, output) = drive("1\n");

        assert_eq!(chosen, vec![MenuChoice::Facade]);
        assert!(!output.contains("Goodbye!"));
    }

    #[test]
    fn test_menu_survives_failing_demo() {
        let mut out = Vec::new();
        let mut calls = 0;
        run_menu(Cursor::new("2\n2\n4\n"), &mut out, |_, _| {
            calls += 1;
            Err(DemoError::InvalidAmount { amount: 0.0 })
        })
        .unwrap();

        assert_eq!(calls, 2);
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("amount must be positive").count(), 2);
    }
}
