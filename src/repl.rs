use std::{
    io::{self, Write},
    sync::Arc,
};

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    moderation::DEFAULT_BANNED_TERMS, orchestrator::ModerationOrchestrator, types::PromptOutcome,
};

enum Input<'a> {
    Quit,
    Empty,
    Prompt(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") {
        Input::Quit
    } else if trimmed.is_empty() {
        Input::Empty
    } else {
        Input::Prompt(trimmed)
    }
}

/// Read-process-print loop over stdin. Returns when the user quits or
/// stdin reaches end of file.
pub async fn run(orchestrator: Arc<ModerationOrchestrator>) -> anyhow::Result<()> {
    println!("AI prompt moderation system");
    println!("This system moderates both input and output for safety.");
    println!(
        "Banned keywords include: {}, etc.",
        DEFAULT_BANNED_TERMS[..4].join(", ")
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\nEnter your prompt (or 'quit' to exit): ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match classify(&line) {
            Input::Quit => {
                println!("\nThank you for using the moderation system!");
                break;
            }
            Input::Empty => println!("Please enter a valid prompt."),
            Input::Prompt(prompt) => {
                match orchestrator.process_prompt(prompt).await {
                    PromptOutcome::Rejected { reason } => println!("\n{reason}"),
                    PromptOutcome::Answered { text, was_redacted } => {
                        if was_redacted {
                            println!("\nOutput contained banned keywords; redacted.");
                        }
                        println!("\n{text}");
                    }
                    PromptOutcome::Failed { message } => println!("\n{message}"),
                };
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Input, classify};

    #[test]
    fn classifies_quit_in_any_case() {
        for line in ["quit", "QUIT", "Quit", "  quit  "] {
            assert!(matches!(classify(line), Input::Quit), "line {line:?}");
        }
    }

    #[test]
    fn classifies_blank_lines_as_empty() {
        for line in ["", "   ", "\t"] {
            assert!(matches!(classify(line), Input::Empty), "line {line:?}");
        }
    }

    #[test]
    fn classifies_anything_else_as_prompt() {
        let Input::Prompt(prompt) = classify("  Tell me about history  ") else {
            panic!("expected a prompt");
        };
        assert_eq!(prompt, "Tell me about history");
    }

    #[test]
    fn quit_must_be_the_whole_line() {
        assert!(matches!(classify("quit now"), Input::Prompt(_)));
    }
}
