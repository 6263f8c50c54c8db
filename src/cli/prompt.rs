/// Interactive questions on the terminal.
use std::io::{self, BufRead, Write};

/// Asks the user things. Implemented over stdin/stderr for real runs.
pub trait Prompter {
    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the terminal cannot be read.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;

    /// Ask for a line of text. Returns an empty string at end of input.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the terminal cannot be read.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Prompts on stderr, reads answers from stdin.
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line(question: &str, suffix: &str) -> io::Result<Option<String>> {
        let mut err = io::stderr().lock();
        write!(err, "{question}{suffix}")?;
        err.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            let Some(answer) = Self::read_line(question, " [y/n]: ")? else {
                return Ok(false);
            };
            match parse_yes_no(&answer) {
                Some(yes) => return Ok(yes),
                None => eprintln!("Please enter Y or N"),
            }
        }
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        Ok(Self::read_line(question, ": ")?.unwrap_or_default())
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Replays fixed answers and records the questions asked.
#[cfg(test)]
pub mod testing {
    use std::collections::VecDeque;
    use std::io;

    use super::Prompter;

    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| (*a).to_owned()).collect(),
                asked: Vec::new(),
            }
        }

        fn next(&mut self, question: &str) -> String {
            self.asked.push(question.to_owned());
            self.answers.pop_front().unwrap_or_default()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&mut self, question: &str) -> io::Result<bool> {
            Ok(self.next(question) == "y")
        }

        fn ask(&mut self, question: &str) -> io::Result<String> {
            Ok(self.next(question))
        }
    }
}
