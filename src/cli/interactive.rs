use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::Input;
use tracing::warn;

use crate::error::{Result, YnabError};
use crate::importer::import_file;
use crate::settings::{load_settings, Settings};
use crate::writer::write_csv;

const INPUT_PROMPT: &str = "What file do you want to process? (or X to exit)";
const OUTPUT_PROMPT: &str = "What do you want to name your output file?";

/// Source of answers for the driver. `None` means input ran out, which the
/// driver treats the same as the user typing X.
pub trait Prompter {
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>>;
}

/// dialoguer prompts on a terminal, plain line reads when stdin is piped.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
        if std::io::stdin().is_terminal() {
            let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
            if let Some(d) = default {
                input = input.default(d.to_string());
            }
            return input
                .interact_text()
                .map(Some)
                .map_err(|e| YnabError::Prompt(e.to_string()));
        }

        match default {
            Some(d) => print!("{prompt} [{d}]: "),
            None => print!("{prompt}: "),
        }
        std::io::stdout().flush()?;
        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        let line = line.trim();
        match default {
            Some(d) if line.is_empty() => Ok(Some(d.to_string())),
            _ => Ok(Some(line.to_string())),
        }
    }
}

pub fn run(today: NaiveDate) -> Result<()> {
    let settings = load_settings();
    match drive(&mut TermPrompter, &settings, today)? {
        Some(path) => println!("{}", format!("{} was successfully created!", path.display()).green()),
        None => println!("{}", "No file processed.".yellow()),
    }
    Ok(())
}

/// Ask for input files until one converts cleanly, then ask where to write
/// it. Problems with the file's contents are reported and the user gets
/// another try; anything else ends the session. Returns the written path, or
/// `None` if the user backed out.
pub fn drive<P: Prompter>(
    prompter: &mut P,
    settings: &Settings,
    today: NaiveDate,
) -> Result<Option<PathBuf>> {
    let records = loop {
        let Some(answer) = prompter.ask(INPUT_PROMPT, None)? else {
            return Ok(None);
        };
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case("x") {
            return Ok(None);
        }
        if answer.is_empty() {
            continue;
        }

        match import_file(&settings.resolve_input(answer), today) {
            Ok(records) => break records,
            Err(e) if e.is_recoverable() => {
                warn!(input = answer, error = %e, "input rejected");
                println!("{}", e.to_string().red());
            }
            Err(e) => return Err(e),
        }
    };

    let Some(output) = prompter.ask(OUTPUT_PROMPT, Some(&settings.default_output))? else {
        return Ok(None);
    };
    let output = match output.trim() {
        "" => settings.default_output.clone(),
        name => name.to_string(),
    };
    let path = PathBuf::from(output);
    write_csv(&path, &records)?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Canned answers, for driving the loop in tests.
    struct ScriptedPrompter {
        answers: VecDeque<String>,
        asked: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<Option<String>> {
            self.asked.push(prompt.to_string());
            Ok(self.answers.pop_front().map(|a| match default {
                Some(d) if a.is_empty() => d.to_string(),
                _ => a,
            }))
        }
    }

    const SCAN: &str = "$4.99\nCoffee Shop\nMorning coffee\nJohn - 03/14/24\n2% Cashback\n";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn settings_for(dir: &std::path::Path) -> Settings {
        Settings {
            input_dir: dir.to_string_lossy().to_string(),
            default_output: dir.join("ynab.csv").to_string_lossy().to_string(),
        }
    }

    #[test]
    fn test_exit_before_choosing_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut prompter = ScriptedPrompter::new(&["X"]);
        let result = drive(&mut prompter, &settings_for(dir.path()), today()).unwrap();
        assert!(result.is_none());
        assert_eq!(prompter.asked, vec![INPUT_PROMPT]);
    }

    #[test]
    fn test_missing_file_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scan.txt"), SCAN).unwrap();
        let out = dir.path().join("out.csv");
        let out_str = out.to_string_lossy().to_string();
        let mut prompter = ScriptedPrompter::new(&["missing.txt", "scan.txt", &out_str]);

        let written = drive(&mut prompter, &settings_for(dir.path()), today()).unwrap();
        assert_eq!(written, Some(out.clone()));
        assert_eq!(prompter.asked, vec![INPUT_PROMPT, INPUT_PROMPT, OUTPUT_PROMPT]);
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "Date,Payee,Memo,Amount\n03/14/2024,Coffee Shop,Morning coffee,-$4.99\n"
        );
    }

    #[test]
    fn test_malformed_file_reprompts_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.txt"), "$4.99\nCoffee Shop\nJohn - Friday\n").unwrap();
        let mut prompter = ScriptedPrompter::new(&["bad.txt", "x"]);

        let result = drive(&mut prompter, &settings_for(dir.path()), today()).unwrap();
        assert!(result.is_none());
        assert!(!dir.path().join("ynab.csv").exists());
    }

    #[test]
    fn test_cashback_only_file_reprompts_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cb.txt"), "2% Daily Cash\n").unwrap();
        let out = dir.path().join("out.csv");
        let out_str = out.to_string_lossy().to_string();
        let mut prompter = ScriptedPrompter::new(&["cb.txt", &out_str]);

        let result = drive(&mut prompter, &settings_for(dir.path()), today()).unwrap();
        // The output name is taken as the next input file name and not found;
        // answers then run out.
        assert!(result.is_none());
        assert_eq!(prompter.asked, vec![INPUT_PROMPT, INPUT_PROMPT, INPUT_PROMPT]);
        assert!(!out.exists());
    }

    #[test]
    fn test_bad_date_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bad.txt"),
            "$4.99\nCoffee Shop\nMorning coffee\nJohn - 31/31/24\n",
        )
        .unwrap();
        let mut prompter = ScriptedPrompter::new(&["bad.txt"]);
        let result = drive(&mut prompter, &settings_for(dir.path()), today()).unwrap();
        // Ran out of answers on the second prompt.
        assert!(result.is_none());
        assert_eq!(prompter.asked, vec![INPUT_PROMPT, INPUT_PROMPT]);
    }

    #[test]
    fn test_blank_output_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("scan.txt"), SCAN).unwrap();
        let settings = settings_for(dir.path());
        let mut prompter = ScriptedPrompter::new(&["scan.txt", ""]);

        let written = drive(&mut prompter, &settings, today()).unwrap();
        assert_eq!(written, Some(PathBuf::from(&settings.default_output)));
        assert!(dir.path().join("ynab.csv").exists());
    }
}
