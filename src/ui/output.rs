use crate::error::{AnalyzerError, UserFriendlyError};
use crate::extractor::{AnalysisOutcome, Report, ReportEntry};
use console::{style, Emoji, Term};
use std::io::{self, BufRead, Write};

static CHECKMARK: Emoji = Emoji("✅ ", "OK ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static PHONE: Emoji = Emoji("📞 ", "");

const BANNER: &str = r"
╭━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╮
┃         📞 KRSXH PHONE ANALYZER     ┃
╰━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╯
";

pub const REPORT_HEADER: &str = "📋 ANALYSIS REPORT";
pub const PROMPT: &str = "Enter number (with country code): ";

pub struct OutputFormatter {
    use_colors: bool,
    label_width: usize,
}

impl OutputFormatter {
    pub fn new(label_width: usize) -> Self {
        let use_colors = Term::stdout().features().colors_supported();

        Self {
            use_colors,
            label_width,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    pub fn success(&self, message: &str) {
        self.print_human_message(MessageType::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.print_human_message(MessageType::Error, message);
    }

    pub fn print_banner(&self) {
        if self.use_colors {
            println!("{}", style(BANNER).magenta().bold());
        } else {
            println!("{}", BANNER);
        }
    }

    /// Show the prompt and read one trimmed line from stdin.
    pub fn prompt_for_number(&self) -> io::Result<String> {
        let prompt = format!("{}{}", PHONE, PROMPT);
        if self.use_colors {
            print!("{}", style(prompt).blue().bright());
        } else {
            print!("{}", prompt);
        }
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    pub fn display(&self, outcome: &AnalysisOutcome) {
        match outcome {
            AnalysisOutcome::Error(error) => {
                if self.use_colors {
                    eprintln!("{}", style(&error.message).red());
                } else {
                    eprintln!("{}", error.message);
                }
            }
            AnalysisOutcome::Report(report) => self.print_report(report),
        }
    }

    pub fn print_report(&self, report: &Report) {
        println!();
        if self.use_colors {
            println!("{}", style(REPORT_HEADER).yellow());
        } else {
            println!("{}", REPORT_HEADER);
        }

        for line in self.render_report_lines(report) {
            println!("{}", line);
        }
    }

    /// Report lines in display order, styled when colors are enabled.
    pub fn render_report_lines(&self, report: &Report) -> Vec<String> {
        report
            .entries()
            .iter()
            .map(|entry| self.format_entry(entry))
            .collect()
    }

    fn format_entry(&self, entry: &ReportEntry) -> String {
        let label = format!("{:<width$}", entry.label, width = self.label_width);
        if self.use_colors {
            format!("{} ➜ {}", style(label).cyan(), style(&entry.value).white())
        } else {
            format!("{} ➜ {}", label, entry.value)
        }
    }

    pub fn print_user_friendly_error(&self, error: &AnalyzerError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                eprintln!(
                    "{}{}",
                    INFO,
                    style(&format!("Suggestion: {}", suggestion)).cyan()
                );
            } else {
                eprintln!("Suggestion: {}", suggestion);
            }
        }
    }

    fn print_human_message(&self, msg_type: MessageType, message: &str) {
        if self.use_colors {
            match msg_type {
                MessageType::Success => {
                    println!("{}{}", CHECKMARK, style(message).green())
                }
                MessageType::Error => eprintln!("{}", style(message).red().bold()),
            }
        } else {
            match msg_type {
                MessageType::Success => println!("{}{}", CHECKMARK, message),
                MessageType::Error => eprintln!("{}", message),
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
}
