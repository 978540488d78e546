use risk_auditor::classification::{AssessmentInput, AttributeKey, RuleGroup};
use risk_auditor::error::AppError;
use std::io::{self, BufRead, Write};

/// Console walk-through of the assessment questions.
pub(crate) struct Questionnaire<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Questionnaire<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks every question and returns the validated answers.
    ///
    /// Once a prohibited practice is confirmed the remaining sections are skipped,
    /// since no later answer can change the outcome.
    pub(crate) fn run(mut self) -> Result<AssessmentInput, AppError> {
        writeln!(self.output, "===============================================")?;
        writeln!(self.output, "  EU AI ACT RISK CLASSIFICATION TOOL")?;
        writeln!(self.output, "===============================================")?;
        writeln!(
            self.output,
            "This tool helps classify your AI system according to\n\
             the EU AI Act's risk-based framework and provides\n\
             relevant governance recommendations.\n"
        )?;

        let system_name = self.prompt_line("Enter the name of your AI system:")?;
        let system_purpose = self.prompt_line("Describe the main purpose of your AI system:")?;
        let mut answers = AssessmentInput::new(system_name, system_purpose)?;

        for group in RuleGroup::ordered() {
            writeln!(self.output, "\n--- {} ---", group.heading())?;
            let mut any_yes = false;

            for key in AttributeKey::ordered()
                .into_iter()
                .filter(|key| key.group() == group)
            {
                let answer = self.prompt_yes_no(key.question())?;
                any_yes |= answer;
                answers = answers.with_flag(key, answer);
            }

            if any_yes && group.tier().is_prohibited() {
                writeln!(
                    self.output,
                    "\nWARNING: Your AI system may fall under PROHIBITED practices!"
                )?;
                break;
            }
        }

        self.output.flush()?;
        Ok(answers)
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_answer()
    }

    fn prompt_yes_no(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question} (y/n): ")?;
        self.output.flush()?;
        let response = self.read_answer()?;
        Ok(response.trim().to_lowercase().starts_with('y'))
    }

    fn read_answer(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "questionnaire input ended before all questions were answered",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
