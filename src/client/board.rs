use super::error::ClientError;
use super::http::QuizRow;

const HEADERS: [&str; 3] = ["Name", "Description", "Active"];

/// Latest known quiz list, as shown to the operator.
#[derive(Debug, Default)]
pub struct QuizBoard {
    quizzes: Option<Vec<QuizRow>>,
}

impl QuizBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until the first successful fetch.
    pub fn quizzes(&self) -> Option<&[QuizRow]> {
        self.quizzes.as_deref()
    }

    /// Applies one poll result. A successful fetch replaces the list; a
    /// failure keeps the previous list and is reported on stderr.
    ///
    /// Returns `true` when the list changed.
    pub fn apply(&mut self, result: Result<Vec<QuizRow>, ClientError>) -> bool {
        match result {
            Ok(quizzes) => {
                let changed = self.quizzes.as_ref() != Some(&quizzes);
                self.quizzes = Some(quizzes);
                changed
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load quizzes");
                eprintln!("Error loading quizzes: {}", e);
                false
            }
        }
    }

    pub fn render(&self) -> String {
        match &self.quizzes {
            None => "Loading quizzes...\n".to_string(),
            Some(quizzes) => render_table(quizzes),
        }
    }
}

fn render_table(quizzes: &[QuizRow]) -> String {
    let rows: Vec<[String; 3]> = quizzes
        .iter()
        .map(|q| {
            [
                q.name.clone(),
                q.description.clone().unwrap_or_default(),
                if q.active { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::from("Quizzes\n");
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
