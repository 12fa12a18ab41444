use std::io::Write;

use todo_core::{FormField, Region, Section, Surface, TodoForm};

/// Prints every region update and alert to a writer.
pub struct TerminalSurface<W> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Output is best effort; a closed stdout ends the session on the next read.
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn replace(&mut self, region: Region, markup: String) {
        self.line(&format!("--- {region:?} ---"));
        for row in markup.lines().filter(|row| !row.trim().is_empty()) {
            self.line(row);
        }
    }

    fn show_form(&mut self, form: &TodoForm) {
        let heading = match form.bound() {
            Some(id) => format!("--- editing {id} ---"),
            None => "--- new todo ---".to_string(),
        };
        self.line(&heading);
        for field in [FormField::Title, FormField::Day, FormField::Month, FormField::Year] {
            let value = form.get(field).unwrap_or(field.placeholder());
            self.line(&format!("{field}: {value}"));
        }
    }

    fn hide_form(&mut self) {
        self.line("--- form closed ---");
    }

    fn alert(&mut self, message: &str) {
        self.line(&format!("!! {message}"));
    }

    fn highlight(&mut self, section: &Section) {
        self.line(&format!("* {} ({})", section.title, section.group));
    }
}
