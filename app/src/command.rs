//! Parsing of the line-oriented commands typed at the prompt.

use anyhow::{anyhow, bail, Result};
use todo_core::collection::{ALL_TODOS, COMPLETED};
use todo_core::{Event, FormField, Group, TodoId};

pub const HELP: &str = "\
commands:
  all | completed          show a whole group
  date <MM/YY> | done <MM/YY>
                           show one due date in all or completed
  new | edit <id>          open the form
  set <field> <value>      title, day, month or year
  submit | cancel | complete
  toggle <id> | delete <id>
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Help,
    Quit,
}

impl Command {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let event = match word {
            "" => return Ok(None),
            "help" => return Ok(Some(Command::Help)),
            "quit" | "exit" => return Ok(Some(Command::Quit)),
            "all" => section(Group::AllItems, ALL_TODOS),
            "completed" => section(Group::CompletedItems, COMPLETED),
            "date" => section(Group::AllItems, required(word, rest)?),
            "done" => section(Group::CompletedItems, required(word, rest)?),
            "new" => Event::NewItem,
            "edit" => Event::EditItem(id(word, rest)?),
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(field, value)| (field, value.trim()))
                    .unwrap_or((rest, ""));
                let field: FormField = field.parse().map_err(|e: String| anyhow!(e))?;
                Event::Input {
                    field,
                    value: value.to_string(),
                }
            }
            "submit" => Event::Submit,
            "cancel" => Event::Dismiss,
            "complete" => Event::MarkComplete,
            "toggle" => Event::Toggle(id(word, rest)?),
            "delete" => Event::Delete(id(word, rest)?),
            other => bail!("unknown command: {other} (try `help`)"),
        };
        Ok(Some(Command::Event(event)))
    }
}

fn section(group: Group, title: &str) -> Event {
    Event::SelectSection {
        group,
        title: title.to_string(),
    }
}

fn required<'a>(word: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("`{word}` needs an argument");
    }
    Ok(rest)
}

fn id(word: &str, rest: &str) -> Result<TodoId> {
    required(word, rest).map(TodoId::from)
}
