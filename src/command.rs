// Shell command parsing

use crate::filter::{PriorityFilter, StatusFilter};
use crate::models::TaskStatus;
use eyre::{Result, eyre};

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show(String),
    Add,
    Edit(String),
    Done(String),
    SetStatus(String, TaskStatus),
    Remove(String),
    ShowFilter,
    FilterStatus(StatusFilter),
    FilterPriority(PriorityFilter),
    Search(String),
    ClearFilters,
    Json,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

pub const HELP: &str = "\
Commands:
  list | ls                    Show tasks matching the current filter
  show <id>                    Show one task in full
  add                          Create a task (prompts for each field)
  edit <id>                    Edit a task (empty answer keeps the value)
  done <id>                    Mark a task as completed
  status <id> <status>         Set status: pending, in-progress, completed
  rm | delete <id>             Delete a task
  filter                       Show the current filter
  filter status <value>        all, pending, in-progress, completed
  filter priority <value>      all, low, medium, high
  search <text>                Match title or description (empty clears)
  clear                        Reset all filters
  json                         Print visible tasks as JSON
  help                         Show this help
  quit | exit                  Leave the shell";

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "" => Command::Nothing,
            "list" | "ls" => Command::List,
            "show" => Command::Show(one_arg(word, rest)?),
            "add" | "new" => Command::Add,
            "edit" => Command::Edit(one_arg(word, rest)?),
            "done" | "complete" => Command::Done(one_arg(word, rest)?),
            "status" => {
                let mut args = rest.split_whitespace();
                match (args.next(), args.next(), args.next()) {
                    (Some(id), Some(status), None) => Command::SetStatus(id.to_string(), status.parse()?),
                    _ => return Err(eyre!("Usage: status <id> <status>")),
                }
            }
            "rm" | "delete" => Command::Remove(one_arg(word, rest)?),
            "filter" => Self::parse_filter(rest)?,
            "search" => Command::Search(rest.to_string()),
            "clear" => Command::ClearFilters,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(eyre!("Unknown command: {} (type `help` for a list)", other)),
        };

        Ok(command)
    }

    fn parse_filter(rest: &str) -> Result<Self> {
        let mut args = rest.split_whitespace();
        match (args.next(), args.next(), args.next()) {
            (None, _, _) => Ok(Command::ShowFilter),
            (Some(field), Some(value), None) => match field.to_lowercase().as_str() {
                "status" => Ok(Command::FilterStatus(value.parse()?)),
                "priority" => Ok(Command::FilterPriority(value.parse()?)),
                other => Err(eyre!("Unknown filter field: {} (expected status or priority)", other)),
            },
            _ => Err(eyre!("Usage: filter [status|priority] <value>")),
        }
    }
}

fn one_arg(command: &str, rest: &str) -> Result<String> {
    let mut args = rest.split_whitespace();
    match (args.next(), args.next()) {
        (Some(id), None) => Ok(id.to_string()),
        _ => Err(eyre!("Usage: {} <id>", command)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Selection;
    use crate::models::TaskPriority;

    #[test]
    fn test_simple_commands() {
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("  LS ").unwrap(), Command::List);
        assert_eq!(Command::parse("add").unwrap(), Command::Add);
        assert_eq!(Command::parse("clear").unwrap(), Command::ClearFilters);
        assert_eq!(Command::parse("json").unwrap(), Command::Json);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("").unwrap(), Command::Nothing);
    }

    #[test]
    fn test_id_commands() {
        assert_eq!(Command::parse("show 1").unwrap(), Command::Show("1".to_string()));
        assert_eq!(Command::parse("edit 2").unwrap(), Command::Edit("2".to_string()));
        assert_eq!(Command::parse("done 3").unwrap(), Command::Done("3".to_string()));
        assert_eq!(Command::parse("rm 3").unwrap(), Command::Remove("3".to_string()));
        assert!(Command::parse("show").is_err());
        assert!(Command::parse("rm 1 2").is_err());
    }

    #[test]
    fn test_status_command() {
        assert_eq!(
            Command::parse("status 1 in-progress").unwrap(),
            Command::SetStatus("1".to_string(), TaskStatus::InProgress)
        );
        assert!(Command::parse("status 1").is_err());
        assert!(Command::parse("status 1 later").is_err());
    }

    #[test]
    fn test_filter_commands() {
        assert_eq!(Command::parse("filter").unwrap(), Command::ShowFilter);
        assert_eq!(
            Command::parse("filter status completed").unwrap(),
            Command::FilterStatus(Selection::Only(TaskStatus::Completed))
        );
        assert_eq!(
            Command::parse("filter priority all").unwrap(),
            Command::FilterPriority(Selection::All)
        );
        assert_eq!(
            Command::parse("filter priority HIGH").unwrap(),
            Command::FilterPriority(Selection::Only(TaskPriority::High))
        );
        assert!(Command::parse("filter owner me").is_err());
        assert!(Command::parse("filter status").is_err());
    }

    #[test]
    fn test_search_keeps_rest_of_line() {
        assert_eq!(
            Command::parse("search  team   meeting ").unwrap(),
            Command::Search("team   meeting".to_string())
        );
        assert_eq!(Command::parse("search").unwrap(), Command::Search(String::new()));
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.to_string().contains("Unknown command: frobnicate"));
    }
}
