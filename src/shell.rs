// Interactive line-oriented shell over a board
//
// Plays the presentation layer: turns commands into store operations, runs
// form validation, re-renders the visible view and reports outcomes as
// notices. The stores themselves never print.

use crate::board::Board;
use crate::command::{Command, HELP};
use crate::config::FormDefaults;
use crate::form::TaskForm;
use crate::models::{TaskStatus, today};
use crate::notice::Notice;
use crate::render;
use eyre::{Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, warn};

pub struct Shell<R, W> {
    board: Board,
    defaults: FormDefaults,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(board: Board, defaults: FormDefaults, input: R, output: W) -> Self {
        Self {
            board,
            defaults,
            input,
            output,
        }
    }

    /// End the session, handing back the board
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Read and execute commands until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        info!(tasks = self.board.tasks.len(), "Shell session started");
        writeln!(self.output, "taskboard - type `help` for commands")?;
        self.execute(Command::List)?;

        loop {
            write!(self.output, "\n> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(e) => {
                    debug!(line = %line, error = %e, "Rejected command");
                    self.notify(Notice::error(e.to_string()))?;
                }
            }
        }

        info!(tasks = self.board.tasks.len(), "Shell session ended");
        Ok(())
    }

    /// Execute one command against the board
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::List => {
                if !self.board.filter.current().is_clear() {
                    render::write_filter(&mut self.output, self.board.filter.current())?;
                }
                let visible = self.board.visible();
                render::write_dashboard(&mut self.output, &visible)?;
            }
            Command::Show(id) => match self.board.tasks.get(&id) {
                Some(task) => render::write_details(&mut self.output, task)?,
                None => self.notify(Notice::not_found())?,
            },
            Command::Add => self.add_task()?,
            Command::Edit(id) => self.edit_task(&id)?,
            Command::Done(id) => match self.board.tasks.get(&id).map(|t| t.status) {
                None => self.notify(Notice::not_found())?,
                Some(TaskStatus::Completed) => self.notify(Notice::already_completed())?,
                Some(_) => {
                    self.board.tasks.set_status(&id, TaskStatus::Completed);
                    self.notify(Notice::task_completed())?;
                }
            },
            Command::SetStatus(id, status) => {
                if self.board.tasks.set_status(&id, status) {
                    self.notify(Notice::status_changed(status.label()))?;
                } else {
                    self.notify(Notice::not_found())?;
                }
            }
            Command::Remove(id) => {
                if self.board.tasks.remove(&id) {
                    self.notify(Notice::task_deleted())?;
                } else {
                    self.notify(Notice::not_found())?;
                }
            }
            Command::ShowFilter => render::write_filter(&mut self.output, self.board.filter.current())?,
            Command::FilterStatus(status) => {
                self.board.filter.set_status(status);
                render::write_filter(&mut self.output, self.board.filter.current())?;
            }
            Command::FilterPriority(priority) => {
                self.board.filter.set_priority(priority);
                render::write_filter(&mut self.output, self.board.filter.current())?;
            }
            Command::Search(term) => {
                self.board.filter.set_search_term(term);
                render::write_filter(&mut self.output, self.board.filter.current())?;
            }
            Command::ClearFilters => {
                self.board.filter.clear();
                render::write_filter(&mut self.output, self.board.filter.current())?;
            }
            Command::Json => {
                let visible = self.board.visible();
                writeln!(self.output, "{}", render::tasks_json(&visible)?)?;
            }
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit | Command::Nothing => {}
        }
        Ok(())
    }

    // ========================================================================
    // Forms
    // ========================================================================

    fn add_task(&mut self) -> Result<()> {
        let mut form = TaskForm::new(&self.defaults, today());
        writeln!(self.output, "Create New Task (empty answer keeps the value in brackets)")?;
        if !self.fill_form(&mut form)? {
            return Ok(());
        }

        match form.validate() {
            Ok(draft) => {
                let id = self.board.tasks.add(draft);
                self.notify(Notice::task_created())?;
                writeln!(self.output, "id: {}", id)?;
            }
            Err(errors) => {
                self.notify(Notice::validation_failed())?;
                for message in errors.messages() {
                    writeln!(self.output, "  - {}", message)?;
                }
            }
        }
        Ok(())
    }

    fn edit_task(&mut self, id: &str) -> Result<()> {
        let Some(existing) = self.board.tasks.get(id).cloned() else {
            return self.notify(Notice::not_found());
        };

        let mut form = TaskForm::from_task(&existing);
        writeln!(self.output, "Edit Task (empty answer keeps the value in brackets)")?;
        if !self.fill_form(&mut form)? {
            return Ok(());
        }

        match form.validate() {
            Ok(draft) => {
                let task = draft.into_task(existing.id, existing.created_at);
                if self.board.tasks.update(task) {
                    self.notify(Notice::task_updated())?;
                } else {
                    self.notify(Notice::not_found())?;
                }
            }
            Err(errors) => {
                self.notify(Notice::validation_failed())?;
                for message in errors.messages() {
                    writeln!(self.output, "  - {}", message)?;
                }
            }
        }
        Ok(())
    }

    /// Prompt for every field; returns false if input ran out
    fn fill_form(&mut self, form: &mut TaskForm) -> Result<bool> {
        let Some(title) = self.prompt_text("Title", &form.title)? else {
            return Ok(false);
        };
        form.title = title;

        let Some(description) = self.prompt_text("Description", &form.description)? else {
            return Ok(false);
        };
        form.description = description;

        let Some(status) = self.prompt_parsed("Status (pending, in-progress, completed)", form.status)? else {
            return Ok(false);
        };
        form.status = status;

        let Some(priority) = self.prompt_parsed("Priority (low, medium, high)", form.priority)? else {
            return Ok(false);
        };
        form.priority = priority;

        let Some(due_date) = self.prompt_text("Due date (YYYY-MM-DD)", &form.due_date)? else {
            return Ok(false);
        };
        form.due_date = due_date;

        Ok(true)
    }

    fn prompt_text(&mut self, label: &str, current: &str) -> Result<Option<String>> {
        if current.is_empty() {
            write!(self.output, "{}: ", label)?;
        } else {
            write!(self.output, "{} [{}]: ", label, current)?;
        }
        self.output.flush()?;

        Ok(self.read_line()?.map(|answer| {
            if answer.trim().is_empty() {
                current.to_string()
            } else {
                answer
            }
        }))
    }

    /// Prompt until the answer parses, input ends, or the answer is empty
    fn prompt_parsed<T>(&mut self, label: &str, current: T) -> Result<Option<T>>
    where
        T: FromStr<Err = eyre::Report> + std::fmt::Display + Copy,
    {
        loop {
            let Some(answer) = self.prompt_text(label, &current.to_string())? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.notify(Notice::error(e.to_string()))?,
            }
        }
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn notify(&mut self, notice: Notice) -> Result<()> {
        if notice.is_destructive() {
            warn!(title = %notice.title, description = %notice.description, "notice");
        } else {
            info!(title = %notice.title, "notice");
        }
        writeln!(self.output, "{}", notice)?;
        Ok(())
    }
}
