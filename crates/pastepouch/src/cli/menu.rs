use std::io::{BufRead, Write};
use std::str::FromStr;

use pastepouch_core::paste::{execute, Operation};
use pastepouch_core::projection::project_json;

use crate::{cli::CliError, state::AppState};

const MENU: &str = "
(1) Display all users entries
(2) Display all pastes entries
(3) Create a new user
(4) Create a new paste
(5) Read a paste
(6) Delete a paste
(7) Update a paste
(8) Get total paste count
(9) Get total user count
";

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SelectUsers,
    SelectPastes,
    CreateUser,
    CreatePaste,
    ReadPaste,
    DeletePaste,
    UpdatePaste,
    GetPasteCount,
    GetUserCount,
}

impl FromStr for MenuChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::SelectUsers),
            "2" => Ok(MenuChoice::SelectPastes),
            "3" => Ok(MenuChoice::CreateUser),
            "4" => Ok(MenuChoice::CreatePaste),
            "5" => Ok(MenuChoice::ReadPaste),
            "6" => Ok(MenuChoice::DeletePaste),
            "7" => Ok(MenuChoice::UpdatePaste),
            "8" => Ok(MenuChoice::GetPasteCount),
            "9" => Ok(MenuChoice::GetUserCount),
            other => Err(CliError::UnknownChoice(other.to_string())),
        }
    }
}

/// Read-evaluate loop: show the menu, collect fields, run the operation,
/// print the projected records as compact JSON.
pub struct Menu<R, W> {
    state: AppState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(state: AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    /// Runs until the input is exhausted or can no longer be read/written.
    pub async fn run(&mut self) -> Result<(), CliError> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            if line.is_empty() {
                continue;
            }

            match self.step(&line).await {
                Ok(Some(json)) => writeln!(self.output, "{json}")?,
                Ok(None) => return Ok(()),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!(error = %e, "Menu operation failed");
                    writeln!(self.output, "error: {e}")?;
                }
            }
        }
    }

    /// Handles one menu selection. `Ok(None)` means input ended mid-prompt.
    async fn step(&mut self, line: &str) -> Result<Option<String>, CliError> {
        let choice: MenuChoice = line.parse()?;
        let Some(operation) = self.read_operation(choice)? else {
            return Ok(None);
        };

        let name = operation.name();
        let result = execute(self.state.store.as_ref(), operation).await?;
        tracing::debug!(
            operation = name,
            rows = result.rows.len(),
            rows_affected = result.rows_affected,
            "Menu operation completed"
        );

        Ok(Some(project_json(&result, &self.state.types)?))
    }

    fn read_operation(&mut self, choice: MenuChoice) -> Result<Option<Operation>, CliError> {
        let operation = match choice {
            MenuChoice::SelectUsers => Operation::SelectUsers,
            MenuChoice::SelectPastes => Operation::SelectPastes,
            MenuChoice::GetPasteCount => Operation::GetPasteCount,
            MenuChoice::GetUserCount => Operation::GetUserCount,
            MenuChoice::CreateUser => {
                let Some(name) = self.prompt("createUser", "name")? else {
                    return Ok(None);
                };
                let Some(email) = self.prompt("createUser", "email")? else {
                    return Ok(None);
                };
                Operation::CreateUser {
                    name: Some(name).filter(|name| !name.is_empty()),
                    email,
                }
            }
            MenuChoice::CreatePaste => {
                let Some(userid) = self.prompt_number("createPaste", "userid")? else {
                    return Ok(None);
                };
                let Some(content) = self.prompt_content("createPaste")? else {
                    return Ok(None);
                };
                Operation::CreatePaste { userid, content }
            }
            MenuChoice::ReadPaste => match self.prompt_number("readPaste", "pasteid")? {
                Some(id) => Operation::ReadPaste { id },
                None => return Ok(None),
            },
            MenuChoice::DeletePaste => match self.prompt_number("deletePaste", "pasteid")? {
                Some(id) => Operation::DeletePaste { id },
                None => return Ok(None),
            },
            MenuChoice::UpdatePaste => {
                let Some(id) = self.prompt_number("updatePaste", "pasteid")? else {
                    return Ok(None);
                };
                let Some(content) = self.prompt_content("updatePaste")? else {
                    return Ok(None);
                };
                Operation::UpdatePaste { id, content }
            }
        };

        Ok(Some(operation))
    }

    fn prompt(&mut self, operation: &str, field: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{operation}> Enter {field}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_number(
        &mut self,
        operation: &str,
        field: &'static str,
    ) -> Result<Option<i64>, CliError> {
        let Some(value) = self.prompt(operation, field)? else {
            return Ok(None);
        };

        value
            .parse()
            .map(Some)
            .map_err(|_| CliError::InvalidNumber { field, value })
    }

    fn prompt_content(&mut self, operation: &str) -> Result<Option<String>, CliError> {
        let content = self.prompt(operation, "content")?;
        if let Some(content) = &content {
            writeln!(self.output, "{operation}> Your content was: {content}")?;
        }
        Ok(content)
    }

    /// Next line with surrounding whitespace removed, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
