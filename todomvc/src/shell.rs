//! Line-oriented terminal front end.
//!
//! Each input line is a [`Command`]. Commands that stand for user gestures
//! are turned into [`UiEvent`]s and dispatched; item positions are 1-based
//! indexes into the visible list. A gesture outside the edit field first
//! blurs any open edit, which commits its draft.

use crate::app::TodoApp;
use crate::bindings::{Key, Target, UiEvent};
use crate::render::View;
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Command summary printed by `help`
pub const HELP: &str = "\
commands:
  add <text>          create a todo
  toggle <n>          flip todo n
  toggle-all [on|off] mark every todo (default: flip the checkbox)
  edit <n>            start editing todo n
  type <text>         replace the edit field text
  enter | escape      commit or cancel the edit
  blur                leave the edit field (commits)
  destroy <n>         delete todo n
  clear               clear completed todos
  go <route>          navigate: all, active, completed
  show | html         print the list as text or HTML
  help | quit";

/// A parsed shell line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `add <text>`
    Add(String),
    /// `toggle <n>`
    Toggle(usize),
    /// `toggle-all [on|off]`
    ToggleAll(Option<bool>),
    /// `edit <n>`
    Edit(usize),
    /// `type <text>`
    Type(String),
    /// `enter`
    Enter,
    /// `escape`
    Escape,
    /// `blur`
    Blur,
    /// `destroy <n>`
    Destroy(usize),
    /// `clear`
    Clear,
    /// `go <fragment>`
    Go(String),
    /// `show`
    Show,
    /// `html`
    Html,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Problems with a shell line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShellError {
    /// Unknown command word
    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),

    /// Argument not usable
    #[error("{command}: {reason}")]
    BadArgument {
        /// Command word
        command: &'static str,
        /// What was wrong
        reason: String,
    },

    /// No visible todo at that position
    #[error("no todo at position {0}")]
    NoSuchItem(usize),

    /// Edit command without an open edit
    #[error("nothing is being edited (use `edit <n>`)")]
    NotEditing,
}

fn bad(command: &'static str, reason: impl Into<String>) -> ShellError {
    ShellError::BadArgument {
        command,
        reason: reason.into(),
    }
}

fn position(command: &'static str, arg: &str) -> Result<usize, ShellError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(bad(command, format!("expected a position from 1, got {arg:?}"))),
    }
}

impl std::str::FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "add" => Self::Add(rest.to_string()),
            "toggle" => Self::Toggle(position("toggle", rest)?),
            "toggle-all" => Self::ToggleAll(match rest {
                "" => None,
                "on" => Some(true),
                "off" => Some(false),
                other => return Err(bad("toggle-all", format!("expected on or off, got {other:?}"))),
            }),
            "edit" => Self::Edit(position("edit", rest)?),
            "type" => Self::Type(rest.to_string()),
            "enter" => Self::Enter,
            "escape" | "esc" => Self::Escape,
            "blur" => Self::Blur,
            "destroy" | "rm" => Self::Destroy(position("destroy", rest)?),
            "clear" => Self::Clear,
            "go" => Self::Go(rest.to_string()),
            "show" | "" => Self::Show,
            "html" => Self::Html,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(ShellError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

impl Command {
    /// The UI event this command performs, if it is a gesture
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] if a position names no visible item or an edit
    /// command runs with no open edit.
    pub async fn to_event(&self, app: &TodoApp) -> Result<Option<UiEvent>, ShellError> {
        let item = |n: usize| async move { app.visible_id(n).await.ok_or(ShellError::NoSuchItem(n)) };
        let editing = || async move { app.editing_id().await.ok_or(ShellError::NotEditing) };

        let event = match self {
            Self::Add(text) => UiEvent::KeyUp {
                target: Target::NewTodo,
                key: Key::Enter,
                value: text.clone(),
            },
            Self::Toggle(n) => {
                let id = item(*n).await?;
                let completed = app.state().await.todos.get(&id).is_some_and(|t| t.completed);
                UiEvent::Change {
                    target: Target::Toggle(id),
                    checked: !completed,
                }
            },
            Self::ToggleAll(checked) => UiEvent::Change {
                target: Target::ToggleAll,
                checked: match checked {
                    Some(checked) => *checked,
                    None => !app.view().await.toggle_all_checked,
                },
            },
            Self::Edit(n) => UiEvent::DoubleClick {
                target: Target::Label(item(*n).await?),
            },
            Self::Type(text) => UiEvent::Input {
                target: Target::Edit(editing().await?),
                value: text.clone(),
            },
            Self::Enter | Self::Escape => {
                let id = editing().await?;
                let draft = app.state().await.editing.map(|s| s.draft).unwrap_or_default();
                UiEvent::KeyUp {
                    target: Target::Edit(id),
                    key: if *self == Self::Enter { Key::Enter } else { Key::Escape },
                    value: draft,
                }
            },
            Self::Blur => blur(app).await.ok_or(ShellError::NotEditing)?,
            Self::Destroy(n) => UiEvent::Click {
                target: Target::Destroy(item(*n).await?),
            },
            Self::Clear => UiEvent::Click {
                target: Target::ClearCompleted,
            },
            Self::Go(fragment) => UiEvent::HashChange {
                fragment: fragment.clone(),
            },
            Self::Show | Self::Html | Self::Help | Self::Quit => return Ok(None),
        };
        Ok(Some(event))
    }

    /// Whether the gesture moves focus away from an open edit field
    #[must_use]
    pub const fn leaves_edit_field(&self) -> bool {
        matches!(
            self,
            Self::Add(_)
                | Self::Toggle(_)
                | Self::ToggleAll(_)
                | Self::Destroy(_)
                | Self::Clear
                | Self::Go(_)
        )
    }
}

/// Focus-out for the open edit field, carrying its draft
async fn blur(app: &TodoApp) -> Option<UiEvent> {
    let session = app.state().await.editing?;
    Some(UiEvent::FocusOut {
        target: Target::Edit(session.id),
        value: session.draft,
    })
}

fn print_view<W: Write>(output: &mut W, view: &View) -> std::io::Result<()> {
    writeln!(output, "{view}")
}

/// Read commands from `input` until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// application stops accepting events.
pub async fn run<R, W>(app: &TodoApp, input: R, output: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    print_view(output, &app.view().await)?;

    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                writeln!(output, "error: {error}")?;
                continue;
            },
        };
        tracing::debug!(?command, "Shell command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Show => print_view(output, &app.view().await)?,
            Command::Html => write!(output, "{}", app.view().await.to_html())?,
            gesture => match gesture.to_event(app).await {
                Ok(Some(event)) => {
                    if gesture.leaves_edit_field() {
                        if let Some(focus_out) = blur(app).await {
                            app.dispatch(focus_out).await?;
                        }
                    }
                    print_view(output, &app.dispatch(event).await?)?;
                },
                Ok(None) => {},
                Err(error) => writeln!(output, "error: {error}")?,
            },
        }
        output.flush()?;
    }
    Ok(())
}
