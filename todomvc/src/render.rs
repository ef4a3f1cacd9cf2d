//! Rendering: state to view model, view model to markup.
//!
//! [`render`] is a pure function of [`TodoState`]. The resulting [`View`] is
//! templated to TodoMVC HTML by [`View::to_html`] and to plain text by its
//! `Display` impl. Equal states always render equal output.

use crate::router::{fragment_for, Route};
use crate::types::{Filter, TodoState};
use std::fmt;

/// One row of the todo list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoView {
    /// Item identifier (`data-id`)
    pub id: String,
    /// Item title
    pub title: String,
    /// Completed checkbox state
    pub completed: bool,
    /// Whether the row is in edit mode
    pub editing: bool,
    /// Contents of the inline edit field
    pub edit_value: String,
}

/// A footer filter link
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterLink {
    /// Filter the link selects
    pub filter: Filter,
    /// Link target, e.g. `#/active`
    pub href: String,
    /// Link text
    pub label: &'static str,
    /// Whether the link is highlighted
    pub selected: bool,
}

/// Footer contents
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterView {
    /// Items left to do
    pub active_count: usize,
    /// `item` or `items`, agreeing with `active_count`
    pub active_word: String,
    /// Completed items
    pub completed_count: usize,
    /// Whether the clear-completed button is shown
    pub show_clear_completed: bool,
    /// All, Active, Completed
    pub links: Vec<FilterLink>,
}

/// Everything the page shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    /// Current route fragment
    pub fragment: String,
    /// Rows under the active filter, in insertion order
    pub todos: Vec<TodoView>,
    /// Whether the main section (toggle-all and list) is shown
    pub show_main: bool,
    /// Toggle-all checkbox state
    pub toggle_all_checked: bool,
    /// Footer, absent when there are no items
    pub footer: Option<FooterView>,
    /// Whether the new-todo field has focus (no row is being edited)
    pub new_todo_focused: bool,
    /// Last persistence failure, if any
    pub error: Option<String>,
}

/// `word` agreeing with `count`
#[must_use]
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Build the view model for `state`
#[must_use]
pub fn render(state: &TodoState) -> View {
    let editing = state.editing.as_ref();
    let todos: Vec<TodoView> = state
        .visible()
        .map(|item| {
            let session = editing.filter(|session| session.id == item.id);
            TodoView {
                id: item.id.to_string(),
                title: item.title.clone(),
                completed: item.completed,
                editing: session.is_some(),
                edit_value: session.map_or_else(|| item.title.clone(), |s| s.draft.clone()),
            }
        })
        .collect();

    let has_items = !state.todos.is_empty();
    let active_count = state.todos.active_count();
    let completed_count = state.todos.completed_count();

    let footer = has_items.then(|| FooterView {
        active_count,
        active_word: pluralize(active_count, "item"),
        completed_count,
        show_clear_completed: completed_count > 0,
        links: filter_links(&state.route),
    });

    View {
        fragment: state.route.fragment(),
        new_todo_focused: !todos.iter().any(|t| t.editing),
        todos,
        show_main: has_items,
        toggle_all_checked: active_count == 0,
        footer,
        error: state.last_error.clone(),
    }
}

fn filter_links(route: &Route) -> Vec<FilterLink> {
    Filter::ALL
        .into_iter()
        .map(|filter| FilterLink {
            filter,
            href: fragment_for(filter),
            label: filter.label(),
            selected: route.is_selected(filter),
        })
        .collect()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn attr(condition: bool, text: &str) -> &str {
    if condition {
        text
    } else {
        ""
    }
}

impl View {
    /// Render the TodoMVC page markup
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<section class=\"todoapp\">\n");

        html.push_str("  <header class=\"header\">\n    <h1>todos</h1>\n");
        html.push_str(&format!(
            "    <input class=\"new-todo\" placeholder=\"What needs to be done?\"{}>\n",
            attr(self.new_todo_focused, " autofocus")
        ));
        html.push_str("  </header>\n");

        if self.show_main {
            html.push_str("  <section class=\"main\">\n");
            html.push_str(&format!(
                "    <input id=\"toggle-all\" class=\"toggle-all\" type=\"checkbox\"{}>\n",
                attr(self.toggle_all_checked, " checked")
            ));
            html.push_str("    <label for=\"toggle-all\">Mark all as complete</label>\n");
            html.push_str("    <ul class=\"todo-list\">\n");
            for todo in &self.todos {
                html.push_str(&todo_html(todo));
            }
            html.push_str("    </ul>\n  </section>\n");
        }

        if let Some(footer) = &self.footer {
            html.push_str(&footer_html(footer));
        }

        html.push_str("</section>\n");
        html
    }
}

fn todo_html(todo: &TodoView) -> String {
    let classes: Vec<&str> = [(todo.completed, "completed"), (todo.editing, "editing")]
        .into_iter()
        .filter_map(|(on, class)| on.then_some(class))
        .collect();
    let class = if classes.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", classes.join(" "))
    };

    format!(
        concat!(
            "      <li{class} data-id=\"{id}\">\n",
            "        <div class=\"view\">\n",
            "          <input class=\"toggle\" type=\"checkbox\"{checked}>\n",
            "          <label>{title}</label>\n",
            "          <button class=\"destroy\"></button>\n",
            "        </div>\n",
            "        <input class=\"edit\" value=\"{value}\"{focus}>\n",
            "      </li>\n",
        ),
        class = class,
        id = escape_html(&todo.id),
        checked = attr(todo.completed, " checked"),
        title = escape_html(&todo.title),
        value = escape_html(&todo.edit_value),
        focus = attr(todo.editing, " autofocus"),
    )
}

fn footer_html(footer: &FooterView) -> String {
    let mut html = String::from("  <footer class=\"footer\">\n");
    html.push_str(&format!(
        "    <span class=\"todo-count\"><strong>{}</strong> {} left</span>\n",
        footer.active_count, footer.active_word
    ));
    html.push_str("    <ul class=\"filters\">\n");
    for link in &footer.links {
        html.push_str(&format!(
            "      <li><a{} href=\"{}\">{}</a></li>\n",
            attr(link.selected, " class=\"selected\""),
            link.href,
            link.label
        ));
    }
    html.push_str("    </ul>\n");
    if footer.show_clear_completed {
        html.push_str("    <button class=\"clear-completed\">Clear completed</button>\n");
    }
    html.push_str("  </footer>\n");
    html
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "todos  {}", self.fragment)?;

        if self.show_main {
            let mark = if self.toggle_all_checked { "x" } else { " " };
            writeln!(f, "  [{mark}] mark all as complete")?;
            for (n, todo) in self.todos.iter().enumerate() {
                let check = if todo.completed { "x" } else { " " };
                if todo.editing {
                    writeln!(f, "  {:>2}. [{check}] > {}_", n + 1, todo.edit_value)?;
                } else {
                    writeln!(f, "  {:>2}. [{check}] {}", n + 1, todo.title)?;
                }
            }
        }

        if let Some(footer) = &self.footer {
            let links: Vec<String> = footer
                .links
                .iter()
                .map(|link| {
                    if link.selected {
                        format!("[{}]", link.label)
                    } else {
                        link.label.to_string()
                    }
                })
                .collect();
            write!(
                f,
                "{} {} left | {}",
                footer.active_count,
                footer.active_word,
                links.join(" ")
            )?;
            if footer.show_clear_completed {
                write!(f, " | clear completed ({})", footer.completed_count)?;
            }
            writeln!(f)?;
        }

        if let Some(error) = &self.error {
            writeln!(f, "! not saved: {error}")?;
        }
        Ok(())
    }
}
