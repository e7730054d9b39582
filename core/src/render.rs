//! Output for each render branch.
//!
//! `Html` and `Text` wrap a `Branch` and implement `Display`. The row,
//! filter, loader and home-link pieces stand in for the view's collaborators
//! and are deliberately plain. User text is written through
//! `html_escaper::Escape` in the HTML output.

use std::fmt::{self, Display, Formatter};

use html_escaper::Escape;

use crate::types::Todo;
use crate::view::{Branch, Route};

pub const HEADING: &str = "Lista de TODOs";
pub const EMPTY_MESSAGE: &str = "No hay tareas registradas.";
pub const HOME_LABEL: &str = "Volver a inicio";
pub const LOADING_LABEL: &str = "Cargando...";

/// HTML rendering of a branch.
pub struct Html<'a>(pub Branch<'a>);

/// Terminal rendering of a branch.
pub struct Text<'a>(pub Branch<'a>);

pub fn render_html(branch: Branch<'_>) -> String {
    Html(branch).to_string()
}

pub fn render_text(branch: Branch<'_>) -> String {
    Text(branch).to_string()
}

impl Display for Html<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Branch::Loading => write!(f, r#"<div class="loader">{LOADING_LABEL}</div>"#),
            Branch::Error(message) => {
                f.write_str(r#"<p style="color: red">"#)?;
                message.escape(f, false)?;
                f.write_str("</p>")
            }
            Branch::Empty => {
                html_open(f)?;
                write!(f, "<p>{EMPTY_MESSAGE}</p>")?;
                html_close(f)
            }
            Branch::Populated(todos) => {
                html_open(f)?;
                f.write_str("<ul>")?;
                for todo in todos {
                    html_row(f, todo)?;
                }
                f.write_str("</ul>")?;
                html_close(f)
            }
        }
    }
}

fn html_open(f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, r#"<div class="container"><h1>{HEADING}</h1>"#)?;
    f.write_str(r#"<div class="filters"></div>"#)
}

fn html_close(f: &mut Formatter<'_>) -> fmt::Result {
    write!(
        f,
        r#"<a href="{}"><button style="margin-top: 20px">{HOME_LABEL}</button></a></div>"#,
        Route::Home.path()
    )
}

fn html_row(f: &mut Formatter<'_>, todo: &Todo) -> fmt::Result {
    let checked = if todo.completed { " checked" } else { "" };
    let class = if todo.completed { "todo completed" } else { "todo" };
    write!(
        f,
        r#"<li class="{class}" data-id="{id}"><input type="checkbox" data-action="toggle"{checked}><span>"#,
        id = todo.id,
    )?;
    todo.title.escape(f, false)?;
    f.write_str(r#"</span><button data-action="delete">Eliminar</button></li>"#)
}

impl Display for Text<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Branch::Loading => writeln!(f, "{LOADING_LABEL}"),
            Branch::Error(message) => writeln!(f, "error: {message}"),
            Branch::Empty => {
                writeln!(f, "{HEADING}")?;
                writeln!(f, "{EMPTY_MESSAGE}")?;
                writeln!(f, "[{HOME_LABEL}]")
            }
            Branch::Populated(todos) => {
                writeln!(f, "{HEADING}")?;
                for todo in todos {
                    let mark = if todo.completed { 'x' } else { ' ' };
                    writeln!(f, "[{mark}] {:>4}  {}", todo.id, todo.title)?;
                }
                writeln!(f, "[{HOME_LABEL}]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_renders_loader_only() {
        let html = render_html(Branch::Loading);
        assert_eq!(html, r#"<div class="loader">Cargando...</div>"#);
        assert!(!html.contains(HEADING));
    }

    #[test]
    fn error_renders_red_paragraph() {
        let html = render_html(Branch::Error("Error al cargar los TODOs"));
        assert_eq!(html, r#"<p style="color: red">Error al cargar los TODOs</p>"#);
    }

    #[test]
    fn empty_renders_message_filters_and_home_link() {
        let html = render_html(Branch::Empty);
        assert!(html.contains("<h1>Lista de TODOs</h1>"));
        assert!(html.contains(r#"<div class="filters"></div>"#));
        assert!(html.contains("<p>No hay tareas registradas.</p>"));
        assert!(html.contains(r#"<a href="/">"#));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn populated_renders_one_row_per_item() {
        let todos = vec![Todo::new(1, "A", false), Todo::new(2, "B", true)];
        let html = render_html(Branch::Populated(&todos));
        assert_eq!(html.matches("<li ").count(), 2);
        assert!(html.contains(r#"data-id="1""#));
        assert!(html.contains(r#"<li class="todo completed" data-id="2"><input type="checkbox" data-action="toggle" checked>"#));
        assert!(!html.contains(EMPTY_MESSAGE));
        let filters = html.find("filters").unwrap();
        let list = html.find("<ul>").unwrap();
        let home = html.find(HOME_LABEL).unwrap();
        assert!(filters < list && list < home);
    }

    #[test]
    fn titles_and_errors_are_escaped() {
        let todos = vec![Todo::new(1, "<script>alert(1)</script>", false)];
        let html = render_html(Branch::Populated(&todos));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let html = render_html(Branch::Error("a < b"));
        assert_eq!(html, r#"<p style="color: red">a &lt; b</p>"#);
    }

    #[test]
    fn escaped_row_keeps_surrounding_markup() {
        let todos = vec![Todo::new(4, "Tom & Jerry", false)];
        let html = render_html(Branch::Populated(&todos));
        assert!(html.contains(
            r#"<li class="todo" data-id="4"><input type="checkbox" data-action="toggle"><span>Tom &amp; Jerry</span><button data-action="delete">Eliminar</button></li>"#
        ));
    }

    #[test]
    fn text_rendering() {
        let todos = vec![Todo::new(1, "A", false), Todo::new(12, "B", true)];
        let text = render_text(Branch::Populated(&todos));
        assert_eq!(
            text,
            "Lista de TODOs\n[ ]    1  A\n[x]   12  B\n[Volver a inicio]\n"
        );
        assert_eq!(
            render_text(Branch::Error("boom")),
            "error: boom\n"
        );
        assert!(render_text(Branch::Empty).contains(EMPTY_MESSAGE));
    }
}
