//! Server-rendered board page.

use brain_core::{Board, Item};

/// Alert shown when creating an item fails.
pub const SAVE_FAILED_ALERT: &str = "Erreur lors de la sauvegarde";

const STYLE: &str = r"
body { margin: 0; min-height: 100vh; background: #111827; color: #fff; font-family: system-ui, sans-serif; }
main { max-width: 56rem; margin: 0 auto; padding: 2rem; }
h1 { text-align: center; font-size: 2.25rem; background: linear-gradient(to right, #60a5fa, #a855f7); -webkit-background-clip: text; color: transparent; }
form.capture { display: flex; flex-direction: column; align-items: center; gap: .75rem; margin-bottom: 3rem; }
form.capture input { width: 100%; max-width: 36rem; padding: 1rem; border-radius: .5rem; background: #1f2937; border: 1px solid #374151; color: #fff; font-size: 1.125rem; }
form.capture .buttons { display: flex; gap: 1rem; }
button.todo, button.note { padding: .5rem 1.5rem; border: 0; border-radius: 9999px; color: #fff; font-weight: 500; cursor: pointer; }
button.todo { background: #2563eb; }
button.note { background: #9333ea; }
.alert { max-width: 36rem; margin: 0 auto 1rem; padding: .75rem 1rem; border-radius: .5rem; background: #7f1d1d; }
.columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 2rem; }
section { background: rgba(31, 41, 55, .5); padding: 1.5rem; border-radius: 1rem; border: 1px solid #374151; }
section.actions h2 { color: #60a5fa; }
section.reflections h2 { color: #c084fc; }
.action { display: flex; align-items: flex-start; gap: .75rem; padding: .75rem; margin-bottom: .75rem; background: #1f2937; border-radius: .5rem; }
.action button { width: 1.25rem; height: 1.25rem; margin-top: .25rem; border: 2px solid #6b7280; border-radius: 9999px; background: none; cursor: pointer; }
.reflection { padding: 1rem; margin-bottom: 1rem; background: #1f2937; border-radius: .5rem; border-left: 4px solid #a855f7; }
.reflection .title { font-size: 1.125rem; font-weight: 500; margin: 0 0 .25rem; }
.reflection .content { color: #9ca3af; font-size: .875rem; white-space: pre-wrap; margin: 0; }
.reflection button { margin-top: .5rem; background: none; border: 0; color: #4b5563; font-size: .75rem; cursor: pointer; }
.empty { color: #6b7280; font-size: .875rem; font-style: italic; }
";

/// What the board page shows.
#[derive(Debug)]
pub struct BoardPage<'a> {
    pub board: &'a Board,
    /// Blocking alert raised by the last action, if it failed.
    pub alert: Option<&'a str>,
    /// Text to keep in the input field.
    pub draft: &'a str,
}

impl<'a> BoardPage<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            alert: None,
            draft: "",
        }
    }
}

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Encodes text as a JavaScript string literal safe to inline in a
/// `<script>` element.
fn js_string(text: &str) -> String {
    serde_json::Value::from(text).to_string().replace("</", "<\\/")
}

pub fn render(page: &BoardPage<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Mon Second Cerveau</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<main>\n<h1>Mon Second Cerveau</h1>\n");

    if let Some(alert) = page.alert {
        html.push_str(&format!(
            "<div class=\"alert\" role=\"alert\">{}</div>\n",
            escape_html(alert),
        ));
        html.push_str(&format!("<script>window.alert({});</script>\n", js_string(alert)));
    }

    html.push_str(&render_capture_form(page.draft));
    html.push_str("<div class=\"columns\">\n");
    html.push_str(&render_actions(&page.board.actions));
    html.push_str(&render_reflections(&page.board.reflections));
    html.push_str("</div>\n</main>\n</body>\n</html>\n");

    html
}

// The first submit button is the form's default, so Enter creates a task.
fn render_capture_form(draft: &str) -> String {
    format!(
        "<form class=\"capture\" method=\"post\" action=\"/items\">\n\
         <input type=\"text\" name=\"title\" value=\"{}\" placeholder=\"Qu'as-tu en tête ?\" autofocus>\n\
         <div class=\"buttons\">\n\
         <button class=\"todo\" type=\"submit\" name=\"kind\" value=\"todo\">+ Tâche (Action)</button>\n\
         <button class=\"note\" type=\"submit\" name=\"kind\" value=\"note\">+ Idée (Réflexion)</button>\n\
         </div>\n</form>\n",
        escape_html(draft),
    )
}

fn archive_form(item: &Item, label: &str, title: &str) -> String {
    format!(
        "<form method=\"post\" action=\"/items/{}/archive\"><button type=\"submit\" title=\"{title}\">{label}</button></form>",
        item.id,
    )
}

fn render_actions(actions: &[Item]) -> String {
    let mut html = format!(
        "<section class=\"actions\">\n<h2>⚡ Actions ({})</h2>\n",
        actions.len(),
    );

    for item in actions {
        html.push_str(&format!(
            "<div class=\"action\">{}<p>{}</p></div>\n",
            archive_form(item, "", "Fait"),
            escape_html(&item.title),
        ));
    }
    if actions.is_empty() {
        html.push_str("<p class=\"empty\">Rien à faire... profite !</p>\n");
    }

    html.push_str("</section>\n");
    html
}

fn render_reflections(reflections: &[Item]) -> String {
    let mut html = format!(
        "<section class=\"reflections\">\n<h2>🌱 Jardin de Pensées ({})</h2>\n",
        reflections.len(),
    );

    for item in reflections {
        html.push_str("<div class=\"reflection\">");
        html.push_str(&format!("<p class=\"title\">{}</p>", escape_html(&item.title)));
        if let Some(content) = item.content.as_deref().filter(|c| !c.is_empty()) {
            html.push_str(&format!("<p class=\"content\">{}</p>", escape_html(content)));
        }
        html.push_str(&archive_form(item, "Archiver", "Archiver"));
        html.push_str("</div>\n");
    }
    if reflections.is_empty() {
        html.push_str("<p class=\"empty\">Le jardin est vide.</p>\n");
    }

    html.push_str("</section>\n");
    html
}
