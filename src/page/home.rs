use super::Node;
use super::markup::escape_into;

pub const HOME_GREETING: &str = "Hello World!";
pub const TODO_LIST_PATH: &str = "/todo-list";
pub const TODO_LIST_LABEL: &str = "Todo-List";
pub const HOME_CONTAINER_CLASS: &str = "flex min-h-screen flex-col items-center justify-between p-24";

/// The landing page: a greeting followed by a link to the todo list.
pub fn home() -> Node {
    Node::element(
        "main",
        vec![
            Node::text(HOME_GREETING),
            Node::link(TODO_LIST_PATH, TODO_LIST_LABEL),
        ],
    )
    .with_class(HOME_CONTAINER_CLASS)
}

/// Standalone HTML document for the landing page.
///
/// Used by the server when no compiled front-end bundle is available.
pub fn home_document(title: &str) -> String {
    let mut escaped_title = String::new();
    escape_into(title, &mut escaped_title);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\"/>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escaped_title,
        home().to_html()
    )
}
