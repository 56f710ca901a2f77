//! HTML pages served by the web handlers.

use crate::users::repo_types::User;

pub const HOMEPAGE_HTML: &str = include_str!("../templates/homepage.html");
pub const REGISTER_FORM_HTML: &str = include_str!("../templates/register_form.html");
const USER_LIST_HTML: &str = include_str!("../templates/user_list.html");

pub fn user_list(users: &[User]) -> String {
    let items = users
        .iter()
        .map(|user| match &user.email {
            Some(email) => format!("    <li>{} {}</li>\n", user.user_id, escape(email)),
            None => format!("    <li>{}</li>\n", user.user_id),
        })
        .collect::<String>();
    USER_LIST_HTML.replace("{{users}}", items.trim_end())
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
