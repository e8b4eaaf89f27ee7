/// Render the page that shows the saved string
///
/// `<`, `>` and `&` in the value are escaped before it is embedded, so markup
/// stored in the parameter is displayed as text.
pub fn render(value: &str) -> String {
    format!(
        r#"
<html>
    <head>
        <title>Dynamic String Page</title>
    </head>
    <body>
        <h1>The saved string is {}</h1>
    </body>
</html>
"#,
        escape_html(value)
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
