use maud::{html, Markup, DOCTYPE};

pub fn document(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="icon" href="/favicon.ico";
            }
            body {
                (body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_wraps_body_with_title_and_favicon() {
        let page = document("Image Upload", html! { div { "hi" } }).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Image Upload</title>"));
        assert!(page.contains("<link rel=\"icon\" href=\"/favicon.ico\">"));
        assert!(page.contains("<body><div>hi</div></body>"));
    }

    #[test]
    fn title_is_escaped() {
        let page = document("Pixels & Petals", html! {}).into_string();
        assert!(page.contains("<title>Pixels &amp; Petals</title>"));
    }
}
