//! Flatten HTML answers to terminal text

use scraper::{ElementRef, Html, Node};

/// Tags whose entire subtree should be ignored
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

/// Tags that start a new line
const BLOCK_TAGS: [&str; 12] = [
    "p", "div", "br", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Convert an answer's HTML fragment to plain text.
///
/// Block elements become line breaks, list items get a bullet and links keep
/// their target in parentheses.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    collect(fragment.root_element(), &mut out);
    clean_whitespace(&out)
}

fn collect(element: ElementRef, out: &mut String) {
    let tag = element.value().name();
    if SKIP_TAGS.contains(&tag) {
        return;
    }

    let block = BLOCK_TAGS.contains(&tag);
    if block {
        out.push('\n');
    }
    if tag == "li" {
        out.push_str("- ");
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect(child, out);
                }
            }
            _ => {}
        }
    }

    if tag == "a"
        && let Some(href) = element.value().attr("href")
        && !href.trim().is_empty()
    {
        out.push_str(&format!(" ({})", href.trim()));
    }
    if block {
        out.push('\n');
    }
}

/// Collapse runs of spaces and keep at most one blank line
fn clean_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut blank_run = 0;

    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.is_empty() {
            blank_run += 1;
            if blank_run > 1 || lines.is_empty() {
                continue;
            }
        } else {
            blank_run = 0;
        }
        lines.push(collapsed);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(html_to_text("A CRM stores contacts."), "A CRM stores contacts.");
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let text = html_to_text("<p>First   part.</p><p>Second part.</p>");
        assert_eq!(text, "First part.\n\nSecond part.");
    }

    #[test]
    fn test_links_keep_target() {
        let text = html_to_text(r#"<p>See <a href="/features/crm">our CRM</a>.</p>"#);
        assert_eq!(text, "See our CRM (/features/crm).");
    }

    #[test]
    fn test_list_items_bulleted() {
        let text = html_to_text("<ul><li>Contacts</li><li>Deals</li></ul>");
        assert!(text.contains("- Contacts"));
        assert!(text.contains("- Deals"));
    }

    #[test]
    fn test_scripts_skipped() {
        assert_eq!(html_to_text("<p>Hi</p><script>alert(1)</script>"), "Hi");
    }
}
