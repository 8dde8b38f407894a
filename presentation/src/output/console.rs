//! Console output formatter for workflow results

use crate::output::formatter::OutputFormatter;
use crate::output::html::html_to_text;
use colored::Colorize;
use faqsmith_domain::{
    CmsPage, FaqEntry, IssueKind, KeywordIndex, RelatedLink, WorkflowState,
};
use serde::Serialize;

/// Formats workflow results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every section of a finished run
    pub fn format(state: &WorkflowState) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("FAQ Generation Results"));
        output.push('\n');

        if let Some(source) = &state.source {
            output.push_str(&format!(
                "{} {}\n",
                "Source:".cyan().bold(),
                source.identity()
            ));
        }
        if state.has_keywords() {
            output.push_str(&format!(
                "{} {}\n",
                "Keyword:".cyan().bold(),
                state.keywords.primary()
            ));
            if state.keywords.all().len() > 1 {
                output.push_str(&format!(
                    "{} {}\n",
                    "All keywords:".cyan().bold(),
                    state.keywords.all().join(", ")
                ));
            }
        }
        output.push_str(&format!(
            "{} {}\n",
            "Stage:".cyan().bold(),
            state.stage.display_name()
        ));

        if let Some(issue) = &state.error {
            let label = match issue.kind {
                IssueKind::NotFound => "Not found:".yellow().bold(),
                IssueKind::BlockingInput | IssueKind::Upstream => "Error:".red().bold(),
            };
            output.push_str(&format!("\n{} {}\n", label, issue.message));
        }

        if !state.questions.is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Questions ({})",
                state.questions.len()
            )));
            for question in &state.questions {
                output.push_str(&format!("  * {}\n", question));
            }
        }

        if !state.content_faqs.is_empty() {
            output.push_str(&Self::section_header(&format!(
                "Content FAQs ({})",
                state.content_faqs.len()
            )));
            for (i, (faq, rephrased)) in state.content_with_rephrasings().into_iter().enumerate() {
                output.push_str(&Self::entry(i + 1, faq));
                if let Some(rephrased) = rephrased {
                    for (label, version) in [
                        ("Version 1", rephrased.version_1()),
                        ("Version 2", rephrased.version_2()),
                    ] {
                        if let Some(version) = version {
                            output.push_str(&format!(
                                "   {}\n{}\n{}\n",
                                format!("── {} ──", label).dimmed(),
                                Self::indent(&format!("Q: {}", version.question), "     "),
                                Self::indent(&format!("A: {}", html_to_text(&version.answer)), "     "),
                            ));
                        }
                    }
                }
            }
        }

        if !state.paa_faqs.is_empty() {
            output.push_str(&Self::section_header(&format!(
                "PAA FAQs ({})",
                state.paa_faqs.len()
            )));
            for (i, faq) in state.paa_faqs.iter().enumerate() {
                output.push_str(&Self::entry(i + 1, faq));
            }
        }

        if !state.status.is_empty() {
            output.push_str(&format!("\n{}\n", state.status.green()));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format the final state as JSON
    pub fn format_json(state: &WorkflowState) -> String {
        Self::to_json(state)
    }

    /// Pretty JSON for any serializable result (page listings, links)
    pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Copy-ready `Q:`/`A:` blocks, answers flattened from HTML
    pub fn format_plain(state: &WorkflowState) -> String {
        state
            .content_faqs
            .iter()
            .chain(state.paa_faqs.iter())
            .map(Self::copy_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Copy text of a single entry with its answer flattened
    pub fn copy_text(faq: &FaqEntry) -> String {
        FaqEntry::new(faq.question.as_str(), html_to_text(&faq.answer)).copy_text()
    }

    /// One line per page of a collection listing
    pub fn format_pages(pages: &[CmsPage]) -> String {
        if pages.is_empty() {
            return format!("{}\n", "No pages found.".dimmed());
        }
        let mut output = String::new();
        for page in pages {
            let mut line = format!("{:>8}  {}", page.id_string().yellow(), page.label());
            if let Some(collection) = &page.source_collection {
                line.push_str(&format!("  {}", format!("[{}]", collection).dimmed()));
            }
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    pub fn format_links(keyword: &str, links: &[RelatedLink]) -> String {
        if links.is_empty() {
            return format!("{} \"{}\"\n", "No related links for".dimmed(), keyword);
        }
        let mut output = format!("{} \"{}\"\n", "Related links for".cyan().bold(), keyword);
        for link in links {
            let title = if link.title.is_empty() {
                link.url.as_str()
            } else {
                link.title.as_str()
            };
            output.push_str(&format!("  * {} ({})\n", title, link.url.dimmed()));
        }
        output
    }

    /// Summary of a keyword index refresh
    pub fn format_index_refresh(index: Option<&KeywordIndex>) -> String {
        match index {
            Some(index) if !index.is_empty() => {
                let categories: Vec<&str> = index.categories().collect();
                format!(
                    "{} {} categories ({})\n",
                    "Keyword index refreshed:".green().bold(),
                    categories.len(),
                    categories.join(", ")
                )
            }
            _ => format!("{}\n", "The CMS returned no keyword index.".yellow()),
        }
    }

    fn entry(number: usize, faq: &FaqEntry) -> String {
        let marker = if faq.has_interlink {
            format!(" {}", "[linked]".green())
        } else {
            String::new()
        };
        format!(
            "\n{}{}\n{}\n",
            format!("{}. {}", number, faq.question).yellow().bold(),
            marker,
            Self::indent(&html_to_text(&faq.answer), "   ")
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, state: &WorkflowState) -> String {
        Self::format(state)
    }

    fn format_json(&self, state: &WorkflowState) -> String {
        Self::format_json(state)
    }

    fn format_plain(&self, state: &WorkflowState) -> String {
        Self::format_plain(state)
    }
}
