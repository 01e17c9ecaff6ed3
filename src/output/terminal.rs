// Colored terminal output for reports, classifications and the dictionary.
//
// This module handles all terminal-specific formatting: colors, tables,
// summaries. The main.rs commands delegate here. Column labels follow the
// newsroom's Spanish vocabulary.

use colored::Colorize;

use crate::classify::{Style, TitleClassification, Tone};
use crate::entities::EntityDictionary;
use crate::report::ArticleReport;
use crate::traffic::RowRejection;

/// Display the ranked report table (first `limit` rows of `rows`).
///
/// `total` is the size of the unfiltered report, shown for context when a
/// keyword narrowed the view.
pub fn display_report(rows: &[&ArticleReport], limit: usize, total: usize, keyword: Option<&str>) {
    if rows.is_empty() {
        match keyword {
            Some(k) => println!("No titles contain the word \"{k}\"."),
            None => println!("The report is empty. Check that the totals file has rows."),
        }
        return;
    }

    let heading = match keyword {
        Some(k) => format!(
            "=== Notas con \"{k}\" ordenadas por lecturas totales ({} de {}) ===",
            rows.len(),
            total
        ),
        None => format!("=== Notas ordenadas por lecturas totales ({total}) ==="),
    };
    println!("\n{}", heading.bold());
    println!();

    // Header
    println!(
        "  {:>4}  {:<60} {:>5} {:>10}  {:<20} {:>7}  {:<13} {:<11}",
        "#".dimmed(),
        "Título".dimmed(),
        "Long.".dimmed(),
        "Pageviews".dimmed(),
        "Fuente principal".dimmed(),
        "%".dimmed(),
        "Tono".dimmed(),
        "Estilo".dimmed(),
    );
    println!("  {}", "-".repeat(142).dimmed());

    for (i, row) in rows.iter().take(limit).enumerate() {
        let source = row.dominant_source.as_deref().unwrap_or("-");
        let share = row
            .dominant_source_share
            .map(|s| format!("{s:.2}"))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:>4}. {:<60} {:>5} {:>10}  {:<20} {:>7}  {:<13} {:<11}",
            i + 1,
            super::truncate_chars(&row.title, 57),
            row.title_length,
            row.total_pageviews,
            super::truncate_chars(source, 20),
            share,
            colorize_tone(row.tone),
            colorize_style(row.style),
        );
    }

    if rows.len() > limit {
        println!(
            "\n  {}",
            format!("... {} more rows (use --limit or --export to see them)", rows.len() - limit)
                .dimmed()
        );
    }
}

/// Display tone, style and content counts over the given rows.
pub fn display_summary(rows: &[&ArticleReport]) {
    if rows.is_empty() {
        return;
    }

    println!("\n{}", "=== Summary ===".bold());
    println!(
        "  Tone:   {} interrogative  {} exclamatory  {} neutral",
        count(rows, |r| r.tone == Tone::Interrogative),
        count(rows, |r| r.tone == Tone::Exclamatory),
        count(rows, |r| r.tone == Tone::Neutral),
    );
    println!(
        "  Style:  {} narrative  {} declarative  {} descriptive",
        count(rows, |r| r.style == Style::Narrative),
        count(rows, |r| r.style == Style::Declarative),
        count(rows, |r| r.style == Style::Descriptive),
    );
    println!(
        "  Titles with quotes: {}  with numbers: {}  with entities: {}  without a source: {}",
        count(rows, |r| r.has_quote),
        count(rows, |r| r.has_numbers),
        count(rows, |r| r.entity_count > 0),
        count(rows, |r| r.dominant_source.is_none()),
    );
}

/// Report input rows that were skipped because of malformed values.
pub fn display_rejections(rejected: &[RowRejection]) {
    if rejected.is_empty() {
        return;
    }

    println!(
        "\n  {} {} input rows were rejected:",
        "Warning:".yellow(),
        rejected.len()
    );
    for rejection in rejected.iter().take(10) {
        println!("    {}", rejection.to_string().dimmed());
    }
    if rejected.len() > 10 {
        println!("    {}", format!("... and {} more", rejected.len() - 10).dimmed());
    }
}

/// Display every classifier output for a single title.
pub fn display_classification(title: &str, classification: &TitleClassification) {
    println!("\n{}", format!("=== {} ===", super::truncate_chars(title, 100)).bold());

    let entities = if classification.entities.is_empty() {
        "none".dimmed().to_string()
    } else {
        classification.entities.join(", ")
    };
    println!("  Entities ({}): {}", classification.entities.len(), entities);
    println!("  Entity position: {}", classification.entity_position);
    println!("  Tone: {}", colorize_tone(classification.tone));
    println!("  Style: {}", colorize_style(classification.style));
    println!("  Quote: {}", if classification.has_quote { "yes" } else { "no" });
    println!(
        "  Numbers: {} (format: {}, count: {})",
        if classification.numeric.has_numbers { "yes" } else { "no" },
        classification.numeric.format,
        classification.numeric.count
    );
}

/// List the effective entity dictionary, one tier at a time.
pub fn display_dictionary(dictionary: &EntityDictionary) {
    println!(
        "\n{}",
        format!("=== Entity dictionary ({} entries) ===", dictionary.len()).bold()
    );

    println!("\n  {} {}", "Exact tokens".bold(), "(case-sensitive)".dimmed());
    for chunk in dictionary.token_entries().chunks(10) {
        println!("    {}", chunk.join("  "));
    }

    println!(
        "\n  {} {}",
        "Phrases".bold(),
        "(case-insensitive, anywhere in the title)".dimmed()
    );
    for phrase in dictionary.phrase_entries() {
        println!("    {phrase}");
    }
}

fn colorize_tone(tone: Tone) -> colored::ColoredString {
    let label = tone.as_str();
    match tone {
        Tone::Interrogative => label.bright_blue(),
        Tone::Exclamatory => label.bright_red(),
        Tone::Neutral => label.normal(),
    }
}

fn colorize_style(style: Style) -> colored::ColoredString {
    let label = style.as_str();
    match style {
        Style::Narrative => label.green(),
        Style::Declarative => label.yellow(),
        Style::Descriptive => label.dimmed(),
    }
}

fn count(rows: &[&ArticleReport], pred: impl Fn(&ArticleReport) -> bool) -> usize {
    rows.iter().filter(|r| pred(**r)).count()
}
