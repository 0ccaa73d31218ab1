//! Display functions for command results

use super::formatters::{score_marker, summary_bar, truncate};
use crate::commands::{GenerateResult, SelectionChange, SoundsOverview, StatsResult};
use crate::core::{SoundCategory, WordScore};
use crate::form::FormState;
use crate::session::{SessionState, WordListEntry};
use colored::{ColoredString, Colorize};

fn heading(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn colored_score(score: WordScore) -> ColoredString {
    let text = format!("{} {}", score_marker(score), score.label());
    match score {
        WordScore::Correct => text.green(),
        WordScore::Incorrect => text.red(),
        WordScore::Skipped => text.yellow(),
        WordScore::NotScored => text.dimmed(),
    }
}

/// Print the inventory with selected sounds highlighted
pub fn print_sounds(overview: &SoundsOverview) {
    heading("SOUND INVENTORY");

    let mut current: Option<SoundCategory> = None;
    for group in &overview.listings {
        if current != Some(group.group.category) {
            current = Some(group.group.category);
            println!(
                "\n{}",
                group.group.category.label().to_uppercase().bright_yellow().bold()
            );
        }

        let sounds: Vec<String> = group
            .iter()
            .map(|(sound, selected)| {
                let text = format!("{} ({})", sound.symbol(), sound.spellings().join(","));
                if selected {
                    text.green().bold().to_string()
                } else {
                    text.dimmed().to_string()
                }
            })
            .collect();
        println!("  {:<12} {}", group.group.name, sounds.join("  "));
    }
    println!("\n{} = selected", "green".green().bold());

    let unselected: Vec<String> = overview
        .unselected
        .iter()
        .map(|(category, sounds)| format!("{} {}", sounds.len(), category.label()))
        .collect();
    println!("{} {}", "Unselected:".dimmed(), unselected.join(", "));
}

/// Print which symbols a select/deselect command changed
pub fn print_selection_change(verb: &str, change: &SelectionChange) {
    if !change.changed.is_empty() {
        println!("{} {}", verb.green().bold(), change.changed.join(" "));
    }
    if !change.unchanged.is_empty() {
        println!("{} {}", "Unchanged:".dimmed(), change.unchanged.join(" "));
    }
}

/// Print the current generation settings
pub fn print_form(form: &FormState) {
    let symbols = |category: SoundCategory| -> String {
        let list: Vec<&str> = form.of_category(category).map(|s| s.symbol()).collect();
        if list.is_empty() {
            "-".to_string()
        } else {
            list.join(" ")
        }
    };

    let pattern = if form.pattern.is_empty() {
        "-".to_string()
    } else {
        form.pattern.to_string()
    };

    println!("   Pattern:     {}", pattern.bright_yellow().bold());
    println!("   Quantity:    {}", form.quantity);
    println!("   Consonants:  {}", symbols(SoundCategory::Consonant));
    println!("   Vowels:      {}", symbols(SoundCategory::Vowel));
    println!("   Diphthongs:  {}", symbols(SoundCategory::Diphthong));
}

/// Print the result of a generation run
pub fn print_generation_result(result: &GenerateResult) {
    heading("GENERATED WORDS");

    println!(
        "\nPattern {} | requested {} | seed {}",
        result.request.pattern.to_string().bright_yellow().bold(),
        result.request.quantity,
        result
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );

    if result.outcome.words.is_empty() {
        println!(
            "\n{}",
            "No words generated. Select consonants and vowels and set a pattern and quantity."
                .yellow()
        );
        return;
    }

    println!();
    for (i, word) in result.outcome.words.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, word.to_string().bright_white());
    }

    println!();
    if result.outcome.duplicates_removed > 0 {
        println!(
            "{}",
            format!("{} duplicate(s) removed", result.outcome.duplicates_removed).dimmed()
        );
    }
    if result.outcome.complete {
        println!(
            "{}",
            format!("✅ {} words ready for scoring", result.outcome.words.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "⚠ Only {} words fit the restrictions ({} rejected)",
                result.outcome.words.len(),
                result.outcome.failed_words
            )
            .yellow()
            .bold()
        );
    }
}

fn entry_line(index: usize, entry: &WordListEntry) -> String {
    let notes = if entry.notes.is_empty() {
        String::new()
    } else {
        format!("  \"{}\"", truncate(&entry.notes, 40))
    };
    format!(
        "  {:>3}  {:<12} {:<12} {:<16} {:<12}{}",
        index,
        entry.rendered_spelling().bright_white().bold(),
        format!("/{}/", entry.phonetic()),
        colored_score(entry.score),
        entry.cue_score.label(),
        notes.dimmed()
    )
}

/// Print one entry, e.g. after an update
pub fn print_entry(index: usize, entry: &WordListEntry) {
    println!("{}", entry_line(index, entry));
}

/// Print every entry of the session
pub fn print_word_list(words: &SessionState) {
    heading("WORD LIST");

    if words.is_empty() {
        println!("\n{}", "No words yet. Run `generate` or `add`.".yellow());
    } else {
        println!(
            "\n  {:>3}  {:<12} {:<12} {:<16} {:<12}{}",
            "#".dimmed(),
            "Spelling".dimmed(),
            "Sounds".dimmed(),
            "Score".dimmed(),
            "Cue".dimmed(),
            "  Notes".dimmed()
        );
        for (i, entry) in words.entries().iter().enumerate() {
            print_entry(i, entry);
        }
    }

    if !words.notes().is_empty() {
        println!("\n{} {}", "Session notes:".bright_cyan(), words.notes());
    }
}

/// Print session statistics
pub fn print_stats(stats: &StatsResult) {
    heading("SESSION STATISTICS");

    println!("\n📊 {}", "Scores:".bright_cyan().bold());
    for score in WordScore::ALL {
        println!("   {:<18} {}", colored_score(score), stats.counts.get(score));
    }
    println!("   {:<18} {}", "Total", stats.counts.total());

    println!(
        "\n   Accuracy:    [{}] {}",
        summary_bar(&stats.accuracy, 30).green(),
        stats.accuracy.to_string().bright_yellow()
    );
    println!(
        "   Completion:  [{}] {}",
        summary_bar(&stats.completion, 30).cyan(),
        stats.completion.to_string().bright_yellow()
    );
}
