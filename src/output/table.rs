use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::analyze::SentimentSummary;
use crate::pipeline::{AnalyzeReport, CollectReport};
use crate::sentiment::ScoreTuple;
use crate::store::models::CollectionStats;

const RULE_WIDTH: usize = 70;

/// Truncate a string to fit within max_width (respecting unicode width).
fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + cw + 3 > max_width {
            result.push_str("...");
            break;
        }
        result.push(ch);
        width += cw;
    }
    result
}

/// Format an optional average with fixed precision; undefined shows as "n/a".
pub fn format_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => "n/a".to_string(),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Print the outcome of `ytc collect`.
pub fn print_collect_report(report: &CollectReport) {
    if let Some(ref channel) = report.target.channel {
        println!("Channel: {} ({})", truncate(&channel.title, 50), channel.id);
        if report.target.candidates.len() > 1 {
            println!("  other matches:");
            for c in report.target.candidates.iter().skip(1) {
                println!("    {} ({})", truncate(&c.title, 46), c.id);
            }
        }
    }
    let video = &report.target.video;
    if video.title.is_empty() {
        println!("Video:   {}", video.id);
    } else {
        println!("Video:   {} ({})", truncate(&video.title, 50), video.id);
    }
    println!(
        "Fetched {} page{} in {:.1}s",
        report.pages,
        plural(report.pages),
        report.duration_secs
    );

    if let Some(ref err) = report.error {
        println!("\nWARNING: collection incomplete, results are partial.");
        println!("  reason: {}", truncate(err, RULE_WIDTH - 10));
    }

    match report.output {
        Some(ref path) => println!("Exported to {}", path.display()),
        None => {
            println!("\nNo comments retrieved; nothing exported.");
            return;
        }
    }

    print_collection_stats(&report.stats);
}

/// Summary statistics for a freshly collected comment set.
pub fn print_collection_stats(stats: &CollectionStats) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("SUMMARY STATISTICS");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Total Comments: {}", stats.total_comments);
    println!("Total Likes: {}", stats.total_likes);
    println!("Total Replies: {}", stats.total_replies);
    println!("Average Likes per Comment: {}", format_opt(stats.average_likes, 2));
    if let Some(ref top) = stats.most_liked {
        println!("Most Liked Comment: {} likes", top.likes);
        println!("  By: {}", top.author_name);
        println!("  Text: {}", top.preview.replace('\n', " "));
    }
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print the outcome of `ytc analyze`.
pub fn print_analyze_report(report: &AnalyzeReport) {
    println!(
        "Loaded {} comment{} from {}",
        report.loaded,
        plural(report.loaded),
        report.input.display()
    );
    if report.skipped_rows > 0 {
        println!("  ({} unreadable row{} skipped)", report.skipped_rows, plural(report.skipped_rows));
    }

    match (&report.output, &report.summary) {
        (Some(path), Some(summary)) => {
            println!("Exported to {}", path.display());
            print_sentiment_summary(summary);
        }
        _ => println!("\nNo comments to analyze; nothing exported."),
    }
}

/// Distribution table for a scored comment set.
pub fn print_sentiment_summary(summary: &SentimentSummary) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("SENTIMENT ANALYSIS SUMMARY");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Total Comments Analyzed: {}", summary.total_count);
    println!("Total Likes: {}", summary.total_likes);
    println!("Total Replies: {}", summary.total_replies);
    println!(
        "Average Compound Sentiment Score: {}",
        format_opt(summary.average_compound, 4)
    );
    println!();
    println!("SENTIMENT DISTRIBUTION:");
    println!("{}", "-".repeat(RULE_WIDTH));
    for cat in &summary.categories {
        println!(
            "{:<12} | Count: {:>5} ({:>6}%) | Avg Likes: {:>6} | Avg Replies: {:>6}",
            cat.sentiment.as_str(),
            cat.count,
            format_opt(cat.percentage, 2),
            format_opt(cat.average_likes, 2),
            format_opt(cat.average_replies, 2),
        );
    }
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Print the scores for a single piece of text (`ytc score`).
pub fn print_score(text: &str, scores: &ScoreTuple) {
    println!("Text:      {}", truncate(&text.replace('\n', " "), RULE_WIDTH - 11));
    println!("Sentiment: {}", scores.sentiment());
    println!("  compound: {:>7.4}", scores.compound);
    println!("  positive: {:>7.4}", scores.positive);
    println!("  negative: {:>7.4}", scores.negative);
    println!("  neutral:  {:>7.4}", scores.neutral);
}
