//! Formatted terminal output.
//!
//! All text rendering lives here so the scoring and generation code stays
//! free of presentation concerns.

use crate::advice::{FactorInsight, ImprovementPotential};
use crate::domain::{Prediction, ScoredRecord};
use crate::report::stats::DatasetStats;
use crate::store::User;
use crate::training::TrainingRun;

/// Full result page for a single prediction.
pub fn format_prediction(
    prediction: &Prediction,
    insights: &[FactorInsight],
    potential: ImprovementPotential,
) -> String {
    let mut out = String::new();
    let level = prediction.credit_level;

    out.push_str("=== nova - Credit Score Prediction ===\n");
    out.push_str(&format!(
        "Score: {} | Level: {} | Grade: {}\n",
        prediction.credit_score,
        level.display_name(),
        level.grade()
    ));
    out.push_str(&format!("Risk: {}\n", level.risk_summary()));
    out.push_str(&format!("Confidence: {:.2}%\n", prediction.confidence));

    let input = &prediction.input;
    out.push_str(&format!(
        "Input: {} | age {} | {} | ${:.2}/mo | {} trips | rating {:.2} | consistency {:.2}\n",
        input.gender,
        input.age,
        input.location,
        input.monthly_earnings,
        input.trip_frequency,
        input.avg_rating,
        input.consistency
    ));

    out.push_str("\nScore breakdown:\n");
    let b = &prediction.breakdown;
    out.push_str(&format!("  {:<16} {:>8.2}\n", "base", b.base));
    for (label, value) in b.factors() {
        out.push_str(&format!("  {label:<16} {value:>+8.2}\n"));
    }
    out.push_str(&format!("  {:<16} {:>+8.2}\n", "jitter", b.jitter));
    out.push_str(&format!("  {:<16} {:>8.2}\n", "raw total", b.raw_total()));

    if !insights.is_empty() {
        out.push_str("\nFactor insights:\n");
        for i in insights {
            out.push_str(
                format!(
                    "  {:<16} {:>10} {:<8} {:<30} {}\n",
                    i.factor,
                    fmt_num(i.value),
                    format!("{:?}", i.assessment).to_lowercase(),
                    i.message,
                    i.target
                )
                .trim_end(),
            );
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "\nImprovement potential: +{} points (projected {})\n",
        potential.points, potential.projected_score
    ));

    out.push_str("\nRecommendations:\n");
    for (idx, rec) in prediction.recommendations.iter().enumerate() {
        out.push_str(&format!("  {}. {rec}\n", idx + 1));
    }

    out
}

/// Dataset overview: totals, means, and per-category counts.
pub fn format_stats(stats: &DatasetStats) -> String {
    let mut out = String::new();

    out.push_str(&format!("Records: {}\n", stats.total));
    out.push_str(&format!(
        "Means: age={:.2} | earnings=${:.2} | rating={:.2}/5.0 | credit_score={:.2}\n",
        stats.mean_age, stats.mean_earnings, stats.mean_rating, stats.mean_credit_score
    ));

    out.push_str("\nGender:\n");
    for (g, n) in &stats.gender_counts {
        out.push_str(&count_line(g.display_name(), *n, stats.total));
    }
    out.push_str("\nLocation:\n");
    for (l, n) in &stats.location_counts {
        out.push_str(&count_line(l.display_name(), *n, stats.total));
    }
    out.push_str("\nAge groups:\n");
    for (g, n) in &stats.age_groups {
        out.push_str(&count_line(g.label(), *n, stats.total));
    }
    out.push_str("\nCredit levels:\n");
    for (lvl, n) in &stats.level_counts {
        out.push_str(&count_line(lvl.band_label(), *n, stats.total));
    }

    out
}

fn count_line(label: &str, n: usize, total: usize) -> String {
    let pct = if total == 0 { 0.0 } else { n as f64 * 100.0 / total as f64 };
    format!("  {label:<20} {n:>8} {pct:>6.1}%\n")
}

/// First `limit` records as a fixed-width table.
pub fn format_records(records: &[ScoredRecord], limit: usize) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<7} {:>4} {:<6} {:>10} {:>6} {:>6} {:>6} {:>6} {:<10}\n",
            "gender", "age", "loc", "earnings", "trips", "rating", "cons", "score", "level"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<7} {:-<4} {:-<6} {:-<10} {:-<6} {:-<6} {:-<6} {:-<6} {:-<10}\n",
            "", "", "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for r in records.iter().take(limit) {
        let f = &r.features;
        out.push_str(
            format!(
                "{:<7} {:>4} {:<6} {:>10.2} {:>6} {:>6.2} {:>6.2} {:>6} {:<10}\n",
                f.gender.display_name(),
                f.age,
                f.location.display_name(),
                f.monthly_earnings,
                f.trip_frequency,
                f.avg_rating,
                f.consistency,
                r.credit_score,
                r.credit_level().display_name()
            )
            .trim_end(),
        );
        out.push('\n');
    }
    if records.len() > limit {
        out.push_str(&format!("... {} more\n", records.len() - limit));
    }

    out
}

/// Model comparison table with the chosen model marked `*`.
pub fn format_training(run: &TrainingRun) -> String {
    let mut out = String::new();

    out.push_str("=== nova - Model Training ===\n");
    out.push_str(
        format!(
            "  {:<24} {:>9} {:>9} {:>9} {:>9} {:>9}\n",
            "model", "accuracy", "precision", "recall", "f1", "time_ms"
        )
        .trim_end(),
    );
    out.push('\n');

    for (idx, r) in run.results.iter().enumerate() {
        let chosen = if idx == run.best { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<24} {:>9.4} {:>9.4} {:>9.4} {:>9.4} {:>9}\n",
            truncate(&r.name, 24),
            r.accuracy,
            r.precision,
            r.recall,
            r.f1_score,
            r.train_time_ms
        ));
    }

    let best = run.best_model();
    out.push_str(&format!(
        "\nBest model: {} (accuracy {:.2}%)\n",
        best.name,
        best.accuracy * 100.0
    ));

    out
}

/// Registered users, newest last.
pub fn format_users(users: &[User], current: Option<&str>) -> String {
    if users.is_empty() {
        return "No registered users.\n".to_string();
    }

    let mut out = String::new();
    for u in users {
        let marker = if current == Some(u.id.as_str()) { "*" } else { " " };
        out.push_str(
            format!(
                "{marker} {:<16} {:<24} {:<32} {}\n",
                u.id,
                truncate(&u.name, 24),
                truncate(&u.email, 32),
                u.created_at.format("%Y-%m-%d %H:%M")
            )
            .trim_end(),
        );
        out.push('\n');
    }
    out
}

fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v:.2}") }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
