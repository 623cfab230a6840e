//! Human-readable rendering of core results.

use sleepsim_core::{
    EnvironmentReport, MetricKind, NightOverview, SleepSufficiencyReport, SleepWindow,
    SummaryStatistics, WindowResult,
};

/// Format a number with up to three decimals, dropping trailing zeros.
pub fn num(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Statistics block for one metric, with the out-of-range verdict.
pub fn summary(kind: MetricKind, stats: &SummaryStatistics) -> String {
    let unit = kind.unit();
    let mut out = format!("Analyzing {kind} levels in your sleeping environment.\n");
    out.push_str(&format!(
        "Mean: {} {unit}, Median: {} {unit}\n",
        num(stats.mean),
        num(stats.median)
    ));
    out.push_str(&format!(
        "IQR: {} {unit}, StdDev: {} {unit}\n",
        num(stats.iqr),
        num(stats.std_dev)
    ));
    out.push_str(&format!(
        "Min: {} {unit}, Max: {} {unit}\n",
        num(stats.min),
        num(stats.max)
    ));

    if stats.is_out_of_range {
        out.push_str(&format!(
            "At minute {}, {kind} levels reached {} {unit}, above the normal range of {}-{} {unit}.\n",
            stats.max_minute,
            num(stats.max),
            num(stats.q1),
            num(stats.q3)
        ));
        out.push_str(&format!("Consider adjusting your {kind} levels for better sleep.\n"));
    } else {
        out.push_str(&format!(
            "{} levels are within the optimal range.\n",
            capitalize(kind.name())
        ));
    }
    out
}

/// Mean/std overview of one simulated night.
pub fn overview(o: &NightOverview) -> String {
    let mut out = format!(
        "---------- Sleep analysis for night {} ----------\n",
        o.night_id
    );
    out.push_str(&format!(
        "You slept {} hours and {} minute(s).\n",
        o.duration.hours, o.duration.minutes
    ));
    for (kind, params) in [
        (MetricKind::Light, o.light),
        (MetricKind::Sound, o.sound),
        (MetricKind::Temperature, o.temperature),
        (MetricKind::Movement, o.movement),
    ] {
        let unit = kind.unit();
        out.push_str(&format!(
            "Mean {kind}: {} {unit}. Standard deviation: {} {unit}.\n",
            num(params.mean),
            num(params.std_dev)
        ));
    }
    out
}

fn window_label(window: SleepWindow) -> &'static str {
    match window {
        SleepWindow::Night => "Last night",
        SleepWindow::Week => "Last week",
        SleepWindow::Month => "Last month",
    }
}

fn window_line(w: &WindowResult, target_hours: u32) -> String {
    let slept = match w.window {
        SleepWindow::Night => "you slept",
        SleepWindow::Week | SleepWindow::Month => "you slept on average",
    };
    let verdict = if w.met {
        format!("You met your target of {target_hours} hours.")
    } else {
        format!("You fell short of your target of {target_hours} hours. Consider going to bed earlier.")
    };
    format!(
        "{}, {slept} {} hours and {} minute(s) ({} night(s)). {verdict}\n",
        window_label(w.window),
        w.hours,
        w.minutes,
        w.nights_counted
    )
}

/// Sleep-sufficiency report for all three windows.
pub fn sufficiency(report: &SleepSufficiencyReport, name: Option<&str>) -> String {
    let mut out = String::from("---------- Am I getting enough sleep? ----------\n");
    if let Some(name) = name {
        out.push_str(&format!(
            "Hi {}. Let's see if you're getting enough sleep.\n",
            capitalize(name)
        ));
    }
    for w in report.windows() {
        out.push_str(&window_line(w, report.target_hours));
    }
    out
}

/// Environment-quality report for one night.
pub fn environment(report: &EnvironmentReport) -> String {
    let mut out = format!(
        "---------- Sleep environment on night {} ----------\n",
        report.night_id
    );
    for (kind, stats) in report.summaries() {
        out.push('\n');
        out.push_str(&summary(kind, stats));
    }
    if !report.any_out_of_range() {
        out.push_str("\nYour sleeping environment is excellent for optimal sleep!\n");
    }
    out
}
