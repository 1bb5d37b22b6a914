use crate::error::ChartResult;
use crate::pipeline::to_local_time;

const DAY_SECONDS: i64 = 86_400;

/// Widest time label the axis can produce, used for margin sizing before the
/// tick step is known.
pub(super) const TIME_LABEL_TEMPLATE: &str = "00-00 00:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TimeLabelPattern {
    Date,
    DateMinute,
}

impl TimeLabelPattern {
    pub(super) fn for_step(step_seconds: i64) -> Self {
        if step_seconds >= DAY_SECONDS {
            Self::Date
        } else {
            Self::DateMinute
        }
    }

    fn format_str(self) -> &'static str {
        match self {
            Self::Date => "%Y-%m-%d",
            Self::DateMinute => "%m-%d %H:%M",
        }
    }
}

pub(super) fn format_time_label(unix_seconds: f64, pattern: TimeLabelPattern) -> ChartResult<String> {
    let time = to_local_time(unix_seconds)?;
    Ok(time.format(pattern.format_str()).to_string())
}

/// Decimal places needed to tell adjacent ticks `step` apart.
pub(super) fn value_label_precision(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    (-step.log10() - 1e-9).ceil().clamp(0.0, 8.0) as usize
}

pub(super) fn format_value_label(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    // "-0.00" reads as noise on an axis.
    if text.starts_with('-') && text[1..].chars().all(|ch| ch == '0' || ch == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}
