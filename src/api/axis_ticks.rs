pub(super) const TIME_TICK_MIN_SPACING_PX: f64 = 96.0;
pub(super) const VALUE_TICK_TARGET_SPACING_PX: f64 = 48.0;
pub(super) const VALUE_TICK_MIN_SPACING_PX: f64 = 20.0;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Calendar-friendly tick steps in seconds, ascending.
const TIME_STEPS: [i64; 17] = [
    MINUTE,
    5 * MINUTE,
    15 * MINUTE,
    30 * MINUTE,
    HOUR,
    2 * HOUR,
    4 * HOUR,
    6 * HOUR,
    12 * HOUR,
    DAY,
    2 * DAY,
    7 * DAY,
    14 * DAY,
    30 * DAY,
    91 * DAY,
    182 * DAY,
    365 * DAY,
];

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Smallest calendar step that keeps the tick count at or below `max_ticks`.
pub(super) fn time_tick_step(span_seconds: f64, max_ticks: usize) -> i64 {
    let max_ticks = max_ticks.max(1) as f64;
    TIME_STEPS
        .iter()
        .copied()
        .find(|step| span_seconds / (*step as f64) <= max_ticks)
        .unwrap_or(TIME_STEPS[TIME_STEPS.len() - 1])
}

/// Tick times in `[start, end]` aligned to multiples of `step` in local time.
///
/// `utc_offset_seconds` shifts the alignment grid so that, for example, daily
/// ticks land on local midnight.
pub(super) fn time_ticks(start: f64, end: f64, step: i64, utc_offset_seconds: i64) -> Vec<f64> {
    if !start.is_finite() || !end.is_finite() || end < start || step <= 0 {
        return Vec::new();
    }

    let step = step as f64;
    let offset = utc_offset_seconds as f64;
    let mut tick = ((start + offset) / step).ceil() * step - offset;
    let mut ticks = Vec::new();
    while tick <= end {
        ticks.push(tick);
        tick += step;
    }
    ticks
}

/// Nice 1/2/5 x 10^n step for a value axis.
pub(super) fn value_tick_step(span: f64, max_ticks: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }

    let raw = span / max_ticks.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

pub(super) fn value_ticks(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !start.is_finite() || !end.is_finite() || end < start || !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }

    let first = (start / step).ceil();
    let last = (end / step).floor();
    if last < first {
        return Vec::new();
    }

    let count = (last - first) as usize + 1;
    (0..count)
        .map(|index| (first + index as f64) * step)
        .collect()
}

/// Keeps ticks whose pixel positions are at least `min_spacing_px` apart.
///
/// Ticks are `(value, pixel)` pairs; the result is sorted by pixel.
pub(super) fn select_ticks_with_min_spacing(
    mut ticks: Vec<(f64, f64)>,
    min_spacing_px: f64,
) -> Vec<(f64, f64)> {
    ticks.sort_by(|left, right| left.1.total_cmp(&right.1));
    if ticks.len() <= 1 || !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return ticks;
    }

    let mut selected: Vec<(f64, f64)> = Vec::with_capacity(ticks.len());
    for tick in ticks {
        match selected.last() {
            Some(last) if tick.1 - last.1 < min_spacing_px => {}
            _ => selected.push(tick),
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::{
        DAY, HOUR, select_ticks_with_min_spacing, time_tick_step, time_ticks, value_tick_step,
        value_ticks,
    };

    #[test]
    fn time_step_grows_with_span() {
        assert_eq!(time_tick_step(6.0 * HOUR as f64, 8), HOUR);
        assert_eq!(time_tick_step(30.0 * DAY as f64, 8), 7 * DAY);
        assert!(time_tick_step(1e12, 8) >= 365 * DAY);
    }

    #[test]
    fn daily_ticks_align_to_local_midnight() {
        let offset = 9 * HOUR;
        let start = 1_700_000_000.0;
        let ticks = time_ticks(start, start + 5.0 * DAY as f64, DAY, offset);

        assert!(!ticks.is_empty());
        for tick in ticks {
            assert!(tick >= start);
            assert_eq!((tick as i64 + offset).rem_euclid(DAY), 0);
        }
    }

    #[test]
    fn value_step_uses_one_two_five_sequence() {
        assert_eq!(value_tick_step(10.0, 10), 1.0);
        assert_eq!(value_tick_step(15.0, 10), 2.0);
        assert_eq!(value_tick_step(40.0, 10), 5.0);
        assert!((value_tick_step(0.9, 10) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn value_ticks_stay_inside_domain() {
        let ticks = value_ticks(99.3, 102.7, 0.5);
        assert_eq!(ticks.first().copied(), Some(99.5));
        assert_eq!(ticks.last().copied(), Some(102.5));
        assert_eq!(ticks.len(), 7);
    }

    #[test]
    fn min_spacing_filter_drops_crowded_ticks() {
        let ticks = vec![(0.0, 0.0), (1.0, 10.0), (2.0, 30.0), (3.0, 35.0), (4.0, 60.0)];
        let selected = select_ticks_with_min_spacing(ticks, 25.0);
        let pixels: Vec<f64> = selected.iter().map(|tick| tick.1).collect();
        assert_eq!(pixels, vec![0.0, 30.0, 60.0]);
    }
}
