//! Dead-reckoning trajectory reconstruction
//!
//! Integrates stride displacement along heading to place every step on the
//! plane. The first displacement already moves the walker away from the
//! implicit origin.

use crate::types::{PositionedStep, RawStepRecord};

/// Parse one `timestamp,displacement,heading,reserved,reserved` line.
///
/// Returns `None` for anything that does not carry five finite numbers.
/// Fields after the fifth are ignored.
pub fn parse_line(line: &str) -> Option<RawStepRecord> {
    let mut fields = line.split(',').map(str::trim);

    let timestamp = fields.next()?.parse::<i64>().ok()?;
    let displacement = parse_finite(fields.next()?)?;
    let heading = parse_finite(fields.next()?)?;
    let reserved_a = parse_finite(fields.next()?)?;
    let reserved_b = parse_finite(fields.next()?)?;

    Some(RawStepRecord {
        timestamp,
        displacement,
        heading,
        reserved: [reserved_a, reserved_b],
    })
}

fn parse_finite(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integrate records into cumulative positions, preserving input order.
pub fn reconstruct(records: &[RawStepRecord]) -> Vec<PositionedStep> {
    let mut cumulative_x = 0.0;
    let mut cumulative_y = 0.0;
    let mut regressions = 0usize;
    let mut last_timestamp: Option<i64> = None;

    let steps: Vec<PositionedStep> = records
        .iter()
        .map(|record| {
            if last_timestamp.is_some_and(|prev| record.timestamp < prev) {
                regressions += 1;
            }
            last_timestamp = Some(record.timestamp);

            cumulative_x += record.displacement * record.heading.cos();
            cumulative_y += record.displacement * record.heading.sin();

            PositionedStep {
                timestamp: record.timestamp,
                displacement: record.displacement,
                heading: record.heading,
                x: cumulative_x,
                y: cumulative_y,
            }
        })
        .collect();

    if regressions > 0 {
        log::warn!(
            "Step log timestamps went backwards {} time(s); keeping log order",
            regressions
        );
    }

    steps
}

/// Parse raw lines, skipping malformed ones, and integrate the rest.
pub fn reconstruct_lines<I, S>(lines: I) -> Vec<PositionedStep>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records: Vec<RawStepRecord> = lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect();
    reconstruct(&records)
}

/// Total distance walked: sum of stride lengths.
pub fn path_length(steps: &[PositionedStep]) -> f64 {
    steps.iter().map(|s| s.displacement).sum()
}

/// Straight-line distance from the origin to the final position.
pub fn net_displacement(steps: &[PositionedStep]) -> f64 {
    steps
        .last()
        .map(|s| (s.x * s.x + s.y * s.y).sqrt())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn record(timestamp: i64, displacement: f64, heading: f64) -> RawStepRecord {
        RawStepRecord {
            timestamp,
            displacement,
            heading,
            reserved: [0.0, 0.0],
        }
    }

    #[test]
    fn test_parse_line() {
        let r = parse_line("1484922605000000000,0.71,1.25,3.5,-2").unwrap();
        assert_eq!(r.timestamp, 1_484_922_605_000_000_000);
        assert_eq!(r.displacement, 0.71);
        assert_eq!(r.heading, 1.25);
        assert_eq!(r.reserved, [3.5, -2.0]);
    }

    #[test]
    fn test_parse_line_tolerates_whitespace_and_extra_fields() {
        let r = parse_line(" 10 , 1.0 ,0.5, 0, 0,99,extra\r").unwrap();
        assert_eq!(r.timestamp, 10);
        assert_eq!(r.heading, 0.5);
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(parse_line("").is_none());
        assert!(parse_line("timestamp,displacement,heading,a,b").is_none());
        assert!(parse_line("0,1.0,0.0,0").is_none());
        assert!(parse_line("0,abc,0.0,0,0").is_none());
        assert!(parse_line("0,NaN,0.0,0,0").is_none());
        assert!(parse_line("0,1.0,inf,0,0").is_none());
        assert!(parse_line("1.5,1.0,0.0,0,0").is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(reconstruct(&[]).is_empty());
        assert!(reconstruct_lines(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_first_step_moves_walker() {
        let steps = reconstruct(&[record(0, 1.0, 0.0)]);
        assert_eq!(steps.len(), 1);
        assert_eq!((steps[0].x, steps[0].y), (1.0, 0.0));
    }

    #[test]
    fn test_quarter_turn() {
        let steps = reconstruct(&[record(0, 1.0, 0.0), record(1, 1.0, FRAC_PI_2)]);
        assert_abs_diff_eq!(steps[1].x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(steps[1].y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reconstruction_is_deterministic() {
        let records: Vec<RawStepRecord> = (0..200)
            .map(|i| record(i * 500_000_000, 0.7 + (i % 3) as f64 * 0.05, i as f64 * 0.13))
            .collect();
        assert_eq!(reconstruct(&records), reconstruct(&records));
    }

    #[test]
    fn test_malformed_line_is_skipped() {
        let lines = [
            "0,1.0,0.0,0,0",
            "1,1.0,0.0,0", // four fields
            "2,1.0,0.0,0,0",
        ];
        let steps = reconstruct_lines(lines);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].timestamp, 0);
        assert_eq!(steps[1].timestamp, 2);
        assert_abs_diff_eq!(steps[1].x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_decreasing_timestamps_keep_order() {
        let steps = reconstruct(&[record(5, 1.0, 0.0), record(3, 1.0, 0.0)]);
        assert_eq!(steps[0].timestamp, 5);
        assert_eq!(steps[1].timestamp, 3);
    }

    #[test]
    fn test_path_metrics() {
        let steps = reconstruct(&[
            record(0, 3.0, 0.0),
            record(1, 4.0, FRAC_PI_2),
            record(2, 1.0, std::f64::consts::PI),
        ]);
        assert_abs_diff_eq!(path_length(&steps), 8.0, epsilon = 1e-12);
        // Ends at (2, 4)
        assert_abs_diff_eq!(net_displacement(&steps), 20f64.sqrt(), epsilon = 1e-9);
        assert_eq!(net_displacement(&[]), 0.0);
    }
}
