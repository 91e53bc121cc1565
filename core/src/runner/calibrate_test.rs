#[cfg(test)]
mod tests {
    use crate::runner::calibrate::{BenchTarget, CalibrationConfig, next_iterations};
    use std::time::Duration;

    fn config_for(target: BenchTarget) -> CalibrationConfig {
        CalibrationConfig {
            target,
            ..CalibrationConfig::default()
        }
    }

    #[test]
    fn test_parse_bench_target_durations() {
        assert_eq!(
            "1s".parse::<BenchTarget>().unwrap(),
            BenchTarget::Duration(Duration::from_secs(1))
        );
        assert_eq!(
            "250ms".parse::<BenchTarget>().unwrap(),
            BenchTarget::Duration(Duration::from_millis(250))
        );
        assert_eq!(
            "1.5s".parse::<BenchTarget>().unwrap(),
            BenchTarget::Duration(Duration::from_millis(1500))
        );
        assert_eq!(
            "2m".parse::<BenchTarget>().unwrap(),
            BenchTarget::Duration(Duration::from_secs(120))
        );
    }

    #[test]
    fn test_parse_bench_target_iterations() {
        assert_eq!("500x".parse::<BenchTarget>().unwrap(), BenchTarget::Iterations(500));
        assert!("0x".parse::<BenchTarget>().is_err());
        assert!("tenx".parse::<BenchTarget>().is_err());
    }

    #[test]
    fn test_parse_bench_target_rejects_missing_or_unknown_unit() {
        let err = "100".parse::<BenchTarget>().unwrap_err();
        assert!(err.to_string().contains("missing unit"));
        let err = "3d".parse::<BenchTarget>().unwrap_err();
        assert!(err.to_string().contains("unknown unit"));
    }

    #[test]
    fn test_display_round_trips_iterations() {
        assert_eq!(BenchTarget::Iterations(42).to_string(), "42x");
    }

    #[test]
    fn test_fast_first_run_grows_by_at_most_max_growth() {
        let config = CalibrationConfig::default();
        assert_eq!(next_iterations(1, Duration::from_micros(1), &config), Some(100));
        assert_eq!(next_iterations(100, Duration::from_micros(100), &config), Some(10_000));
    }

    #[test]
    fn test_prediction_is_inflated_by_growth_factor() {
        let config = config_for(BenchTarget::Duration(Duration::from_secs(1)));
        // 10_000 iterations in 100ms predicts 100_000 for 1s, plus 20%.
        assert_eq!(
            next_iterations(10_000, Duration::from_millis(100), &config),
            Some(120_000)
        );
    }

    #[test]
    fn test_slow_run_still_advances_by_one() {
        let config = CalibrationConfig::default();
        assert_eq!(next_iterations(1, Duration::from_millis(600), &config), Some(2));
    }

    #[test]
    fn test_stops_once_target_reached() {
        let config = CalibrationConfig::default();
        assert_eq!(next_iterations(1_000, Duration::from_secs(1), &config), None);
        assert_eq!(next_iterations(1_000, Duration::from_secs(3), &config), None);
    }

    #[test]
    fn test_respects_max_iterations() {
        let config = CalibrationConfig {
            max_iterations: 5_000,
            ..CalibrationConfig::default()
        };
        assert_eq!(next_iterations(100, Duration::from_micros(1), &config), Some(5_000));
        assert_eq!(next_iterations(5_000, Duration::from_micros(1), &config), None);
    }

    #[test]
    fn test_zero_elapsed_does_not_divide_by_zero() {
        let config = CalibrationConfig::default();
        assert_eq!(next_iterations(1, Duration::ZERO, &config), Some(100));
    }

    #[test]
    fn test_fixed_iterations_never_recalibrate() {
        let config = config_for(BenchTarget::Iterations(300));
        assert_eq!(config.initial_iterations(), 300);
        assert_eq!(next_iterations(300, Duration::from_nanos(1), &config), None);
    }

    #[test]
    fn test_validate_rejects_shrinking_growth() {
        let config = CalibrationConfig {
            growth_factor: 0.5,
            ..CalibrationConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(CalibrationConfig::default().validate().is_ok());
    }
}
