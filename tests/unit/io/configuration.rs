//! Tests for configuration defaults and validation

#[cfg(test)]
mod tests {
    use floodbench::SimulationError;
    use floodbench::io::configuration::{
        DEFAULT_COLS, DEFAULT_ROWS, MAX_GRID_DIMENSION, STACK_GUARD_BYTES, SimulationConfig,
        validate_density, validate_dimension,
    };
    use std::time::Duration;

    fn parameter_of(result: Result<(), SimulationError>) -> &'static str {
        match result {
            Err(SimulationError::InvalidParameter { parameter, .. }) => parameter,
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests the default configuration is valid and describes a 25x25 grid
    // Verified by defaulting to zero rows
    #[test]
    fn test_defaults_are_valid() {
        let config = SimulationConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!((config.rows, config.cols), (DEFAULT_ROWS, DEFAULT_COLS));
        assert_eq!(config.dimensions_label(), "25x25");
        assert_eq!(config.step_delay(), Duration::ZERO);
    }

    // Tests dimension bounds
    // Verified by accepting zero
    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("rows", 1).is_ok());
        assert!(validate_dimension("rows", MAX_GRID_DIMENSION).is_ok());
        assert_eq!(parameter_of(validate_dimension("rows", 0)), "rows");
        assert_eq!(
            parameter_of(validate_dimension("cols", MAX_GRID_DIMENSION + 1)),
            "cols"
        );
    }

    // Tests density must be a probability
    // Verified by accepting NaN
    #[test]
    fn test_validate_density() {
        assert!(validate_density(0.0).is_ok());
        assert!(validate_density(1.0).is_ok());
        assert!(validate_density(0.35).is_ok());
        assert_eq!(parameter_of(validate_density(-0.1)), "density");
        assert_eq!(parameter_of(validate_density(1.5)), "density");
        assert_eq!(parameter_of(validate_density(f64::NAN)), "density");
    }

    // Tests validation reports the first offending field
    // Verified by validating cols before rows
    #[test]
    fn test_validate_reports_field() {
        let config = SimulationConfig {
            rows: 0,
            cols: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(parameter_of(config.validate()), "rows");

        let config = SimulationConfig {
            density: 2.0,
            ..SimulationConfig::default()
        };
        assert_eq!(parameter_of(config.validate()), "density");

        let config = SimulationConfig {
            stack_size: STACK_GUARD_BYTES,
            ..SimulationConfig::default()
        };
        assert_eq!(parameter_of(config.validate()), "stack_size");
    }

    // Tests the step delay conversion
    // Verified by interpreting the delay as seconds
    #[test]
    fn test_step_delay() {
        let config = SimulationConfig {
            step_delay_ms: 15,
            ..SimulationConfig::default()
        };
        assert_eq!(config.step_delay(), Duration::from_millis(15));
    }
}
