//! Pre-run validation of the simulation config.
//!
//! Every field is checked before the day loop starts, so a bad config never
//! aborts a run halfway through.

use crate::domain::error::FarmError;
use crate::domain::holdings::{parse_holdings, parse_purchase};
use crate::ports::config_port::ConfigPort;

/// Render a holdings parse failure with its caret context so the offending
/// character is visible in the reported config error.
fn parse_reason(err: FarmError, input: &str) -> String {
    match err {
        FarmError::HoldingsParse(e) => format!("\n{}", e.display_with_context(input)),
        other => other.to_string(),
    }
}

pub fn validate_simulation_config(config: &dyn ConfigPort) -> Result<(), FarmError> {
    validate_days(config)?;
    validate_external_capacity(config)?;
    validate_pool_daily_reward(config)?;
    validate_starting_balance(config)?;
    validate_capacity_growth(config)?;
    validate_unit_price(config)?;
    validate_price_decay(config)?;
    validate_holdings(config)?;
    validate_purchase(config)?;
    validate_purchase_interval(config)?;
    validate_payout_ratio(config)?;
    Ok(())
}

fn invalid(section: &str, key: &str, reason: impl Into<String>) -> FarmError {
    FarmError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn validate_days(config: &dyn ConfigPort) -> Result<(), FarmError> {
    let value = config.get_int("simulation", "days", 0);
    if value < 1 {
        return Err(invalid("simulation", "days", "days must be at least 1"));
    }
    Ok(())
}

fn validate_external_capacity(config: &dyn ConfigPort) -> Result<(), FarmError> {
    let value = config.get_double("simulation", "external_capacity", 0.0);
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(
            "simulation",
            "external_capacity",
            "external_capacity must be positive",
        ));
    }
    Ok(())
}

fn validate_pool_daily_reward(config: &dyn ConfigPort) -> Result<(), FarmError> {
    let value = config.get_double("simulation", "pool_daily_reward", 0.0);
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(
            "simulation",
            "pool_daily_reward",
            "pool_daily_reward must be positive",
        ));
    }
    Ok(())
}

fn validate_starting_balance(config: &dyn ConfigPort) -> Result<(), FarmError> {
    let value = config.get_double("simulation", "starting_balance", 0.0);
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            "simulation",
            "starting_balance",
            "starting_balance must be finite and non-negative",
        ));
    }
    Ok(())
}

fn validate_capacity_growth(config: &dyn ConfigPort) -> Result<(), FarmError> {
    let value = config.get_double("simulation", "capacity_growth", 0.0);
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            "simulation",
            "capacity_growth",
            "capacity_growth must be non-negative",
        ));
    }
    Ok(())
}

fn validate_unit_price(config: &dyn ConfigPort) -> Result<(), FarmError> {
    let value = config.get_double("market", "zoon_usd", 0.0);
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid("market", "zoon_usd", "zoon_usd must be positive"));
    }
    Ok(())
}

fn validate_price_decay(config: &dyn ConfigPort) -> Result<(), FarmError> {
    let value = config.get_double("market", "price_decay_ratio", 0.0);
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(invalid(
            "market",
            "price_decay_ratio",
            "price_decay_ratio must be within 0..=1",
        ));
    }
    Ok(())
}

fn validate_holdings(config: &dyn ConfigPort) -> Result<(), FarmError> {
    let value = config
        .get_string("holdings", "zoans")
        .ok_or_else(|| FarmError::ConfigMissing {
            section: "holdings".to_string(),
            key: "zoans".to_string(),
        })?;
    parse_holdings(&value).map_err(|e| invalid("holdings", "zoans", parse_reason(e, &value)))?;
    Ok(())
}

fn validate_purchase(config: &dyn ConfigPort) -> Result<(), FarmError> {
    if let Some(value) = config.get_string("strategy", "purchase") {
        let template = parse_purchase(&value)
            .map_err(|e| invalid("strategy", "purchase", parse_reason(e, &value)))?;
        if template.price() == 0 {
            return Err(invalid(
                "strategy",
                "purchase",
                "purchase template price must be positive",
            ));
        }
    }
    Ok(())
}

fn validate_purchase_interval(config: &dyn ConfigPort) -> Result<(), FarmError> {
    let value = config.get_int("strategy", "purchase_interval", 1);
    if value < 1 {
        return Err(invalid(
            "strategy",
            "purchase_interval",
            "purchase_interval must be at least 1",
        ));
    }
    Ok(())
}

fn validate_payout_ratio(config: &dyn ConfigPort) -> Result<(), FarmError> {
    let value = config.get_double("strategy", "payout_ratio", 0.0);
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(invalid(
            "strategy",
            "payout_ratio",
            "payout_ratio must be within 0..=1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn valid_config() -> String {
        r#"
[simulation]
days = 180
external_capacity = 2064166400
pool_daily_reward = 1788500

[market]
zoon_usd = 0.01415

[holdings]
zoans = 2x1:300:2000, 24x1:400:1800, 1x2:1000:3800

[strategy]
purchase = 1:400:1800
purchase_interval = 1
"#
        .to_string()
    }

    fn adapter(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn accepts_the_reference_config() {
        assert!(validate_simulation_config(&adapter(&valid_config())).is_ok());
    }

    #[test]
    fn rejects_missing_days() {
        let content = valid_config().replace("days = 180", "");
        let err = validate_simulation_config(&adapter(&content)).unwrap_err();
        assert!(err.to_string().contains("days"));
    }

    #[test]
    fn rejects_non_positive_capacity() {
        let content = valid_config().replace(
            "external_capacity = 2064166400",
            "external_capacity = 0",
        );
        assert!(validate_simulation_config(&adapter(&content)).is_err());
    }

    #[test]
    fn rejects_non_positive_pool_reward() {
        let content =
            valid_config().replace("pool_daily_reward = 1788500", "pool_daily_reward = -1");
        assert!(validate_simulation_config(&adapter(&content)).is_err());
    }

    #[test]
    fn rejects_non_finite_starting_balance() {
        for bad in ["inf", "nan"] {
            let content = valid_config().replace(
                "pool_daily_reward = 1788500",
                &format!("pool_daily_reward = 1788500\nstarting_balance = {bad}"),
            );
            let err = validate_simulation_config(&adapter(&content)).unwrap_err();
            assert!(err.to_string().contains("starting_balance"), "{bad}");
        }
    }

    #[test]
    fn rejects_negative_starting_balance() {
        let content = valid_config().replace(
            "pool_daily_reward = 1788500",
            "pool_daily_reward = 1788500\nstarting_balance = -100",
        );
        assert!(validate_simulation_config(&adapter(&content)).is_err());
    }

    #[test]
    fn starting_balance_is_optional() {
        let content = valid_config().replace(
            "pool_daily_reward = 1788500",
            "pool_daily_reward = 1788500\nstarting_balance = 5000",
        );
        assert!(validate_simulation_config(&adapter(&content)).is_ok());
    }

    #[test]
    fn rejects_negative_capacity_growth() {
        let content = valid_config().replace(
            "pool_daily_reward = 1788500",
            "pool_daily_reward = 1788500\ncapacity_growth = -5",
        );
        assert!(validate_simulation_config(&adapter(&content)).is_err());
    }

    #[test]
    fn rejects_missing_holdings() {
        let content = valid_config().replace("zoans = 2x1:300:2000, 24x1:400:1800, 1x2:1000:3800", "");
        let err = validate_simulation_config(&adapter(&content)).unwrap_err();
        assert!(matches!(err, FarmError::ConfigMissing { .. }));
    }

    #[test]
    fn rejects_malformed_holdings() {
        let content = valid_config().replace("2x1:300:2000", "2x1;300;2000");
        assert!(validate_simulation_config(&adapter(&content)).is_err());
    }

    #[test]
    fn malformed_holdings_error_carries_caret_context() {
        let content = valid_config().replace("24x1:400:1800", "24x1:abc:1800");
        let err = validate_simulation_config(&adapter(&content)).unwrap_err();
        let rendered = err.to_string();

        // The full list is echoed with a caret under the bad experience field.
        assert!(rendered.contains("2x1:300:2000, 24x1:abc:1800, 1x2:1000:3800"));
        let caret_line = rendered
            .lines()
            .find(|l| l.trim_end().ends_with('^'))
            .expect("caret line in rendered error");
        assert_eq!(caret_line.len() - 1, "2x1:300:2000, 24x1:".len());
        assert!(rendered.contains("invalid experience 'abc'"));
    }

    #[test]
    fn malformed_purchase_error_carries_caret_context() {
        let content = valid_config().replace("purchase = 1:400:1800", "purchase = 1:400:18k0");
        let err = validate_simulation_config(&adapter(&content)).unwrap_err();
        let rendered = err.to_string();

        assert!(rendered.contains("1:400:18k0"));
        assert!(rendered.lines().any(|l| l.trim_end().ends_with('^')));
        assert!(rendered.contains("invalid price '18k0'"));
    }

    #[test]
    fn purchase_is_optional() {
        let content = valid_config().replace("purchase = 1:400:1800", "");
        assert!(validate_simulation_config(&adapter(&content)).is_ok());
    }

    #[test]
    fn rejects_zero_purchase_interval() {
        let content = valid_config().replace("purchase_interval = 1", "purchase_interval = 0");
        assert!(validate_simulation_config(&adapter(&content)).is_err());
    }

    #[test]
    fn rejects_out_of_range_payout_ratio() {
        let content = valid_config().replace(
            "purchase_interval = 1",
            "purchase_interval = 1\npayout_ratio = 1.5",
        );
        assert!(validate_simulation_config(&adapter(&content)).is_err());
    }

    #[test]
    fn rejects_out_of_range_price_decay() {
        let content = valid_config().replace(
            "zoon_usd = 0.01415",
            "zoon_usd = 0.01415\nprice_decay_ratio = 2",
        );
        assert!(validate_simulation_config(&adapter(&content)).is_err());
    }
}
