//! Parsing of holdings lists and purchase templates from configuration.
//!
//! A holdings list is comma-separated entries of the form `COUNTxRARITY:EXP:PRICE`,
//! e.g. `2x1:300:2000, 24x1:400:1800, 1x2:1000:3800`. The `COUNTx` prefix is
//! optional and defaults to 1. A purchase template is a single entry without
//! the count prefix.

use super::error::{FarmError, HoldingsParseError};
use super::zoan::Zoan;

/// Parse a full holdings list into the seed assets, in list order.
pub fn parse_holdings(input: &str) -> Result<Vec<Zoan>, FarmError> {
    let mut zoans = Vec::new();
    let mut offset = 0;

    for raw in input.split(',') {
        let leading = raw.len() - raw.trim_start().len();
        let token = raw.trim();
        let pos = offset + leading;

        if token.is_empty() {
            return Err(HoldingsParseError {
                message: "empty holdings entry".to_string(),
                position: pos,
            }
            .into());
        }

        let (count, spec, spec_pos) = match token.split_once('x') {
            Some((n, rest)) => {
                let count: u32 = n.parse().map_err(|_| HoldingsParseError {
                    message: format!("invalid count '{n}'"),
                    position: pos,
                })?;
                if count == 0 {
                    return Err(HoldingsParseError {
                        message: "count must be at least 1".to_string(),
                        position: pos,
                    }
                    .into());
                }
                (count, rest, pos + n.len() + 1)
            }
            None => (1, token, pos),
        };

        let template = parse_spec(spec, spec_pos)?;
        for _ in 0..count {
            zoans.push(template.clone());
        }

        offset += raw.len() + 1;
    }

    Ok(zoans)
}

/// Parse a single `RARITY:EXP:PRICE` purchase template.
pub fn parse_purchase(input: &str) -> Result<Zoan, FarmError> {
    let leading = input.len() - input.trim_start().len();
    let token = input.trim();
    if token.contains('x') {
        return Err(HoldingsParseError {
            message: "purchase template takes no count prefix".to_string(),
            position: leading,
        }
        .into());
    }
    Ok(parse_spec(token, leading)?)
}

fn parse_spec(spec: &str, pos: usize) -> Result<Zoan, HoldingsParseError> {
    let mut fields = spec.split(':');
    let rarity_str = fields.next().unwrap_or("");
    let exp_str = fields.next().unwrap_or("");
    let price_str = fields.next().unwrap_or("");
    if fields.next().is_some() || price_str.is_empty() {
        return Err(HoldingsParseError {
            message: format!("expected RARITY:EXP:PRICE, got '{spec}'"),
            position: pos,
        });
    }

    let rarity: u8 = rarity_str.parse().map_err(|_| HoldingsParseError {
        message: format!("invalid rarity '{rarity_str}'"),
        position: pos,
    })?;
    let exp: f64 = exp_str.parse().map_err(|_| HoldingsParseError {
        message: format!("invalid experience '{exp_str}'"),
        position: pos + rarity_str.len() + 1,
    })?;
    let price: u64 = price_str.parse().map_err(|_| HoldingsParseError {
        message: format!("invalid price '{price_str}'"),
        position: pos + rarity_str.len() + exp_str.len() + 2,
    })?;

    Zoan::from_experience(rarity, exp, price).map_err(|e| HoldingsParseError {
        message: e.to_string(),
        position: pos,
    })
}
