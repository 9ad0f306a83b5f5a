use crate::model::Parameters;
use anyhow::{bail, Result};

/// Names of the built-in parameter presets, in menu order.
pub const PRESET_NAMES: [&str; 4] = ["species1", "species2", "unstable", "stable"];

/// Looks up a built-in scenario by name.
///
/// `species1`/`species2`: competitive exclusion won by the named species.
/// `unstable`: strong mutual competition, coexistence equilibrium is a
/// saddle. `stable`: weak mutual competition, coexistence is attracting.
pub fn preset(name: &str) -> Result<Parameters> {
    let params = match name {
        "species1" => Parameters {
            r1: 1.0,
            r2: 1.0,
            k1: 130.0,
            k2: 90.0,
            a12: 0.6,
            a21: 1.4,
            n10: 30.0,
            n20: 30.0,
            t_max: 60.0,
            dt: 0.05,
        },
        "species2" => Parameters {
            r1: 1.0,
            r2: 1.0,
            k1: 90.0,
            k2: 130.0,
            a12: 1.4,
            a21: 0.6,
            n10: 30.0,
            n20: 30.0,
            t_max: 60.0,
            dt: 0.05,
        },
        "unstable" => Parameters {
            r1: 1.0,
            r2: 1.0,
            k1: 120.0,
            k2: 120.0,
            a12: 1.4,
            a21: 1.4,
            n10: 25.0,
            n20: 25.0,
            t_max: 60.0,
            dt: 0.05,
        },
        "stable" => Parameters {
            r1: 1.0,
            r2: 1.0,
            k1: 120.0,
            k2: 120.0,
            a12: 0.7,
            a21: 0.7,
            n10: 25.0,
            n20: 25.0,
            t_max: 60.0,
            dt: 0.05,
        },
        _ => bail!("Unknown preset: {name}"),
    };
    Ok(params)
}
