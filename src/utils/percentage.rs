use std::{fmt::Display, ops::Deref, str::FromStr};

use anyhow::anyhow;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Percentage {
    pub const FULL: Percentage = Percentage(100.);

    pub fn new_opt(value: f64) -> Option<Percentage> {
        if value < 0. || value.is_nan() {
            None
        } else {
            Some(Percentage(value))
        }
    }
}

impl FromStr for Percentage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // This means that 100%% also works, but I think I'm fine with that
        let s = s.trim_end_matches("%");
        let v = s.parse::<f64>()?;
        Percentage::new_opt(v).ok_or_else(|| anyhow!("Can't parse {s} into percentage"))
    }
}

impl Deref for Percentage {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Progress towards a daily goal, capped at 100%. A goal that isn't positive counts as reached
/// once anything is logged.
pub fn goal_percentage(hours: f64, goal_hours: f64) -> Percentage {
    let ratio = if goal_hours > 0. {
        hours / goal_hours * 100.
    } else if hours > 0. {
        100.
    } else {
        0.
    };
    Percentage::new_opt(ratio.min(100.)).unwrap_or(Percentage(0.))
}

#[cfg(test)]
mod tests {
    use super::{goal_percentage, Percentage};

    #[test]
    fn test_parse_percentage() {
        assert_eq!(*"45%".parse::<Percentage>().unwrap(), 45.);
        assert_eq!(*"12.5".parse::<Percentage>().unwrap(), 12.5);
        assert!("-3".parse::<Percentage>().is_err());
        assert!("abc%".parse::<Percentage>().is_err());
    }

    #[test]
    fn test_goal_percentage() {
        assert_eq!(*goal_percentage(0.5, 2.), 25.);
        assert_eq!(goal_percentage(3., 2.), Percentage::FULL);
        assert_eq!(*goal_percentage(0., 1.), 0.);
        assert_eq!(*goal_percentage(-1., 1.), 0.);
        assert_eq!(goal_percentage(1., 0.), Percentage::FULL);
        assert_eq!(*goal_percentage(0., 0.), 0.);
    }
}
