use std::fmt;

use crate::error::Result;
use crate::{BodyId, Num, System};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    EscapeVelocity,
    SurfaceGravity,
    ForceOfGravity,
    RevolutionPeriod,
    HumanWeight,
}

impl Formula {
    pub fn name(&self) -> &'static str {
        match self {
            Formula::EscapeVelocity => "Escape Velocity",
            Formula::SurfaceGravity => "Gravity",
            Formula::ForceOfGravity => "Fg",
            Formula::RevolutionPeriod => "Revolution",
            Formula::HumanWeight => "Human Weight",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Formula::EscapeVelocity => "m/s",
            Formula::SurfaceGravity => "m/s²",
            Formula::ForceOfGravity => "N",
            Formula::RevolutionPeriod => "days",
            Formula::HumanWeight => "lbf",
        }
    }
}

/// Derived quantities of one body, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub rows: Vec<(Formula, Num)>,
}

impl Readout {
    pub fn for_body(system: &System, id: BodyId) -> Result<Self> {
        let body = system.get(id)?;
        let mut rows = vec![
            (Formula::EscapeVelocity, body.escape_velocity()),
            (Formula::SurfaceGravity, body.surface_gravity()),
        ];

        if let Some(orbiting) = body.as_orbiting() {
            let parent_mass = system.parent_mass(id)?;
            rows.push((
                Formula::ForceOfGravity,
                orbiting.force_of_gravity(parent_mass),
            ));
            rows.push((
                Formula::RevolutionPeriod,
                orbiting.actual_revolution_period(parent_mass),
            ));
            rows.push((Formula::HumanWeight, orbiting.human_weight()));
        }

        Ok(Self { rows })
    }

    pub fn get(&self, formula: Formula) -> Option<Num> {
        self.rows
            .iter()
            .find(|(f, _)| *f == formula)
            .map(|(_, value)| *value)
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (formula, value) in &self.rows {
            writeln!(
                f,
                "{}: {} {}",
                formula.name(),
                format_quantity(*value),
                formula.unit()
            )?;
        }
        Ok(())
    }
}

fn superscript(digit: char) -> char {
    match digit {
        '0' => '\u{2070}',
        '1' => '\u{B9}',
        '2' => '\u{B2}',
        '3' => '\u{B3}',
        '4' => '\u{2074}',
        '5' => '\u{2075}',
        '6' => '\u{2076}',
        '7' => '\u{2077}',
        '8' => '\u{2078}',
        '9' => '\u{2079}',
        other => other,
    }
}

/// Formats a value for the formula table.
///
/// Magnitudes above 1000 become `d.dx10ⁿ`; the mantissa digits are
/// truncated, not rounded. Anything else keeps at most one decimal.
pub fn format_quantity(value: Num) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value.abs() > 1000.0 {
        let integral = format!("{:.0}", value.abs());
        let exponent: String = (integral.len() - 1).to_string().chars().map(superscript).collect();
        let mut digits = integral.chars();
        let first = digits.next().unwrap_or('0');
        let second = digits.next().unwrap_or('0');
        let sign = if value < 0.0 { "-" } else { "" };

        return format!("{sign}{first}.{second}x10{exponent}");
    }

    let short = format!("{value:.1}");
    let short = short.strip_suffix(".0").unwrap_or(&short);
    if short == "-0" {
        "0".to_owned()
    } else {
        short.to_owned()
    }
}
