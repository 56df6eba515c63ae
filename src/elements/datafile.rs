//! Reader for custom element data files.
//!
//! A data file is a sequence of `Atom` blocks, each made of `Key : value`
//! lines:
//!
//! ```text
//! Atom
//! ====================
//! Number                : 1
//! Name                  : Hydrogen
//! Short name            : H
//! Color                 : 1.0,1.0,1.0
//! Radius used           : 0.32
//! Radius, covalent      : 0.32
//! Radius, atomic        : 0.79
//! Charge state          : -1
//! Radius, ionic         : 1.54
//! ```
//!
//! `Charge state` / `Radius, ionic` may repeat. Separator lines made of `=`
//! and blank lines are ignored.

use std::str::FromStr;

use super::ElementProp;
use crate::error::ImportError;

#[derive(Default)]
struct Draft {
    start_line: usize,
    number: Option<u32>,
    name: Option<String>,
    short_name: Option<String>,
    color: Option<[f32; 4]>,
    radii: [Option<f32>; 3],
    pending_charge: Option<i32>,
    ionic_radii: Vec<(i32, f32)>,
}

impl Draft {
    fn finish(self) -> Result<ElementProp, ImportError> {
        let start = self.start_line;
        let short_name = self.short_name.ok_or_else(|| {
            ImportError::element_data(start, "block has no short name")
        })?;
        let used = self.radii[0].unwrap_or(1.0);
        Ok(ElementProp {
            number: self.number.unwrap_or(0),
            name: self.name.unwrap_or_else(|| short_name.clone()),
            short_name,
            color: self.color.unwrap_or([1.0, 1.0, 1.0, 1.0]),
            radii: [
                used,
                self.radii[1].unwrap_or(used),
                self.radii[2].unwrap_or(used),
            ],
            ionic_radii: self.ionic_radii,
        })
    }
}

/// Parse the contents of an element data file.
pub fn parse(content: &str) -> Result<Vec<ElementProp>, ImportError> {
    let mut elements = Vec::new();
    let mut draft: Option<Draft> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.chars().all(|c| c == '=') {
            continue;
        }
        if line.eq_ignore_ascii_case("atom") {
            if let Some(done) = draft.take() {
                elements.push(done.finish()?);
            }
            draft = Some(Draft {
                start_line: line_num,
                ..Draft::default()
            });
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(ImportError::element_data(
                line_num,
                format!("expected `key : value`, got `{line}`"),
            ));
        };
        let Some(current) = draft.as_mut() else {
            return Err(ImportError::element_data(
                line_num,
                "entry outside of an `Atom` block",
            ));
        };
        apply(current, key.trim(), value.trim(), line_num)?;
    }

    if let Some(done) = draft {
        elements.push(done.finish()?);
    }
    Ok(elements)
}

fn apply(
    draft: &mut Draft,
    key: &str,
    value: &str,
    line: usize,
) -> Result<(), ImportError> {
    match key.to_lowercase().as_str() {
        "number" => draft.number = Some(number(value, line)?),
        "name" => draft.name = Some(value.to_owned()),
        "short name" => draft.short_name = Some(value.to_owned()),
        "color" => draft.color = Some(color(value, line)?),
        "radius used" => draft.radii[0] = Some(number(value, line)?),
        "radius, covalent" => draft.radii[1] = Some(number(value, line)?),
        "radius, atomic" => draft.radii[2] = Some(number(value, line)?),
        "charge state" => draft.pending_charge = Some(number(value, line)?),
        "radius, ionic" => {
            let charge = draft.pending_charge.take().ok_or_else(|| {
                ImportError::element_data(
                    line,
                    "ionic radius without a preceding charge state",
                )
            })?;
            draft.ionic_radii.push((charge, number(value, line)?));
        }
        other => {
            log::debug!("ignoring element data key `{other}` (line {line})");
        }
    }
    Ok(())
}

fn number<T: FromStr>(value: &str, line: usize) -> Result<T, ImportError> {
    value.parse().map_err(|_| {
        ImportError::element_data(line, format!("invalid number `{value}`"))
    })
}

fn color(value: &str, line: usize) -> Result<[f32; 4], ImportError> {
    let parts = value
        .split(',')
        .map(|p| number::<f32>(p.trim(), line))
        .collect::<Result<Vec<_>, _>>()?;
    match parts.as_slice() {
        [r, g, b] => Ok([*r, *g, *b, 1.0]),
        [r, g, b, a] => Ok([*r, *g, *b, *a]),
        _ => Err(ImportError::element_data(
            line,
            format!("color needs 3 or 4 components, got {}", parts.len()),
        )),
    }
}
