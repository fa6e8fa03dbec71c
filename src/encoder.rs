//! # Symbol Encoder
//!
//! Walks a codeset plan and emits the Code 128 symbol sequence: start token,
//! data values, switch/shift/FNC1 tokens, checksum and End.
//!
//! ```
//! use code128::encoder::encode;
//! use code128::optimizer::choose_codesets;
//! use code128::text::Text;
//!
//! let text: Text = "1234".parse()?;
//! let symbols = encode(&text, &choose_codesets(&text))?;
//! assert_eq!(symbols, vec![105, 12, 34, 82, 106]);
//! # Ok::<(), code128::Code128Error>(())
//! ```

use tracing::trace;

use crate::codeset::Codeset;
use crate::error::{Code128Error, Result};
use crate::symbol::{self, checksum};
use crate::text::Unit;

/// Encode `units` following `plan`, one codeset per unit.
///
/// After each unit (or digit pair) the plan entry at the new position is
/// compared with the active codeset and a switch token is emitted when they
/// differ. A unit the active A/B codeset cannot represent is emitted through
/// Shift with the other codeset's mapping.
///
/// # Errors
///
/// - [`Code128Error::EmptyText`] for empty input
/// - [`Code128Error::PlanLengthMismatch`] when the plan doesn't cover the text
/// - [`Code128Error::InvalidPlan`] when the plan needs a step no codeset can
///   take (codeset C on anything but a digit pair); plans from
///   [`choose_codesets`](crate::optimizer::choose_codesets) never do
pub fn encode(units: &[Unit], plan: &[Codeset]) -> Result<Vec<u8>> {
    let Some(&first) = plan.first() else {
        return Err(if units.is_empty() {
            Code128Error::EmptyText
        } else {
            Code128Error::PlanLengthMismatch {
                text: units.len(),
                plan: 0,
            }
        });
    };
    if plan.len() != units.len() {
        return Err(Code128Error::PlanLengthMismatch {
            text: units.len(),
            plan: plan.len(),
        });
    }

    let mut symbols = Vec::with_capacity(units.len() + 3);
    let mut current = first;
    let mut pos = 0;
    symbols.push(current.start_symbol());

    while pos < units.len() {
        pos += encode_step(units, pos, current, &mut symbols)?;

        if let Some(&next) = plan.get(pos) {
            if next != current {
                trace!(pos, from = %current, to = %next, "switch codeset");
                symbols.push(next.switch_symbol());
                current = next;
            }
        }
    }

    symbols.push(checksum(&symbols));
    symbols.push(symbol::END);
    Ok(symbols)
}

/// Emit the symbols for the unit at `pos`, returning how many units it used.
fn encode_step(units: &[Unit], pos: usize, current: Codeset, out: &mut Vec<u8>) -> Result<usize> {
    let invalid = || Code128Error::InvalidPlan {
        position: pos,
        codeset: current,
    };

    let code = match units[pos] {
        Unit::Fnc1 => {
            out.push(symbol::FNC1);
            return Ok(1);
        }
        Unit::Ascii(code) => code,
    };

    if current == Codeset::C {
        let value = units
            .get(pos + 1)
            .and_then(|&second| Codeset::pair_value(units[pos], second))
            .ok_or_else(invalid)?;
        out.push(value);
        return Ok(2);
    }

    if let Some(value) = current.data_value(code) {
        out.push(value);
        return Ok(1);
    }

    let value = current
        .shift_target()
        .and_then(|other| other.data_value(code))
        .ok_or_else(invalid)?;
    out.push(symbol::SHIFT);
    out.push(value);
    Ok(1)
}
